//! Views over the content of a [`GapBuffer`](super::GapBuffer).
//!
//! Both views are two slices, the elements before and after the gap, glued
//! together lazily. Nothing is copied when a view is created.

use alloc::vec::Vec;

use super::iterators::{Iter, IterMut};

/// A read-only view over the content of a [`GapBuffer`](super::GapBuffer).
///
/// A `View` is to a `GapBuffer` what a `&[T]` is to a `Vec<T>`, except the
/// elements are split in two halves around the gap. It's `Copy`, so it can be
/// iterated over as many times as needed.
#[derive(Copy, Clone)]
pub struct View<'a, T> {
    left: &'a [T],
    right: &'a [T],
}

impl<T: core::fmt::Debug> core::fmt::Debug for View<'_, T> {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for View<'_, T> {
    #[inline]
    fn default() -> Self {
        Self { left: &[], right: &[] }
    }
}

impl<'a, T> View<'a, T> {
    #[inline]
    pub(super) fn new(left: &'a [T], right: &'a [T]) -> Self {
        Self { left, right }
    }

    /// Returns the elements before and after the gap.
    #[inline]
    pub fn as_slices(&self) -> (&'a [T], &'a [T]) {
        (self.left, self.right)
    }

    /// Returns the first element, or `None` if the view is empty.
    #[inline]
    pub fn first(&self) -> Option<&'a T> {
        self.left.first().or_else(|| self.right.first())
    }

    /// Returns the element at `index`, or `None` if it's out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gap_buffer::GapBuffer;
    /// let mut buffer = GapBuffer::from([1, 2, 3]);
    /// buffer.set_cursor(1);
    ///
    /// let view = buffer.view();
    /// assert_eq!(view.get(0), Some(&1));
    /// assert_eq!(view.get(2), Some(&3));
    /// assert_eq!(view.get(3), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&'a T> {
        if index < self.left.len() {
            self.left.get(index)
        } else {
            self.right.get(index - self.left.len())
        }
    }

    /// Returns `true` if the view has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the elements of the view.
    #[inline]
    pub fn iter(&self) -> Iter<'a, T> {
        Iter::new(self.left, self.right)
    }

    /// Returns the last element, or `None` if the view is empty.
    #[inline]
    pub fn last(&self) -> Option<&'a T> {
        self.right.last().or_else(|| self.left.last())
    }

    /// Returns the number of elements in the view.
    #[inline]
    pub fn len(&self) -> usize {
        self.left.len() + self.right.len()
    }

    /// Copies the elements of the view into a new `Vec`.
    #[inline]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut vec = Vec::with_capacity(self.len());
        vec.extend_from_slice(self.left);
        vec.extend_from_slice(self.right);
        vec
    }

    /// Returns whether the elements of the view are, in order, the elements
    /// of `slice`.
    #[inline]
    fn eq_slice<U>(&self, slice: &[U]) -> bool
    where
        T: PartialEq<U>,
    {
        self.len() == slice.len()
            && *self.left == slice[..self.left.len()]
            && *self.right == slice[self.left.len()..]
    }
}

impl<'a, T> IntoIterator for View<'a, T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &View<'a, T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for View<'_, T> {
    #[inline]
    fn eq(&self, rhs: &Self) -> bool {
        self.len() == rhs.len() && self.iter().eq(rhs.iter())
    }
}

impl<T: Eq> Eq for View<'_, T> {}

impl<T: PartialEq> PartialEq<[T]> for View<'_, T> {
    #[inline]
    fn eq(&self, rhs: &[T]) -> bool {
        self.eq_slice(rhs)
    }
}

impl<T: PartialEq> PartialEq<&[T]> for View<'_, T> {
    #[inline]
    fn eq(&self, rhs: &&[T]) -> bool {
        self.eq_slice(rhs)
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for View<'_, T> {
    #[inline]
    fn eq(&self, rhs: &[T; N]) -> bool {
        self.eq_slice(rhs.as_slice())
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for View<'_, T> {
    #[inline]
    fn eq(&self, rhs: &Vec<T>) -> bool {
        self.eq_slice(rhs)
    }
}

impl PartialEq<str> for View<'_, u8> {
    #[inline]
    fn eq(&self, rhs: &str) -> bool {
        self.eq_slice(rhs.as_bytes())
    }
}

impl PartialEq<&str> for View<'_, u8> {
    #[inline]
    fn eq(&self, rhs: &&str) -> bool {
        self.eq_slice(rhs.as_bytes())
    }
}

// We only need these to compare `&str`s with `View`s in tests.
impl PartialEq<View<'_, u8>> for &str {
    #[inline]
    fn eq(&self, rhs: &View<'_, u8>) -> bool {
        rhs == self
    }
}

impl PartialEq<View<'_, u8>> for str {
    #[inline]
    fn eq(&self, rhs: &View<'_, u8>) -> bool {
        rhs == self
    }
}

/// A view through which the elements of a [`GapBuffer`](super::GapBuffer)
/// can be modified in place.
///
/// Only the values can change: the view can't insert or remove elements.
pub struct ViewMut<'a, T> {
    left: &'a mut [T],
    right: &'a mut [T],
}

impl<T: core::fmt::Debug> core::fmt::Debug for ViewMut<'_, T> {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> ViewMut<'a, T> {
    #[inline]
    pub(super) fn new(left: &'a mut [T], right: &'a mut [T]) -> Self {
        Self { left, right }
    }

    /// Returns the elements before and after the gap.
    #[inline]
    pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        (&mut *self.left, &mut *self.right)
    }

    /// Reborrows this view as a read-only [`View`].
    #[inline]
    pub fn as_view(&self) -> View<'_, T> {
        View::new(&*self.left, &*self.right)
    }

    /// Returns the element at `index`, or `None` if it's out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_view().get(index)
    }

    /// Returns a mutable reference to the element at `index`, or `None` if
    /// it's out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gap_buffer::GapBuffer;
    /// let mut buffer = GapBuffer::from([1, 2, 3]);
    /// buffer.set_cursor(1);
    ///
    /// let mut view = buffer.view_mut();
    /// *view.get_mut(2).unwrap() = 30;
    ///
    /// assert_eq!(buffer, [1, 2, 30]);
    /// ```
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let len_left = self.left.len();
        if index < len_left {
            self.left.get_mut(index)
        } else {
            self.right.get_mut(index - len_left)
        }
    }

    /// Returns `true` if the view has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the elements of the view.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.as_view().iter()
    }

    /// Returns an iterator yielding mutable references to the elements of
    /// the view.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(&mut *self.left, &mut *self.right)
    }

    /// Returns the number of elements in the view.
    #[inline]
    pub fn len(&self) -> usize {
        self.left.len() + self.right.len()
    }
}

impl<'a, T> IntoIterator for ViewMut<'a, T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IterMut::new(self.left, self.right)
    }
}

impl<T: PartialEq> PartialEq<[T]> for ViewMut<'_, T> {
    #[inline]
    fn eq(&self, rhs: &[T]) -> bool {
        self.as_view() == *rhs
    }
}
