//! Iterators over the elements of a [`GapBuffer`] and of its views.
//!
//! All of them walk the elements before the gap, then the ones after it. They
//! are double-ended and know exactly how many elements are left, which
//! [`core::iter::Chain`] can't report.

use core::iter::FusedIterator;
use core::slice;

use super::GapBuffer;

/// An iterator over the elements of a [`GapBuffer`] or of a
/// [`View`](super::View).
///
/// This struct is created by [`GapBuffer::iter()`] and
/// [`View::iter()`](super::View::iter()).
#[derive(Clone)]
pub struct Iter<'a, T> {
    left: slice::Iter<'a, T>,
    right: slice::Iter<'a, T>,
}

impl<T: core::fmt::Debug> core::fmt::Debug for Iter<'_, T> {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_tuple("Iter")
            .field(&self.left.as_slice())
            .field(&self.right.as_slice())
            .finish()
    }
}

impl<'a, T> Iter<'a, T> {
    #[inline]
    pub(super) fn new(left: &'a [T], right: &'a [T]) -> Self {
        Self { left: left.iter(), right: right.iter() }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.left.next().or_else(|| self.right.next())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let exact = self.len();
        (exact, Some(exact))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.right.next_back().or_else(|| self.left.next_back())
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.left.len() + self.right.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

/// An iterator yielding mutable references to the elements of a
/// [`GapBuffer`] or of a [`ViewMut`](super::ViewMut).
///
/// This struct is created by [`GapBuffer::iter_mut()`] and
/// [`ViewMut::iter_mut()`](super::ViewMut::iter_mut()).
pub struct IterMut<'a, T> {
    left: slice::IterMut<'a, T>,
    right: slice::IterMut<'a, T>,
}

impl<T: core::fmt::Debug> core::fmt::Debug for IterMut<'_, T> {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_tuple("IterMut")
            .field(&self.left.as_slice())
            .field(&self.right.as_slice())
            .finish()
    }
}

impl<'a, T> IterMut<'a, T> {
    #[inline]
    pub(super) fn new(left: &'a mut [T], right: &'a mut [T]) -> Self {
        Self { left: left.iter_mut(), right: right.iter_mut() }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.left.next().or_else(|| self.right.next())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let exact = self.len();
        (exact, Some(exact))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.right.next_back().or_else(|| self.left.next_back())
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.left.len() + self.right.len()
    }
}

impl<T> FusedIterator for IterMut<'_, T> {}

/// An owning iterator over the elements of a [`GapBuffer`].
///
/// This struct is created by the `into_iter` method on [`GapBuffer`].
#[derive(Clone)]
pub struct IntoIter<T: Copy> {
    buffer: GapBuffer<T>,
    front: usize,
    back: usize,
}

impl<T: Copy + core::fmt::Debug> core::fmt::Debug for IntoIter<T> {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_list()
            .entries((self.front..self.back).map(|idx| &self.buffer[idx]))
            .finish()
    }
}

impl<T: Copy> IntoIter<T> {
    #[inline]
    pub(super) fn new(buffer: GapBuffer<T>) -> Self {
        let back = buffer.len();
        Self { buffer, front: 0, back }
    }
}

impl<T: Copy> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let element = self.buffer[self.front];
        self.front += 1;
        Some(element)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let exact = self.len();
        (exact, Some(exact))
    }
}

impl<T: Copy> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.buffer[self.back])
    }
}

impl<T: Copy> ExactSizeIterator for IntoIter<T> {
    #[inline]
    fn len(&self) -> usize {
        self.back - self.front
    }
}

impl<T: Copy> FusedIterator for IntoIter<T> {}
