//! This module exports the [`GapBuffer`] struct together with its growth
//! policy and the algorithm that moves the gap around.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::mem::MaybeUninit;
use core::ops::{Index, IndexMut};

use super::iterators::{IntoIter, Iter, IterMut};
use super::utils::{
    assume_init,
    assume_init_mut,
    panic_messages as panic,
    write_slots,
};
use super::view::{View, ViewMut};

/// A growable [gap buffer] holding elements of type `T`.
///
/// Unlike a `Vec` where the spare capacity sits after the last element, a
/// `GapBuffer` keeps its spare capacity in a single window, the gap, located
/// at the edit cursor. Insertions and deletions at the cursor only move the
/// gap's boundaries, so edits clustered around the same position are cheap.
/// Editing somewhere else first moves the gap there, which costs time
/// proportional to the distance travelled.
///
/// The backing store has a capacity of [`capacity()`](Self::capacity()) slots.
/// The first [`cursor()`](Self::cursor()) slots and the slots after the gap
/// hold the buffer's content, the [`gap_len()`](Self::gap_len()) slots in
/// between are unused.
///
/// ```text
///            cursor
///              |
///              v
/// [ a  b  c  d ~  ~  ~  ~  e  f ]
///  '----------''----------''----'
///     left         gap     right
/// ```
///
/// When an insertion needs more room than the gap provides the store is
/// reallocated to `2 * max(needed, capacity)` slots, which makes appending
/// amortized O(1).
///
/// # Examples
///
/// ```
/// # use gap_buffer::GapBuffer;
/// let mut buffer = GapBuffer::<u8>::new();
///
/// buffer.push_back("gap buffer");
/// buffer.insert_at_cursor(" abc");
/// buffer.push_front("--- ");
///
/// assert_eq!(buffer, "--- gap buffer abc");
/// assert_eq!(buffer.cursor(), 4);
///
/// buffer.remove_prefix(4).remove_suffix(4);
/// assert_eq!(buffer.view(), "gap buffer");
/// ```
///
/// Every mutating method returns `&mut Self`, so calls can be chained.
///
/// [gap buffer]: https://en.wikipedia.org/wiki/Gap_buffer
pub struct GapBuffer<T> {
    /// The backing store. Its length is the buffer's capacity and it never
    /// shrinks.
    slots: Vec<MaybeUninit<T>>,

    /// The first slot of the gap. Also the cursor.
    gap_start: usize,

    /// One past the last slot of the gap.
    gap_end: usize,
}

impl<T> GapBuffer<T> {
    /// Creates a new, empty `GapBuffer`.
    ///
    /// It doesn't allocate until elements are inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gap_buffer::GapBuffer;
    /// let buffer = GapBuffer::<i32>::new();
    ///
    /// assert!(buffer.is_empty());
    /// assert_eq!(buffer.len(), 0);
    /// assert_eq!(buffer.capacity(), 0);
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self { slots: Vec::new(), gap_start: 0, gap_end: 0 }
    }

    /// Creates a new, empty `GapBuffer` with room for exactly `capacity`
    /// elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gap_buffer::GapBuffer;
    /// let buffer = GapBuffer::<i32>::with_capacity(16);
    ///
    /// assert!(buffer.is_empty());
    /// assert_eq!(buffer.capacity(), 16);
    /// assert_eq!(buffer.gap_len(), 16);
    /// ```
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, MaybeUninit::uninit);
        Self { slots, gap_start: 0, gap_end: capacity }
    }

    /// Panics if any of the buffer's structural invariants is broken.
    ///
    /// This is only useful in tests and fuzzing.
    #[track_caller]
    pub fn assert_invariants(&self) {
        assert!(
            self.gap_start <= self.gap_end,
            "gap starts at {} but ends at {}",
            self.gap_start,
            self.gap_end
        );

        assert!(
            self.gap_end <= self.capacity(),
            "gap ends at {} but the capacity is {}",
            self.gap_end,
            self.capacity()
        );

        assert_eq!(self.len() + self.gap_len(), self.capacity());

        assert!(self.cursor() <= self.len());
    }

    /// Returns the two halves of the buffer's content, i.e. the elements
    /// before and after the gap.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gap_buffer::GapBuffer;
    /// let mut buffer = GapBuffer::from([1, 2, 3, 4]);
    /// buffer.set_cursor(1);
    ///
    /// assert_eq!(buffer.as_slices(), (&[1][..], &[2, 3, 4][..]));
    /// ```
    #[inline]
    pub fn as_slices(&self) -> (&[T], &[T]) {
        let (left, rest) = self.slots.split_at(self.gap_start);
        let right = &rest[self.gap_len()..];

        // SAFETY: every slot outside of the gap is initialized.
        unsafe { (assume_init(left), assume_init(right)) }
    }

    /// Mutable version of [`as_slices()`](Self::as_slices()).
    #[inline]
    pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        let gap_len = self.gap_len();
        let (left, rest) = self.slots.split_at_mut(self.gap_start);
        let right = &mut rest[gap_len..];

        // SAFETY: every slot outside of the gap is initialized.
        unsafe { (assume_init_mut(left), assume_init_mut(right)) }
    }

    /// Returns the number of elements the buffer can hold without
    /// reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the position of the edit cursor, i.e. the index at which
    /// [`insert_at_cursor()`](Self::insert_at_cursor()) places new elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gap_buffer::GapBuffer;
    /// let mut buffer = GapBuffer::<u8>::new();
    ///
    /// buffer.push_front("gap buffer");
    /// assert_eq!(buffer.cursor(), 10);
    ///
    /// buffer.remove(3, 2);
    /// assert_eq!(buffer.cursor(), 3);
    /// ```
    #[inline]
    pub fn cursor(&self) -> usize {
        self.gap_start
    }

    /// Same as [`len()`](Self::len()).
    #[inline]
    pub fn size(&self) -> usize {
        self.len()
    }

    /// Same as [`is_empty()`](Self::is_empty()).
    #[inline]
    pub fn empty(&self) -> bool {
        self.is_empty()
    }

    /// Returns the number of unused slots between the two halves of the
    /// content.
    #[inline]
    pub fn gap_len(&self) -> usize {
        self.gap_end - self.gap_start
    }

    /// Returns a reference to the element at `index`, or `None` if it's out
    /// of bounds.
    ///
    /// Indices are logical: the position of the gap doesn't matter.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gap_buffer::GapBuffer;
    /// let mut buffer = GapBuffer::from([1, 2, 3, 4]);
    /// buffer.set_cursor(2);
    ///
    /// assert_eq!(buffer.get(2), Some(&3));
    /// assert_eq!(buffer.get(4), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        let slot = self.slot_of_index(index)?;
        // SAFETY: `slot_of_index` only returns slots outside of the gap.
        Some(unsafe { self.slots[slot].assume_init_ref() })
    }

    /// Returns a mutable reference to the element at `index`, or `None` if
    /// it's out of bounds.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let slot = self.slot_of_index(index)?;
        // SAFETY: `slot_of_index` only returns slots outside of the gap.
        Some(unsafe { self.slots[slot].assume_init_mut() })
    }

    /// Returns `true` if the buffer contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the elements of the buffer, in logical order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        let (left, right) = self.as_slices();
        Iter::new(left, right)
    }

    /// Returns an iterator yielding mutable references to the elements of
    /// the buffer, in logical order.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let (left, right) = self.as_mut_slices();
        IterMut::new(left, right)
    }

    /// Returns the number of elements in the buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.capacity() - self.gap_len()
    }

    /// Returns a read-only view over the buffer's content.
    ///
    /// The view presents the two halves around the gap as one sequence
    /// without copying them. It borrows the buffer, so it can't outlive the
    /// next call that changes the buffer's structure.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gap_buffer::GapBuffer;
    /// let mut buffer = GapBuffer::from([3, 4]);
    /// buffer.push_front([1, 2]);
    ///
    /// let view = buffer.view();
    /// assert_eq!(view, [1, 2, 3, 4]);
    /// assert_eq!(view.iter().rev().next(), Some(&4));
    /// ```
    #[inline]
    pub fn view(&self) -> View<'_, T> {
        let (left, right) = self.as_slices();
        View::new(left, right)
    }

    /// Returns a view through which the buffer's elements can be modified in
    /// place.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gap_buffer::GapBuffer;
    /// let mut buffer = GapBuffer::from([1, 2, 3]);
    /// buffer.set_cursor(1);
    ///
    /// for element in buffer.view_mut() {
    ///     *element *= 10;
    /// }
    ///
    /// assert_eq!(buffer, [10, 20, 30]);
    /// ```
    #[inline]
    pub fn view_mut(&mut self) -> ViewMut<'_, T> {
        let (left, right) = self.as_mut_slices();
        ViewMut::new(left, right)
    }

    /// Maps a logical index to the slot holding that element.
    #[inline]
    fn slot_of_index(&self, index: usize) -> Option<usize> {
        if index < self.gap_start {
            Some(index)
        } else if index < self.len() {
            Some(index + self.gap_len())
        } else {
            None
        }
    }
}

impl<T: Copy> GapBuffer<T> {
    /// Returns the last element of the buffer.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gap_buffer::GapBuffer;
    /// let mut buffer = GapBuffer::<u8>::from("gap buffer");
    ///
    /// buffer.set_cursor(buffer.len());
    /// assert_eq!(buffer.back(), b'r');
    ///
    /// buffer.set_cursor(0);
    /// assert_eq!(buffer.back(), b'r');
    /// ```
    #[track_caller]
    #[inline]
    pub fn back(&self) -> T {
        match self.view().last() {
            Some(&last) => last,
            None => panic::empty_access("back"),
        }
    }

    /// Removes every element, leaving the capacity untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gap_buffer::GapBuffer;
    /// let mut buffer = GapBuffer::<u8>::new();
    ///
    /// buffer.push_back("gap buffer").clear();
    ///
    /// assert!(buffer.is_empty());
    /// assert_eq!(buffer.cursor(), 0);
    /// assert!(buffer.capacity() >= 10);
    /// ```
    #[inline]
    pub fn clear(&mut self) -> &mut Self {
        self.gap_start = 0;
        self.gap_end = self.capacity();
        self
    }

    /// Returns the first element of the buffer.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is empty.
    #[track_caller]
    #[inline]
    pub fn front(&self) -> T {
        match self.view().first() {
            Some(&first) => first,
            None => panic::empty_access("front"),
        }
    }

    /// Inserts `data` so that its first element ends up at `index`, leaving
    /// the cursor right after the last inserted element.
    ///
    /// The gap is first grown if it can't fit `data`, then moved to `index`.
    /// Runs in amortized O(`data.len()` + |`index` - `cursor`|).
    ///
    /// # Panics
    ///
    /// Panics if `index` is greater than the buffer's length.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gap_buffer::GapBuffer;
    /// let mut buffer = GapBuffer::<u8>::from("gap buffer");
    ///
    /// buffer.insert(4, "big ");
    /// assert_eq!(buffer, "gap big buffer");
    /// assert_eq!(buffer.cursor(), 8);
    ///
    /// // A single element can be inserted as a one element array, or with
    /// // `insert_one()`.
    /// buffer.insert(0, [b'>']);
    /// assert_eq!(buffer, ">gap big buffer");
    /// ```
    #[track_caller]
    #[inline]
    pub fn insert(
        &mut self,
        index: usize,
        data: impl AsRef<[T]>,
    ) -> &mut Self {
        if index > self.len() {
            panic::offset_out_of_bounds(index, self.len());
        }

        let data = data.as_ref();

        if data.len() > self.gap_len() {
            self.grow(data.len());
        }

        self.move_gap(index);

        let start = self.gap_start;
        write_slots(&mut self.slots[start..start + data.len()], data);
        self.gap_start += data.len();

        self
    }

    /// Inserts `data` at the cursor without moving the gap first.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gap_buffer::GapBuffer;
    /// let mut buffer = GapBuffer::<u8>::new();
    ///
    /// buffer.push_front("gap buffer");
    /// buffer.insert_at_cursor(" abc");
    ///
    /// assert_eq!(buffer, "gap buffer abc");
    /// ```
    #[inline]
    pub fn insert_at_cursor(&mut self, data: impl AsRef<[T]>) -> &mut Self {
        self.insert(self.gap_start, data)
    }

    /// Inserts a single `element` at `index`, leaving the cursor right after
    /// it.
    ///
    /// # Panics
    ///
    /// Panics if `index` is greater than the buffer's length.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gap_buffer::GapBuffer;
    /// let mut buffer = GapBuffer::<u8>::from("gap buffer");
    ///
    /// buffer.insert_one(3, b'!');
    /// assert_eq!(buffer, "gap! buffer");
    /// assert_eq!(buffer.cursor(), 4);
    /// ```
    #[track_caller]
    #[inline]
    pub fn insert_one(&mut self, index: usize, element: T) -> &mut Self {
        self.insert(index, core::slice::from_ref(&element))
    }

    /// Parks the gap after the last element and returns the whole content as
    /// a single slice.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gap_buffer::GapBuffer;
    /// let mut buffer = GapBuffer::from([1, 2, 3]);
    /// buffer.set_cursor(1);
    ///
    /// buffer.make_contiguous().reverse();
    /// assert_eq!(buffer, [3, 2, 1]);
    /// ```
    #[inline]
    pub fn make_contiguous(&mut self) -> &mut [T] {
        self.move_gap(self.len());
        self.as_mut_slices().0
    }

    /// Inserts `data` at the end of the buffer.
    #[track_caller]
    #[inline]
    pub fn push_back(&mut self, data: impl AsRef<[T]>) -> &mut Self {
        self.insert(self.len(), data)
    }

    /// Inserts `data` at the start of the buffer.
    #[track_caller]
    #[inline]
    pub fn push_front(&mut self, data: impl AsRef<[T]>) -> &mut Self {
        self.insert(0, data)
    }

    /// Removes elements starting or ending at `index`, depending on the sign
    /// of `count`:
    ///
    /// - if `count` is positive, up to `count` elements starting at `index`
    ///   are removed;
    /// - if it's negative, up to `-count` elements ending at `index` are
    ///   removed.
    ///
    /// The number of removed elements is clipped to what's available on that
    /// side of `index`. The cursor ends up at the position where the removed
    /// elements used to start.
    ///
    /// # Panics
    ///
    /// Panics if `index` is greater than the buffer's length.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gap_buffer::GapBuffer;
    /// let mut buffer = GapBuffer::<u8>::from("***#gap buffer abc");
    ///
    /// buffer.remove(4, 4);
    /// assert_eq!(buffer, "***#buffer abc");
    ///
    /// buffer.remove(4, -100);
    /// assert_eq!(buffer, "buffer abc");
    ///
    /// buffer.remove(0, 100);
    /// assert!(buffer.is_empty());
    /// ```
    #[track_caller]
    #[inline]
    pub fn remove(&mut self, index: usize, count: isize) -> &mut Self {
        if count >= 0 {
            self.remove_after(index, count.unsigned_abs())
        } else {
            self.remove_before(index, count.unsigned_abs())
        }
    }

    /// Removes up to `count` elements starting at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is greater than the buffer's length.
    #[track_caller]
    #[inline]
    pub fn remove_after(&mut self, index: usize, count: usize) -> &mut Self {
        if index > self.len() {
            panic::offset_out_of_bounds(index, self.len());
        }

        let count = count.min(self.len() - index);
        self.move_gap(index + count);
        self.gap_start -= count;
        self
    }

    /// Removes up to `count` elements ending at `index`, i.e. the elements
    /// immediately preceding it.
    ///
    /// # Panics
    ///
    /// Panics if `index` is greater than the buffer's length.
    #[track_caller]
    #[inline]
    pub fn remove_before(&mut self, index: usize, count: usize) -> &mut Self {
        if index > self.len() {
            panic::offset_out_of_bounds(index, self.len());
        }

        let count = count.min(index);
        self.move_gap(index);
        self.gap_start -= count;
        self
    }

    /// Removes up to `count` elements from the start of the buffer.
    #[inline]
    pub fn remove_prefix(&mut self, count: usize) -> &mut Self {
        self.remove_after(0, count)
    }

    /// Removes up to `count` elements from the end of the buffer.
    #[inline]
    pub fn remove_suffix(&mut self, count: usize) -> &mut Self {
        self.remove_before(self.len(), count)
    }

    /// Makes sure the gap can fit at least `additional` more elements,
    /// growing the buffer with the same doubling policy used by the
    /// insertions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gap_buffer::GapBuffer;
    /// let mut buffer = GapBuffer::from([1, 2, 3]);
    ///
    /// buffer.reserve(10);
    /// assert!(buffer.gap_len() >= 10);
    /// assert_eq!(buffer, [1, 2, 3]);
    /// ```
    #[track_caller]
    #[inline]
    pub fn reserve(&mut self, additional: usize) -> &mut Self {
        if additional > self.gap_len() {
            self.grow(additional);
        }
        self
    }

    /// Moves the cursor to `index`, relocating the gap.
    ///
    /// Runs in O(|`index` - `cursor`|).
    ///
    /// # Panics
    ///
    /// Panics if `index` is greater than the buffer's length.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gap_buffer::GapBuffer;
    /// let mut buffer = GapBuffer::<u8>::from("gap buffer");
    ///
    /// buffer.set_cursor(3);
    /// buffer.insert_at_cursor("!");
    ///
    /// assert_eq!(buffer, "gap! buffer");
    /// ```
    #[track_caller]
    #[inline]
    pub fn set_cursor(&mut self, index: usize) -> &mut Self {
        if index > self.len() {
            panic::offset_out_of_bounds(index, self.len());
        }

        self.move_gap(index);
        self
    }

    /// Copies the buffer's content into a new `Vec`.
    #[inline]
    pub fn to_vec(&self) -> Vec<T> {
        self.view().to_vec()
    }

    /// Reallocates the store so that the gap can fit at least `need` more
    /// elements.
    ///
    /// The new capacity is `2 * max(need, capacity)`. The left half of the
    /// content stays where it is, the right half is moved to the end of the
    /// new store and the gap takes all the space in between.
    ///
    /// ```text
    /// aa~bb => aa~~~~~~~bb
    /// ```
    #[track_caller]
    fn grow(&mut self, need: usize) {
        debug_assert!(need > 0);

        let old_capacity = self.capacity();

        let Some(new_capacity) = need.max(old_capacity).checked_mul(2) else {
            panic::capacity_overflow(need, old_capacity);
        };

        let len_right = old_capacity - self.gap_end;

        self.slots.resize_with(new_capacity, MaybeUninit::uninit);

        self.slots.copy_within(
            self.gap_end..old_capacity,
            new_capacity - len_right,
        );

        self.gap_end = new_capacity - len_right;

        debug_assert!(self.gap_len() >= need);
    }

    /// Moves the gap so that it starts at `index`, shifting the elements in
    /// between to the other side of the gap.
    #[inline]
    fn move_gap(&mut self, index: usize) {
        debug_assert!(index <= self.len());

        match index.cmp(&self.gap_start) {
            // The index is in the second half => move the elements between
            // the end of the gap and the index to the end of the first half.
            //
            // aaa~~~bb|cc => aaabb~~~cc
            Ordering::Greater => {
                let moved = index - self.gap_start;
                debug_assert!(self.gap_end + moved <= self.capacity());

                self.slots.copy_within(
                    self.gap_end..self.gap_end + moved,
                    self.gap_start,
                );

                self.gap_start += moved;
                self.gap_end += moved;
            },

            // The index is in the first half => move the elements between the
            // index and the start of the gap to the start of the second half.
            //
            // aa|bb~~~ccc => aa~~~bbccc
            Ordering::Less => {
                let moved = self.gap_start - index;

                self.slots
                    .copy_within(index..self.gap_start, self.gap_end - moved);

                self.gap_start -= moved;
                self.gap_end -= moved;
            },

            Ordering::Equal => {},
        }

        debug_assert_eq!(index, self.gap_start);
    }
}

impl<T: Copy> Clone for GapBuffer<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            gap_start: self.gap_start,
            gap_end: self.gap_end,
        }
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for GapBuffer<T> {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let (left, right) = self.as_slices();

        let mut list = f.debug_list();

        list.entries(left);

        if self.gap_len() > 0 {
            list.entry(&Gap(self.gap_len()));
        }

        list.entries(right).finish()
    }
}

/// Renders a gap of the given length as a run of `~`s.
struct Gap(usize);

impl core::fmt::Debug for Gap {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{:~^1$}", "", self.0)
    }
}

impl<T> Default for GapBuffer<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy> From<&[T]> for GapBuffer<T> {
    #[inline]
    fn from(slice: &[T]) -> Self {
        let mut buffer = Self::with_capacity(slice.len());
        buffer.push_back(slice);
        buffer
    }
}

impl<T: Copy, const N: usize> From<[T; N]> for GapBuffer<T> {
    #[inline]
    fn from(array: [T; N]) -> Self {
        Self::from(array.as_slice())
    }
}

impl<T: Copy> From<Vec<T>> for GapBuffer<T> {
    #[inline]
    fn from(vec: Vec<T>) -> Self {
        Self::from(vec.as_slice())
    }
}

impl From<&str> for GapBuffer<u8> {
    #[inline]
    fn from(s: &str) -> Self {
        Self::from(s.as_bytes())
    }
}

impl<T: Copy> FromIterator<T> for GapBuffer<T> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T: Copy> Extend<T> for GapBuffer<T> {
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for element in iter {
            self.push_back([element]);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for GapBuffer<T> {
    #[inline]
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> Index<usize> for GapBuffer<T> {
    type Output = T;

    #[track_caller]
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Some(element) => element,
            None => panic::index_out_of_bounds(index, self.len()),
        }
    }
}

impl<T> IndexMut<usize> for GapBuffer<T> {
    #[track_caller]
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        let len = self.len();
        match self.get_mut(index) {
            Some(element) => element,
            None => panic::index_out_of_bounds(index, len),
        }
    }
}

impl<'a, T> IntoIterator for &'a GapBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut GapBuffer<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: Copy> IntoIterator for GapBuffer<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<T: PartialEq> PartialEq for GapBuffer<T> {
    #[inline]
    fn eq(&self, rhs: &Self) -> bool {
        self.view() == rhs.view()
    }
}

impl<T: Eq> Eq for GapBuffer<T> {}

impl<T: PartialEq> PartialEq<[T]> for GapBuffer<T> {
    #[inline]
    fn eq(&self, rhs: &[T]) -> bool {
        self.view() == *rhs
    }
}

impl<T: PartialEq> PartialEq<&[T]> for GapBuffer<T> {
    #[inline]
    fn eq(&self, rhs: &&[T]) -> bool {
        self.view() == **rhs
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for GapBuffer<T> {
    #[inline]
    fn eq(&self, rhs: &[T; N]) -> bool {
        self.view() == *rhs.as_slice()
    }
}

impl PartialEq<str> for GapBuffer<u8> {
    #[inline]
    fn eq(&self, rhs: &str) -> bool {
        self.view() == *rhs
    }
}

impl PartialEq<&str> for GapBuffer<u8> {
    #[inline]
    fn eq(&self, rhs: &&str) -> bool {
        self.view() == **rhs
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl std::io::Write for GapBuffer<u8> {
    /// Inserts `buf` at the cursor.
    #[inline]
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.insert_at_cursor(buf);
        Ok(buf.len())
    }

    #[inline]
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
