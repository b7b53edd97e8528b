//! This module contains the helpers shared between [`GapBuffer`]s and their
//! views: reinterpreting initialized slots as values and formatting panic
//! messages.
//!
//! [`GapBuffer`]: super::GapBuffer

use core::mem::MaybeUninit;

/// Reinterprets a slice of slots as a slice of values.
///
/// # Safety
///
/// Every slot in `slots` must be initialized.
#[inline]
pub(super) unsafe fn assume_init<T>(slots: &[MaybeUninit<T>]) -> &[T] {
    // SAFETY: `MaybeUninit<T>` has the same layout as `T` and the caller
    // guarantees that every slot holds a value.
    unsafe { &*(slots as *const [MaybeUninit<T>] as *const [T]) }
}

/// Mutable version of [`assume_init()`].
///
/// # Safety
///
/// Every slot in `slots` must be initialized.
#[inline]
pub(super) unsafe fn assume_init_mut<T>(
    slots: &mut [MaybeUninit<T>],
) -> &mut [T] {
    // SAFETY: same as above.
    unsafe { &mut *(slots as *mut [MaybeUninit<T>] as *mut [T]) }
}

/// Copies `values` into the first `values.len()` slots of `slots`.
#[inline]
pub(super) fn write_slots<T: Copy>(
    slots: &mut [MaybeUninit<T>],
    values: &[T],
) {
    debug_assert!(values.len() <= slots.len());

    for (slot, &value) in slots.iter_mut().zip(values) {
        slot.write(value);
    }
}

pub(super) mod panic_messages {
    #[track_caller]
    #[inline]
    pub(crate) fn index_out_of_bounds(index: usize, len: usize) -> ! {
        debug_assert!(index >= len);

        panic!(
            "Index out of bounds: the index is {index} but the length is \
             {len}"
        );
    }

    #[track_caller]
    #[inline]
    pub(crate) fn offset_out_of_bounds(offset: usize, len: usize) -> ! {
        debug_assert!(offset > len);

        panic!(
            "Offset out of bounds: the offset is {offset} but the length is \
             {len}"
        );
    }

    #[track_caller]
    #[inline]
    pub(crate) fn empty_access(method: &str) -> ! {
        panic!("Called `{method}()` on an empty gap buffer");
    }

    #[track_caller]
    #[inline]
    pub(crate) fn capacity_overflow(need: usize, capacity: usize) -> ! {
        panic!(
            "Capacity overflow: cannot grow a buffer of capacity {capacity} \
             to fit {need} more elements"
        );
    }
}
