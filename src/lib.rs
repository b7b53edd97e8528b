//! gap-buffer is a growable sequence optimized for edits clustered around a
//! movable cursor, the kind of workload produced by a text editor.
//!
//! The [`GapBuffer`] keeps its spare capacity in a single window, the gap,
//! parked at the cursor. Inserting or removing at the cursor only moves the
//! gap's boundaries, while editing elsewhere first slides the gap there. The
//! content is exposed as a [`View`], two slices glued together without
//! copying.
//!
//! # Example usage
//!
//! ```
//! use gap_buffer::GapBuffer;
//!
//! let mut buffer = GapBuffer::<u8>::new();
//!
//! buffer.push_front("gap buffer");
//!
//! // The cursor sits after the last inserted element.
//! buffer.insert_at_cursor(" abc");
//! assert_eq!(buffer.view(), "gap buffer abc");
//!
//! // Removals widen the gap, a negative count removes backwards.
//! buffer.remove(10, -7);
//! assert_eq!(buffer.view(), "gap abc");
//!
//! // Views borrow the buffer, so they can't outlive the next edit.
//! let view = buffer.view();
//! assert_eq!(view.first(), Some(&b'g'));
//! assert_eq!(view.last(), Some(&b'c'));
//! ```

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod buffer;

pub use buffer::{GapBuffer, IntoIter, Iter, IterMut, View, ViewMut};
