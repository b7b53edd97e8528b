//! A generic gap buffer and the views and iterators built on top of it.

mod gap_buffer;
mod iterators;
mod utils;
mod view;

pub use gap_buffer::GapBuffer;
pub use iterators::{IntoIter, Iter, IterMut};
pub use view::{View, ViewMut};
