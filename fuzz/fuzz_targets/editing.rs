#![no_main]

use gap_buffer::GapBuffer;
use libfuzzer_sys::arbitrary::{self, Arbitrary};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Clone, Debug)]
enum EditOp<'a> {
    Insert { index: usize, data: &'a [u8] },
    InsertAtCursor { data: &'a [u8] },
    PushFront { data: &'a [u8] },
    PushBack { data: &'a [u8] },
    Remove { index: usize, count: isize },
    RemovePrefix { count: usize },
    RemoveSuffix { count: usize },
    SetCursor { index: usize },
    Reserve { additional: u16 },
    Clear,
}

fuzz_target!(|data: (&[u8], Vec<EditOp>)| {
    let (starting, ops) = data;

    let mut buffer = GapBuffer::from(starting);
    let mut vec = starting.to_vec();

    for op in ops {
        match op {
            EditOp::Insert { index, data } if index <= vec.len() => {
                vec.splice(index..index, data.iter().copied());
                buffer.insert(index, data);
            },

            EditOp::InsertAtCursor { data } => {
                let cursor = buffer.cursor();
                vec.splice(cursor..cursor, data.iter().copied());
                buffer.insert_at_cursor(data);
            },

            EditOp::PushFront { data } => {
                vec.splice(0..0, data.iter().copied());
                buffer.push_front(data);
            },

            EditOp::PushBack { data } => {
                vec.extend_from_slice(data);
                buffer.push_back(data);
            },

            EditOp::Remove { index, count } if index <= vec.len() => {
                let range = if count >= 0 {
                    let end = index.saturating_add(count.unsigned_abs());
                    index..end.min(vec.len())
                } else {
                    index.saturating_sub(count.unsigned_abs())..index
                };
                vec.drain(range);
                buffer.remove(index, count);
            },

            EditOp::RemovePrefix { count } => {
                vec.drain(..count.min(vec.len()));
                buffer.remove_prefix(count);
            },

            EditOp::RemoveSuffix { count } => {
                vec.truncate(vec.len().saturating_sub(count));
                buffer.remove_suffix(count);
            },

            EditOp::SetCursor { index } if index <= vec.len() => {
                buffer.set_cursor(index);
            },

            EditOp::Reserve { additional } => {
                buffer.reserve(additional as usize);
            },

            EditOp::Clear => {
                vec.clear();
                buffer.clear();
            },

            _ => continue,
        }

        buffer.assert_invariants();
        assert_eq!(buffer, vec.as_slice());
    }
});
