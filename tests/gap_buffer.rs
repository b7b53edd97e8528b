use gap_buffer::GapBuffer;

mod common;

use common::{LIPSUM, TEXT};

#[test]
fn new_buffer_is_empty() {
    let buffer = GapBuffer::<u8>::new();
    assert!(buffer.empty());
    assert_eq!(buffer.size(), 0);
    assert_eq!(buffer.cursor(), 0);
    assert_eq!(buffer.view(), "");
}

/// Replays a full editing session, checking the content after each step.
#[test]
fn editing_session() {
    let mut buffer = GapBuffer::<u8>::new();

    buffer.push_back("gap buffer");
    assert_eq!(buffer.view(), "gap buffer");

    buffer.remove(0, 100);
    assert!(buffer.empty());

    buffer.push_back("gap buffer").clear();
    assert!(buffer.empty());

    buffer.push_front("gap buffer");
    assert_eq!(buffer.view(), "gap buffer");
    assert_eq!(buffer.cursor(), 10);

    buffer.insert_at_cursor(" abc");
    assert_eq!(buffer.view(), "gap buffer abc");

    buffer.push_back(" efg");
    assert_eq!(buffer.view(), "gap buffer abc efg");

    buffer.push_front("--- ");
    assert_eq!(buffer.view(), "--- gap buffer abc efg");

    buffer.insert_at_cursor("***");
    assert_eq!(buffer.view(), "--- ***gap buffer abc efg");

    buffer.insert_at_cursor([b'#']);
    assert_eq!(buffer.view(), "--- ***#gap buffer abc efg");

    buffer.remove_prefix(0);
    assert_eq!(buffer.view(), "--- ***#gap buffer abc efg");

    buffer.remove_prefix(4);
    assert_eq!(buffer.view(), "***#gap buffer abc efg");

    buffer.remove_suffix(4);
    assert_eq!(buffer.view(), "***#gap buffer abc");

    buffer.remove(4, 4);
    assert_eq!(buffer.view(), "***#buffer abc");

    buffer.insert_at_cursor("&&&");
    assert_eq!(buffer.view(), "***#&&&buffer abc");

    assert_eq!(buffer.back(), b'c');
    assert_eq!(buffer.front(), b'*');

    buffer.assert_invariants();
}

#[test]
fn front_back_wherever_the_gap_is() {
    let mut buffer = GapBuffer::<u8>::from(TEXT);
    buffer.reserve(16);

    for cursor in [0, 1, TEXT.len() / 2, TEXT.len() - 1, TEXT.len()] {
        buffer.set_cursor(cursor);
        assert_eq!(buffer.front(), b'H');
        assert_eq!(buffer.back(), b'!');
    }
}

#[test]
#[should_panic(expected = "Called `back()` on an empty gap buffer")]
fn back_on_empty() {
    let mut buffer = GapBuffer::<u8>::from("abc");
    buffer.remove_prefix(3);
    buffer.back();
}

#[test]
#[should_panic(expected = "the offset is 11 but the length is 10")]
fn insert_past_the_end() {
    let mut buffer = GapBuffer::<u8>::from("gap buffer");
    buffer.insert(11, "!");
}

#[test]
#[should_panic(expected = "the offset is 4 but the length is 3")]
fn remove_past_the_end() {
    let mut buffer = GapBuffer::from([1, 2, 3]);
    buffer.remove(4, -1);
}

#[test]
#[should_panic(expected = "the index is 3 but the length is 3")]
fn index_past_the_end() {
    let buffer = GapBuffer::from([1, 2, 3]);
    let _element = buffer[3];
}

#[test]
fn remove_zero_is_noop() {
    let mut buffer = GapBuffer::<u8>::from(LIPSUM);

    for index in [0, 7, LIPSUM.len()] {
        buffer.remove(index, 0);
        assert_eq!(buffer, LIPSUM);
    }
}

#[test]
fn remove_clips_count() {
    let mut buffer = GapBuffer::<u8>::from("gap buffer");

    buffer.remove(3, -100);
    assert_eq!(buffer, " buffer");
    assert_eq!(buffer.cursor(), 0);

    buffer.remove(4, 100);
    assert_eq!(buffer, " buf");
    assert_eq!(buffer.cursor(), 4);

    buffer.remove_suffix(100);
    assert!(buffer.is_empty());

    buffer.push_back("abc").remove_prefix(100);
    assert!(buffer.is_empty());
}

#[test]
fn remove_negative_count() {
    let mut buffer = GapBuffer::from([0, 1, 2, 3, 4, 5, 6]);

    buffer.remove(5, -2);

    assert_eq!(buffer, [0, 1, 2, 5, 6]);
    assert_eq!(buffer.cursor(), 3);
}

#[test]
fn remove_signed_matches_unsigned() {
    let mut signed = GapBuffer::<u8>::from(TEXT);
    let mut unsigned = GapBuffer::<u8>::from(TEXT);

    signed.remove(20, 5).remove(30, -10);
    unsigned.remove_after(20, 5).remove_before(30, 10);

    assert_eq!(signed, unsigned);
    assert_eq!(signed.cursor(), unsigned.cursor());
}

#[test]
fn clear_twice_is_clear_once() {
    let mut once = GapBuffer::<u8>::from(TEXT);
    let mut twice = once.clone();

    once.clear();
    twice.clear().clear();

    assert_eq!(once, twice);
    assert_eq!(once.capacity(), twice.capacity());
    assert_eq!(once.cursor(), twice.cursor());
}

#[test]
fn push_back_then_remove_suffix_restores_content() {
    let mut buffer = GapBuffer::<u8>::from(TEXT);
    buffer.set_cursor(17);

    buffer.push_back(LIPSUM).remove_suffix(LIPSUM.len());

    assert_eq!(buffer, TEXT);
}

#[test]
fn insert_at_ends_matches_push() {
    let mut inserted = GapBuffer::<u8>::from("buffer");
    let mut pushed = inserted.clone();

    inserted.insert(0, "gap ");
    pushed.push_front("gap ");
    assert_eq!(inserted, pushed);
    assert_eq!(inserted.cursor(), pushed.cursor());

    inserted.insert(inserted.len(), " abc");
    pushed.push_back(" abc");
    assert_eq!(inserted, pushed);
    assert_eq!(inserted.cursor(), pushed.cursor());

    assert_eq!(inserted, "gap buffer abc");
}

#[test]
fn empty_insert_moves_cursor() {
    let mut buffer = GapBuffer::<u8>::from("gap buffer");

    buffer.insert(3, "");

    assert_eq!(buffer, "gap buffer");
    assert_eq!(buffer.cursor(), 3);
}

/// Typing at a steadily advancing cursor only grows the buffer a logarithmic
/// number of times and never moves elements across the gap.
#[test]
fn advancing_inserts_dont_relocate() {
    let mut buffer = GapBuffer::<u8>::from("[]");
    buffer.set_cursor(1);

    let mut reallocations = 0;
    let mut capacity = buffer.capacity();

    for (idx, byte) in LIPSUM.bytes().enumerate() {
        buffer.insert(1 + idx, [byte]);

        if buffer.capacity() != capacity {
            reallocations += 1;
            capacity = buffer.capacity();
        }

        assert_eq!(buffer.cursor(), 2 + idx);
        assert_eq!(buffer.as_slices().1, b"]");
    }

    assert!(reallocations <= 8);
    assert_eq!(buffer, format!("[{LIPSUM}]").as_str());
}

#[test]
fn growth_doubles_capacity() {
    let mut buffer = GapBuffer::<u8>::new();

    buffer.push_back("a");
    assert_eq!(buffer.capacity(), 2);

    buffer.push_back("b");
    assert_eq!(buffer.capacity(), 2);

    buffer.push_back("c");
    assert_eq!(buffer.capacity(), 4);

    buffer.push_back("defgh");
    assert_eq!(buffer.capacity(), 10);

    assert_eq!(buffer, "abcdefgh");
}

#[test]
fn insert_one_matches_one_element_slice() {
    let mut one = GapBuffer::<u8>::from("gap buffer");
    let mut slice = one.clone();

    for (index, byte) in [(0, b'<'), (5, b'_'), (12, b'>')] {
        one.insert_one(index, byte);
        slice.insert(index, [byte]);

        assert_eq!(one, slice);
        assert_eq!(one.cursor(), index + 1);
    }

    assert_eq!(one, "<gap _buffer>");
}

#[test]
#[should_panic(expected = "the offset is 4 but the length is 3")]
fn insert_one_past_the_end() {
    let mut buffer = GapBuffer::from([1, 2, 3]);
    buffer.insert_one(4, 0);
}

#[test]
fn conversions() {
    let from_slice = GapBuffer::from(&[1, 2, 3][..]);
    let from_array = GapBuffer::from([1, 2, 3]);
    let from_vec = GapBuffer::from(vec![1, 2, 3]);
    let collected = (1..=3).collect::<GapBuffer<_>>();

    assert_eq!(from_slice, from_array);
    assert_eq!(from_array, from_vec);
    assert_eq!(from_vec, collected);

    // The cursor of a converted buffer is at the end.
    assert_eq!(collected.cursor(), 3);
    assert_eq!(collected.to_vec(), vec![1, 2, 3]);
    assert_eq!(collected.into_iter().rev().collect::<Vec<_>>(), [3, 2, 1]);
}

#[test]
fn extend_appends() {
    let mut buffer = GapBuffer::from([1, 2]);
    buffer.set_cursor(0);

    buffer.extend([3, 4]);
    buffer.extend(&[5]);

    assert_eq!(buffer, [1, 2, 3, 4, 5]);
}

#[test]
fn index_across_gap() {
    let mut buffer = GapBuffer::<u8>::from("gap buffer");
    buffer.reserve(8).set_cursor(4);

    assert_eq!(buffer[3], b' ');
    assert_eq!(buffer[4], b'b');

    buffer[4] = b'B';
    *buffer.get_mut(0).unwrap() = b'G';

    assert_eq!(buffer, "Gap Buffer");
    assert_eq!(buffer.get(10), None);
}

#[test]
fn make_contiguous_parks_gap_at_end() {
    let mut buffer = GapBuffer::<u8>::from("gap buffer");
    buffer.set_cursor(3);

    buffer.make_contiguous().make_ascii_uppercase();

    assert_eq!(buffer, "GAP BUFFER");
    assert_eq!(buffer.cursor(), buffer.len());
    assert_eq!(buffer.as_slices().1, b"");
}

#[test]
fn equality_ignores_gap_position() {
    let mut lhs = GapBuffer::<u8>::from(TEXT);
    let mut rhs = GapBuffer::<u8>::from(TEXT);

    lhs.set_cursor(3);
    rhs.reserve(100).set_cursor(100);

    assert_eq!(lhs, rhs);
    assert_ne!(lhs.as_slices(), rhs.as_slices());
}

#[cfg(feature = "std")]
#[test]
fn write_inserts_at_cursor() {
    use std::io::Write;

    let mut buffer = GapBuffer::<u8>::from("gap buffer");
    buffer.set_cursor(4);

    write!(buffer, "{} ", 42).unwrap();

    assert_eq!(buffer, "gap 42 buffer");
}
