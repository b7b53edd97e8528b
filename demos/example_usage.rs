use gap_buffer::GapBuffer;

fn main() {
    // A `GapBuffer` starts empty and doesn't allocate until something is
    // inserted into it.

    let mut buffer = GapBuffer::<u8>::new();

    let mut results = vec![buffer.is_empty() && buffer.len() == 0];

    // Any `AsRef<[T]>` can be inserted, so a `GapBuffer<u8>` accepts string
    // slices directly.

    buffer.push_back("gap buffer");
    results.push(buffer.view() == "gap buffer");

    // Removals clip the count to what's available.

    buffer.remove(0, 100);
    results.push(buffer.is_empty());

    // Every edit returns the buffer, so calls can be chained.

    buffer.push_back("gap buffer").clear();
    results.push(buffer.is_empty());

    // After an insertion the cursor sits right after the inserted elements,
    // which is where `insert_at_cursor` will put the next ones.

    buffer.push_front("gap buffer");
    results.push(buffer.view() == "gap buffer");

    buffer.insert_at_cursor(" abc");
    results.push(buffer.view() == "gap buffer abc");

    buffer.push_back(" efg");
    results.push(buffer.view() == "gap buffer abc efg");

    buffer.push_front("--- ");
    results.push(buffer.view() == "--- gap buffer abc efg");

    buffer.insert_at_cursor("***");
    results.push(buffer.view() == "--- ***gap buffer abc efg");

    // A single element is inserted as a one element array.

    buffer.insert_at_cursor([b'#']);
    results.push(buffer.view() == "--- ***#gap buffer abc efg");

    buffer.remove_prefix(0);
    results.push(buffer.view() == "--- ***#gap buffer abc efg");

    buffer.remove_prefix(4);
    results.push(buffer.view() == "***#gap buffer abc efg");

    buffer.remove_suffix(4);
    results.push(buffer.view() == "***#gap buffer abc");

    // A removal leaves the cursor where the removed elements used to start.

    buffer.remove(4, 4);
    results.push(buffer.view() == "***#buffer abc");

    buffer.insert_at_cursor("&&&");
    results.push(buffer.view() == "***#&&&buffer abc");

    results.push(buffer.back() == b'c');
    results.push(buffer.front() == b'*');

    // The `Debug` output shows where the gap currently is.

    println!("{buffer:?}");

    for (id, passed) in results.into_iter().enumerate() {
        println!("test {id} {}", if passed { "passed" } else { "failed" });
    }
}
