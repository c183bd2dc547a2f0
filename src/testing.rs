use crate::entry::Entry;
use crate::heap::Heap;
use crate::sift::is_heap;

pub fn init_test() {
    drop(env_logger::try_init());
}

/// Builds entries with the given priorities. Ids are assigned 1, 2, 3, ...
pub fn entries(priorities: &[i32]) -> Vec<Entry> {
    priorities
        .iter()
        .enumerate()
        .map(|(i, &p)| Entry::new(i as i32 + 1, p))
        .collect()
}

pub fn priorities(entries: &[Entry]) -> Vec<i32> {
    entries.iter().map(|e| e.priority).collect()
}

pub fn assert_heap(heap: &Heap) {
    assert!(heap.len() <= heap.capacity());
    assert!(
        is_heap(heap.as_slice(), heap.len(), heap.order()),
        "heap property violated: {:?}",
        heap
    );
}
