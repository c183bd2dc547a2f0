//! Array-level heap primitives.
//!
//! These work on a plain slice plus a logical length and never allocate, so they
//! can be shared by `Heap` and by `heapsort_entries`, which sorts a caller's
//! buffer without building a `Heap` around it.

// Indices in a heap
//           0
//     1            2
//  3     4      5     6
// 7 8   9 10  11 12 13 14

use crate::entry::Entry;
use crate::order::Order;
use log::trace;

fn left(parent: usize) -> usize {
    parent * 2 + 1
}
fn right(parent: usize) -> usize {
    parent * 2 + 2
}
fn parent(child: usize) -> usize {
    (child - 1) / 2
}

/// Exchanges two whole entries.
#[inline]
pub fn swap_entries(buf: &mut [Entry], a: usize, b: usize) {
    buf.swap(a, b);
}

/// Restores the heap property for the subtree rooted at `index`, considering only
/// `buf[..len]`. Both subtrees of `index` must already satisfy the property.
///
/// A child replaces its parent only if it strictly beats it, so equal priorities
/// are never swapped.
pub fn sift_down(buf: &mut [Entry], len: usize, index: usize, order: Order) {
    debug_assert!(len <= buf.len());
    let mut i = index;
    loop {
        let mut best = i;
        let l = left(i);
        if l < len && order.beats(&buf[l], &buf[best]) {
            best = l;
        }
        let r = right(i);
        if r < len && order.beats(&buf[r], &buf[best]) {
            best = r;
        }
        if best == i {
            break;
        }
        trace!("sift_down: {} <-> {}", i, best);
        swap_entries(buf, i, best);
        i = best;
    }
}

/// Moves the entry at `index` toward the root until its parent is not beaten by it.
pub fn sift_up(buf: &mut [Entry], index: usize, order: Order) {
    let mut i = index;
    while i > 0 {
        let p = parent(i);
        if !order.beats(&buf[i], &buf[p]) {
            break;
        }
        trace!("sift_up: {} <-> {}", i, p);
        swap_entries(buf, i, p);
        i = p;
    }
}

/// Rearranges `buf[..len]` so that it satisfies the heap property, by sifting down
/// every non-leaf from the last one back to the root. O(len).
pub fn heapify(buf: &mut [Entry], len: usize, order: Order) {
    for i in (0..len / 2).rev() {
        sift_down(buf, len, i, order);
    }
}

/// Returns true if `buf[..len]` satisfies the heap property for `order`.
pub fn is_heap(buf: &[Entry], len: usize, order: Order) -> bool {
    (1..len).all(|i| !order.beats(&buf[i], &buf[parent(i)]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;

    #[test]
    fn index_math() {
        assert_eq!(left(0), 1);
        assert_eq!(right(0), 2);
        assert_eq!(left(3), 7);
        assert_eq!(right(3), 8);
        for child in 1..20 {
            let p = parent(child);
            assert!(left(p) == child || right(p) == child);
        }
    }

    #[test]
    fn sift_down_test() {
        fn case(description: &str, order: Order, input: &[i32], index: usize, expected: &[i32]) {
            init_test();
            let mut buf = entries(input);
            let len = buf.len();
            sift_down(&mut buf, len, index, order);
            assert_eq!(
                priorities(&buf),
                expected,
                "(actual : expected) {}",
                description
            );
        }

        case("empty", Order::Max, &[], 0, &[]);
        case("single", Order::Max, &[5], 0, &[5]);
        case("index past end", Order::Max, &[1, 2], 5, &[1, 2]);
        case("already a heap", Order::Max, &[9, 4, 7], 0, &[9, 4, 7]);
        case("root sinks right", Order::Max, &[1, 4, 7], 0, &[7, 4, 1]);
        case("root sinks two levels", Order::Max, &[1, 9, 8, 7, 6, 5, 4], 0, &[9, 7, 8, 1, 6, 5, 4]);
        case("tie is not swapped", Order::Max, &[5, 5, 5], 0, &[5, 5, 5]);
        case("min root sinks", Order::Min, &[9, 2, 3, 4, 5], 0, &[2, 4, 3, 9, 5]);
        case("interior index", Order::Max, &[9, 1, 8, 6, 7], 1, &[9, 7, 8, 6, 1]);
    }

    #[test]
    fn sift_down_respects_logical_len() {
        init_test();
        let mut buf = entries(&[1, 2, 100]);
        sift_down(&mut buf, 2, 0, Order::Max);
        assert_eq!(priorities(&buf), [2, 1, 100]);
    }

    #[test]
    fn sift_up_test() {
        fn case(description: &str, order: Order, input: &[i32], expected: &[i32]) {
            init_test();
            let mut buf = entries(input);
            let last = buf.len() - 1;
            sift_up(&mut buf, last, order);
            assert_eq!(
                priorities(&buf),
                expected,
                "(actual : expected) {}",
                description
            );
        }

        case("single", Order::Max, &[5], &[5]);
        case("stays as leaf", Order::Max, &[9, 4, 7, 1], &[9, 4, 7, 1]);
        case("rises to root", Order::Max, &[9, 4, 7, 1, 2, 3, 10], &[10, 4, 9, 1, 2, 3, 7]);
        case("equal to parent stays", Order::Max, &[9, 4, 7, 4], &[9, 4, 7, 4]);
        case("min rises to root", Order::Min, &[2, 4, 3, 9, 1], &[1, 2, 3, 9, 4]);
    }

    #[test]
    fn heapify_test() {
        init_test();
        let mut buf = entries(&[4, 10, 3, 5, 1, 12, 9]);
        let len = buf.len();
        heapify(&mut buf, len, Order::Max);
        assert!(is_heap(&buf, len, Order::Max));
        assert_eq!(buf[0].priority, 12);

        let mut buf = entries(&[4, 10, 3, 5, 1, 12, 9]);
        heapify(&mut buf, len, Order::Min);
        assert!(is_heap(&buf, len, Order::Min));
        assert_eq!(buf[0].priority, 1);
    }

    #[test]
    fn is_heap_test() {
        assert!(is_heap(&[], 0, Order::Max));
        assert!(is_heap(&entries(&[3]), 1, Order::Min));
        assert!(is_heap(&entries(&[9, 4, 7, 4]), 4, Order::Max));
        assert!(!is_heap(&entries(&[9, 4, 7, 5, 8]), 5, Order::Max));
        // Entries past `len` are not examined.
        assert!(is_heap(&entries(&[9, 4, 7, 100]), 3, Order::Max));
        assert!(!is_heap(&entries(&[9, 4, 7]), 3, Order::Min));
    }

    #[test]
    fn swap_entries_swaps_whole_values() {
        let mut buf = vec![Entry::new(1, 10), Entry::new(2, 20)];
        swap_entries(&mut buf, 0, 1);
        assert_eq!(buf, [Entry::new(2, 20), Entry::new(1, 10)]);
    }
}
