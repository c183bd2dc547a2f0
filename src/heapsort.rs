use crate::entry::Entry;
use crate::order::Order;
use crate::sift::{heapify, sift_down, swap_entries};
use log::debug;

/// Sorts `buf` in place, ascending by priority. Not stable.
///
/// The buffer is first arranged as a max-heap; then the root (the greatest
/// remaining entry) is repeatedly swapped to the end of the shrinking heap region.
/// To sort only a prefix, pass `&mut buf[..n]`.
pub fn heapsort_entries(buf: &mut [Entry]) {
    let n = buf.len();
    if n <= 1 {
        return;
    }
    debug!("heapsort: {} entries", n);

    heapify(buf, n, Order::Max);

    for i in (1..n).rev() {
        // buf[..=i] is a max-heap, buf[i + 1..] is sorted
        swap_entries(buf, 0, i);
        sift_down(buf, i, 0, Order::Max);
    }
}
