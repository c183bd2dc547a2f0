//! Fixed-capacity binary heaps over prioritized entries, and an in-place heapsort
//! built on the same array primitives.
//!
//! ```
//! use prio_heap::{Entry, Heap};
//!
//! let mut heap = Heap::max(5)?;
//! for (id, priority) in [(1, 70), (2, 50), (3, 90)].iter() {
//!     heap.insert(Entry::new(*id, *priority))?;
//! }
//! assert_eq!(heap.extract_root(), Some(Entry::new(3, 90)));
//! # Ok::<(), prio_heap::Error>(())
//! ```

pub mod entry;
pub mod error;
pub mod heap;
pub mod heapsort;
pub mod order;
pub mod sift;

#[cfg(test)]
mod testing;

pub use crate::entry::Entry;
pub use crate::error::Error;
pub use crate::heap::Heap;
pub use crate::heapsort::heapsort_entries;
pub use crate::order::Order;
