use crate::entry::Entry;
use crate::error::Error;
use crate::order::Order;
use crate::sift::{heapify, is_heap, sift_down, sift_up};
use core::fmt::{Debug, Formatter};
use log::{debug, warn};

/// A binary heap of `Entry` values with a capacity that is fixed when the heap
/// is created. `Order` decides whether the root holds the greatest (`Max`) or
/// least (`Min`) priority.
///
/// Storage is reserved once, up front, and never grows; inserting into a full
/// heap is reported as `Error::FullHeap` instead.
pub struct Heap {
    items: Vec<Entry>,
    capacity: usize,
    order: Order,
}

impl Heap {
    pub fn new(order: Order, capacity: usize) -> Result<Self, Error> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        let mut items: Vec<Entry> = Vec::new();
        items
            .try_reserve_exact(capacity)
            .map_err(|_| Error::AllocationFailure { capacity })?;
        debug!("created {}-heap, capacity {}", order, capacity);
        Ok(Self {
            items,
            capacity,
            order,
        })
    }

    /// Creates an empty max-heap.
    pub fn max(capacity: usize) -> Result<Self, Error> {
        Self::new(Order::Max, capacity)
    }

    /// Creates an empty min-heap.
    pub fn min(capacity: usize) -> Result<Self, Error> {
        Self::new(Order::Min, capacity)
    }

    pub fn order(&self) -> Order {
        self.order
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    /// The live entries, in heap (array) order.
    pub fn as_slice(&self) -> &[Entry] {
        &self.items
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Inserts an entry, then sifts it up to its place.
    ///
    /// If the heap is full, returns `Error::FullHeap` and leaves the heap untouched.
    pub fn insert(&mut self, entry: Entry) -> Result<(), Error> {
        if self.is_full() {
            warn!(
                "{}-heap is full ({} entries), rejected entry {}",
                self.order, self.capacity, entry.id
            );
            return Err(Error::FullHeap { id: entry.id });
        }
        let index = self.items.len();
        self.items.push(entry);
        sift_up(&mut self.items, index, self.order);
        self.check();
        Ok(())
    }

    /// Removes and returns the root: the greatest priority for a max-heap, the
    /// least for a min-heap. Returns `None` if the heap is empty.
    pub fn extract_root(&mut self) -> Option<Entry> {
        if self.items.len() <= 1 {
            return self.items.pop();
        }
        // swap_remove moves the last entry into the root slot.
        let root = self.items.swap_remove(0);
        let len = self.items.len();
        sift_down(&mut self.items, len, 0, self.order);
        self.check();
        Some(root)
    }

    /// Returns the root without removing it.
    pub fn peek_root(&self) -> Option<Entry> {
        self.items.first().copied()
    }

    /// Like `extract_root`, but returns `Entry::INVALID` when the heap is empty.
    pub fn extract_root_or_invalid(&mut self) -> Entry {
        self.extract_root().unwrap_or(Entry::INVALID)
    }

    /// Like `peek_root`, but returns `Entry::INVALID` when the heap is empty.
    pub fn peek_root_or_invalid(&self) -> Entry {
        self.peek_root().unwrap_or(Entry::INVALID)
    }

    /// Replaces the contents of the heap with `source` and restores the heap
    /// property bottom-up, in linear time.
    ///
    /// If `source` does not fit, returns `Error::CapacityExceeded` and leaves the
    /// heap untouched.
    pub fn build_from_array(&mut self, source: &[Entry]) -> Result<(), Error> {
        if source.len() > self.capacity {
            warn!(
                "cannot build {}-heap from {} entries, capacity is {}",
                self.order,
                source.len(),
                self.capacity
            );
            return Err(Error::CapacityExceeded {
                requested: source.len(),
                capacity: self.capacity,
            });
        }
        self.items.clear();
        self.items.extend_from_slice(source);
        let len = self.items.len();
        heapify(&mut self.items, len, self.order);
        debug!("built {}-heap from {} entries", self.order, len);
        self.check();
        Ok(())
    }

    /// Drains the heap, returning its entries in extraction order.
    pub fn into_sorted_vec(mut self) -> Vec<Entry> {
        let mut out = Vec::with_capacity(self.items.len());
        while let Some(entry) = self.extract_root() {
            out.push(entry);
        }
        out
    }

    fn check(&self) {
        debug_assert!(
            is_heap(&self.items, self.items.len(), self.order),
            "heap property violated: {:?}",
            self
        );
    }
}

impl Debug for Heap {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> core::fmt::Result {
        write!(fmt, "{}-heap {}/{}: ", self.order, self.len(), self.capacity)?;
        for item in self.items.iter() {
            write!(fmt, "{} ", item)?;
        }
        Ok(())
    }
}
