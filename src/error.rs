use thiserror::Error;

/// Conditions reported by heap operations. None of them leave a heap in an
/// inconsistent state; a heap that reported an error is still usable.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum Error {
    /// Storage for the requested capacity could not be reserved.
    #[error("failed to allocate storage for {capacity} entries")]
    AllocationFailure { capacity: usize },

    #[error("heap capacity must be greater than zero")]
    ZeroCapacity,

    /// The heap already holds `capacity` entries. The rejected entry is
    /// identified by its id; the caller still owns it.
    #[error("heap is full, cannot insert entry {id}")]
    FullHeap { id: i32 },

    #[error("cannot build a heap of {requested} entries with capacity {capacity}")]
    CapacityExceeded { requested: usize, capacity: usize },
}
