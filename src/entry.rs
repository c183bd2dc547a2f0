/// A record ordered by a heap. `id` is opaque to the heap; only `priority`
/// takes part in comparisons.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub struct Entry {
    pub id: i32,
    pub priority: i32,
}

impl Entry {
    /// The classic "no entry" value. Only returned by the `*_or_invalid` methods
    /// of `Heap`; everything else reports absence with `None`.
    pub const INVALID: Entry = Entry {
        id: -1,
        priority: -1,
    };

    pub const fn new(id: i32, priority: i32) -> Self {
        Self { id, priority }
    }

    pub fn is_invalid(&self) -> bool {
        *self == Self::INVALID
    }
}

impl core::fmt::Display for Entry {
    fn fmt(&self, fmt: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(fmt, "#{}(p{})", self.id, self.priority)
    }
}
