use crate::entry::Entry;
use core::fmt::{Display, Formatter};
use core::str::FromStr;
use thiserror::Error;

/// Selects which end of the priority range sits at the root of a heap.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Order {
    /// Root holds the greatest priority.
    Max,
    /// Root holds the least priority.
    Min,
}

impl Order {
    /// Returns true if `a` must sit above `b` in a heap of this order.
    /// The comparison is strict, so equal priorities never beat each other.
    #[inline]
    pub fn beats(self, a: &Entry, b: &Entry) -> bool {
        match self {
            Order::Max => a.priority > b.priority,
            Order::Min => a.priority < b.priority,
        }
    }
}

impl Display for Order {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> core::fmt::Result {
        fmt.write_str(match self {
            Order::Max => "max",
            Order::Min => "min",
        })
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
#[error("heap order must be \"max\" or \"min\"")]
pub struct ParseOrderError;

impl FromStr for Order {
    type Err = ParseOrderError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            s if s.eq_ignore_ascii_case("max") => Ok(Order::Max),
            s if s.eq_ignore_ascii_case("min") => Ok(Order::Min),
            _ => Err(ParseOrderError),
        }
    }
}
