//! Bounded identifier allocation

use super::{RenumberError, RenumberResult};
use std::ops::Range;

/// Strictly increasing identifier generator over a half-open range
///
/// Each call to [`next_id`](IdAllocator::next_id) yields the next unused
/// integer in `[low, high)`. Identifiers are never reused, and exhausting
/// the range is a terminal error for the run.
#[derive(Debug)]
pub struct IdAllocator {
    low: u64,
    high: u64,
    next: u64,
}

impl IdAllocator {
    /// Create an allocator over `[range.start, range.end)`
    pub fn new(range: Range<u64>) -> Self {
        Self {
            low: range.start,
            high: range.end,
            next: range.start,
        }
    }

    /// Allocate the next identifier, advancing internal state
    pub fn next_id(&mut self) -> RenumberResult<u64> {
        if self.next >= self.high {
            return Err(RenumberError::AllocatorExhausted {
                low: self.low,
                high: self.high,
            });
        }
        let id = self.next;
        self.next += 1;
        Ok(id)
    }

    /// Number of identifiers handed out so far
    pub fn allocated(&self) -> u64 {
        self.next - self.low
    }
}
