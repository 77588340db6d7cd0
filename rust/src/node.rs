//! Chunk (node) implementation for UnrolledList.
//!
//! A chunk owns a contiguous run of live elements. The list passes its shared
//! capacity into every check that needs it. The two shift primitives here are
//! the only way elements move within a chunk.

use crate::error::ListResult;
use crate::types::{Chunk, NodeId, NULL_NODE};

impl<T> Chunk<T> {
    /// Creates an unlinked chunk with room for `capacity` elements.
    pub fn new(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
            next: NULL_NODE,
            prev: NULL_NODE,
        }
    }

    /// Like [`Chunk::new`], but reports allocation failure instead of aborting.
    pub fn try_with_capacity(capacity: usize) -> ListResult<Self> {
        let mut values = Vec::new();
        values.try_reserve_exact(capacity)?;
        Ok(Self {
            values,
            next: NULL_NODE,
            prev: NULL_NODE,
        })
    }

    // ============================================================================
    // ACCESSORS
    // ============================================================================

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the chunk holds no live elements.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns true if the chunk is saturated for the list's capacity.
    pub fn is_full(&self, capacity: usize) -> bool {
        self.values.len() >= capacity
    }

    /// Number of free slots left for the list's capacity.
    pub fn free_slots(&self, capacity: usize) -> usize {
        capacity.saturating_sub(self.values.len())
    }

    /// The live elements as a slice.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Next chunk in the chain.
    pub fn next(&self) -> NodeId {
        self.next
    }

    /// Previous chunk in the chain.
    pub fn prev(&self) -> NodeId {
        self.prev
    }

    // ============================================================================
    // SHIFT PRIMITIVES
    // ============================================================================

    /// Move every live element at or after `at` one slot right and write
    /// `value` into the gap.
    ///
    /// Requires `at <= len()` and a free slot; both are caller preconditions.
    pub fn open_gap(&mut self, at: usize, value: T) {
        debug_assert!(at <= self.values.len(), "open_gap at {} past {}", at, self.len());
        self.values.insert(at, value);
    }

    /// Remove the element at `at`, moving every later element one slot left.
    ///
    /// Requires `at < len()`.
    pub fn close_gap(&mut self, at: usize) -> T {
        debug_assert!(at < self.values.len(), "close_gap at {} past {}", at, self.len());
        self.values.remove(at)
    }

    /// Append to the end of the live region.
    pub fn push(&mut self, value: T) {
        self.values.push(value);
    }

    /// Move up to `max` elements from the front of `donor` onto the end of
    /// this chunk, returning how many moved.
    pub fn take_front_of(&mut self, donor: &mut Chunk<T>, max: usize) -> usize {
        let moved = max.min(donor.values.len());
        self.values.extend(donor.values.drain(..moved));
        moved
    }

    /// Move every element from `keep` onward into the empty chunk `target`,
    /// preserving order. Returns how many moved.
    pub fn move_tail_into(&mut self, keep: usize, target: &mut Chunk<T>) -> usize {
        debug_assert!(target.is_empty());
        let keep = keep.min(self.values.len());
        target.values.extend(self.values.drain(keep..));
        target.values.len()
    }
}

impl<T> Default for Chunk<T> {
    /// An unlinked chunk with no reserved storage.
    fn default() -> Self {
        Self {
            values: Vec::new(),
            next: NULL_NODE,
            prev: NULL_NODE,
        }
    }
}
