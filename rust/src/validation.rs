//! Validation and debugging utilities for UnrolledList.
//!
//! This module contains invariant checking, the diagnostic chain dump, and
//! the formatting and comparison impls built on top of them.

use std::fmt;

use crate::error::{ListResult, UnrolledListError};
use crate::types::{UnrolledList, NULL_NODE};

// ============================================================================
// VALIDATION METHODS
// ============================================================================

impl<T> UnrolledList<T> {
    /// Check if the list maintains its structural invariants.
    pub fn check_invariants(&self) -> bool {
        self.check_invariants_detailed().is_ok()
    }

    /// Check invariants with detailed error reporting.
    ///
    /// Verifies that every chunk holds between 1 and `capacity` elements, that
    /// `prev`/`next` links agree, that `head` and `tail` are the chain's true
    /// ends, and that the element and chunk counts match what is linked.
    pub fn check_invariants_detailed(&self) -> Result<(), String> {
        if self.head == NULL_NODE || self.tail == NULL_NODE {
            if self.head != self.tail {
                return Err(format!(
                    "head {} and tail {} disagree about emptiness",
                    self.head, self.tail
                ));
            }
            if self.len != 0 || self.node_count != 0 {
                return Err(format!(
                    "empty chain but len {} and node count {}",
                    self.len, self.node_count
                ));
            }
            return self.check_arena_consistency(0).map_err(|e| e.to_string());
        }

        let mut total = 0;
        let mut chunks = 0;
        let mut prev = NULL_NODE;
        let mut id = self.head;

        while id != NULL_NODE {
            let chunk = self
                .arena
                .get(id)
                .ok_or_else(|| format!("chunk {} is linked but not allocated", id))?;

            if chunk.prev != prev {
                return Err(format!(
                    "chunk {} has prev {} but follows {}",
                    id, chunk.prev, prev
                ));
            }
            if chunk.is_empty() {
                return Err(format!("chunk {} is empty but still linked", id));
            }
            if chunk.len() > self.capacity {
                return Err(format!(
                    "chunk {} holds {} elements, capacity is {}",
                    id,
                    chunk.len(),
                    self.capacity
                ));
            }

            total += chunk.len();
            chunks += 1;
            if chunks > self.arena.len() {
                return Err("chain is cyclic".to_string());
            }
            prev = id;
            id = chunk.next;
        }

        if prev != self.tail {
            return Err(format!("tail is {} but the last chunk is {}", self.tail, prev));
        }
        if total != self.len {
            return Err(format!(
                "list reports {} elements but chunks hold {}",
                self.len, total
            ));
        }
        if chunks != self.node_count {
            return Err(format!(
                "list reports {} chunks but {} are linked",
                self.node_count, chunks
            ));
        }

        self.check_arena_consistency(chunks)
            .map_err(|e| e.to_string())
    }

    /// Check that arena allocation matches the linked chain.
    fn check_arena_consistency(&self, linked: usize) -> ListResult<()> {
        let allocated = self.arena.len();
        if allocated != linked {
            return Err(UnrolledListError::data_integrity(
                "Arena consistency check",
                &format!("{} linked vs {} allocated", linked, allocated),
            ));
        }
        Ok(())
    }

    // ============================================================================
    // DEBUGGING AND TESTING UTILITIES
    // ============================================================================

    /// Alias for check_invariants_detailed (for test compatibility).
    pub fn validate(&self) -> Result<(), String> {
        self.check_invariants_detailed()
    }

    /// Returns the number of live elements in each chunk, in chain order.
    pub fn chunk_sizes(&self) -> Vec<usize> {
        self.chunks().map(<[T]>::len).collect()
    }

    /// Check if the list is in a valid state for an operation.
    pub fn validate_for_operation(&self, operation: &str) -> ListResult<()> {
        self.check_invariants_detailed()
            .map_err(|e| UnrolledListError::data_integrity(operation, &e))
    }

    /// Prints the chunk chain for debugging.
    pub fn print_chain(&self)
    where
        T: fmt::Display,
    {
        print!("{}", self);
    }
}

// ============================================================================
// FORMATTING AND COMPARISON
// ============================================================================

/// Renders the chain one chunk at a time:
///
/// ```text
/// chunk 0 (count 2)
///   0 -> a
///   1 -> b
/// -----------
/// ```
impl<T: fmt::Display> fmt::Display for UnrolledList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut index = 0;
        for (ordinal, chunk) in self.chunks().enumerate() {
            writeln!(f, "chunk {} (count {})", ordinal, chunk.len())?;
            for value in chunk {
                writeln!(f, "  {} -> {}", index, value)?;
                index += 1;
            }
            writeln!(f, "-----------")?;
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for UnrolledList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Lists are equal when their element sequences are; capacity and chunk
/// layout are ignored.
impl<T: PartialEq> PartialEq for UnrolledList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for UnrolledList<T> {}
