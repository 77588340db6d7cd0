//! Core types and data structures for UnrolledList.
//!
//! This module contains the list itself, its node type, and the small value
//! types passed between the resolver, the split engine and the mutation
//! operations.

use crate::compact_arena::CompactArena;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Minimum number of elements a node must be able to hold
pub(crate) const MIN_CAPACITY: usize = 1;

// ============================================================================
// TYPE DEFINITIONS
// ============================================================================

/// Node ID type for arena-based allocation
pub type NodeId = u32;

/// Link value meaning "no node"
pub const NULL_NODE: NodeId = u32::MAX;

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// Index-addressable sequence stored as an unrolled doubly linked list.
///
/// Elements live in a chain of nodes ("chunks"), each holding a contiguous run
/// of at most `capacity` elements. Concatenating the chunks in chain order
/// gives the logical sequence. Inserting into a full chunk splits it in two
/// instead of moving the whole sequence, and [`compact`](Self::compact)
/// repacks the chain into the fewest possible chunks.
///
/// # Examples
///
/// ```
/// use unrolled_list::UnrolledList;
///
/// let mut list = UnrolledList::new(4).unwrap();
/// for i in 0..10 {
///     list.push_back(i).unwrap();
/// }
/// list.insert(5, 42).unwrap();
///
/// assert_eq!(list.at(5), Ok(&42));
/// assert_eq!(list.len(), 11);
/// assert_eq!(list.find(&42), 5);
/// assert_eq!(list.find(&99), list.len());
/// ```
///
/// # Performance Characteristics
///
/// - **Positional access**: O(n / C) node hops, then O(1)
/// - **Insertion / removal**: O(n / C + C)
/// - **push / pop at either end**: O(C) worst case
/// - **Iteration**: O(n), one link hop per chunk
///
/// # Capacity Guidelines
///
/// - Minimum capacity: 1 (the list degenerates to a plain linked list)
/// - Larger capacities give better scan locality but longer in-node shifts
pub struct UnrolledList<T> {
    /// Maximum number of elements per chunk, shared by every chunk.
    pub(crate) capacity: usize,
    /// First chunk in the chain, or `NULL_NODE` when empty.
    pub(crate) head: NodeId,
    /// Last chunk in the chain, or `NULL_NODE` when empty.
    pub(crate) tail: NodeId,
    /// Total number of live elements across all chunks.
    pub(crate) len: usize,
    /// Number of chunks currently linked into the chain.
    pub(crate) node_count: usize,
    /// Storage for every chunk.
    pub(crate) arena: CompactArena<Chunk<T>>,
}

/// One node of the chain: a run of live elements plus its links.
///
/// The node does not store its capacity; the owning list passes it in where a
/// check needs it.
#[derive(Debug, Clone)]
pub struct Chunk<T> {
    /// Live elements, in order. Never longer than the list's capacity.
    pub(crate) values: Vec<T>,
    /// Next chunk in the chain.
    pub(crate) next: NodeId,
    /// Previous chunk in the chain.
    pub(crate) prev: NodeId,
}

// ============================================================================
// ENUMS AND RESULT TYPES
// ============================================================================

/// Which side of a split keeps the larger share of a full chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitBias {
    /// The original chunk keeps `C/2 + 1` elements; used when growing the tail.
    FrontHeavy,
    /// The original chunk keeps `C/2` elements; used when growing the head.
    BackHeavy,
}

impl SplitBias {
    /// Number of elements the original chunk keeps when a full chunk of
    /// `capacity` elements is split with this bias.
    pub fn retained(self, capacity: usize) -> usize {
        match self {
            SplitBias::FrontHeavy => capacity / 2 + 1,
            SplitBias::BackHeavy => capacity / 2,
        }
    }
}

/// A resolved global position: the chunk holding it and the offset inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub node: NodeId,
    pub offset: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_shares_sum_to_capacity() {
        // odd capacity
        assert_eq!(SplitBias::FrontHeavy.retained(7), 4);
        assert_eq!(SplitBias::BackHeavy.retained(7), 3);
        // even capacity
        assert_eq!(SplitBias::FrontHeavy.retained(8), 5);
        assert_eq!(SplitBias::BackHeavy.retained(8), 4);

        for capacity in 1..=32 {
            for bias in [SplitBias::FrontHeavy, SplitBias::BackHeavy] {
                assert!(bias.retained(capacity) <= capacity, "cap {}", capacity);
            }
        }
    }
}
