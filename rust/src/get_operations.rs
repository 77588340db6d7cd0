//! GET operations for UnrolledList.
//!
//! This module contains the index resolver and every read or in-place write
//! that goes through it: positional access, first/last, linear search, and
//! the chunk accessors the other modules build on.

use std::ops::{Index, IndexMut};

use crate::error::{AccessResult, ListResult, UnrolledListError};
use crate::types::{Chunk, NodeId, Position, UnrolledList, NULL_NODE};

impl<T> UnrolledList<T> {
    // ============================================================================
    // PUBLIC GET OPERATIONS
    // ============================================================================

    /// Returns the number of elements in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Maximum number of elements per chunk.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of chunks currently in the chain.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Get a reference to the element at `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<&T> {
        let position = self.locate(index)?;
        self.arena
            .get(position.node)
            .and_then(|chunk| chunk.values.get(position.offset))
    }

    /// Get a mutable reference to the element at `index`, or `None` if out of range.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let position = self.locate(index)?;
        self.arena
            .get_mut(position.node)
            .and_then(|chunk| chunk.values.get_mut(position.offset))
    }

    /// Get the element at `index`, returning an error if it doesn't exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use unrolled_list::UnrolledList;
    ///
    /// let mut list = UnrolledList::new(4).unwrap();
    /// list.push_back("a").unwrap();
    /// assert_eq!(list.at(0).unwrap(), &"a");
    /// assert!(list.at(1).unwrap_err().is_out_of_range());
    /// ```
    pub fn at(&self, index: usize) -> AccessResult<&T> {
        let len = self.len;
        self.get(index)
            .ok_or_else(|| UnrolledListError::index_out_of_range(index, len))
    }

    /// Mutable version of [`at`](Self::at).
    pub fn at_mut(&mut self, index: usize) -> AccessResult<&mut T> {
        let len = self.len;
        self.get_mut(index)
            .ok_or_else(|| UnrolledListError::index_out_of_range(index, len))
    }

    /// The first element of the list.
    pub fn first(&self) -> AccessResult<&T> {
        self.arena
            .get(self.head)
            .and_then(|chunk| chunk.values.first())
            .ok_or_else(|| UnrolledListError::empty_list("read first element"))
    }

    /// Mutable reference to the first element of the list.
    pub fn first_mut(&mut self) -> AccessResult<&mut T> {
        let head = self.head;
        self.arena
            .get_mut(head)
            .and_then(|chunk| chunk.values.first_mut())
            .ok_or_else(|| UnrolledListError::empty_list("read first element"))
    }

    /// The last element of the list.
    pub fn last(&self) -> AccessResult<&T> {
        self.arena
            .get(self.tail)
            .and_then(|chunk| chunk.values.last())
            .ok_or_else(|| UnrolledListError::empty_list("read last element"))
    }

    /// Mutable reference to the last element of the list.
    pub fn last_mut(&mut self) -> AccessResult<&mut T> {
        let tail = self.tail;
        self.arena
            .get_mut(tail)
            .and_then(|chunk| chunk.values.last_mut())
            .ok_or_else(|| UnrolledListError::empty_list("read last element"))
    }

    /// Index of the first element equal to `value`, or `len()` if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use unrolled_list::UnrolledList;
    ///
    /// let list: UnrolledList<i32> = [5, 7, 5].into_iter().collect();
    /// assert_eq!(list.find(&5), 0);
    /// assert_eq!(list.find(&7), 1);
    /// assert_eq!(list.find(&9), 3);
    /// ```
    pub fn find(&self, value: &T) -> usize
    where
        T: PartialEq,
    {
        let mut base = 0;
        for chunk in self.chunks() {
            if let Some(offset) = chunk.iter().position(|v| v == value) {
                return base + offset;
            }
            base += chunk.len();
        }
        self.len
    }

    /// Returns true if some element equals `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.find(value) < self.len
    }

    // ============================================================================
    // INDEX RESOLVER
    // ============================================================================

    /// Resolve a global index to the chunk holding it and the offset inside
    /// that chunk. Returns `None` for `index >= len()`.
    ///
    /// Walks from the head subtracting chunk lengths, so the cost is one hop
    /// per chunk before the target.
    pub(crate) fn locate(&self, index: usize) -> Option<Position> {
        if index >= self.len {
            return None;
        }

        let mut remaining = index;
        let mut id = self.head;
        while let Some(chunk) = self.arena.get(id) {
            if remaining < chunk.len() {
                return Some(Position {
                    node: id,
                    offset: remaining,
                });
            }
            remaining -= chunk.len();
            id = chunk.next;
        }
        None
    }

    // ============================================================================
    // ARENA ACCESS HELPERS
    // ============================================================================

    /// Get a chunk, reporting a dangling id as list corruption.
    pub(crate) fn chunk(&self, id: NodeId) -> ListResult<&Chunk<T>> {
        self.arena
            .get(id)
            .ok_or_else(|| UnrolledListError::corrupted_list(id, "chunk not allocated"))
    }

    /// Mutable version of [`chunk`](Self::chunk).
    pub(crate) fn chunk_mut(&mut self, id: NodeId) -> ListResult<&mut Chunk<T>> {
        self.arena
            .get_mut(id)
            .ok_or_else(|| UnrolledListError::corrupted_list(id, "chunk not allocated"))
    }

    /// Next link of a chunk, or `NULL_NODE` if the chunk does not exist.
    pub(crate) fn next_of(&self, id: NodeId) -> NodeId {
        self.arena.get(id).map(|chunk| chunk.next).unwrap_or(NULL_NODE)
    }
}

impl<T> Index<usize> for UnrolledList<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= len()`. Use [`UnrolledList::at`] for a checked read.
    fn index(&self, index: usize) -> &T {
        match self.at(index) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> IndexMut<usize> for UnrolledList<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.at_mut(index) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}
