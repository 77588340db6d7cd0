//! Unrolled doubly linked list implementation in Rust with a Vec-like API.
//!
//! An [`UnrolledList`] stores its elements in a chain of fixed-capacity
//! chunks. Positional insert and remove only shift elements inside one chunk,
//! and chunks are split when full and freed when empty, so the list supports
//! index addressing, both-ends pushes and pops, and compaction of sparse
//! chains.
//!
//! ```
//! use unrolled_list::UnrolledList;
//!
//! let mut list = UnrolledList::new(4).unwrap();
//! list.try_extend(1..=6).unwrap();
//! list.insert(3, 99).unwrap();
//! assert_eq!(list.remove(0), Ok(1));
//! assert_eq!(list[2], 99);
//! assert_eq!(list.find(&6), list.len() - 1);
//! ```

mod compact_arena;
mod compaction;
mod construction;
mod delete_operations;
mod error;
mod get_operations;
mod insert_operations;
mod iteration;
mod node;
mod types;
mod validation;

#[cfg(test)]
mod proptests;

pub use compact_arena::{CompactArena, CompactArenaStats};
pub use construction::{validation as capacity, DEFAULT_CAPACITY};
pub use error::{
    AccessResult, ErrorKind, InitResult, ListResult, ListResultExt, ModifyResult,
    UnrolledListError,
};
pub use iteration::{Chunks, IntoIter, Iter};
pub use types::{Chunk, NodeId, Position, SplitBias, UnrolledList, NULL_NODE};

impl<T> UnrolledList<T> {
    /// Insert with invariant checks before and after the operation.
    ///
    /// A corrupted chain is reported as a
    /// [`DataIntegrityError`](UnrolledListError::DataIntegrityError) instead of
    /// being modified further.
    pub fn checked_insert(&mut self, index: usize, value: T) -> ModifyResult<()> {
        self.validate_for_operation("checked_insert (before)")?;
        self.insert(index, value)?;
        self.validate_for_operation("checked_insert (after)")
    }

    /// Remove with invariant checks before and after the operation.
    pub fn checked_remove(&mut self, index: usize) -> ModifyResult<T> {
        self.validate_for_operation("checked_remove (before)")?;
        let value = self.remove(index)?;
        self.validate_for_operation("checked_remove (after)")?;
        Ok(value)
    }
}
