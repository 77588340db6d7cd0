//! INSERT operations for UnrolledList.
//!
//! This module contains the split engine and every operation that adds an
//! element: `push_back`, `push_front` and positional `insert`. All of them
//! obtain any new chunk before moving a single element, so an allocation
//! failure leaves the list exactly as it was.

use crate::error::{ModifyResult, UnrolledListError};
use crate::types::{NodeId, SplitBias, UnrolledList, NULL_NODE};

impl<T> UnrolledList<T> {
    // ============================================================================
    // PUBLIC INSERT OPERATIONS
    // ============================================================================

    /// Append an element to the back of the list.
    ///
    /// A full tail chunk is split front-heavy and the new chunk becomes the
    /// tail.
    pub fn push_back(&mut self, value: T) -> ModifyResult<()> {
        if self.tail == NULL_NODE {
            self.allocate_first_chunk()?;
        }

        let tail = self.tail;
        if self.chunk(tail)?.is_full(self.capacity) {
            let added = self.split_chunk(tail, SplitBias::FrontHeavy)?;
            debug_assert_eq!(self.tail, added);
        }

        let tail = self.tail;
        self.chunk_mut(tail)?.push(value);
        self.len += 1;
        Ok(())
    }

    /// Prepend an element to the front of the list.
    ///
    /// A full head chunk is split back-heavy so the head keeps the smaller
    /// share and has room at its front.
    pub fn push_front(&mut self, value: T) -> ModifyResult<()> {
        if self.head == NULL_NODE {
            self.allocate_first_chunk()?;
        }

        let head = self.head;
        if self.chunk(head)?.is_full(self.capacity) {
            self.split_chunk(head, SplitBias::BackHeavy)?;
        }

        self.chunk_mut(head)?.open_gap(0, value);
        self.len += 1;
        Ok(())
    }

    /// Insert an element so that it ends up at `index`, shifting every later
    /// element one position back.
    ///
    /// `index == len()` appends and `index == 0` prepends. Anything larger
    /// than `len()` is an [`IndexOutOfRange`](UnrolledListError::IndexOutOfRange)
    /// error.
    ///
    /// # Examples
    ///
    /// ```
    /// use unrolled_list::UnrolledList;
    ///
    /// let mut list = UnrolledList::new(3).unwrap();
    /// list.try_extend([1, 2, 4, 5]).unwrap();
    /// list.insert(2, 3).unwrap();
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    /// assert!(list.insert(7, 0).is_err());
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> ModifyResult<()> {
        if index > self.len {
            return Err(UnrolledListError::index_out_of_range(index, self.len));
        }
        if index == self.len {
            return self.push_back(value);
        }
        if index == 0 {
            return self.push_front(value);
        }

        let position = self.locate(index).ok_or_else(|| {
            UnrolledListError::data_integrity("insert", "position within length did not resolve")
        })?;
        let (mut node, mut offset) = (position.node, position.offset);

        if self.chunk(node)?.is_full(self.capacity) {
            // Keep the free slot on whichever side receives the element.
            let bias = if offset <= self.capacity / 2 {
                SplitBias::BackHeavy
            } else {
                SplitBias::FrontHeavy
            };
            let added = self.split_chunk(node, bias)?;
            let kept = self.chunk(node)?.len();
            if offset > kept {
                node = added;
                offset -= kept;
            }
        }

        let chunk = self.chunk_mut(node)?;
        debug_assert!(offset <= chunk.len());
        chunk.open_gap(offset, value);
        self.len += 1;
        Ok(())
    }

    // ============================================================================
    // SPLIT ENGINE
    // ============================================================================

    /// Split the full chunk `id` in two, linking a new chunk right after it.
    ///
    /// The original keeps `bias.retained(capacity)` elements and the rest move,
    /// in order, to the front of the new chunk. Updates `tail` when `id` was
    /// the last chunk. Returns the new chunk's id.
    pub(crate) fn split_chunk(&mut self, id: NodeId, bias: SplitBias) -> ModifyResult<NodeId> {
        let capacity = self.capacity;
        let full = self.chunk(id)?.is_full(capacity);
        debug_assert!(full, "split of non-full chunk {}", id);

        let added = self.allocate_chunk()?;
        self.link_after(id, added)?;

        let keep = bias.retained(capacity);
        let (source, target) = self
            .arena
            .get_pair_mut(id, added)
            .ok_or_else(|| UnrolledListError::corrupted_list(id, "split target missing"))?;
        let moved = source.move_tail_into(keep, target);

        tracing::trace!(node = id, new_node = added, kept = keep, moved, ?bias, "split chunk");
        Ok(added)
    }
}
