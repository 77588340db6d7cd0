//! Chain compaction for UnrolledList.
//!
//! Walks the chain with two cursors. The receiver is the first chunk that
//! still has free slots. The donor is always the chunk right after it. Elements
//! move from the front of the donor to the back of the receiver. A donor that
//! empties is freed, and a receiver that fills hands over to the donor.

use crate::error::{ModifyResult, UnrolledListError};
use crate::types::{NodeId, UnrolledList, NULL_NODE};

impl<T> UnrolledList<T> {
    /// Repack every element into the fewest chunks possible, in order.
    ///
    /// Afterwards every chunk except possibly the last is full. Does nothing
    /// for a list with zero or one chunk.
    ///
    /// # Examples
    ///
    /// ```
    /// use unrolled_list::UnrolledList;
    ///
    /// let mut list = UnrolledList::new(4).unwrap();
    /// list.try_extend(0..10).unwrap();
    /// list.remove(1).unwrap();
    /// list.remove(4).unwrap();
    ///
    /// list.compact();
    /// assert_eq!(list.chunk_sizes(), vec![4, 4]);
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![0, 2, 3, 4, 6, 7, 8, 9]);
    /// ```
    pub fn compact(&mut self) {
        if let Err(e) = self.try_compact() {
            tracing::warn!(error = %e, "compaction stopped on a corrupted chain");
        }
    }

    /// [`compact`](Self::compact), reporting a broken chain instead of
    /// stopping silently.
    pub fn try_compact(&mut self) -> ModifyResult<()> {
        if self.node_count <= 1 {
            return Ok(());
        }

        let before = self.node_count;
        let capacity = self.capacity;

        // Skip the already-full prefix.
        let mut receiver = self.head;
        let mut donor = self.next_of(receiver);
        while donor != NULL_NODE && self.chunk(receiver)?.is_full(capacity) {
            receiver = donor;
            donor = self.next_of(donor);
        }

        while donor != NULL_NODE {
            let (receiving, giving) = self
                .arena
                .get_pair_mut(receiver, donor)
                .ok_or_else(|| UnrolledListError::corrupted_list(donor, "compaction cursor lost"))?;
            let room = receiving.free_slots(capacity);
            receiving.take_front_of(giving, room);
            let receiver_full = receiving.is_full(capacity);
            let donor_empty = giving.is_empty();

            if donor_empty {
                self.free_chunk(donor)?;
                donor = self.next_of(receiver);
            }
            if receiver_full && donor != NULL_NODE {
                receiver = donor;
                donor = self.next_of(donor);
            }
        }

        self.tail = self.find_tail(receiver);
        tracing::debug!(before, after = self.node_count, len = self.len, "compacted chain");
        Ok(())
    }

    /// Follow `next` links from `id` to the last chunk.
    fn find_tail(&self, mut id: NodeId) -> NodeId {
        loop {
            let next = self.next_of(id);
            if next == NULL_NODE {
                return id;
            }
            id = next;
        }
    }
}
