//! Compact arena holding the list's chunks.
//!
//! Chunks are stored in a `Vec<T>` addressed by `NodeId`; freed slots go on a
//! free list and are reused by the next allocation. Chain links are plain ids,
//! so unlinking a chunk can never leave a dangling pointer behind.

use crate::error::{ListResult, UnrolledListError};
use crate::types::{Chunk, NodeId, UnrolledList, NULL_NODE};

/// Statistics for a compact arena
#[derive(Debug, Clone, Copy)]
pub struct CompactArenaStats {
    pub total_capacity: usize,
    pub allocated_count: usize,
    pub free_count: usize,
    pub utilization: f64,
    pub fragmentation: f64,
}

/// Compact arena allocator with a separate free list
#[derive(Debug)]
pub struct CompactArena<T> {
    /// Direct storage without Option wrapper
    storage: Vec<T>,
    /// Free slot indices for reuse
    free_list: Vec<usize>,
    /// Track which slots are actually allocated
    allocated_mask: Vec<bool>,
    /// Number of `true` entries in `allocated_mask`
    allocated: usize,
}

impl<T> CompactArena<T> {
    /// Create a new empty compact arena
    pub fn new() -> Self {
        Self {
            storage: Vec::new(),
            free_list: Vec::new(),
            allocated_mask: Vec::new(),
            allocated: 0,
        }
    }

    /// Create a new compact arena with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: Vec::with_capacity(capacity),
            free_list: Vec::new(),
            allocated_mask: Vec::with_capacity(capacity),
            allocated: 0,
        }
    }

    /// Allocate a new item in the arena and return its ID.
    ///
    /// Fails without storing `item` if the slot table cannot grow.
    pub fn allocate(&mut self, item: T) -> ListResult<NodeId> {
        let index = if let Some(free_index) = self.free_list.pop() {
            // Reuse a free slot
            self.storage[free_index] = item;
            self.allocated_mask[free_index] = true;
            free_index
        } else {
            let index = self.storage.len();
            let id = NodeId::try_from(index)
                .ok()
                .filter(|&id| id != NULL_NODE)
                .ok_or_else(|| {
                    UnrolledListError::allocation_error("arena slot", "node id space exhausted")
                })?;
            self.storage.try_reserve(1)?;
            self.allocated_mask.try_reserve(1)?;
            self.storage.push(item);
            self.allocated_mask.push(true);
            debug_assert_eq!(id as usize, index);
            index
        };

        self.allocated += 1;
        Ok(index as NodeId)
    }

    /// Deallocate an item from the arena and return it (requires Default)
    pub fn deallocate(&mut self, id: NodeId) -> Option<T>
    where
        T: Default,
    {
        let index = self.slot(id)?;

        // Mark as free
        self.allocated_mask[index] = false;
        self.free_list.push(index);
        self.allocated -= 1;

        // Replace with default and return the old value
        Some(std::mem::take(&mut self.storage[index]))
    }

    /// Get a reference to an item in the arena
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.slot(id).map(|index| &self.storage[index])
    }

    /// Get a mutable reference to an item in the arena
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.slot(id).map(move |index| &mut self.storage[index])
    }

    /// Get mutable references to two distinct items at once.
    ///
    /// Returns `None` if either id is not allocated or both ids are equal.
    pub fn get_pair_mut(&mut self, first: NodeId, second: NodeId) -> Option<(&mut T, &mut T)> {
        let a = self.slot(first)?;
        let b = self.slot(second)?;
        if a == b {
            return None;
        }

        if a < b {
            let (low, high) = self.storage.split_at_mut(b);
            Some((&mut low[a], &mut high[0]))
        } else {
            let (low, high) = self.storage.split_at_mut(a);
            Some((&mut high[0], &mut low[b]))
        }
    }

    /// Check if an ID is valid and allocated
    pub fn contains(&self, id: NodeId) -> bool {
        self.slot(id).is_some()
    }

    /// Storage index for an allocated id.
    fn slot(&self, id: NodeId) -> Option<usize> {
        if id == NULL_NODE {
            return None;
        }

        let index = usize::try_from(id).ok()?;
        if self.allocated_mask.get(index).copied().unwrap_or(false) {
            Some(index)
        } else {
            None
        }
    }

    /// Get arena statistics
    pub fn stats(&self) -> CompactArenaStats {
        let total_capacity = self.storage.capacity();
        let allocated_count = self.allocated;
        let free_count = self.free_list.len();
        let utilization = if total_capacity > 0 {
            allocated_count as f64 / total_capacity as f64
        } else {
            0.0
        };
        let fragmentation = if allocated_count > 0 {
            free_count as f64 / (allocated_count + free_count) as f64
        } else {
            0.0
        };

        CompactArenaStats {
            total_capacity,
            allocated_count,
            free_count,
            utilization,
            fragmentation,
        }
    }

    /// Get the number of allocated items
    pub fn len(&self) -> usize {
        self.allocated
    }

    /// Check if the arena is empty
    pub fn is_empty(&self) -> bool {
        self.allocated == 0
    }

    /// Clear all items from the arena
    pub fn clear(&mut self) {
        self.storage.clear();
        self.allocated_mask.clear();
        self.free_list.clear();
        self.allocated = 0;
    }

    /// Get the number of free slots
    pub fn free_count(&self) -> usize {
        self.free_list.len()
    }
}

impl<T> Default for CompactArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// UNROLLED LIST NODE STORE
// ============================================================================

impl<T> UnrolledList<T> {
    /// Allocate an empty, unlinked chunk able to hold `capacity` elements.
    ///
    /// Both the element buffer and the arena slot are obtained here, so a
    /// failure leaves the list untouched.
    pub(crate) fn allocate_chunk(&mut self) -> ListResult<NodeId> {
        let chunk = Chunk::try_with_capacity(self.capacity)?;
        let id = self.arena.allocate(chunk)?;
        self.node_count += 1;
        tracing::trace!(node = id, capacity = self.capacity, "allocated chunk");
        Ok(id)
    }

    /// Allocate a chunk and make it the whole chain. The list must be empty.
    pub(crate) fn allocate_first_chunk(&mut self) -> ListResult<NodeId> {
        debug_assert!(self.head == NULL_NODE && self.tail == NULL_NODE);
        let id = self.allocate_chunk()?;
        self.head = id;
        self.tail = id;
        Ok(id)
    }

    /// Link the unlinked chunk `new_id` immediately after `id`.
    pub(crate) fn link_after(&mut self, id: NodeId, new_id: NodeId) -> ListResult<()> {
        let next = self.chunk(id)?.next;

        {
            let added = self.chunk_mut(new_id)?;
            added.prev = id;
            added.next = next;
        }
        self.chunk_mut(id)?.next = new_id;

        if next == NULL_NODE {
            self.tail = new_id;
        } else {
            self.chunk_mut(next)?.prev = new_id;
        }
        Ok(())
    }

    /// Unlink a chunk from any position in the chain and free it.
    ///
    /// Repairs neighbour links, `head`, `tail` and `node_count`. Freeing the
    /// only chunk leaves the list empty.
    pub(crate) fn free_chunk(&mut self, id: NodeId) -> ListResult<Chunk<T>> {
        let (prev, next) = {
            let chunk = self.chunk(id)?;
            (chunk.prev, chunk.next)
        };

        if prev == NULL_NODE {
            self.head = next;
        } else {
            self.chunk_mut(prev)?.next = next;
        }

        if next == NULL_NODE {
            self.tail = prev;
        } else {
            self.chunk_mut(next)?.prev = prev;
        }

        let chunk = self
            .arena
            .deallocate(id)
            .ok_or_else(|| UnrolledListError::corrupted_list(id, "freed twice"))?;
        self.node_count -= 1;
        tracing::trace!(node = id, remaining = self.node_count, "freed chunk");
        Ok(chunk)
    }

    /// Get statistics for the chunk arena.
    pub fn arena_stats(&self) -> CompactArenaStats {
        self.arena.stats()
    }
}
