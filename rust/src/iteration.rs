//! Iterator implementations for UnrolledList.
//!
//! Sequential access follows chunk links instead of resolving every index
//! from the head, so a full scan costs one hop per chunk.

use crate::types::{NodeId, UnrolledList, NULL_NODE};

// ============================================================================
// ITERATOR STRUCTS
// ============================================================================

/// Iterator over the elements of an [`UnrolledList`] in order.
pub struct Iter<'a, T> {
    list: &'a UnrolledList<T>,
    current: std::slice::Iter<'a, T>,
    next_chunk: NodeId,
    remaining: usize,
}

/// Iterator over each chunk's live elements, in chain order.
pub struct Chunks<'a, T> {
    list: &'a UnrolledList<T>,
    next_chunk: NodeId,
}

/// Owning iterator that drains an [`UnrolledList`] from the front.
pub struct IntoIter<T> {
    list: UnrolledList<T>,
}

// ============================================================================
// UNROLLED LIST ITERATOR METHODS
// ============================================================================

impl<T> UnrolledList<T> {
    /// Returns an iterator over all elements in order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            current: (&[]).iter(),
            next_chunk: self.head,
            remaining: self.len,
        }
    }

    /// Returns an iterator over the chunks, each as a slice of its live elements.
    pub fn chunks(&self) -> Chunks<'_, T> {
        Chunks {
            list: self,
            next_chunk: self.head,
        }
    }
}

// ============================================================================
// ITER IMPLEMENTATION
// ============================================================================

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(value) = self.current.next() {
                self.remaining -= 1;
                return Some(value);
            }

            let chunk = self.list.arena.get(self.next_chunk)?;
            self.current = chunk.values.iter();
            self.next_chunk = chunk.next;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> std::iter::FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            current: self.current.clone(),
            next_chunk: self.next_chunk,
            remaining: self.remaining,
        }
    }
}

// ============================================================================
// CHUNKS IMPLEMENTATION
// ============================================================================

impl<'a, T> Iterator for Chunks<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_chunk == NULL_NODE {
            return None;
        }
        let chunk = self.list.arena.get(self.next_chunk)?;
        self.next_chunk = chunk.next;
        Some(chunk.values())
    }
}

// ============================================================================
// INTO_ITER IMPLEMENTATION
// ============================================================================

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.list.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<'a, T> IntoIterator for &'a UnrolledList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for UnrolledList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}
