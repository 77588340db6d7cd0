//! DELETE operations for UnrolledList.
//!
//! This module contains positional removal, popping from either end and
//! clearing. A chunk whose last element is removed is unlinked and freed
//! before the operation returns.

use crate::error::{ListResultExt, ModifyResult, UnrolledListError};
use crate::types::{NodeId, UnrolledList, NULL_NODE};

impl<T> UnrolledList<T> {
    /// Remove and return the element at `index`, shifting every later element
    /// one position forward.
    ///
    /// # Examples
    ///
    /// ```
    /// use unrolled_list::UnrolledList;
    ///
    /// let mut list = UnrolledList::new(4).unwrap();
    /// list.try_extend([10, 20, 30, 40, 50]).unwrap();
    /// assert_eq!(list.remove(2), Ok(30));
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![10, 20, 40, 50]);
    /// assert!(list.remove(4).is_err());
    /// ```
    pub fn remove(&mut self, index: usize) -> ModifyResult<T> {
        if index >= self.len {
            return Err(UnrolledListError::index_out_of_range(index, self.len));
        }

        let position = self.locate(index).ok_or_else(|| {
            UnrolledListError::data_integrity("remove", "position within length did not resolve")
        })?;
        self.take_from(position.node, position.offset)
    }

    /// Remove and return the last element, or `None` if the list is empty.
    ///
    /// A corrupted chain is logged and also yields `None`; use
    /// [`try_pop_back`](Self::try_pop_back) to observe the error.
    pub fn pop_back(&mut self) -> Option<T> {
        self.try_pop_back().or_default_with_log()
    }

    /// Remove and return the first element, or `None` if the list is empty.
    ///
    /// A corrupted chain is logged and also yields `None`; use
    /// [`try_pop_front`](Self::try_pop_front) to observe the error.
    pub fn pop_front(&mut self) -> Option<T> {
        self.try_pop_front().or_default_with_log()
    }

    /// [`pop_back`](Self::pop_back), reporting a broken chain as an error
    /// instead of `None`.
    pub fn try_pop_back(&mut self) -> ModifyResult<Option<T>> {
        if self.is_empty() {
            return Ok(None);
        }
        let tail = self.tail;
        let last = self
            .chunk(tail)?
            .len()
            .checked_sub(1)
            .ok_or_else(|| UnrolledListError::corrupted_list(tail, "empty tail chunk"))?;
        self.take_from(tail, last).map(Some)
    }

    /// [`pop_front`](Self::pop_front), reporting a broken chain as an error
    /// instead of `None`.
    pub fn try_pop_front(&mut self) -> ModifyResult<Option<T>> {
        if self.is_empty() {
            return Ok(None);
        }
        let head = self.head;
        if self.chunk(head)?.is_empty() {
            return Err(UnrolledListError::corrupted_list(head, "empty head chunk"));
        }
        self.take_from(head, 0).map(Some)
    }

    /// Remove every element and free every chunk.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = NULL_NODE;
        self.tail = NULL_NODE;
        self.len = 0;
        self.node_count = 0;
    }

    /// Close the gap at `offset` in chunk `node`, freeing the chunk if that
    /// was its last element.
    fn take_from(&mut self, node: NodeId, offset: usize) -> ModifyResult<T> {
        let chunk = self.chunk_mut(node)?;
        let value = chunk.close_gap(offset);
        let emptied = chunk.is_empty();
        self.len -= 1;

        if emptied {
            self.free_chunk(node)?;
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::{ErrorKind, UnrolledListError};
    use crate::types::{UnrolledList, NULL_NODE};

    fn contents(list: &UnrolledList<i32>) -> Vec<i32> {
        list.iter().copied().collect()
    }

    #[test]
    fn test_remove_middle() {
        let mut list = UnrolledList::new(4).unwrap();
        list.try_extend([10, 20, 30, 40, 50]).unwrap();
        assert_eq!(list.remove(2), Ok(30));
        assert_eq!(contents(&list), vec![10, 20, 40, 50]);
        assert_eq!(list.len(), 4);
        list.validate().unwrap();
    }

    #[test]
    fn test_remove_ends() {
        let mut list = UnrolledList::new(3).unwrap();
        list.try_extend(0..7).unwrap();
        assert_eq!(list.remove(0), Ok(0));
        assert_eq!(list.remove(5), Ok(6));
        assert_eq!(contents(&list), vec![1, 2, 3, 4, 5]);
        assert_eq!(list.first(), Ok(&1));
        assert_eq!(list.last(), Ok(&5));
        list.validate().unwrap();
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut list = UnrolledList::<i32>::new(3).unwrap();
        assert!(list.remove(0).unwrap_err().is_out_of_range());
        list.push_back(1).unwrap();
        assert!(list.remove(1).unwrap_err().is_out_of_range());
        assert_eq!(contents(&list), vec![1]);
    }

    #[test]
    fn test_remove_frees_emptied_chunk() {
        let mut list = UnrolledList::new(1).unwrap();
        list.try_extend(0..5).unwrap();
        assert_eq!(list.node_count(), 5);
        assert_eq!(list.remove(2), Ok(2));
        assert_eq!(list.node_count(), 4);
        assert_eq!(contents(&list), vec![0, 1, 3, 4]);
        list.validate().unwrap();
    }

    #[test]
    fn test_pop_back_until_empty() {
        let mut list = UnrolledList::new(3).unwrap();
        list.try_extend(0..8).unwrap();
        for expected in (0..8).rev() {
            assert_eq!(list.pop_back(), Some(expected));
            list.validate().unwrap();
        }
        assert_eq!(list.pop_back(), None);
        assert!(list.is_empty());
        assert_eq!(list.head, NULL_NODE);
        assert_eq!(list.tail, NULL_NODE);
        assert_eq!(list.node_count(), 0);
    }

    #[test]
    fn test_pop_front_until_empty() {
        let mut list = UnrolledList::new(3).unwrap();
        list.try_extend(0..8).unwrap();
        for expected in 0..8 {
            assert_eq!(list.pop_front(), Some(expected));
            list.validate().unwrap();
        }
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.node_count(), 0);
        assert_eq!(list.arena_stats().allocated_count, 0);
    }

    #[test]
    fn test_clear_then_reuse() {
        let mut list = UnrolledList::new(2).unwrap();
        list.try_extend(0..9).unwrap();
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.node_count(), 0);
        assert!(list.first().is_err());
        list.validate().unwrap();

        list.push_front(5).unwrap();
        assert_eq!(contents(&list), vec![5]);
        list.validate().unwrap();
    }

    #[test]
    fn test_try_pop_reports_corrupted_chain() {
        let mut list = UnrolledList::new(3).unwrap();
        list.try_extend(0..7).unwrap();
        assert_eq!(list.try_pop_back(), Ok(Some(6)));
        assert_eq!(list.try_pop_front(), Ok(Some(0)));

        let (head, tail) = (list.head, list.tail);
        list.tail = 4_000;
        assert!(matches!(
            list.try_pop_back(),
            Err(UnrolledListError::CorruptedList(_))
        ));
        assert_eq!(list.pop_back(), None);
        list.tail = tail;

        list.head = 4_000;
        assert_eq!(list.try_pop_front().unwrap_err().kind(), ErrorKind::DataError);
        assert_eq!(list.pop_front(), None);
        list.head = head;

        // the failed pops left every element in place
        assert_eq!(contents(&list), vec![1, 2, 3, 4, 5]);
        list.validate().unwrap();
    }

    #[test]
    fn test_try_pop_on_empty_is_none() {
        let mut list = UnrolledList::<i32>::new(2).unwrap();
        assert_eq!(list.try_pop_back(), Ok(None));
        assert_eq!(list.try_pop_front(), Ok(None));
    }
}
