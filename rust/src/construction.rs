//! Construction and initialization logic for UnrolledList.
//!
//! This module contains capacity validation, the constructors, and the copy
//! and conversion paths. Copies are never structural clones: every element is
//! pushed onto the back of a fresh list, so the copy's chunk layout is the one
//! `push_back` produces and may use a different capacity (and element type)
//! than its source.

use crate::compact_arena::CompactArena;
use crate::error::{InitResult, ListResultExt, ModifyResult, UnrolledListError};
use crate::types::{UnrolledList, MIN_CAPACITY, NULL_NODE};

/// Default number of elements per chunk
pub const DEFAULT_CAPACITY: usize = 16;

impl<T> UnrolledList<T> {
    /// Create an empty list whose chunks hold up to `capacity` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use unrolled_list::UnrolledList;
    ///
    /// let list = UnrolledList::<i32>::new(8).unwrap();
    /// assert!(list.is_empty());
    /// assert_eq!(list.capacity(), 8);
    ///
    /// assert!(UnrolledList::<i32>::new(0).is_err());
    /// ```
    pub fn new(capacity: usize) -> InitResult<Self> {
        validation::validate_capacity(capacity)?;

        Ok(Self {
            capacity,
            head: NULL_NODE,
            tail: NULL_NODE,
            len: 0,
            node_count: 0,
            arena: CompactArena::new(),
        })
    }

    /// Create an empty list with [`DEFAULT_CAPACITY`].
    pub fn with_default_capacity() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            head: NULL_NODE,
            tail: NULL_NODE,
            len: 0,
            node_count: 0,
            arena: CompactArena::new(),
        }
    }

    /// Build a list of `capacity` by converting each element of `source`, in
    /// order, with `convert`.
    ///
    /// The conversion is whatever the caller supplies; it may narrow or lose
    /// precision and nothing is validated.
    ///
    /// # Examples
    ///
    /// ```
    /// use unrolled_list::UnrolledList;
    ///
    /// let mut wide = UnrolledList::new(4).unwrap();
    /// for v in [1.9_f64, -2.5, 300.0] {
    ///     wide.push_back(v).unwrap();
    /// }
    ///
    /// let narrow = UnrolledList::convert_from(&wide, 2, |v| *v as u8).unwrap();
    /// assert_eq!(narrow.iter().copied().collect::<Vec<_>>(), vec![1, 0, 255]);
    /// assert_eq!(narrow.capacity(), 2);
    /// ```
    pub fn convert_from<U, F>(
        source: &UnrolledList<U>,
        capacity: usize,
        convert: F,
    ) -> InitResult<Self>
    where
        F: FnMut(&U) -> T,
    {
        let mut list = Self::new(capacity)?;
        list.extend_converted(source, convert)
            .with_operation("convert_from")?;
        Ok(list)
    }

    /// Replace the contents of this list with converted copies of `source`'s
    /// elements. This list keeps its own capacity.
    pub fn assign_converted<U, F>(&mut self, source: &UnrolledList<U>, convert: F) -> ModifyResult<()>
    where
        F: FnMut(&U) -> T,
    {
        self.clear();
        self.extend_converted(source, convert)
            .with_operation("assign_converted")
    }

    /// Push every element yielded by `iter` onto the back of the list.
    ///
    /// Stops at the first allocation failure; elements pushed before it stay.
    pub fn try_extend<I>(&mut self, iter: I) -> ModifyResult<()>
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.push_back(value)?;
        }
        Ok(())
    }

    fn extend_converted<U, F>(&mut self, source: &UnrolledList<U>, mut convert: F) -> ModifyResult<()>
    where
        F: FnMut(&U) -> T,
    {
        for value in source.iter() {
            self.push_back(convert(value))?;
        }
        Ok(())
    }
}

// Default implementations
impl<T> Default for UnrolledList<T> {
    /// Create a list with default capacity.
    fn default() -> Self {
        Self::with_default_capacity()
    }
}

impl<T: Clone> Clone for UnrolledList<T> {
    fn clone(&self) -> Self {
        match Self::convert_from(self, self.capacity, T::clone) {
            Ok(list) => list,
            Err(e) => panic!("failed to clone unrolled list: {}", e),
        }
    }

    /// Rebuild `self` from `source`, keeping `self`'s capacity.
    fn clone_from(&mut self, source: &Self) {
        if let Err(e) = self.assign_converted(source, T::clone) {
            panic!("failed to clone unrolled list: {}", e);
        }
    }
}

impl<T> FromIterator<T> for UnrolledList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::with_default_capacity();
        if let Err(e) = list.try_extend(iter) {
            panic!("failed to collect into unrolled list: {}", e);
        }
        list
    }
}

/// Validation utilities for construction
pub mod validation {
    use super::*;

    /// Validate that a capacity is usable for list chunks.
    pub fn validate_capacity(capacity: usize) -> InitResult<()> {
        if capacity < MIN_CAPACITY {
            Err(UnrolledListError::invalid_capacity(capacity, MIN_CAPACITY))
        } else {
            Ok(())
        }
    }

    /// Get the recommended chunk capacity for an expected number of elements.
    ///
    /// Roughly the square root of the expected length, which balances node
    /// hops during resolution against in-chunk shifting, clamped to a range
    /// that keeps chunks within a few cache lines for small elements.
    pub fn recommended_capacity(expected_elements: usize) -> usize {
        let root = (expected_elements as f64).sqrt().ceil() as usize;
        root.clamp(8, 256)
    }
}
