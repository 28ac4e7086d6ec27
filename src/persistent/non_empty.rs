//! A list refinement that is non-empty by construction.
//!
//! [`NonEmptyList`] stores its first element inline next to a [`ConsList`]
//! tail, so there is no way to build a value without a head. Operations
//! that are partial on a possibly-empty list - taking the head, the last
//! element, a seedless reduction - become total here and return plain
//! values instead of `Option`s.
//!
//! # Examples
//!
//! ```rust
//! use conslist::prelude::*;
//!
//! let list = NonEmptyList::new(1, conslist![2, 3]);
//! assert_eq!(*list.head(), 1);
//! assert_eq!(*list.last(), 3);
//! assert_eq!(list.len(), 3);
//!
//! // Round-trips with the possibly-empty list
//! let widened = list.to_list();
//! assert_eq!(widened.to_non_empty(), Some(list));
//! ```

use std::fmt;

use super::list::{ConsList, ConsListIter};

/// A list guaranteed to contain at least one element.
///
/// The guarantee is structural: the head is a field, not a node that might
/// be absent. The tail may be empty; the whole list never is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyList<T> {
    head: T,
    tail: ConsList<T>,
}

impl<T> NonEmptyList<T> {
    /// Creates a non-empty list from a head and a (possibly empty) tail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::prelude::*;
    ///
    /// let list = NonEmptyList::new(1, conslist![2, 3]);
    /// assert_eq!(list.len(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub const fn new(head: T, tail: ConsList<T>) -> Self {
        Self { head, tail }
    }

    /// Creates a non-empty list containing a single element.
    #[inline]
    #[must_use]
    pub const fn singleton(head: T) -> Self {
        Self {
            head,
            tail: ConsList::new(),
        }
    }

    /// Returns a reference to the first element.
    ///
    /// Total: unlike [`ConsList::head`] there is no `Option` to unwrap.
    #[inline]
    #[must_use]
    pub const fn head(&self) -> &T {
        &self.head
    }

    /// Returns a reference to the last element.
    ///
    /// Falls back to the head when the tail is empty, so the result always
    /// exists.
    #[must_use]
    pub fn last(&self) -> &T {
        self.tail.last().unwrap_or(&self.head)
    }

    /// Returns the (possibly empty) tail.
    #[inline]
    #[must_use]
    pub const fn tail(&self) -> &ConsList<T> {
        &self.tail
    }

    /// Returns the number of elements. Always at least 1.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// Returns a reference to the element at the given index, or `None`
    /// when out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index == 0 {
            Some(&self.head)
        } else {
            self.tail.get(index - 1)
        }
    }

    /// Returns an iterator over references to the elements, head first.
    #[must_use]
    pub fn iter(&self) -> NonEmptyListIter<'_, T> {
        NonEmptyListIter {
            head: Some(&self.head),
            tail: self.tail.iter(),
        }
    }

    /// Applies a function to each element, producing a new non-empty list.
    ///
    /// The head maps to the head, so non-emptiness is preserved by
    /// construction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::prelude::*;
    ///
    /// let list = NonEmptyList::new(1, conslist![2, 3]);
    /// let doubled = list.map(|x| x * 2);
    /// assert_eq!(doubled, NonEmptyList::new(2, conslist![4, 6]));
    /// ```
    #[must_use]
    pub fn map<B, F>(&self, mut function: F) -> NonEmptyList<B>
    where
        F: FnMut(&T) -> B,
    {
        NonEmptyList {
            head: function(&self.head),
            tail: self.tail.map(function),
        }
    }
}

impl<T: Clone> NonEmptyList<T> {
    /// Prepends an element, pushing the current head into the tail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::prelude::*;
    ///
    /// let list = NonEmptyList::singleton(2).cons(1);
    /// assert_eq!(*list.head(), 1);
    /// assert_eq!(list.to_list(), conslist![1, 2]);
    /// ```
    #[must_use]
    pub fn cons(&self, element: T) -> Self {
        Self {
            head: element,
            tail: self.tail.cons(self.head.clone()),
        }
    }

    /// Reduces the list with the head as the initial accumulator.
    ///
    /// Total: a non-empty list always has a first element to seed the
    /// reduction, so no `Option` is involved.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::prelude::*;
    ///
    /// let list = NonEmptyList::new(1, conslist![2, 3]);
    /// assert_eq!(list.reduce_left(|accumulator, x| accumulator + x), 6);
    /// ```
    #[must_use]
    pub fn reduce_left<F>(&self, mut function: F) -> T
    where
        F: FnMut(T, T) -> T,
    {
        self.tail
            .iter()
            .fold(self.head.clone(), |accumulator, element| {
                function(accumulator, element.clone())
            })
    }

    /// Widens to a possibly-empty [`ConsList`].
    ///
    /// Round-trips exactly with [`ConsList::to_non_empty`].
    #[must_use]
    pub fn to_list(&self) -> ConsList<T> {
        self.tail.cons(self.head.clone())
    }
}

impl<T: Clone> From<NonEmptyList<T>> for ConsList<T> {
    fn from(list: NonEmptyList<T>) -> Self {
        list.to_list()
    }
}

/// An iterator over references to elements of a [`NonEmptyList`].
pub struct NonEmptyListIter<'a, T> {
    head: Option<&'a T>,
    tail: ConsListIter<'a, T>,
}

impl<'a, T> Iterator for NonEmptyListIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self.head.take() {
            Some(head) => Some(head),
            None => self.tail.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.head.is_some()) + self.tail.len();
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for NonEmptyListIter<'_, T> {}

impl<'a, T> IntoIterator for &'a NonEmptyList<T> {
    type Item = &'a T;
    type IntoIter = NonEmptyListIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Renders identically to the widened list: `[e1,e2,e3]`.
impl<T: fmt::Display> fmt::Display for NonEmptyList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[{}", self.head)?;
        for element in &self.tail {
            write!(formatter, ",{element}")?;
        }
        write!(formatter, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conslist;
    use rstest::rstest;

    #[rstest]
    fn test_head_and_last_are_total() {
        let list = NonEmptyList::new(1, conslist![2, 3]);
        assert_eq!(*list.head(), 1);
        assert_eq!(*list.last(), 3);

        let single = NonEmptyList::singleton(7);
        assert_eq!(*single.last(), 7);
    }

    #[rstest]
    fn test_len_counts_the_head() {
        assert_eq!(NonEmptyList::singleton(1).len(), 1);
        assert_eq!(NonEmptyList::new(1, conslist![2, 3]).len(), 3);
    }

    #[rstest]
    fn test_get_spans_head_and_tail() {
        let list = NonEmptyList::new(1, conslist![2, 3]);
        assert_eq!(list.get(0), Some(&1));
        assert_eq!(list.get(2), Some(&3));
        assert_eq!(list.get(3), None);
    }

    #[rstest]
    fn test_iter_yields_head_first() {
        let list = NonEmptyList::new(1, conslist![2, 3]);
        let collected: Vec<i32> = list.iter().copied().collect();
        assert_eq!(collected, vec![1, 2, 3]);
        assert_eq!(list.iter().len(), 3);
    }

    #[rstest]
    fn test_cons_pushes_old_head_down() {
        let list = NonEmptyList::singleton(3).cons(2).cons(1);
        assert_eq!(*list.head(), 1);
        assert_eq!(list.to_list(), conslist![1, 2, 3]);
    }

    #[rstest]
    fn test_map_preserves_shape() {
        let list = NonEmptyList::new(1, conslist![2, 3]);
        let mapped = list.map(|x| x * 10);
        assert_eq!(mapped, NonEmptyList::new(10, conslist![20, 30]));
        assert_eq!(mapped.len(), list.len());
    }

    #[rstest]
    fn test_reduce_left_needs_no_seed() {
        let list = NonEmptyList::new(1, conslist![2, 3, 4]);
        assert_eq!(list.reduce_left(|accumulator, x| accumulator + x), 10);
        assert_eq!(NonEmptyList::singleton(9).reduce_left(|a, b| a + b), 9);
    }

    #[rstest]
    fn test_round_trip_with_cons_list() {
        let list = conslist![1, 2, 3];
        let refined = list.to_non_empty().unwrap();
        assert_eq!(refined.to_list(), list);

        let back: crate::persistent::ConsList<i32> = refined.into();
        assert_eq!(back, list);
    }

    #[rstest]
    fn test_empty_list_does_not_refine() {
        let empty: crate::persistent::ConsList<i32> = crate::persistent::ConsList::new();
        assert!(empty.to_non_empty().is_none());
    }

    #[rstest]
    fn test_display_matches_list_rendering() {
        let list = NonEmptyList::new(1, conslist![2, 3]);
        assert_eq!(format!("{list}"), "[1,2,3]");
        assert_eq!(format!("{}", list.to_list()), "[1,2,3]");
    }
}
