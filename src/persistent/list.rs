//! Persistent (immutable) singly-linked cons list.
//!
//! This module provides [`ConsList`], an immutable cons list in the
//! Lisp/Scheme tradition: a value is either empty or an element followed by
//! the rest of the list. Reference counting makes prepending and taking the
//! tail O(1) and lets any number of lists share a common suffix.
//!
//! # Overview
//!
//! - O(1) prepend (`cons`), head access, tail access, and length
//! - O(n) everything that must visit elements (search, slicing, folds)
//! - Every operation is **total**: out-of-range indices and counts saturate
//!   to the nearest valid behavior, and results that may not exist are
//!   `Option`s. Nothing panics for a well-typed input.
//! - Every operation is **stack-safe**: traversals are explicit loops, so
//!   cost never depends on call-stack depth, even for lists with millions
//!   of elements.
//!
//! # Examples
//!
//! ```rust
//! use conslist::prelude::*;
//!
//! let list = ConsList::new().cons(3).cons(2).cons(1);
//! assert_eq!(list.head(), Some(&1));
//! assert_eq!(list.len(), 3);
//!
//! // Structural sharing: the original list is preserved
//! let extended = list.cons(0);
//! assert_eq!(list.len(), 3);
//! assert_eq!(extended.len(), 4);
//!
//! // Build from an iterator
//! let list: ConsList<i32> = (1..=5).collect();
//! assert_eq!(list.iter().sum::<i32>(), 15);
//! ```
//!
//! # Structural sharing
//!
//! ```text
//! list1: 1 -> 2 -> 3 -> nil
//! list2 = list1.cons(0): 0 -> [1 -> 2 -> 3 -> nil]  // shares [1, 2, 3]
//! ```
//!
//! The empty list holds no node at all, so an empty `ConsList<T>` costs
//! nothing at any element type. Emptiness is observable only through
//! [`is_empty`](ConsList::is_empty) and equality, never through identity.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use crate::typeclass::{
    CoflatMap, Foldable, Functor, Monoid, Semigroup, Traversable, TypeConstructor,
};

use super::non_empty::NonEmptyList;

/// Internal node structure for the cons list.
///
/// Each node holds an element and an optional link to the next node.
/// `Rc` enables structural sharing between lists; nodes are never mutated
/// after construction.
struct Node<T> {
    element: T,
    next: Option<Rc<Self>>,
}

/// A persistent (immutable) singly-linked cons list.
///
/// A `ConsList<T>` is either empty or an element followed by another
/// `ConsList<T>`. All operations return new lists and never mutate existing
/// nodes, so a list can be shared freely.
///
/// # Time complexity
///
/// | Operation    | Complexity |
/// |--------------|------------|
/// | `new`        | O(1)       |
/// | `cons`       | O(1)       |
/// | `head`       | O(1)       |
/// | `tail`       | O(1)       |
/// | `len`        | O(1)       |
/// | `get`        | O(n)       |
/// | `append`     | O(n)       |
/// | `reverse`    | O(n)       |
///
/// # Totality
///
/// No method panics for a structurally valid list: index- and count-taking
/// methods saturate ([`take`](Self::take), [`drop_first`](Self::drop_first),
/// [`updated`](Self::updated), [`patch`](Self::patch)), and methods whose
/// result may not exist return `Option` ([`head`](Self::head),
/// [`get`](Self::get), [`index_of`](Self::index_of)).
///
/// # Examples
///
/// ```rust
/// use conslist::persistent::ConsList;
///
/// let list = ConsList::singleton(42);
/// assert_eq!(list.head(), Some(&42));
/// ```
pub struct ConsList<T> {
    /// Reference to the head node (if any).
    head: Option<Rc<Node<T>>>,
    /// Cached length for O(1) access.
    length: usize,
}

/// Builds a [`ConsList`] from its elements, front to back.
///
/// # Examples
///
/// ```rust
/// use conslist::prelude::*;
///
/// let list = conslist![1, 2, 3];
/// assert_eq!(list.head(), Some(&1));
/// assert_eq!(list.len(), 3);
///
/// let empty: ConsList<i32> = conslist![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! conslist {
    () => {
        $crate::persistent::ConsList::new()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::persistent::ConsList::from_vec(vec![$($element),+])
    };
}

impl<T> ConsList<T> {
    /// Creates a new empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::persistent::ConsList;
    ///
    /// let list: ConsList<i32> = ConsList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            head: None,
            length: 0,
        }
    }

    /// Creates a list containing a single element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::persistent::ConsList;
    ///
    /// let list = ConsList::singleton(42);
    /// assert_eq!(list.head(), Some(&42));
    /// assert_eq!(list.len(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::new().cons(element)
    }

    /// Builds a list from a `Vec`, preserving order.
    ///
    /// Consumes the `Vec` from the end with `pop`, so the list is built
    /// back to front in a single loop with no recursion.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::persistent::ConsList;
    ///
    /// let list = ConsList::from_vec(vec![1, 2, 3]);
    /// assert_eq!(list.head(), Some(&1));
    /// ```
    #[must_use]
    pub fn from_vec(mut elements: Vec<T>) -> Self {
        let length = elements.len();
        if length == 0 {
            return Self::new();
        }

        let mut head: Option<Rc<Node<T>>> = None;
        while let Some(element) = elements.pop() {
            head = Some(Rc::new(Node {
                element,
                next: head,
            }));
        }

        Self { head, length }
    }

    /// Builds a list from any [`Foldable`] source, preserving order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::persistent::ConsList;
    ///
    /// let list = ConsList::from_foldable(vec![1, 2, 3]);
    /// assert_eq!(list.len(), 3);
    ///
    /// let from_option = ConsList::from_foldable(Some(7));
    /// assert_eq!(from_option, ConsList::singleton(7));
    /// ```
    #[must_use]
    pub fn from_foldable<F>(source: F) -> Self
    where
        F: Foldable<Inner = T>,
    {
        Self::from_vec(source.to_vec())
    }

    /// Prepends an element to the front of the list.
    ///
    /// The new list shares the entire original list as its tail.
    ///
    /// # Complexity
    ///
    /// O(1) time and space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::persistent::ConsList;
    ///
    /// let list = ConsList::new().cons(3).cons(2).cons(1);
    /// assert_eq!(list.head(), Some(&1));
    /// ```
    #[inline]
    #[must_use]
    pub fn cons(&self, element: T) -> Self {
        Self {
            head: Some(Rc::new(Node {
                element,
                next: self.head.clone(),
            })),
            length: self.length + 1,
        }
    }

    /// Returns a reference to the first element, or `None` if the list is
    /// empty.
    #[inline]
    #[must_use]
    pub fn head(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.element)
    }

    /// Returns a reference to the last element, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        let mut current = self.head.as_ref()?;
        while let Some(next) = current.next.as_ref() {
            current = next;
        }
        Some(&current.element)
    }

    /// Returns the list without its first element.
    ///
    /// The empty list's tail is the empty list. Shares structure with the
    /// original.
    ///
    /// # Complexity
    ///
    /// O(1) time and space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::persistent::ConsList;
    ///
    /// let list = ConsList::new().cons(3).cons(2).cons(1);
    /// let tail = list.tail();
    /// assert_eq!(tail.head(), Some(&2));
    /// assert_eq!(tail.len(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub fn tail(&self) -> Self {
        self.head.as_ref().map_or_else(Self::new, |node| Self {
            head: node.next.clone(),
            length: self.length.saturating_sub(1),
        })
    }

    /// Decomposes the list into its head and tail.
    ///
    /// Returns `None` if the list is empty. This is the single
    /// deconstruction point the rest of the surface funnels through.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::persistent::ConsList;
    ///
    /// let list = ConsList::new().cons(2).cons(1);
    /// let (head, tail) = list.uncons().unwrap();
    /// assert_eq!(*head, 1);
    /// assert_eq!(tail.head(), Some(&2));
    /// ```
    #[inline]
    #[must_use]
    pub fn uncons(&self) -> Option<(&T, Self)> {
        self.head.as_ref().map(|node| {
            let tail = Self {
                head: node.next.clone(),
                length: self.length.saturating_sub(1),
            };
            (&node.element, tail)
        })
    }

    /// Exhaustive case analysis with one handler per shape.
    ///
    /// Calls `on_empty` for the empty list and `on_cons(head, tail)` for a
    /// non-empty one. Equivalent to matching on [`uncons`](Self::uncons)
    /// but reads as a fold over the two constructors.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::persistent::ConsList;
    ///
    /// let list = ConsList::new().cons(2).cons(1);
    /// let described = list.fold_uncons(
    ///     || String::from("empty"),
    ///     |head, tail| format!("{head} then {} more", tail.len()),
    /// );
    /// assert_eq!(described, "1 then 1 more");
    /// ```
    pub fn fold_uncons<B, E, C>(&self, on_empty: E, on_cons: C) -> B
    where
        E: FnOnce() -> B,
        C: FnOnce(&T, Self) -> B,
    {
        match self.uncons() {
            Some((head, tail)) => on_cons(head, tail),
            None => on_empty(),
        }
    }

    /// Returns a reference to the element at the given index, or `None`
    /// when out of bounds.
    ///
    /// # Complexity
    ///
    /// O(index)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::persistent::ConsList;
    ///
    /// let list = ConsList::new().cons(3).cons(2).cons(1);
    /// assert_eq!(list.get(0), Some(&1));
    /// assert_eq!(list.get(10), None);
    /// ```
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        let mut current = &self.head;
        let mut remaining = index;

        while let Some(node) = current {
            if remaining == 0 {
                return Some(&node.element);
            }
            remaining -= 1;
            current = &node.next;
        }
        None
    }

    /// Returns the number of elements in the list.
    ///
    /// # Complexity
    ///
    /// O(1) - the length is cached
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the list contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns an iterator over references to the elements, front to back.
    ///
    /// The iterator is lazy: it only walks as far as it is driven, so it
    /// doubles as the list's stream-like export.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::persistent::ConsList;
    ///
    /// let list = ConsList::new().cons(3).cons(2).cons(1);
    /// let collected: Vec<&i32> = list.iter().collect();
    /// assert_eq!(collected, vec![&1, &2, &3]);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> ConsListIter<'_, T> {
        ConsListIter {
            current: self.head.as_ref(),
            remaining: self.length,
        }
    }

    /// Returns a reference to the first element satisfying the predicate.
    #[must_use]
    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().find(|element| predicate(element))
    }

    /// Finds the index of the first element that satisfies the predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::persistent::ConsList;
    ///
    /// let list: ConsList<i32> = (1..=5).collect();
    /// assert_eq!(list.find_index(|x| *x > 3), Some(3));
    /// assert_eq!(list.find_index(|x| *x > 10), None);
    /// ```
    #[must_use]
    pub fn find_index<P>(&self, mut predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().position(|element| predicate(element))
    }

    /// Finds the index of the last element that satisfies the predicate.
    ///
    /// Implemented as a reverse pass plus a forward search with the index
    /// corrected back (`length - 1 - found`), not a separate backward scan.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::persistent::ConsList;
    ///
    /// let list: ConsList<i32> = ConsList::from_vec(vec![1, 2, 1, 2]);
    /// assert_eq!(list.last_index_where(|x| *x == 2), Some(3));
    /// ```
    #[must_use]
    pub fn last_index_where<P>(&self, mut predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        let elements: Vec<&T> = self.iter().collect();
        elements
            .iter()
            .rev()
            .position(|element| predicate(element))
            .map(|found| self.length - 1 - found)
    }

    /// Returns whether any element satisfies the predicate.
    ///
    /// Short-circuits at the first match.
    #[must_use]
    pub fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().any(|element| predicate(element))
    }

    /// Returns whether every element satisfies the predicate.
    ///
    /// Vacuously true for the empty list.
    #[must_use]
    pub fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().all(|element| predicate(element))
    }

    /// Counts the elements satisfying the predicate.
    #[must_use]
    pub fn count_by<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().filter(|element| predicate(element)).count()
    }

    /// Applies a function to each element, producing a new list of the
    /// results in the same order.
    ///
    /// Length and order are always preserved. The pass is a loop over a
    /// buffer consumed back to front, so arbitrarily long lists map without
    /// deep recursion.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::persistent::ConsList;
    ///
    /// let list: ConsList<i32> = (1..=3).collect();
    /// assert_eq!(list.map(|x| x * 10), ConsList::from_vec(vec![10, 20, 30]));
    /// ```
    #[must_use]
    pub fn map<B, F>(&self, mut function: F) -> ConsList<B>
    where
        F: FnMut(&T) -> B,
    {
        ConsList::from_vec(self.iter().map(|element| function(element)).collect())
    }

    /// Applies a list-producing function to each element and concatenates
    /// the results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::prelude::*;
    ///
    /// let list = conslist![1, 2, 3];
    /// let doubled = list.flat_map(|x| conslist![*x, x * 10]);
    /// assert_eq!(doubled, conslist![1, 10, 2, 20, 3, 30]);
    /// ```
    #[must_use]
    pub fn flat_map<B, F>(&self, mut function: F) -> ConsList<B>
    where
        B: Clone,
        F: FnMut(&T) -> ConsList<B>,
    {
        let mut results = Vec::new();
        for element in self {
            results.extend(function(element).iter().cloned());
        }
        ConsList::from_vec(results)
    }

    /// Combines two lists element-wise with a function, truncating to the
    /// shorter length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::prelude::*;
    ///
    /// let left = conslist![1, 2, 3];
    /// let right = conslist![10, 20];
    /// assert_eq!(left.zip_with(&right, |a, b| a + b), conslist![11, 22]);
    /// ```
    #[must_use]
    pub fn zip_with<U, B, F>(&self, other: &ConsList<U>, mut function: F) -> ConsList<B>
    where
        F: FnMut(&T, &U) -> B,
    {
        ConsList::from_vec(
            self.iter()
                .zip(other.iter())
                .map(|(left, right)| function(left, right))
                .collect(),
        )
    }

    /// Folds the list from the left by reference.
    ///
    /// Iterates front to back, threading the accumulator through
    /// `function`. This is the primitive the derived operations are built
    /// on; the consuming equivalent lives on [`Foldable`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::prelude::*;
    ///
    /// let list = conslist![1, 2, 3];
    /// assert_eq!(list.fold_left_ref(0, |accumulator, x| accumulator + x), 6);
    /// ```
    #[must_use]
    pub fn fold_left_ref<B, F>(&self, init: B, mut function: F) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        self.iter()
            .fold(init, |accumulator, element| function(accumulator, element))
    }

    /// Folds the list from the right by reference.
    ///
    /// Defined as a reverse pass followed by a left fold with flipped
    /// arguments - not a separate recursive algorithm - so it is stack-safe
    /// by construction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::prelude::*;
    ///
    /// let list = conslist![1, 2, 3, 4];
    /// let nested = list.fold_right_ref(0, |x, accumulator| x - accumulator);
    /// assert_eq!(nested, 1 - (2 - (3 - (4 - 0))));
    /// ```
    #[must_use]
    pub fn fold_right_ref<B, F>(&self, init: B, mut function: F) -> B
    where
        F: FnMut(&T, B) -> B,
    {
        let reversed: Vec<&T> = self.iter().collect();
        reversed
            .into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    /// Threads a state value through a left-to-right pass.
    ///
    /// Returns the final state and the list of per-element results in
    /// original order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::prelude::*;
    ///
    /// let list = conslist![1, 2, 3];
    /// let (total, running) = list.map_accum_left(0, |state, x| (state + x, state + x));
    /// assert_eq!(total, 6);
    /// assert_eq!(running, conslist![1, 3, 6]);
    /// ```
    #[must_use]
    pub fn map_accum_left<S, B, F>(&self, initial: S, mut function: F) -> (S, ConsList<B>)
    where
        F: FnMut(S, &T) -> (S, B),
    {
        let mut state = initial;
        let mut results = Vec::with_capacity(self.length);
        for element in self {
            let (next_state, result) = function(state, element);
            state = next_state;
            results.push(result);
        }
        (state, ConsList::from_vec(results))
    }

    /// Threads a state value through a right-to-left pass.
    ///
    /// Returns the final state and the list of per-element results in
    /// original order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::prelude::*;
    ///
    /// let list = conslist![1, 2, 3];
    /// let (total, suffix_sums) = list.map_accum_right(0, |state, x| (state + x, state + x));
    /// assert_eq!(total, 6);
    /// assert_eq!(suffix_sums, conslist![6, 5, 3]);
    /// ```
    #[must_use]
    pub fn map_accum_right<S, B, F>(&self, initial: S, mut function: F) -> (S, ConsList<B>)
    where
        F: FnMut(S, &T) -> (S, B),
    {
        let elements: Vec<&T> = self.iter().collect();
        let mut state = initial;
        // Results are produced right to left; consing them back on in that
        // order restores the original left-to-right alignment.
        let mut results = ConsList::new();
        for element in elements.into_iter().rev() {
            let (next_state, result) = function(state, element);
            state = next_state;
            results = results.cons(result);
        }
        (state, results)
    }

    /// Returns every suffix of the list, longest first, ending with the
    /// empty list.
    ///
    /// Each suffix shares structure with the original, so this allocates
    /// one list handle per position rather than copying elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::prelude::*;
    ///
    /// let list = conslist![1, 2];
    /// let tails = list.tails();
    /// assert_eq!(tails.len(), 3);
    /// assert_eq!(tails.get(0), Some(&conslist![1, 2]));
    /// assert_eq!(tails.get(2), Some(&ConsList::new()));
    /// ```
    #[must_use]
    pub fn tails(&self) -> ConsList<Self> {
        let mut suffixes = Vec::with_capacity(self.length + 1);
        let mut current = self.clone();
        while !current.is_empty() {
            suffixes.push(current.clone());
            current = current.tail();
        }
        suffixes.push(ConsList::new());
        ConsList::from_vec(suffixes)
    }
}

// =============================================================================
// Search requiring element equality
// =============================================================================

impl<T: PartialEq> ConsList<T> {
    /// Returns whether the list contains the given element.
    #[must_use]
    pub fn contains(&self, element: &T) -> bool {
        self.iter().any(|candidate| candidate == element)
    }

    /// Finds the index of the first occurrence of an element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::prelude::*;
    ///
    /// let list = conslist![1, 2, 3, 2];
    /// assert_eq!(list.index_of(&2), Some(1));
    /// assert_eq!(list.index_of(&9), None);
    /// ```
    #[must_use]
    pub fn index_of(&self, element: &T) -> Option<usize> {
        self.iter().position(|candidate| candidate == element)
    }

    /// Finds the index of the last occurrence of an element.
    ///
    /// Reverse pass plus forward search with the index corrected back.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::prelude::*;
    ///
    /// let list = conslist![1, 2, 3, 2];
    /// assert_eq!(list.last_index_of(&2), Some(3));
    /// ```
    #[must_use]
    pub fn last_index_of(&self, element: &T) -> Option<usize> {
        self.last_index_where(|candidate| candidate == element)
    }

    /// Finds the starting index of the first occurrence of `slice` as a
    /// contiguous sub-list.
    ///
    /// The empty list occurs at index 0 of every list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::prelude::*;
    ///
    /// let list = conslist![1, 2, 3, 2, 3];
    /// assert_eq!(list.index_of_slice(&conslist![2, 3]), Some(1));
    /// assert_eq!(list.index_of_slice(&conslist![3, 1]), None);
    /// assert_eq!(list.index_of_slice(&ConsList::new()), Some(0));
    /// ```
    #[must_use]
    pub fn index_of_slice(&self, slice: &Self) -> Option<usize> {
        let haystack: Vec<&T> = self.iter().collect();
        let needle: Vec<&T> = slice.iter().collect();
        if needle.is_empty() {
            return Some(0);
        }
        if needle.len() > haystack.len() {
            return None;
        }
        (0..=haystack.len() - needle.len()).find(|&start| {
            needle
                .iter()
                .enumerate()
                .all(|(offset, element)| haystack[start + offset] == *element)
        })
    }

    /// Finds the starting index of the last occurrence of `slice` as a
    /// contiguous sub-list.
    ///
    /// Implemented by searching both lists reversed and correcting the
    /// found index (`length - found - slice_length`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::prelude::*;
    ///
    /// let list = conslist![1, 2, 3, 2, 3];
    /// assert_eq!(list.last_index_of_slice(&conslist![2, 3]), Some(3));
    /// assert_eq!(list.last_index_of_slice(&ConsList::new()), Some(5));
    /// ```
    #[must_use]
    pub fn last_index_of_slice(&self, slice: &Self) -> Option<usize> {
        let mut haystack: Vec<&T> = self.iter().collect();
        let mut needle: Vec<&T> = slice.iter().collect();
        haystack.reverse();
        needle.reverse();
        if needle.is_empty() {
            return Some(self.length);
        }
        if needle.len() > haystack.len() {
            return None;
        }
        (0..=haystack.len() - needle.len())
            .find(|&start| {
                needle
                    .iter()
                    .enumerate()
                    .all(|(offset, element)| haystack[start + offset] == *element)
            })
            .map(|found| self.length - found - slice.length)
    }

    /// Returns whether the list starts with the given prefix.
    ///
    /// Compares pairwise until the prefix is exhausted; the empty list is a
    /// prefix of every list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::prelude::*;
    ///
    /// let list = conslist![1, 2, 3];
    /// assert!(list.starts_with(&conslist![1, 2]));
    /// assert!(list.starts_with(&ConsList::new()));
    /// assert!(!list.starts_with(&conslist![2]));
    /// ```
    #[must_use]
    pub fn starts_with(&self, prefix: &Self) -> bool {
        let mut own = self.iter();
        for expected in prefix {
            match own.next() {
                Some(element) if element == expected => {}
                _ => return false,
            }
        }
        true
    }

    /// Returns whether the list ends with the given suffix.
    #[must_use]
    pub fn ends_with(&self, suffix: &Self) -> bool {
        if suffix.length > self.length {
            return false;
        }
        self.iter()
            .skip(self.length - suffix.length)
            .zip(suffix.iter())
            .all(|(element, expected)| element == expected)
    }
}

// =============================================================================
// Operations that rebuild (and therefore clone) elements
// =============================================================================

impl<T: Clone> ConsList<T> {
    /// Creates a list from a slice, preserving order.
    #[must_use]
    pub fn from_slice(slice: &[T]) -> Self {
        let length = slice.len();
        if length == 0 {
            return Self::new();
        }

        let mut head: Option<Rc<Node<T>>> = None;
        for element in slice.iter().rev() {
            head = Some(Rc::new(Node {
                element: element.clone(),
                next: head,
            }));
        }

        Self { head, length }
    }

    /// Appends another list to this list.
    ///
    /// Rebuilds this list's nodes in front of `other`, which is shared
    /// untouched.
    ///
    /// # Complexity
    ///
    /// O(n) where n = `self.len()`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::prelude::*;
    ///
    /// let left = conslist![1, 2];
    /// let right = conslist![3, 4];
    /// assert_eq!(left.append(&right), conslist![1, 2, 3, 4]);
    /// ```
    #[must_use]
    pub fn append(&self, other: &Self) -> Self {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }

        let mut elements: Vec<T> = self.iter().cloned().collect();
        let mut result = other.clone();
        while let Some(element) = elements.pop() {
            result = result.cons(element);
        }
        result
    }

    /// Returns a new list with elements in reverse order.
    ///
    /// A left fold that conses each element onto an accumulator.
    ///
    /// # Complexity
    ///
    /// O(n) time and space
    #[must_use]
    pub fn reverse(&self) -> Self {
        let mut result = Self::new();
        for element in self {
            result = result.cons(element.clone());
        }
        result
    }

    /// Returns the list without its last element.
    ///
    /// The empty list's init is the empty list.
    #[must_use]
    pub fn init(&self) -> Self {
        self.take(self.length.saturating_sub(1))
    }

    /// Returns a new list containing the first `count` elements.
    ///
    /// Saturating: `count` beyond the length takes everything.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::prelude::*;
    ///
    /// let list = conslist![1, 2, 3, 4, 5];
    /// assert_eq!(list.take(3), conslist![1, 2, 3]);
    /// assert_eq!(list.take(10), list);
    /// assert!(list.take(0).is_empty());
    /// ```
    #[must_use]
    pub fn take(&self, count: usize) -> Self {
        let actual = count.min(self.length);
        if actual == self.length {
            return self.clone();
        }
        Self::from_vec(self.iter().take(actual).cloned().collect())
    }

    /// Returns a new list with the first `count` elements removed.
    ///
    /// Saturating: `count` beyond the length drops everything. The result
    /// shares structure with the original.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::prelude::*;
    ///
    /// let list = conslist![1, 2, 3, 4, 5];
    /// assert_eq!(list.drop_first(2), conslist![3, 4, 5]);
    /// assert!(list.drop_first(10).is_empty());
    /// ```
    #[must_use]
    pub fn drop_first(&self, count: usize) -> Self {
        let mut current = self.clone();
        for _ in 0..count.min(self.length) {
            current = current.tail();
        }
        current
    }

    /// Returns a new list containing the last `count` elements.
    ///
    /// Saturating, and shares structure (it is a suffix).
    #[must_use]
    pub fn take_right(&self, count: usize) -> Self {
        self.drop_first(self.length.saturating_sub(count))
    }

    /// Returns a new list with the last `count` elements removed.
    ///
    /// Saturating: dropping more than the length yields the empty list.
    #[must_use]
    pub fn drop_right(&self, count: usize) -> Self {
        self.take(self.length.saturating_sub(count))
    }

    /// Splits the list at the given index.
    ///
    /// Equivalent to `(self.take(index), self.drop_first(index))`; an index
    /// beyond the length yields `(whole list, empty)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::prelude::*;
    ///
    /// let list = conslist![1, 2, 3];
    /// let (left, right) = list.split_at(1);
    /// assert_eq!(left, conslist![1]);
    /// assert_eq!(right, conslist![2, 3]);
    ///
    /// let (all, rest) = list.split_at(5);
    /// assert_eq!(all, list);
    /// assert!(rest.is_empty());
    /// ```
    #[must_use]
    pub fn split_at(&self, index: usize) -> (Self, Self) {
        (self.take(index), self.drop_first(index))
    }

    /// Returns the elements from index `from` (inclusive) to `until`
    /// (exclusive).
    ///
    /// Both bounds saturate; an empty or inverted range yields the empty
    /// list.
    #[must_use]
    pub fn slice(&self, from: usize, until: usize) -> Self {
        self.drop_first(from).take(until.saturating_sub(from))
    }

    /// Returns the longest prefix whose elements satisfy the predicate.
    #[must_use]
    pub fn take_while<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        Self::from_vec(
            self.iter()
                .take_while(|element| predicate(element))
                .cloned()
                .collect(),
        )
    }

    /// Removes the longest prefix whose elements satisfy the predicate.
    ///
    /// The result is a suffix of the original and shares its structure.
    #[must_use]
    pub fn drop_while<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        let prefix_length = self
            .iter()
            .take_while(|element| predicate(element))
            .count();
        self.drop_first(prefix_length)
    }

    /// Splits the list into the longest prefix satisfying the predicate and
    /// the remainder.
    ///
    /// When the scan reaches the end without the predicate failing, the
    /// prefix is the original list handed back as-is (an O(1) shared clone)
    /// rather than a rebuilt copy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::prelude::*;
    ///
    /// let list = conslist![2, 4, 5, 6];
    /// let (evens, rest) = list.span(|x| x % 2 == 0);
    /// assert_eq!(evens, conslist![2, 4]);
    /// assert_eq!(rest, conslist![5, 6]);
    /// ```
    #[must_use]
    pub fn span<P>(&self, mut predicate: P) -> (Self, Self)
    where
        P: FnMut(&T) -> bool,
    {
        let prefix_length = self
            .iter()
            .take_while(|element| predicate(element))
            .count();
        if prefix_length == self.length {
            (self.clone(), Self::new())
        } else {
            (self.take(prefix_length), self.drop_first(prefix_length))
        }
    }

    /// Returns a copy of the list with the element at `index` replaced.
    ///
    /// Total and silently a no-op: an out-of-range index returns the
    /// original list unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::prelude::*;
    ///
    /// let list = conslist![1, 2, 3];
    /// assert_eq!(list.updated(1, 9), conslist![1, 9, 3]);
    /// assert_eq!(list.updated(10, 9), list);
    /// ```
    #[must_use]
    pub fn updated(&self, index: usize, value: T) -> Self {
        if index >= self.length {
            return self.clone();
        }
        let prefix: Vec<T> = self.iter().take(index).cloned().collect();
        let mut result = self.drop_first(index + 1).cons(value);
        for element in prefix.into_iter().rev() {
            result = result.cons(element);
        }
        result
    }

    /// Replaces `replaced` elements starting at `from` with `replacement`.
    ///
    /// Composed from three total operations - split, append, drop - so no
    /// combination of arguments can fail; everything saturates.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::prelude::*;
    ///
    /// let list = conslist![1, 2, 3];
    /// assert_eq!(list.patch(1, &conslist![9, 9], 1), conslist![1, 9, 9, 3]);
    /// assert_eq!(list.patch(10, &conslist![4], 0), conslist![1, 2, 3, 4]);
    /// ```
    #[must_use]
    pub fn patch(&self, from: usize, replacement: &Self, replaced: usize) -> Self {
        let (before, rest) = self.split_at(from);
        before
            .append(replacement)
            .append(&rest.drop_first(replaced))
    }

    /// Pads the list on the right with copies of `element` up to
    /// `target_length`.
    ///
    /// A target at or below the current length returns the list unchanged.
    #[must_use]
    pub fn pad_to(&self, target_length: usize, element: T) -> Self {
        if target_length <= self.length {
            return self.clone();
        }
        let mut elements: Vec<T> = self.iter().cloned().collect();
        elements.resize(target_length, element);
        Self::from_vec(elements)
    }

    /// Returns a new list with the separator inserted between every pair of
    /// adjacent elements.
    ///
    /// No separator appears before the first or after the last element;
    /// empty and single-element lists come back unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::prelude::*;
    ///
    /// let list = conslist![1, 2, 3];
    /// assert_eq!(list.intersperse(0), conslist![1, 0, 2, 0, 3]);
    /// assert_eq!(ConsList::singleton(1).intersperse(0), conslist![1]);
    /// ```
    #[must_use]
    pub fn intersperse(&self, separator: T) -> Self {
        let mut iter = self.iter();
        let Some(first) = iter.next() else {
            return Self::new();
        };

        let mut result = Vec::with_capacity(self.length * 2 - 1);
        result.push(first.clone());
        for element in iter {
            result.push(separator.clone());
            result.push(element.clone());
        }
        Self::from_vec(result)
    }

    /// Keeps the elements satisfying the predicate, preserving order.
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        Self::from_vec(
            self.iter()
                .filter(|element| predicate(element))
                .cloned()
                .collect(),
        )
    }

    /// Removes the elements satisfying the predicate, preserving order.
    #[must_use]
    pub fn filter_not<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.filter(|element| !predicate(element))
    }

    /// Partitions the list by a predicate.
    ///
    /// Returns `(elements satisfying predicate, the rest)`, both in
    /// original order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::prelude::*;
    ///
    /// let list = conslist![1, 2, 3, 4];
    /// let (evens, odds) = list.partition(|x| x % 2 == 0);
    /// assert_eq!(evens, conslist![2, 4]);
    /// assert_eq!(odds, conslist![1, 3]);
    /// ```
    #[must_use]
    pub fn partition<P>(&self, mut predicate: P) -> (Self, Self)
    where
        P: FnMut(&T) -> bool,
    {
        let mut pass = Vec::new();
        let mut fail = Vec::new();
        for element in self {
            if predicate(element) {
                pass.push(element.clone());
            } else {
                fail.push(element.clone());
            }
        }
        (Self::from_vec(pass), Self::from_vec(fail))
    }

    /// Zips this list with another into a list of pairs, truncating to the
    /// shorter length.
    ///
    /// An empty left-hand side yields empty without touching `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::prelude::*;
    ///
    /// let numbers = conslist![1, 2, 3];
    /// let letters = conslist!['a', 'b'];
    /// assert_eq!(numbers.zip(&letters), conslist![(1, 'a'), (2, 'b')]);
    /// ```
    #[must_use]
    pub fn zip<U: Clone>(&self, other: &ConsList<U>) -> ConsList<(T, U)> {
        ConsList::from_vec(
            self.iter()
                .zip(other.iter())
                .map(|(left, right)| (left.clone(), right.clone()))
                .collect(),
        )
    }

    /// Zips this list with an arbitrary iterable, truncating to the shorter
    /// length.
    ///
    /// The right-hand side is consumed by need: it is advanced at most
    /// `self.len()` times, and not at all when this list is empty, so an
    /// infinite or expensive source is safe.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::prelude::*;
    ///
    /// let list = conslist!['a', 'b', 'c'];
    /// assert_eq!(list.zip_iter(0..), conslist![('a', 0), ('b', 1), ('c', 2)]);
    ///
    /// let empty: ConsList<char> = ConsList::new();
    /// assert!(empty.zip_iter(0..).is_empty());
    /// ```
    #[must_use]
    pub fn zip_iter<U, I>(&self, other: I) -> ConsList<(T, U)>
    where
        I: IntoIterator<Item = U>,
    {
        if self.is_empty() {
            return ConsList::new();
        }
        ConsList::from_vec(
            self.iter()
                .cloned()
                .zip(other)
                .collect(),
        )
    }

    /// Pairs each element with its index.
    #[must_use]
    pub fn zip_with_index(&self) -> ConsList<(T, usize)> {
        ConsList::from_vec(
            self.iter()
                .enumerate()
                .map(|(index, element)| (element.clone(), index))
                .collect(),
        )
    }

    /// Returns the intermediate accumulator values of a left fold, oldest
    /// first, starting with the initial value.
    ///
    /// The result always has one more element than the input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::prelude::*;
    ///
    /// let list = conslist![1, 2, 3];
    /// assert_eq!(list.scan_left(0, |accumulator, x| accumulator + x), conslist![0, 1, 3, 6]);
    ///
    /// let empty: ConsList<i32> = ConsList::new();
    /// assert_eq!(empty.scan_left(0, |accumulator, x| accumulator + x), conslist![0]);
    /// ```
    #[must_use]
    pub fn scan_left<B, F>(&self, initial: B, mut function: F) -> ConsList<B>
    where
        B: Clone,
        F: FnMut(B, &T) -> B,
    {
        let mut results = Vec::with_capacity(self.length + 1);
        let mut accumulator = initial;
        results.push(accumulator.clone());
        for element in self {
            accumulator = function(accumulator, element);
            results.push(accumulator.clone());
        }
        ConsList::from_vec(results)
    }

    /// Returns the intermediate accumulator values of a right fold, with
    /// the initial value last.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::prelude::*;
    ///
    /// let list = conslist![1, 2, 3];
    /// assert_eq!(list.scan_right(0, |x, accumulator| x + accumulator), conslist![6, 5, 3, 0]);
    /// ```
    #[must_use]
    pub fn scan_right<B, F>(&self, initial: B, mut function: F) -> ConsList<B>
    where
        B: Clone,
        F: FnMut(&T, B) -> B,
    {
        let elements: Vec<&T> = self.iter().collect();
        let mut accumulator = initial;
        let mut results = ConsList::new().cons(accumulator.clone());
        for element in elements.into_iter().rev() {
            accumulator = function(element, accumulator.clone());
            results = results.cons(accumulator.clone());
        }
        results
    }

    /// Folds the list using the first element as the initial accumulator.
    ///
    /// Returns `None` for the empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::prelude::*;
    ///
    /// let list = conslist![1, 2, 3, 4, 5];
    /// assert_eq!(list.fold_left1(|accumulator, x| accumulator + x), Some(15));
    ///
    /// let empty: ConsList<i32> = ConsList::new();
    /// assert_eq!(empty.fold_left1(|accumulator, x| accumulator + x), None);
    /// ```
    #[must_use]
    pub fn fold_left1<F>(&self, mut function: F) -> Option<T>
    where
        F: FnMut(T, T) -> T,
    {
        let mut iter = self.iter();
        let first = iter.next()?.clone();
        Some(iter.fold(first, |accumulator, element| {
            function(accumulator, element.clone())
        }))
    }

    /// Reduces the list with its first element as the seed.
    ///
    /// A synonym for [`fold_left1`](Self::fold_left1) under the name the
    /// optional-result reduction is usually looked up by.
    #[must_use]
    pub fn reduce_left_option<F>(&self, function: F) -> Option<T>
    where
        F: FnMut(T, T) -> T,
    {
        self.fold_left1(function)
    }

    /// Folds the list from the right using the last element as the initial
    /// accumulator.
    ///
    /// Returns `None` for the empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::prelude::*;
    ///
    /// let list = conslist![1, 2, 3, 4];
    /// let result = list.fold_right1(|x, accumulator| x - accumulator);
    /// assert_eq!(result, Some(1 - (2 - (3 - 4))));
    /// ```
    #[must_use]
    pub fn fold_right1<F>(&self, mut function: F) -> Option<T>
    where
        F: FnMut(T, T) -> T,
    {
        let elements: Vec<T> = self.iter().cloned().collect();
        let mut iter = elements.into_iter().rev();
        let last = iter.next()?;
        Some(iter.fold(last, |accumulator, element| function(element, accumulator)))
    }

    /// Sorts the list by a derived key using a stable sort.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::prelude::*;
    ///
    /// let list = conslist![(2, 'a'), (1, 'b'), (2, 'c')];
    /// let sorted = list.sort_by_key(|pair| pair.0);
    /// // Stable: equal keys keep their original relative order.
    /// assert_eq!(sorted, conslist![(1, 'b'), (2, 'a'), (2, 'c')]);
    /// ```
    #[must_use]
    pub fn sort_by_key<K, F>(&self, key: F) -> Self
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        let mut elements: Vec<T> = self.iter().cloned().collect();
        elements.sort_by_key(key);
        Self::from_vec(elements)
    }

    /// Sorts the list by the element's own ordering using a stable sort.
    #[must_use]
    pub fn sorted(&self) -> Self
    where
        T: Ord,
    {
        let mut elements: Vec<T> = self.iter().cloned().collect();
        elements.sort();
        Self::from_vec(elements)
    }

    /// Removes duplicate elements, keeping the first occurrence of each.
    ///
    /// Uses element equality only, so the cost is O(n^2) in the worst case.
    #[must_use]
    pub fn distinct(&self) -> Self
    where
        T: PartialEq,
    {
        let mut seen: Vec<T> = Vec::new();
        for element in self {
            if !seen.contains(element) {
                seen.push(element.clone());
            }
        }
        Self::from_vec(seen)
    }

    /// Splits the list into consecutive chunks of at most `size` elements.
    ///
    /// The final chunk may be shorter. `size == 0` yields the empty list so
    /// the operation stays total.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::prelude::*;
    ///
    /// let list = conslist![1, 2, 3, 4, 5];
    /// let chunks = list.grouped(2);
    /// assert_eq!(chunks, conslist![conslist![1, 2], conslist![3, 4], conslist![5]]);
    /// ```
    #[must_use]
    pub fn grouped(&self, size: usize) -> ConsList<Self> {
        if size == 0 {
            return ConsList::new();
        }
        let elements: Vec<T> = self.iter().cloned().collect();
        ConsList::from_vec(
            elements
                .chunks(size)
                .map(Self::from_slice)
                .collect(),
        )
    }

    /// Groups runs of adjacent elements that share a key.
    ///
    /// Only adjacent elements are grouped; the concatenation of the groups
    /// is always the original list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::prelude::*;
    ///
    /// let list = conslist![1, 1, 2, 1];
    /// let runs = list.group_by_adjacent(|x| *x);
    /// assert_eq!(runs, conslist![conslist![1, 1], conslist![2], conslist![1]]);
    /// ```
    #[must_use]
    pub fn group_by_adjacent<K, F>(&self, mut key: F) -> ConsList<Self>
    where
        K: PartialEq,
        F: FnMut(&T) -> K,
    {
        let mut groups: Vec<Self> = Vec::new();
        let mut run: Vec<T> = Vec::new();
        let mut run_key: Option<K> = None;

        for element in self {
            let element_key = key(element);
            if run_key.as_ref() == Some(&element_key) {
                run.push(element.clone());
            } else {
                if !run.is_empty() {
                    groups.push(Self::from_vec(std::mem::take(&mut run)));
                }
                run.push(element.clone());
                run_key = Some(element_key);
            }
        }
        if !run.is_empty() {
            groups.push(Self::from_vec(run));
        }
        ConsList::from_vec(groups)
    }

    /// Collects the elements into a `Vec` in order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Converts to the non-empty refinement, or `None` for the empty list.
    ///
    /// Round-trips exactly: converting back with
    /// [`NonEmptyList::to_list`] yields an equal list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::prelude::*;
    ///
    /// let list = conslist![1, 2, 3];
    /// let refined = list.to_non_empty().unwrap();
    /// assert_eq!(refined.head(), &1);
    /// assert_eq!(refined.to_list(), list);
    ///
    /// assert!(ConsList::<i32>::new().to_non_empty().is_none());
    /// ```
    #[must_use]
    pub fn to_non_empty(&self) -> Option<NonEmptyList<T>> {
        self.uncons()
            .map(|(head, tail)| NonEmptyList::new(head.clone(), tail))
    }
}

// =============================================================================
// Specialized methods for tuple elements
// =============================================================================

impl<A: Clone, B: Clone> ConsList<(A, B)> {
    /// Separates a list of pairs into two lists; the inverse of
    /// [`zip`](ConsList::zip).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::prelude::*;
    ///
    /// let pairs = conslist![(1, 'a'), (2, 'b')];
    /// let (numbers, letters) = pairs.unzip();
    /// assert_eq!(numbers, conslist![1, 2]);
    /// assert_eq!(letters, conslist!['a', 'b']);
    /// ```
    #[must_use]
    pub fn unzip(&self) -> (ConsList<A>, ConsList<B>) {
        let mut firsts = Vec::with_capacity(self.length);
        let mut seconds = Vec::with_capacity(self.length);
        for (first, second) in self {
            firsts.push(first.clone());
            seconds.push(second.clone());
        }
        (ConsList::from_vec(firsts), ConsList::from_vec(seconds))
    }
}

// =============================================================================
// Specialized methods for nested lists
// =============================================================================

impl<T: Clone> ConsList<ConsList<T>> {
    /// Concatenates all inner lists in order.
    #[must_use]
    pub fn flatten(&self) -> ConsList<T> {
        let mut elements = Vec::new();
        for inner in self {
            elements.extend(inner.iter().cloned());
        }
        ConsList::from_vec(elements)
    }

    /// Inserts a separator list between each inner list and flattens.
    ///
    /// Equivalent to `intersperse` followed by `flatten`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::prelude::*;
    ///
    /// let outer = conslist![conslist![1, 2], conslist![3, 4]];
    /// assert_eq!(outer.intercalate(&conslist![0]), conslist![1, 2, 0, 3, 4]);
    /// ```
    #[must_use]
    pub fn intercalate(&self, separator: &ConsList<T>) -> ConsList<T> {
        let mut iter = self.iter();
        let Some(first) = iter.next() else {
            return ConsList::new();
        };

        let mut elements: Vec<T> = first.iter().cloned().collect();
        for inner in iter {
            elements.extend(separator.iter().cloned());
            elements.extend(inner.iter().cloned());
        }
        ConsList::from_vec(elements)
    }
}

// =============================================================================
// Iterator implementations
// =============================================================================

/// An iterator over references to elements of a [`ConsList`].
pub struct ConsListIter<'a, T> {
    current: Option<&'a Rc<Node<T>>>,
    remaining: usize,
}

impl<'a, T> Iterator for ConsListIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.next.as_ref();
            self.remaining -= 1;
            &node.element
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for ConsListIter<'_, T> {}

/// An owning iterator over elements of a [`ConsList`].
pub struct ConsListIntoIter<T> {
    list: ConsList<T>,
}

impl<T: Clone> Iterator for ConsListIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let (element, tail) = {
            let (head, tail) = self.list.uncons()?;
            (head.clone(), tail)
        };
        self.list = tail;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.length, Some(self.list.length))
    }
}

impl<T: Clone> ExactSizeIterator for ConsListIntoIter<T> {}

impl<T: Clone> IntoIterator for ConsList<T> {
    type Item = T;
    type IntoIter = ConsListIntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        ConsListIntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a ConsList<T> {
    type Item = &'a T;
    type IntoIter = ConsListIter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Standard trait implementations
// =============================================================================

impl<T> Clone for ConsList<T> {
    /// O(1): clones the handle, sharing every node.
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            length: self.length,
        }
    }
}

impl<T> Default for ConsList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Unlinks nodes iteratively so that dropping a million-element list cannot
/// overflow the call stack. Stops at the first node still shared by another
/// list; that list's eventual drop continues from there.
impl<T> Drop for ConsList<T> {
    fn drop(&mut self) {
        let mut current = self.head.take();
        while let Some(node) = current {
            match Rc::try_unwrap(node) {
                Ok(mut owned) => current = owned.next.take(),
                Err(_) => break,
            }
        }
    }
}

impl<T> FromIterator<T> for ConsList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T> From<Vec<T>> for ConsList<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::from_vec(elements)
    }
}

/// A present optional converts to a single-element list, an absent one to
/// the empty list. Round-trips exactly with `list.head().cloned()`.
impl<T> From<Option<T>> for ConsList<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or_else(Self::new, Self::singleton)
    }
}

impl<T: Clone> From<ConsList<T>> for Vec<T> {
    fn from(list: ConsList<T>) -> Self {
        list.to_vec()
    }
}

/// Structural equality: lengths first, then element-wise with a
/// short-circuit on the first mismatch.
impl<T: PartialEq> PartialEq for ConsList<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.length != other.length {
            return false;
        }
        self.iter().zip(other.iter()).all(|(left, right)| left == right)
    }
}

impl<T: Eq> Eq for ConsList<T> {}

/// Lexicographic ordering: the first differing element decides; a strict
/// prefix orders before any longer list it prefixes.
impl<T: PartialOrd> PartialOrd for ConsList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for ConsList<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

/// Hashes the length first, then each element in order, so equal lists hash
/// equally and lists of different lengths almost never collide.
impl<T: Hash> Hash for ConsList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ConsList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

/// Renders as `[e1,e2,e3]`: a single comma between adjacent elements, no
/// separator before the first or after the last, `[]` when empty.
impl<T: fmt::Display> fmt::Display for ConsList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ",")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Type class implementations
// =============================================================================

impl<T> TypeConstructor for ConsList<T> {
    type Inner = T;
    type WithType<B> = ConsList<B>;
}

impl<T: Clone> Functor for ConsList<T> {
    fn fmap<B, F>(self, function: F) -> ConsList<B>
    where
        F: FnMut(T) -> B,
    {
        ConsList::from_vec(self.into_iter().map(function).collect())
    }
}

impl<T: Clone> Foldable for ConsList<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        // Reverse, then fold left with flipped arguments.
        self.reverse()
            .into_iter()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    #[inline]
    fn length(&self) -> usize {
        self.length
    }
}

impl<T: Clone> Traversable for ConsList<T> {
    fn traverse_option<B, F>(self, mut function: F) -> Option<ConsList<B>>
    where
        F: FnMut(T) -> Option<B>,
    {
        let mut results = Vec::with_capacity(self.length);
        for element in self {
            results.push(function(element)?);
        }
        Some(ConsList::from_vec(results))
    }

    fn traverse_result<B, E, F>(self, mut function: F) -> Result<ConsList<B>, E>
    where
        F: FnMut(T) -> Result<B, E>,
    {
        let mut results = Vec::with_capacity(self.length);
        for element in self {
            results.push(function(element)?);
        }
        Ok(ConsList::from_vec(results))
    }
}

/// Applies the function to every non-empty suffix, pairing each position
/// with a value computed from the entire remaining list at that point. The
/// full list is included, the empty suffix is not, so the output aligns
/// one-to-one with the input's positions.
impl<T> CoflatMap for ConsList<T> {
    fn coflat_map<B, F>(&self, mut function: F) -> ConsList<B>
    where
        F: FnMut(&Self) -> B,
    {
        let mut results = Vec::with_capacity(self.length);
        let mut current = self.clone();
        while !current.is_empty() {
            results.push(function(&current));
            current = current.tail();
        }
        ConsList::from_vec(results)
    }
}

impl<T: Clone> Semigroup for ConsList<T> {
    fn combine(self, other: Self) -> Self {
        self.append(&other)
    }
}

impl<T: Clone> Monoid for ConsList<T> {
    fn empty() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_new_creates_empty() {
        let list: ConsList<i32> = ConsList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.head(), None);
    }

    #[rstest]
    fn test_cons_builds_front_to_back() {
        let list = ConsList::new().cons(3).cons(2).cons(1);
        assert_eq!(list.head(), Some(&1));
        assert_eq!(list.len(), 3);
    }

    #[rstest]
    fn test_cons_does_not_modify_original() {
        let original = ConsList::new().cons(1);
        let extended = original.cons(2);
        assert_eq!(original.len(), 1);
        assert_eq!(extended.len(), 2);
        assert_eq!(extended.tail(), original);
    }

    #[rstest]
    fn test_macro_orders_elements() {
        let list = conslist![1, 2, 3];
        assert_eq!(list.get(0), Some(&1));
        assert_eq!(list.get(2), Some(&3));
    }

    #[rstest]
    fn test_uncons_splits_head_and_tail() {
        let list = conslist![1, 2, 3];
        let (head, tail) = list.uncons().unwrap();
        assert_eq!(*head, 1);
        assert_eq!(tail, conslist![2, 3]);
        assert_eq!(ConsList::<i32>::new().uncons().map(|(h, _)| *h), None);
    }

    #[rstest]
    fn test_fold_uncons_handles_both_shapes() {
        let empty: ConsList<i32> = ConsList::new();
        assert_eq!(empty.fold_uncons(|| 0, |_, _| 1), 0);
        assert_eq!(conslist![9].fold_uncons(|| 0, |head, _| *head), 9);
    }

    #[rstest]
    fn test_last_and_init() {
        let list = conslist![1, 2, 3];
        assert_eq!(list.last(), Some(&3));
        assert_eq!(list.init(), conslist![1, 2]);
        assert_eq!(ConsList::<i32>::new().last(), None);
        assert!(ConsList::<i32>::new().init().is_empty());
    }

    #[rstest]
    fn test_from_option_round_trip() {
        let present = ConsList::from(Some(5));
        assert_eq!(present, conslist![5]);
        assert_eq!(present.head().copied(), Some(5));

        let absent: ConsList<i32> = ConsList::from(None);
        assert!(absent.is_empty());
    }

    #[rstest]
    fn test_from_foldable_preserves_order() {
        let list = ConsList::from_foldable(vec![1, 2, 3]);
        assert_eq!(list, conslist![1, 2, 3]);
    }

    // =========================================================================
    // Display
    // =========================================================================

    #[rstest]
    #[case(conslist![], "[]")]
    #[case(conslist![42], "[42]")]
    #[case(conslist![1, 2, 3], "[1,2,3]")]
    fn test_display_rendering(#[case] list: ConsList<i32>, #[case] expected: &str) {
        assert_eq!(format!("{list}"), expected);
    }

    // =========================================================================
    // Search
    // =========================================================================

    #[rstest]
    fn test_index_queries() {
        let list = conslist![1, 2, 3, 2];
        assert_eq!(list.index_of(&2), Some(1));
        assert_eq!(list.last_index_of(&2), Some(3));
        assert_eq!(list.index_of(&9), None);
        assert_eq!(list.find_index(|x| *x > 2), Some(2));
        assert_eq!(list.last_index_where(|x| *x < 3), Some(3));
    }

    #[rstest]
    fn test_index_of_slice() {
        let list = conslist![1, 2, 3, 2, 3];
        assert_eq!(list.index_of_slice(&conslist![2, 3]), Some(1));
        assert_eq!(list.last_index_of_slice(&conslist![2, 3]), Some(3));
        assert_eq!(list.index_of_slice(&conslist![3, 1]), None);
        assert_eq!(list.index_of_slice(&ConsList::new()), Some(0));
        assert_eq!(list.last_index_of_slice(&ConsList::new()), Some(5));
    }

    #[rstest]
    fn test_starts_with_and_ends_with() {
        let list = conslist![1, 2, 3];
        assert!(list.starts_with(&conslist![1, 2]));
        assert!(list.starts_with(&ConsList::new()));
        assert!(!list.starts_with(&conslist![1, 2, 3, 4]));
        assert!(list.ends_with(&conslist![2, 3]));
        assert!(list.ends_with(&ConsList::new()));
        assert!(!list.ends_with(&conslist![1, 2]));
    }

    #[rstest]
    fn test_empty_starts_with() {
        let empty: ConsList<i32> = ConsList::new();
        assert!(empty.starts_with(&ConsList::new()));
        assert!(!empty.starts_with(&conslist![1]));
    }

    // =========================================================================
    // Slicing
    // =========================================================================

    #[rstest]
    #[case(0, conslist![])]
    #[case(2, conslist![1, 2])]
    #[case(5, conslist![1, 2, 3, 4, 5])]
    #[case(9, conslist![1, 2, 3, 4, 5])]
    fn test_take_saturates(#[case] count: usize, #[case] expected: ConsList<i32>) {
        let list = conslist![1, 2, 3, 4, 5];
        assert_eq!(list.take(count), expected);
    }

    #[rstest]
    #[case(0, conslist![1, 2, 3, 4, 5])]
    #[case(2, conslist![3, 4, 5])]
    #[case(9, conslist![])]
    fn test_drop_first_saturates(#[case] count: usize, #[case] expected: ConsList<i32>) {
        let list = conslist![1, 2, 3, 4, 5];
        assert_eq!(list.drop_first(count), expected);
    }

    #[rstest]
    fn test_take_right_and_drop_right() {
        let list = conslist![1, 2, 3, 4, 5];
        assert_eq!(list.take_right(2), conslist![4, 5]);
        assert_eq!(list.take_right(9), list);
        assert_eq!(list.drop_right(2), conslist![1, 2, 3]);
        assert!(list.drop_right(9).is_empty());
    }

    #[rstest]
    fn test_split_at_beyond_length() {
        let list = conslist![1, 2, 3];
        let (left, right) = list.split_at(5);
        assert_eq!(left, list);
        assert!(right.is_empty());
    }

    #[rstest]
    fn test_slice_clamps_bounds() {
        let list = conslist![1, 2, 3, 4, 5];
        assert_eq!(list.slice(1, 3), conslist![2, 3]);
        assert_eq!(list.slice(3, 99), conslist![4, 5]);
        assert!(list.slice(3, 1).is_empty());
    }

    #[rstest]
    fn test_span_splits_at_first_failure() {
        let list = conslist![2, 4, 5, 6];
        let (prefix, rest) = list.span(|x| x % 2 == 0);
        assert_eq!(prefix, conslist![2, 4]);
        assert_eq!(rest, conslist![5, 6]);
    }

    #[rstest]
    fn test_span_all_matching_returns_original() {
        let list = conslist![2, 4, 6];
        let (prefix, rest) = list.span(|x| x % 2 == 0);
        assert_eq!(prefix, list);
        assert!(rest.is_empty());
    }

    #[rstest]
    fn test_take_while_drop_while_recompose() {
        let list = conslist![1, 2, 3, 1];
        let taken = list.take_while(|x| *x < 3);
        let dropped = list.drop_while(|x| *x < 3);
        assert_eq!(taken, conslist![1, 2]);
        assert_eq!(dropped, conslist![3, 1]);
        assert_eq!(taken.append(&dropped), list);
    }

    #[rstest]
    fn test_updated_in_range() {
        let list = conslist![1, 2, 3];
        assert_eq!(list.updated(0, 9), conslist![9, 2, 3]);
        assert_eq!(list.updated(2, 9), conslist![1, 2, 9]);
    }

    #[rstest]
    fn test_updated_out_of_range_is_noop() {
        let list = conslist![1, 2, 3];
        assert_eq!(list.updated(3, 9), list);
        assert_eq!(list.updated(99, 9), list);
        let empty: ConsList<i32> = ConsList::new();
        assert_eq!(empty.updated(0, 9), empty);
    }

    #[rstest]
    fn test_patch_replaces_middle() {
        let list = conslist![1, 2, 3];
        assert_eq!(list.patch(1, &conslist![9, 9], 1), conslist![1, 9, 9, 3]);
    }

    #[rstest]
    fn test_patch_saturates_everywhere() {
        let list = conslist![1, 2, 3];
        assert_eq!(list.patch(10, &conslist![4], 5), conslist![1, 2, 3, 4]);
        assert_eq!(list.patch(0, &ConsList::new(), 99), ConsList::new());
    }

    #[rstest]
    fn test_pad_to() {
        let list = conslist![1, 2];
        assert_eq!(list.pad_to(4, 0), conslist![1, 2, 0, 0]);
        assert_eq!(list.pad_to(1, 0), list);
    }

    // =========================================================================
    // Reordering
    // =========================================================================

    #[rstest]
    fn test_reverse() {
        let list = conslist![1, 2, 3];
        assert_eq!(list.reverse(), conslist![3, 2, 1]);
        assert_eq!(list.reverse().reverse(), list);
    }

    #[rstest]
    fn test_sorted_and_sort_by_key() {
        let list = conslist![3, 1, 2];
        assert_eq!(list.sorted(), conslist![1, 2, 3]);
        assert_eq!(list.sort_by_key(|x| std::cmp::Reverse(*x)), conslist![3, 2, 1]);
    }

    #[rstest]
    fn test_sort_stability() {
        let list = conslist![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
        let sorted = list.sort_by_key(|pair| pair.0);
        assert_eq!(sorted, conslist![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    #[rstest]
    fn test_distinct_keeps_first_occurrences() {
        let list = conslist![1, 2, 1, 3, 2];
        assert_eq!(list.distinct(), conslist![1, 2, 3]);
    }

    // =========================================================================
    // Folds and scans
    // =========================================================================

    #[rstest]
    fn test_fold_left_ref_and_right_ref() {
        let list = conslist![1, 2, 3, 4];
        assert_eq!(list.fold_left_ref(0, |accumulator, x| accumulator + x), 10);
        assert_eq!(
            list.fold_right_ref(0, |x, accumulator| x - accumulator),
            1 - (2 - (3 - (4 - 0)))
        );
    }

    #[rstest]
    fn test_fold_left1_and_right1() {
        let list = conslist![1, 2, 3, 4];
        assert_eq!(list.fold_left1(|accumulator, x| accumulator - x), Some(1 - 2 - 3 - 4));
        assert_eq!(list.fold_right1(|x, accumulator| x - accumulator), Some(1 - (2 - (3 - 4))));
        let empty: ConsList<i32> = ConsList::new();
        assert_eq!(empty.fold_left1(|accumulator, x| accumulator + x), None);
        assert_eq!(empty.fold_right1(|x, accumulator| x + accumulator), None);
    }

    #[rstest]
    fn test_reduce_left_option_matches_fold_left1() {
        let list = conslist![4, 2, 1];
        assert_eq!(
            list.reduce_left_option(|accumulator, x| accumulator - x),
            list.fold_left1(|accumulator, x| accumulator - x)
        );
        let empty: ConsList<i32> = ConsList::new();
        assert_eq!(empty.reduce_left_option(|accumulator, x| accumulator + x), None);
    }

    #[rstest]
    fn test_scan_left_includes_seed_first() {
        let list = conslist!['a', 'b', 'c'];
        let scanned = list.scan_left(0, |accumulator, _| accumulator + 1);
        assert_eq!(scanned, conslist![0, 1, 2, 3]);
    }

    #[rstest]
    fn test_scan_right_includes_seed_last() {
        let list = conslist![1, 2, 3];
        let scanned = list.scan_right(0, |x, accumulator| x + accumulator);
        assert_eq!(scanned, conslist![6, 5, 3, 0]);
    }

    #[rstest]
    fn test_map_accum_left_threads_state() {
        let list = conslist![1, 2, 3];
        let (state, results) = list.map_accum_left(100, |state, x| (state + x, state));
        assert_eq!(state, 106);
        assert_eq!(results, conslist![100, 101, 103]);
    }

    #[rstest]
    fn test_map_accum_right_threads_state_backwards() {
        let list = conslist![1, 2, 3];
        let (state, results) = list.map_accum_right(0, |state, x| (state + x, state + x));
        assert_eq!(state, 6);
        assert_eq!(results, conslist![6, 5, 3]);
    }

    #[rstest]
    fn test_map_accum_empty() {
        let empty: ConsList<i32> = ConsList::new();
        let (state, results) = empty.map_accum_left(7, |state, x| (state + x, *x));
        assert_eq!(state, 7);
        assert!(results.is_empty());
    }

    // =========================================================================
    // Derived operations
    // =========================================================================

    #[rstest]
    fn test_map_preserves_length_and_order() {
        let list = conslist![1, 2, 3];
        assert_eq!(list.map(|x| x * 2), conslist![2, 4, 6]);
        assert_eq!(list.map(|x| *x).len(), list.len());
    }

    #[rstest]
    fn test_flat_map_concatenates_in_order() {
        let list = conslist![1, 2];
        let result = list.flat_map(|x| conslist![*x, x * 10]);
        assert_eq!(result, conslist![1, 10, 2, 20]);
    }

    #[rstest]
    fn test_filter_and_partition_agree() {
        let list = conslist![1, 2, 3, 4, 5];
        let (evens, odds) = list.partition(|x| x % 2 == 0);
        assert_eq!(evens, list.filter(|x| x % 2 == 0));
        assert_eq!(odds, list.filter_not(|x| x % 2 == 0));
    }

    #[rstest]
    fn test_zip_truncates_to_shorter() {
        let numbers = conslist![1, 2, 3];
        let letters = conslist!['a', 'b'];
        assert_eq!(numbers.zip(&letters), conslist![(1, 'a'), (2, 'b')]);
        assert_eq!(numbers.zip(&letters).len(), 2);
    }

    #[rstest]
    fn test_zip_iter_with_infinite_source() {
        let list = conslist!['a', 'b'];
        assert_eq!(list.zip_iter(0..), conslist![('a', 0), ('b', 1)]);
    }

    #[rstest]
    fn test_zip_iter_empty_never_advances_source() {
        struct PanickingIter;
        impl Iterator for PanickingIter {
            type Item = i32;
            fn next(&mut self) -> Option<i32> {
                panic!("source must not be advanced");
            }
        }

        let empty: ConsList<i32> = ConsList::new();
        assert!(empty.zip_iter(PanickingIter).is_empty());
    }

    #[rstest]
    fn test_zip_with_and_zip_with_index() {
        let left = conslist![1, 2, 3];
        let right = conslist![10, 20];
        assert_eq!(left.zip_with(&right, |a, b| a * b), conslist![10, 40]);
        assert_eq!(left.zip_with_index(), conslist![(1, 0), (2, 1), (3, 2)]);
    }

    #[rstest]
    fn test_unzip_inverts_zip() {
        let numbers = conslist![1, 2];
        let letters = conslist!['a', 'b'];
        let (first, second) = numbers.zip(&letters).unzip();
        assert_eq!(first, numbers);
        assert_eq!(second, letters);
    }

    #[rstest]
    fn test_intersperse() {
        assert_eq!(conslist![1, 2, 3].intersperse(0), conslist![1, 0, 2, 0, 3]);
        assert_eq!(conslist![1].intersperse(0), conslist![1]);
        assert!(ConsList::<i32>::new().intersperse(0).is_empty());
    }

    #[rstest]
    fn test_flatten_and_intercalate() {
        let outer = conslist![conslist![1, 2], conslist![], conslist![3]];
        assert_eq!(outer.flatten(), conslist![1, 2, 3]);
        let nested = conslist![conslist![1, 2], conslist![3, 4]];
        assert_eq!(nested.intercalate(&conslist![0]), conslist![1, 2, 0, 3, 4]);
    }

    #[rstest]
    fn test_grouped() {
        let list = conslist![1, 2, 3, 4, 5];
        assert_eq!(
            list.grouped(2),
            conslist![conslist![1, 2], conslist![3, 4], conslist![5]]
        );
        assert!(list.grouped(0).is_empty());
        assert_eq!(list.grouped(9), conslist![list.clone()]);
    }

    #[rstest]
    fn test_group_by_adjacent() {
        let list = conslist![1, 1, 2, 1];
        let runs = list.group_by_adjacent(|x| *x);
        assert_eq!(runs, conslist![conslist![1, 1], conslist![2], conslist![1]]);
        assert_eq!(runs.flatten(), list);
    }

    #[rstest]
    fn test_tails_includes_empty_suffix() {
        let list = conslist![1, 2];
        let tails = list.tails();
        assert_eq!(tails, conslist![conslist![1, 2], conslist![2], conslist![]]);
    }

    // =========================================================================
    // Type class instances
    // =========================================================================

    #[rstest]
    fn test_fmap_matches_inherent_map() {
        let list = conslist![1, 2, 3];
        assert_eq!(list.clone().fmap(|x| x * 2), list.map(|x| x * 2));
    }

    #[rstest]
    fn test_foldable_fold_left_counts_length() {
        let list = conslist![1, 2, 3];
        assert_eq!(list.clone().fold_left(0, |count, _| count + 1), list.len());
    }

    #[rstest]
    fn test_foldable_fold_right_is_reverse_fold_left() {
        let list = conslist![1, 2, 3];
        let rendered = list.fold_right(String::new(), |element, accumulator| {
            format!("{element}{accumulator}")
        });
        assert_eq!(rendered, "123");
    }

    #[rstest]
    fn test_semigroup_monoid_concatenation() {
        let left = conslist![1, 2];
        let right = conslist![3];
        assert_eq!(left.clone().combine(right), conslist![1, 2, 3]);
        assert_eq!(ConsList::<i32>::empty().combine(left.clone()), left);
    }

    #[rstest]
    fn test_traverse_option_order_and_short_circuit() {
        let list = conslist!["1", "2", "3"];
        let parsed: Option<ConsList<i32>> = list.traverse_option(|s| s.parse().ok());
        assert_eq!(parsed, Some(conslist![1, 2, 3]));

        let broken = conslist!["1", "x", "3"];
        let failed: Option<ConsList<i32>> = broken.traverse_option(|s| s.parse().ok());
        assert_eq!(failed, None);
    }

    #[rstest]
    fn test_traverse_result_returns_first_error() {
        let list = conslist![1, -2, -3];
        let checked: Result<ConsList<i32>, String> = list.traverse_result(|n| {
            if n > 0 { Ok(n) } else { Err(format!("bad: {n}")) }
        });
        assert_eq!(checked, Err(String::from("bad: -2")));
    }

    #[rstest]
    fn test_coflat_map_sees_each_suffix() {
        let list = conslist![1, 2, 3];
        let sums = list.coflat_map(|suffix| suffix.iter().sum::<i32>());
        assert_eq!(sums, conslist![6, 5, 3]);
        assert_eq!(sums.len(), list.len());
    }

    #[rstest]
    fn test_coflat_map_empty_is_empty() {
        let empty: ConsList<i32> = ConsList::new();
        assert!(empty.coflat_map(|suffix| suffix.len()).is_empty());
    }

    // =========================================================================
    // Orderings and hashing
    // =========================================================================

    #[rstest]
    fn test_lexicographic_ordering() {
        assert!(conslist![1, 2] < conslist![1, 2, 0]);
        assert!(conslist![1, 2] < conslist![1, 3]);
        assert!(conslist![2] > conslist![1, 9, 9]);
        assert!(ConsList::<i32>::new() < conslist![0]);
    }

    #[rstest]
    fn test_hash_consistent_with_eq() {
        use std::collections::HashMap;
        let mut map: HashMap<ConsList<i32>, &str> = HashMap::new();
        let key = conslist![1, 2, 3];
        map.insert(key.clone(), "value");
        let equal_key: ConsList<i32> = (1..=3).collect();
        assert_eq!(map.get(&equal_key), Some(&"value"));
    }
}
