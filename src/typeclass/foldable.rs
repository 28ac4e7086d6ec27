//! Foldable type class - folding over data structures.
//!
//! A `Foldable` structure can have its elements reduced into a single
//! summary value. `fold_left` is the primitive; every other method is
//! derived from it (or from `fold_right`, itself expressible through
//! reversal), so a structure only has to know how to walk itself once.
//!
//! # Examples
//!
//! ```rust
//! use conslist::typeclass::Foldable;
//!
//! let numbers = vec![1, 2, 3, 4, 5];
//! let sum = numbers.fold_left(0, |accumulator, element| accumulator + element);
//! assert_eq!(sum, 15);
//!
//! let none_value: Option<i32> = None;
//! assert_eq!(none_value.fold_left(5, |accumulator, element| accumulator + element), 5);
//! ```

use super::higher::TypeConstructor;
use super::monoid::Monoid;

/// A type class for data structures that can be folded to a summary value.
///
/// # Required methods
///
/// - [`fold_left`](Self::fold_left): left-associative fold
/// - [`fold_right`](Self::fold_right): right-associative fold
///
/// # Provided methods
///
/// `fold_map`, `length`, `is_empty`, `to_vec`, `find`, `exists`, and
/// `for_all` all have default implementations in terms of `fold_left`.
pub trait Foldable: TypeConstructor {
    /// Folds the structure from left to right with an accumulator.
    ///
    /// # Arguments
    ///
    /// * `init` - The initial accumulator value
    /// * `function` - Combines the accumulator with each element in order
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::typeclass::Foldable;
    ///
    /// let sum = vec![1, 2, 3].fold_left(0, |accumulator, element| accumulator + element);
    /// assert_eq!(sum, 6);
    /// ```
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds the structure from right to left with an accumulator.
    ///
    /// Implementations reverse the iteration order rather than recurse, so
    /// this stays stack-safe on long structures.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::typeclass::Foldable;
    ///
    /// // Builds "123" by folding from the right: f(1, f(2, f(3, "")))
    /// let rendered = vec![1, 2, 3].fold_right(String::new(), |element, accumulator| {
    ///     format!("{element}{accumulator}")
    /// });
    /// assert_eq!(rendered, "123");
    /// ```
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Maps each element to a [`Monoid`] and combines all results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::typeclass::{Foldable, Sum};
    ///
    /// let sum: Sum<i32> = vec![1, 2, 3, 4].fold_map(Sum);
    /// assert_eq!(sum.0, 10);
    /// ```
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
        Self: Sized,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Returns whether the structure contains no elements.
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.clone().fold_left(true, |_, _| false)
    }

    /// Returns the number of elements in the structure.
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Collects the elements into a `Vec` in iteration order.
    fn to_vec(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut elements, element| {
            elements.push(element);
            elements
        })
    }

    /// Returns the first element satisfying the predicate, if any.
    fn find<P>(self, mut predicate: P) -> Option<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(None, |found, element| {
            if found.is_none() && predicate(&element) {
                Some(element)
            } else {
                found
            }
        })
    }

    /// Returns whether any element satisfies the predicate.
    fn exists<P>(self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(false, |found, element| found || predicate(&element))
    }

    /// Returns whether every element satisfies the predicate.
    ///
    /// Vacuously true for an empty structure.
    fn for_all<P>(self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(true, |all, element| all && predicate(&element))
    }
}

impl<A> Foldable for Option<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Some(value) => function(init, value),
            None => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Some(value) => function(value, init),
            None => init,
        }
    }
}

impl<T> Foldable for Vec<T> {
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
        self.into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }
}
