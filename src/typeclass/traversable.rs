//! Traversable type class - mapping with effects and collecting results.
//!
//! `traverse` applies an effectful function to each element and sequences
//! the effects left to right, collecting the results inside the effect
//! context. If every application succeeds the whole structure is rebuilt
//! inside the effect; the first failure short-circuits and becomes the
//! overall result.
//!
//! # Limitations in Rust
//!
//! Rust lacks higher-kinded types, so a single `traverse` generic over any
//! applicative context is not expressible. This trait instead specializes
//! the two ubiquitous contexts:
//!
//! - [`traverse_option`](Traversable::traverse_option) for `Option<B>`
//! - [`traverse_result`](Traversable::traverse_result) for `Result<B, E>`
//!
//! Sequencing order (left to right, no reordering, no duplicated effects)
//! is part of the contract, not an implementation detail.
//!
//! # Examples
//!
//! ```rust
//! use conslist::typeclass::Traversable;
//!
//! let strings = vec!["1", "2", "3"];
//! let numbers: Option<Vec<i32>> = strings.traverse_option(|s| s.parse().ok());
//! assert_eq!(numbers, Some(vec![1, 2, 3]));
//!
//! let with_error = vec!["1", "not a number", "3"];
//! let failed: Option<Vec<i32>> = with_error.traverse_option(|s| s.parse().ok());
//! assert_eq!(failed, None);
//! ```

use super::foldable::Foldable;
use super::functor::Functor;
use super::higher::TypeConstructor;

/// A type class for structures that can be traversed with effects.
///
/// # Laws (informal, since they cannot be stated without HKT)
///
/// - **Identity**: traversing with a pure function is the same as mapping.
/// - **Order**: effects run once per element, left to right.
pub trait Traversable: Functor + Foldable {
    /// Applies a function returning `Option` to each element and collects
    /// the results.
    ///
    /// Returns `Some` of the rebuilt structure if every application returns
    /// `Some`; returns `None` at the first `None`, without applying the
    /// function to later elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::typeclass::Traversable;
    ///
    /// let parsed: Option<Vec<i32>> = vec!["1", "2"].traverse_option(|s| s.parse().ok());
    /// assert_eq!(parsed, Some(vec![1, 2]));
    /// ```
    fn traverse_option<B, F>(self, function: F) -> Option<Self::WithType<B>>
    where
        F: FnMut(Self::Inner) -> Option<B>,
        Self: Sized;

    /// Applies a function returning `Result` to each element and collects
    /// the results.
    ///
    /// Returns `Ok` of the rebuilt structure if every application returns
    /// `Ok`; returns the first `Err`, without applying the function to
    /// later elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::typeclass::Traversable;
    ///
    /// fn positive(n: i32) -> Result<i32, &'static str> {
    ///     if n > 0 { Ok(n) } else { Err("must be positive") }
    /// }
    ///
    /// assert_eq!(vec![1, 2, 3].traverse_result(positive), Ok(vec![1, 2, 3]));
    /// assert_eq!(vec![1, -2, 3].traverse_result(positive), Err("must be positive"));
    /// ```
    fn traverse_result<B, E, F>(self, function: F) -> Result<Self::WithType<B>, E>
    where
        F: FnMut(Self::Inner) -> Result<B, E>,
        Self: Sized;

    /// Turns a structure of `Option`s inside out.
    ///
    /// Converts `Self<Option<A>>` into `Option<Self<A>>`; equivalent to
    /// `traverse_option(|x| x)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::typeclass::Traversable;
    ///
    /// let values: Vec<Option<i32>> = vec![Some(1), Some(2)];
    /// assert_eq!(values.sequence_option(), Some(vec![1, 2]));
    ///
    /// let broken: Vec<Option<i32>> = vec![Some(1), None];
    /// assert_eq!(broken.sequence_option(), None);
    /// ```
    fn sequence_option(self) -> Option<Self::WithType<<Self::Inner as TypeConstructor>::Inner>>
    where
        Self: Sized,
        Self::Inner: TypeConstructor + Into<Option<<Self::Inner as TypeConstructor>::Inner>>,
    {
        self.traverse_option(Into::into)
    }

    /// Turns a structure of `Result`s inside out.
    ///
    /// Converts `Self<Result<A, E>>` into `Result<Self<A>, E>`; equivalent
    /// to `traverse_result(|x| x)`.
    fn sequence_result<E>(
        self,
    ) -> Result<Self::WithType<<Self::Inner as TypeConstructor>::Inner>, E>
    where
        Self: Sized,
        Self::Inner: TypeConstructor + Into<Result<<Self::Inner as TypeConstructor>::Inner, E>>,
    {
        self.traverse_result(Into::into)
    }
}

impl<A> Traversable for Option<A> {
    fn traverse_option<B, F>(self, mut function: F) -> Option<Option<B>>
    where
        F: FnMut(A) -> Option<B>,
    {
        match self {
            Some(value) => function(value).map(Some),
            None => Some(None),
        }
    }

    fn traverse_result<B, E, F>(self, mut function: F) -> Result<Option<B>, E>
    where
        F: FnMut(A) -> Result<B, E>,
    {
        match self {
            Some(value) => function(value).map(Some),
            None => Ok(None),
        }
    }
}

impl<T> Traversable for Vec<T> {
    fn traverse_option<B, F>(self, mut function: F) -> Option<Vec<B>>
    where
        F: FnMut(T) -> Option<B>,
    {
        let mut results = Vec::with_capacity(self.len());
        for element in self {
            results.push(function(element)?);
        }
        Some(results)
    }

    fn traverse_result<B, E, F>(self, mut function: F) -> Result<Vec<B>, E>
    where
        F: FnMut(T) -> Result<B, E>,
    {
        let mut results = Vec::with_capacity(self.len());
        for element in self {
            results.push(function(element)?);
        }
        Ok(results)
    }
}
