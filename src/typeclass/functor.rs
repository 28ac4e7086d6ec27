//! Functor type class - mapping over container values.
//!
//! A `Functor` applies a function to every element of a container while
//! preserving the container's shape: length, order, and structure are
//! unchanged, only the elements are transformed.
//!
//! # Laws
//!
//! All implementations must satisfy:
//!
//! ## Identity
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use conslist::typeclass::Functor;
//!
//! let some_value: Option<i32> = Some(5);
//! assert_eq!(some_value.fmap(|n| n.to_string()), Some("5".to_string()));
//!
//! let numbers = vec![1, 2, 3];
//! assert_eq!(numbers.fmap(|n| n * 2), vec![2, 4, 6]);
//! ```

use super::higher::TypeConstructor;

/// A type class for containers that can have a function mapped over their
/// contents.
///
/// The function parameter is `FnMut` so that multi-element containers can
/// apply it once per element.
///
/// # Laws
///
/// Identity: `fa.fmap(|x| x) == fa`.
/// Composition: `fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))`.
pub trait Functor: TypeConstructor {
    /// Applies a function to every element, preserving the structure.
    ///
    /// # Arguments
    ///
    /// * `function` - A function applied to each element in order
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::typeclass::Functor;
    ///
    /// assert_eq!(Some(5).fmap(|n| n * 2), Some(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;
}

impl<A> Functor for Option<A> {
    fn fmap<B, F>(self, mut function: F) -> Option<B>
    where
        F: FnMut(A) -> B,
    {
        self.map(&mut function)
    }
}

impl<T, E> Functor for Result<T, E> {
    fn fmap<B, F>(self, mut function: F) -> Result<B, E>
    where
        F: FnMut(T) -> B,
    {
        self.map(&mut function)
    }
}

impl<T> Functor for Vec<T> {
    fn fmap<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(T) -> B,
    {
        self.into_iter().map(function).collect()
    }
}
