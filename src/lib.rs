//! # conslist
//!
//! A persistent, strictly-evaluated singly-linked list with type class
//! instances.
//!
//! ## Overview
//!
//! This library provides [`ConsList`], an immutable cons list designed as a
//! safer replacement for dynamically-typed list values: it is invariant in
//! its element type, every operation is total (no operation panics for a
//! structurally valid input), and every operation is stack-safe regardless
//! of list length.
//!
//! It includes:
//!
//! - **The list core**: O(1) `cons`/`head`/`tail`, structural sharing via
//!   reference counting, exhaustive deconstruction through `uncons`.
//! - **Structural operations**: construction, search, slicing, reordering,
//!   and folds, all implemented as explicit loops so evaluation never
//!   depends on call-stack depth.
//! - **Derived operations**: zips, scans, intersperse, patch, grouping
//!   helpers, expressed in terms of the structural primitives.
//! - **Type class instances**: `Semigroup`/`Monoid` concatenation,
//!   `Functor`, `Foldable`, `Traversable` (effectful traversal over
//!   `Option` and `Result`), `CoflatMap` (suffix-wise mapping), plus
//!   structural equality, lexicographic ordering, hashing, and display.
//! - **Boundary types**: [`NonEmptyList`], a refinement that is only
//!   obtainable from a non-empty list and converts back losslessly.
//!
//! ## Example
//!
//! ```rust
//! use conslist::prelude::*;
//!
//! let list = conslist![1, 2, 3];
//! assert_eq!(list.head(), Some(&1));
//! assert_eq!(list.map(|x| x * 2), conslist![2, 4, 6]);
//! assert_eq!(format!("{list}"), "[1,2,3]");
//!
//! // Every operation is total: out-of-range arguments saturate.
//! assert_eq!(list.take(10), list);
//! assert_eq!(list.updated(99, 0), list);
//! ```
//!
//! [`ConsList`]: persistent::ConsList
//! [`NonEmptyList`]: persistent::NonEmptyList

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use conslist::prelude::*;
/// ```
pub mod prelude {
    pub use crate::conslist;
    pub use crate::persistent::*;
    pub use crate::typeclass::*;
}

pub mod persistent;
pub mod typeclass;
