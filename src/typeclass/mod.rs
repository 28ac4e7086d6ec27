//! Type class traits for the list's algebraic structure.
//!
//! The list type itself carries no algebra; every capability is attached
//! externally through one of these traits, and is only available when the
//! element type supplies the capability it depends on (equality on lists
//! needs equality on elements, ordering needs ordering, and so on):
//!
//! - [`Semigroup`]: associative binary combination
//! - [`Monoid`]: semigroup with identity element
//! - [`Functor`]: element-wise, shape-preserving mapping
//! - [`Foldable`]: reduction to a summary value
//! - [`Traversable`]: effectful traversal over `Option` / `Result`
//! - [`CoflatMap`]: mapping over every remaining sub-structure
//!
//! ## Higher-kinded types emulation
//!
//! Rust has no native higher-kinded types, so [`TypeConstructor`] emulates
//! them with a Generic Associated Type; the capability traits build on it.
//!
//! ## Monoid wrappers
//!
//! [`Sum`] and [`Product`] select which numeric monoid `fold_map` combines
//! with.
//!
//! # Examples
//!
//! ```rust
//! use conslist::typeclass::{Semigroup, Monoid};
//!
//! let hello = String::from("Hello, ");
//! let world = String::from("World!");
//! assert_eq!(hello.combine(world), "Hello, World!");
//!
//! assert_eq!(String::empty(), "");
//! ```

mod coflatmap;
mod foldable;
mod functor;
mod higher;
mod monoid;
mod semigroup;
mod traversable;
mod wrappers;

pub use coflatmap::CoflatMap;
pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use traversable::Traversable;
pub use wrappers::{Product, Sum};
