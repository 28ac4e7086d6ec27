//! Persistent (immutable) data structures.
//!
//! Persistent data structures preserve previous versions of themselves when
//! modified. Every operation returns a new structure that shares as much of
//! its representation as possible with the original, so "modifying" a list
//! never invalidates any other handle to it.
//!
//! - [`ConsList`]: a singly-linked cons list with O(1) prepend and tail
//! - [`NonEmptyList`]: a list refinement whose head always exists

mod list;
mod non_empty;

pub use list::{ConsList, ConsListIntoIter, ConsListIter};
pub use non_empty::{NonEmptyList, NonEmptyListIter};
