//! CoflatMap type class - mapping over every sub-structure.
//!
//! Where a functor's `fmap` hands the mapped function one *element* at a
//! time, `coflat_map` hands it the whole remaining *structure* at each
//! position. For a list this means the function sees every non-empty
//! suffix — the full list first, then the tail, then the tail's tail —
//! and the results line up one-to-one with the original positions.
//!
//! # Laws
//!
//! For all `fa` and pure functions `f`, `g`:
//!
//! ## Associativity
//!
//! ```text
//! fa.coflat_map(f).coflat_map(g) == fa.coflat_map(|w| g(&w.coflat_map(f)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use conslist::prelude::*;
//!
//! let list = conslist![1, 2, 3];
//! // Each position is replaced by the length of the suffix starting there.
//! let suffix_lengths = list.coflat_map(|suffix| suffix.len());
//! assert_eq!(suffix_lengths, conslist![3, 2, 1]);
//! ```

use super::higher::TypeConstructor;

/// A type class for structures whose positions can each be mapped from the
/// entire remaining structure at that position.
///
/// The result has exactly the same shape as the input: one output per
/// position, in the same order, and an empty structure maps to an empty
/// structure.
pub trait CoflatMap: TypeConstructor {
    /// Applies a function to every non-empty sub-structure.
    ///
    /// For a list, `function` is called on each suffix including the full
    /// list itself and excluding the empty suffix, front to back.
    ///
    /// # Arguments
    ///
    /// * `function` - Computes the output for a position from the whole
    ///   structure remaining at that position
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conslist::typeclass::CoflatMap;
    ///
    /// // For Option the only non-empty sub-structure is the value itself.
    /// let doubled = Some(21).coflat_map(|whole| whole.unwrap() * 2);
    /// assert_eq!(doubled, Some(42));
    /// ```
    fn coflat_map<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnMut(&Self) -> B;
}

impl<A> CoflatMap for Option<A> {
    fn coflat_map<B, F>(&self, mut function: F) -> Option<B>
    where
        F: FnMut(&Self) -> B,
    {
        match self {
            Some(_) => Some(function(self)),
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn option_coflat_map_sees_the_whole_value() {
        let present = Some(5);
        assert_eq!(present.coflat_map(|whole| whole.is_some()), Some(true));
    }

    #[rstest]
    fn option_coflat_map_of_none_is_none() {
        let absent: Option<i32> = None;
        assert_eq!(absent.coflat_map(|_| 1), None);
    }
}
