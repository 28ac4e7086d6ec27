//! Numeric wrapper types for different monoidal operations.
//!
//! The same underlying numeric type supports several lawful monoids, so a
//! bare number cannot pick one. These newtypes select the operation:
//!
//! - [`Sum`]: addition, identity `0`
//! - [`Product`]: multiplication, identity `1`
//!
//! They exist chiefly to drive [`Foldable::fold_map`]:
//!
//! ```rust
//! use conslist::typeclass::{Foldable, Sum, Product};
//!
//! let values = vec![1, 2, 3, 4];
//! let sum: Sum<i32> = values.clone().fold_map(Sum);
//! assert_eq!(sum.0, 10);
//!
//! let product: Product<i32> = values.fold_map(Product);
//! assert_eq!(product.0, 24);
//! ```
//!
//! [`Foldable::fold_map`]: super::Foldable::fold_map

use std::ops::{Add, Mul};

use super::monoid::Monoid;
use super::semigroup::Semigroup;

/// A newtype wrapper selecting the additive semigroup/monoid.
///
/// `Sum(a).combine(Sum(b))` equals `Sum(a + b)`; the identity is `Sum(0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Sum<A>(pub A);

impl<A> Sum<A> {
    /// Creates a new `Sum` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Sum` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

/// A newtype wrapper selecting the multiplicative semigroup/monoid.
///
/// `Product(a).combine(Product(b))` equals `Product(a * b)`; the identity is
/// `Product(1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Product<A>(pub A);

impl<A> Product<A> {
    /// Creates a new `Product` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Product` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A: Add<Output = A>> Semigroup for Sum<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl<A: Mul<Output = A>> Semigroup for Product<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

// Monoid identities depend on the concrete numeric type, so the instances
// are enumerated per primitive rather than written once generically.
macro_rules! numeric_monoid_instances {
    ($($numeric:ty),* $(,)?) => {
        $(
            impl Monoid for Sum<$numeric> {
                fn empty() -> Self {
                    Self(0 as $numeric)
                }
            }

            impl Monoid for Product<$numeric> {
                fn empty() -> Self {
                    Self(1 as $numeric)
                }
            }
        )*
    };
}

numeric_monoid_instances!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn sum_combines_by_addition() {
        assert_eq!(Sum::new(3).combine(Sum::new(5)), Sum::new(8));
    }

    #[rstest]
    fn product_combines_by_multiplication() {
        assert_eq!(Product::new(3).combine(Product::new(5)), Product::new(15));
    }

    #[rstest]
    fn sum_identity_is_zero() {
        assert_eq!(Sum::<i32>::empty(), Sum::new(0));
        assert_eq!(Sum::<i32>::empty().combine(Sum::new(7)), Sum::new(7));
    }

    #[rstest]
    fn product_identity_is_one() {
        assert_eq!(Product::<i64>::empty(), Product::new(1));
        assert_eq!(Product::new(7).combine(Product::<i64>::empty()), Product::new(7));
    }

    #[rstest]
    fn combine_all_sums_an_iterator() {
        let total = Sum::combine_all((1..=4).map(Sum::new));
        assert_eq!(total, Sum::new(10));
    }
}
