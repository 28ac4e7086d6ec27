//! Higher-kinded type emulation through Generic Associated Types.
//!
//! Rust has no native higher-kinded types, so traits like `Functor` cannot
//! abstract over `ConsList<_>` and `Option<_>` directly. [`TypeConstructor`]
//! works around this with a GAT: a type names the element it is currently
//! applied to (`Inner`) and how to re-apply itself to a different element
//! (`WithType<B>`).
//!
//! # Example
//!
//! ```rust
//! use conslist::typeclass::TypeConstructor;
//!
//! fn rebuilt_empty<T: TypeConstructor>(_value: &T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none: Option<String> = rebuilt_empty(&Some(42));
//! assert_eq!(none, None);
//! ```

/// A trait representing a type constructor.
///
/// Implemented by container types so that capability traits (`Functor`,
/// `Foldable`, `Traversable`) can talk about "the same container holding a
/// different element type".
///
/// # Laws
///
/// `WithType<Inner>` must be the implementing type itself (up to type
/// equality), so that re-applying a constructor to its own element type is
/// the identity.
pub trait TypeConstructor {
    /// The element type this constructor is currently applied to.
    type Inner;

    /// The same type constructor applied to a different element type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
    type WithType<B> = Vec<B>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Option<i32>>();
    }

    #[test]
    fn result_with_type_preserves_error_type() {
        fn assert_result_with_type<T, E, B>()
        where
            Result<T, E>: TypeConstructor<Inner = T, WithType<B> = Result<B, E>>,
        {
        }

        assert_result_with_type::<i32, String, bool>();
        assert_result_with_type::<String, (), i32>();
    }

    #[test]
    fn chained_with_type_transformations() {
        type Step1 = <Vec<i32> as TypeConstructor>::WithType<String>;
        type Step2 = <Step1 as TypeConstructor>::WithType<bool>;

        fn assert_is_vec_bool<T: TypeConstructor<Inner = bool>>() {}
        assert_is_vec_bool::<Step2>();
    }
}
