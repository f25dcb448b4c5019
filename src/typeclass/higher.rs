//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Option<_>` or
//! `Try<_, E>` directly. [`TypeConstructor`] names the type a constructor is
//! applied to and lets the same constructor be applied to another type, which
//! is what [`Functor`](super::Functor) and [`Monad`](super::Monad) need.
//!
//! # Example
//!
//! ```rust
//! use lambda_companion::typeclass::TypeConstructor;
//!
//! fn transform_type<T: TypeConstructor>(value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let some_int: Option<i32> = Some(42);
//! let none_string: Option<String> = transform_type(some_int);
//! assert_eq!(none_string, None);
//! ```

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// For the two-parameter types of this crate, the constructor keeps the
/// failure side fixed: `Either<L, _>` and `Try<_, E>`.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

#[cfg(feature = "control")]
impl<L, R> TypeConstructor for crate::control::Either<L, R> {
    type Inner = R;
    type WithType<B> = crate::control::Either<L, B>;
}

#[cfg(feature = "control")]
impl<T, E> TypeConstructor for crate::control::Try<T, E> {
    type Inner = T;
    type WithType<B> = crate::control::Try<B, E>;
}
