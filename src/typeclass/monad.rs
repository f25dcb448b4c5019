//! Monad type class - sequencing computations within a context.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lambda_companion::control::Try;
//! use lambda_companion::typeclass::Monad;
//!
//! fn halve(value: i32) -> Try<i32, String> {
//!     if value % 2 == 0 {
//!         Try::success(value / 2)
//!     } else {
//!         Try::failure(format!("{value} is odd"))
//!     }
//! }
//!
//! let result = <Try<i32, String> as Monad>::pure(12).and_then(halve).and_then(halve);
//! assert_eq!(result, Try::success(3));
//! ```

use super::functor::Functor;

/// A type class for types that support sequencing of computations.
///
/// `flat_map` lets the value produced by one step choose the next step. A
/// failed step (`None`, `Left`, `Failure`) ends the chain.
pub trait Monad: Functor {
    /// Lifts a value into the monad.
    fn pure(value: Self::Inner) -> Self;

    /// Applies a function to the value inside the monad and flattens the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map` to match Rust's naming conventions.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        Monad::flat_map(self, function)
    }

    /// Sequences two monadic computations, discarding the first result.
    ///
    /// If `self` represents a failure, the failure propagates and `next` is
    /// not returned.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        Monad::flat_map(self, |_| next)
    }
}

impl<A> Monad for Option<A> {
    #[inline]
    fn pure(value: A) -> Self {
        Some(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        Self::and_then(self, function)
    }
}

#[cfg(feature = "control")]
mod control_instances {
    use super::Monad;
    use crate::control::{Either, Try};

    impl<L: Clone, R> Monad for Either<L, R> {
        #[inline]
        fn pure(value: R) -> Self {
            Self::Right(value)
        }

        #[inline]
        fn flat_map<B, F>(self, function: F) -> Either<L, B>
        where
            F: FnOnce(R) -> Either<L, B>,
        {
            self.join_right(function)
        }
    }

    impl<T, E: Clone> Monad for Try<T, E> {
        #[inline]
        fn pure(value: T) -> Self {
            Self::Success(value)
        }

        #[inline]
        fn flat_map<B, F>(self, function: F) -> Try<B, E>
        where
            F: FnOnce(T) -> Try<B, E>,
        {
            Self::flat_map(self, function)
        }
    }
}
