//! Functor type class - mapping over container values.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lambda_companion::control::{Either, Try};
//! use lambda_companion::typeclass::Functor;
//!
//! let right: Either<String, i32> = Either::Right(5);
//! assert_eq!(right.fmap(|n| n + 1), Either::Right(6));
//!
//! let success: Try<i32, String> = Try::success(5);
//! assert_eq!(success.fmap(|n| n * 2), Try::success(10));
//! ```

use super::higher::TypeConstructor;

/// A type class for types that can have a function mapped over their contents.
///
/// `Either` maps its `Right` side and `Try` maps its `Success` side; the
/// other case is carried through unchanged.
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambda_companion::typeclass::Functor;
    ///
    /// assert_eq!(Some(5).replace("replaced"), Some("replaced"));
    /// assert_eq!(None::<i32>.replace("replaced"), None);
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Option<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

#[cfg(feature = "control")]
mod control_instances {
    use super::Functor;
    use crate::control::{Either, Try};

    impl<L: Clone, R> Functor for Either<L, R> {
        #[inline]
        fn fmap<B, F>(self, function: F) -> Either<L, B>
        where
            F: FnOnce(R) -> B,
        {
            self.right().map(function)
        }

        #[inline]
        fn fmap_ref<B, F>(&self, function: F) -> Either<L, B>
        where
            F: FnOnce(&R) -> B,
        {
            self.as_ref().bimap(L::clone, function)
        }
    }

    impl<T, E: Clone> Functor for Try<T, E> {
        #[inline]
        fn fmap<B, F>(self, function: F) -> Try<B, E>
        where
            F: FnOnce(T) -> B,
        {
            self.map(function)
        }

        #[inline]
        fn fmap_ref<B, F>(&self, function: F) -> Try<B, E>
        where
            F: FnOnce(&T) -> B,
        {
            match self {
                Self::Success(value) => Try::Success(function(value)),
                Self::Failure(error) => Try::Failure(error.clone()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn option_fmap_ref_keeps_original() {
        let value = Some("hello".to_string());
        assert_eq!(value.fmap_ref(String::len), Some(5));
        assert_eq!(value, Some("hello".to_string()));
    }

    #[cfg(feature = "control")]
    #[rstest]
    fn either_fmap_ref_clones_left() {
        use crate::control::Either;

        let left: Either<String, i32> = Either::Left("error".to_string());
        assert_eq!(left.fmap_ref(|n| n + 1), Either::Left("error".to_string()));
    }

    #[cfg(feature = "control")]
    #[rstest]
    fn try_void_keeps_failure() {
        use crate::control::Try;

        let failed: Try<i32, String> = Try::failure("e".to_string());
        assert_eq!(failed.void(), Try::failure("e".to_string()));
    }
}
