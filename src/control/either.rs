//! Either type - a value that can be one of two types.
//!
//! This module provides the `Either<L, R>` type, which represents a value
//! that is either a `Left(L)` or a `Right(R)`, together with the
//! [`LeftProjection`] and [`RightProjection`] views that scope operations
//! to one side.
//!
//! Every operation is derived from [`Either::fold`] and the two joins, so
//! each one handles both cases.
//!
//! # Examples
//!
//! ```rust
//! use lambda_companion::control::Either;
//!
//! let parsed: Either<String, i32> = Either::Right(42);
//!
//! // Operate on the right side without checking which side is held
//! let doubled = parsed.right().map(|n| n * 2);
//! assert_eq!(doubled, Either::Right(84));
//!
//! // Eliminate with fold, handling both cases
//! let message = doubled.fold(|error| error, |n| format!("got {n}"));
//! assert_eq!(message, "got 84");
//! ```

use std::fmt;

/// A value that can be one of two types.
///
/// `Either<L, R>` is either `Left(L)` or `Right(R)`, never both and never
/// neither. By convention `Left` holds a failure and `Right` a success.
/// Equality is structural: `Left(1)` and `Right(1)` are different values.
///
/// # Type Parameters
///
/// * `L` - The type of the left value
/// * `R` - The type of the right value
///
/// # Examples
///
/// ```rust
/// use lambda_companion::control::Either;
///
/// let left: Either<i32, i32> = Either::Left(1);
/// let right: Either<i32, i32> = Either::Right(1);
/// assert_ne!(left, right);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left variant, conventionally representing failure or the first alternative.
    Left(L),
    /// The right variant, conventionally representing success or the second alternative.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambda_companion::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert!(left.is_left());
    /// ```
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Elimination and Joins
    // =========================================================================

    /// Eliminates the Either by applying one of two functions.
    ///
    /// Exactly one function is called, the one matching the held side.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambda_companion::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.fold(|x| x.to_string(), |s| s), "42");
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.fold(|x: i32| x.to_string(), |s| s), "hello");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Joins the Either through its left side.
    ///
    /// If this is `Left(l)`, returns `joiner(l)`. If this is `Right(r)`,
    /// returns `Right(r)` with the new left type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambda_companion::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(4);
    /// let joined = left.join_left(|n| {
    ///     if n % 2 == 0 { Either::Left(n / 2) } else { Either::Right("odd".to_string()) }
    /// });
    /// assert_eq!(joined, Either::Left(2));
    ///
    /// let right: Either<i32, String> = Either::Right("kept".to_string());
    /// let joined = right.join_left(|n: i32| Either::Left(n / 2));
    /// assert_eq!(joined, Either::Right("kept".to_string()));
    /// ```
    #[inline]
    pub fn join_left<X, F>(self, joiner: F) -> Either<X, R>
    where
        F: FnOnce(L) -> Either<X, R>,
    {
        self.fold(joiner, Either::Right)
    }

    /// Joins the Either through its right side.
    ///
    /// If this is `Right(r)`, returns `joiner(r)`. If this is `Left(l)`,
    /// returns `Left(l)` with the new right type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambda_companion::control::Either;
    ///
    /// let right: Either<String, i32> = Either::Right(4);
    /// let joined = right.join_right(|n| Either::Right(n + 1));
    /// assert_eq!(joined, Either::Right(5));
    /// ```
    #[inline]
    pub fn join_right<X, F>(self, joiner: F) -> Either<L, X>
    where
        F: FnOnce(R) -> Either<L, X>,
    {
        self.fold(Either::Left, joiner)
    }

    // =========================================================================
    // Projections
    // =========================================================================

    /// Projects this Either onto its left side.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambda_companion::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.left().to_option(), Some(42));
    /// ```
    #[inline]
    pub const fn left(self) -> LeftProjection<L, R> {
        LeftProjection { either: self }
    }

    /// Projects this Either onto its right side.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambda_companion::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.right().to_option(), None);
    /// ```
    #[inline]
    pub const fn right(self) -> RightProjection<L, R> {
        RightProjection { either: self }
    }

    // =========================================================================
    // Reference Extraction (Non-consuming)
    // =========================================================================

    /// Returns a reference to the left value if present.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the right value if present.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Converts from `&Either<L, R>` to `Either<&L, &R>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambda_companion::control::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// let length = right.as_ref().right().map(|s| s.len());
    /// assert_eq!(length, Either::Right(5));
    /// // right is still available here
    /// assert!(right.is_right());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the left value if present.
    ///
    /// Shorthand for `self.left().map(function)`.
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        self.left().map(function)
    }

    /// Applies a function to the right value if present.
    ///
    /// Shorthand for `self.right().map(function)`.
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        self.right().map(function)
    }

    /// Applies one of two functions depending on whether this is Left or Right.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambda_companion::control::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// let result = right.bimap(|x: i32| x * 2, |s| s.len());
    /// assert_eq!(result, Either::Right(5));
    /// ```
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        self.fold(
            |value| Either::Left(left_function(value)),
            |value| Either::Right(right_function(value)),
        )
    }

    /// Swaps the Left and Right variants.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambda_companion::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.swap(), Either::Right(42));
    /// ```
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        self.fold(Either::Right, Either::Left)
    }

    // =========================================================================
    // Unwrap Operations
    // =========================================================================

    /// Returns the left value, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Right` value.
    #[inline]
    pub fn unwrap_left(self) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => panic!("called `Either::unwrap_left()` on a `Right` value"),
        }
    }

    /// Returns the right value, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Left` value.
    #[inline]
    pub fn unwrap_right(self) -> R {
        match self {
            Self::Left(_) => panic!("called `Either::unwrap_right()` on a `Left` value"),
            Self::Right(value) => value,
        }
    }

    /// Converts into a pair of `Option`s.
    ///
    /// Returns `(Some(l), None)` for `Left(l)` and `(None, Some(r))` for `Right(r)`.
    #[inline]
    pub fn into_options(self) -> (Option<L>, Option<R>) {
        self.fold(|value| (Some(value), None), |value| (None, Some(value)))
    }
}

impl<L: Default, R> Either<L, R> {
    /// Returns the left value, or default if this is a Right.
    #[inline]
    pub fn left_or_default(self) -> L {
        self.left().or_else_get(L::default)
    }
}

impl<L, R: Default> Either<L, R> {
    /// Returns the right value, or default if this is a Left.
    #[inline]
    pub fn right_or_default(self) -> R {
        self.right().or_else_get(R::default)
    }
}

// =============================================================================
// Left Projection
// =============================================================================

/// A view of an [`Either`] scoped to its left side.
///
/// Obtained with [`Either::left`]. Operations act on the left payload when
/// the Either is a `Left` and leave a `Right` untouched.
///
/// # Examples
///
/// ```rust
/// use lambda_companion::control::Either;
///
/// let left: Either<String, i32> = Either::Left("error".to_string());
/// assert_eq!(left.clone().left().map(|s| s.len()), Either::Left(5));
///
/// let right: Either<String, i32> = Either::Right(1);
/// assert_eq!(right.left().map(|s| s.len()), Either::Right(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LeftProjection<L, R> {
    either: Either<L, R>,
}

impl<L, R> LeftProjection<L, R> {
    /// Applies the function to the left value.
    ///
    /// A `Right` is returned unchanged.
    #[inline]
    pub fn map<X, F>(self, mapper: F) -> Either<X, R>
    where
        F: FnOnce(L) -> X,
    {
        self.either.join_left(|value| Either::Left(mapper(value)))
    }

    /// Applies a function returning an Either to the left value.
    ///
    /// Equivalent to [`Either::join_left`].
    #[inline]
    pub fn flat_map<X, F>(self, joiner: F) -> Either<X, R>
    where
        F: FnOnce(L) -> Either<X, R>,
    {
        self.either.join_left(joiner)
    }

    /// Keeps the Either if it is a `Left` whose value satisfies the predicate.
    ///
    /// Returns `None` for a `Right`, whatever the predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambda_companion::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(4);
    /// assert_eq!(left.clone().left().filter(|n| n % 2 == 0), Some(left));
    ///
    /// let right: Either<i32, String> = Either::Right("x".to_string());
    /// assert_eq!(right.left().filter(|_| true), None);
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Option<Either<L, R>>
    where
        P: FnOnce(&L) -> bool,
    {
        let keep = self.either.left_ref().is_some_and(predicate);
        keep.then_some(self.either)
    }

    /// Calls the consumer with the left value, then returns the Either.
    #[inline]
    pub fn peek<C>(self, consumer: C) -> Either<L, R>
    where
        C: FnOnce(&L),
    {
        if let Either::Left(value) = &self.either {
            consumer(value);
        }
        self.either
    }

    /// Calls the consumer with the left value, if any.
    #[inline]
    pub fn for_each<C>(self, consumer: C)
    where
        C: FnOnce(L),
    {
        if let Some(value) = self.to_option() {
            consumer(value);
        }
    }

    /// Returns the left value, or `None` for a `Right`.
    #[inline]
    pub fn to_option(self) -> Option<L> {
        self.either.fold(Some, |_| None)
    }

    /// Returns an iterator over a reference to the left value.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&L> {
        self.either.left_ref().into_iter()
    }

    /// Returns the left value, or `other` for a `Right`.
    #[inline]
    pub fn or_else(self, other: L) -> L {
        self.either.fold(|value| value, |_| other)
    }

    /// Returns the left value, or the result of `supplier` for a `Right`.
    ///
    /// The supplier is only called for a `Right`.
    #[inline]
    pub fn or_else_get<S>(self, supplier: S) -> L
    where
        S: FnOnce() -> L,
    {
        self.either.fold(|value| value, |_| supplier())
    }

    /// Returns the left value, or an error built from the right value.
    ///
    /// # Errors
    ///
    /// Returns `Err(error_mapper(r))` if this projects a `Right(r)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambda_companion::control::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("not a number".to_string());
    /// let result = right.left().or_else_throw(|message| format!("expected left: {message}"));
    /// assert_eq!(result, Err("expected left: not a number".to_string()));
    /// ```
    #[inline]
    pub fn or_else_throw<X, F>(self, error_mapper: F) -> Result<L, X>
    where
        F: FnOnce(R) -> X,
    {
        self.either.fold(Ok, |value| Err(error_mapper(value)))
    }

    /// Returns the projected Either.
    #[inline]
    pub fn into_either(self) -> Either<L, R> {
        self.either
    }
}

// =============================================================================
// Right Projection
// =============================================================================

/// A view of an [`Either`] scoped to its right side.
///
/// Obtained with [`Either::right`]. Operations act on the right payload when
/// the Either is a `Right` and leave a `Left` untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RightProjection<L, R> {
    either: Either<L, R>,
}

impl<L, R> RightProjection<L, R> {
    /// Applies the function to the right value.
    ///
    /// A `Left` is returned unchanged.
    #[inline]
    pub fn map<X, F>(self, mapper: F) -> Either<L, X>
    where
        F: FnOnce(R) -> X,
    {
        self.either.join_right(|value| Either::Right(mapper(value)))
    }

    /// Applies a function returning an Either to the right value.
    ///
    /// Equivalent to [`Either::join_right`].
    #[inline]
    pub fn flat_map<X, F>(self, joiner: F) -> Either<L, X>
    where
        F: FnOnce(R) -> Either<L, X>,
    {
        self.either.join_right(joiner)
    }

    /// Keeps the Either if it is a `Right` whose value satisfies the predicate.
    ///
    /// Returns `None` for a `Left`, whatever the predicate.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Option<Either<L, R>>
    where
        P: FnOnce(&R) -> bool,
    {
        let keep = self.either.right_ref().is_some_and(predicate);
        keep.then_some(self.either)
    }

    /// Calls the consumer with the right value, then returns the Either.
    #[inline]
    pub fn peek<C>(self, consumer: C) -> Either<L, R>
    where
        C: FnOnce(&R),
    {
        if let Either::Right(value) = &self.either {
            consumer(value);
        }
        self.either
    }

    /// Calls the consumer with the right value, if any.
    #[inline]
    pub fn for_each<C>(self, consumer: C)
    where
        C: FnOnce(R),
    {
        if let Some(value) = self.to_option() {
            consumer(value);
        }
    }

    /// Returns the right value, or `None` for a `Left`.
    #[inline]
    pub fn to_option(self) -> Option<R> {
        self.either.fold(|_| None, Some)
    }

    /// Returns an iterator over a reference to the right value.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&R> {
        self.either.right_ref().into_iter()
    }

    /// Returns the right value, or `other` for a `Left`.
    #[inline]
    pub fn or_else(self, other: R) -> R {
        self.either.fold(|_| other, |value| value)
    }

    /// Returns the right value, or the result of `supplier` for a `Left`.
    ///
    /// The supplier is only called for a `Left`.
    #[inline]
    pub fn or_else_get<S>(self, supplier: S) -> R
    where
        S: FnOnce() -> R,
    {
        self.either.fold(|_| supplier(), |value| value)
    }

    /// Returns the right value, or an error built from the left value.
    ///
    /// # Errors
    ///
    /// Returns `Err(error_mapper(l))` if this projects a `Left(l)`.
    #[inline]
    pub fn or_else_throw<X, F>(self, error_mapper: F) -> Result<R, X>
    where
        F: FnOnce(L) -> X,
    {
        self.either.fold(|value| Err(error_mapper(value)), Ok)
    }

    /// Returns the projected Either.
    #[inline]
    pub fn into_either(self) -> Either<L, R> {
        self.either
    }
}

// =============================================================================
// Formatting
// =============================================================================

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => write!(formatter, "Left({value})"),
            Self::Right(value) => write!(formatter, "Right({value})"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// Converts a `Result` to an `Either`.
    ///
    /// `Ok(r)` becomes `Right(r)`, and `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// Converts an `Either` to a `Result`.
    ///
    /// `Right(r)` becomes `Ok(r)`, and `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        either.right().or_else_throw(|value| value)
    }
}

static_assertions::assert_impl_all!(Either<i32, String>: Send, Sync, Clone, Eq);
static_assertions::assert_not_impl_any!(Either<std::rc::Rc<i32>, i32>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn left_construction() {
        let value: Either<i32, String> = Either::Left(42);
        assert!(value.is_left());
        assert!(!value.is_right());
    }

    #[rstest]
    fn right_construction() {
        let value: Either<i32, String> = Either::Right("hello".to_string());
        assert!(value.is_right());
        assert!(!value.is_left());
    }

    #[rstest]
    fn left_with_absent_payload_is_still_left() {
        let value: Either<Option<i32>, String> = Either::Left(None);
        assert!(value.is_left());
        assert_eq!(value.left().to_option(), Some(None));
    }

    #[rstest]
    fn join_passes_non_matching_side_through() {
        let value: Either<i32, String> = Either::Right("r".to_string());
        let joined: Either<u8, String> = value.join_left(|_| panic!("must not be called"));
        assert_eq!(joined, Either::Right("r".to_string()));
    }

    #[rstest]
    fn or_else_get_is_lazy_on_matching_side() {
        let value: Either<i32, String> = Either::Left(1);
        assert_eq!(value.left().or_else_get(|| panic!("must not be called")), 1);
    }

    #[rstest]
    fn display_names_the_side() {
        let left: Either<i32, &str> = Either::Left(1);
        let right: Either<i32, &str> = Either::Right("r");
        assert_eq!(left.to_string(), "Left(1)");
        assert_eq!(right.to_string(), "Right(r)");
    }

    #[rstest]
    fn result_conversion_roundtrip() {
        let ok: Result<i32, String> = Ok(42);
        let either: Either<String, i32> = ok.into();
        let result: Result<i32, String> = either.into();
        assert_eq!(result, Ok(42));

        let err: Result<i32, String> = Err("error".to_string());
        let either: Either<String, i32> = err.into();
        let result: Result<i32, String> = either.into();
        assert_eq!(result, Err("error".to_string()));
    }
}
