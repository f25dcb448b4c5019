//! Try type - the outcome of a computation that may fail.
//!
//! This module provides `Try<T, E>`, which is either a `Success(T)` holding
//! a produced value or a `Failure(E)` holding the error the computation
//! reported. Like `Either` with `Right` as the success side, `Try` is
//! right-biased: `map` and `flat_map` act on the value and pass a failure
//! through untouched, so failure handling can be left to the end of a chain.
//!
//! The error slot defaults to [`OpaqueError`], which can hold any
//! `std::error::Error`, so unrelated error types can be captured without a
//! common error hierarchy.
//!
//! # Examples
//!
//! ```rust
//! use lambda_companion::control::Try;
//!
//! fn divide(numerator: i32, denominator: i32) -> Result<i32, String> {
//!     if denominator == 0 {
//!         Err("division by zero".to_string())
//!     } else {
//!         Ok(numerator / denominator)
//!     }
//! }
//!
//! let quotient: Try<i32, String> = Try::of_bi_fn(divide, 84, 2);
//! let message = quotient
//!     .map(|value| value + 1)
//!     .recover(|value| format!("result {value}"), |error| format!("failed: {error}"));
//! assert_eq!(message, "result 43");
//!
//! let failed: Try<i32, String> = Try::of_bi_fn(divide, 1, 0);
//! assert_eq!(failed.or_else(0), 0);
//! ```

use std::error::Error;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use super::either::Either;
use super::error::EmptySequenceError;

// =============================================================================
// OpaqueError
// =============================================================================

/// A shared, type-erased error value.
///
/// `OpaqueError` wraps any `std::error::Error + Send + Sync + 'static` behind
/// an `Arc`, so it is cheap to clone. Two `OpaqueError`s are equal when they
/// are clones of the same captured error; errors captured separately are
/// never equal, even if their messages match.
///
/// Any such error converts into an `OpaqueError` with `From`, so `?` and
/// [`Try::of`] accept them directly.
///
/// # Examples
///
/// ```rust
/// use lambda_companion::control::OpaqueError;
///
/// let parse_error = "x".parse::<i32>().unwrap_err();
/// let error = OpaqueError::from(parse_error.clone());
///
/// assert_eq!(error, error.clone());
/// assert_ne!(error, OpaqueError::from(parse_error));
/// assert!(error.is::<std::num::ParseIntError>());
/// ```
#[derive(Clone)]
pub struct OpaqueError {
    inner: Arc<dyn Error + Send + Sync + 'static>,
}

impl OpaqueError {
    /// Wraps the given error.
    pub fn new<X>(error: X) -> Self
    where
        X: Error + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(error),
        }
    }

    /// Creates an error that only carries a message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambda_companion::control::OpaqueError;
    ///
    /// let error = OpaqueError::msg("connection refused");
    /// assert_eq!(error.to_string(), "connection refused");
    /// ```
    pub fn msg(message: impl Into<String>) -> Self {
        Self::new(MessageError(message.into()))
    }

    /// Returns the wrapped error.
    pub fn as_error(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.inner
    }

    /// Returns `true` if the wrapped error is of type `X`.
    pub fn is<X>(&self) -> bool
    where
        X: Error + 'static,
    {
        self.inner.is::<X>()
    }

    /// Returns a reference to the wrapped error if it is of type `X`.
    pub fn downcast_ref<X>(&self) -> Option<&X>
    where
        X: Error + 'static,
    {
        self.inner.downcast_ref::<X>()
    }

    /// Returns the shared wrapped error.
    pub fn into_inner(self) -> Arc<dyn Error + Send + Sync + 'static> {
        self.inner
    }
}

impl<X> From<X> for OpaqueError
where
    X: Error + Send + Sync + 'static,
{
    fn from(error: X) -> Self {
        Self::new(error)
    }
}

impl PartialEq for OpaqueError {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for OpaqueError {}

impl Hash for OpaqueError {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(Arc::as_ptr(&self.inner).cast::<()>(), state);
    }
}

impl fmt::Debug for OpaqueError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.inner, formatter)
    }
}

impl fmt::Display for OpaqueError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.inner, formatter)
    }
}

impl AsRef<dyn Error + Send + Sync + 'static> for OpaqueError {
    fn as_ref(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.as_error()
    }
}

#[derive(Debug)]
struct MessageError(String);

impl fmt::Display for MessageError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl Error for MessageError {}

// =============================================================================
// Try
// =============================================================================

/// The outcome of a computation that may fail.
///
/// A `Try` is either `Success(T)` or `Failure(E)`. Equality is structural
/// over the held value or the held error.
///
/// # Type Parameters
///
/// * `T` - The type of the produced value
/// * `E` - The type of the captured error, [`OpaqueError`] by default
///
/// # Examples
///
/// ```rust
/// use lambda_companion::control::Try;
///
/// let parsed: Try<i32> = Try::of(|| "42".parse::<i32>());
/// assert_eq!(parsed, Try::success(42));
///
/// let failed: Try<i32> = Try::of(|| "forty-two".parse::<i32>());
/// assert!(failed.is_failure());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Try<T, E = OpaqueError> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed with an error.
    Failure(E),
}

impl<T, E> Try<T, E> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a successful `Try`.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failed `Try`.
    #[inline]
    pub const fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Runs the supplier now and captures its outcome.
    ///
    /// `Ok(value)` becomes `Success(value)` and `Err(error)` becomes
    /// `Failure(error.into())`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambda_companion::control::Try;
    ///
    /// let attempt: Try<String> = Try::of(|| std::fs::read_to_string("/definitely/missing"));
    /// assert!(attempt.is_failure());
    /// ```
    pub fn of<X, F>(supplier: F) -> Self
    where
        F: FnOnce() -> Result<T, X>,
        X: Into<E>,
    {
        match supplier() {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error.into()),
        }
    }

    /// Applies the function to the argument now and captures its outcome.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambda_companion::control::Try;
    ///
    /// let port: Try<u16> = Try::of_fn(str::parse::<u16>, "8080");
    /// assert_eq!(port, Try::success(8080));
    /// ```
    pub fn of_fn<A, X, F>(function: F, argument: A) -> Self
    where
        F: FnOnce(A) -> Result<T, X>,
        X: Into<E>,
    {
        Self::of(|| function(argument))
    }

    /// Applies the function to both arguments now and captures its outcome.
    pub fn of_bi_fn<A, B, X, F>(function: F, first: A, second: B) -> Self
    where
        F: FnOnce(A, B) -> Result<T, X>,
        X: Into<E>,
    {
        Self::of(|| function(first, second))
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Converts from `&Try<T, E>` to `Try<&T, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Try<&T, &E> {
        match self {
            Self::Success(value) => Try::Success(value),
            Self::Failure(error) => Try::Failure(error),
        }
    }

    // =========================================================================
    // Chaining
    // =========================================================================

    /// Applies the function to the value of a `Success`.
    ///
    /// A `Failure` is returned unchanged. Use [`Try::try_map`] when the
    /// function itself can fail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambda_companion::control::Try;
    ///
    /// let value: Try<i32, String> = Try::success(20);
    /// assert_eq!(value.map(|n| n + 1), Try::success(21));
    ///
    /// let failed: Try<i32, String> = Try::failure("boom".to_string());
    /// assert_eq!(failed.map(|n| n + 1), Try::failure("boom".to_string()));
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Try<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Try::Success(function(value)),
            Self::Failure(error) => Try::Failure(error),
        }
    }

    /// Applies a fallible function to the value of a `Success`.
    ///
    /// An error returned by the function becomes the new `Failure`. A
    /// `Failure` is returned unchanged and the function is not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambda_companion::control::Try;
    ///
    /// let text: Try<&str> = Try::success("12x");
    /// let parsed = text.try_map(str::parse::<i32>);
    /// assert!(parsed.is_failure());
    /// ```
    #[inline]
    pub fn try_map<U, X, F>(self, function: F) -> Try<U, E>
    where
        F: FnOnce(T) -> Result<U, X>,
        X: Into<E>,
    {
        match self {
            Self::Success(value) => Try::of_fn(function, value),
            Self::Failure(error) => Try::Failure(error),
        }
    }

    /// Applies a function returning a `Try` to the value of a `Success`.
    ///
    /// The returned `Try` is the result, so a failure produced by the
    /// function is not nested. A `Failure` is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambda_companion::control::Try;
    ///
    /// fn reciprocal(value: f64) -> Try<f64, String> {
    ///     if value == 0.0 { Try::failure("zero".to_string()) } else { Try::success(1.0 / value) }
    /// }
    ///
    /// assert_eq!(Try::success(4.0).flat_map(reciprocal), Try::success(0.25));
    /// assert_eq!(Try::success(0.0).flat_map(reciprocal), Try::failure("zero".to_string()));
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Try<U, E>
    where
        F: FnOnce(T) -> Try<U, E>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => Try::Failure(error),
        }
    }

    /// Keeps a `Success` whose value satisfies the predicate.
    ///
    /// Returns `None` for a `Success` rejected by the predicate. A `Failure`
    /// is kept as it is.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Option<Self>
    where
        P: FnOnce(&T) -> bool,
    {
        let keep = match &self {
            Self::Success(value) => predicate(value),
            Self::Failure(_) => true,
        };
        keep.then_some(self)
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Calls the consumer with the value of a `Success`.
    ///
    /// An error returned by the consumer is discarded: observing a value
    /// never changes or hides the outcome it observes. The consumer is not
    /// called for a `Failure`.
    ///
    /// # Panics
    ///
    /// Only a returned `Err` is discarded. A panic raised by the consumer
    /// is not caught and unwinds through this call.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambda_companion::control::Try;
    ///
    /// let mut seen = Vec::new();
    /// let value: Try<i32, String> = Try::success(7);
    /// value.for_each(|n| {
    ///     seen.push(*n);
    ///     Err::<(), _>("ignored")
    /// });
    /// assert_eq!(seen, vec![7]);
    /// ```
    pub fn for_each<X, C>(&self, consumer: C)
    where
        C: FnOnce(&T) -> Result<(), X>,
        X: fmt::Debug,
    {
        if let Self::Success(value) = self
            && let Err(error) = consumer(value)
        {
            discard_observer_error(&error);
        }
    }

    /// Calls the consumer with the value of a `Success`, then returns `self`.
    ///
    /// Errors returned by the consumer are discarded, as in [`Try::for_each`].
    ///
    /// # Panics
    ///
    /// A panic raised by the consumer is not caught; it unwinds through
    /// this call and the `Try` is not returned.
    #[inline]
    pub fn peek<X, C>(self, consumer: C) -> Self
    where
        C: FnOnce(&T) -> Result<(), X>,
        X: fmt::Debug,
    {
        self.for_each(consumer);
        self
    }

    /// Calls the consumer with the error of a `Failure`, then returns `self`.
    #[inline]
    pub fn peek_failure<C>(self, consumer: C) -> Self
    where
        C: FnOnce(&E),
    {
        if let Self::Failure(error) = &self {
            consumer(error);
        }
        self
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Returns the value of a `Success`, or `default` for a `Failure`.
    ///
    /// `default` is evaluated eagerly; see [`Try::or_else_get`].
    #[inline]
    pub fn or_else(self, default: T) -> T {
        self.recover(|value| value, |_| default)
    }

    /// Returns the value of a `Success`, or the result of `supplier` for a
    /// `Failure`.
    ///
    /// The supplier is only called for a `Failure`.
    #[inline]
    pub fn or_else_get<S>(self, supplier: S) -> T
    where
        S: FnOnce() -> T,
    {
        self.recover(|value| value, |_| supplier())
    }

    /// Eliminates the `Try` by applying one of two functions.
    ///
    /// This is the point where both outcomes must be handled.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambda_companion::control::Try;
    ///
    /// let failed: Try<i32, String> = Try::failure("timeout".to_string());
    /// let status = failed.recover(|n| format!("ok {n}"), |error| format!("error {error}"));
    /// assert_eq!(status, "error timeout");
    /// ```
    #[inline]
    pub fn recover<U, F, G>(self, success_function: F, failure_function: G) -> U
    where
        F: FnOnce(T) -> U,
        G: FnOnce(E) -> U,
    {
        match self {
            Self::Success(value) => success_function(value),
            Self::Failure(error) => failure_function(error),
        }
    }

    /// Returns the value of a `Success`, discarding the error of a `Failure`.
    #[inline]
    pub fn to_option(self) -> Option<T> {
        self.recover(Some, |_| None)
    }

    /// Converts into an `Either` with the error on the left and the value on
    /// the right.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambda_companion::control::{Either, Try};
    ///
    /// let value: Try<i32, String> = Try::success(1);
    /// assert_eq!(value.to_either(), Either::Right(1));
    /// ```
    #[inline]
    pub fn to_either(self) -> Either<E, T> {
        self.recover(Either::Right, Either::Left)
    }

    /// Returns the value of a `Success`, or escapes with a translated error.
    ///
    /// # Errors
    ///
    /// Returns `Err(error_mapper(error))` for a `Failure(error)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambda_companion::control::Try;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct ConfigError(String);
    ///
    /// let failed: Try<u16, String> = Try::failure("bad port".to_string());
    /// assert_eq!(failed.or_else_throw(ConfigError), Err(ConfigError("bad port".to_string())));
    /// ```
    #[inline]
    pub fn or_else_throw<Y, F>(self, error_mapper: F) -> Result<T, Y>
    where
        F: FnOnce(E) -> Y,
    {
        self.recover(Ok, |error| Err(error_mapper(error)))
    }

    /// Returns the value of a `Success`, or escapes with the held error.
    ///
    /// # Errors
    ///
    /// Returns `Err(error)` for a `Failure(error)`, unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambda_companion::control::{OpaqueError, Try};
    ///
    /// fn port(text: &str) -> Result<u16, OpaqueError> {
    ///     let attempt: Try<u16> = Try::of_fn(str::parse::<u16>, text);
    ///     let value = attempt.or_else_rethrow()?;
    ///     Ok(value)
    /// }
    ///
    /// assert_eq!(port("443").ok(), Some(443));
    /// assert!(port("https").is_err());
    /// ```
    #[inline]
    pub fn or_else_rethrow(self) -> Result<T, E> {
        self.or_else_throw(|error| error)
    }
}

#[cfg(feature = "tracing")]
fn discard_observer_error<X: fmt::Debug>(error: &X) {
    tracing::debug!(?error, "discarded error returned by a Try observer");
}

#[cfg(not(feature = "tracing"))]
const fn discard_observer_error<X: fmt::Debug>(_error: &X) {}

// =============================================================================
// From Implementations
// =============================================================================

impl<T, E> From<Result<T, E>> for Try<T, E> {
    /// Converts a `Result` to a `Try`.
    ///
    /// `Ok(value)` becomes `Success(value)`, and `Err(error)` becomes
    /// `Failure(error)`.
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Try<T, E>> for Result<T, E> {
    #[inline]
    fn from(attempt: Try<T, E>) -> Self {
        attempt.or_else_rethrow()
    }
}

impl<T, E> From<Try<T, E>> for Either<E, T> {
    #[inline]
    fn from(attempt: Try<T, E>) -> Self {
        attempt.to_either()
    }
}

// =============================================================================
// Sequence
// =============================================================================

/// Combines a list of `Try`s into one `Try` of a list.
///
/// Returns `Success` with every value in input order when all elements are
/// successes. Otherwise returns the first `Failure` in list order; elements
/// after it are not inspected, and a lazy iterator is not advanced past it.
///
/// An empty input is refused: the result is a `Failure` holding
/// [`EmptySequenceError`].
///
/// # Examples
///
/// ```rust
/// use lambda_companion::control::{EmptySequenceError, OpaqueError, Try, sequence};
///
/// let all: Vec<Try<i32>> = vec![Try::success(1), Try::success(2)];
/// assert_eq!(sequence(all), Try::success(vec![1, 2]));
///
/// let second = OpaqueError::msg("second");
/// let mixed: Vec<Try<i32>> = vec![
///     Try::success(1),
///     Try::failure(second.clone()),
///     Try::failure(OpaqueError::msg("third")),
/// ];
/// assert_eq!(sequence(mixed), Try::failure(second));
///
/// let none: Vec<Try<i32>> = Vec::new();
/// let error = sequence(none).to_either().unwrap_left();
/// assert!(error.is::<EmptySequenceError>());
/// ```
pub fn sequence<T, E, I>(tries: I) -> Try<Vec<T>, E>
where
    I: IntoIterator<Item = Try<T, E>>,
    E: From<EmptySequenceError>,
{
    let mut attempts = tries.into_iter();
    let Some(first) = attempts.next() else {
        return Try::Failure(E::from(EmptySequenceError));
    };

    let mut values = Vec::new();
    for attempt in std::iter::once(first).chain(attempts) {
        match attempt {
            Try::Success(value) => values.push(value),
            Try::Failure(error) => return Try::Failure(error),
        }
    }
    Try::Success(values)
}

static_assertions::assert_impl_all!(OpaqueError: Send, Sync, Clone, Eq, Hash);
static_assertions::assert_impl_all!(Try<String>: Send, Sync, Clone, Eq);
