//! # lambda-companion
//!
//! Algebraic data types for composing computations that may take one of two
//! shapes or may fail, without null checks or panics in the control flow.
//!
//! ## Overview
//!
//! - **Either**: a value that is one of two types, with [`Left`] and [`Right`]
//!   projections scoping operations to one side
//! - **Try**: the outcome of a fallible computation, `Success` or `Failure`,
//!   with chaining and recovery operations
//! - **List combinators**: `head`, `tail`, `fold_right`, `fold_left` and
//!   `sequence`, which turns many `Try`s into one
//! - **Collection helpers**: `Option` interop, `Pair`, and extra terminal
//!   operations for iterators
//! - **Type Classes**: `Functor` and `Monad` instances for the types above
//!
//! [`Left`]: control::LeftProjection
//! [`Right`]: control::RightProjection
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad)
//! - `control`: Either, Try and the list combinators
//! - `collection`: Optionals, Pair and the iterator extension
//! - `serde`: Serialization support
//! - `tracing`: Debug events for discarded observer errors
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lambda_companion::prelude::*;
//!
//! let parsed: Try<i32> = Try::of_fn(|text: &str| text.parse::<i32>(), "21");
//! let doubled = parsed.map(|value| value * 2);
//! assert_eq!(doubled.recover(|value| value, |_| 0), 42);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use lambda_companion::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "collection")]
    pub use crate::collection::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "collection")]
pub mod collection;
