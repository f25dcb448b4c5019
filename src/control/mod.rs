//! Control structures for composing computations.
//!
//! This module provides the two sum types of the crate and the list
//! combinators used to sequence them:
//!
//! - [`Either`]: A value that can be one of two types, with
//!   [`LeftProjection`] and [`RightProjection`] views
//! - [`Try`]: The outcome of a fallible computation
//! - [`head`], [`tail`], [`fold_right`], [`fold_left`]: List combinators
//! - [`sequence`]: Turns a list of `Try`s into a `Try` of a list
//!
//! # Examples
//!
//! ## Projections
//!
//! ```rust
//! use lambda_companion::control::Either;
//!
//! let value: Either<String, i32> = Either::Right(20);
//! let mapped = value.right().map(|n| n + 1);
//! assert_eq!(mapped, Either::Right(21));
//!
//! // Mapping the other side is a no-op
//! let untouched = mapped.clone().left().map(|s| s.len());
//! assert_eq!(untouched, Either::Right(21));
//! ```
//!
//! ## Sequencing Failable Computations
//!
//! ```rust
//! use lambda_companion::control::{Try, sequence};
//!
//! let parsed: Vec<Try<i32>> = ["1", "2", "3"]
//!     .into_iter()
//!     .map(|text| Try::of_fn(str::parse::<i32>, text))
//!     .collect();
//!
//! assert_eq!(sequence(parsed), Try::success(vec![1, 2, 3]));
//! ```

mod attempt;
mod either;
mod error;
mod functions;

pub use attempt::{OpaqueError, Try, sequence};
pub use either::{Either, LeftProjection, RightProjection};
pub use error::{EmptyListError, EmptySequenceError};
pub use functions::{fold_left, fold_right, head, tail};
