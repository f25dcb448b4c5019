//! Type class traits for the crate's container types.
//!
//! - [`TypeConstructor`]: Trait for emulating higher-kinded types
//! - [`Functor`]: Mapping over container values
//! - [`Monad`]: Sequencing computations with dependency
//!
//! Instances are provided for `Option`, and, with the `control` feature,
//! for `Either` (right-biased) and `Try` (success-biased). The law tests in
//! `tests/` check every instance against the same laws.

mod functor;
mod higher;
mod monad;

pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
