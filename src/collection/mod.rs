//! Collection helpers around the control types.
//!
//! - [`optionals`]: `Option` as a 0/1-element sequence, `first_of`,
//!   blank-string and type filtering
//! - [`Pair`]: Two values held together, and [`pair::to_map`]
//! - [`ExtendedIterator`]: `fold_right`, `find_last`, `to_list` and
//!   `to_set` for every iterator

pub mod optionals;
pub mod pair;
mod stream;

pub use pair::Pair;
pub use stream::ExtendedIterator;
