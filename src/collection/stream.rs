//! Extra terminal operations for iterators.
//!
//! [`ExtendedIterator`] is implemented for every iterator, so importing the
//! trait is enough to use it.
//!
//! # Examples
//!
//! ```rust
//! use lambda_companion::collection::ExtendedIterator;
//!
//! let words = ["a", "b", "c"].into_iter();
//! let nested = words.fold_right(String::from("."), |word, rest| format!("{word}{rest}"));
//! assert_eq!(nested, "abc.");
//! ```

use std::collections::HashSet;
use std::hash::Hash;

use crate::control::fold_right;

/// Terminal operations missing from [`Iterator`].
pub trait ExtendedIterator: Iterator + Sized {
    /// Folds the elements from the right.
    ///
    /// The elements are buffered first, so this works for iterators that
    /// cannot be reversed.
    fn fold_right<B, F>(self, seed: B, combine: F) -> B
    where
        F: FnMut(Self::Item, B) -> B,
    {
        fold_right(combine, seed, self.to_list())
    }

    /// Returns the last element, consuming the iterator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambda_companion::collection::ExtendedIterator;
    ///
    /// assert_eq!((1..=4).filter(|n| n % 2 == 1).find_last(), Some(3));
    /// assert_eq!(std::iter::empty::<i32>().find_last(), None);
    /// ```
    fn find_last(self) -> Option<Self::Item> {
        self.last()
    }

    /// Collects the elements into a `Vec`, keeping their order.
    fn to_list(self) -> Vec<Self::Item> {
        self.collect()
    }

    /// Collects the elements into a `HashSet`, dropping duplicates.
    fn to_set(self) -> HashSet<Self::Item>
    where
        Self::Item: Eq + Hash,
    {
        self.collect()
    }
}

impl<I: Iterator> ExtendedIterator for I {}
