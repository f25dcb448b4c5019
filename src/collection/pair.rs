//! Pair type - two values held together.
//!
//! Where an [`Either`] holds one of two values, a [`Pair`] holds both. The
//! two meet in [`Pair::partition`], which splits a list of `Either`s into a
//! pair of lists.
//!
//! # Examples
//!
//! ```rust
//! use lambda_companion::collection::Pair;
//! use lambda_companion::control::Either;
//!
//! let results: Vec<Either<String, i32>> = vec![
//!     Either::Right(1),
//!     Either::Left("bad".to_string()),
//!     Either::Right(2),
//! ];
//! let split = Pair::partition(results);
//! assert_eq!(split.left(), &vec!["bad".to_string()]);
//! assert_eq!(split.right(), &vec![1, 2]);
//! ```

use std::collections::HashMap;
use std::hash::Hash;

use crate::control::Either;

/// Two values of two possibly different types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pair<L, R> {
    left: L,
    right: R,
}

impl<L, R> Pair<L, R> {
    /// Creates a pair.
    #[inline]
    pub const fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left value.
    #[inline]
    pub const fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right value.
    #[inline]
    pub const fn right(&self) -> &R {
        &self.right
    }

    /// Converts into a `(key, value)` map entry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use lambda_companion::collection::Pair;
    ///
    /// let mut ages = HashMap::new();
    /// ages.extend([Pair::new("ada", 36).into_entry()]);
    /// assert_eq!(ages.get("ada"), Some(&36));
    /// ```
    #[inline]
    pub fn into_entry(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Pair<Vec<L>, Vec<R>> {
    /// Splits a list of `Either`s into the left values and the right values.
    ///
    /// Both lists keep the input order.
    pub fn partition<I>(eithers: I) -> Self
    where
        I: IntoIterator<Item = Either<L, R>>,
    {
        let mut lefts = Vec::new();
        let mut rights = Vec::new();
        for either in eithers {
            either.fold(|value| lefts.push(value), |value| rights.push(value));
        }
        Self::new(lefts, rights)
    }
}

impl<L, R> From<(L, R)> for Pair<L, R> {
    #[inline]
    fn from((left, right): (L, R)) -> Self {
        Self::new(left, right)
    }
}

impl<L, R> From<Pair<L, R>> for (L, R) {
    #[inline]
    fn from(pair: Pair<L, R>) -> Self {
        pair.into_entry()
    }
}

/// Collects pairs into a map keyed by their left values.
///
/// If several pairs share a left value, the last one wins.
///
/// # Examples
///
/// ```rust
/// use lambda_companion::collection::{Pair, pair};
///
/// let map = pair::to_map(vec![Pair::new("a", 1), Pair::new("b", 2), Pair::new("a", 3)]);
/// assert_eq!(map.len(), 2);
/// assert_eq!(map["a"], 3);
/// ```
pub fn to_map<K, V, I>(pairs: I) -> HashMap<K, V>
where
    I: IntoIterator<Item = Pair<K, V>>,
    K: Eq + Hash,
{
    pairs.into_iter().map(Pair::into_entry).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn partition_of_empty_list() {
        let split: Pair<Vec<i32>, Vec<String>> = Pair::partition(Vec::new());
        assert!(split.left().is_empty());
        assert!(split.right().is_empty());
    }

    #[rstest]
    fn partition_keeps_order_on_both_sides() {
        let eithers: Vec<Either<char, i32>> = vec![
            Either::Left('a'),
            Either::Right(1),
            Either::Left('b'),
            Either::Right(2),
        ];
        let split = Pair::partition(eithers);
        assert_eq!(split, Pair::new(vec!['a', 'b'], vec![1, 2]));
    }

    #[rstest]
    fn tuple_conversion_roundtrip() {
        let pair: Pair<i32, &str> = (1, "one").into();
        let tuple: (i32, &str) = pair.into();
        assert_eq!(tuple, (1, "one"));
    }
}
