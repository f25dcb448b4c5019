//! List combinators - head/tail decomposition and folds.
//!
//! The folds follow the classic recursive definitions over a cons list:
//!
//! ```text
//!    :                                    f
//!   / \       fold_right f z ->          / \
//!  1   :                                1   f
//!     / \                                  / \
//!    2  []                                2   z
//!
//!    :                                    f
//!   / \       fold_left f z ->           / \
//!  1   :                                2   f
//!     / \                                  / \
//!    2  []                                1   z
//! ```
//!
//! Both are evaluated with an accumulator loop instead of recursion, so the
//! stack depth does not grow with the length of the list. The association
//! of the combiner is the same as in the recursive definitions.

use super::error::EmptyListError;

/// Returns the first element of the list.
///
/// # Errors
///
/// Returns [`EmptyListError`] if the list is empty.
///
/// # Examples
///
/// ```rust
/// use lambda_companion::control::head;
///
/// assert_eq!(head(&[1, 2, 3]), Ok(&1));
/// assert!(head::<i32>(&[]).is_err());
/// ```
#[inline]
pub const fn head<A>(list: &[A]) -> Result<&A, EmptyListError> {
    match list {
        [first, ..] => Ok(first),
        [] => Err(EmptyListError { operation: "head" }),
    }
}

/// Returns all but the first element of the list.
///
/// The tail borrows from the given list, so decomposing a list repeatedly
/// never copies it.
///
/// # Errors
///
/// Returns [`EmptyListError`] if the list is empty.
///
/// # Examples
///
/// ```rust
/// use lambda_companion::control::tail;
///
/// assert_eq!(tail(&[1, 2, 3]), Ok(&[2, 3][..]));
/// assert_eq!(tail(&[1]), Ok(&[][..]));
/// assert!(tail::<i32>(&[]).is_err());
/// ```
#[inline]
pub const fn tail<A>(list: &[A]) -> Result<&[A], EmptyListError> {
    match list {
        [_, rest @ ..] => Ok(rest),
        [] => Err(EmptyListError { operation: "tail" }),
    }
}

/// Folds the list from the right.
///
/// Computes `combine(a1, combine(a2, ... combine(an, seed)))`. An empty
/// list returns `seed`.
///
/// # Examples
///
/// ```rust
/// use lambda_companion::control::fold_right;
///
/// assert_eq!(fold_right(|element, total| element + total, 0, vec![1, 2, 3]), 6);
///
/// let shape = fold_right(
///     |element, inner| format!("({element} {inner})"),
///     "z".to_string(),
///     [1, 2],
/// );
/// assert_eq!(shape, "(1 (2 z))");
/// ```
pub fn fold_right<A, B, I, F>(mut combine: F, seed: B, list: I) -> B
where
    I: IntoIterator<Item = A>,
    I::IntoIter: DoubleEndedIterator,
    F: FnMut(A, B) -> B,
{
    list.into_iter()
        .rev()
        .fold(seed, |accumulator, element| combine(element, accumulator))
}

/// Folds the list from the left.
///
/// Each element is combined into the accumulator built from the elements
/// before it: `combine(an, ... combine(a2, combine(a1, seed)))`. The
/// accumulator is the combiner's second argument, as in [`fold_right`]. An
/// empty list returns `seed`.
///
/// # Examples
///
/// ```rust
/// use lambda_companion::control::fold_left;
///
/// let shape = fold_left(|element, inner| format!("({element} {inner})"), "z".to_string(), [1, 2]);
/// assert_eq!(shape, "(2 (1 z))");
/// ```
pub fn fold_left<A, B, I, F>(mut combine: F, seed: B, list: I) -> B
where
    I: IntoIterator<Item = A>,
    F: FnMut(A, B) -> B,
{
    list.into_iter()
        .fold(seed, |accumulator, element| combine(element, accumulator))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn shape(element: i32, inner: String) -> String {
        format!("({element} {inner})")
    }

    #[rstest]
    fn head_of_non_empty_list() {
        assert_eq!(head(&["a", "b"]), Ok(&"a"));
    }

    #[rstest]
    fn tail_is_a_view_into_the_original() {
        let list = [1, 2, 3];
        let rest = tail(&list).unwrap();
        assert!(std::ptr::eq(rest.as_ptr(), list[1..].as_ptr()));
    }

    #[rstest]
    #[case::head(head::<i32>(&[]).map(|_| ()), "head")]
    #[case::tail(tail::<i32>(&[]).map(|_| ()), "tail")]
    fn decomposing_empty_list_fails(
        #[case] result: Result<(), EmptyListError>,
        #[case] operation: &str,
    ) {
        assert_eq!(result.unwrap_err().operation, operation);
    }

    #[rstest]
    #[case(vec![], 0)]
    #[case(vec![5], 5)]
    #[case(vec![1, 2, 3], 6)]
    fn fold_right_sums(#[case] list: Vec<i32>, #[case] expected: i32) {
        assert_eq!(fold_right(|a, b| a + b, 0, list), expected);
    }

    #[rstest]
    fn fold_right_associates_to_the_right() {
        let result = fold_right(shape, "z".to_string(), vec![1, 2, 3]);
        assert_eq!(result, "(1 (2 (3 z)))");
    }

    #[rstest]
    fn fold_left_accumulates_in_list_order() {
        let result = fold_left(shape, "z".to_string(), vec![1, 2, 3]);
        assert_eq!(result, "(3 (2 (1 z)))");
    }

    #[rstest]
    fn folds_of_empty_list_return_seed() {
        assert_eq!(fold_left(shape, "z".to_string(), Vec::new()), "z");
        assert_eq!(fold_right(shape, "z".to_string(), Vec::new()), "z");
    }

    #[rstest]
    fn folds_handle_long_lists() {
        let list: Vec<u64> = (1..=1_000_000).collect();
        let expected = 1_000_000 * 1_000_001 / 2;
        assert_eq!(fold_right(|a, b| a + b, 0, list.iter().copied()), expected);
        assert_eq!(fold_left(|a, b| a + b, 0, list), expected);
    }
}
