//! Helpers for working with `Option` as a 0/1-element sequence.
//!
//! # Examples
//!
//! ```rust
//! use lambda_companion::collection::optionals;
//!
//! let names = vec![Some("ada"), None, Some("grace")];
//! let present: Vec<&str> = names.into_iter().flat_map(optionals::stream).collect();
//! assert_eq!(present, vec!["ada", "grace"]);
//! ```

use std::any::Any;

/// Turns an `Option` into an iterator of zero or one element.
#[inline]
pub fn stream<T>(option: Option<T>) -> std::option::IntoIter<T> {
    option.into_iter()
}

/// Returns the first present value among the suppliers.
///
/// Suppliers are called in order and no supplier after the first present
/// value is called.
///
/// # Examples
///
/// ```rust
/// use lambda_companion::collection::optionals::first_of;
///
/// let suppliers: Vec<Box<dyn FnOnce() -> Option<u32>>> = vec![
///     Box::new(|| None),
///     Box::new(|| Some(7)),
///     Box::new(|| Some(8)),
/// ];
/// assert_eq!(first_of(suppliers), Some(7));
/// ```
pub fn first_of<T, S, I>(suppliers: I) -> Option<T>
where
    I: IntoIterator<Item = S>,
    S: FnOnce() -> Option<T>,
{
    suppliers.into_iter().find_map(|supplier| supplier())
}

/// Keeps a string that is present and not blank.
///
/// A string is blank when it is empty or contains only whitespace. The
/// string is returned as given, not trimmed.
///
/// # Examples
///
/// ```rust
/// use lambda_companion::collection::optionals::of_blankable;
///
/// assert_eq!(of_blankable(Some(" name ")), Some(" name "));
/// assert_eq!(of_blankable(Some("  \t")), None);
/// assert_eq!(of_blankable(None), None);
/// ```
#[inline]
pub fn of_blankable(blankable: Option<&str>) -> Option<&str> {
    blankable.filter(|text| !text.trim().is_empty())
}

/// Keeps a value only if it is of type `T`, returning it as `T`.
///
/// # Examples
///
/// ```rust
/// use std::any::Any;
/// use lambda_companion::collection::optionals::filter_type;
///
/// let number: &dyn Any = &42_i32;
/// assert_eq!(filter_type::<i32>(Some(number)), Some(&42));
/// assert_eq!(filter_type::<String>(Some(number)), None);
/// ```
#[inline]
pub fn filter_type<T: Any>(option: Option<&dyn Any>) -> Option<&T> {
    option.and_then(|value| value.downcast_ref::<T>())
}
