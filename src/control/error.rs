//! Error types for the list combinators.
//!
//! These describe programming errors: decomposing an empty list, or asking
//! [`sequence`](super::sequence) to combine nothing.

/// Represents an attempt to take the head or tail of an empty list.
///
/// # Examples
///
/// ```rust
/// use lambda_companion::control::{EmptyListError, head};
///
/// let empty: [i32; 0] = [];
/// let error = head(&empty).unwrap_err();
/// assert_eq!(error, EmptyListError { operation: "head" });
/// assert_eq!(format!("{error}"), "head: index 0 out of bounds for an empty list");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmptyListError {
    /// The name of the operation that was given the empty list.
    pub operation: &'static str,
}

impl std::fmt::Display for EmptyListError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}: index 0 out of bounds for an empty list",
            self.operation
        )
    }
}

impl std::error::Error for EmptyListError {}

/// Represents a call to [`sequence`](super::sequence) with no computations.
///
/// Sequencing an empty list is refused rather than producing an empty
/// success, so this error is captured as the resulting `Failure`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EmptySequenceError;

impl std::fmt::Display for EmptySequenceError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("cannot sequence an empty list")
    }
}

impl std::error::Error for EmptySequenceError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("head")]
    #[case("tail")]
    fn empty_list_error_names_the_operation(#[case] operation: &'static str) {
        let error = EmptyListError { operation };
        assert!(error.to_string().starts_with(operation));
    }

    #[rstest]
    fn empty_sequence_error_message() {
        assert_eq!(
            EmptySequenceError.to_string(),
            "cannot sequence an empty list"
        );
    }
}
