//! Error types.
//!
//! Every set operation is total. The only fallible entry point is
//! [`Set::try_from_unique`](crate::Set::try_from_unique), which rejects input
//! containing the same element twice.

use thiserror::Error;

/// An element occurred more than once in input that had to be duplicate-free.
///
/// `element` is the second occurrence, `position` its zero-based index in
/// the input sequence.
///
/// # Examples
///
/// ```rust
/// use uniset::{DuplicateElementError, Set};
///
/// let error = Set::try_from_unique(["read", "write", "read"]).unwrap_err();
/// assert_eq!(error, DuplicateElementError { element: "read", position: 2 });
/// assert_eq!(error.to_string(), "duplicate element \"read\" at position 2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("duplicate element {element:?} at position {position}")]
pub struct DuplicateElementError<T: std::fmt::Debug> {
    /// The repeated element.
    pub element: T,
    /// Index of the repeated element in the input.
    pub position: usize,
}

impl<T: std::fmt::Debug> DuplicateElementError<T> {
    /// Consumes the error, returning the repeated element.
    pub fn into_element(self) -> T {
        self.element
    }
}
