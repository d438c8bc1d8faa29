//! Error types shared by every extkit operation.
//!
//! All fallible operations return [`Result`]. Each [`Error`] variant belongs to
//! exactly one [`ErrorKind`]:
//!
//! - [`ErrorKind::InvalidArgument`]: an argument is missing or malformed
//! - [`ErrorKind::InvalidOperation`]: the arguments are well-formed but the
//!   operation cannot proceed on them
//! - [`ErrorKind::NoMatch`]: a predicate lookup found no qualifying element
//!
//! Errors are raised before any mutation takes place.

use thiserror::Error;

/// A specialized `Result` type for extkit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The classification of an [`Error`].
///
/// # Examples
///
/// ```rust
/// use extkit::{Error, ErrorKind};
///
/// assert_eq!(Error::EmptyCollection.kind(), ErrorKind::InvalidOperation);
/// assert_eq!(Error::NoMatch.kind(), ErrorKind::NoMatch);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required input is absent or structurally invalid.
    InvalidArgument,
    /// The operation cannot logically proceed with otherwise valid inputs.
    InvalidOperation,
    /// A lookup found zero qualifying elements.
    NoMatch,
}

/// Errors raised by extkit operations.
///
/// # Examples
///
/// ```rust
/// use extkit::Error;
///
/// let error = Error::InsufficientLength { length: 2, requested: 5 };
/// assert_eq!(
///     error.to_string(),
///     "cannot remove 5 characters from a text of 2 characters"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// A required argument, or an element of an argument list, is absent.
    #[error("{parameter} cannot contain absent values")]
    MissingArgument {
        /// Name of the offending parameter.
        parameter: &'static str,
    },

    /// A count that must be positive was zero.
    #[error("count must be a positive integer, got {count}")]
    InvalidCount {
        /// The rejected count.
        count: usize,
    },

    /// A removal pattern was the empty string.
    #[error("pattern at position {index} is empty")]
    EmptyPattern {
        /// Position of the empty pattern in the pattern list.
        index: usize,
    },

    /// A string that should name an enum variant is not an identifier.
    #[error("`{value}` is not a valid variant identifier")]
    InvalidIdentifier {
        /// The rejected string.
        value: String,
    },

    /// A string is a valid identifier but names no variant.
    #[error("`{value}` is not a variant of {type_name}")]
    UnknownVariant {
        /// The rejected string.
        value: String,
        /// Name of the target type.
        type_name: &'static str,
    },

    /// A format string is not understood by the value being formatted.
    #[error("invalid format `{format}`: {reason}")]
    InvalidFormat {
        /// The rejected format string.
        format: String,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// The collection has no elements.
    #[error("collection contains no elements")]
    EmptyCollection,

    /// The text is shorter than the number of characters to remove.
    #[error("cannot remove {requested} characters from a text of {length} characters")]
    InsufficientLength {
        /// Number of characters in the text.
        length: usize,
        /// Number of characters requested for removal.
        requested: usize,
    },

    /// The type has no variants to enumerate.
    #[error("{type_name} is not an enum type")]
    NotAnEnum {
        /// Name of the offending type.
        type_name: &'static str,
    },

    /// No element satisfied the predicate.
    #[error("collection contains no matching element")]
    NoMatch,
}

impl Error {
    /// Returns the kind this error belongs to.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingArgument { .. }
            | Self::InvalidCount { .. }
            | Self::EmptyPattern { .. }
            | Self::InvalidIdentifier { .. }
            | Self::UnknownVariant { .. }
            | Self::InvalidFormat { .. } => ErrorKind::InvalidArgument,
            Self::EmptyCollection | Self::InsufficientLength { .. } | Self::NotAnEnum { .. } => {
                ErrorKind::InvalidOperation
            }
            Self::NoMatch => ErrorKind::NoMatch,
        }
    }

    /// Returns `true` if this is an invalid-argument error.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidArgument)
    }

    /// Returns `true` if this is an invalid-operation error.
    #[must_use]
    pub const fn is_invalid_operation(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidOperation)
    }
}
