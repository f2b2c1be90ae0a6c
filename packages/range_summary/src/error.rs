use std::num::ParseIntError;

use thiserror::Error;

/// Errors that can occur when parsing number lists.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The caller provided a list item that is not a base-10 integer.
    #[error("invalid number format: '{token}' is not a base-10 integer")]
    InvalidNumberFormat {
        /// The offending list item, with surrounding whitespace removed.
        token: String,

        /// Why the item could not be parsed as an integer.
        #[source]
        inner: ParseIntError,
    },
}

impl Error {
    pub(crate) fn invalid_number(token: impl Into<String>, inner: ParseIntError) -> Self {
        Self::InvalidNumberFormat {
            token: token.into(),
            inner,
        }
    }

    /// The list item that caused the error.
    #[must_use]
    pub fn token(&self) -> &str {
        match self {
            Self::InvalidNumberFormat { token, .. } => token,
        }
    }
}

/// A specialized `Result` type for number list operations, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;
