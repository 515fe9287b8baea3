//! Errors raised by password generation.

use thiserror::Error;

/// Error type for the library.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Generation was asked for with arguments it cannot satisfy.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

impl Error {
    pub(crate) const ZERO_LENGTH: Self = Error::InvalidArgument("length must be greater than 0");
    pub(crate) const EMPTY_POOL: Self =
        Error::InvalidArgument("at least one character set must be selected");
}

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;
