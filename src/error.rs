//! Error types for the engine crate

use thiserror::Error;

/// Main error type for the engine crate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("invalid board: {message}")]
    InvalidBoard { message: String },

    #[error("invalid cell symbol '{symbol}' (expected '.', 'B' or 'W')")]
    InvalidSymbol { symbol: char },
}

impl Error {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        Error::InvalidConfig {
            message: message.into(),
        }
    }

    pub(crate) fn board(message: impl Into<String>) -> Self {
        Error::InvalidBoard {
            message: message.into(),
        }
    }
}

/// Result alias for engine operations
pub type Result<T> = std::result::Result<T, Error>;
