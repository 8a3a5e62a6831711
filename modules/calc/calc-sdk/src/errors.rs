//! Error types for the calc SDK.

use thiserror::Error;

/// Errors returned by `CalcClientV1`.
///
/// One variant per failure kind; the message carries the human-readable detail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// Missing or malformed input.
    #[error("{message}")]
    Validation { message: String },

    /// A constant name could not be resolved.
    #[error("unable to locate constant '{name}'")]
    NotFound { name: String },

    /// The store returned more than one row for a unique name.
    #[error("constant '{name}' is ambiguous: {count} rows share this name")]
    Ambiguous { name: String, count: usize },

    /// Divisor resolved to zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The store could not be reached or rejected the query.
    #[error("{message}")]
    Persistence { message: String },
}

impl CalcError {
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    #[must_use]
    pub fn persistence(message: impl Into<String>) -> Self {
        Self::Persistence {
            message: message.into(),
        }
    }
}
