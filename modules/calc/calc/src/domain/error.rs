use calc_sdk::CalcError;
use thiserror::Error;

/// Message used when the store fails without reporting anything useful.
pub const GENERIC_PERSISTENCE_MESSAGE: &str = "database error";

/// Failure kinds surfaced by the calc domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Ambiguity,
    DivisionByZero,
    Persistence,
}

impl ErrorKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::NotFound => "not_found",
            Self::Ambiguity => "ambiguity",
            Self::DivisionByZero => "division_by_zero",
            Self::Persistence => "persistence",
        }
    }
}

/// Domain-specific errors using thiserror
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{message}")]
    Validation { message: String },

    #[error("unable to locate constant '{name}'")]
    NotFound { name: String },

    #[error("constant '{name}' is ambiguous: {count} rows share this name")]
    Ambiguous { name: String, count: usize },

    #[error("division by zero")]
    DivisionByZero,

    #[error("{message}")]
    Persistence { message: String },
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    pub fn ambiguous(name: impl Into<String>, count: usize) -> Self {
        Self::Ambiguous {
            name: name.into(),
            count,
        }
    }

    /// Store failure. Keeps the store-reported message when there is one.
    pub fn persistence(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            GENERIC_PERSISTENCE_MESSAGE.to_owned()
        } else {
            message
        };
        Self::Persistence { message }
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation { .. } => ErrorKind::Validation,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Ambiguous { .. } => ErrorKind::Ambiguity,
            Self::DivisionByZero => ErrorKind::DivisionByZero,
            Self::Persistence { .. } => ErrorKind::Persistence,
        }
    }
}

/// Convert domain errors to SDK errors for public API consumption.
impl From<DomainError> for CalcError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation { message } => CalcError::validation(message),
            DomainError::NotFound { name } => CalcError::not_found(name),
            DomainError::Ambiguous { name, count } => CalcError::Ambiguous { name, count },
            DomainError::DivisionByZero => CalcError::DivisionByZero,
            DomainError::Persistence { message } => CalcError::persistence(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persistence_keeps_store_message() {
        let e = DomainError::persistence("Table 'calc.Constants' doesn't exist");
        assert_eq!(e.to_string(), "Table 'calc.Constants' doesn't exist");
        assert_eq!(e.kind(), ErrorKind::Persistence);
    }

    #[test]
    fn persistence_falls_back_to_generic_message() {
        let e = DomainError::persistence("  ");
        assert_eq!(e.to_string(), GENERIC_PERSISTENCE_MESSAGE);
    }

    #[test]
    fn sdk_conversion_preserves_kind_and_message() {
        let e: CalcError = DomainError::not_found("pi").into();
        assert_eq!(e, CalcError::not_found("pi"));
        assert_eq!(e.to_string(), "unable to locate constant 'pi'");

        let e: CalcError = DomainError::ambiguous("e", 2).into();
        assert!(matches!(e, CalcError::Ambiguous { count: 2, .. }));

        let e: CalcError = DomainError::validation("name is required").into();
        assert_eq!(e, CalcError::validation("name is required"));

        let e: CalcError = DomainError::persistence("").into();
        assert_eq!(e, CalcError::persistence(GENERIC_PERSISTENCE_MESSAGE));
    }
}
