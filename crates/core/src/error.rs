//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic parse failures. Host/DOM concerns
/// belong in the site crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A field could not be parsed as the expected type.
    #[error("malformed {field}: {value:?}")]
    MalformedInput { field: &'static str, value: String },

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn malformed(field: &'static str, value: impl Into<String>) -> Self {
        Self::MalformedInput {
            field,
            value: value.into(),
        }
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// Whether this error is the fail-open class (bad numeric input).
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, Self::MalformedInput { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_input_message_names_field_and_value() {
        let err = DomainError::malformed("price", "12k");
        assert_eq!(err.to_string(), "malformed price: \"12k\"");
        assert!(err.is_malformed_input());
        assert!(!DomainError::invalid_id("x").is_malformed_input());
    }
}
