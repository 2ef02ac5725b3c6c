//! Unified error types for the domain layer
//!
//! Every fallible domain operation (parsing an enumerated value, coercing a
//! raw form input, resolving a field key) reports through [`DomainError`] so
//! the UI layer never has to deal with bare strings.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A field key that is not part of the character record
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// Raw input for a numeric field that does not parse as a whole number
    #[error("Invalid number for {field}: '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    /// Parse error (for enumerated values)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Create an unknown field error
    pub fn unknown_field(key: impl Into<String>) -> Self {
        Self::UnknownField(key.into())
    }

    /// Create an invalid number error for the given field key
    pub fn invalid_number(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidNumber {
            field,
            value: value.into(),
        }
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string
    /// doesn't match any known variant.
    ///
    /// # Example
    /// ```ignore
    /// impl FromStr for Race {
    ///     type Err = DomainError;
    ///     fn from_str(s: &str) -> Result<Self, Self::Err> {
    ///         match s {
    ///             "elf" => Ok(Self::Elf),
    ///             _ => Err(DomainError::parse(format!("Unknown race: {}", s))),
    ///         }
    ///     }
    /// }
    /// ```
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_field_error() {
        let err = DomainError::unknown_field("strength");
        assert!(matches!(err, DomainError::UnknownField(_)));
        assert_eq!(err.to_string(), "Unknown field: strength");
    }

    #[test]
    fn test_invalid_number_error() {
        let err = DomainError::invalid_number("age", "old");
        assert!(matches!(err, DomainError::InvalidNumber { field: "age", .. }));
        assert_eq!(err.to_string(), "Invalid number for age: 'old'");
    }

    #[test]
    fn test_parse_error() {
        let err = DomainError::parse("Unknown race: 'gnome'");
        assert!(matches!(err, DomainError::Parse(_)));
        assert_eq!(err.to_string(), "Parse error: Unknown race: 'gnome'");
    }
}
