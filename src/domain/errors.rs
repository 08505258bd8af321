//! Domain validation errors.

use thiserror::Error;

/// Errors that can occur during domain value object validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is empty or only whitespace.
    #[error("Name cannot be empty")]
    EmptyName,

    /// The provided phone number is not exactly ten digits.
    #[error("Phone number must be 10 digits, got: {0:?}")]
    InvalidPhone(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        assert_eq!(ValidationError::EmptyName.to_string(), "Name cannot be empty");

        let err = ValidationError::InvalidPhone("12-34".to_string());
        assert_eq!(err.to_string(), "Phone number must be 10 digits, got: \"12-34\"");
    }
}
