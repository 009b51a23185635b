//! Error types shared by the checker and the generator.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StrengthError {
    /// The password to check was empty.
    #[error("Password is required")]
    InvalidInput,
    /// The requested per-category minimums do not fit in the password length.
    #[error("Total character counts cannot exceed password length")]
    ConfigError { requested: usize, length: usize },
    /// The requested length is beyond what the generator will build.
    #[error("Password length {length} exceeds the maximum of {max}")]
    LengthTooLong { length: usize, max: usize },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, StrengthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message() {
        assert_eq!(StrengthError::InvalidInput.to_string(), "Password is required");
    }

    #[test]
    fn test_config_error_message() {
        let err = StrengthError::ConfigError {
            requested: 8,
            length: 5,
        };
        assert_eq!(
            err.to_string(),
            "Total character counts cannot exceed password length"
        );
    }

    #[test]
    fn test_length_too_long_message() {
        let err = StrengthError::LengthTooLong {
            length: 5000,
            max: 4096,
        };
        assert_eq!(err.to_string(), "Password length 5000 exceeds the maximum of 4096");
    }
}
