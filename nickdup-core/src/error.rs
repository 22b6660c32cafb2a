//! Layered error types
//!
//! [`ValidationError`] describes a single rejected input; [`Error`] is what the
//! public detector API returns.

use thiserror::Error;

/// A precondition violated by the input batch
///
/// Validation is fail-fast, so a batch yields at most one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Number of records outside the accepted range
    #[error("record count {count} is outside {min}..={max}")]
    InvalidCount {
        /// Number of records received
        count: usize,
        /// Smallest accepted count
        min: usize,
        /// Largest accepted count
        max: usize,
    },

    /// Email domain is not the required one
    #[error("record {index}: email '{email}' does not end with '@{domain}'")]
    InvalidEmailDomain {
        /// Position of the record in the batch
        index: usize,
        /// The rejected email
        email: String,
        /// The domain every email must use
        domain: String,
    },

    /// Email is too short or too long
    #[error("record {index}: email '{email}' has length {length}, expected {min}..={max}")]
    InvalidEmailLength {
        /// Position of the record in the batch
        index: usize,
        /// The rejected email
        email: String,
        /// Length in characters
        length: usize,
        /// Shortest accepted length
        min: usize,
        /// Longest accepted length
        max: usize,
    },

    /// Nickname is empty or too long
    #[error("record {index}: nickname '{nickname}' has length {length}, expected {min}..={max}")]
    InvalidNicknameLength {
        /// Position of the record in the batch
        index: usize,
        /// The rejected nickname
        nickname: String,
        /// Length in characters
        length: usize,
        /// Shortest accepted length
        min: usize,
        /// Longest accepted length
        max: usize,
    },

    /// Nickname contains a character outside the Hangul syllable block
    #[error("record {index}: nickname '{nickname}' contains non-Hangul character {character:?}")]
    InvalidNicknameCharset {
        /// Position of the record in the batch
        index: usize,
        /// The rejected nickname
        nickname: String,
        /// First offending character
        character: char,
    },
}

impl ValidationError {
    /// Index of the offending record, if the error concerns a single record
    pub fn record_index(&self) -> Option<usize> {
        match self {
            ValidationError::InvalidCount { .. } => None,
            ValidationError::InvalidEmailDomain { index, .. }
            | ValidationError::InvalidEmailLength { index, .. }
            | ValidationError::InvalidNicknameLength { index, .. }
            | ValidationError::InvalidNicknameCharset { index, .. } => Some(*index),
        }
    }
}

/// Error type for detector operations
#[derive(Error, Debug)]
pub enum Error {
    /// Input rejected before detection ran
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// Inconsistent detector configuration
    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Result type for detector operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_count_display() {
        let error = ValidationError::InvalidCount {
            count: 0,
            min: 1,
            max: 10_000,
        };
        assert_eq!(error.to_string(), "record count 0 is outside 1..=10000");
        assert_eq!(error.record_index(), None);
    }

    #[test]
    fn test_charset_error_display_with_hangul_nickname() {
        let error = ValidationError::InvalidNicknameCharset {
            index: 3,
            nickname: "제이a".to_string(),
            character: 'a',
        };
        assert_eq!(
            error.to_string(),
            "record 3: nickname '제이a' contains non-Hangul character 'a'"
        );
        assert_eq!(error.record_index(), Some(3));
    }

    #[test]
    fn test_validation_converts_into_error() {
        let error: Error = ValidationError::InvalidEmailDomain {
            index: 0,
            email: "jm@mail.com".to_string(),
            domain: "email.com".to_string(),
        }
        .into();

        assert!(matches!(error, Error::Validation(_)));
        assert!(error.to_string().starts_with("invalid input: record 0"));
    }
}
