//! Configuration types for validation and detection

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// First syllable of the Hangul Syllables block (가)
pub const HANGUL_SYLLABLE_FIRST: char = '\u{AC00}';
/// Last syllable of the Hangul Syllables block (힣)
pub const HANGUL_SYLLABLE_LAST: char = '\u{D7A3}';

/// Bounds every input batch must satisfy before detection runs
///
/// Lengths are counted in characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationLimits {
    /// Smallest accepted number of records
    pub min_records: usize,
    /// Largest accepted number of records
    pub max_records: usize,
    /// Domain required after the last `@` of every email
    pub email_domain: String,
    /// Shortest accepted email
    pub min_email_len: usize,
    /// Longest accepted email
    pub max_email_len: usize,
    /// Shortest accepted nickname
    pub min_nickname_len: usize,
    /// Longest accepted nickname
    pub max_nickname_len: usize,
    /// Lowest character allowed in a nickname
    pub nickname_first_char: char,
    /// Highest character allowed in a nickname
    pub nickname_last_char: char,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            min_records: 1,
            max_records: 10_000,
            email_domain: "email.com".to_string(),
            min_email_len: 11,
            max_email_len: 20,
            min_nickname_len: 1,
            max_nickname_len: 20,
            nickname_first_char: HANGUL_SYLLABLE_FIRST,
            nickname_last_char: HANGUL_SYLLABLE_LAST,
        }
    }
}

impl ValidationLimits {
    /// Reject limits that no input could ever satisfy
    pub fn check(&self) -> Result<()> {
        if self.min_records > self.max_records {
            return Err(Error::Configuration(format!(
                "min_records ({}) exceeds max_records ({})",
                self.min_records, self.max_records
            )));
        }
        if self.min_email_len > self.max_email_len {
            return Err(Error::Configuration(format!(
                "min_email_len ({}) exceeds max_email_len ({})",
                self.min_email_len, self.max_email_len
            )));
        }
        if self.min_nickname_len > self.max_nickname_len {
            return Err(Error::Configuration(format!(
                "min_nickname_len ({}) exceeds max_nickname_len ({})",
                self.min_nickname_len, self.max_nickname_len
            )));
        }
        if self.nickname_first_char > self.nickname_last_char {
            return Err(Error::Configuration(format!(
                "nickname character range {:?}..={:?} is empty",
                self.nickname_first_char, self.nickname_last_char
            )));
        }
        if self.email_domain.is_empty() {
            return Err(Error::Configuration("email_domain is empty".to_string()));
        }
        Ok(())
    }

    /// Whether `c` may appear in a nickname
    pub fn allows_char(&self, c: char) -> bool {
        (self.nickname_first_char..=self.nickname_last_char).contains(&c)
    }
}

/// Detector configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Run validation before detection. Only trusted callers turn this off.
    pub validate: bool,
    /// Input bounds applied when `validate` is set
    pub limits: ValidationLimits,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            validate: true,
            limits: ValidationLimits::default(),
        }
    }
}

impl DetectorConfig {
    /// Configuration that skips validation entirely
    pub fn trusted() -> Self {
        Self {
            validate: false,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let limits = ValidationLimits::default();
        assert_eq!(limits.max_records, 10_000);
        assert_eq!(limits.email_domain, "email.com");
        assert_eq!(limits.nickname_first_char, '가');
        assert_eq!(limits.nickname_last_char, '힣');
        assert!(limits.check().is_ok());
    }

    #[test]
    fn test_allows_char() {
        let limits = ValidationLimits::default();
        assert!(limits.allows_char('가'));
        assert!(limits.allows_char('힣'));
        assert!(!limits.allows_char('ㄱ'));
        assert!(!limits.allows_char('a'));
        assert!(!limits.allows_char('ア'));
    }

    #[test]
    fn test_check_rejects_inverted_bounds() {
        let limits = ValidationLimits {
            min_email_len: 30,
            ..ValidationLimits::default()
        };
        let err = limits.check().unwrap_err();
        assert!(err.to_string().contains("min_email_len"));

        let limits = ValidationLimits {
            nickname_first_char: '힣',
            nickname_last_char: '가',
            ..ValidationLimits::default()
        };
        assert!(limits.check().is_err());
    }

    #[test]
    fn test_partial_limits_deserialize_with_defaults() {
        let limits: ValidationLimits =
            serde_json::from_str(r#"{ "max_records": 5 }"#).unwrap();
        assert_eq!(limits.max_records, 5);
        assert_eq!(limits.min_records, 1);
        assert_eq!(limits.email_domain, "email.com");
    }

    #[test]
    fn test_trusted_config() {
        let config = DetectorConfig::trusted();
        assert!(!config.validate);
        assert_eq!(config.limits, ValidationLimits::default());
    }
}
