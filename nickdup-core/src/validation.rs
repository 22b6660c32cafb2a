//! Input preconditions checked before detection
//!
//! Checks run in a fixed order and stop at the first failure: the record
//! count, then for each record in input order its email domain, email length,
//! nickname length and nickname characters.

use crate::config::ValidationLimits;
use crate::error::ValidationError;
use crate::record::Record;

/// Fail-fast validator for a batch of records
#[derive(Debug, Clone, Default)]
pub struct Validator {
    limits: ValidationLimits,
}

impl Validator {
    /// Validator enforcing `limits`
    pub fn new(limits: ValidationLimits) -> Self {
        Self { limits }
    }

    /// The limits being enforced
    pub fn limits(&self) -> &ValidationLimits {
        &self.limits
    }

    /// Validate the whole batch
    pub fn validate(&self, records: &[Record]) -> Result<(), ValidationError> {
        self.check_record_count(records.len())?;
        for (index, record) in records.iter().enumerate() {
            self.check_record(index, record)?;
        }
        Ok(())
    }

    /// Validate one record at position `index`
    pub fn check_record(&self, index: usize, record: &Record) -> Result<(), ValidationError> {
        self.check_email_domain(index, &record.email)?;
        self.check_email_length(index, &record.email)?;
        self.check_nickname_length(index, &record.nickname)?;
        self.check_nickname_charset(index, &record.nickname)
    }

    /// Batch size must fall within the configured bounds
    pub fn check_record_count(&self, count: usize) -> Result<(), ValidationError> {
        let ValidationLimits {
            min_records,
            max_records,
            ..
        } = self.limits;
        if count < min_records || count > max_records {
            return Err(ValidationError::InvalidCount {
                count,
                min: min_records,
                max: max_records,
            });
        }
        Ok(())
    }

    /// Everything after the last `@` must equal the configured domain
    pub fn check_email_domain(&self, index: usize, email: &str) -> Result<(), ValidationError> {
        match email.rsplit_once('@') {
            Some((_, domain)) if domain == self.limits.email_domain => Ok(()),
            _ => Err(ValidationError::InvalidEmailDomain {
                index,
                email: email.to_string(),
                domain: self.limits.email_domain.clone(),
            }),
        }
    }

    /// Email length in characters must fall within the configured bounds
    pub fn check_email_length(&self, index: usize, email: &str) -> Result<(), ValidationError> {
        let length = email.chars().count();
        let (min, max) = (self.limits.min_email_len, self.limits.max_email_len);
        if length < min || length > max {
            return Err(ValidationError::InvalidEmailLength {
                index,
                email: email.to_string(),
                length,
                min,
                max,
            });
        }
        Ok(())
    }

    /// Nickname length in characters must fall within the configured bounds
    pub fn check_nickname_length(
        &self,
        index: usize,
        nickname: &str,
    ) -> Result<(), ValidationError> {
        let length = nickname.chars().count();
        let (min, max) = (self.limits.min_nickname_len, self.limits.max_nickname_len);
        if length < min || length > max {
            return Err(ValidationError::InvalidNicknameLength {
                index,
                nickname: nickname.to_string(),
                length,
                min,
                max,
            });
        }
        Ok(())
    }

    /// Every nickname character must lie in the allowed range
    pub fn check_nickname_charset(
        &self,
        index: usize,
        nickname: &str,
    ) -> Result<(), ValidationError> {
        match nickname.chars().find(|&c| !self.limits.allows_char(c)) {
            Some(character) => Err(ValidationError::InvalidNicknameCharset {
                index,
                nickname: nickname.to_string(),
                character,
            }),
            None => Ok(()),
        }
    }
}

/// Validate `records` against the default limits
pub fn validate(records: &[Record]) -> Result<(), ValidationError> {
    Validator::default().validate(records)
}
