//! Validation, pattern discovery and matching composed into one call

use crate::config::{DetectorConfig, ValidationLimits};
use crate::error::{Result, ValidationError};
use crate::overlap::find_overlap_emails;
use crate::pattern::find_shared_patterns;
use crate::record::Record;
use crate::validation::Validator;
use serde::{Deserialize, Serialize};

/// Outcome of a detection run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionReport {
    /// Emails of overlapping accounts, ascending, without duplicates
    pub emails: Vec<String>,
    /// Two-character patterns found in more than one nickname, ascending
    pub shared_patterns: Vec<String>,
    /// Number of records examined
    pub records: usize,
}

/// Overlap detector
///
/// Stateless apart from its configuration; running it twice on the same input
/// gives the same answer.
#[derive(Debug, Clone, Default)]
pub struct Detector {
    config: DetectorConfig,
    validator: Validator,
}

impl Detector {
    /// Detector with default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Detector with custom configuration
    pub fn with_config(config: DetectorConfig) -> Result<Self> {
        config.limits.check()?;
        let validator = Validator::new(config.limits.clone());
        Ok(Self { config, validator })
    }

    /// The active configuration
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Check `records` without running detection
    pub fn validate(&self, records: &[Record]) -> std::result::Result<(), ValidationError> {
        self.validator.validate(records)
    }

    /// Emails of every account whose nickname shares a two-character
    /// substring with another account's nickname, sorted ascending
    pub fn detect(&self, records: &[Record]) -> Result<Vec<String>> {
        Ok(self.report(records)?.emails)
    }

    /// Like [`Detector::detect`], also returning the shared patterns
    pub fn report(&self, records: &[Record]) -> Result<DetectionReport> {
        if self.config.validate {
            self.validate(records)?;
        }

        let shared = find_shared_patterns(records);
        let mut emails: Vec<String> = find_overlap_emails(&shared, records)
            .into_iter()
            .collect();
        emails.sort_unstable();

        let mut shared_patterns: Vec<String> = shared.iter().map(ToString::to_string).collect();
        shared_patterns.sort_unstable();

        log::info!(
            "{} of {} records flagged as overlapping",
            emails.len(),
            records.len()
        );

        Ok(DetectionReport {
            emails,
            shared_patterns,
            records: records.len(),
        })
    }
}

/// Builder for [`Detector`]
#[derive(Debug, Default)]
pub struct DetectorBuilder {
    config: DetectorConfig,
}

impl DetectorBuilder {
    /// Start from the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all validation limits
    pub fn limits(mut self, limits: ValidationLimits) -> Self {
        self.config.limits = limits;
        self
    }

    /// Required email domain
    pub fn email_domain<S: Into<String>>(mut self, domain: S) -> Self {
        self.config.limits.email_domain = domain.into();
        self
    }

    /// Largest accepted batch
    pub fn max_records(mut self, max: usize) -> Self {
        self.config.limits.max_records = max;
        self
    }

    /// Skip validation for input already known to be valid
    pub fn trusted(mut self, trusted: bool) -> Self {
        self.config.validate = !trusted;
        self
    }

    /// Build the detector
    pub fn build(self) -> Result<Detector> {
        Detector::with_config(self.config)
    }
}

/// Validate `records` against the default limits and return the sorted
/// emails of overlapping accounts
///
/// ```rust
/// use nickdup_core::{find_overlapping_emails, Record};
///
/// let records = vec![
///     Record::new("jm@email.com", "제이엠"),
///     Record::new("jason@email.com", "제이슨"),
///     Record::new("woniee@email.com", "워니"),
///     Record::new("mj@email.com", "엠제이"),
///     Record::new("nowm@email.com", "이제엠"),
/// ];
///
/// let emails = find_overlapping_emails(&records).unwrap();
/// assert_eq!(
///     emails,
///     vec!["jason@email.com", "jm@email.com", "mj@email.com"]
/// );
/// ```
pub fn find_overlapping_emails(records: &[Record]) -> Result<Vec<String>> {
    Detector::new().detect(records)
}
