//! Overlap detection for Korean nicknames
//!
//! Given a batch of `(email, nickname)` registrations, this crate finds the
//! accounts whose nickname shares a two-syllable substring with some other
//! account's nickname, and returns their emails sorted and deduplicated.
//!
//! # Architecture
//!
//! Detection runs in three stages:
//! - **Validation**: fail-fast precondition checks on the batch
//! - **Pattern discovery**: one pass collecting two-character patterns that
//!   appear in more than one nickname
//! - **Matching**: a prefix-function (KMP) scan of every nickname for each
//!   shared pattern
//!
//! # Example
//!
//! ```rust
//! use nickdup_core::{Detector, Record};
//!
//! let records = vec![
//!     Record::new("aaa@email.com", "가나다"),
//!     Record::new("bbb@email.com", "나다라"),
//!     Record::new("ccc@email.com", "다라마"),
//!     Record::new("ddd@email.com", "바"),
//! ];
//!
//! let emails = Detector::new().detect(&records).unwrap();
//! assert_eq!(emails, vec!["aaa@email.com", "bbb@email.com", "ccc@email.com"]);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod detector;
pub mod error;
pub mod matcher;
pub mod overlap;
pub mod pattern;
pub mod record;
pub mod validation;

// Re-export key types
pub use config::{DetectorConfig, ValidationLimits};
pub use detector::{find_overlapping_emails, DetectionReport, Detector, DetectorBuilder};
pub use error::{Error, Result, ValidationError};
pub use matcher::KmpMatcher;
pub use overlap::OverlapMatcher;
pub use pattern::{Bigram, PatternFinder};
pub use record::Record;
pub use validation::Validator;
