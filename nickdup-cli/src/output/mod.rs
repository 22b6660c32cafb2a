//! Output formatting module

use anyhow::Result;
use nickdup_core::DetectionReport;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format one detection report
    fn format_report(&mut self, report: &DetectionReport) -> Result<()>;

    /// Finalize output (e.g., flush buffered JSON)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
