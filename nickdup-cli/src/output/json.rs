//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use nickdup_core::DetectionReport;
use std::io::Write;

/// JSON formatter
///
/// Writes the sorted email array, or the whole report when patterns are
/// requested.
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    include_patterns: bool,
    report: Option<DetectionReport>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: true,
            include_patterns: false,
            report: None,
        }
    }

    /// Toggle pretty printing
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Emit the full report instead of the bare email array
    pub fn with_patterns(mut self, include: bool) -> Self {
        self.include_patterns = include;
        self
    }

    fn write_value<T: serde::Serialize>(&mut self, value: &T) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, value)?;
        } else {
            serde_json::to_writer(&mut self.writer, value)?;
        }
        Ok(())
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_report(&mut self, report: &DetectionReport) -> Result<()> {
        self.report = Some(report.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let Some(report) = self.report.take() else {
            return Ok(());
        };
        if self.include_patterns {
            self.write_value(&report)?;
        } else {
            self.write_value(&report.emails)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
