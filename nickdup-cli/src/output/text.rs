//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use nickdup_core::DetectionReport;
use std::io::Write;

/// Plain text formatter - outputs one email per line
pub struct TextFormatter<W: Write> {
    writer: W,
    include_patterns: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            include_patterns: false,
        }
    }

    /// Append a comment line listing the shared patterns
    pub fn with_patterns(mut self, include: bool) -> Self {
        self.include_patterns = include;
        self
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_report(&mut self, report: &DetectionReport) -> Result<()> {
        for email in &report.emails {
            writeln!(self.writer, "{email}")?;
        }
        if self.include_patterns {
            writeln!(
                self.writer,
                "# shared patterns: {}",
                report.shared_patterns.join(" ")
            )?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> DetectionReport {
        DetectionReport {
            emails: vec!["aaa@email.com".to_string(), "bbb@email.com".to_string()],
            shared_patterns: vec!["가나".to_string(), "나다".to_string()],
            records: 3,
        }
    }

    #[test]
    fn test_one_email_per_line() {
        let mut buffer = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buffer);
            formatter.format_report(&report()).unwrap();
            formatter.finish().unwrap();
        }
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "aaa@email.com\nbbb@email.com\n"
        );
    }

    #[test]
    fn test_patterns_comment() {
        let mut buffer = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buffer).with_patterns(true);
            formatter.format_report(&report()).unwrap();
        }
        let output = String::from_utf8(buffer).unwrap();
        assert!(output.ends_with("# shared patterns: 가나 나다\n"));
    }

    #[test]
    fn test_empty_report_prints_nothing() {
        let mut buffer = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buffer);
            formatter
                .format_report(&DetectionReport {
                    emails: vec![],
                    shared_patterns: vec![],
                    records: 2,
                })
                .unwrap();
        }
        assert!(buffer.is_empty());
    }
}
