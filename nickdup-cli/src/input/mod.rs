//! Input handling module
//!
//! Records are read either as a JSON array of `[email, nickname]` pairs or as
//! tab-separated lines of `email<TAB>nickname`.

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

use crate::error::CliError;
use anyhow::{bail, Result};
use nickdup_core::Record;
use std::path::Path;

/// Input name meaning standard input
pub const STDIN: &str = "-";

/// Supported input formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum InputFormat {
    /// JSON array of `["email", "nickname"]` pairs
    Json,
    /// One `email<TAB>nickname` pair per line
    Tsv,
}

impl InputFormat {
    /// Guess the format from the file extension, then from the content
    pub fn detect(path: Option<&Path>, content: &str) -> Self {
        let extension = path
            .and_then(|p| p.extension())
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => InputFormat::Json,
            Some("tsv") | Some("txt") => InputFormat::Tsv,
            _ if content.trim_start().starts_with('[') => InputFormat::Json,
            _ => InputFormat::Tsv,
        }
    }

    /// Parse `content`; `source` names the input in error messages
    pub fn parse(self, source: &str, content: &str) -> Result<Vec<Record>> {
        match self {
            InputFormat::Json => parse_json(source, content),
            InputFormat::Tsv => parse_tsv(source, content),
        }
    }
}

/// Parse a JSON array of two-element string arrays
pub fn parse_json(source: &str, content: &str) -> Result<Vec<Record>> {
    let rows: Vec<Vec<String>> =
        serde_json::from_str(content).map_err(|e| CliError::MalformedJson {
            source: source.to_string(),
            line: e.line(),
            column: e.column(),
            reason: e.to_string(),
        })?;

    rows.into_iter()
        .enumerate()
        .map(|(i, row)| into_record(source, i + 1, row))
        .collect()
}

/// Parse tab-separated `email<TAB>nickname` lines, skipping blank ones
pub fn parse_tsv(source: &str, content: &str) -> Result<Vec<Record>> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            let fields = line.split('\t').map(str::to_string).collect();
            into_record(source, i + 1, fields)
        })
        .collect()
}

fn into_record(source: &str, row: usize, fields: Vec<String>) -> Result<Record> {
    match <[String; 2]>::try_from(fields) {
        Ok([email, nickname]) => Ok(Record::new(email, nickname)),
        Err(fields) => Err(CliError::MalformedRecord {
            source: source.to_string(),
            row,
            reason: format!("expected 2 fields, found {}", fields.len()),
        }
        .into()),
    }
}

/// Read every record from `inputs`, in order
///
/// A single `-` reads standard input; anything else is a file path or glob.
/// Standard input cannot be mixed with files.
pub fn load_records(inputs: &[String], format: Option<InputFormat>) -> Result<Vec<Record>> {
    if inputs.len() > 1 && inputs.iter().any(|input| input == STDIN) {
        bail!("stdin ('{STDIN}') cannot be combined with other inputs");
    }

    if inputs.len() == 1 && inputs[0] == STDIN {
        let content = FileReader::read_stdin()?;
        let format = format.unwrap_or_else(|| InputFormat::detect(None, &content));
        return format.parse("<stdin>", &content);
    }

    let mut records = Vec::new();
    for path in resolve_patterns(inputs)? {
        let content = FileReader::read_text(&path)?;
        let format = format.unwrap_or_else(|| InputFormat::detect(Some(&path), &content));
        log::debug!("Reading {} as {:?}", path.display(), format);

        records.extend(format.parse(&path.display().to_string(), &content)?);
    }

    Ok(records)
}
