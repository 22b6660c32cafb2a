//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Input row that is not an (email, nickname) pair
    MalformedRecord {
        /// Where the row came from
        source: String,
        /// 1-based record position: the TSV line or the JSON array element
        row: usize,
        /// What is wrong with it
        reason: String,
    },
    /// Input that is not valid JSON
    MalformedJson {
        /// Where the text came from
        source: String,
        /// 1-based line of the syntax error
        line: usize,
        /// 1-based column of the syntax error
        column: usize,
        /// Parser message
        reason: String,
    },
    /// Configuration error
    ConfigError(String),
    /// Input rejected by validation
    InvalidInput(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::MalformedRecord {
                source,
                row,
                reason,
            } => write!(f, "Malformed record at {source}:{row}: {reason}"),
            CliError::MalformedJson {
                source,
                line,
                column,
                reason,
            } => write!(f, "Invalid JSON in {source} at line {line}, column {column}: {reason}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("members.json".to_string());
        assert_eq!(error.to_string(), "File not found: members.json");
    }

    #[test]
    fn test_malformed_record_display() {
        let error = CliError::MalformedRecord {
            source: "members.tsv".to_string(),
            row: 3,
            reason: "expected 2 fields, found 1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Malformed record at members.tsv:3: expected 2 fields, found 1"
        );
    }

    #[test]
    fn test_malformed_json_display() {
        let error = CliError::MalformedJson {
            source: "members.json".to_string(),
            line: 4,
            column: 7,
            reason: "EOF while parsing a list".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid JSON in members.json at line 4, column 7: EOF while parsing a list"
        );
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("unknown field 'domain'".to_string());
        assert_eq!(
            error.to_string(),
            "Configuration error: unknown field 'domain'"
        );
    }

    #[test]
    fn test_invalid_input_display_with_hangul() {
        let error = CliError::InvalidInput("nickname '제이m'".to_string());
        assert_eq!(error.to_string(), "Invalid input: nickname '제이m'");
    }

    #[test]
    fn test_error_trait_implementation() {
        let error = CliError::FileNotFound("members.json".to_string());
        let _: &dyn std::error::Error = &error;

        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("FileNotFound"));
        assert!(debug_str.contains("members.json"));
    }

    #[test]
    fn test_cli_result_type_alias() {
        let success: CliResult<usize> = Ok(3);
        assert_eq!(success.unwrap(), 3);

        let failure: CliResult<usize> = Err(CliError::ConfigError("bad".to_string()).into());
        assert!(failure
            .unwrap_err()
            .to_string()
            .contains("Configuration error: bad"));
    }
}
