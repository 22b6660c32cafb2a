//! Validate command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{load_records, InputFormat};
use anyhow::Result;
use clap::Args;
use nickdup_core::Validator;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Input files or patterns (supports glob), or `-` for stdin
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Input format (default: detect from extension or content)
    #[arg(long, value_enum)]
    pub input_format: Option<InputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "NICKDUP_CONFIG")]
    pub config: Option<PathBuf>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let records = load_records(&self.input, self.input_format)?;
        let validator = Validator::new(config.validation.limits);

        match validator.validate(&records) {
            Ok(()) => {
                println!("✓ {} records are valid", records.len());
                Ok(())
            }
            Err(e) => {
                println!("✗ Input is invalid!");
                println!("  Error: {e}");
                Err(CliError::InvalidInput(e.to_string()).into())
            }
        }
    }
}
