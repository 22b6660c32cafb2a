//! Check command implementation

use crate::config::CliConfig;
use crate::input::{load_records, InputFormat};
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};
use anyhow::{Context, Result};
use clap::Args;
use nickdup_core::Detector;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the check command
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Input files or patterns (supports glob), or `-` for stdin
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Input format (default: detect from extension or content)
    #[arg(long, value_enum)]
    pub input_format: Option<InputFormat>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "NICKDUP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Also report the shared two-syllable patterns
    #[arg(short, long)]
    pub patterns: bool,

    /// Skip input validation
    #[arg(long)]
    pub trusted: bool,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One email per line
    Text,
    /// JSON array of emails
    Json,
}

impl CheckArgs {
    /// Execute the check command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose, self.quiet);

        log::info!("Starting overlap check");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let mut detector_config = config.detector_config();
        if self.trusted {
            detector_config.validate = false;
        }
        let detector = Detector::with_config(detector_config)?;

        let records = load_records(&self.input, self.input_format)?;
        log::info!("Loaded {} records", records.len());

        let report = detector.report(&records)?;

        let include_patterns = self.patterns || config.output.include_patterns;
        let writer = self.open_output()?;
        let mut formatter: Box<dyn OutputFormatter> = match self.format {
            OutputFormat::Text => {
                Box::new(TextFormatter::new(writer).with_patterns(include_patterns))
            }
            OutputFormat::Json => Box::new(
                JsonFormatter::new(writer)
                    .pretty(config.output.pretty_json)
                    .with_patterns(include_patterns),
            ),
        };
        formatter.format_report(&report)?;
        formatter.finish()?;

        Ok(())
    }

    fn open_output(&self) -> Result<Box<dyn Write>> {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?;
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(io::stdout().lock())),
        }
    }
}
