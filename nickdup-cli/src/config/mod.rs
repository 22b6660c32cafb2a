//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use nickdup_core::{DetectorConfig, ValidationLimits};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Input validation bounds
    #[serde(default)]
    pub validation: ValidationConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Validation-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ValidationConfig {
    /// Validate input before detection
    pub enabled: bool,

    /// Bounds applied when validation is enabled
    #[serde(flatten)]
    pub limits: ValidationLimits,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            limits: ValidationLimits::default(),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Include shared patterns alongside the emails
    pub include_patterns: bool,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            include_patterns: false,
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to load config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: CliConfig =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))?;
        config
            .validation
            .limits
            .check()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(config)
    }

    /// Load `path` if given, otherwise the defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }

    /// Detector configuration derived from this file
    pub fn detector_config(&self) -> DetectorConfig {
        DetectorConfig {
            validate: self.validation.enabled,
            limits: self.validation.limits.clone(),
        }
    }
}
