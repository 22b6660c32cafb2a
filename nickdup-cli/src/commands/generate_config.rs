//! Generate config command implementation

use crate::config::CliConfig;
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        let template = self.generate_template()?;

        match &self.output {
            Some(path) => {
                std::fs::write(path, template)
                    .with_context(|| format!("Failed to write to {}", path.display()))?;
                eprintln!("✓ Configuration written to {}", path.display());
                eprintln!(
                    "  Use it with: nickdup check -i members.json --config {}",
                    path.display()
                );
            }
            None => print!("{template}"),
        }

        Ok(())
    }

    /// Default configuration rendered as commented TOML
    fn generate_template(&self) -> Result<String> {
        let body = CliConfig::default().to_toml()?;
        Ok(format!(
            "# nickdup configuration\n\
             #\n\
             # [validation] bounds are checked before detection; lengths count characters.\n\
             # Set `enabled = false` only for input that was validated elsewhere.\n\n\
             {body}"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_template_parses_back() {
        let args = GenerateConfigArgs { output: None };
        let template = args.generate_template().unwrap();

        assert!(template.starts_with("# nickdup configuration"));
        assert_eq!(CliConfig::from_toml(&template).unwrap(), CliConfig::default());
    }

    #[test]
    fn test_writes_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nickdup.toml");

        GenerateConfigArgs {
            output: Some(path.clone()),
        }
        .execute()
        .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("[validation]"));
        assert!(content.contains("[output]"));
    }
}
