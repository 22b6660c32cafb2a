//! nickdup command-line entry point

use clap::Parser;
use nickdup_cli::commands::Commands;
use nickdup_cli::CliResult;

/// Korean nickname overlap detection
///
/// Flags accounts whose nickname shares a two-syllable substring with
/// another account's nickname.
#[derive(Debug, Parser)]
#[command(name = "nickdup", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
