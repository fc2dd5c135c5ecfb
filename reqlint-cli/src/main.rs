//! reqlint command-line entry point

use clap::Parser;
use reqlint_cli::commands::Commands;
use std::process::ExitCode;

/// Heuristic quality linter for software requirement statements
#[derive(Debug, Parser)]
#[command(name = "reqlint", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}
