//! Binary crate for the `weather` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive configuration
//! - Human-friendly output and exit status

use clap::Parser;
use std::process::ExitCode;

mod cli;
mod logging;

/// Exit status for failures other than an unknown place.
const FATAL: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    let cmd = cli::Cli::parse();
    logging::init(cmd.verbose);

    match cmd.run().await {
        Ok(code) => code,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("エラー: {err:#}");
            ExitCode::from(FATAL)
        }
    }
}
