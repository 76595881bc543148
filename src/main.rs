#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]
#![cfg_attr(test, allow(clippy::panic, clippy::unwrap_used, clippy::expect_used))]

use std::io::{self, Write};

use color_eyre::eyre::Result;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::{bank::Bank, cli::CliArgs};

mod bank;
pub(crate) mod cli;
mod csv;
mod demo;
mod domain;

fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let cli_args = CliArgs::load();
    let mut out = io::stdout().lock();

    match cli_args.input_file_path {
        Some(path) => run_scenario(&path, &mut out),
        None => demo::run(&mut out),
    }
}

// Logs go to stderr so that stdout carries only account reports.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_scenario(file_path: &str, out: &mut impl Write) -> Result<()> {
    let mut bank = Bank::new();

    let rows = csv::read_input::<csv::ScenarioRecord>(file_path)?;

    for row_result in rows {
        match row_result {
            Ok(row) => match bank.handle(row) {
                Ok(Some(report)) => writeln!(out, "{}", report)?,
                Ok(None) => {}
                // Failed operations leave accounts untouched; report and carry on.
                Err(e) => {
                    debug!("Error processing row: {}", e);
                    writeln!(out, "{}", e)?;
                }
            },
            Err(e) => debug!("Error parsing row: {}", e),
        }
    }

    Ok(())
}
