// SPDX-License-Identifier: Apache-2.0

//! issueseed - seed GitHub issues from a student task spreadsheet.
//!
//! Reads one task per row, composes a templated issue for each, makes sure
//! its labels exist, and creates it in the target repository.

mod cli;
mod commands;
mod errors;
mod logging;
mod output;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use issueseed_core::config;
use tracing::debug;

use crate::cli::{Cli, OutputContext};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let output_ctx = OutputContext::from_cli(cli.output, cli.quiet, cli.verbose);

    let config = match config::load_config().context("Failed to load configuration") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", errors::format_error(&e));
            return ExitCode::FAILURE;
        }
    };
    debug!("Configuration loaded successfully");

    match commands::run(cli, output_ctx, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", errors::format_error(&e));
            ExitCode::FAILURE
        }
    }
}
