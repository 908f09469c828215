// SPDX-License-Identifier: Apache-2.0

//! Logging initialization for the issueseed CLI.
//!
//! Uses `tracing` with `tracing-subscriber` for structured logging on stderr.
//! Log level can be controlled via the `RUST_LOG` environment variable.
//!
//! # Examples
//!
//! ```bash
//! # Default: warnings from issueseed, errors from dependencies
//! issueseed --repo org/turma --token ... --excel tarefas.xlsx
//!
//! # Trace every GitHub call
//! RUST_LOG=issueseed=trace,octocrab=debug issueseed ...
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Default filter when `RUST_LOG` is unset.
fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "issueseed=debug,octocrab=warn,reqwest=warn"
    } else {
        "issueseed=warn,octocrab=error,reqwest=error"
    }
}

/// Initialize the logging subsystem.
///
/// # Arguments
///
/// * `verbose` - Raise issueseed tracing to debug (-v flag)
pub fn init_logging(verbose: bool) {
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let filter_layer = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
