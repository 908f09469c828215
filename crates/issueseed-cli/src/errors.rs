// SPDX-License-Identifier: Apache-2.0

//! CLI-specific error formatting with user-friendly hints.
//!
//! Downcasts `anyhow::Error` to `SeederError` and appends a hint for the
//! flag or file the user most likely needs to fix.

use anyhow::Error;
use issueseed_core::error::SeederError;
use issueseed_core::task::REQUIRED_COLUMNS;

/// Formats an error for CLI display with helpful hints.
///
/// If the error is not a `SeederError`, returns the message with its
/// context chain.
pub fn format_error(error: &Error) -> String {
    let Some(seeder_err) = error.downcast_ref::<SeederError>() else {
        return format!("{error:#}");
    };

    match seeder_err {
        SeederError::SpreadsheetNotFound { .. } => {
            format!("{seeder_err}\n\nTip: Check the path passed to --excel.")
        }
        SeederError::MissingColumns { .. } => {
            format!(
                "{seeder_err}\n\nTip: The header row needs {} (exact names).",
                REQUIRED_COLUMNS.join(", ")
            )
        }
        SeederError::Spreadsheet { .. } => {
            format!("{seeder_err}\n\nTip: Try --sheet, or export the file as .xlsx or .csv.")
        }
        SeederError::Mapping { .. } => {
            format!("{seeder_err}\n\nTip: Expect a `mappings:` section with a `login` per id.")
        }
        SeederError::Config { .. } => {
            format!(
                "{seeder_err}\n\nTip: Check your config file at {}",
                issueseed_core::config::config_file_path().display()
            )
        }
        SeederError::InvalidRepo { .. } => {
            format!("{seeder_err}\n\nTip: Pass --repo as owner/name, e.g. octo-org/turma-web.")
        }
        SeederError::GitHub { .. } => {
            format!("{seeder_err}\n\nTip: Check that --token is a valid GitHub token.")
        }
        SeederError::InvalidTaskType { .. } => seeder_err.to_string(),
    }
}
