// SPDX-License-Identifier: Apache-2.0

//! Error types for issueseed.
//!
//! Uses `thiserror` for deriving `std::error::Error` implementations.
//! Application code should use `anyhow::Result` for top-level error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a seeding run.
#[derive(Error, Debug)]
pub enum SeederError {
    /// The spreadsheet path does not exist.
    #[error("Spreadsheet not found: {}", path.display())]
    SpreadsheetNotFound {
        /// Path given on the command line.
        path: PathBuf,
    },

    /// The spreadsheet header lacks one or more required columns.
    #[error("Spreadsheet is missing required columns: {}", columns.join(", "))]
    MissingColumns {
        /// Names of the missing columns, in declaration order.
        columns: Vec<String>,
    },

    /// The spreadsheet exists but could not be read.
    #[error("Failed to read spreadsheet {}: {message}", path.display())]
    Spreadsheet {
        /// Path of the spreadsheet.
        path: PathBuf,
        /// Underlying reader error.
        message: String,
    },

    /// The student mapping file could not be read or parsed.
    #[error("Failed to load student mapping {}: {message}", path.display())]
    Mapping {
        /// Path of the mapping file.
        path: PathBuf,
        /// Underlying parser error.
        message: String,
    },

    /// Configuration file error.
    #[error("Configuration error: {message}")]
    Config {
        /// Error message.
        message: String,
    },

    /// Repository identifier is not in `owner/name` form.
    #[error("Invalid repository '{value}': expected owner/name")]
    InvalidRepo {
        /// Value given on the command line.
        value: String,
    },

    /// Task type is neither `COMIA` nor `SEMIA`.
    #[error("Invalid task type '{value}': expected COMIA or SEMIA")]
    InvalidTaskType {
        /// Rejected value.
        value: String,
    },

    /// GitHub client could not be constructed.
    #[error("GitHub API error: {message}")]
    GitHub {
        /// Error message.
        message: String,
    },
}

impl From<config::ConfigError> for SeederError {
    fn from(err: config::ConfigError) -> Self {
        SeederError::Config {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_columns_lists_every_name() {
        let err = SeederError::MissingColumns {
            columns: vec!["SQUAD".to_string(), "Tarefa".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Spreadsheet is missing required columns: SQUAD, Tarefa"
        );
    }

    #[test]
    fn spreadsheet_not_found_shows_path() {
        let err = SeederError::SpreadsheetNotFound {
            path: PathBuf::from("tarefas.xlsx"),
        };
        assert!(err.to_string().contains("tarefas.xlsx"));
    }
}
