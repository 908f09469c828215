// SPDX-License-Identifier: Apache-2.0

//! Command-line interface definition for issueseed.
//!
//! Uses clap's derive API. The tool runs a single batch job, so every
//! option is a top-level flag.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use issueseed_core::TaskType;

/// Output format for the run summary.
#[derive(Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text with colors (default)
    #[default]
    Text,
    /// JSON output for programmatic consumption
    Json,
    /// YAML output for programmatic consumption
    Yaml,
}

/// Global output configuration passed to commands.
#[derive(Clone, Copy)]
pub struct OutputContext {
    /// Output format (text, json, yaml)
    pub format: OutputFormat,
    /// Suppress per-row progress lines
    pub quiet: bool,
    /// Print composed issue bodies
    pub verbose: bool,
}

impl OutputContext {
    /// Creates an `OutputContext` from CLI arguments.
    pub fn from_cli(format: OutputFormat, quiet: bool, verbose: bool) -> Self {
        Self {
            format,
            quiet,
            verbose,
        }
    }

    /// Returns true if per-row progress should be printed to stdout.
    ///
    /// Structured formats keep stdout for the summary document only.
    pub fn shows_progress(&self) -> bool {
        !self.quiet && matches!(self.format, OutputFormat::Text)
    }
}

/// Seed GitHub issues from a student task spreadsheet.
///
/// Creates one issue per row with a templated title and body, five labels,
/// and the student's GitHub login as assignee when it is mapped.
#[derive(Parser)]
#[command(name = "issueseed")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Repository in owner/name format
    #[arg(long, value_name = "OWNER/NAME")]
    pub repo: String,

    /// GitHub access token
    #[arg(long)]
    pub token: String,

    /// Spreadsheet with one task per row (.xlsx, .xls, .ods or .csv)
    #[arg(long, value_name = "PATH")]
    pub excel: PathBuf,

    /// YAML file mapping student ids to GitHub logins
    #[arg(long, value_name = "PATH")]
    pub students: Option<PathBuf>,

    /// Task type for rows without a valid IA value: COMIA or SEMIA [default: SEMIA]
    #[arg(long, value_name = "TYPE")]
    pub ia_default: Option<TaskType>,

    /// Worksheet to read (defaults to the first one)
    #[arg(long)]
    pub sheet: Option<String>,

    /// Compose and print issues without calling GitHub
    #[arg(long)]
    pub dry_run: bool,

    /// Summary format (text, json, yaml)
    #[arg(long, short = 'o', default_value = "text", value_enum)]
    pub output: OutputFormat,

    /// Suppress per-row progress lines
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Print composed issue bodies and enable debug logging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_required_flags() {
        let cli = Cli::try_parse_from([
            "issueseed",
            "--repo",
            "turma/web",
            "--token",
            "ghp_x",
            "--excel",
            "tarefas.xlsx",
        ])
        .unwrap();

        assert_eq!(cli.repo, "turma/web");
        assert_eq!(cli.excel, PathBuf::from("tarefas.xlsx"));
        assert!(cli.students.is_none());
        assert!(cli.ia_default.is_none());
        assert!(!cli.dry_run);
    }

    #[test]
    fn ia_default_is_case_insensitive() {
        let cli = Cli::try_parse_from([
            "issueseed",
            "--repo",
            "turma/web",
            "--token",
            "ghp_x",
            "--excel",
            "tarefas.xlsx",
            "--ia-default",
            "comia",
        ])
        .unwrap();

        assert_eq!(cli.ia_default, Some(TaskType::ComIa));
    }

    #[test]
    fn rejects_unknown_ia_default() {
        let result = Cli::try_parse_from([
            "issueseed",
            "--repo",
            "turma/web",
            "--token",
            "ghp_x",
            "--excel",
            "tarefas.xlsx",
            "--ia-default",
            "talvez",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn token_is_required() {
        let result = Cli::try_parse_from(["issueseed", "--repo", "turma/web", "--excel", "a.xlsx"]);
        assert!(result.is_err());
    }
}
