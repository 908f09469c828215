// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! # issueseed core
//!
//! Core library for seeding GitHub issues from a student task spreadsheet.
//!
//! This crate provides:
//! - Spreadsheet loading into typed [`TaskRow`]s (`.xlsx`, `.xls`, `.ods`, `.csv`)
//! - Student-to-login mapping for assignees
//! - Issue composition (title, body, labels)
//! - The [`IssueTracker`] seam and its octocrab implementation
//! - A sequential batch runner with per-row outcomes
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use issueseed_core::{GitHubTracker, SeedOptions, load_mapping, read_tasks, seed_issues};
//! use secrecy::SecretString;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let rows = read_tasks(Path::new("tarefas.xlsx"), None)?;
//! let mapping = load_mapping(Path::new("students.yml"))?;
//! let tracker = GitHubTracker::new(&SecretString::from("ghp_...".to_string()), "org", "turma")?;
//!
//! let options = SeedOptions::builder().build();
//! let report = seed_issues(&tracker, &rows, &mapping, &options, |_event| {}).await;
//! println!("Created {} issues", report.created);
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Error Handling
// ============================================================================

pub use error::SeederError;

/// Convenience Result type for issueseed operations.
pub type Result<T> = std::result::Result<T, SeederError>;

// ============================================================================
// Configuration
// ============================================================================

pub use config::{AppConfig, config_dir, config_file_path, load_config};

// ============================================================================
// Input
// ============================================================================

pub use mapping::{StudentMapping, load_mapping};
pub use spreadsheet::read_tasks;
pub use task::{TaskRow, TaskType};

// ============================================================================
// Composition and Seeding
// ============================================================================

pub use compose::{IssueDraft, compose_issue};
pub use github::client::GitHubTracker;
pub use github::{CreatedIssue, IssueTracker, TrackerError, parse_owner_repo};
pub use seed::{IssueReport, RowOutcome, SeedEvent, SeedOptions, SeedReport, seed_issues};

// ============================================================================
// Modules
// ============================================================================

pub mod compose;
pub mod config;
pub mod error;
pub mod github;
pub mod mapping;
pub mod seed;
pub mod spreadsheet;
pub mod task;
