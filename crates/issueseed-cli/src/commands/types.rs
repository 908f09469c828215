// SPDX-License-Identifier: Apache-2.0

//! Result types returned by command handlers.

use issueseed_core::SeedReport;
use serde::Serialize;

/// Result from a seeding run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SeedResult {
    /// Target repository in owner/name format.
    pub repository: String,
    /// Whether the run only previewed issues.
    pub dry_run: bool,
    /// Per-row outcomes and counters.
    #[serde(flatten)]
    pub report: SeedReport,
}
