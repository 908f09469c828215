// SPDX-License-Identifier: Apache-2.0

//! Sequential batch seeding.
//!
//! Composes one issue per row, ensures its labels, and submits it. A failing
//! label or issue is reported through the event callback and the loop moves
//! on; only the caller decides how to present it.

use bon::Builder;
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::compose::{IssueDraft, compose_issue};
use crate::github::issues::submit_issue;
use crate::github::labels::{LabelOutcome, ensure_label};
use crate::github::{CreatedIssue, IssueTracker, TrackerError};
use crate::mapping::StudentMapping;
use crate::task::{TaskRow, TaskType};

/// Options shared by every row of a run.
#[derive(Debug, Clone, Builder)]
pub struct SeedOptions {
    /// Task type for rows whose own value is absent or invalid.
    #[builder(default)]
    pub default_type: TaskType,
    /// Hex color for labels that have to be created.
    #[builder(into, default = "6E5494".to_string())]
    pub label_color: String,
    /// Compose issues without calling the tracker.
    #[builder(default)]
    pub dry_run: bool,
}

/// Progress notifications emitted while seeding.
#[derive(Debug)]
pub enum SeedEvent<'a> {
    /// A label could not be ensured; the row continues.
    LabelFailed {
        /// Label name.
        label: &'a str,
        /// Reason.
        error: &'a TrackerError,
    },
    /// About to submit (or, in dry-run mode, preview) an issue.
    Submitting {
        /// 1-based row position.
        index: usize,
        /// Number of rows in the run.
        total: usize,
        /// Issue about to be created.
        draft: &'a IssueDraft,
    },
    /// The issue was created.
    Created {
        /// Composed issue.
        draft: &'a IssueDraft,
        /// GitHub response.
        issue: &'a CreatedIssue,
    },
    /// The issue could not be created; the run continues.
    Failed {
        /// Composed issue.
        draft: &'a IssueDraft,
        /// Reason.
        error: &'a TrackerError,
    },
}

/// Outcome of one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RowOutcome {
    /// Issue created.
    Created {
        /// Issue number.
        number: u64,
        /// Issue URL.
        url: String,
    },
    /// Issue creation failed.
    Failed {
        /// Error message.
        error: String,
    },
    /// Dry run, nothing submitted.
    DryRun,
}

/// A label that could not be ensured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelWarning {
    /// Label name.
    pub label: String,
    /// Error message.
    pub error: String,
}

/// Per-row report.
#[derive(Debug, Clone, Serialize)]
pub struct IssueReport {
    /// Composed issue.
    pub issue: IssueDraft,
    /// What happened to it.
    pub outcome: RowOutcome,
    /// Labels that could not be ensured.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub label_warnings: Vec<LabelWarning>,
}

/// Result of a seeding run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SeedReport {
    /// Number of issues created.
    pub created: usize,
    /// Number of issues that failed.
    pub failed: usize,
    /// Number of issues previewed in dry-run mode.
    pub previewed: usize,
    /// Number of labels that could not be ensured.
    pub label_warnings: usize,
    /// Per-row reports in spreadsheet order.
    pub issues: Vec<IssueReport>,
}

impl SeedReport {
    /// Total rows processed.
    #[must_use]
    pub fn total(&self) -> usize {
        self.issues.len()
    }
}

/// Seeds one issue per row, strictly in order.
///
/// # Arguments
///
/// * `tracker` - Remote issue tracker (unused in dry-run mode)
/// * `rows` - Spreadsheet rows
/// * `mapping` - Student-to-login mapping for assignees
/// * `options` - Run options
/// * `on_event` - Called for every label warning, before each submission, and after it
#[instrument(skip_all, fields(rows = rows.len(), dry_run = options.dry_run))]
pub async fn seed_issues<T, P>(
    tracker: &T,
    rows: &[TaskRow],
    mapping: &StudentMapping,
    options: &SeedOptions,
    mut on_event: P,
) -> SeedReport
where
    T: IssueTracker + ?Sized,
    P: FnMut(SeedEvent<'_>),
{
    let total = rows.len();
    let mut report = SeedReport::default();

    for (idx, row) in rows.iter().enumerate() {
        let draft = compose_issue(row, options.default_type, mapping);

        if options.dry_run {
            on_event(SeedEvent::Submitting {
                index: idx + 1,
                total,
                draft: &draft,
            });
            report.previewed += 1;
            report.issues.push(IssueReport {
                issue: draft,
                outcome: RowOutcome::DryRun,
                label_warnings: Vec::new(),
            });
            continue;
        }

        let mut label_warnings = Vec::new();
        for label in &draft.labels {
            if let LabelOutcome::Failed { error } =
                ensure_label(tracker, label, &options.label_color).await
            {
                on_event(SeedEvent::LabelFailed {
                    label,
                    error: &error,
                });
                label_warnings.push(LabelWarning {
                    label: label.clone(),
                    error: error.to_string(),
                });
            }
        }
        report.label_warnings += label_warnings.len();

        on_event(SeedEvent::Submitting {
            index: idx + 1,
            total,
            draft: &draft,
        });

        let outcome = match submit_issue(tracker, &draft).await {
            Ok(issue) => {
                on_event(SeedEvent::Created {
                    draft: &draft,
                    issue: &issue,
                });
                report.created += 1;
                RowOutcome::Created {
                    number: issue.number,
                    url: issue.url,
                }
            }
            Err(error) => {
                warn!(title = %draft.title, error = %error, "Issue creation failed");
                on_event(SeedEvent::Failed {
                    draft: &draft,
                    error: &error,
                });
                report.failed += 1;
                RowOutcome::Failed {
                    error: error.to_string(),
                }
            }
        };

        report.issues.push(IssueReport {
            issue: draft,
            outcome,
            label_warnings,
        });
    }

    info!(
        created = report.created,
        failed = report.failed,
        previewed = report.previewed,
        "Seeding finished"
    );
    report
}
