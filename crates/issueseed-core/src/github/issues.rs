// SPDX-License-Identifier: Apache-2.0

//! Issue submission.

use tracing::{debug, instrument};

use super::{CreatedIssue, IssueTracker, TrackerError};
use crate::compose::IssueDraft;

/// Creates a new GitHub issue from a draft.
///
/// Posts the title, body, labels, and assignees exactly once; nothing is
/// retried and no existing issue is looked up first.
///
/// # Errors
///
/// Returns the classified tracker error if the call fails.
#[instrument(skip_all, fields(title = %draft.title))]
pub async fn submit_issue<T>(tracker: &T, draft: &IssueDraft) -> Result<CreatedIssue, TrackerError>
where
    T: IssueTracker + ?Sized,
{
    debug!(
        labels = ?draft.labels,
        assignees = ?draft.assignees,
        "Creating GitHub issue"
    );
    tracker.create_issue(draft).await
}
