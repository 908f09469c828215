// SPDX-License-Identifier: Apache-2.0

//! Label existence checks.

use tracing::{debug, instrument, warn};

use super::{IssueTracker, TrackerError};

/// Result of ensuring that a label exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelOutcome {
    /// The label was already present (or created concurrently by someone else).
    Existing,
    /// The label was created by this call.
    Created,
    /// The label could not be created.
    Failed {
        /// Reason reported by the tracker.
        error: TrackerError,
    },
}

/// Makes sure `name` exists, creating it with `color` if it does not.
///
/// Any failed lookup, not only a 404, falls through to the create. Only a
/// failed create is reported as [`LabelOutcome::Failed`].
///
/// A creation rejected with `already_exists` counts as [`LabelOutcome::Existing`]:
/// the label appeared between the lookup and the create.
#[instrument(skip(tracker))]
pub async fn ensure_label<T>(tracker: &T, name: &str, color: &str) -> LabelOutcome
where
    T: IssueTracker + ?Sized,
{
    match tracker.get_label(name).await {
        Ok(()) => {
            debug!("Label exists");
            return LabelOutcome::Existing;
        }
        Err(TrackerError::NotFound { .. }) => debug!("Label missing"),
        Err(error) => debug!(error = %error, "Label lookup failed, creating anyway"),
    }

    match tracker.create_label(name, color).await {
        Ok(()) => LabelOutcome::Created,
        Err(TrackerError::AlreadyExists { .. }) => {
            debug!("Label created concurrently");
            LabelOutcome::Existing
        }
        Err(error) => {
            warn!(error = %error, "Label creation failed");
            LabelOutcome::Failed { error }
        }
    }
}
