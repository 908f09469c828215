// SPDX-License-Identifier: Apache-2.0

//! Octocrab-backed [`IssueTracker`].

use async_trait::async_trait;
use octocrab::Octocrab;
use octocrab::models::Label;
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use tracing::{debug, info, instrument};

use super::{CreatedIssue, IssueTracker, TrackerError};
use crate::compose::IssueDraft;
use crate::error::SeederError;

/// Issue tracker for a single GitHub repository.
#[derive(Clone)]
pub struct GitHubTracker {
    client: Octocrab,
    owner: String,
    repo: String,
}

impl GitHubTracker {
    /// Creates an authenticated tracker using a provided token.
    ///
    /// The token is not validated here; a bad token surfaces as
    /// [`TrackerError::Unauthorized`] on the first call.
    ///
    /// # Errors
    ///
    /// Returns an error if the Octocrab client cannot be built.
    #[instrument(skip(token))]
    pub fn new(token: &SecretString, owner: &str, repo: &str) -> Result<Self, SeederError> {
        info!("Creating GitHub client with provided token");

        let client = Octocrab::builder()
            .personal_token(token.expose_secret().to_string())
            .build()
            .map_err(|e| SeederError::GitHub {
                message: format!("Failed to build GitHub client: {e}"),
            })?;

        debug!("Created authenticated GitHub client");
        Ok(Self {
            client,
            owner: owner.to_string(),
            repo: repo.to_string(),
        })
    }

    fn label_route(&self, name: &str) -> String {
        let encoded = utf8_percent_encode(name, NON_ALPHANUMERIC);
        format!("/repos/{}/{}/labels/{encoded}", self.owner, self.repo)
    }
}

/// Maps an octocrab error onto a [`TrackerError`].
fn classify(err: octocrab::Error) -> TrackerError {
    if let octocrab::Error::GitHub { source, .. } = &err {
        let already_exists = source
            .errors
            .iter()
            .flatten()
            .any(|e| e.get("code").and_then(Value::as_str) == Some("already_exists"));
        return TrackerError::from_status(
            source.status_code.as_u16(),
            source.message.clone(),
            already_exists,
        );
    }
    TrackerError::Transport {
        message: err.to_string(),
    }
}

#[async_trait]
impl IssueTracker for GitHubTracker {
    #[instrument(skip(self), fields(owner = %self.owner, repo = %self.repo))]
    async fn get_label(&self, name: &str) -> Result<(), TrackerError> {
        self.client
            .get::<Label, _, _>(self.label_route(name), None::<&()>)
            .await
            .map_err(classify)?;
        Ok(())
    }

    #[instrument(skip(self), fields(owner = %self.owner, repo = %self.repo))]
    async fn create_label(&self, name: &str, color: &str) -> Result<(), TrackerError> {
        let route = format!("/repos/{}/{}/labels", self.owner, self.repo);
        let payload = serde_json::json!({ "name": name, "color": color });

        self.client
            .post::<_, Label>(route, Some(&payload))
            .await
            .map_err(classify)?;

        debug!("Label created");
        Ok(())
    }

    #[instrument(skip(self, draft), fields(owner = %self.owner, repo = %self.repo))]
    async fn create_issue(&self, draft: &IssueDraft) -> Result<CreatedIssue, TrackerError> {
        let issue = self
            .client
            .issues(&self.owner, &self.repo)
            .create(&draft.title)
            .body(&draft.body)
            .labels(draft.labels.clone())
            .assignees(draft.assignees.clone())
            .send()
            .await
            .map_err(classify)?;

        debug!(number = issue.number, url = %issue.html_url, "Issue created successfully");

        Ok(CreatedIssue {
            number: issue.number,
            url: issue.html_url.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn label_route_encodes_special_characters() {
        let tracker =
            GitHubTracker::new(&SecretString::from("ghp_test".to_string()), "turma", "web")
                .unwrap();

        assert_eq!(
            tracker.label_route("SQUAD:Squad Azul"),
            "/repos/turma/web/labels/SQUAD%3ASquad%20Azul"
        );
        assert_eq!(
            tracker.label_route("tarefa"),
            "/repos/turma/web/labels/tarefa"
        );
    }
}
