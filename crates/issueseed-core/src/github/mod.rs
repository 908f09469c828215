// SPDX-License-Identifier: Apache-2.0

//! GitHub integration module.
//!
//! The batch runner only talks to the issue tracker through
//! [`IssueTracker`]; [`client::GitHubTracker`] implements it with octocrab.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::compose::IssueDraft;
use crate::error::SeederError;

pub mod client;
pub mod issues;
pub mod labels;

/// Failure of a single remote call, classified by HTTP status.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackerError {
    /// The resource does not exist (HTTP 404).
    #[error("not found: {message}")]
    NotFound {
        /// Message returned by GitHub.
        message: String,
    },

    /// The resource already exists (HTTP 422, code `already_exists`).
    #[error("already exists: {message}")]
    AlreadyExists {
        /// Message returned by GitHub.
        message: String,
    },

    /// The request was rejected as invalid (HTTP 422), e.g. an unknown assignee.
    #[error("validation failed: {message}")]
    Validation {
        /// Message returned by GitHub.
        message: String,
    },

    /// The token was rejected (HTTP 401).
    #[error("bad credentials: {message}")]
    Unauthorized {
        /// Message returned by GitHub.
        message: String,
    },

    /// The token lacks permission (HTTP 403).
    #[error("permission denied: {message}")]
    Forbidden {
        /// Message returned by GitHub.
        message: String,
    },

    /// Primary or secondary rate limit hit (HTTP 429, or 403 mentioning the limit).
    #[error("rate limited: {message}")]
    RateLimited {
        /// Message returned by GitHub.
        message: String,
    },

    /// Any other GitHub error response.
    #[error("GitHub API error (HTTP {status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Message returned by GitHub.
        message: String,
    },

    /// The request never produced a GitHub response.
    #[error("request failed: {message}")]
    Transport {
        /// Underlying error.
        message: String,
    },
}

impl TrackerError {
    /// Classifies a GitHub error response.
    #[must_use]
    pub fn from_status(status: u16, message: String, already_exists: bool) -> Self {
        match status {
            404 => TrackerError::NotFound { message },
            422 if already_exists => TrackerError::AlreadyExists { message },
            422 => TrackerError::Validation { message },
            401 => TrackerError::Unauthorized { message },
            429 => TrackerError::RateLimited { message },
            403 if message.to_lowercase().contains("rate limit") => {
                TrackerError::RateLimited { message }
            }
            403 => TrackerError::Forbidden { message },
            _ => TrackerError::Api { status, message },
        }
    }
}

/// An issue created on GitHub.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedIssue {
    /// Issue number.
    pub number: u64,
    /// Issue URL.
    pub url: String,
}

/// Remote operations the batch runner depends on.
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Fetches a label by name; `Ok` means it exists.
    async fn get_label(&self, name: &str) -> Result<(), TrackerError>;

    /// Creates a label with the given hex color.
    async fn create_label(&self, name: &str, color: &str) -> Result<(), TrackerError>;

    /// Creates an issue.
    async fn create_issue(&self, draft: &IssueDraft) -> Result<CreatedIssue, TrackerError>;
}

/// Parses an owner/repo string to extract owner and repo.
///
/// Validates format: exactly one `/`, non-empty parts.
///
/// # Errors
///
/// Returns [`SeederError::InvalidRepo`] if the format is invalid.
pub fn parse_owner_repo(s: &str) -> Result<(String, String), SeederError> {
    let parts: Vec<&str> = s.split('/').collect();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return Err(SeederError::InvalidRepo {
            value: s.to_string(),
        });
    }
    Ok((parts[0].to_string(), parts[1].to_string()))
}
