//! GitHub API error types

use thiserror::Error;

use crate::analysis::AnalysisError;

/// Error types for GitHub API operations
#[derive(Debug, Error)]
pub enum GitHubError {
    /// Octocrab library error
    #[error("Octocrab error: {0}")]
    Octocrab(octocrab::Error),

    /// Resource not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Authentication required or failed
    #[error("Authentication required")]
    AuthRequired,

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Client setup/configuration error
    #[error("Client setup failed: {0}")]
    ClientSetup(String),

    /// The spawned request task went away before answering
    #[error("Request task cancelled: {0}")]
    TaskCancelled(String),
}

/// Convenience result alias for GitHub operations
pub type GitHubResult<T> = Result<T, GitHubError>;

impl From<octocrab::Error> for GitHubError {
    fn from(err: octocrab::Error) -> Self {
        if let octocrab::Error::GitHub { source, .. } = &err {
            let message = source.message.clone();
            match source.status_code.as_u16() {
                401 => return GitHubError::AuthRequired,
                404 => return GitHubError::NotFound(message),
                429 => return GitHubError::RateLimitExceeded,
                403 if message.to_lowercase().contains("rate limit") => {
                    return GitHubError::RateLimitExceeded;
                }
                _ => {}
            }
        }
        GitHubError::Octocrab(err)
    }
}

impl GitHubError {
    /// Reports this failure as missing history for the analysis engine
    #[must_use]
    pub fn into_unavailable(self, data: &'static str, owner: &str, repo: &str) -> AnalysisError {
        AnalysisError::DataUnavailable {
            data,
            repository: format!("{owner}/{repo}"),
            reason: self.to_string(),
        }
    }
}
