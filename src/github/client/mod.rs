//! GitHub API client wrapper
//!
//! Provides a clean API for the read operations the analyzer needs without
//! exposing Octocrab.
//!
//! # Examples
//!
//! ```rust,no_run
//! use repo_revival::{GitHubClient, RepositoryAnalyzer};
//! use repo_revival::github::GitHubProvider;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let gh = GitHubClient::with_token("ghp_...")?;
//!     let repo = gh.get_repository("owner", "repo").await??;
//!
//!     let analyzer = RepositoryAnalyzer::new(GitHubProvider::new(gh, &Default::default()));
//!     let analysis = analyzer.analyze(&repo).await?;
//!     println!("abandonment: {}", analysis.abandonment_score);
//!
//!     Ok(())
//! }
//! ```

use crate::github::error::{GitHubError, GitHubResult};
use octocrab::Octocrab;
use std::sync::Arc;

mod issues;
mod repositories;

/// GitHub API client wrapper that encapsulates Octocrab.
///
/// Cloning is cheap (Arc clone).
#[derive(Clone, Debug)]
pub struct GitHubClient {
    inner: Arc<Octocrab>,
}

impl GitHubClient {
    /// Create a new client builder
    #[must_use]
    pub fn builder() -> GitHubClientBuilder {
        GitHubClientBuilder::new()
    }

    /// Convenience: create client with personal access token
    pub fn with_token(token: impl Into<String>) -> GitHubResult<Self> {
        Self::builder().personal_token(token).build()
    }
}

/// Builder for creating `GitHubClient`
pub struct GitHubClientBuilder {
    token: Option<String>,
    base_uri: Option<String>,
}

impl GitHubClientBuilder {
    /// Create a new builder
    #[must_use]
    pub fn new() -> Self {
        Self {
            token: None,
            base_uri: None,
        }
    }

    /// Set personal access token for authentication
    pub fn personal_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set base URI (for GitHub Enterprise)
    pub fn base_uri(mut self, uri: impl Into<String>) -> Self {
        self.base_uri = Some(uri.into());
        self
    }

    /// Build the `GitHubClient`. Anonymous access works but is heavily rate limited.
    pub fn build(self) -> GitHubResult<GitHubClient> {
        // ring and aws-lc are both linked; rustls needs one process-wide default
        let _ = rustls::crypto::ring::default_provider().install_default();

        let mut builder = Octocrab::builder();

        if let Some(token) = self.token {
            builder = builder.personal_token(token);
        }

        if let Some(uri) = self.base_uri {
            builder = builder
                .base_uri(uri.as_str())
                .map_err(|e| GitHubError::ClientSetup(e.to_string()))?;
        }

        let octocrab = builder
            .build()
            .map_err(|e| GitHubError::ClientSetup(e.to_string()))?;

        Ok(GitHubClient {
            inner: Arc::new(octocrab),
        })
    }
}

impl Default for GitHubClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
