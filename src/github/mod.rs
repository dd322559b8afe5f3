//! GitHub API operations module
//!
//! Read-only GitHub operations via octocrab, plus the adapter that feeds
//! repository history into the analysis engine.

pub mod client;
pub mod error;
pub mod util;

mod convert;
pub(crate) mod get_repository;
pub(crate) mod list_commits;
pub(crate) mod list_issues;
mod provider;

// Re-export client types
pub use client::{GitHubClient, GitHubClientBuilder};

// Re-export error types
pub use error::{GitHubError, GitHubResult};
pub use util::{await_task, spawn_task};

// Re-export options types
pub use list_commits::ListCommitsOptions;
pub use list_issues::ListIssuesRequest;
pub use provider::GitHubProvider;
