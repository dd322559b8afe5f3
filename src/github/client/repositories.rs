//! Repositories API methods

use super::GitHubClient;
use crate::analysis::RepositoryRecord;
use crate::github::error::GitHubError;

impl GitHubClient {
    /// Fetch repository metadata as an analysis record
    pub fn get_repository(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> crate::runtime::AsyncTask<Result<RepositoryRecord, GitHubError>> {
        crate::github::get_repository::get_repository(self.inner.clone(), owner, repo)
    }

    /// List commits, following pagination up to the options' page cap
    pub fn list_commits(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        options: crate::github::ListCommitsOptions,
    ) -> crate::runtime::AsyncTask<Result<Vec<octocrab::models::repos::RepoCommit>, GitHubError>>
    {
        crate::github::list_commits::list_commits(self.inner.clone(), owner, repo, options)
    }
}
