//! Issues API methods

use super::GitHubClient;
use crate::github::error::GitHubError;

impl GitHubClient {
    /// List issues (pull requests excluded), following pagination up to the request's page cap
    #[must_use]
    pub fn list_issues(
        &self,
        request: crate::github::ListIssuesRequest,
    ) -> crate::runtime::AsyncTask<Result<Vec<octocrab::models::issues::Issue>, GitHubError>> {
        crate::github::list_issues::list_issues(self.inner.clone(), request)
    }
}
