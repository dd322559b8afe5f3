//! `RepositoryDataProvider` backed by the GitHub REST API

use std::future::Future;

use chrono::{DateTime, Utc};

use crate::analysis::{
    AnalysisResult, AnalyzerConfig, CommitRecord, IssueRecord, IssueStateFilter,
    RepositoryDataProvider,
};
use crate::github::client::GitHubClient;
use crate::github::list_commits::ListCommitsOptions;
use crate::github::list_issues::ListIssuesRequest;
use crate::github::util::await_task;

/// Feeds issue and commit history from GitHub into the analyzer
#[derive(Clone, Debug)]
pub struct GitHubProvider {
    client: GitHubClient,
    per_page: u8,
    max_pages: u32,
}

impl GitHubProvider {
    #[must_use]
    pub fn new(client: GitHubClient, config: &AnalyzerConfig) -> Self {
        Self {
            client,
            per_page: config.api_page_size,
            max_pages: config.max_pages,
        }
    }

    #[must_use]
    pub fn client(&self) -> &GitHubClient {
        &self.client
    }
}

impl RepositoryDataProvider for GitHubProvider {
    fn fetch_issues(
        &self,
        owner: &str,
        repo: &str,
        state: IssueStateFilter,
    ) -> impl Future<Output = AnalysisResult<Vec<IssueRecord>>> + Send {
        let request = ListIssuesRequest {
            state,
            per_page: self.per_page,
            max_pages: self.max_pages,
            ..ListIssuesRequest::new(owner, repo)
        };
        let task = self.client.list_issues(request);
        let (owner, repo) = (owner.to_string(), repo.to_string());

        async move {
            let issues = await_task(task)
                .await
                .map_err(|e| e.into_unavailable("issues", &owner, &repo))?;
            Ok(issues.iter().map(IssueRecord::from).collect())
        }
    }

    fn fetch_commits(
        &self,
        owner: &str,
        repo: &str,
        since: Option<DateTime<Utc>>,
    ) -> impl Future<Output = AnalysisResult<Vec<CommitRecord>>> + Send {
        let options = ListCommitsOptions {
            since,
            per_page: self.per_page,
            max_pages: self.max_pages,
        };
        let task = self.client.list_commits(owner, repo, options);
        let (owner, repo) = (owner.to_string(), repo.to_string());

        async move {
            let commits = await_task(task)
                .await
                .map_err(|e| e.into_unavailable("commits", &owner, &repo))?;
            Ok(commits.iter().map(CommitRecord::from).collect())
        }
    }
}
