//! GitHub Issues listing operation.

use crate::analysis::IssueStateFilter;
use crate::github::{error::GitHubError, util::spawn_task};
use crate::runtime::AsyncTask;
use log::debug;
use octocrab::models::issues::Issue;
use octocrab::{Octocrab, Page, params};
use std::sync::Arc;

/// Request parameters for listing issues
#[derive(Debug, Clone)]
pub struct ListIssuesRequest {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Filter by issue state
    pub state: IssueStateFilter,
    /// Results per page (max 100)
    pub per_page: u8,
    /// Stop after this many pages
    pub max_pages: u32,
}

impl ListIssuesRequest {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            state: IssueStateFilter::All,
            per_page: 100,
            max_pages: 10,
        }
    }
}

/// List issues, dropping pull requests (the issues endpoint returns both).
pub(crate) fn list_issues(
    inner: Arc<Octocrab>,
    request: ListIssuesRequest,
) -> AsyncTask<Result<Vec<Issue>, GitHubError>> {
    spawn_task(async move {
        let issues_handler = inner.issues(&request.owner, &request.repo);
        let state = match request.state {
            IssueStateFilter::Open => params::State::Open,
            IssueStateFilter::Closed => params::State::Closed,
            IssueStateFilter::All => params::State::All,
        };
        let mut page: Page<Issue> = issues_handler
            .list()
            .state(state)
            .per_page(request.per_page)
            .send()
            .await
            .map_err(GitHubError::from)?;
        let mut issues = Vec::new();
        let mut pages = 1;

        loop {
            issues.extend(
                std::mem::take(&mut page.items)
                    .into_iter()
                    .filter(|issue| issue.pull_request.is_none()),
            );

            if pages >= request.max_pages {
                break;
            }
            match inner.get_page::<Issue>(&page.next).await? {
                Some(next_page) => {
                    page = next_page;
                    pages += 1;
                }
                None => break,
            }
        }

        debug!(
            "Fetched {} issues for {}/{} over {pages} page(s)",
            issues.len(),
            request.owner,
            request.repo
        );
        Ok(issues)
    })
}
