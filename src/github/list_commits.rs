//! GitHub repository commits listing operation.

use crate::github::{error::GitHubError, util::spawn_task};
use crate::runtime::AsyncTask;
use chrono::{DateTime, Utc};
use log::debug;
use octocrab::{Octocrab, Page, models::repos::RepoCommit};
use std::sync::Arc;

/// Options for listing commits in a repository.
#[derive(Debug, Clone)]
pub struct ListCommitsOptions {
    /// Only show commits after this date.
    pub since: Option<DateTime<Utc>>,
    /// Number of results per page (max 100).
    pub per_page: u8,
    /// Stop after this many pages.
    pub max_pages: u32,
}

impl Default for ListCommitsOptions {
    fn default() -> Self {
        Self {
            since: None,
            per_page: 100,
            max_pages: 10,
        }
    }
}

/// List commits in a repository.
pub(crate) fn list_commits(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    options: ListCommitsOptions,
) -> AsyncTask<Result<Vec<RepoCommit>, GitHubError>> {
    let owner = owner.into();
    let repo = repo.into();

    spawn_task(async move {
        let repos_handler = inner.repos(&owner, &repo);
        let mut request = repos_handler.list_commits().per_page(options.per_page);

        if let Some(since) = options.since {
            request = request.since(since);
        }

        let mut page: Page<RepoCommit> = request.send().await.map_err(GitHubError::from)?;
        let mut commits = Vec::new();
        let mut pages = 1;

        loop {
            commits.append(&mut page.items);

            if pages >= options.max_pages {
                break;
            }
            match inner.get_page::<RepoCommit>(&page.next).await? {
                Some(next_page) => {
                    page = next_page;
                    pages += 1;
                }
                None => break,
            }
        }

        debug!(
            "Fetched {} commits for {owner}/{repo} over {pages} page(s)",
            commits.len()
        );
        Ok(commits)
    })
}
