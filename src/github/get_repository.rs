//! GitHub repository metadata fetch.

use crate::analysis::RepositoryRecord;
use crate::github::{error::GitHubError, util::spawn_task};
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use std::sync::Arc;

/// Fetch a repository and convert it to an analysis record.
pub(crate) fn get_repository(
    inner: Arc<Octocrab>,
    owner: impl Into<String>,
    repo: impl Into<String>,
) -> AsyncTask<Result<RepositoryRecord, GitHubError>> {
    let owner = owner.into();
    let repo = repo.into();

    spawn_task(async move {
        let repository = inner
            .repos(&owner, &repo)
            .get()
            .await
            .map_err(GitHubError::from)?;

        let mut record = RepositoryRecord::from(&repository);
        if record.owner.is_empty() {
            record.owner = owner;
        }
        Ok(record)
    })
}
