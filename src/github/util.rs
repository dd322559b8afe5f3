//! GitHub API utilities

use crate::github::error::{GitHubError, GitHubResult};
use crate::runtime::AsyncTask;
use std::future::Future;

/// Spawn an async task for GitHub API operations.
#[inline]
pub fn spawn_task<T, F>(work: F) -> AsyncTask<T>
where
    T: Send + 'static,
    F: Future<Output = T> + Send + 'static,
{
    AsyncTask::spawn_async(work)
}

/// Wait for a spawned API call, folding a dropped task into the error type.
pub async fn await_task<T>(task: AsyncTask<GitHubResult<T>>) -> GitHubResult<T>
where
    T: Send + 'static,
{
    task.await
        .map_err(|e| GitHubError::TaskCancelled(e.to_string()))?
}
