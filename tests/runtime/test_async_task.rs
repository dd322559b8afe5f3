//! Tests for the async task handle.

use repo_revival::github::{GitHubError, await_task, spawn_task};
use repo_revival::runtime::AsyncTask;
use tokio::sync::oneshot;

#[tokio::test]
async fn test_async_task_spawn_async() {
    let task = AsyncTask::spawn_async(async { 42 });
    let result = task.await.unwrap();
    assert_eq!(result, 42);
}

#[tokio::test]
async fn test_dropped_sender_is_an_error() {
    let (tx, rx) = oneshot::channel::<u8>();
    drop(tx);
    assert!(AsyncTask::new(rx).await.is_err());
}

#[tokio::test]
async fn test_await_task_flattens_results() {
    let ok = spawn_task(async { Ok::<_, GitHubError>(vec![1, 2, 3]) });
    assert_eq!(await_task(ok).await.unwrap(), vec![1, 2, 3]);

    let failed = spawn_task(async { Err::<Vec<u8>, _>(GitHubError::RateLimitExceeded) });
    assert!(matches!(
        await_task(failed).await,
        Err(GitHubError::RateLimitExceeded)
    ));
}

#[tokio::test]
async fn test_await_task_reports_cancellation() {
    let (tx, rx) = oneshot::channel::<Result<u8, GitHubError>>();
    drop(tx);
    assert!(matches!(
        await_task(AsyncTask::new(rx)).await,
        Err(GitHubError::TaskCancelled(_))
    ));
}
