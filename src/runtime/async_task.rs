//! Async task handle for API calls.
//!
//! Work is spawned onto the tokio runtime immediately and the result comes
//! back over a oneshot channel, so independent requests run concurrently
//! even before the caller awaits them.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;

/// A handle to a spawned task that produces a single result.
pub struct AsyncTask<T> {
    rx: oneshot::Receiver<T>,
}

impl<T> AsyncTask<T>
where
    T: Send + 'static,
{
    #[inline]
    #[must_use]
    pub fn new(rx: oneshot::Receiver<T>) -> Self {
        Self { rx }
    }

    /// Spawn an async operation on the current runtime.
    ///
    /// Must be called from within a tokio runtime.
    #[inline]
    pub fn spawn_async<F>(future: F) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        tokio::task::spawn(async move {
            let _ = tx.send(future.await);
        });
        Self::new(rx)
    }
}

impl<T> Future for AsyncTask<T> {
    type Output = Result<T, oneshot::error::RecvError>;

    #[inline]
    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.rx).poll(cx)
    }
}
