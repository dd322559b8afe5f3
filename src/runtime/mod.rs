//! Runtime module
//!
//! Task handles used by the GitHub API layer.

pub mod async_task;

pub use async_task::AsyncTask;
