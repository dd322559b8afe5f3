//! Data provider seam between the engine and wherever history comes from

use std::future::Future;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::types::{AnalysisResult, CommitRecord, IssueRecord};

/// Which issues to request from the provider
#[derive(Clone, Copy, Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IssueStateFilter {
    Open,
    Closed,
    #[default]
    All,
}

impl IssueStateFilter {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::All => "all",
        }
    }
}

/// Source of issue and commit history for a repository.
///
/// Each operation fails independently with `AnalysisError::DataUnavailable`;
/// the analyzer decides how to degrade.
pub trait RepositoryDataProvider: Send + Sync {
    fn fetch_issues(
        &self,
        owner: &str,
        repo: &str,
        state: IssueStateFilter,
    ) -> impl Future<Output = AnalysisResult<Vec<IssueRecord>>> + Send;

    fn fetch_commits(
        &self,
        owner: &str,
        repo: &str,
        since: Option<DateTime<Utc>>,
    ) -> impl Future<Output = AnalysisResult<Vec<CommitRecord>>> + Send;
}
