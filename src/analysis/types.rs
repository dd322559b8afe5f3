//! Type definitions for repository analysis

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::analysis::clock::Timestamp;

/// Failure taxonomy of the analysis engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("{data} unavailable for {repository}: {reason}")]
    DataUnavailable {
        data: &'static str,
        repository: String,
        reason: String,
    },

    #[error("Computation fault in {metric}: {details}")]
    ComputationFault {
        metric: &'static str,
        details: String,
    },

    #[error("Malformed timestamp in {field}: {value:?}")]
    MalformedTimestamp { field: &'static str, value: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Repository metadata as supplied by the caller
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct RepositoryRecord {
    pub owner: String,
    pub name: String,
    pub pushed_at: Timestamp,
    pub updated_at: Timestamp,
    pub created_at: Timestamp,
    pub stargazers_count: i64,
    pub forks_count: i64,
    pub watchers_count: i64,
    pub open_issues_count: i64,
    /// Unitless size metric reported by the host
    pub size: i64,
    pub archived: bool,
    pub description: Option<String>,
    pub topics: Vec<String>,
    pub license: Option<String>,
    pub language: Option<String>,
}

impl RepositoryRecord {
    /// `owner/name`
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IssueState {
    Open,
    Closed,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct IssueRecord {
    pub state: IssueState,
    pub created_at: Timestamp,
    /// Only present once the issue has been closed
    pub closed_at: Option<Timestamp>,
}

impl IssueRecord {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == IssueState::Open
    }
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct CommitRecord {
    pub authored_at: Timestamp,
}

/// Size bucket of a repository
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TechnicalComplexity {
    Low,
    Medium,
    High,
}

impl TechnicalComplexity {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Complete assessment of one repository.
///
/// Produced once per analysis and never mutated afterwards.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct RepositoryAnalysis {
    pub repository: RepositoryRecord,
    pub abandonment_score: u8,
    pub revival_potential: u8,
    pub last_commit_age_days: u64,
    /// Mean time to close an issue, `None` when no closed issue carries both timestamps
    pub issue_response_time_days: Option<f64>,
    pub community_engagement: u8,
    pub technical_complexity: TechnicalComplexity,
    pub market_relevance: u8,
    pub reasons: Vec<String>,
    pub recommendations: Vec<String>,
    /// Whether the reduced-fidelity formulas were used
    pub degraded: bool,
}
