//! Shared fixtures for integration tests.
#![allow(dead_code)]

use std::future::Future;
use std::sync::Mutex;

use chrono::{DateTime, Duration, TimeZone, Utc};
use repo_revival::{
    AnalysisError, AnalysisResult, CommitRecord, IssueRecord, IssueState, IssueStateFilter,
    RepositoryDataProvider, RepositoryRecord, Timestamp,
};

/// The "now" every integration test runs at
pub fn reference_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap()
}

pub fn days_ago(days: i64) -> Timestamp {
    (reference_instant() - Duration::days(days)).into()
}

/// A plain, licensed, mid-sized repository last pushed `pushed_days_ago`
pub fn repository(pushed_days_ago: i64) -> RepositoryRecord {
    RepositoryRecord {
        owner: "acme".to_string(),
        name: "widget".to_string(),
        pushed_at: days_ago(pushed_days_ago),
        updated_at: days_ago(pushed_days_ago),
        created_at: days_ago(1_000),
        stargazers_count: 120,
        forks_count: 12,
        watchers_count: 8,
        open_issues_count: 4,
        size: 2_400,
        archived: false,
        description: Some("Widget rendering toolkit for terminals".to_string()),
        topics: vec!["tui".to_string()],
        license: Some("MIT License".to_string()),
        language: Some("Rust".to_string()),
    }
}

pub fn open_issue(created_days_ago: i64) -> IssueRecord {
    IssueRecord {
        state: IssueState::Open,
        created_at: days_ago(created_days_ago),
        closed_at: None,
    }
}

pub fn closed_issue(created_days_ago: i64, open_hours: i64) -> IssueRecord {
    let created = reference_instant() - Duration::days(created_days_ago);
    IssueRecord {
        state: IssueState::Closed,
        created_at: created.into(),
        closed_at: Some((created + Duration::hours(open_hours)).into()),
    }
}

pub fn commit(days_ago_authored: i64) -> CommitRecord {
    CommitRecord {
        authored_at: days_ago(days_ago_authored),
    }
}

pub fn unavailable(data: &'static str) -> AnalysisError {
    AnalysisError::DataUnavailable {
        data,
        repository: "acme/widget".to_string(),
        reason: "connection refused".to_string(),
    }
}

/// Provider returning scripted results and recording what it was asked for
pub struct StaticProvider {
    issues: AnalysisResult<Vec<IssueRecord>>,
    commits: AnalysisResult<Vec<CommitRecord>>,
    pub issue_requests: Mutex<Vec<(String, IssueStateFilter)>>,
    pub commit_requests: Mutex<Vec<(String, Option<DateTime<Utc>>)>>,
}

impl StaticProvider {
    pub fn new(
        issues: AnalysisResult<Vec<IssueRecord>>,
        commits: AnalysisResult<Vec<CommitRecord>>,
    ) -> Self {
        Self {
            issues,
            commits,
            issue_requests: Mutex::new(Vec::new()),
            commit_requests: Mutex::new(Vec::new()),
        }
    }

    pub fn empty() -> Self {
        Self::new(Ok(Vec::new()), Ok(Vec::new()))
    }

    pub fn failing() -> Self {
        Self::new(Err(unavailable("issues")), Err(unavailable("commits")))
    }
}

impl RepositoryDataProvider for StaticProvider {
    fn fetch_issues(
        &self,
        owner: &str,
        repo: &str,
        state: IssueStateFilter,
    ) -> impl Future<Output = AnalysisResult<Vec<IssueRecord>>> + Send {
        self.issue_requests
            .lock()
            .unwrap()
            .push((format!("{owner}/{repo}"), state));
        let result = self.issues.clone();
        async move { result }
    }

    fn fetch_commits(
        &self,
        owner: &str,
        repo: &str,
        since: Option<DateTime<Utc>>,
    ) -> impl Future<Output = AnalysisResult<Vec<CommitRecord>>> + Send {
        self.commit_requests
            .lock()
            .unwrap()
            .push((format!("{owner}/{repo}"), since));
        let result = self.commits.clone();
        async move { result }
    }
}
