//! Abandonment scoring

use chrono::{DateTime, Utc};

use crate::analysis::activity::commits_within;
use crate::analysis::buckets::{Bucket, bucket_points, clamp_score};
use crate::analysis::clock::{days_since, signed_days};
use crate::analysis::types::{AnalysisResult, CommitRecord, IssueRecord, RepositoryRecord};

const STALENESS: &[Bucket] = &[
    Bucket::above(365, 40),
    Bucket::above(180, 30),
    Bucket::above(90, 20),
    Bucket::above(30, 10),
];

const COMMIT_INACTIVITY: &[Bucket] = &[
    Bucket::below(1, 20),
    Bucket::below(5, 15),
    Bucket::below(10, 10),
];

const UNRESPONSIVE_AFTER_DAYS: u64 = 30;
const UNRESPONSIVE_WEIGHT: f64 = 30.0;
const COMMIT_WINDOW_DAYS: i64 = 365;
const ARCHIVED_POINTS: f64 = 10.0;

const DEGRADED_STALENESS: &[Bucket] = &[
    Bucket::above(365, 60),
    Bucket::above(180, 40),
    Bucket::above(90, 25),
    Bucket::above(30, 10),
];

const DEGRADED_ARCHIVED_POINTS: f64 = 20.0;
const DEGRADED_OPEN_ISSUES: &[Bucket] = &[Bucket::above(20, 20)];

/// Full-data abandonment score, 0 (healthy) to 100 (abandoned)
pub fn abandonment_score(
    repo: &RepositoryRecord,
    issues: &[IssueRecord],
    commits: &[CommitRecord],
    now: DateTime<Utc>,
) -> AnalysisResult<u8> {
    let push_age = days_since(&repo.pushed_at, "pushed_at", now)?;
    let staleness = bucket_points(STALENESS, signed_days(push_age));

    let unresponsive = unresponsive_issue_points(issues, now)?;

    let recent_commits = commits_within(commits, COMMIT_WINDOW_DAYS, now)?;
    let inactivity = bucket_points(
        COMMIT_INACTIVITY,
        i64::try_from(recent_commits).unwrap_or(i64::MAX),
    );

    let archived = if repo.archived { ARCHIVED_POINTS } else { 0.0 };

    Ok(clamp_score(staleness + unresponsive + inactivity + archived))
}

/// Share of open issues older than the response threshold, scaled to 30 points
fn unresponsive_issue_points(issues: &[IssueRecord], now: DateTime<Utc>) -> AnalysisResult<f64> {
    let mut open = 0usize;
    let mut stale = 0usize;
    for issue in issues.iter().filter(|issue| issue.is_open()) {
        open += 1;
        if days_since(&issue.created_at, "issue.created_at", now)? > UNRESPONSIVE_AFTER_DAYS {
            stale += 1;
        }
    }

    if open == 0 {
        return Ok(0.0);
    }
    Ok((stale as f64 / open as f64 * UNRESPONSIVE_WEIGHT).round())
}

/// Abandonment score from the repository record alone
pub fn degraded_abandonment_score(repo: &RepositoryRecord, now: DateTime<Utc>) -> AnalysisResult<u8> {
    let push_age = days_since(&repo.pushed_at, "pushed_at", now)?;
    let staleness = bucket_points(DEGRADED_STALENESS, signed_days(push_age));
    let archived = if repo.archived {
        DEGRADED_ARCHIVED_POINTS
    } else {
        0.0
    };
    let backlog = bucket_points(DEGRADED_OPEN_ISSUES, repo.open_issues_count);

    Ok(clamp_score(staleness + archived + backlog))
}
