//! Community engagement scoring

use chrono::{DateTime, Utc};

use crate::analysis::activity::issues_created_within;
use crate::analysis::buckets::clamp_score;
use crate::analysis::types::{AnalysisResult, IssueRecord, RepositoryRecord};

const RECENT_ISSUE_WINDOW_DAYS: i64 = 365;

/// Star-to-fork term; raw stars stand in for the ratio when there are no forks
pub(crate) fn star_fork_points(repo: &RepositoryRecord) -> f64 {
    let stars = repo.stargazers_count as f64;
    let ratio = if repo.forks_count == 0 {
        stars
    } else {
        stars / repo.forks_count as f64
    };
    (ratio / 2.0).min(30.0)
}

/// Engagement from popularity ratio, recent issue traffic, watchers and open issues
pub fn community_engagement(
    repo: &RepositoryRecord,
    issues: &[IssueRecord],
    now: DateTime<Utc>,
) -> AnalysisResult<u8> {
    let recent_issues = issues_created_within(issues, RECENT_ISSUE_WINDOW_DAYS, now)?;

    let score = star_fork_points(repo)
        + (recent_issues as f64 * 2.0).min(30.0)
        + (repo.watchers_count as f64).min(20.0)
        + (repo.open_issues_count as f64).min(20.0);

    Ok(clamp_score(score))
}

/// Rough engagement estimate used when issue history is unavailable
#[must_use]
pub fn degraded_community_engagement(repo: &RepositoryRecord) -> u8 {
    clamp_score((repo.stargazers_count as f64 / 10.0).min(100.0))
}
