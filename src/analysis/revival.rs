//! Revival potential scoring

use chrono::{DateTime, Utc};

use crate::analysis::activity::issues_created_within;
use crate::analysis::buckets::{Bucket, bucket_points, clamp_score};
use crate::analysis::clock::{days_since, signed_days};
use crate::analysis::types::{AnalysisResult, IssueRecord, RepositoryRecord};

const ACTIVE_USERS: &[Bucket] = &[
    Bucket::above(10, 25),
    Bucket::above(5, 20),
    Bucket::above(2, 15),
    Bucket::above(0, 10),
];

// Between one and five years old is the sweet spot
const MATURITY: &[Bucket] = &[
    Bucket::between(365, 1825, 20),
    Bucket::above(180, 15),
    Bucket::above(90, 10),
];

const SIZE_FIT: &[Bucket] = &[Bucket::between(100, 10_000, 10), Bucket::above(50, 5)];

const ACTIVE_USER_WINDOW_DAYS: i64 = 365;
const DOCUMENTATION_POINTS: f64 = 5.0;

const DEGRADED_MATURITY: &[Bucket] = &[Bucket::between(365, 1825, 25), Bucket::above(180, 15)];
const DEGRADED_OPEN_ISSUES: &[Bucket] = &[Bucket::above(5, 10)];
const DEGRADED_DOCUMENTATION_POINTS: f64 = 10.0;

/// Description long enough to tell a newcomer what the project is
pub(crate) fn has_meaningful_description(repo: &RepositoryRecord) -> bool {
    repo.description
        .as_deref()
        .is_some_and(|description| description.chars().count() > 20)
}

/// Full-data revival potential, 0 (poor candidate) to 100 (ideal candidate)
pub fn revival_potential(
    repo: &RepositoryRecord,
    issues: &[IssueRecord],
    now: DateTime<Utc>,
) -> AnalysisResult<u8> {
    let stars = repo.stargazers_count as f64;
    let forks = repo.forks_count as f64;
    let interest = (stars / 10.0).min(20.0) + (forks / 5.0).min(10.0);

    let recent_issues = issues_created_within(issues, ACTIVE_USER_WINDOW_DAYS, now)?;
    let user_base = bucket_points(
        ACTIVE_USERS,
        i64::try_from(recent_issues).unwrap_or(i64::MAX),
    );

    let age = days_since(&repo.created_at, "created_at", now)?;
    let maturity = bucket_points(MATURITY, signed_days(age));

    let mut documentation = 0.0;
    if has_meaningful_description(repo) {
        documentation += DOCUMENTATION_POINTS;
    }
    if !repo.topics.is_empty() {
        documentation += DOCUMENTATION_POINTS;
    }
    if repo.license.is_some() {
        documentation += DOCUMENTATION_POINTS;
    }

    let size_fit = bucket_points(SIZE_FIT, repo.size);

    Ok(clamp_score(
        interest + user_base + maturity + documentation + size_fit,
    ))
}

/// Revival potential from the repository record alone
pub fn degraded_revival_potential(repo: &RepositoryRecord, now: DateTime<Utc>) -> AnalysisResult<u8> {
    let stars = repo.stargazers_count as f64;
    let forks = repo.forks_count as f64;
    let interest = (stars / 10.0).min(30.0) + (forks / 5.0).min(15.0);

    let age = days_since(&repo.created_at, "created_at", now)?;
    let maturity = bucket_points(DEGRADED_MATURITY, signed_days(age));

    let mut extras = bucket_points(DEGRADED_OPEN_ISSUES, repo.open_issues_count);
    if has_meaningful_description(repo) {
        extras += DEGRADED_DOCUMENTATION_POINTS;
    }
    if repo.license.is_some() {
        extras += DEGRADED_DOCUMENTATION_POINTS;
    }

    Ok(clamp_score(interest + maturity + extras))
}
