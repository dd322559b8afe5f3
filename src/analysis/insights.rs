//! Human-readable reasons and recommendations

use chrono::{DateTime, Utc};

use crate::analysis::activity::open_issues_created_within;
use crate::analysis::types::{AnalysisResult, IssueRecord, RepositoryRecord};

const YEARS_AFTER_DAYS: u64 = 365;
const MONTHS_AFTER_DAYS: u64 = 180;
const BACKLOG_REASON_THRESHOLD: i64 = 10;
const RECENT_ISSUE_WINDOW_DAYS: i64 = 90;
const UNADDRESSED_RECENT_THRESHOLD: usize = 5;

const HIGH_REVIVAL: u8 = 70;
const HIGH_ABANDONMENT: u8 = 70;
const TAKEOVER_REVIVAL: u8 = 50;
const LARGE_AUDIENCE_STARS: i64 = 100;
const MANY_FORKS: i64 = 10;
const CONTRIBUTION_BACKLOG: i64 = 20;

pub(crate) const MANUAL_REVIEW: &str =
    "Limited data available: review the repository manually before committing to a revival";

fn inactivity_phrase(last_commit_age_days: u64) -> Option<String> {
    if last_commit_age_days > YEARS_AFTER_DAYS {
        let years = last_commit_age_days as f64 / 365.0;
        Some(format!("No commits for {years:.1} years"))
    } else if last_commit_age_days > MONTHS_AFTER_DAYS {
        let months = last_commit_age_days / 30;
        Some(format!("No commits for {months} months"))
    } else {
        None
    }
}

/// Why the repository looks abandoned, most significant first
pub fn reasons(
    repo: &RepositoryRecord,
    issues: &[IssueRecord],
    last_commit_age_days: u64,
    now: DateTime<Utc>,
) -> AnalysisResult<Vec<String>> {
    let mut reasons = Vec::new();

    if let Some(phrase) = inactivity_phrase(last_commit_age_days) {
        reasons.push(phrase);
    }

    if repo.open_issues_count > BACKLOG_REASON_THRESHOLD {
        reasons.push(format!("{} open issues", repo.open_issues_count));
    }

    if repo.archived {
        reasons.push("Repository is archived by its owner".to_string());
    }

    let unaddressed = open_issues_created_within(issues, RECENT_ISSUE_WINDOW_DAYS, now)?;
    if unaddressed > UNADDRESSED_RECENT_THRESHOLD {
        reasons.push(format!(
            "{unaddressed} issues opened in the last 90 days remain unaddressed"
        ));
    }

    Ok(reasons)
}

/// Independent suggestions for a prospective maintainer; every matching rule contributes
#[must_use]
pub fn recommendations(
    repo: &RepositoryRecord,
    abandonment_score: u8,
    revival_potential: u8,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if revival_potential > HIGH_REVIVAL {
        recommendations.push("High revival potential: strong candidate for a new maintainer".to_string());
    }

    if repo.stargazers_count > LARGE_AUDIENCE_STARS {
        recommendations.push(format!(
            "Existing audience of {} stars to build on",
            repo.stargazers_count
        ));
    }

    if abandonment_score > HIGH_ABANDONMENT && revival_potential > TAKEOVER_REVIVAL {
        recommendations.push(
            "Ideal takeover case: clearly abandoned but still worth reviving".to_string(),
        );
    }

    if repo.forks_count > MANY_FORKS {
        recommendations.push(format!(
            "Check the {} forks for an actively maintained alternative",
            repo.forks_count
        ));
    }

    if repo.license.is_none() {
        recommendations
            .push("No license: ask the owner for permission before forking".to_string());
    }

    if repo.open_issues_count > CONTRIBUTION_BACKLOG {
        recommendations.push(format!(
            "{} open issues make a ready-made starting point for contributions",
            repo.open_issues_count
        ));
    }

    recommendations
}

/// The single reason reported by a degraded analysis
#[must_use]
pub(crate) fn degraded_reason(last_commit_age_days: u64) -> String {
    inactivity_phrase(last_commit_age_days)
        .unwrap_or_else(|| format!("Last push {last_commit_age_days} days ago"))
}
