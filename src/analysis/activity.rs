//! Activity counts and issue response time from issue/commit history

use chrono::{DateTime, Utc};

use crate::analysis::clock::{fractional_days, is_within_days};
use crate::analysis::types::{
    AnalysisError, AnalysisResult, CommitRecord, IssueRecord, IssueState,
};

/// Issues opened inside the trailing window of `days`
pub(crate) fn issues_created_within(
    issues: &[IssueRecord],
    days: i64,
    now: DateTime<Utc>,
) -> AnalysisResult<usize> {
    let mut count = 0;
    for issue in issues {
        if is_within_days(issue.created_at.parse("issue.created_at")?, days, now) {
            count += 1;
        }
    }
    Ok(count)
}

/// Still-open issues opened inside the trailing window of `days`
pub(crate) fn open_issues_created_within(
    issues: &[IssueRecord],
    days: i64,
    now: DateTime<Utc>,
) -> AnalysisResult<usize> {
    let mut count = 0;
    for issue in issues.iter().filter(|issue| issue.is_open()) {
        if is_within_days(issue.created_at.parse("issue.created_at")?, days, now) {
            count += 1;
        }
    }
    Ok(count)
}

/// Commits authored inside the trailing window of `days`
pub(crate) fn commits_within(
    commits: &[CommitRecord],
    days: i64,
    now: DateTime<Utc>,
) -> AnalysisResult<usize> {
    let mut count = 0;
    for commit in commits {
        if is_within_days(commit.authored_at.parse("commit.authored_at")?, days, now) {
            count += 1;
        }
    }
    Ok(count)
}

/// Mean days from opening to closing over closed issues that carry both
/// timestamps. `None` when there is no such issue.
pub fn issue_response_time_days(issues: &[IssueRecord]) -> AnalysisResult<Option<f64>> {
    let mut total = 0.0;
    let mut samples = 0usize;

    for issue in issues {
        if issue.state != IssueState::Closed || issue.created_at.is_missing() {
            continue;
        }
        let Some(closed_at) = issue.closed_at.as_ref().filter(|ts| !ts.is_missing()) else {
            continue;
        };

        let opened = issue.created_at.parse("issue.created_at")?;
        let closed = closed_at.parse("issue.closed_at")?;
        let days = fractional_days(opened, closed);
        if days < 0.0 {
            return Err(AnalysisError::ComputationFault {
                metric: "issue_response_time",
                details: format!(
                    "issue closed at {} before it was opened at {}",
                    closed_at.as_str(),
                    issue.created_at.as_str()
                ),
            });
        }

        total += days;
        samples += 1;
    }

    if samples == 0 {
        return Ok(None);
    }
    Ok(Some(total / samples as f64))
}
