//! Conversions from Octocrab models into analysis records

use octocrab::models::{IssueState as GitHubIssueState, Repository, issues::Issue, repos::RepoCommit};

use crate::analysis::{CommitRecord, IssueRecord, IssueState, RepositoryRecord, Timestamp};

impl From<&Repository> for RepositoryRecord {
    fn from(repo: &Repository) -> Self {
        Self {
            owner: repo
                .owner
                .as_ref()
                .map(|owner| owner.login.clone())
                .unwrap_or_default(),
            name: repo.name.clone(),
            pushed_at: repo.pushed_at.into(),
            updated_at: repo.updated_at.into(),
            created_at: repo.created_at.into(),
            stargazers_count: i64::from(repo.stargazers_count.unwrap_or(0)),
            forks_count: i64::from(repo.forks_count.unwrap_or(0)),
            watchers_count: i64::from(repo.watchers_count.unwrap_or(0)),
            open_issues_count: i64::from(repo.open_issues_count.unwrap_or(0)),
            size: i64::from(repo.size.unwrap_or(0)),
            archived: repo.archived.unwrap_or(false),
            description: repo.description.clone(),
            topics: repo.topics.clone().unwrap_or_default(),
            license: repo.license.as_ref().map(|license| license.name.clone()),
            language: repo
                .language
                .as_ref()
                .and_then(|v| v.as_str())
                .map(std::string::ToString::to_string),
        }
    }
}

impl From<&Issue> for IssueRecord {
    fn from(issue: &Issue) -> Self {
        let state = match issue.state {
            GitHubIssueState::Closed => IssueState::Closed,
            _ => IssueState::Open,
        };
        Self {
            state,
            created_at: issue.created_at.into(),
            closed_at: match state {
                IssueState::Closed => issue.closed_at.map(Timestamp::from),
                IssueState::Open => None,
            },
        }
    }
}

impl From<&RepoCommit> for CommitRecord {
    /// Author date, falling back to the committer date
    fn from(commit: &RepoCommit) -> Self {
        let authored = commit
            .commit
            .author
            .as_ref()
            .and_then(|a| a.date)
            .or_else(|| commit.commit.committer.as_ref().and_then(|c| c.date));
        Self {
            authored_at: authored.into(),
        }
    }
}
