//! Repository abandonment and revival analysis
//!
//! Pure metric calculators live in the submodules; this module composes them
//! into a single [`RepositoryAnalysis`] and owns the fallback from the
//! full-data formulas to the degraded ones.

mod abandonment;
mod activity;
mod buckets;
mod clock;
mod community;
mod config;
mod insights;
mod profile;
mod provider;
mod revival;
mod types;

pub use abandonment::{abandonment_score, degraded_abandonment_score};
pub use activity::issue_response_time_days;
pub use buckets::{Bucket, bucket_points, clamp_score};
pub use clock::{Clock, FixedClock, MILLIS_PER_DAY, SystemClock, Timestamp, days_between, days_since};
pub use community::{community_engagement, degraded_community_engagement};
pub use config::{AnalyzerConfig, MAX_COMMIT_WINDOW_DAYS};
pub use insights::{reasons, recommendations};
pub use profile::{POPULAR_LANGUAGES, market_relevance, technical_complexity};
pub use provider::{IssueStateFilter, RepositoryDataProvider};
pub use revival::{degraded_revival_potential, revival_potential};
pub use types::{
    AnalysisError, AnalysisResult, CommitRecord, IssueRecord, IssueState, RepositoryAnalysis,
    RepositoryRecord, TechnicalComplexity,
};

use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt};
use log::{debug, info, warn};

/// Analyzes repositories using history from a [`RepositoryDataProvider`]
pub struct RepositoryAnalyzer<P, C = SystemClock> {
    provider: P,
    clock: C,
    config: AnalyzerConfig,
}

impl<P: RepositoryDataProvider> RepositoryAnalyzer<P, SystemClock> {
    pub fn new(provider: P) -> Self {
        Self::with_clock(provider, SystemClock)
    }
}

impl<P, C> RepositoryAnalyzer<P, C>
where
    P: RepositoryDataProvider,
    C: Clock,
{
    pub fn with_clock(provider: P, clock: C) -> Self {
        Self {
            provider,
            clock,
            config: AnalyzerConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: AnalyzerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Analyzes one repository.
    ///
    /// Missing history never fails the analysis. The only error surfaced is a
    /// malformed timestamp on the repository record itself.
    pub async fn analyze(&self, repo: &RepositoryRecord) -> AnalysisResult<RepositoryAnalysis> {
        let now = self.clock.now();
        let since = self.config.commit_window_start(now);

        let (issues, commits) = tokio::join!(
            self.provider
                .fetch_issues(&repo.owner, &repo.name, self.config.issue_state),
            self.provider.fetch_commits(&repo.owner, &repo.name, since),
        );

        let analysis = match (issues, commits) {
            (Err(issue_err), Err(commit_err)) => {
                warn!(
                    "No history available for {}: {issue_err}; {commit_err}. Using degraded analysis",
                    repo.full_name()
                );
                analyze_degraded(repo, now)
            }
            (issues, commits) => {
                let issues = issues.unwrap_or_else(|e| {
                    warn!("Continuing without issues: {e}");
                    Vec::new()
                });
                let commits = commits.unwrap_or_else(|e| {
                    warn!("Continuing without commits: {e}");
                    Vec::new()
                });
                analyze_with_history(repo, &issues, &commits, now)
            }
        }?;

        info!(
            "Analyzed {}: abandonment {}, revival {}{}",
            repo.full_name(),
            analysis.abandonment_score,
            analysis.revival_potential,
            if analysis.degraded { " (degraded)" } else { "" }
        );
        Ok(analysis)
    }

    /// Analyzes repositories concurrently, bounded by `concurrency_limit`.
    /// Results keep the input order.
    pub async fn analyze_many(
        &self,
        repos: &[RepositoryRecord],
    ) -> Vec<AnalysisResult<RepositoryAnalysis>> {
        stream::iter(repos.iter().map(|repo| self.analyze(repo)))
            .buffered(self.config.concurrency_limit.max(1))
            .collect()
            .await
    }
}

/// Analysis from already-obtained history.
///
/// A fault anywhere in the full-data path falls back to the degraded formulas.
pub fn analyze_with_history(
    repo: &RepositoryRecord,
    issues: &[IssueRecord],
    commits: &[CommitRecord],
    now: DateTime<Utc>,
) -> AnalysisResult<RepositoryAnalysis> {
    let last_commit_age_days = days_since(&repo.pushed_at, "pushed_at", now)?;

    match full_analysis(repo, issues, commits, last_commit_age_days, now) {
        Ok(analysis) => Ok(analysis),
        Err(e) => {
            warn!(
                "Full analysis of {} failed: {e}. Falling back to degraded analysis",
                repo.full_name()
            );
            degraded_analysis(repo, last_commit_age_days, now)
        }
    }
}

/// Reduced-fidelity analysis from the repository record alone
pub fn analyze_degraded(
    repo: &RepositoryRecord,
    now: DateTime<Utc>,
) -> AnalysisResult<RepositoryAnalysis> {
    let last_commit_age_days = days_since(&repo.pushed_at, "pushed_at", now)?;
    degraded_analysis(repo, last_commit_age_days, now)
}

fn full_analysis(
    repo: &RepositoryRecord,
    issues: &[IssueRecord],
    commits: &[CommitRecord],
    last_commit_age_days: u64,
    now: DateTime<Utc>,
) -> AnalysisResult<RepositoryAnalysis> {
    let abandonment_score = abandonment_score(repo, issues, commits, now)?;
    let revival_potential = revival_potential(repo, issues, now)?;
    let issue_response_time_days = issue_response_time_days(issues)?;
    let community_engagement = community_engagement(repo, issues, now)?;
    let technical_complexity = technical_complexity(repo);
    let market_relevance = market_relevance(repo, now)?;

    debug!(
        "{}: {} issues, {} commits, response time {:?}, engagement {}, market {}",
        repo.full_name(),
        issues.len(),
        commits.len(),
        issue_response_time_days,
        community_engagement,
        market_relevance
    );

    Ok(RepositoryAnalysis {
        repository: repo.clone(),
        abandonment_score,
        revival_potential,
        last_commit_age_days,
        issue_response_time_days,
        community_engagement,
        technical_complexity,
        market_relevance,
        reasons: reasons(repo, issues, last_commit_age_days, now)?,
        recommendations: recommendations(repo, abandonment_score, revival_potential),
        degraded: false,
    })
}

fn degraded_analysis(
    repo: &RepositoryRecord,
    last_commit_age_days: u64,
    now: DateTime<Utc>,
) -> AnalysisResult<RepositoryAnalysis> {
    Ok(RepositoryAnalysis {
        repository: repo.clone(),
        abandonment_score: degraded_abandonment_score(repo, now)?,
        revival_potential: degraded_revival_potential(repo, now)?,
        last_commit_age_days,
        issue_response_time_days: None,
        community_engagement: degraded_community_engagement(repo),
        technical_complexity: technical_complexity(repo),
        market_relevance: market_relevance(repo, now)?,
        reasons: vec![insights::degraded_reason(last_commit_age_days)],
        recommendations: vec![insights::MANUAL_REVIEW.to_string()],
        degraded: true,
    })
}
