//! End-to-end scoring scenarios at a fixed reference instant.

use repo_revival::analysis::{abandonment_score, community_engagement, revival_potential};
use repo_revival::{
    FixedClock, RepositoryAnalyzer, RepositoryRecord, TechnicalComplexity, analyze_degraded,
    analyze_with_history,
};

use crate::common::{
    StaticProvider, closed_issue, commit, days_ago, open_issue, reference_instant, repository,
};

#[test]
fn stale_archived_repository_without_history() {
    let repo = RepositoryRecord {
        pushed_at: days_ago(400),
        archived: true,
        ..repository(400)
    };
    // 40 staleness + 0 issues + 20 no recent commits + 10 archived
    assert_eq!(abandonment_score(&repo, &[], &[], reference_instant()).unwrap(), 70);
}

#[test]
fn established_candidate_revival_potential() {
    let repo = RepositoryRecord {
        stargazers_count: 500,
        forks_count: 50,
        created_at: days_ago(400),
        description: Some("x".repeat(30)),
        license: Some("Apache License 2.0".to_string()),
        size: 500,
        topics: Vec::new(),
        ..repository(10)
    };
    // 20 + 10 + 0 + 20 + 5 + 0 + 5 + 10
    assert_eq!(revival_potential(&repo, &[], reference_instant()).unwrap(), 70);
}

#[test]
fn forkless_repository_uses_raw_stars() {
    let repo = RepositoryRecord {
        stargazers_count: 40,
        forks_count: 0,
        watchers_count: 0,
        open_issues_count: 0,
        ..repository(10)
    };
    assert_eq!(community_engagement(&repo, &[], reference_instant()).unwrap(), 20);
}

#[test]
fn full_analysis_of_abandoned_project() {
    let repo = RepositoryRecord {
        archived: true,
        ..repository(400)
    };
    let issues = [
        open_issue(45),
        open_issue(10),
        closed_issue(200, 48),
        closed_issue(20, 24),
    ];
    let commits = [commit(500), commit(420)];

    let analysis = analyze_with_history(&repo, &issues, &commits, reference_instant()).unwrap();

    assert!(!analysis.degraded);
    assert_eq!(analysis.repository, repo);
    assert_eq!(analysis.last_commit_age_days, 400);
    assert_eq!(analysis.abandonment_score, 85);
    assert_eq!(analysis.revival_potential, 74);
    assert_eq!(analysis.issue_response_time_days, Some(1.5));
    assert_eq!(analysis.community_engagement, 25);
    assert_eq!(analysis.technical_complexity, TechnicalComplexity::Medium);
    assert_eq!(analysis.market_relevance, 70);
    assert_eq!(
        analysis.reasons,
        vec![
            "No commits for 1.1 years".to_string(),
            "Repository is archived by its owner".to_string(),
        ]
    );
    assert_eq!(analysis.recommendations.len(), 4);
    assert!(analysis.recommendations[0].starts_with("High revival potential"));
    assert!(analysis.recommendations[1].contains("120 stars"));
    assert!(analysis.recommendations[2].starts_with("Ideal takeover"));
    assert!(analysis.recommendations[3].contains("12 forks"));
}

#[tokio::test]
async fn every_fetch_failing_yields_degraded_analysis() {
    let repo = RepositoryRecord {
        archived: true,
        ..repository(400)
    };
    let analyzer =
        RepositoryAnalyzer::with_clock(StaticProvider::failing(), FixedClock::new(reference_instant()));

    let analysis = analyzer.analyze(&repo).await.unwrap();

    assert_eq!(analysis, analyze_degraded(&repo, reference_instant()).unwrap());
    assert!(analysis.degraded);
    assert_eq!(analysis.issue_response_time_days, None);
    assert_eq!(analysis.reasons, vec!["No commits for 1.1 years".to_string()]);
    assert_eq!(analysis.recommendations.len(), 1);
    // 60 staleness + 20 archived
    assert_eq!(analysis.abandonment_score, 80);
    // 12 + 2.4 stars/forks + 25 maturity + 10 description + 10 license
    assert_eq!(analysis.revival_potential, 59);
    assert_eq!(analysis.community_engagement, 12);
    assert_eq!(analysis.technical_complexity, TechnicalComplexity::Medium);
    assert_eq!(analysis.market_relevance, 70);
}

#[tokio::test]
async fn repeated_analysis_is_identical() {
    let provider = StaticProvider::new(
        Ok(vec![open_issue(3), closed_issue(12, 5)]),
        Ok(vec![commit(1), commit(2)]),
    );
    let analyzer =
        RepositoryAnalyzer::with_clock(provider, FixedClock::new(reference_instant()));
    let repo = repository(2);

    let first = analyzer.analyze(&repo).await.unwrap();
    let second = analyzer.analyze(&repo).await.unwrap();
    assert_eq!(first, second);
}
