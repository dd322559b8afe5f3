//! Fetch absorption, fallback and batch behaviour of the analyzer.

use chrono::Duration;
use repo_revival::{
    AnalysisError, AnalyzerConfig, FixedClock, IssueRecord, IssueState, IssueStateFilter,
    RepositoryAnalyzer, RepositoryRecord, Timestamp, analyze_with_history,
};

use crate::common::{
    StaticProvider, closed_issue, commit, open_issue, reference_instant, repository, unavailable,
};

fn analyzer(provider: StaticProvider) -> RepositoryAnalyzer<StaticProvider, FixedClock> {
    RepositoryAnalyzer::with_clock(provider, FixedClock::new(reference_instant()))
}

#[tokio::test]
async fn missing_issues_do_not_stop_commit_analysis() {
    let provider = StaticProvider::new(Err(unavailable("issues")), Ok(vec![commit(5); 3]));
    let analysis = analyzer(provider).analyze(&repository(5)).await.unwrap();

    assert!(!analysis.degraded);
    // Three recent commits: 15 inactivity points, nothing else
    assert_eq!(analysis.abandonment_score, 15);
    assert_eq!(analysis.issue_response_time_days, None);
}

#[tokio::test]
async fn missing_commits_do_not_stop_issue_analysis() {
    let provider = StaticProvider::new(
        Ok(vec![closed_issue(10, 72), open_issue(2)]),
        Err(unavailable("commits")),
    );
    let analysis = analyzer(provider).analyze(&repository(5)).await.unwrap();

    assert!(!analysis.degraded);
    assert_eq!(analysis.issue_response_time_days, Some(3.0));
    // No commits seen: 20 inactivity points
    assert_eq!(analysis.abandonment_score, 20);
}

#[tokio::test]
async fn fetch_parameters_follow_config() {
    let analyzer = analyzer(StaticProvider::empty());
    analyzer.analyze(&repository(5)).await.unwrap();

    let provider = analyzer.provider();
    let issue_requests = provider.issue_requests.lock().unwrap().clone();
    assert_eq!(
        issue_requests,
        vec![("acme/widget".to_string(), IssueStateFilter::All)]
    );
    let commit_requests = provider.commit_requests.lock().unwrap().clone();
    assert_eq!(
        commit_requests,
        vec![(
            "acme/widget".to_string(),
            Some(reference_instant() - Duration::days(365))
        )]
    );
}

#[tokio::test]
async fn zero_commit_window_requests_full_history() {
    let config = AnalyzerConfig {
        commit_window_days: 0,
        issue_state: IssueStateFilter::Closed,
        ..AnalyzerConfig::default()
    };
    let analyzer = analyzer(StaticProvider::empty()).with_config(config);
    analyzer.analyze(&repository(5)).await.unwrap();

    let provider = analyzer.provider();
    assert_eq!(provider.commit_requests.lock().unwrap()[0].1, None);
    assert_eq!(provider.issue_requests.lock().unwrap()[0].1, IssueStateFilter::Closed);
}

#[tokio::test]
async fn unrepresentable_commit_window_requests_full_history() {
    let config = AnalyzerConfig {
        commit_window_days: 200_000_000,
        ..AnalyzerConfig::default()
    };
    let analyzer = analyzer(StaticProvider::empty()).with_config(config);
    let analysis = analyzer.analyze(&repository(5)).await.unwrap();

    assert!(!analysis.degraded);
    assert_eq!(analyzer.provider().commit_requests.lock().unwrap()[0].1, None);
}

#[tokio::test]
async fn malformed_push_date_is_a_hard_failure() {
    let repo = RepositoryRecord {
        pushed_at: Timestamp::new("not-a-date"),
        ..repository(5)
    };
    let err = analyzer(StaticProvider::empty()).analyze(&repo).await.unwrap_err();
    assert_eq!(
        err,
        AnalysisError::MalformedTimestamp {
            field: "pushed_at",
            value: "not-a-date".to_string(),
        }
    );
}

#[tokio::test]
async fn malformed_push_date_fails_even_without_history() {
    let repo = RepositoryRecord {
        pushed_at: Timestamp::missing(),
        ..repository(5)
    };
    let err = analyzer(StaticProvider::failing()).analyze(&repo).await.unwrap_err();
    assert!(matches!(
        err,
        AnalysisError::MalformedTimestamp { field: "pushed_at", .. }
    ));
}

#[test]
fn malformed_issue_date_falls_back_to_degraded() {
    let issues = [IssueRecord {
        state: IssueState::Open,
        created_at: Timestamp::new("31/12/2024"),
        closed_at: None,
    }];
    let analysis =
        analyze_with_history(&repository(40), &issues, &[commit(1)], reference_instant())
            .unwrap();

    assert!(analysis.degraded);
    assert_eq!(analysis.reasons, vec!["Last push 40 days ago".to_string()]);
    assert_eq!(analysis.recommendations.len(), 1);
    assert_eq!(analysis.issue_response_time_days, None);
}

#[test]
fn issue_closed_before_opening_falls_back_to_degraded() {
    let created = reference_instant() - Duration::days(3);
    let issues = [IssueRecord {
        state: IssueState::Closed,
        created_at: created.into(),
        closed_at: Some((created - Duration::days(1)).into()),
    }];
    let analysis =
        analyze_with_history(&repository(3), &issues, &[], reference_instant()).unwrap();
    assert!(analysis.degraded);
}

#[test]
fn malformed_creation_date_cannot_be_hidden() {
    let repo = RepositoryRecord {
        created_at: Timestamp::new("yesterday"),
        ..repository(5)
    };
    let err = analyze_with_history(&repo, &[], &[], reference_instant()).unwrap_err();
    assert!(matches!(
        err,
        AnalysisError::MalformedTimestamp { field: "created_at", .. }
    ));
}

#[tokio::test]
async fn batch_analysis_keeps_input_order() {
    let broken = RepositoryRecord {
        name: "broken".to_string(),
        pushed_at: Timestamp::new("???"),
        ..repository(5)
    };
    let repos = vec![
        RepositoryRecord {
            name: "fresh".to_string(),
            ..repository(1)
        },
        broken,
        RepositoryRecord {
            name: "stale".to_string(),
            ..repository(900)
        },
    ];
    let config = AnalyzerConfig {
        concurrency_limit: 2,
        ..AnalyzerConfig::default()
    };
    let analyzer = analyzer(StaticProvider::empty()).with_config(config);

    let results = analyzer.analyze_many(&repos).await;

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap().repository.name, "fresh");
    assert!(results[1].is_err());
    let stale = results[2].as_ref().unwrap();
    assert_eq!(stale.repository.name, "stale");
    assert_eq!(stale.last_commit_age_days, 900);
}

#[tokio::test]
async fn independent_analyses_run_concurrently() {
    let analyzer = std::sync::Arc::new(analyzer(StaticProvider::new(
        Ok(vec![open_issue(40)]),
        Ok(vec![commit(3)]),
    )));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let analyzer = analyzer.clone();
            tokio::spawn(async move { analyzer.analyze(&repository(10 + i)).await })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let analysis = handle.await.unwrap().unwrap();
        assert_eq!(analysis.last_commit_age_days, 10 + i as u64);
    }
}
