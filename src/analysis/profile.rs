//! Metrics that depend on the repository record alone

use chrono::{DateTime, Utc};

use crate::analysis::buckets::{Bucket, bucket_points, clamp_score};
use crate::analysis::clock::{days_since, signed_days};
use crate::analysis::types::{AnalysisResult, RepositoryRecord, TechnicalComplexity};

/// Languages with a large contributor pool, compared case-insensitively
pub const POPULAR_LANGUAGES: &[&str] = &[
    "javascript",
    "typescript",
    "python",
    "java",
    "go",
    "rust",
    "c++",
    "c#",
    "php",
    "ruby",
    "swift",
    "kotlin",
];

const MARKET_BASE: f64 = 50.0;
const POPULAR_LANGUAGE_POINTS: f64 = 20.0;
const TOPIC_RICH_POINTS: f64 = 10.0;
const TOPIC_RICH_THRESHOLD: usize = 2;

const RECENCY: &[Bucket] = &[
    Bucket::below(30, 20),
    Bucket::below(90, 10),
    Bucket::above(730, -20),
];

const MEDIUM_SIZE: i64 = 1_000;
const HIGH_SIZE: i64 = 10_000;

#[must_use]
pub fn technical_complexity(repo: &RepositoryRecord) -> TechnicalComplexity {
    if repo.size < MEDIUM_SIZE {
        TechnicalComplexity::Low
    } else if repo.size < HIGH_SIZE {
        TechnicalComplexity::Medium
    } else {
        TechnicalComplexity::High
    }
}

#[must_use]
pub fn is_popular_language(language: &str) -> bool {
    POPULAR_LANGUAGES
        .iter()
        .any(|popular| popular.eq_ignore_ascii_case(language.trim()))
}

/// How attractive the project's ecosystem is right now, 0 to 100
pub fn market_relevance(repo: &RepositoryRecord, now: DateTime<Utc>) -> AnalysisResult<u8> {
    let mut score = MARKET_BASE;

    if repo.language.as_deref().is_some_and(is_popular_language) {
        score += POPULAR_LANGUAGE_POINTS;
    }

    let update_age = days_since(&repo.updated_at, "updated_at", now)?;
    score += bucket_points(RECENCY, signed_days(update_age));

    if repo.topics.len() > TOPIC_RICH_THRESHOLD {
        score += TOPIC_RICH_POINTS;
    }

    Ok(clamp_score(score))
}
