//! Reference instant and age computations

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::types::{AnalysisError, AnalysisResult};

pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Source of the reference instant used for every age in one analysis
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock pinned to one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    #[must_use]
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// RFC 3339 timestamp exactly as received from upstream.
///
/// Parsing is deferred to the point of use so bad upstream data is reported
/// against the field it came from.
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Timestamp(String);

impl Timestamp {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Placeholder for a value the upstream record did not carry
    #[must_use]
    pub fn missing() -> Self {
        Self(String::new())
    }

    #[must_use]
    pub fn is_missing(&self) -> bool {
        self.0.trim().is_empty()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn parse(&self, field: &'static str) -> AnalysisResult<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(self.0.trim())
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|_| AnalysisError::MalformedTimestamp {
                field,
                value: self.0.clone(),
            })
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(instant: DateTime<Utc>) -> Self {
        Self(instant.to_rfc3339())
    }
}

impl From<Option<DateTime<Utc>>> for Timestamp {
    fn from(instant: Option<DateTime<Utc>>) -> Self {
        instant.map_or_else(Self::missing, Self::from)
    }
}

/// Whole days between two instants; any started day counts as a full one.
#[must_use]
pub fn days_between(then: DateTime<Utc>, now: DateTime<Utc>) -> u64 {
    let elapsed = (now - then).num_milliseconds().unsigned_abs();
    elapsed.div_ceil(MILLIS_PER_DAY.unsigned_abs())
}

/// Age of `timestamp` in whole days relative to `now`
pub fn days_since(
    timestamp: &Timestamp,
    field: &'static str,
    now: DateTime<Utc>,
) -> AnalysisResult<u64> {
    Ok(days_between(timestamp.parse(field)?, now))
}

/// True when `instant` falls inside the trailing window of `days` ending at `now`.
/// Instants after `now` count as inside.
#[must_use]
pub fn is_within_days(instant: DateTime<Utc>, days: i64, now: DateTime<Utc>) -> bool {
    instant > now - Duration::days(days)
}

/// Fractional days from `start` to `end`, negative when `end` precedes `start`
#[must_use]
pub fn fractional_days(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    (end - start).num_milliseconds() as f64 / MILLIS_PER_DAY as f64
}

/// Converts a day count for comparison against signed bucket thresholds
#[must_use]
pub fn signed_days(days: u64) -> i64 {
    i64::try_from(days).unwrap_or(i64::MAX)
}
