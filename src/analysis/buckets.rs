//! Ordered threshold tables used by the scoring functions

/// One row of a weight table: `points` are awarded when the value lies
/// strictly above `above` and strictly below `below` (either bound optional).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    above: Option<i64>,
    below: Option<i64>,
    points: i32,
}

impl Bucket {
    #[must_use]
    pub const fn above(threshold: i64, points: i32) -> Self {
        Self {
            above: Some(threshold),
            below: None,
            points,
        }
    }

    #[must_use]
    pub const fn below(threshold: i64, points: i32) -> Self {
        Self {
            above: None,
            below: Some(threshold),
            points,
        }
    }

    #[must_use]
    pub const fn between(low: i64, high: i64, points: i32) -> Self {
        Self {
            above: Some(low),
            below: Some(high),
            points,
        }
    }

    #[must_use]
    pub fn matches(&self, value: i64) -> bool {
        self.above.is_none_or(|low| value > low) && self.below.is_none_or(|high| value < high)
    }

    #[must_use]
    pub fn points(&self) -> i32 {
        self.points
    }
}

/// Points of the first matching row, evaluated top-down; 0 when none match.
#[must_use]
pub fn bucket_points(table: &[Bucket], value: i64) -> f64 {
    table
        .iter()
        .find(|bucket| bucket.matches(value))
        .map_or(0.0, |bucket| f64::from(bucket.points()))
}

/// Rounds and clamps a raw score into 0..=100
#[must_use]
pub fn clamp_score(raw: f64) -> u8 {
    if raw.is_nan() {
        return 0;
    }
    raw.round().clamp(0.0, 100.0) as u8
}
