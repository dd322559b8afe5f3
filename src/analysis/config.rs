//! Configuration for analysis runs

use std::path::Path;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::provider::IssueStateFilter;
use crate::analysis::types::{AnalysisError, AnalysisResult};

/// Longest commit look-back accepted from a config file
pub const MAX_COMMIT_WINDOW_DAYS: i64 = 36_500;

/// Controls how history is fetched. Scoring weights are fixed and not configurable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub issue_state: IssueStateFilter,
    /// Commits older than this many days are not requested; 0 fetches everything
    pub commit_window_days: i64,
    pub api_page_size: u8,
    pub max_pages: u32,
    /// Parallel analyses in a batch
    pub concurrency_limit: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            issue_state: IssueStateFilter::All,
            commit_window_days: 365,
            api_page_size: 100, // GitHub API maximum
            max_pages: 10,
            concurrency_limit: 4,
        }
    }
}

impl AnalyzerConfig {
    pub fn from_toml_str(content: &str) -> AnalysisResult<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| AnalysisError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> AnalysisResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AnalysisError::ConfigError(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content).map_err(|e| match e {
            AnalysisError::ConfigError(msg) => {
                AnalysisError::ConfigError(format!("{}: {msg}", path.display()))
            }
            other => other,
        })
    }

    /// Earliest commit instant to request, or `None` for the full history.
    /// A window that cannot be represented also falls back to the full history.
    pub fn commit_window_start(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        if self.commit_window_days <= 0 {
            return None;
        }
        TimeDelta::try_days(self.commit_window_days).and_then(|window| now.checked_sub_signed(window))
    }

    fn validate(&self) -> AnalysisResult<()> {
        if !(0..=MAX_COMMIT_WINDOW_DAYS).contains(&self.commit_window_days) {
            return Err(AnalysisError::ConfigError(format!(
                "commit_window_days must be between 0 and {MAX_COMMIT_WINDOW_DAYS}, got {}",
                self.commit_window_days
            )));
        }
        if self.api_page_size == 0 || self.api_page_size > 100 {
            return Err(AnalysisError::ConfigError(format!(
                "api_page_size must be between 1 and 100, got {}",
                self.api_page_size
            )));
        }
        if self.max_pages == 0 {
            return Err(AnalysisError::ConfigError("max_pages must be at least 1".to_string()));
        }
        if self.concurrency_limit == 0 {
            return Err(AnalysisError::ConfigError(
                "concurrency_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
