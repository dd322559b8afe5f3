//! `repo_revival` - abandonment and revival analysis for GitHub repositories
//!
//! The [`analysis`] module is a pure scoring engine: it turns a repository
//! record plus its issue and commit history into bounded scores, a size
//! classification and human-readable insights. The [`github`] module supplies
//! that history from the GitHub REST API via octocrab.

// Module declarations
pub mod analysis;
pub mod github;
pub mod runtime;

// Re-export runtime types
pub use runtime::AsyncTask;

// Re-export analysis engine
pub use analysis::{
    AnalysisError, AnalysisResult, AnalyzerConfig, Clock, CommitRecord, FixedClock, IssueRecord,
    IssueState, IssueStateFilter, RepositoryAnalysis, RepositoryAnalyzer, RepositoryDataProvider,
    RepositoryRecord, SystemClock, TechnicalComplexity, Timestamp, analyze_degraded,
    analyze_with_history,
};

// Re-export GitHub client types
pub use github::{GitHubClient, GitHubClientBuilder, GitHubError, GitHubProvider, GitHubResult};
