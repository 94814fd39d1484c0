//! Custom error types for relnotes.

use thiserror::Error;

/// Main error type for relnotes operations.
///
/// Every failure is fatal to the build that raised it; nothing is retried
/// internally.
#[derive(Error, Debug)]
pub enum RelnotesError {
    // Cli args errors
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    // Repository identity errors
    #[error("Repository identity error: {0}")]
    RepositoryIdentity(String),

    // Tracker/API errors
    #[error("Tracker request failed: {0}")]
    TrackerFetch(String),

    #[error("API rate limit exceeded")]
    RateLimitExceeded,

    // Catalog consistency errors
    #[error(
        "issue #{0} was resolved from commit history but is missing from the issue catalog: issue and pull request catalogs were likely fetched inconsistently"
    )]
    MissingIssue(u64),

    // Git errors
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Git URL parse error: {0}")]
    GitUrlError(#[from] git_url_parse::GitUrlParseError),

    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] log::SetLoggerError),

    // Generic wrapper for other errors
    #[error(transparent)]
    Other(#[from] color_eyre::Report),
}

/// Result type alias using RelnotesError
pub type Result<T> = std::result::Result<T, RelnotesError>;

impl RelnotesError {
    /// Create a repository identity error with context
    pub fn repository_identity(msg: impl Into<String>) -> Self {
        Self::RepositoryIdentity(msg.into())
    }

    /// Create a tracker fetch error with context
    pub fn tracker_fetch(msg: impl Into<String>) -> Self {
        Self::TrackerFetch(msg.into())
    }

    /// Create an invalid args error
    pub fn invalid_args(msg: impl Into<String>) -> Self {
        Self::InvalidArgs(msg.into())
    }
}

// Implement From for octocrab errors (GitHub API)
impl From<octocrab::Error> for RelnotesError {
    fn from(err: octocrab::Error) -> Self {
        match &err {
            octocrab::Error::GitHub { source, .. }
                if source.message.contains("rate limit") =>
            {
                Self::RateLimitExceeded
            }
            _ => Self::TrackerFetch(format!("GitHub API error: {}", err)),
        }
    }
}
