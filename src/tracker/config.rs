//! Configuration for the GitHub issue tracker connection.
use secrecy::SecretString;

/// Page size for paginated catalog queries.
pub const DEFAULT_PAGE_SIZE: u8 = 100;
/// Host a repository remote must point at to identify the hosting project.
pub const GITHUB_HOST: &str = "github.com";
/// URL scheme used for API requests.
pub const DEFAULT_SCHEME: &str = "https";

/// Tracker connection configuration for authenticating against the GitHub
/// API and addressing a single repository's catalogs.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Tracker host (e.g., "github.com").
    pub host: String,
    /// URL scheme (http or https).
    pub scheme: String,
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Access token for authentication.
    pub token: SecretString,
}

impl TrackerConfig {
    /// Connection settings for a github.com repository.
    pub fn new(
        owner: impl Into<String>,
        repo: impl Into<String>,
        token: SecretString,
    ) -> Self {
        Self {
            host: GITHUB_HOST.to_string(),
            scheme: DEFAULT_SCHEME.to_string(),
            owner: owner.into(),
            repo: repo.into(),
            token,
        }
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self::new("", "", SecretString::from("".to_string()))
    }
}
