//! GitHub issue tracker integration.
//!
//! Provides token-based authentication and read-only access to a
//! repository's issue and pull request catalogs through a common trait.

/// Configuration and authentication for the tracker connection.
pub mod config;

/// GitHub API client implementation.
pub mod github;

/// Common trait for tracker abstraction.
pub mod traits;

/// Shared data types for issues and pull requests.
pub mod types;
