//! Traits related to remote issue trackers
use async_trait::async_trait;

use crate::{
    error::Result,
    tracker::types::{Issue, PullRequest},
};

/// Read-only access to a repository's issue and pull request catalogs.
///
/// Both listings cover every item state (open, closed, merged): a changelog
/// has to see the items that were closed by the commits it describes. The
/// two fetches are independent and may run concurrently.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Tracker {
    async fn list_issues(&self) -> Result<Vec<Issue>>;
    async fn list_pull_requests(&self) -> Result<Vec<PullRequest>>;
}
