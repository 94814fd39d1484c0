//! Implements the Tracker trait for GitHub
use async_trait::async_trait;
use log::*;
use octocrab::{Octocrab, params};

use crate::{
    error::Result,
    tracker::{
        config::{DEFAULT_PAGE_SIZE, TrackerConfig},
        traits::Tracker,
        types::{Issue, PullRequest},
    },
};

/// GitHub tracker implementation using Octocrab to read the issue and pull
/// request catalogs.
pub struct Github {
    config: TrackerConfig,
    instance: Octocrab,
}

impl Github {
    /// Create GitHub client with personal access token authentication and
    /// API base URL configuration.
    pub fn new(config: TrackerConfig) -> Result<Self> {
        let base_uri = format!("{}://api.{}", config.scheme, config.host);
        let instance = Octocrab::builder()
            .personal_token(config.token.clone())
            .base_uri(base_uri)?
            .build()?;

        Ok(Self { config, instance })
    }
}

#[async_trait]
impl Tracker for Github {
    async fn list_issues(&self) -> Result<Vec<Issue>> {
        let mut page = self
            .instance
            .issues(&self.config.owner, &self.config.repo)
            .list()
            .state(params::State::All)
            .per_page(DEFAULT_PAGE_SIZE)
            .send()
            .await?;

        let mut items = page.take_items();

        while let Some(mut next) = self.instance.get_page(&page.next).await? {
            items.extend(next.take_items());
            page = next;
        }

        debug!(
            "fetched {} issues for {}/{}",
            items.len(),
            self.config.owner,
            self.config.repo
        );

        // the issues endpoint reports pull requests as well; the issue
        // catalog must only contain true issues
        Ok(items
            .into_iter()
            .filter(|issue| issue.pull_request.is_none())
            .map(|issue| Issue {
                number: issue.number,
                title: issue.title,
                labels: issue.labels.into_iter().map(|l| l.name).collect(),
            })
            .collect())
    }

    async fn list_pull_requests(&self) -> Result<Vec<PullRequest>> {
        let mut page = self
            .instance
            .pulls(&self.config.owner, &self.config.repo)
            .list()
            .state(params::State::All)
            .per_page(DEFAULT_PAGE_SIZE)
            .send()
            .await?;

        let mut items = page.take_items();

        while let Some(mut next) = self.instance.get_page(&page.next).await? {
            items.extend(next.take_items());
            page = next;
        }

        debug!(
            "fetched {} pull requests for {}/{}",
            items.len(),
            self.config.owner,
            self.config.repo
        );

        Ok(items
            .into_iter()
            .map(|pr| PullRequest {
                number: pr.number,
                body: pr.body.unwrap_or_default(),
            })
            .collect())
    }
}
