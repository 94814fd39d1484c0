//! Local git repository access.
//!
//! Wraps `git2::Repository` with the read-only operations changelog
//! generation needs:
//!
//! - Resolving the hosting owner/repo identity from the configured remotes
//! - Walking commit history back to the previous tagged release
//! - Looking up the tag that targets the current HEAD
//!
//! The handle is opened, fully read, and released within a single build call;
//! nothing in this module writes to the repository.
use git2::Oid;
use git_url_parse::GitUrl;
use log::*;
use std::{collections::HashSet, path::Path};

use crate::{
    error::{RelnotesError, Result},
    tracker::config::GITHUB_HOST,
};

/// Owner and repository name of the GitHub remote backing a local clone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoInfo {
    pub owner: String,
    pub name: String,
}

/// Read-only view of a local repository for changelog generation.
pub struct Repository {
    repo: git2::Repository,
}

impl Repository {
    /// Open an existing local repository.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = git2::Repository::open(path)?;
        Ok(Self { repo })
    }

    /// Resolve the GitHub owner/repo identity from the configured remotes.
    ///
    /// Exactly one remote must point at github.com. Zero or several matches
    /// leave the hosting identity ambiguous and fail the build; remotes whose
    /// URLs do not parse are skipped rather than treated as fatal.
    pub fn github_remote_info(&self) -> Result<RepoInfo> {
        let mut matches: Vec<RepoInfo> = vec![];

        for name in self.repo.remotes()?.iter().flatten() {
            let remote = self.repo.find_remote(name)?;

            let Some(url) = remote.url() else {
                continue;
            };

            let parsed = match GitUrl::parse(url) {
                Ok(parsed) => parsed,
                Err(err) => {
                    debug!("skipping remote {name} with unparseable url: {err}");
                    continue;
                }
            };

            if let Some(host) = parsed.host
                && host == GITHUB_HOST
                && let Some(owner) = parsed.owner
            {
                matches.push(RepoInfo {
                    owner,
                    name: parsed.name,
                });
            }
        }

        match matches.len() {
            1 => Ok(matches.remove(0)),
            0 => Err(RelnotesError::repository_identity(
                "no github remote configured for repository",
            )),
            _ => Err(RelnotesError::repository_identity(
                "multiple github remotes configured for repository",
            )),
        }
    }

    /// Collect the messages of every commit added since the previous tagged
    /// release, oldest first.
    ///
    /// The walk starts at the HEAD tip and follows a single linear path
    /// backward: the second parent at merge commits, the sole parent
    /// otherwise. It stops without emitting when it reaches a commit targeted
    /// by any pre-existing tag. A tag targeting the tip itself is excluded
    /// from the stop-set so that re-running on a just-tagged commit still
    /// reports the release's commits.
    pub fn commit_messages_since_last_tag(&self) -> Result<Vec<String>> {
        let tip = self.repo.head()?.peel_to_commit()?;
        let stop_ids = self.previously_tagged_ids(tip.id())?;

        debug!(
            "walking history from {} against {} previously tagged commits",
            tip.id(),
            stop_ids.len()
        );

        let mut messages: Vec<String> = vec![];
        let mut current = Some(tip);

        while let Some(commit) = current {
            if stop_ids.contains(&commit.id()) {
                break;
            }

            messages.push(commit.message().unwrap_or_default().to_string());

            current = match commit.parent_count() {
                0 => None,
                1 => Some(commit.parent(0)?),
                // at a merge the second parent is the merged-in line of work,
                // which is where the release's changes live
                _ => Some(commit.parent(1)?),
            };
        }

        messages.reverse();
        Ok(messages)
    }

    /// Find the name of a tag whose target is the current HEAD tip.
    ///
    /// Returns the first match when several tags target the tip.
    pub fn current_tag(&self) -> Result<Option<String>> {
        let tip = self.repo.head()?.peel_to_commit()?.id();

        for reference in self.repo.references()?.filter_map(|r| r.ok()) {
            if reference.is_tag()
                && let Some(name) = reference.name()
                && let Some(stripped) = name.strip_prefix("refs/tags/")
                && let Ok(commit) = reference.peel_to_commit()
                && commit.id() == tip
            {
                return Ok(Some(stripped.to_string()));
            }
        }

        Ok(None)
    }

    /// Peeled target ids of every tag in the repository, excluding targets
    /// equal to the tip id.
    fn previously_tagged_ids(&self, tip: Oid) -> Result<HashSet<Oid>> {
        let mut ids = HashSet::new();

        for reference in self.repo.references()?.filter_map(|r| r.ok()) {
            if reference.is_tag()
                && let Ok(commit) = reference.peel_to_commit()
                && commit.id() != tip
            {
                ids.insert(commit.id());
            }
        }

        Ok(ids)
    }
}
