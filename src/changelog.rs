//! Changelog assembly.
//!
//! Correlates the commits added since the previous release tag with the
//! repository's issue and pull request catalogs. Data flows one direction:
//! commit messages are scanned for `#N` references, each reference is
//! resolved to the issue numbers it represents (pull requests expand to the
//! issues their bodies close), the resolved numbers are deduplicated
//! preserving first-seen order, and each surviving issue is rendered once by
//! the caller-supplied formatter.

/// Issue and pull request reference parsing.
pub mod refs;

/// Resolution of references against the fetched catalogs.
pub mod resolver;

use log::*;
use secrecy::SecretString;
use std::{collections::HashSet, path::Path};

use crate::{
    changelog::{refs::issue_refs, resolver::Resolver},
    error::{RelnotesError, Result},
    repo::Repository,
    tracker::{
        config::TrackerConfig, github::Github, traits::Tracker, types::Issue,
    },
};

/// Build the changelog for the repository at `repo_path`.
///
/// Reads the local repository (scoped: the handle is released before any
/// network call), resolves the GitHub owner/repo identity from its remotes,
/// then fetches both catalogs and assembles the changelog text. Each
/// resolved issue is rendered by `formatter` on its own line.
pub async fn build<F>(
    repo_path: &Path,
    token: SecretString,
    formatter: F,
) -> Result<String>
where
    F: Fn(&Issue) -> String,
{
    let (info, messages) = {
        let repo = Repository::open(repo_path)?;
        (
            repo.github_remote_info()?,
            repo.commit_messages_since_last_tag()?,
        )
    };

    info!("building changelog for {}/{}", info.owner, info.name);
    debug!("{} new commits since the previous tag", messages.len());

    let tracker =
        Github::new(TrackerConfig::new(info.owner, info.name, token))?;

    assemble(&tracker, &messages, formatter).await
}

/// Assemble the changelog text from pre-walked commit messages.
///
/// The two catalog fetches are independent of each other and run
/// concurrently; either failure is fatal. Resolution order follows the raw
/// reference-scan order across messages, oldest commit first, and
/// deduplication keeps the position of an issue's first occurrence. A
/// resolved number that is missing from the issue catalog means the two
/// catalogs are inconsistent with each other and fails the build.
pub async fn assemble<F>(
    tracker: &dyn Tracker,
    commit_messages: &[String],
    formatter: F,
) -> Result<String>
where
    F: Fn(&Issue) -> String,
{
    let (issues, pull_requests) =
        tokio::try_join!(tracker.list_issues(), tracker.list_pull_requests())?;

    debug!(
        "assembling changelog from {} issues and {} pull requests",
        issues.len(),
        pull_requests.len()
    );

    let resolver = Resolver::new(issues, pull_requests);

    let mut seen: HashSet<u64> = HashSet::new();
    let mut changelog = String::new();

    for message in commit_messages {
        for reference in issue_refs(message) {
            for number in resolver.resolve(reference) {
                if !seen.insert(number) {
                    continue;
                }

                let issue = resolver
                    .issue(number)
                    .ok_or(RelnotesError::MissingIssue(number))?;

                changelog.push_str(&formatter(issue));
                changelog.push('\n');
            }
        }
    }

    Ok(changelog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::{traits::MockTracker, types::PullRequest};

    fn issue(number: u64, title: &str) -> Issue {
        Issue {
            number,
            title: title.to_string(),
            labels: vec![],
        }
    }

    fn catalog_tracker(
        issues: Vec<Issue>,
        pull_requests: Vec<PullRequest>,
    ) -> MockTracker {
        let mut tracker = MockTracker::new();
        tracker
            .expect_list_issues()
            .returning(move || Ok(issues.clone()));
        tracker
            .expect_list_pull_requests()
            .returning(move || Ok(pull_requests.clone()));
        tracker
    }

    fn messages(msgs: &[&str]) -> Vec<String> {
        msgs.iter().map(|m| m.to_string()).collect()
    }

    #[tokio::test]
    async fn deduplicates_issues_keeping_first_occurrence_position() {
        let tracker = catalog_tracker(
            vec![issue(10, "Fix crash"), issue(11, "Typo")],
            vec![],
        );
        let msgs = messages(&["fixes #10", "fixes #11, revisits #10"]);

        let changelog =
            assemble(&tracker, &msgs, |i| i.title.clone()).await.unwrap();

        assert_eq!(changelog, "Fix crash\nTypo\n");
    }

    #[test_log::test(tokio::test)]
    async fn resolves_issues_closed_through_pull_requests() {
        let tracker = catalog_tracker(
            vec![
                issue(5, "Fix crash"),
                issue(6, "Typo"),
                issue(7, "Null ref"),
            ],
            vec![PullRequest {
                number: 8,
                body: "closes #7".to_string(),
            }],
        );
        let msgs = messages(&["#5", "#6, fixes #7 via PR #8"]);

        let changelog =
            assemble(&tracker, &msgs, |i| i.title.clone()).await.unwrap();

        // #7 appears once even though it is referenced both directly and
        // through PR #8, at its first-occurrence position
        assert_eq!(changelog, "Fix crash\nTypo\nNull ref\n");
    }

    #[tokio::test]
    async fn drops_references_matching_neither_catalog() {
        let tracker = catalog_tracker(vec![issue(10, "Fix crash")], vec![]);
        let msgs = messages(&["fixes #10, see #999 for context"]);

        let changelog =
            assemble(&tracker, &msgs, |i| i.title.clone()).await.unwrap();

        assert_eq!(changelog, "Fix crash\n");
    }

    #[tokio::test]
    async fn returns_empty_changelog_for_unreferenced_commits() {
        let tracker = catalog_tracker(vec![issue(10, "Fix crash")], vec![]);
        let msgs = messages(&["refactor internals", "bump dependencies"]);

        let changelog =
            assemble(&tracker, &msgs, |i| i.title.clone()).await.unwrap();

        assert_eq!(changelog, "");
    }

    #[test_log::test(tokio::test)]
    async fn assembly_is_idempotent_for_unchanged_inputs() {
        let msgs = messages(&["#5", "#6, fixes #7 via PR #8"]);
        let catalogs = || {
            catalog_tracker(
                vec![
                    issue(5, "Fix crash"),
                    issue(6, "Typo"),
                    issue(7, "Null ref"),
                ],
                vec![PullRequest {
                    number: 8,
                    body: "closes #7".to_string(),
                }],
            )
        };

        let first = assemble(&catalogs(), &msgs, |i| i.title.clone())
            .await
            .unwrap();
        let second = assemble(&catalogs(), &msgs, |i| i.title.clone())
            .await
            .unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn propagates_tracker_failures() {
        let mut tracker = MockTracker::new();
        tracker
            .expect_list_issues()
            .returning(|| Err(RelnotesError::tracker_fetch("boom")));
        tracker.expect_list_pull_requests().returning(|| Ok(vec![]));

        let msgs = messages(&["fixes #10"]);
        let result = assemble(&tracker, &msgs, |i| i.title.clone()).await;

        assert!(matches!(result, Err(RelnotesError::TrackerFetch(_))));
    }
}
