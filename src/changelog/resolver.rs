//! Resolution of raw reference numbers against the issue and pull request
//! catalogs.
use std::collections::{HashMap, HashSet};

use crate::{
    changelog::refs::issue_refs,
    tracker::types::{Issue, PullRequest},
};

/// Immutable issue/PR lookup tables for one changelog build.
///
/// Both catalogs are snapshots taken once per run; resolution is a pure
/// read over them.
pub struct Resolver {
    issues: HashMap<u64, Issue>,
    pull_requests: HashMap<u64, PullRequest>,
}

impl Resolver {
    pub fn new(issues: Vec<Issue>, pull_requests: Vec<PullRequest>) -> Self {
        Self {
            issues: issues.into_iter().map(|i| (i.number, i)).collect(),
            pull_requests: pull_requests
                .into_iter()
                .map(|pr| (pr.number, pr))
                .collect(),
        }
    }

    /// Resolve a raw reference number to the issue numbers it represents.
    ///
    /// A pull request is never itself a changelog entry: it expands to the
    /// references in its body, re-checked against both catalogs, so chains
    /// of pull requests terminate at the issues they ultimately close. A
    /// number matching an issue resolves to itself. A number matching
    /// neither catalog resolves to nothing; stray `#N` mentions in commit
    /// messages are not an error. A visited set keeps self-referencing pull
    /// request bodies from expanding forever.
    pub fn resolve(&self, reference: u64) -> Vec<u64> {
        let mut resolved = Vec::new();
        let mut visited = HashSet::new();
        self.expand(reference, &mut visited, &mut resolved);
        resolved
    }

    /// Look up an issue record by number.
    pub fn issue(&self, number: u64) -> Option<&Issue> {
        self.issues.get(&number)
    }

    fn expand(
        &self,
        number: u64,
        visited: &mut HashSet<u64>,
        resolved: &mut Vec<u64>,
    ) {
        if !visited.insert(number) {
            return;
        }

        if let Some(pr) = self.pull_requests.get(&number) {
            for reference in issue_refs(&pr.body) {
                self.expand(reference, visited, resolved);
            }
        } else if self.issues.contains_key(&number) {
            resolved.push(number);
        }
    }
}
