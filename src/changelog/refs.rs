//! Issue and pull request reference parsing.
use regex::Regex;
use std::sync::LazyLock;

static ISSUE_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#(\d+)").expect("issue reference pattern"));

/// Extract every `#N` reference number from the given text, left to right.
///
/// A reference is the maximal digit run immediately following a `#`
/// (`#12abc` yields 12). Duplicates are preserved; deduplication happens at
/// the catalog level, not here. Digit runs too large for a u64 fail to parse
/// and are dropped like any other non-reference. No match yields an empty
/// list, never an error.
pub fn issue_refs(text: &str) -> Vec<u64> {
    ISSUE_REF
        .captures_iter(text)
        .filter_map(|cap| cap[1].parse().ok())
        .collect()
}
