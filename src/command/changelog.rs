//! Changelog generation command implementation.
use std::path::Path;

use crate::{changelog, cli, error::Result, tracker::types::Issue};

/// Render an issue as a single changelog line: bracketed labels, then title.
fn format_issue(issue: &Issue) -> String {
    let mut line = issue
        .labels
        .iter()
        .map(|label| format!("[{label}]"))
        .collect::<Vec<String>>()
        .join(" ");

    if !line.is_empty() {
        line.push(' ');
    }

    line.push_str(&issue.title);
    line
}

/// Build release notes for the configured repository and print them.
pub async fn execute(args: &cli::Args) -> Result<()> {
    let token = args.get_token()?;

    let changelog =
        changelog::build(Path::new(&args.repo_path), token, format_issue)
            .await?;

    print!("{changelog}");

    Ok(())
}
