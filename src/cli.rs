//! CLI argument parsing and tracker credential resolution.
use clap::{Parser, Subcommand};
use secrecy::SecretString;
use std::env;

use crate::error::{RelnotesError, Result};

/// Global CLI arguments for repository location, credentials, and debugging.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, default_value = ".", global = true)]
    /// Path to the local repository clone.
    pub repo_path: String,

    #[arg(long, default_value = "", global = true)]
    /// GitHub personal access token. Falls back to GITHUB_TOKEN env var.
    pub github_token: String,

    #[arg(long, default_value_t = false, global = true)]
    /// Enable debug logging.
    pub debug: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Changelog operation subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build release notes for commits since the previous tag.
    Changelog,

    /// Print the tag pointing at the current HEAD commit.
    CurrentTag,
}

impl Args {
    /// Resolve the GitHub token from CLI arguments or the environment.
    pub fn get_token(&self) -> Result<SecretString> {
        let mut token = self.github_token.clone();

        if token.is_empty()
            && let Ok(env_var_token) = env::var("GITHUB_TOKEN")
        {
            token = env_var_token;
        }

        if token.is_empty() {
            return Err(RelnotesError::invalid_args("must set github token"));
        }

        Ok(SecretString::from(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn get_token_prefers_cli_argument() {
        let args = Args::parse_from([
            "relnotes",
            "--github-token",
            "cli-token",
            "changelog",
        ]);

        let token = args.get_token().unwrap();
        assert_eq!(token.expose_secret(), "cli-token");
    }

    #[test]
    fn parses_subcommands_with_global_args() {
        let args =
            Args::parse_from(["relnotes", "current-tag", "--repo-path", "x"]);

        assert!(matches!(args.command, Command::CurrentTag));
        assert_eq!(args.repo_path, "x");
    }
}
