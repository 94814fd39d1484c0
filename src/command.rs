//! Command execution for relnotes.
//!
//! Each submodule implements one CLI subcommand with the same shape: resolve
//! inputs from the parsed arguments, run the operation against the local
//! repository (and, for the changelog, the tracker), and print the result.

/// Build and print release notes since the previous tag.
pub mod changelog;

/// Print the tag pointing at the current HEAD commit.
pub mod current_tag;
