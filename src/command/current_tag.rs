//! Current tag query command implementation.
use log::*;
use std::path::Path;

use crate::{cli, error::Result, repo::Repository};

/// Print the name of the tag targeting HEAD, if one exists.
pub fn execute(args: &cli::Args) -> Result<()> {
    let repo = Repository::open(Path::new(&args.repo_path))?;

    match repo.current_tag()? {
        Some(tag) => println!("{tag}"),
        None => warn!("no tag targets the current commit"),
    }

    Ok(())
}
