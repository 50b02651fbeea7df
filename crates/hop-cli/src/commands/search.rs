//! `hop search` command - search commit messages.

use anyhow::Result;

use super::list::CommitRecord;
use super::utils::{leave_detached_head, open_repo_and_config};
use crate::output;

/// Run the search command.
pub fn run(key: &str, json: bool) -> Result<()> {
    let (repo, config) = open_repo_and_config()?;

    leave_detached_head(&repo, &config.general.main_branch)?;

    let matches = repo.search_commits(key)?;

    if json {
        let records: Vec<CommitRecord> = matches.iter().map(CommitRecord::from).collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if matches.is_empty() {
        output::warn(&format!("No commit messages match '{key}'"));
        return Ok(());
    }

    for commit in &matches {
        println!("{} {} \"{}\"", commit.ordinal, commit.short_id, commit.summary);
    }

    Ok(())
}
