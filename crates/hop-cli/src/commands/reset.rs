//! `hop reset` command - discard local changes and return to the main branch.

use anyhow::Result;

use super::utils::open_repo_and_config;
use crate::output;

/// Run the reset command.
pub fn run() -> Result<()> {
    let (repo, config) = open_repo_and_config()?;

    if !repo.is_clean()? {
        repo.discard_changes()?;
        output::info("Discarded local changes.");
    }

    let main_branch = &config.general.main_branch;
    repo.checkout_branch(main_branch)?;
    output::success(&format!("Now on branch '{main_branch}'"));

    Ok(())
}
