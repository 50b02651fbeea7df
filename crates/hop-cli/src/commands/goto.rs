//! `hop goto` command - check out a commit by its ordinal.

use anyhow::Result;

use super::utils::{leave_detached_head, open_repo_and_config};
use crate::output;

/// Run the goto command.
pub fn run(n: usize) -> Result<()> {
    let (repo, config) = open_repo_and_config()?;

    leave_detached_head(&repo, &config.general.main_branch)?;

    let oid = repo.nth_commit(n)?;
    repo.checkout_commit(oid)?;

    let id = oid.to_string();
    let short = id.get(..7).unwrap_or(&id);
    output::success(&format!("HEAD is now at {short} (commit #{n})"));

    Ok(())
}
