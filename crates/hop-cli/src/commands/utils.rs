use anyhow::{Context, Result};
use hop_core::Config;
use hop_git::Repository;

use crate::output;

/// Helper to open the repository and its configuration.
pub fn open_repo_and_config() -> Result<(Repository, Config)> {
    let repo = Repository::open_current().context("Not inside a git repository")?;
    let config = match repo.workdir() {
        Some(workdir) => Config::load_from_root(workdir)?,
        None => Config::default(),
    };
    Ok((repo, config))
}

/// Report the current branch; if HEAD is detached, return to the main
/// branch first so history operations start from a branch tip.
pub fn leave_detached_head(repo: &Repository, main_branch: &str) -> Result<()> {
    if repo.head_detached()? {
        output::info("Currently in detached HEAD state.");
        output::info(&format!("Checking out '{main_branch}' first..."));
        repo.checkout_branch(main_branch)?;
    } else {
        output::info(&format!(
            "Currently on branch: {}",
            repo.current_branch()?
        ));
    }
    Ok(())
}
