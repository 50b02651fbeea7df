//! `hop diff` command - diff two commits by their ordinals.

use anyhow::Result;

use super::utils::open_repo_and_config;

/// Run the diff command.
pub fn run(m: usize, n: usize) -> Result<()> {
    let (repo, _config) = open_repo_and_config()?;

    let older = repo.nth_commit(m)?;
    let newer = repo.nth_commit(n)?;
    let diff = repo.diff_commits(older, newer)?;

    println!("Changes in folder structure:");
    for file in &diff.files {
        println!("{file}");
    }

    println!("\nDifferences between the #{m} and #{n} commits:");
    print!("{}", diff.patch);

    Ok(())
}
