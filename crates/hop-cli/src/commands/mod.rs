//! CLI argument definitions and one module per subcommand.

pub mod completions;
pub mod count;
pub mod diff;
pub mod goto;
pub mod list;
pub mod reset;
pub mod search;
mod utils;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Shorthand commands for navigating git history.
#[derive(Debug, Parser)]
#[command(name = "hop", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check out the nth commit (1 = oldest)
    Goto {
        /// Ordinal of the commit to check out
        n: usize,
    },
    /// Discard local changes and return to the main branch
    Reset,
    /// List commits with their ordinals
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show changed files and the patch between two commits
    Diff {
        /// Ordinal of the older side
        m: usize,
        /// Ordinal of the newer side
        n: usize,
    },
    /// Search commit messages
    Search {
        /// Case-insensitive substring to look for
        key: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Count non-blank lines of code per file
    Count {
        /// Root directory to count (defaults to the current directory)
        path: Option<PathBuf>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}
