//! `hop count` command - count non-blank lines of code per file.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use hop_core::{count_tree, load_patterns, render_tree, FileCount, GlobNameMatcher};

/// Serializable line-count report.
#[derive(Debug, Serialize)]
struct CountReport {
    files: Vec<FileRecord>,
    total: usize,
}

#[derive(Debug, Serialize)]
struct FileRecord {
    path: String,
    lines: usize,
}

impl From<&FileCount> for FileRecord {
    fn from(count: &FileCount) -> Self {
        Self {
            path: count.path.to_string_lossy().into_owned(),
            lines: count.lines,
        }
    }
}

/// Run the count command.
pub fn run(path: Option<&Path>, json: bool) -> Result<()> {
    let root = path.unwrap_or_else(|| Path::new("."));

    let patterns = load_patterns(root);
    let matcher = GlobNameMatcher::new(&patterns);
    let counts = count_tree(root, &matcher)
        .with_context(|| format!("Cannot read directory '{}'", root.display()))?;

    if json {
        let report = CountReport {
            files: counts.iter().map(FileRecord::from).collect(),
            total: counts.iter().map(|count| count.lines).sum(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_tree(&counts));
    }

    Ok(())
}
