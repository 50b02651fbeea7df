//! Directory traversal and non-blank line counting.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::ignore::NameMatcher;

/// Line count for a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCount {
    /// Path relative to the counting root.
    pub path: PathBuf,
    /// Number of non-blank lines.
    pub lines: usize,
}

/// Walk `root` depth-first and count non-blank lines per file.
///
/// Entries are visited in name order, files before subdirectories, so the
/// result order is deterministic regardless of filesystem. Directories
/// whose name matches the matcher are pruned entirely; files that cannot
/// be read are skipped and the walk continues.
///
/// # Errors
/// Returns error only if the root directory itself cannot be read.
pub fn count_tree(root: &Path, matcher: &dyn NameMatcher) -> Result<Vec<FileCount>> {
    let mut counts = Vec::new();
    walk_dir(root, root, matcher, &mut counts)?;
    Ok(counts)
}

fn walk_dir(
    root: &Path,
    dir: &Path,
    matcher: &dyn NameMatcher,
    counts: &mut Vec<FileCount>,
) -> Result<()> {
    let mut entries: Vec<fs::DirEntry> = fs::read_dir(dir)?
        .filter_map(std::result::Result::ok)
        .collect();
    entries.sort_by_key(fs::DirEntry::file_name);

    let mut subdirs = Vec::new();
    for entry in entries {
        let name = entry.file_name().to_string_lossy().into_owned();
        if matcher.is_excluded(&name) {
            continue;
        }

        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        let path = entry.path();
        if file_type.is_dir() {
            subdirs.push(path);
        } else if file_type.is_file() {
            if let Some(lines) = count_lines(&path) {
                let relative = path.strip_prefix(root).unwrap_or(&path).to_path_buf();
                counts.push(FileCount {
                    path: relative,
                    lines,
                });
            }
        }
    }

    for subdir in subdirs {
        // an unreadable subdirectory is skipped like an unreadable file;
        // only a root read failure aborts
        let _ = walk_dir(root, &subdir, matcher, counts);
    }

    Ok(())
}

/// Count lines with non-empty trimmed content. Returns `None` if the file
/// cannot be read; invalid UTF-8 is decoded lossily.
fn count_lines(path: &Path) -> Option<usize> {
    let bytes = fs::read(path).ok()?;
    let text = String::from_utf8_lossy(&bytes);
    Some(text.lines().filter(|line| !line.trim().is_empty()).count())
}
