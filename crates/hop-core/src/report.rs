//! Tree rendering for line-count reports.

use std::fmt::Write;

use crate::walk::FileCount;

const INDENT: &str = "  ";

/// Render counts as an indented tree followed by the grand total.
///
/// Entries must be in traversal order (depth-first, directories before
/// their descendants): each directory header is printed once, files are
/// indented one level deeper than their directory, and the last line is
/// `Total lines of code: <N>`.
#[must_use]
pub fn render_tree(entries: &[FileCount]) -> String {
    let mut out = String::new();
    let mut open_dirs: Vec<String> = Vec::new();

    for entry in entries {
        let dirs: Vec<String> = entry.path.parent().map_or_else(Vec::new, |parent| {
            parent
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect()
        });

        // keep the common prefix of the directory we are already inside
        let common = open_dirs
            .iter()
            .zip(dirs.iter())
            .take_while(|(open, dir)| open == dir)
            .count();
        open_dirs.truncate(common);

        for dir in &dirs[common..] {
            let _ = writeln!(out, "{}{dir}/", INDENT.repeat(open_dirs.len()));
            open_dirs.push(dir.clone());
        }

        let name = entry
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let _ = writeln!(out, "{}{name}: {}", INDENT.repeat(open_dirs.len()), entry.lines);
    }

    let total: usize = entries.iter().map(|entry| entry.lines).sum();
    let _ = writeln!(out, "Total lines of code: {total}");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn entry(path: &str, lines: usize) -> FileCount {
        FileCount {
            path: PathBuf::from(path),
            lines,
        }
    }

    #[test]
    fn test_empty_report_prints_zero_total() {
        assert_eq!(render_tree(&[]), "Total lines of code: 0\n");
    }

    #[test]
    fn test_flat_files_with_total() {
        let entries = [entry("a.txt", 3), entry("b.txt", 2)];
        assert_eq!(
            render_tree(&entries),
            "a.txt: 3\nb.txt: 2\nTotal lines of code: 5\n"
        );
    }

    #[test]
    fn test_directory_headers_printed_once() {
        let entries = [
            entry("a.txt", 3),
            entry("src/main.rs", 10),
            entry("src/lib.rs", 4),
        ];
        assert_eq!(
            render_tree(&entries),
            "a.txt: 3\nsrc/\n  main.rs: 10\n  lib.rs: 4\nTotal lines of code: 17\n"
        );
    }

    #[test]
    fn test_nested_directories_indent_by_depth() {
        let entries = [
            entry("src/main.rs", 1),
            entry("src/commands/mod.rs", 2),
            entry("src/commands/list.rs", 3),
            entry("tests/integration.rs", 4),
        ];
        assert_eq!(
            render_tree(&entries),
            "src/\n  main.rs: 1\n  commands/\n    mod.rs: 2\n    list.rs: 3\ntests/\n  integration.rs: 4\nTotal lines of code: 10\n"
        );
    }

    #[test]
    fn test_sibling_directory_reuses_parent_header() {
        let entries = [entry("a/b/x.txt", 1), entry("a/c/y.txt", 2)];
        assert_eq!(
            render_tree(&entries),
            "a/\n  b/\n    x.txt: 1\n  c/\n    y.txt: 2\nTotal lines of code: 3\n"
        );
    }

    #[test]
    fn test_rendering_does_not_change_counts() {
        let entries = [entry("a.txt", 0), entry("b.txt", 0)];
        assert_eq!(
            render_tree(&entries),
            "a.txt: 0\nb.txt: 0\nTotal lines of code: 0\n"
        );
    }
}
