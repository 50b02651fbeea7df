//! Ignore-file loading and name-based glob matching.

use std::fs;
use std::path::Path;

use globset::Glob;

/// Name of the ignore file looked up at the counting root.
pub const IGNORE_FILE: &str = ".hopignore";

/// Directory always excluded from counting.
const GIT_DIR: &str = ".git";

/// Strategy for deciding whether a bare file or directory name is excluded.
///
/// The traversal only sees this trait, so the matching scheme can be
/// swapped (e.g. for path-rooted patterns) without touching the walker.
pub trait NameMatcher {
    /// Whether the given name matches an exclusion pattern.
    fn is_excluded(&self, name: &str) -> bool;
}

/// Shell-glob matcher over bare names, compiled with globset.
pub struct GlobNameMatcher {
    globs: Vec<globset::GlobMatcher>,
}

impl GlobNameMatcher {
    /// Compile a pattern set. Patterns that fail to compile are skipped
    /// with a warning on stderr.
    #[must_use]
    pub fn new(patterns: &[String]) -> Self {
        let globs = patterns
            .iter()
            .filter_map(|pattern| match Glob::new(pattern) {
                Ok(glob) => Some(glob.compile_matcher()),
                Err(err) => {
                    eprintln!("warning: skipping invalid pattern '{pattern}': {err}");
                    None
                }
            })
            .collect();
        Self { globs }
    }
}

impl NameMatcher for GlobNameMatcher {
    fn is_excluded(&self, name: &str) -> bool {
        self.globs.iter().any(|glob| glob.is_match(name))
    }
}

/// Read the exclusion patterns for a counting root.
///
/// Parses `.hopignore` under `root` if present: one glob per line, `#`
/// starts a comment, blank lines are skipped, and surrounding whitespace
/// and path separators are trimmed. The built-in `.git` exclusion is
/// always present, so a missing ignore-file is not an error.
#[must_use]
pub fn load_patterns(root: &Path) -> Vec<String> {
    let mut patterns = Vec::new();

    if let Ok(content) = fs::read_to_string(root.join(IGNORE_FILE)) {
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let line = line.trim_matches(|c| c == '/' || c == '\\');
            if !line.is_empty() {
                patterns.push(line.to_string());
            }
        }
    }

    patterns.push(GIT_DIR.to_string());
    patterns
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_ignore_file_yields_builtin_only() {
        let temp = TempDir::new().unwrap();
        let patterns = load_patterns(temp.path());
        assert_eq!(patterns, vec![GIT_DIR.to_string()]);
    }

    #[test]
    fn test_comments_and_blanks_are_skipped() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(IGNORE_FILE),
            "# generated artifacts\n\n*.log\n\nbuild/\n  \n# trailing comment\n",
        )
        .unwrap();

        let patterns = load_patterns(temp.path());
        assert_eq!(
            patterns,
            vec!["*.log".to_string(), "build".to_string(), GIT_DIR.to_string()]
        );
    }

    #[test]
    fn test_surrounding_separators_are_trimmed() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(IGNORE_FILE), "/target/\n\\cache\\\n").unwrap();

        let patterns = load_patterns(temp.path());
        assert_eq!(
            patterns,
            vec!["target".to_string(), "cache".to_string(), GIT_DIR.to_string()]
        );
    }

    #[test]
    fn test_glob_matching_on_bare_names() {
        let matcher = GlobNameMatcher::new(&["*.log".to_string(), "build".to_string()]);

        assert!(matcher.is_excluded("run.log"));
        assert!(matcher.is_excluded("build"));
        assert!(!matcher.is_excluded("run.txt"));
        assert!(!matcher.is_excluded("builder"));
    }

    #[test]
    fn test_invalid_pattern_is_skipped() {
        let matcher = GlobNameMatcher::new(&["a{b".to_string(), "*.log".to_string()]);

        assert!(matcher.is_excluded("run.log"));
        assert!(!matcher.is_excluded("a{b"));
    }

    #[test]
    fn test_duplicate_patterns_are_harmless() {
        let matcher = GlobNameMatcher::new(&["build".to_string(), "build".to_string()]);
        assert!(matcher.is_excluded("build"));
    }
}
