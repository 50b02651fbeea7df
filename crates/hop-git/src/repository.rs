//! Repository wrapper providing high-level git operations.

use std::path::Path;

use chrono::{DateTime, Utc};
use git2::{BranchType, DiffFormat, Oid};

use crate::error::{Error, Result};

/// A single commit in the history reachable from HEAD.
#[derive(Debug, Clone)]
pub struct CommitInfo {
    /// 1-based position counting from the oldest commit.
    pub ordinal: usize,
    /// Full commit id.
    pub id: Oid,
    /// Abbreviated commit id.
    pub short_id: String,
    /// First line of the commit message.
    pub summary: String,
    /// Author name.
    pub author: String,
    /// Commit time.
    pub time: DateTime<Utc>,
}

/// Changed files and patch text between two commits.
#[derive(Debug, Clone)]
pub struct DiffSummary {
    /// Paths touched by the diff, in delta order.
    pub files: Vec<String>,
    /// Full textual patch.
    pub patch: String,
}

/// High-level wrapper around a git repository.
pub struct Repository {
    inner: git2::Repository,
}

impl Repository {
    /// Open the repository containing the given path.
    ///
    /// # Errors
    /// Returns [`Error::NotARepository`] if no repository is found at the
    /// path or any parent.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let inner =
            git2::Repository::discover(path.as_ref()).map_err(|_| Error::NotARepository)?;
        Ok(Self { inner })
    }

    /// Open the repository containing the current directory.
    ///
    /// # Errors
    /// Returns error if not inside a git repository.
    pub fn open_current() -> Result<Self> {
        Self::open(".")
    }

    /// Get the path to the repository root (workdir).
    #[must_use]
    pub fn workdir(&self) -> Option<&Path> {
        self.inner.workdir()
    }

    // === HEAD and branches ===

    /// Check if HEAD points at a commit rather than a branch.
    ///
    /// # Errors
    /// Returns error if HEAD cannot be read.
    pub fn head_detached(&self) -> Result<bool> {
        Ok(self.inner.head_detached()?)
    }

    /// Get the name of the current branch.
    ///
    /// # Errors
    /// Returns error if HEAD is detached.
    pub fn current_branch(&self) -> Result<String> {
        let head = self.inner.head()?;
        if !head.is_branch() {
            return Err(Error::DetachedHead);
        }

        head.shorthand().map(String::from).ok_or(Error::DetachedHead)
    }

    /// Check if a branch exists.
    #[must_use]
    pub fn branch_exists(&self, name: &str) -> bool {
        self.inner.find_branch(name, BranchType::Local).is_ok()
    }

    /// Checkout a branch, re-attaching HEAD to it.
    ///
    /// # Errors
    /// Returns error if the branch doesn't exist or checkout fails.
    pub fn checkout_branch(&self, branch_name: &str) -> Result<()> {
        let branch = self
            .inner
            .find_branch(branch_name, BranchType::Local)
            .map_err(|_| Error::BranchNotFound(branch_name.into()))?;

        let reference = branch.get();
        let object = reference.peel(git2::ObjectType::Commit)?;

        self.inner.checkout_tree(&object, None)?;
        self.inner.set_head(&format!("refs/heads/{branch_name}"))?;

        Ok(())
    }

    /// Checkout a commit, detaching HEAD at it.
    ///
    /// # Errors
    /// Returns error if the commit doesn't exist or checkout fails.
    pub fn checkout_commit(&self, oid: Oid) -> Result<()> {
        let object = self.inner.find_object(oid, None)?;

        self.inner.checkout_tree(&object, None)?;
        self.inner.set_head_detached(oid)?;

        Ok(())
    }

    // === Working directory state ===

    /// Check if the working directory is clean (no modified, staged, or
    /// untracked files).
    ///
    /// # Errors
    /// Returns error if status check fails.
    pub fn is_clean(&self) -> Result<bool> {
        let statuses = self.inner.statuses(None)?;
        Ok(statuses.is_empty())
    }

    /// Discard all uncommitted changes with a hard reset to HEAD.
    ///
    /// Untracked files are left alone, matching `git reset --hard`.
    ///
    /// # Errors
    /// Returns error if the reset fails.
    pub fn discard_changes(&self) -> Result<()> {
        let head = self.inner.head()?.peel_to_commit()?;
        self.inner
            .reset(head.as_object(), git2::ResetType::Hard, None)?;
        Ok(())
    }

    // === History ===

    /// Walk the history reachable from HEAD, oldest commit first.
    ///
    /// Ordinals count from 1 at the oldest commit, so the number shown for
    /// a commit stays stable as new commits are added on top.
    ///
    /// # Errors
    /// Returns [`Error::EmptyHistory`] if the repository has no commits.
    pub fn commits(&self) -> Result<Vec<CommitInfo>> {
        let mut revwalk = self.inner.revwalk()?;
        revwalk.push_head().map_err(|_| Error::EmptyHistory)?;
        let ids: Vec<Oid> = revwalk.collect::<std::result::Result<_, _>>()?;

        // revwalk yields newest first
        ids.into_iter()
            .rev()
            .enumerate()
            .map(|(idx, id)| {
                let commit = self.inner.find_commit(id)?;
                let id_str = id.to_string();
                let short_id = id_str.get(..7).unwrap_or(&id_str).to_owned();
                let message = commit.message().unwrap_or("");
                let summary = message.lines().next().unwrap_or("").trim().to_owned();
                let author = commit.author().name().unwrap_or("unknown").to_owned();
                let time =
                    DateTime::from_timestamp(commit.time().seconds(), 0).unwrap_or_default();

                Ok(CommitInfo {
                    ordinal: idx + 1,
                    id,
                    short_id,
                    summary,
                    author,
                    time,
                })
            })
            .collect()
    }

    /// Resolve the commit at the given ordinal (1 = oldest).
    ///
    /// # Errors
    /// Returns [`Error::CommitNotFound`] if the ordinal is out of range.
    pub fn nth_commit(&self, n: usize) -> Result<Oid> {
        if n == 0 {
            return Err(Error::CommitNotFound(n));
        }
        let commits = self.commits()?;
        commits
            .get(n - 1)
            .map(|commit| commit.id)
            .ok_or(Error::CommitNotFound(n))
    }

    /// Find commits whose summary contains `needle`, case-insensitively.
    ///
    /// # Errors
    /// Returns error if the history walk fails.
    pub fn search_commits(&self, needle: &str) -> Result<Vec<CommitInfo>> {
        let needle = needle.to_lowercase();
        let commits = self.commits()?;
        Ok(commits
            .into_iter()
            .filter(|commit| commit.summary.to_lowercase().contains(&needle))
            .collect())
    }

    // === Diff ===

    /// Diff two commits, returning the changed-file list and patch text.
    ///
    /// # Errors
    /// Returns error if either commit is missing or the diff fails.
    pub fn diff_commits(&self, older: Oid, newer: Oid) -> Result<DiffSummary> {
        let older_tree = self.inner.find_commit(older)?.tree()?;
        let newer_tree = self.inner.find_commit(newer)?.tree()?;
        let diff = self
            .inner
            .diff_tree_to_tree(Some(&older_tree), Some(&newer_tree), None)?;

        let files = diff
            .deltas()
            .filter_map(|delta| {
                delta
                    .new_file()
                    .path()
                    .or_else(|| delta.old_file().path())
                    .map(|path| path.to_string_lossy().into_owned())
            })
            .collect();

        let mut patch = String::new();
        diff.print(DiffFormat::Patch, |_delta, _hunk, line| {
            // content lines carry their origin marker; headers come raw
            match line.origin() {
                '+' | '-' | ' ' => patch.push(line.origin()),
                _ => {}
            }
            patch.push_str(&String::from_utf8_lossy(line.content()));
            true
        })?;

        Ok(DiffSummary { files, patch })
    }
}

impl std::fmt::Debug for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repository")
            .field("path", &self.inner.path())
            .finish()
    }
}
