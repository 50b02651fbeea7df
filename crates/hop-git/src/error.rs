//! Error types for hop-git.

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during git operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Not inside a git repository.
    #[error("not a git repository")]
    NotARepository,

    /// No commit exists at the requested ordinal.
    #[error("commit not found: #{0}")]
    CommitNotFound(usize),

    /// Branch not found.
    #[error("branch not found: {0}")]
    BranchNotFound(String),

    /// HEAD is detached (not on a branch).
    #[error("HEAD is detached - not on any branch")]
    DetachedHead,

    /// The repository has no commits yet.
    #[error("repository has no commits")]
    EmptyHistory,

    /// Underlying git2 error.
    #[error("git error: {0}")]
    Git2(#[from] git2::Error),
}
