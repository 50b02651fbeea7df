//! # hop-git
//!
//! Git operations abstraction layer for hop, built on git2-rs.
//! Provides history walking with ordinal-based commit lookup, checkout,
//! reset, and diff operations.

mod error;
mod repository;

pub use error::{Error, Result};
pub use git2::Oid;
pub use repository::{CommitInfo, DiffSummary, Repository};
