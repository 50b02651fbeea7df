//! # hop-core
//!
//! Core library for hop: the line-of-code counter (ignore patterns,
//! directory walker, tree renderer) and repository configuration.

mod config;
mod error;
mod ignore;
mod report;
mod walk;

pub use config::{Config, GeneralConfig, CONFIG_FILE};
pub use error::{Error, Result};
pub use ignore::{load_patterns, GlobNameMatcher, NameMatcher, IGNORE_FILE};
pub use report::render_tree;
pub use walk::{count_tree, FileCount};
