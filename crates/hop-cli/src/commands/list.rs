//! `hop list` command - list commits with their ordinals.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::utils::open_repo_and_config;
use hop_git::CommitInfo;

/// Serializable record for a single commit.
#[derive(Debug, Clone, Serialize)]
pub struct CommitRecord {
    pub ordinal: usize,
    pub hash: String,
    pub summary: String,
    pub author: String,
    pub time: DateTime<Utc>,
}

impl From<&CommitInfo> for CommitRecord {
    fn from(commit: &CommitInfo) -> Self {
        Self {
            ordinal: commit.ordinal,
            hash: commit.id.to_string(),
            summary: commit.summary.clone(),
            author: commit.author.clone(),
            time: commit.time,
        }
    }
}

/// Run the list command.
pub fn run(json: bool) -> Result<()> {
    let (repo, _config) = open_repo_and_config()?;

    let commits = repo.commits()?;

    if json {
        let records: Vec<CommitRecord> = commits.iter().map(CommitRecord::from).collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        for commit in &commits {
            println!("{}. {} {}", commit.ordinal, commit.short_id, commit.summary);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn test_commit_record_serializes() {
        let record = CommitRecord {
            ordinal: 2,
            hash: "abc1234def".to_string(),
            summary: "Fix the thing".to_string(),
            author: "Alice".to_string(),
            time: DateTime::UNIX_EPOCH,
        };
        let json = serde_json::to_string(&record).expect("serialization should succeed");
        assert!(json.contains("abc1234def"));
        assert!(json.contains("Fix the thing"));
        assert!(json.contains("\"ordinal\":2"));
    }
}
