// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Last-commit timestamp persistence.
//!
//! The hook remembers when it last committed by writing milliseconds since
//! the Unix epoch, as plain text, to a single file in its data directory.

use crate::error::{AutoTagError, Result, StateError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// State file name inside the hook data directory.
pub const STATE_FILE: &str = ".last-commit";

/// Reads and writes the last-commit timestamp.
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    /// Store the state file inside `data_dir`.
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(STATE_FILE),
        }
    }

    /// Path of the state file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored timestamp. `Ok(None)` when the file does not exist.
    pub fn read(&self) -> Result<Option<i64>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(AutoTagError::State(StateError::ReadFailed {
                    path: self.path.clone(),
                    message: e.to_string(),
                }))
            }
        };

        let trimmed = content.trim();
        trimmed.parse::<i64>().map(Some).map_err(|_| {
            AutoTagError::State(StateError::InvalidTimestamp {
                path: self.path.clone(),
                content: trimmed.to_string(),
            })
        })
    }

    /// Last commit time in epoch milliseconds, or 0 when unknown.
    pub fn last_commit_ms(&self) -> i64 {
        match self.read() {
            Ok(Some(ms)) => {
                tracing::debug!("Last commit time: {}", describe_ms(ms));
                ms
            }
            Ok(None) => 0,
            Err(e) => {
                tracing::debug!("Failed to read last commit time: {}", e);
                0
            }
        }
    }

    /// Record `now_ms` as the last commit time, creating the data
    /// directory if needed.
    pub fn save(&self, now_ms: i64) -> Result<()> {
        let write = || -> std::io::Result<()> {
            if let Some(dir) = self.path.parent() {
                fs::create_dir_all(dir)?;
            }
            fs::write(&self.path, now_ms.to_string())
        };

        write().map_err(|e| {
            AutoTagError::State(StateError::WriteFailed {
                path: self.path.clone(),
                message: e.to_string(),
            })
        })?;

        tracing::debug!("Saved commit time");
        Ok(())
    }
}

fn describe_ms(ms: i64) -> String {
    chrono::DateTime::from_timestamp_millis(ms)
        .map(|t| t.to_rfc3339())
        .unwrap_or_else(|| ms.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_zero() {
        let dir = TempDir::new().unwrap();
        let store = StateStore::new(dir.path());
        assert!(store.read().unwrap().is_none());
        assert_eq!(store.last_commit_ms(), 0);
    }

    #[test]
    fn test_garbage_is_zero() {
        let dir = TempDir::new().unwrap();
        let store = StateStore::new(dir.path());
        fs::write(store.path(), "not a number").unwrap();
        assert!(matches!(
            store.read(),
            Err(AutoTagError::State(StateError::InvalidTimestamp { .. }))
        ));
        assert_eq!(store.last_commit_ms(), 0);
    }

    #[test]
    fn test_value_used_verbatim() {
        let dir = TempDir::new().unwrap();
        let store = StateStore::new(dir.path());
        fs::write(store.path(), "1700000000123\n").unwrap();
        assert_eq!(store.last_commit_ms(), 1_700_000_000_123);
    }

    #[test]
    fn test_save_creates_parent_and_overwrites() {
        let dir = TempDir::new().unwrap();
        let data_dir = dir.path().join(".claude/hooks/git-auto-tag-v2");
        let store = StateStore::new(&data_dir);

        store.save(1).unwrap();
        store.save(1_700_000_000_000).unwrap();

        assert_eq!(
            fs::read_to_string(data_dir.join(STATE_FILE)).unwrap(),
            "1700000000000"
        );
        assert_eq!(store.last_commit_ms(), 1_700_000_000_000);
    }

    #[test]
    fn test_save_failure_is_error() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "x").unwrap();
        // Parent "directory" is a regular file.
        let store = StateStore::new(&blocker.join("nested"));
        assert!(matches!(
            store.save(5),
            Err(AutoTagError::State(StateError::WriteFailed { .. }))
        ));
    }
}
