// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error and skip types for git-auto-tag.
//!
//! Two families live here. [`AutoTagError`] covers real failures (a git
//! subprocess exiting non-zero, an unreadable state file, malformed input).
//! [`Skip`] covers the expected short-circuits of the hook pipeline, which
//! always end the run cleanly.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for git-auto-tag operations.
#[derive(Error, Debug)]
pub enum AutoTagError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Git subprocess errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    // Persisted state errors
    #[error("State error: {0}")]
    State(#[from] StateError),

    // Hook input errors
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration file {path}: {message}")]
    ReadFailed { path: PathBuf, message: String },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },
}

/// Errors raised at the git subprocess boundary.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("Failed to run git {command}: {message}")]
    Spawn { command: String, message: String },

    #[error("Git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },

    #[error("Invalid version tag: {tag}")]
    InvalidTag { tag: String },
}

/// Errors reading or writing the last-commit timestamp file.
#[derive(Error, Debug)]
pub enum StateError {
    #[error("Failed to read state file {path}: {message}")]
    ReadFailed { path: PathBuf, message: String },

    #[error("Invalid timestamp in {path}: {content:?}")]
    InvalidTimestamp { path: PathBuf, content: String },

    #[error("Failed to write state file {path}: {message}")]
    WriteFailed { path: PathBuf, message: String },
}

/// Errors decoding the hook's stdin payload.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read stdin: {message}")]
    ReadFailed { message: String },

    #[error("Empty hook input")]
    Empty,

    #[error("Failed to parse hook input: {message}")]
    ParseFailed { message: String },
}

/// Result type alias for git-auto-tag operations.
pub type Result<T> = std::result::Result<T, AutoTagError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| AutoTagError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}

/// A reason the pipeline stopped early without doing anything wrong.
///
/// Every variant ends the hook with a zero exit status.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Skip {
    #[error("Not a git repository, skipping")]
    NotARepository,

    #[error("No uncommitted changes, skipping")]
    NoChanges,

    #[error("Time threshold not met ({remaining_minutes}min remaining), skipping")]
    IntervalNotElapsed { remaining_minutes: u64 },

    #[error(
        "Change threshold not met (files: {files}/{min_files}, lines: {lines}/{min_lines}), skipping"
    )]
    BelowThreshold {
        files: u64,
        min_files: u64,
        lines: u64,
        min_lines: u64,
    },

    #[error("No files to commit after exclusion filter, skipping")]
    NothingToCommit,

    #[error("git add failed, skipping")]
    StageFailed,

    #[error("git commit failed, skipping")]
    CommitFailed,

    #[error("Invalid hook input, skipping")]
    InvalidInput,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_error_display() {
        let err = GitError::CommandFailed {
            command: "commit".to_string(),
            message: "nothing to commit".to_string(),
        };
        assert!(err.to_string().contains("commit"));
        assert!(err.to_string().contains("nothing to commit"));
    }

    #[test]
    fn test_state_error_display() {
        let err = StateError::InvalidTimestamp {
            path: PathBuf::from("/tmp/.last-commit"),
            content: "abc".to_string(),
        };
        assert!(err.to_string().contains(".last-commit"));
        assert!(err.to_string().contains("abc"));
    }

    #[test]
    fn test_error_from_git_error() {
        let err: AutoTagError = GitError::NotARepository.into();
        assert_eq!(err.to_string(), "Git error: Not a git repository");
    }

    #[test]
    fn test_skip_interval_message() {
        let skip = Skip::IntervalNotElapsed {
            remaining_minutes: 4,
        };
        assert_eq!(
            skip.to_string(),
            "Time threshold not met (4min remaining), skipping"
        );
    }

    #[test]
    fn test_skip_threshold_message() {
        let skip = Skip::BelowThreshold {
            files: 1,
            min_files: 2,
            lines: 10,
            min_lines: 50,
        };
        assert!(skip.to_string().contains("files: 1/2"));
        assert!(skip.to_string().contains("lines: 10/50"));
    }

    #[test]
    fn test_context_ext() {
        let res: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        let err = res.context("reading state").unwrap_err();
        assert_eq!(err.to_string(), "reading state: missing");
    }
}
