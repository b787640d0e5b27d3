// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Threshold evaluation.

use crate::analysis::ChangeStats;
use crate::config::HookConfig;
use crate::error::Skip;

const MS_PER_MINUTE: i64 = 60_000;

/// Everything the gate looks at for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Facts {
    /// The working directory is inside a git work tree.
    pub is_repository: bool,
    /// `git status` reports changes.
    pub has_changes: bool,
    /// Last automatic commit, epoch milliseconds (0 when unknown).
    pub last_commit_ms: i64,
    /// Current time, epoch milliseconds.
    pub now_ms: i64,
    /// Post-exclusion change statistics.
    pub stats: ChangeStats,
}

/// Applies the configured thresholds.
#[derive(Debug, Clone, Copy)]
pub struct Gate<'a> {
    config: &'a HookConfig,
}

impl<'a> Gate<'a> {
    /// Create a gate for the given configuration.
    pub fn new(config: &'a HookConfig) -> Self {
        Self { config }
    }

    /// Require a repository.
    pub fn check_repository(&self, is_repository: bool) -> Result<(), Skip> {
        if is_repository {
            Ok(())
        } else {
            Err(Skip::NotARepository)
        }
    }

    /// Require uncommitted changes.
    pub fn check_changes_present(&self, has_changes: bool) -> Result<(), Skip> {
        if has_changes {
            Ok(())
        } else {
            Err(Skip::NoChanges)
        }
    }

    /// Require the minimum interval since the last automatic commit.
    pub fn check_interval(&self, last_commit_ms: i64, now_ms: i64) -> Result<(), Skip> {
        let min_interval = i64::try_from(self.config.min_interval_ms).unwrap_or(i64::MAX);
        let elapsed = now_ms.saturating_sub(last_commit_ms);

        if elapsed >= min_interval {
            return Ok(());
        }

        let remaining = min_interval.saturating_sub(elapsed);
        let remaining_minutes = remaining / MS_PER_MINUTE
            + i64::from(remaining % MS_PER_MINUTE != 0);

        Err(Skip::IntervalNotElapsed {
            remaining_minutes: remaining_minutes as u64,
        })
    }

    /// Require at least one countable file, then enough changed files or
    /// enough changed lines.
    pub fn check_thresholds(&self, stats: &ChangeStats) -> Result<(), Skip> {
        if stats.is_empty() {
            return Err(Skip::NothingToCommit);
        }

        let meets_files = stats.files_changed >= self.config.min_files;
        let meets_lines = stats.total_lines >= self.config.min_lines;

        if meets_files || meets_lines {
            tracing::debug!(
                "Thresholds met: files={}, lines={}",
                stats.files_changed,
                stats.total_lines
            );
            Ok(())
        } else {
            Err(Skip::BelowThreshold {
                files: stats.files_changed,
                min_files: self.config.min_files,
                lines: stats.total_lines,
                min_lines: self.config.min_lines,
            })
        }
    }

    /// Evaluate every condition in order, stopping at the first failure.
    pub fn evaluate(&self, facts: &Facts) -> Result<(), Skip> {
        self.check_repository(facts.is_repository)?;
        self.check_changes_present(facts.has_changes)?;
        self.check_interval(facts.last_commit_ms, facts.now_ms)?;
        self.check_thresholds(&facts.stats)
    }
}
