// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Change statistics.

use crate::config::HookConfig;
use crate::git::Vcs;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use super::exclude::ExcludeSet;

lazy_static! {
    static ref INSERTIONS_REGEX: Regex = Regex::new(r"([0-9]+)\s+insertions?\(\+\)").unwrap();
    static ref DELETIONS_REGEX: Regex = Regex::new(r"([0-9]+)\s+deletions?\(-\)").unwrap();
}

/// Aggregate statistics about the working-tree changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ChangeStats {
    /// Changed files left after exclusion.
    pub files_changed: u64,
    /// Lines added, as reported by git.
    pub insertions: u64,
    /// Lines removed, as reported by git.
    pub deletions: u64,
    /// `insertions + deletions`.
    pub total_lines: u64,
}

impl ChangeStats {
    /// Build stats from a filtered file count and git's line totals.
    pub fn new(files_changed: u64, insertions: u64, deletions: u64) -> Self {
        Self {
            files_changed,
            insertions,
            deletions,
            total_lines: insertions.saturating_add(deletions),
        }
    }

    /// Check if nothing is left to commit.
    pub fn is_empty(&self) -> bool {
        self.files_changed == 0
    }
}

/// Extract `(insertions, deletions)` from the summary line of
/// `git diff --stat`. A missing count reads as zero.
pub fn parse_stat_summary(output: &str) -> (u64, u64) {
    let summary = output.trim().lines().last().unwrap_or("");
    (
        capture_count(&INSERTIONS_REGEX, summary),
        capture_count(&DELETIONS_REGEX, summary),
    )
}

fn capture_count(re: &Regex, line: &str) -> u64 {
    re.captures(line)
        .and_then(|c| c[1].parse::<u64>().ok())
        .unwrap_or(0)
}

/// Collect statistics for the non-excluded changes in the working tree.
///
/// The file count reflects exclusions; the line totals are git's own and
/// still include lines from excluded files. Any git failure yields the
/// zero record.
pub fn collect_stats(vcs: &dyn Vcs, config: &HookConfig) -> ChangeStats {
    let names = match vcs.changed_file_names() {
        Ok(names) => names,
        Err(e) => {
            tracing::error!("Failed to get diff stats: {}", e);
            return ChangeStats::default();
        }
    };

    let excludes = ExcludeSet::new(&config.exclude_patterns);
    let files = excludes.filter(names.lines().map(str::trim).filter(|l| !l.is_empty()));

    if files.is_empty() {
        tracing::debug!("No files to commit after exclusion filter");
        return ChangeStats::default();
    }

    let stat = match vcs.diff_stat() {
        Ok(stat) => stat,
        Err(e) => {
            tracing::error!("Failed to get diff stats: {}", e);
            return ChangeStats::default();
        }
    };

    let (insertions, deletions) = parse_stat_summary(&stat);
    let stats = ChangeStats::new(files.len() as u64, insertions, deletions);

    tracing::debug!(
        "Diff stats: {} files, +{}/-{} lines",
        stats.files_changed,
        stats.insertions,
        stats.deletions
    );

    stats
}
