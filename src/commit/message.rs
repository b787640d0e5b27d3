// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Auto-commit message formatting.

use crate::analysis::ChangeStats;
use chrono::{DateTime, Utc};

/// Sortable, filesystem-safe UTC timestamp with whole-second precision,
/// e.g. `2024-05-01T09-30-00`.
pub fn commit_timestamp(now: &DateTime<Utc>) -> String {
    now.format("%Y-%m-%dT%H-%M-%S").to_string()
}

/// The message used for automatic commits.
pub fn auto_commit_message(now: &DateTime<Utc>, stats: &ChangeStats) -> String {
    format!(
        "Auto: {} - {} files, {} lines",
        commit_timestamp(now),
        stats.files_changed,
        stats.total_lines
    )
}
