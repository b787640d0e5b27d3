// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Working-tree analysis.
//!
//! Probes the repository state and turns the changed-file list into the
//! statistics the decision gate works from.

mod exclude;
mod probe;
mod stats;

pub use exclude::{ExcludePattern, ExcludeSet};
pub use probe::{has_uncommitted_changes, is_repository};
pub use stats::{collect_stats, parse_stat_summary, ChangeStats};
