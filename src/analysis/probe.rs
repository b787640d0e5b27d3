// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Repository state probes.
//!
//! Both probes fail toward inaction: an error from git reads as "not a
//! repository" or "nothing changed".

use crate::git::Vcs;

/// Check whether the working directory is inside a git work tree.
pub fn is_repository(vcs: &dyn Vcs) -> bool {
    match vcs.inside_work_tree() {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!("Not a git repository: {}", e);
            false
        }
    }
}

/// Check whether `git status` reports anything.
pub fn has_uncommitted_changes(vcs: &dyn Vcs) -> bool {
    match vcs.status_porcelain() {
        Ok(status) => {
            let has_changes = !status.trim().is_empty();
            tracing::debug!("Has uncommitted changes: {}", has_changes);
            has_changes
        }
        Err(e) => {
            tracing::error!("Failed to check git status: {}", e);
            false
        }
    }
}
