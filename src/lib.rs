// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! git-auto-tag - automatic commit and tag hook
//!
//! Invoked after file-modifying operations in an editing session. When the
//! working tree has accumulated enough change since the last automatic
//! commit, it stages everything, commits, and tags the commit with the next
//! patch version (`0.0.1`, `0.0.2`, ...).
//!
//! The hook never fails its host: every problem is logged to stderr and the
//! process exits successfully.
//!
//! # Example
//!
//! ```no_run
//! use git_auto_tag::config;
//! use git_auto_tag::git::GitCli;
//! use git_auto_tag::hooks::Pipeline;
//! use git_auto_tag::state::StateStore;
//!
//! let resolved = config::resolve(None);
//! let vcs = GitCli::current().unwrap();
//! let state = StateStore::new(&resolved.data_dir);
//!
//! let outcome = Pipeline::new(&resolved.config, &vcs, &state).run(chrono::Utc::now());
//! println!("{:?}", outcome);
//! ```

// Module declarations
pub mod analysis;
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod hooks;
pub mod logging;
pub mod rules;
pub mod state;

// Re-exports for convenience
pub use config::HookConfig;
pub use error::{AutoTagError, Result, Skip};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of git-auto-tag.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
