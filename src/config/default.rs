// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

/// Minimum time between automatic commits (5 minutes).
pub const DEFAULT_MIN_INTERVAL_MS: u64 = 5 * 60 * 1000;

/// Minimum number of changed files that triggers a commit.
pub const DEFAULT_MIN_FILES: u64 = 2;

/// Minimum number of changed lines that triggers a commit.
pub const DEFAULT_MIN_LINES: u64 = 50;

/// Paths that never count as changes.
pub const DEFAULT_EXCLUDE_PATTERNS: &[&str] = &[
    "*.log",
    "*.tmp",
    ".DS_Store",
    "node_modules/",
    "dist/",
    ".cache/",
    ".last-commit",
];

/// Generate an example configuration file.
pub fn example_config() -> &'static str {
    r#"# git-auto-tag configuration
# Environment variables (GIT_AUTO_TAG_*) override every value here.

# Minimum seconds between two automatic commits
min_interval = 300

# Commit once at least this many files changed...
min_files = 2

# ...or at least this many lines changed
min_lines = 50

# Paths ignored when counting changed files.
#   "dir/"   directory at the root or nested anywhere
#   "*.ext"  suffix match
#   "name"   exact path or basename in any directory
exclude_patterns = ["*.log", "*.tmp", ".DS_Store", "node_modules/", "dist/", ".cache/", ".last-commit"]

debug = false
"#
}
