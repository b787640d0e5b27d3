// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use super::default::{
    DEFAULT_EXCLUDE_PATTERNS, DEFAULT_MIN_FILES, DEFAULT_MIN_INTERVAL_MS, DEFAULT_MIN_LINES,
};

/// The resolved configuration for one hook invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HookConfig {
    /// Minimum time between automatic commits, in milliseconds.
    pub min_interval_ms: u64,

    /// Minimum number of (non-excluded) changed files.
    pub min_files: u64,

    /// Minimum number of changed lines (insertions + deletions).
    pub min_lines: u64,

    /// Exclusion patterns applied to changed file paths.
    pub exclude_patterns: Vec<String>,

    /// Whether debug logging is enabled.
    pub debug: bool,
}

impl Default for HookConfig {
    fn default() -> Self {
        Self {
            min_interval_ms: DEFAULT_MIN_INTERVAL_MS,
            min_files: DEFAULT_MIN_FILES,
            min_lines: DEFAULT_MIN_LINES,
            exclude_patterns: DEFAULT_EXCLUDE_PATTERNS
                .iter()
                .map(|p| p.to_string())
                .collect(),
            debug: false,
        }
    }
}

impl HookConfig {
    /// Apply the values present in a config file on top of this one.
    pub fn merge_file(mut self, file: FileConfig) -> Self {
        if let Some(secs) = file.min_interval {
            self.min_interval_ms = secs.saturating_mul(1000);
        }
        if let Some(files) = file.min_files {
            self.min_files = files;
        }
        if let Some(lines) = file.min_lines {
            self.min_lines = lines;
        }
        if let Some(patterns) = file.exclude_patterns {
            self.exclude_patterns = patterns;
        }
        if let Some(debug) = file.debug {
            self.debug = debug;
        }
        self
    }
}

/// On-disk configuration. Every key is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Minimum interval in seconds.
    pub min_interval: Option<u64>,
    pub min_files: Option<u64>,
    pub min_lines: Option<u64>,
    pub exclude_patterns: Option<Vec<String>>,
    pub debug: Option<bool>,
}
