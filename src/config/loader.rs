// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading and environment overlay.

use crate::error::{AutoTagError, ConfigError, Result};
use std::path::{Path, PathBuf};

use super::schema::{FileConfig, HookConfig};

/// Minimum interval override, in seconds.
pub const ENV_MIN_INTERVAL: &str = "GIT_AUTO_TAG_MIN_INTERVAL";
/// Minimum changed-file count override.
pub const ENV_MIN_FILES: &str = "GIT_AUTO_TAG_MIN_FILES";
/// Minimum changed-line count override.
pub const ENV_MIN_LINES: &str = "GIT_AUTO_TAG_MIN_LINES";
/// Debug switch; enabled by `1` or `true`.
pub const ENV_DEBUG: &str = "GIT_AUTO_TAG_DEBUG";
/// Base directory that holds the hook's data directory.
pub const ENV_PROJECT_DIR: &str = "CLAUDE_PROJECT_DIR";

/// Data directory relative to the project base directory.
const HOOK_DATA_DIR: &str = ".claude/hooks/git-auto-tag-v2";

/// Config file name inside the data directory.
const CONFIG_FILE: &str = "config.toml";

/// Source of environment values.
///
/// Implemented for any `Fn(&str) -> Option<String>` so tests can resolve a
/// configuration without touching the process environment.
pub trait EnvLookup {
    /// Look up a variable, returning `None` when unset.
    fn var(&self, key: &str) -> Option<String>;
}

impl<F> EnvLookup for F
where
    F: Fn(&str) -> Option<String>,
{
    fn var(&self, key: &str) -> Option<String> {
        self(key)
    }
}

/// Reads from the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Outcome of configuration resolution.
///
/// Resolution never fails. A broken config file is reported through
/// `file_error` so the caller can log it once logging is set up.
#[derive(Debug)]
pub struct ResolvedConfig {
    /// The effective configuration.
    pub config: HookConfig,
    /// The hook data directory (holds the state file).
    pub data_dir: PathBuf,
    /// The config file that was applied, if any.
    pub file: Option<PathBuf>,
    /// Why a config file was found but ignored.
    pub file_error: Option<AutoTagError>,
}

/// Resolve the hook data directory from `CLAUDE_PROJECT_DIR` or the
/// current working directory.
pub fn hook_data_dir(env: &impl EnvLookup) -> PathBuf {
    let base = env
        .var(ENV_PROJECT_DIR)
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."));
    base.join(HOOK_DATA_DIR)
}

/// Find the configuration file: an explicit path wins, then the hook data
/// directory, then the user's config directory.
pub fn find_config_file(explicit: Option<&Path>, data_dir: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let local = data_dir.join(CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }

    let user = dirs::config_dir()?.join("git-auto-tag").join(CONFIG_FILE);
    if user.exists() {
        return Some(user);
    }

    None
}

/// Load a configuration file from a specific path.
pub fn load_config(path: &Path) -> Result<FileConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    let content = std::fs::read_to_string(path).map_err(|e| {
        AutoTagError::Config(ConfigError::ReadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    })?;

    parse_config(&content)
}

/// Parse a configuration file from a TOML string.
pub fn parse_config(content: &str) -> Result<FileConfig> {
    toml::from_str(content).map_err(|e| {
        AutoTagError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })
}

/// Parse a numeric override. Anything that is not a plain non-negative
/// integer is ignored.
fn parse_count(raw: Option<String>) -> Option<u64> {
    raw.and_then(|value| value.trim().parse::<u64>().ok())
}

/// Overlay environment overrides on a configuration, field by field.
pub fn apply_env(mut config: HookConfig, env: &impl EnvLookup) -> HookConfig {
    if let Some(secs) = parse_count(env.var(ENV_MIN_INTERVAL)) {
        config.min_interval_ms = secs.saturating_mul(1000);
    }
    if let Some(files) = parse_count(env.var(ENV_MIN_FILES)) {
        config.min_files = files;
    }
    if let Some(lines) = parse_count(env.var(ENV_MIN_LINES)) {
        config.min_lines = lines;
    }
    if matches!(env.var(ENV_DEBUG).as_deref(), Some("1") | Some("true")) {
        config.debug = true;
    }
    config
}

/// Resolve the effective configuration using the given environment.
pub fn resolve_with(explicit: Option<&Path>, env: &impl EnvLookup) -> ResolvedConfig {
    let data_dir = hook_data_dir(env);
    let mut config = HookConfig::default();
    let mut file = None;
    let mut file_error = None;

    if let Some(path) = find_config_file(explicit, &data_dir) {
        match load_config(&path) {
            Ok(file_config) => {
                config = config.merge_file(file_config);
                file = Some(path);
            }
            Err(e) => file_error = Some(e),
        }
    }

    ResolvedConfig {
        config: apply_env(config, env),
        data_dir,
        file,
        file_error,
    }
}

/// Resolve the effective configuration from the process environment.
pub fn resolve(explicit: Option<&Path>) -> ResolvedConfig {
    resolve_with(explicit, &ProcessEnv)
}
