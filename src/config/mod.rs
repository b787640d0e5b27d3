// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for git-auto-tag.
//!
//! The effective configuration is built once at startup by layering an
//! optional TOML file and then environment overrides on top of the
//! built-in defaults. The resulting [`HookConfig`] is passed by reference
//! to every component that needs it.

pub mod default;
mod loader;
mod schema;

pub use loader::{
    apply_env, find_config_file, hook_data_dir, load_config, parse_config, resolve, resolve_with,
    EnvLookup, ProcessEnv, ResolvedConfig, ENV_DEBUG, ENV_MIN_FILES, ENV_MIN_INTERVAL,
    ENV_MIN_LINES, ENV_PROJECT_DIR,
};
pub use schema::{FileConfig, HookConfig};
