// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Automatic commit and tag creation.

mod executor;
mod message;
pub mod version;

pub use executor::{Executor, Release};
pub use message::{auto_commit_message, commit_timestamp};
pub use version::{is_semantic_tag, latest_tag, next_version, Version, SEED_VERSION};
