// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Post-edit hook.
//!
//! Reads the host's JSON payload from stdin and runs the auto-commit
//! pipeline.

mod input;
mod pipeline;

#[cfg(test)]
pub(crate) mod testing;

pub use input::{parse_input, read_input, HookInput};
pub use pipeline::{Evaluation, Outcome, Pipeline};
