// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! Git is driven as an external program. [`Vcs`] names the handful of
//! queries and mutations the hook needs; [`GitCli`] runs them through
//! `git` subprocesses.

pub mod commands;
mod vcs;

pub use commands::GitCli;
pub use vcs::Vcs;
