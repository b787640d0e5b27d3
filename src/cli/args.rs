// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// git-auto-tag - automatic commit and tag hook
///
/// Run after file edits. When enough time has passed and enough has
/// changed, commits the working tree and tags it with the next patch
/// version.
#[derive(Parser, Debug)]
#[command(name = "git-auto-tag")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Auto-commit and tag accumulated changes", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run (defaults to the hook if not specified)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Evaluate everything but do not stage, commit or tag
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Read the hook payload from stdin and run the pipeline (default)
    Run,

    /// Show thresholds, current changes and the pending decision
    Status,

    /// Write an example configuration file to the hook data directory
    Init(InitArgs),

    /// Print version information
    Version,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Default, Clone)]
pub struct InitArgs {
    /// Overwrite an existing configuration file
    #[arg(short, long)]
    pub force: bool,
}

impl Cli {
    /// The command to execute, defaulting to the hook.
    pub fn effective_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Run)
    }
}
