// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! git-auto-tag - automatic commit and tag hook
//!
//! In hook mode the process always exits 0 so the host is never blocked.

use clap::Parser;
use git_auto_tag::cli::{run, Cli, Commands};
use git_auto_tag::{config, logging};

fn main() {
    // Parse CLI arguments; a bad invocation must not fail the host either
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(0);
        }
    };

    // Configuration decides whether debug logging is on, so it comes first
    let resolved = config::resolve(cli.config.as_deref());
    logging::init(cli.debug || resolved.config.debug);

    let hook_mode = matches!(cli.effective_command(), Commands::Run);

    if let Err(e) = run(cli, resolved) {
        tracing::error!("Unexpected error: {}", e);
        if !hook_mode {
            std::process::exit(1);
        }
    }
}
