// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use crate::commit::version::SEED_VERSION;
use crate::config::{default::example_config, HookConfig, ResolvedConfig};
use crate::error::{AutoTagError, Result, ResultExt, Skip};
use crate::git::GitCli;
use crate::hooks::{read_input, Outcome, Pipeline};
use crate::state::StateStore;
use chrono::Utc;
use console::style;
use std::path::Path;

use super::args::{Cli, Commands, InitArgs};

/// Run the CLI with the given arguments and resolved configuration.
pub fn run(cli: Cli, resolved: ResolvedConfig) -> Result<()> {
    if let Some(e) = &resolved.file_error {
        tracing::error!("Ignoring configuration file: {}", e);
    }

    let mut config = resolved.config.clone();
    config.debug |= cli.debug;

    match cli.effective_command() {
        Commands::Run => run_hook(&cli, &config, &resolved.data_dir),
        Commands::Status => run_status(&config, &resolved),
        Commands::Init(args) => run_init(&args, &resolved.data_dir),
        Commands::Version => run_version(),
    }
}

/// Run the hook: read stdin, then the pipeline. Only unexpected
/// environment problems surface as errors.
fn run_hook(cli: &Cli, config: &HookConfig, data_dir: &Path) -> Result<()> {
    if let Err(e) = read_input(std::io::stdin().lock()) {
        tracing::error!("{}", e);
        tracing::debug!("{}", Skip::InvalidInput);
        return Ok(());
    }

    let vcs = GitCli::current()?;
    let state = StateStore::new(data_dir);
    let outcome = Pipeline::new(config, &vcs, &state)
        .dry_run(cli.dry_run)
        .run(Utc::now());

    if let Outcome::Committed {
        state_saved: false, ..
    } = outcome
    {
        tracing::debug!("Commit made but last-commit time not recorded");
    }

    Ok(())
}

/// Print the configuration, repository state and pending decision.
fn run_status(config: &HookConfig, resolved: &ResolvedConfig) -> Result<()> {
    let vcs = GitCli::current()?;
    let state = StateStore::new(&resolved.data_dir);
    let eval = Pipeline::new(config, &vcs, &state).evaluate(Utc::now());
    let facts = &eval.facts;

    let config_file = resolved
        .file
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(defaults)".to_string());
    let last_commit = match facts.last_commit_ms {
        0 => "never".to_string(),
        ms => chrono::DateTime::from_timestamp_millis(ms)
            .map(|t| t.to_rfc3339())
            .unwrap_or_else(|| ms.to_string()),
    };
    let yes_no = |b: bool| if b { "yes" } else { "no" };

    println!("{}", style("git-auto-tag status").bold());
    println!("  config file:   {}", config_file);
    println!("  state file:    {}", state.path().display());
    println!("  min interval:  {}s", config.min_interval_ms / 1000);
    println!("  min files:     {}", config.min_files);
    println!("  min lines:     {}", config.min_lines);
    println!("  excludes:      {}", config.exclude_patterns.join(", "));
    println!("  repository:    {}", yes_no(facts.is_repository));
    println!("  changes:       {}", yes_no(facts.has_changes));
    println!("  last commit:   {}", last_commit);
    println!("  files changed: {}", facts.stats.files_changed);
    println!(
        "  lines:         +{} / -{} ({})",
        facts.stats.insertions, facts.stats.deletions, facts.stats.total_lines
    );
    println!(
        "  next tag:      {}",
        eval.next_tag.as_deref().unwrap_or(SEED_VERSION)
    );

    match &eval.decision {
        Ok(()) => println!("  decision:      {}", style("✓ would commit").green()),
        Err(skip) => println!("  decision:      {}", style(format!("✗ {}", skip)).yellow()),
    }

    Ok(())
}

/// Write the example configuration into the hook data directory.
fn run_init(args: &InitArgs, data_dir: &Path) -> Result<()> {
    let config_path = data_dir.join("config.toml");

    if config_path.exists() && !args.force {
        return Err(AutoTagError::WithContext {
            context: "init".to_string(),
            message: "Configuration file already exists. Use --force to overwrite.".to_string(),
        });
    }

    std::fs::create_dir_all(data_dir).context("Failed to create hook data directory")?;
    std::fs::write(&config_path, example_config()).context("Failed to write configuration")?;

    println!("✓ Created {}", config_path.display());
    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("git-auto-tag {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_and_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let data_dir = dir.path().join(".claude/hooks/git-auto-tag-v2");

        run_init(&InitArgs { force: false }, &data_dir).unwrap();
        let written = std::fs::read_to_string(data_dir.join("config.toml")).unwrap();
        assert_eq!(written, example_config());

        assert!(run_init(&InitArgs { force: false }, &data_dir).is_err());
        assert!(run_init(&InitArgs { force: true }, &data_dir).is_ok());
    }
}
