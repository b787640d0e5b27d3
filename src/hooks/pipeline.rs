// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The auto-commit pipeline.
//!
//! A single linear sequence: probe the repository, check the interval,
//! collect statistics, apply thresholds, commit and tag, record the time.
//! Each step either continues or stops with a [`Skip`].

use crate::analysis::{collect_stats, has_uncommitted_changes, is_repository, ChangeStats};
use crate::commit::{auto_commit_message, Executor, Release};
use crate::config::HookConfig;
use crate::error::Skip;
use crate::git::Vcs;
use crate::rules::{Facts, Gate};
use crate::state::StateStore;
use chrono::{DateTime, Utc};

/// How a pipeline run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Stopped early; nothing was changed.
    Skipped(Skip),
    /// Thresholds met, but `dry_run` stopped before staging.
    DryRun { message: String, tag: String },
    /// Changes were committed.
    Committed {
        release: Release,
        /// Whether the last-commit time was recorded.
        state_saved: bool,
    },
}

/// Full picture of the repository for the `status` command.
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub facts: Facts,
    /// The tag the next release would receive.
    pub next_tag: Option<String>,
    /// `Ok` when a run right now would commit.
    pub decision: Result<(), Skip>,
}

/// Runs the hook against a repository and a state file.
pub struct Pipeline<'a> {
    config: &'a HookConfig,
    vcs: &'a dyn Vcs,
    state: &'a StateStore,
    dry_run: bool,
}

impl<'a> Pipeline<'a> {
    /// Create a pipeline.
    pub fn new(config: &'a HookConfig, vcs: &'a dyn Vcs, state: &'a StateStore) -> Self {
        Self {
            config,
            vcs,
            state,
            dry_run: false,
        }
    }

    /// Stop before staging when set.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Run the pipeline at time `now`.
    pub fn run(&self, now: DateTime<Utc>) -> Outcome {
        match self.try_run(now) {
            Ok(outcome) => outcome,
            Err(skip) => {
                tracing::debug!("{}", skip);
                Outcome::Skipped(skip)
            }
        }
    }

    fn try_run(&self, now: DateTime<Utc>) -> Result<Outcome, Skip> {
        let gate = Gate::new(self.config);
        let now_ms = now.timestamp_millis();

        gate.check_repository(is_repository(self.vcs))?;
        gate.check_changes_present(has_uncommitted_changes(self.vcs))?;
        gate.check_interval(self.state.last_commit_ms(), now_ms)?;

        let stats = collect_stats(self.vcs, self.config);
        gate.check_thresholds(&stats)?;

        let message = auto_commit_message(&now, &stats);
        let executor = Executor::new(self.vcs);

        if self.dry_run {
            let tag = executor.next_tag();
            tracing::info!("Dry run: would commit {:?} and tag {}", message, tag);
            return Ok(Outcome::DryRun { message, tag });
        }

        let release = executor.release(&message)?;
        if let Some(tag) = &release.tag {
            tracing::info!("Auto-committed and tagged: {}", tag);
        }

        let state_saved = match self.state.save(now_ms) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Failed to save commit time: {}", e);
                false
            }
        };

        Ok(Outcome::Committed {
            release,
            state_saved,
        })
    }

    /// Gather every fact without short-circuiting and without touching
    /// the repository.
    pub fn evaluate(&self, now: DateTime<Utc>) -> Evaluation {
        let is_repository = is_repository(self.vcs);
        let (has_changes, stats, next_tag) = if is_repository {
            (
                has_uncommitted_changes(self.vcs),
                collect_stats(self.vcs, self.config),
                Some(Executor::new(self.vcs).next_tag()),
            )
        } else {
            (false, ChangeStats::default(), None)
        };

        let facts = Facts {
            is_repository,
            has_changes,
            last_commit_ms: self.state.last_commit_ms(),
            now_ms: now.timestamp_millis(),
            stats,
        };
        let decision = Gate::new(self.config).evaluate(&facts);

        Evaluation {
            facts,
            next_tag,
            decision,
        }
    }
}
