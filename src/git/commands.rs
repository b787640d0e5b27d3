// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git subprocess runner.
//!
//! Every invocation passes its arguments as a vector to
//! [`std::process::Command`]; nothing goes through a shell, so commit
//! messages and tag names are never interpreted.

use crate::error::{AutoTagError, GitError, Result};
use std::path::PathBuf;
use std::process::{Command, Output};

use super::vcs::Vcs;

/// Runs `git` in a working directory.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: PathBuf,
    workdir: PathBuf,
}

impl GitCli {
    /// Use the `git` found on `PATH`, running in `workdir`.
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            program: PathBuf::from("git"),
            workdir: workdir.into(),
        }
    }

    /// Use the current working directory.
    pub fn current() -> Result<Self> {
        let dir = std::env::current_dir()?;
        Ok(Self::new(dir))
    }

    /// Override the git executable.
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    fn output(&self, args: &[&str]) -> Result<Output> {
        Command::new(&self.program)
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .map_err(|e| {
                AutoTagError::Git(GitError::Spawn {
                    command: args.join(" "),
                    message: e.to_string(),
                })
            })
    }

    /// Run git and return stdout, failing on a non-zero exit.
    fn run(&self, args: &[&str]) -> Result<String> {
        let output = self.output(args)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AutoTagError::Git(GitError::CommandFailed {
                command: args.join(" "),
                message: stderr.trim().to_string(),
            }));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Run `git diff <args> HEAD`, or `git diff <args>` if that fails.
    /// Paths are printed verbatim so exclusion patterns see real names.
    fn diff_against_head(&self, args: &[&str]) -> Result<String> {
        let mut with_head: Vec<&str> = vec!["-c", "core.quotePath=false", "diff"];
        with_head.extend_from_slice(args);
        with_head.push("HEAD");

        match self.run(&with_head) {
            Ok(out) => Ok(out),
            Err(e) => {
                tracing::debug!("{}, retrying without HEAD", e);
                with_head.pop();
                self.run(&with_head)
            }
        }
    }
}

impl Vcs for GitCli {
    fn inside_work_tree(&self) -> Result<()> {
        let out = self.run(&["rev-parse", "--is-inside-work-tree"])?;
        if out.trim() == "true" {
            Ok(())
        } else {
            Err(AutoTagError::Git(GitError::NotARepository))
        }
    }

    fn status_porcelain(&self) -> Result<String> {
        self.run(&["status", "--porcelain"])
    }

    fn changed_file_names(&self) -> Result<String> {
        self.diff_against_head(&["--name-only"])
    }

    fn diff_stat(&self) -> Result<String> {
        self.diff_against_head(&["--stat"])
    }

    fn stage_all(&self) -> Result<()> {
        self.run(&["add", "."]).map(|_| ())
    }

    fn commit(&self, message: &str) -> Result<()> {
        self.run(&["commit", "-m", message]).map(|_| ())
    }

    fn tags_by_version_desc(&self) -> Result<String> {
        self.run(&["tag", "--sort=-v:refname"])
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        self.run(&["tag", name]).map(|_| ())
    }
}
