// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! In-memory [`Vcs`] for unit tests.

use crate::error::{AutoTagError, GitError, Result};
use crate::git::Vcs;
use std::cell::RefCell;
use std::collections::HashSet;

/// Scripted repository state.
///
/// Operation keys used by [`FakeVcs::failing`]: `rev-parse`, `status`,
/// `diff --name-only`, `diff --stat`, `add`, `commit`, `tag --sort`, `tag`.
#[derive(Debug)]
pub struct FakeVcs {
    repository: bool,
    status: String,
    changed_files: Vec<String>,
    stat: String,
    tags: Vec<String>,
    failing: HashSet<&'static str>,
    calls: RefCell<Vec<&'static str>>,
    commits: RefCell<Vec<String>>,
    created_tags: RefCell<Vec<String>>,
}

impl Default for FakeVcs {
    fn default() -> Self {
        Self {
            repository: true,
            status: " M src/lib.rs\n".to_string(),
            changed_files: Vec::new(),
            stat: String::new(),
            tags: Vec::new(),
            failing: HashSet::new(),
            calls: RefCell::new(Vec::new()),
            commits: RefCell::new(Vec::new()),
            created_tags: RefCell::new(Vec::new()),
        }
    }
}

impl FakeVcs {
    pub fn outside_repository(mut self) -> Self {
        self.repository = false;
        self
    }

    pub fn with_status(mut self, status: &str) -> Self {
        self.status = status.to_string();
        self
    }

    pub fn with_changed_files(mut self, files: &[&str]) -> Self {
        self.changed_files = files.iter().map(|f| f.to_string()).collect();
        self
    }

    pub fn with_stat(mut self, stat: &str) -> Self {
        self.stat = stat.to_string();
        self
    }

    /// Existing tags, already in descending version order.
    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn failing(mut self, op: &'static str) -> Self {
        self.failing.insert(op);
        self
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    pub fn commits(&self) -> Vec<String> {
        self.commits.borrow().clone()
    }

    pub fn created_tags(&self) -> Vec<String> {
        self.created_tags.borrow().clone()
    }

    fn enter(&self, op: &'static str) -> Result<()> {
        self.calls.borrow_mut().push(op);
        if self.failing.contains(op) {
            return Err(AutoTagError::Git(GitError::CommandFailed {
                command: op.to_string(),
                message: "simulated failure".to_string(),
            }));
        }
        Ok(())
    }
}

impl Vcs for FakeVcs {
    fn inside_work_tree(&self) -> Result<()> {
        self.enter("rev-parse")?;
        if self.repository {
            Ok(())
        } else {
            Err(AutoTagError::Git(GitError::NotARepository))
        }
    }

    fn status_porcelain(&self) -> Result<String> {
        self.enter("status")?;
        Ok(self.status.clone())
    }

    fn changed_file_names(&self) -> Result<String> {
        self.enter("diff --name-only")?;
        Ok(self.changed_files.join("\n"))
    }

    fn diff_stat(&self) -> Result<String> {
        self.enter("diff --stat")?;
        Ok(self.stat.clone())
    }

    fn stage_all(&self) -> Result<()> {
        self.enter("add")
    }

    fn commit(&self, message: &str) -> Result<()> {
        self.enter("commit")?;
        self.commits.borrow_mut().push(message.to_string());
        Ok(())
    }

    fn tags_by_version_desc(&self) -> Result<String> {
        self.enter("tag --sort")?;
        Ok(self.tags.join("\n"))
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        self.enter("tag")?;
        self.created_tags.borrow_mut().push(name.to_string());
        Ok(())
    }
}
