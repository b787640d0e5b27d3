// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The version-control surface used by the hook.

use crate::error::Result;

/// Operations the hook performs against a repository.
///
/// Query methods return git's raw text output; interpreting it (and
/// deciding what a failure means) is left to the caller.
pub trait Vcs {
    /// Succeeds when the working directory is inside a work tree.
    fn inside_work_tree(&self) -> Result<()>;

    /// Porcelain status output. Empty means a clean tree.
    fn status_porcelain(&self) -> Result<String>;

    /// Changed file names relative to `HEAD`, falling back to the
    /// index when there is no commit yet.
    fn changed_file_names(&self) -> Result<String>;

    /// `--stat` diff output with the same fallback as
    /// [`Vcs::changed_file_names`].
    fn diff_stat(&self) -> Result<String>;

    /// Stage every change in the working tree.
    fn stage_all(&self) -> Result<()>;

    /// Create a commit with the given message.
    fn commit(&self, message: &str) -> Result<()>;

    /// All tags, newest version first.
    fn tags_by_version_desc(&self) -> Result<String>;

    /// Create a lightweight tag at `HEAD`.
    fn create_tag(&self, name: &str) -> Result<()>;
}
