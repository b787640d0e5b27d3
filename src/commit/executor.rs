// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Stage, commit and tag.

use crate::error::Skip;
use crate::git::Vcs;

use super::version::{is_semantic_tag, latest_tag, next_version};

/// Result of a successful commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    /// The commit message used.
    pub message: String,
    /// The tag that was created, if tagging succeeded.
    pub tag: Option<String>,
}

/// Performs the commit and tag sequence against a repository.
pub struct Executor<'a> {
    vcs: &'a dyn Vcs,
}

impl<'a> Executor<'a> {
    /// Create an executor for the given repository.
    pub fn new(vcs: &'a dyn Vcs) -> Self {
        Self { vcs }
    }

    /// Stage every change in the working tree.
    pub fn stage(&self) -> Result<(), Skip> {
        self.vcs.stage_all().map_err(|e| {
            tracing::error!("git add failed: {}", e);
            Skip::StageFailed
        })?;
        tracing::debug!("Staged all changes");
        Ok(())
    }

    /// Commit the staged changes.
    pub fn commit(&self, message: &str) -> Result<(), Skip> {
        self.vcs.commit(message).map_err(|e| {
            tracing::error!("git commit failed: {}", e);
            Skip::CommitFailed
        })?;
        tracing::info!("Committed: {}", message);
        Ok(())
    }

    /// The newest strict semantic tag in the repository.
    pub fn latest_tag(&self) -> Option<String> {
        match self.vcs.tags_by_version_desc() {
            Ok(tags) => {
                let latest = latest_tag(&tags).map(str::to_string);
                match &latest {
                    Some(tag) => tracing::debug!("Latest tag: {}", tag),
                    None => tracing::debug!("No semver tag found"),
                }
                latest
            }
            Err(e) => {
                tracing::debug!("Failed to get latest tag: {}", e);
                None
            }
        }
    }

    /// The tag the next release would get.
    pub fn next_tag(&self) -> String {
        next_version(self.latest_tag().as_deref())
    }

    /// Create `version` as a tag. Returns whether the tag now exists.
    pub fn tag(&self, version: &str) -> bool {
        if !is_semantic_tag(version) {
            tracing::error!("Invalid version format: {}", version);
            return false;
        }

        match self.vcs.create_tag(version) {
            Ok(()) => {
                tracing::info!("Created tag: {}", version);
                true
            }
            Err(e) => {
                tracing::error!("git tag failed: {}", e);
                false
            }
        }
    }

    /// Stage, commit with `message`, then tag with the next version.
    ///
    /// A failed stage or commit stops the sequence. A failed tag does not:
    /// the commit stands and the release carries no tag.
    pub fn release(&self, message: &str) -> Result<Release, Skip> {
        self.stage()?;
        self.commit(message)?;

        let version = self.next_tag();
        let tag = self.tag(&version).then_some(version);

        Ok(Release {
            message: message.to_string(),
            tag,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::testing::FakeVcs;

    #[test]
    fn test_release_seeds_first_tag() {
        let vcs = FakeVcs::default();
        let release = Executor::new(&vcs).release("Auto: msg").unwrap();
        assert_eq!(release.tag.as_deref(), Some("0.0.1"));
        assert_eq!(vcs.commits(), vec!["Auto: msg".to_string()]);
        assert_eq!(vcs.created_tags(), vec!["0.0.1".to_string()]);
    }

    #[test]
    fn test_release_bumps_latest_strict_tag() {
        let vcs = FakeVcs::default().with_tags(&["2.0.0-beta", "1.9.9", "1.2.3"]);
        let release = Executor::new(&vcs).release("Auto: msg").unwrap();
        assert_eq!(release.tag.as_deref(), Some("1.9.10"));
    }

    #[test]
    fn test_stage_failure_stops_before_commit() {
        let vcs = FakeVcs::default().failing("add");
        assert_eq!(
            Executor::new(&vcs).release("Auto: msg"),
            Err(Skip::StageFailed)
        );
        assert!(vcs.commits().is_empty());
        assert!(vcs.created_tags().is_empty());
    }

    #[test]
    fn test_commit_failure_stops_before_tag() {
        let vcs = FakeVcs::default().failing("commit");
        assert_eq!(
            Executor::new(&vcs).release("Auto: msg"),
            Err(Skip::CommitFailed)
        );
        assert!(vcs.created_tags().is_empty());
    }

    #[test]
    fn test_tag_failure_keeps_commit() {
        let vcs = FakeVcs::default().failing("tag");
        let release = Executor::new(&vcs).release("Auto: msg").unwrap();
        assert_eq!(release.tag, None);
        assert_eq!(vcs.commits().len(), 1);
    }

    #[test]
    fn test_tag_list_failure_seeds() {
        let vcs = FakeVcs::default()
            .with_tags(&["4.0.0"])
            .failing("tag --sort");
        assert_eq!(Executor::new(&vcs).next_tag(), "0.0.1");
    }

    #[test]
    fn test_invalid_version_never_reaches_git() {
        let vcs = FakeVcs::default();
        assert!(!Executor::new(&vcs).tag("1.2.3; rm -rf /"));
        assert!(vcs.created_tags().is_empty());
    }
}
