// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Semantic version tags.
//!
//! Only tags of the exact form `MAJOR.MINOR.PATCH` (ASCII digits, no
//! prefix or suffix) take part in versioning. `v1.2.3` or `2.0.0-beta`
//! are ignored.

use crate::error::{AutoTagError, GitError, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

lazy_static! {
    /// Strict tag pattern.
    static ref TAG_REGEX: Regex = Regex::new(r"^[0-9]+\.[0-9]+\.[0-9]+$").unwrap();
}

/// The first tag created in a repository without semantic tags.
pub const SEED_VERSION: &str = "0.0.1";

/// A `major.minor.patch` triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// The seed version, `0.0.1`.
    pub const SEED: Version = Version {
        major: 0,
        minor: 0,
        patch: 1,
    };

    /// Create a version from its parts.
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// The next patch release, or `None` on overflow.
    pub fn next_patch(&self) -> Option<Self> {
        Some(Self {
            patch: self.patch.checked_add(1)?,
            ..*self
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = AutoTagError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || {
            AutoTagError::Git(GitError::InvalidTag {
                tag: s.to_string(),
            })
        };

        if !is_semantic_tag(s) {
            return Err(invalid());
        }

        let parts = s
            .split('.')
            .map(|p| p.parse::<u64>().map_err(|_| invalid()))
            .collect::<Result<Vec<u64>>>()?;

        match parts.as_slice() {
            [major, minor, patch] => Ok(Self::new(*major, *minor, *patch)),
            _ => Err(invalid()),
        }
    }
}

/// Check whether a tag is a strict `MAJOR.MINOR.PATCH` tag.
pub fn is_semantic_tag(tag: &str) -> bool {
    TAG_REGEX.is_match(tag)
}

/// Pick the first strict semantic tag from a version-sorted tag list
/// (newest first, one tag per line).
pub fn latest_tag(tag_list: &str) -> Option<&str> {
    tag_list
        .lines()
        .map(str::trim)
        .find(|tag| is_semantic_tag(tag))
}

/// Compute the tag that follows `prior`.
///
/// Without a prior tag, or when it cannot be parsed, the seed version is
/// returned. Otherwise only the patch component is incremented.
pub fn next_version(prior: Option<&str>) -> String {
    let Some(tag) = prior else {
        return Version::SEED.to_string();
    };

    match tag.parse::<Version>().ok().and_then(|v| v.next_patch()) {
        Some(next) => {
            tracing::debug!("Version increment: {} -> {}", tag, next);
            next.to_string()
        }
        None => Version::SEED.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_pattern() {
        assert!(is_semantic_tag("0.0.1"));
        assert!(is_semantic_tag("10.20.300"));
        assert!(!is_semantic_tag("v1.2.3"));
        assert!(!is_semantic_tag("2.0.0-beta"));
        assert!(!is_semantic_tag("1.2"));
        assert!(!is_semantic_tag("1.2.3.4"));
        assert!(!is_semantic_tag(" 1.2.3"));
        assert!(!is_semantic_tag("1.2.3\n"));
        assert!(!is_semantic_tag("١.٢.٣"));
    }

    #[test]
    fn test_next_version_seed() {
        assert_eq!(next_version(None), "0.0.1");
        for bad in ["", "v1.2.3", "1.2", "2.0.0-beta", "a.b.c", "1.2.3.4"] {
            assert_eq!(next_version(Some(bad)), SEED_VERSION, "tag {:?}", bad);
        }
    }

    #[test]
    fn test_next_version_bumps_patch_only() {
        assert_eq!(next_version(Some("0.0.1")), "0.0.2");
        assert_eq!(next_version(Some("1.2.3")), "1.2.4");
        assert_eq!(next_version(Some("3.7.99")), "3.7.100");
        assert_eq!(next_version(Some("1.2.007")), "1.2.8");
    }

    #[test]
    fn test_next_version_overflow_falls_back() {
        let max = format!("1.2.{}", u64::MAX);
        assert_eq!(next_version(Some(&max)), SEED_VERSION);
        // Too large to parse at all.
        assert_eq!(next_version(Some("1.2.99999999999999999999999")), SEED_VERSION);
    }

    #[test]
    fn test_latest_tag_skips_non_conforming() {
        let tags = "2.0.0-beta\nv3.0.0\n1.9.9\n1.2.3\n";
        assert_eq!(latest_tag(tags), Some("1.9.9"));
        assert_eq!(latest_tag("release\nv1.0.0\n"), None);
        assert_eq!(latest_tag(""), None);
    }

    #[test]
    fn test_version_roundtrip_display() {
        let v: Version = "4.5.6".parse().unwrap();
        assert_eq!(v, Version::new(4, 5, 6));
        assert_eq!(v.to_string(), "4.5.6");
        assert_eq!(Version::SEED.to_string(), SEED_VERSION);
    }
}
