// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Exclusion patterns for changed paths.
//!
//! Three shapes are understood:
//!
//! - `dir/` matches the directory at the repository root or nested anywhere.
//! - `*.ext` matches any path ending in `.ext`.
//! - anything else matches the exact path or that basename in any directory.

/// A single parsed exclusion pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExcludePattern {
    /// Pattern ending in `/`; holds the pattern including the slash.
    Directory(String),
    /// Pattern starting with `*.`; holds the suffix from the dot on.
    Suffix(String),
    /// Exact path or basename.
    Name(String),
}

impl ExcludePattern {
    /// Classify a raw pattern string.
    pub fn parse(pattern: &str) -> Self {
        if pattern.ends_with('/') {
            Self::Directory(pattern.to_string())
        } else if let Some(suffix) = pattern.strip_prefix('*') {
            if suffix.starts_with('.') {
                Self::Suffix(suffix.to_string())
            } else {
                Self::Name(pattern.to_string())
            }
        } else {
            Self::Name(pattern.to_string())
        }
    }

    /// Check whether a repository-relative path matches.
    pub fn matches(&self, path: &str) -> bool {
        match self {
            Self::Directory(dir) => path.starts_with(dir.as_str()) || contains_after_slash(path, dir),
            Self::Suffix(suffix) => path.ends_with(suffix.as_str()),
            Self::Name(name) => path == name.as_str() || ends_with_after_slash(path, name),
        }
    }
}

fn contains_after_slash(path: &str, needle: &str) -> bool {
    path.match_indices(needle)
        .any(|(idx, _)| idx > 0 && path.as_bytes()[idx - 1] == b'/')
}

fn ends_with_after_slash(path: &str, needle: &str) -> bool {
    path.len() > needle.len()
        && path.ends_with(needle)
        && path.as_bytes()[path.len() - needle.len() - 1] == b'/'
}

/// An ordered set of exclusion patterns; the first match wins.
#[derive(Debug, Clone, Default)]
pub struct ExcludeSet {
    patterns: Vec<ExcludePattern>,
}

impl ExcludeSet {
    /// Build a set from raw pattern strings.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Self {
        Self {
            patterns: patterns
                .iter()
                .map(|p| ExcludePattern::parse(p.as_ref()))
                .collect(),
        }
    }

    /// The pattern that excludes `path`, if any.
    pub fn matching(&self, path: &str) -> Option<&ExcludePattern> {
        self.patterns.iter().find(|p| p.matches(path))
    }

    /// Check whether `path` is excluded.
    pub fn is_excluded(&self, path: &str) -> bool {
        self.matching(path).is_some()
    }

    /// Keep only the paths no pattern excludes.
    pub fn filter<'a, I>(&self, paths: I) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        paths.into_iter().filter(|p| !self.is_excluded(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> ExcludeSet {
        ExcludeSet::new(crate::config::default::DEFAULT_EXCLUDE_PATTERNS)
    }

    #[test]
    fn test_parse_shapes() {
        assert_eq!(
            ExcludePattern::parse("dist/"),
            ExcludePattern::Directory("dist/".to_string())
        );
        assert_eq!(
            ExcludePattern::parse("*.log"),
            ExcludePattern::Suffix(".log".to_string())
        );
        assert_eq!(
            ExcludePattern::parse(".DS_Store"),
            ExcludePattern::Name(".DS_Store".to_string())
        );
        assert_eq!(
            ExcludePattern::parse("*foo"),
            ExcludePattern::Name("*foo".to_string())
        );
    }

    #[test]
    fn test_directory_at_root_and_nested() {
        let set = defaults();
        assert!(set.is_excluded("node_modules/lodash/index.js"));
        assert!(set.is_excluded("packages/web/node_modules/react/index.js"));
        assert!(set.is_excluded("dist/bundle.js"));
        assert!(set.is_excluded("apps/site/dist/index.html"));
        assert!(set.is_excluded(".cache/x"));
    }

    #[test]
    fn test_directory_requires_separator_before_nested_match() {
        let set = ExcludeSet::new(&["dist/"]);
        assert!(!set.is_excluded("mydist/file.js"));
        assert!(!set.is_excluded("src/distribution.rs"));
    }

    #[test]
    fn test_suffix_patterns() {
        let set = defaults();
        assert!(set.is_excluded("debug.log"));
        assert!(set.is_excluded("logs/server.log"));
        assert!(set.is_excluded("tmp/scratch.tmp"));
        assert!(!set.is_excluded("src/log.rs"));
        assert!(!set.is_excluded("notes.logs"));
    }

    #[test]
    fn test_name_patterns() {
        let set = defaults();
        assert!(set.is_excluded(".DS_Store"));
        assert!(set.is_excluded("assets/.DS_Store"));
        assert!(set.is_excluded(".claude/hooks/git-auto-tag-v2/.last-commit"));
        assert!(!set.is_excluded("x.DS_Store"));
        assert!(!set.is_excluded(".DS_Store/inner"));
    }

    #[test]
    fn test_first_match_wins() {
        let set = ExcludeSet::new(&["*.log", "logs/"]);
        assert_eq!(
            set.matching("logs/a.log"),
            Some(&ExcludePattern::Suffix(".log".to_string()))
        );
        assert_eq!(
            set.matching("logs/a.txt"),
            Some(&ExcludePattern::Directory("logs/".to_string()))
        );
    }

    #[test]
    fn test_filter_keeps_order() {
        let set = defaults();
        let files = ["src/main.rs", "debug.log", "README.md", "dist/app.js"];
        assert_eq!(set.filter(files), vec!["src/main.rs", "README.md"]);
    }

    #[test]
    fn test_empty_set_excludes_nothing() {
        let set = ExcludeSet::default();
        assert!(!set.is_excluded("anything"));
    }
}
