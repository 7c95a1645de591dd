//! Tag listing abstraction layer
//!
//! The version logic only needs the raw tag names of a repository. This
//! module hides where they come from behind the [TagSource] trait:
//!
//! - [command::CommandTagSource]: runs `git tag` in the target directory
//! - [repository::Git2TagSource]: reads tags through the `git2` crate
//! - [mock::MockTagSource]: an in-memory list for tests
//!
//! ```rust
//! # use semver_tag::git::{MockTagSource, TagSource};
//! # use std::path::Path;
//! # fn example() -> semver_tag::Result<()> {
//! let source = MockTagSource::new(["v1.0.0", "v1.1.0"]);
//! let tags = source.list_tags(Path::new("."))?;
//! assert_eq!(tags.len(), 2);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod command;
pub mod mock;
pub mod repository;

pub use command::CommandTagSource;
pub use mock::MockTagSource;
pub use repository::Git2TagSource;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Source of raw tag names for a directory under version control
///
/// Implementations take the directory as a parameter and must not change
/// process-wide state such as the current working directory.
///
/// ## Error Handling
///
/// A directory that does not exist, is unreadable, or is not inside a
/// repository is an error. A repository without tags is `Ok(vec![])`.
pub trait TagSource: Send + Sync {
    /// List all tag names of the repository containing `dir`.
    ///
    /// Order is unspecified. Empty names are never returned.
    fn list_tags(&self, dir: &Path) -> Result<Vec<String>>;
}

/// Which [TagSource] implementation to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagSourceKind {
    #[default]
    Libgit2,
    Command,
}

impl TagSourceKind {
    /// Build the configured tag source
    pub fn build(self) -> Box<dyn TagSource> {
        match self {
            TagSourceKind::Libgit2 => Box::new(Git2TagSource::new()),
            TagSourceKind::Command => Box::new(CommandTagSource::new()),
        }
    }
}

/// Split `git tag` style output into names, dropping blank lines
pub(crate) fn split_tag_lines(output: &str) -> Vec<String> {
    output
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
        .map(|line| line.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_tag_lines() {
        let tags = split_tag_lines("v1.0.0\n\nv1.1.0\r\nv2.0.0\n");
        assert_eq!(tags, vec!["v1.0.0", "v1.1.0", "v2.0.0"]);
    }

    #[test]
    fn test_split_tag_lines_empty() {
        assert!(split_tag_lines("").is_empty());
        assert!(split_tag_lines("\n\n").is_empty());
    }

    #[test]
    fn test_tag_source_kind_default() {
        assert_eq!(TagSourceKind::default(), TagSourceKind::Libgit2);
    }
}
