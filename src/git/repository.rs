use crate::error::Result;
use crate::git::TagSource;
use git2::Repository as Git2Repo;
use std::path::Path;
use tracing::debug;

/// Lists tags through libgit2
///
/// The repository is discovered from the given directory, walking up to
/// parent directories the same way `git` does.
#[derive(Debug, Default)]
pub struct Git2TagSource;

impl Git2TagSource {
    pub fn new() -> Self {
        Git2TagSource
    }
}

impl TagSource for Git2TagSource {
    fn list_tags(&self, dir: &Path) -> Result<Vec<String>> {
        std::fs::metadata(dir)?;

        let repo = Git2Repo::discover(dir)?;
        debug!(path = %repo.path().display(), "opened repository");

        let tags = repo.tag_names(None)?;
        Ok(tags
            .iter()
            .flatten()
            .filter(|name| !name.is_empty())
            .map(|name| name.to_string())
            .collect())
    }
}
