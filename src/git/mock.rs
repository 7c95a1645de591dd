use crate::error::{Result, SemverError};
use crate::git::TagSource;
use std::path::Path;

/// Mock tag source for testing without a repository
pub struct MockTagSource {
    tags: Vec<String>,
    failure: Option<String>,
}

impl MockTagSource {
    /// A source that returns `tags` for any directory
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MockTagSource {
            tags: tags.into_iter().map(Into::into).collect(),
            failure: None,
        }
    }

    /// A source whose listing always fails with a tag source error
    pub fn failing(msg: impl Into<String>) -> Self {
        MockTagSource {
            tags: Vec::new(),
            failure: Some(msg.into()),
        }
    }
}

impl Default for MockTagSource {
    fn default() -> Self {
        Self::new(Vec::<String>::new())
    }
}

impl TagSource for MockTagSource {
    fn list_tags(&self, _dir: &Path) -> Result<Vec<String>> {
        match &self.failure {
            Some(msg) => Err(SemverError::tag_source(msg.clone())),
            None => Ok(self.tags.clone()),
        }
    }
}
