use thiserror::Error;

/// Unified error type for semver-tag operations
#[derive(Error, Debug)]
pub enum SemverError {
    #[error("given string could not be parsed into valid semver version: '{tag}'")]
    Parse { tag: String },

    #[error("kind is invalid, needs to be either patch, minor, major: {0}")]
    InvalidKind(String),

    #[error("no versions available")]
    NoVersionsAvailable,

    #[error("cannot bump {kind} of {version}: component would overflow")]
    Overflow { version: String, kind: String },

    #[error("Git operation failed")]
    Git(#[from] git2::Error),

    #[error("Tag listing failed: {0}")]
    TagSource(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in semver-tag
pub type Result<T> = std::result::Result<T, SemverError>;

impl SemverError {
    /// Create a parse error for the offending tag
    pub fn parse(tag: impl Into<String>) -> Self {
        SemverError::Parse { tag: tag.into() }
    }

    /// Create an invalid kind error
    pub fn invalid_kind(kind: impl Into<String>) -> Self {
        SemverError::InvalidKind(kind.into())
    }

    /// Create a tag source error with context
    pub fn tag_source(msg: impl Into<String>) -> Self {
        SemverError::TagSource(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        SemverError::Config(msg.into())
    }

    /// True for failures caused by a single malformed tag.
    ///
    /// Only these are eligible for skipping under `--ignore-non-semver-tags`.
    pub fn is_parse(&self) -> bool {
        matches!(self, SemverError::Parse { .. })
    }
}
