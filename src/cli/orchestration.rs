//! Main workflow orchestration logic
//!
//! Resolves the latest version from a tag source and turns it into the
//! line the `semver` binary prints. This is the only place where "no
//! versions" is turned into a successful result (the seed version).

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::Config;
use crate::domain::{collect_versions, latest, Request, Version};
use crate::error::{Result, SemverError};
use crate::git::TagSource;

/// Arguments for the next-version workflow
///
/// Mirrors the CLI Args but in a format suitable for orchestration logic,
/// so the workflow can be called without depending on clap.
#[derive(Debug, Clone, PartialEq)]
pub struct NextVersionArgs {
    /// `major`, `minor`, `patch` (any case) or the literal `current`
    pub kind: String,

    /// Directory whose repository is inspected
    pub dir: PathBuf,

    /// Skip malformed tags instead of failing
    pub ignore_non_semver_tags: bool,
}

/// Result of a successful workflow run
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// `current` was requested
    Current(Version),
    /// A bump was applied to the latest version
    Next { latest: Version, next: Version },
    /// The repository has no versions; the seed is reported instead
    Seed(Version),
}

impl Outcome {
    /// The version to print
    pub fn version(&self) -> &Version {
        match self {
            Outcome::Current(v) | Outcome::Seed(v) => v,
            Outcome::Next { next, .. } => next,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.version())
    }
}

/// Latest version among the tags of the repository at `dir`.
///
/// Fails with `NoVersionsAvailable` when there are none.
pub fn resolve_latest(source: &dyn TagSource, dir: &Path, skip_invalid: bool) -> Result<Version> {
    let tags = source.list_tags(dir)?;
    debug!(count = tags.len(), dir = %dir.display(), "listed tags");

    let versions = collect_versions(&tags, skip_invalid)?;
    let latest = latest(&versions)?;
    debug!(latest = %latest, "resolved latest version");
    Ok(latest)
}

/// Main next-version workflow
///
/// 1. Resolve the latest version from the tag source
/// 2. Fall back to the seed version if there is none, whatever the kind
/// 3. Report it unchanged (`current`) or validate the kind and bump it
pub fn run_next_version(
    args: &NextVersionArgs,
    config: &Config,
    source: &dyn TagSource,
) -> Result<Outcome> {
    let skip_invalid = args.ignore_non_semver_tags || config.ignore_non_semver_tags;

    let latest = match resolve_latest(source, &args.dir, skip_invalid) {
        Ok(version) => version,
        Err(SemverError::NoVersionsAvailable) => {
            info!("no version tags found, using seed version");
            return config.seed().map(Outcome::Seed);
        }
        Err(e) => return Err(e),
    };

    match Request::parse(&args.kind)? {
        Request::Current => Ok(Outcome::Current(latest)),
        Request::Bump(kind) => {
            let next = latest.bump(kind)?;
            Ok(Outcome::Next { latest, next })
        }
    }
}
