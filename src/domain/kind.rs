use crate::error::{Result, SemverError};
use std::fmt;
use std::str::FromStr;

/// Version bump type.
///
/// `Unset` is the explicit "no kind chosen" value and is never a valid bump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BumpKind {
    #[default]
    Unset,
    Major,
    Minor,
    Patch,
}

impl BumpKind {
    /// Parse a kind name, ignoring case (`major`, `Minor`, `PATCH`, ...)
    pub fn parse(input: &str) -> Result<Self> {
        let kind = match input.to_ascii_lowercase().as_str() {
            "major" => BumpKind::Major,
            "minor" => BumpKind::Minor,
            "patch" => BumpKind::Patch,
            _ => BumpKind::Unset,
        };
        kind.validate().map_err(|_| SemverError::invalid_kind(input))
    }

    pub fn is_valid(self) -> bool {
        !matches!(self, BumpKind::Unset)
    }

    /// Returns the kind unchanged if it is one of Major, Minor or Patch
    pub fn validate(self) -> Result<Self> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(SemverError::invalid_kind(self.to_string()))
        }
    }
}

impl FromStr for BumpKind {
    type Err = SemverError;

    fn from_str(s: &str) -> Result<Self> {
        BumpKind::parse(s)
    }
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BumpKind::Unset => "unset",
            BumpKind::Major => "major",
            BumpKind::Minor => "minor",
            BumpKind::Patch => "patch",
        };
        f.write_str(name)
    }
}

/// What the caller asked for on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    /// Report the latest version as-is
    Current,
    /// Compute the next version
    Bump(BumpKind),
}

impl Request {
    /// `current` is matched literally; anything else must be a bump kind.
    pub fn parse(input: &str) -> Result<Self> {
        if input == "current" {
            return Ok(Request::Current);
        }
        BumpKind::parse(input).map(Request::Bump)
    }
}
