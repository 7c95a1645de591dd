use crate::domain::kind::BumpKind;
use crate::error::{Result, SemverError};
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Optional ASCII letter prefix followed by three dot-separated numbers
/// without leading zeros. `[0-9]` rather than `\d`, which is Unicode-aware.
static VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-zA-Z]*)(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)$")
        .expect("version pattern is valid")
});

/// Version parsed from a tag, e.g. `v1.2.3` -> prefix "v", 1, 2, 3
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    pub prefix: String,
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// Create a new version
    pub fn new(prefix: impl Into<String>, major: u64, minor: u64, patch: u64) -> Self {
        Version {
            prefix: prefix.into(),
            major,
            minor,
            patch,
        }
    }

    /// Parse a tag string into a version.
    ///
    /// The whole string must match; the prefix is kept exactly as written.
    ///
    /// # Example
    /// ```
    /// # use semver_tag::domain::Version;
    /// let v = Version::parse("v1.2.3").unwrap();
    /// assert_eq!(v, Version::new("v", 1, 2, 3));
    /// assert!(Version::parse("v01.2.3").is_err());
    /// ```
    pub fn parse(tag: &str) -> Result<Self> {
        let caps = VERSION_PATTERN
            .captures(tag)
            .ok_or_else(|| SemverError::parse(tag))?;

        let component = |idx: usize| -> Result<u64> {
            caps[idx].parse::<u64>().map_err(|_| SemverError::parse(tag))
        };

        Ok(Version {
            prefix: caps[1].to_string(),
            major: component(2)?,
            minor: component(3)?,
            patch: component(4)?,
        })
    }

    /// The numeric triple used for ordering. The prefix is not part of it.
    pub fn precedence(&self) -> (u64, u64, u64) {
        (self.major, self.minor, self.patch)
    }

    /// Compare by major, then minor, then patch.
    ///
    /// Versions that differ only in prefix compare `Equal`, so a stable sort
    /// keeps their input order.
    pub fn cmp_precedence(&self, other: &Version) -> Ordering {
        self.precedence().cmp(&other.precedence())
    }

    /// Produce the next version for `kind`, keeping the prefix.
    ///
    /// - **Major**: major += 1, minor = 0, patch = 0
    /// - **Minor**: minor += 1, patch = 0
    /// - **Patch**: patch += 1
    ///
    /// Fails with `InvalidKind` for `BumpKind::Unset` and with `Overflow` if
    /// the incremented component does not fit; `self` is never modified.
    pub fn bump(&self, kind: BumpKind) -> Result<Self> {
        let overflow = || SemverError::Overflow {
            version: self.to_string(),
            kind: kind.to_string(),
        };

        let next = match kind {
            BumpKind::Major => Version {
                prefix: self.prefix.clone(),
                major: self.major.checked_add(1).ok_or_else(overflow)?,
                minor: 0,
                patch: 0,
            },
            BumpKind::Minor => Version {
                prefix: self.prefix.clone(),
                major: self.major,
                minor: self.minor.checked_add(1).ok_or_else(overflow)?,
                patch: 0,
            },
            BumpKind::Patch => Version {
                prefix: self.prefix.clone(),
                major: self.major,
                minor: self.minor,
                patch: self.patch.checked_add(1).ok_or_else(overflow)?,
            },
            BumpKind::Unset => return Err(SemverError::invalid_kind(kind.to_string())),
        };
        Ok(next)
    }
}

impl FromStr for Version {
    type Err = SemverError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}.{}.{}",
            self.prefix, self.major, self.minor, self.patch
        )
    }
}
