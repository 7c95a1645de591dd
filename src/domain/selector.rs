//! Turning a raw tag list into an ordered set of versions and picking the latest

use crate::domain::version::Version;
use crate::error::{Result, SemverError};
use tracing::{debug, warn};

/// Parse every tag and return the versions sorted ascending.
///
/// With `skip_invalid == false` the first malformed tag aborts the whole
/// call. With `skip_invalid == true` malformed tags are dropped. Empty
/// input gives an empty list.
///
/// # Example
/// ```
/// # use semver_tag::domain::selector::collect_versions;
/// let versions = collect_versions(["v2.0.0", "v1.0.0"], false).unwrap();
/// assert_eq!(versions[0].to_string(), "v1.0.0");
/// ```
pub fn collect_versions<I, S>(tags: I, skip_invalid: bool) -> Result<Vec<Version>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut versions = Vec::new();

    for tag in tags {
        let tag = tag.as_ref();
        match Version::parse(tag) {
            Ok(version) => versions.push(version),
            Err(e) if skip_invalid && e.is_parse() => {
                warn!(tag, "skipping tag that is not a semver version");
            }
            Err(e) => return Err(e),
        }
    }

    sort_versions(&mut versions);
    debug!(count = versions.len(), "collected versions");
    Ok(versions)
}

/// Stable ascending sort on (major, minor, patch).
///
/// Versions equal on the triple keep their relative input order.
pub fn sort_versions(versions: &mut [Version]) {
    versions.sort_by(|a, b| a.cmp_precedence(b));
}

/// Last element of an ascending list
pub fn latest(versions: &[Version]) -> Result<Version> {
    versions
        .last()
        .cloned()
        .ok_or(SemverError::NoVersionsAvailable)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(versions: &[Version]) -> Vec<String> {
        versions.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_collect_sorts_ascending() {
        let versions =
            collect_versions(["2.1.0", "2.0.1", "2.0.0", "1.1.0", "1.0.0"], false).unwrap();
        assert_eq!(
            render(&versions),
            vec!["1.0.0", "1.1.0", "2.0.0", "2.0.1", "2.1.0"]
        );
    }

    #[test]
    fn test_collect_empty() {
        let versions = collect_versions(Vec::<String>::new(), false).unwrap();
        assert!(versions.is_empty());
    }

    #[test]
    fn test_collect_aborts_on_invalid() {
        let err = collect_versions(["1.0.0", "a.b.c", "1.1.0"], false).unwrap_err();
        assert!(err.is_parse());
    }

    #[test]
    fn test_collect_skips_invalid() {
        let versions = collect_versions(["1.0.0", "a.b.c", "1.1.0"], true).unwrap();
        assert_eq!(render(&versions), vec!["1.0.0", "1.1.0"]);
    }

    #[test]
    fn test_collect_only_invalid_with_skip_is_empty() {
        let versions = collect_versions(["☹️1.1.1"], true).unwrap();
        assert!(versions.is_empty());
    }

    #[test]
    fn test_latest_empty() {
        assert!(matches!(
            latest(&[]),
            Err(SemverError::NoVersionsAvailable)
        ));
    }

    #[test]
    fn test_latest_single() {
        let v = Version::new("v", 1, 0, 0);
        assert_eq!(latest(std::slice::from_ref(&v)).unwrap(), v);
    }

    #[test]
    fn test_numeric_not_lexical() {
        let versions = collect_versions(["9999999.0.0", "2.0.0", "10.0.0"], false).unwrap();
        assert_eq!(latest(&versions).unwrap().to_string(), "9999999.0.0");
    }

    // Prefix is not part of the ordering key: equal triples keep input order,
    // so the later tag wins as "latest".
    #[test]
    fn test_prefix_ties_keep_input_order() {
        let versions = collect_versions(["v1.0.0", "a1.0.0"], false).unwrap();
        assert_eq!(render(&versions), vec!["v1.0.0", "a1.0.0"]);
        assert_eq!(latest(&versions).unwrap().to_string(), "a1.0.0");

        let versions = collect_versions(["a1.0.0", "v1.0.0"], false).unwrap();
        assert_eq!(latest(&versions).unwrap().to_string(), "v1.0.0");
    }
}
