use crate::domain::Version;
use crate::error::{Result, SemverError};
use crate::git::TagSourceKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the per-repository configuration file
pub const LOCAL_CONFIG_FILE: &str = ".semver.toml";

/// Version printed when a repository has no version tags yet
pub const DEFAULT_SEED_VERSION: &str = "v0.1.0";

/// Represents the complete configuration for semver.
///
/// Every key is optional; a missing file means all defaults.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// Skip tags that are not versions instead of failing
    #[serde(default)]
    pub ignore_non_semver_tags: bool,

    #[serde(default = "default_seed_version")]
    pub seed_version: String,

    #[serde(default)]
    pub tag_source: TagSourceKind,
}

fn default_seed_version() -> String {
    DEFAULT_SEED_VERSION.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            ignore_non_semver_tags: false,
            seed_version: default_seed_version(),
            tag_source: TagSourceKind::default(),
        }
    }
}

impl Config {
    /// The seed version, parsed
    pub fn seed(&self) -> Result<Version> {
        Version::parse(&self.seed_version).map_err(|_| {
            SemverError::config(format!(
                "seed_version '{}' is not a valid version",
                self.seed_version
            ))
        })
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `.semver.toml` in `dir`
/// 3. `semver/config.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed, or its seed
///   version is invalid
pub fn load_config(config_path: Option<&Path>, dir: &Path) -> Result<Config> {
    let path = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => find_config_file(dir),
    };

    let Some(path) = path else {
        return Ok(Config::default());
    };

    let config_str = fs::read_to_string(&path).map_err(|e| {
        SemverError::config(format!("cannot read {}: {}", path.display(), e))
    })?;
    let config: Config = toml::from_str(&config_str)
        .map_err(|e| SemverError::config(format!("cannot parse {}: {}", path.display(), e)))?;

    config.seed()?;
    Ok(config)
}

fn find_config_file(dir: &Path) -> Option<PathBuf> {
    let local = dir.join(LOCAL_CONFIG_FILE);
    if local.is_file() {
        return Some(local);
    }

    let global = dirs::config_dir()?.join("semver").join("config.toml");
    global.is_file().then_some(global)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.ignore_non_semver_tags);
        assert_eq!(config.seed_version, "v0.1.0");
        assert_eq!(config.tag_source, TagSourceKind::Libgit2);
        assert_eq!(config.seed().unwrap(), Version::new("v", 0, 1, 0));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str("ignore_non_semver_tags = true").unwrap();
        assert!(config.ignore_non_semver_tags);
        assert_eq!(config.seed_version, DEFAULT_SEED_VERSION);
    }

    #[test]
    fn test_local_file_is_found() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(LOCAL_CONFIG_FILE),
            "tag_source = \"command\"\n",
        )
        .unwrap();

        let config = load_config(None, temp_dir.path()).unwrap();
        assert_eq!(config.tag_source, TagSourceKind::Command);
    }

    #[test]
    fn test_invalid_seed_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("custom.toml");
        fs::write(&path, "seed_version = \"v0.1\"\n").unwrap();

        let err = load_config(Some(&path), temp_dir.path()).unwrap_err();
        assert!(matches!(err, SemverError::Config(_)));
    }

    #[test]
    fn test_unknown_tag_source_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("custom.toml");
        fs::write(&path, "tag_source = \"svn\"\n").unwrap();

        assert!(load_config(Some(&path), temp_dir.path()).is_err());
    }
}
