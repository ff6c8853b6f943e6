//! Configuration loading and parsing for `release-changelog.toml` files.
//!
//! Values resolve in order of precedence: CLI overrides, then the config
//! file, then built-in defaults.
use log::*;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    changelog::{DEFAULT_CHANGELOG_FILE, DEFAULT_UNRELEASED_LABEL},
    error::ChangelogError,
    tag::DEFAULT_TAG_PREFIX,
};

/// Default configuration filename.
pub const DEFAULT_CONFIG_FILE: &str = "release-changelog.toml";

/// Location and conventions of the changelog file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)] // Use default for missing fields
pub struct ChangelogConfig {
    /// Path to the changelog (default: CHANGELOG.md)
    pub path: PathBuf,
    /// Heading label reserved for unreleased changes (default: Unreleased)
    pub unreleased_label: String,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CHANGELOG_FILE),
            unreleased_label: DEFAULT_UNRELEASED_LABEL.to_string(),
        }
    }
}

/// Root configuration structure for `release-changelog.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Prefix in front of the version in release tags (default: "v")
    pub tag_prefix: String,
    /// Changelog settings.
    pub changelog: ChangelogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tag_prefix: DEFAULT_TAG_PREFIX.to_string(),
            changelog: ChangelogConfig::default(),
        }
    }
}

/// Values supplied on the command line that take precedence over the
/// config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub changelog: Option<PathBuf>,
    pub tag_prefix: Option<String>,
}

impl Config {
    /// Parses configuration from TOML text. `path` names the source in errors.
    pub fn parse(path: &Path, content: &str) -> Result<Self, ChangelogError> {
        toml::from_str(content).map_err(|source| ChangelogError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads configuration from `path`, which must exist.
    pub fn load(path: &Path) -> Result<Self, ChangelogError> {
        let content = fs::read_to_string(path).map_err(|source| {
            ChangelogError::ReadConfig {
                path: path.to_path_buf(),
                source,
            }
        })?;

        info!("loaded configuration from {}", path.display());

        Self::parse(path, &content)
    }

    /// Loads configuration from `path` if it exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self, ChangelogError> {
        if !path.exists() {
            debug!("no config file at {}: using defaults", path.display());
            return Ok(Self::default());
        }

        Self::load(path)
    }

    /// Applies command line overrides on top of the loaded values.
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(changelog) = overrides.changelog {
            self.changelog.path = changelog;
        }

        if let Some(tag_prefix) = overrides.tag_prefix {
            self.tag_prefix = tag_prefix;
        }

        self
    }
}
