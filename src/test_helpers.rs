//! Common test helper functions shared across test modules.
use std::{fs, path::Path};

use crate::config::{ChangelogConfig, Config};

/// Changelog with an unreleased section followed by two releases.
pub const SAMPLE_CHANGELOG: &str = "## [Unreleased]
unreleased notes
## [1.0.0]
fixed bug A
fixed bug B
## [0.9.0]
older notes
";

/// Writes `content` to `CHANGELOG.md` inside `dir` and returns a changelog
/// config pointing at it.
///
/// # Example
/// ```ignore
/// let temp_dir = TempDir::new().unwrap();
/// let config = write_changelog(temp_dir.path(), SAMPLE_CHANGELOG);
/// ```
pub fn write_changelog(dir: &Path, content: &str) -> ChangelogConfig {
    let path = dir.join("CHANGELOG.md");
    fs::write(&path, content).unwrap();

    ChangelogConfig {
        path,
        ..Default::default()
    }
}

/// Creates a test Config whose changelog lives in `dir` with `content`.
pub fn create_test_config(dir: &Path, content: &str) -> Config {
    Config {
        changelog: write_changelog(dir, content),
        ..Default::default()
    }
}
