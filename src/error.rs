//! Error types for changelog verification and extraction.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading configuration, parsing tags or inspecting a
/// changelog.
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("malformed release tag '{tag}': expected '{prefix}<version>'")]
    MalformedTag { tag: String, prefix: String },

    #[error(
        "You're trying to create a new release tag {tag}, but that release is not mentioned\nin the changelog. Add a section called {section} to {file} and try again."
    )]
    MissingRelease {
        tag: String,
        section: String,
        file: String,
    },

    #[error("unable to read changelog {}: {source}", path.display())]
    ReadChangelog {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to read config file {}: {source}", path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}: {source}", path.display())]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ChangelogError {
    /// Create a malformed tag error
    pub fn malformed_tag(
        tag: impl Into<String>,
        prefix: impl Into<String>,
    ) -> Self {
        Self::MalformedTag {
            tag: tag.into(),
            prefix: prefix.into(),
        }
    }

    /// Create a missing release error for a tag and its expected section
    pub fn missing_release(
        tag: impl Into<String>,
        section: impl Into<String>,
        file: impl Into<String>,
    ) -> Self {
        Self::MissingRelease {
            tag: tag.into(),
            section: section.into(),
            file: file.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_formats() {
        let err = ChangelogError::malformed_tag("1.2.3", "v");
        assert_eq!(
            err.to_string(),
            "malformed release tag '1.2.3': expected 'v<version>'"
        );

        let err =
            ChangelogError::missing_release("v9.9.9", "[9.9.9]", "CHANGELOG.md");
        let msg = err.to_string();
        assert!(msg.contains("v9.9.9"));
        assert!(msg.contains("[9.9.9]"));
        assert!(msg.contains("CHANGELOG.md"));
    }

    #[test]
    fn test_read_errors_name_the_path() {
        let err = ChangelogError::ReadChangelog {
            path: PathBuf::from("docs/CHANGES.md"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().contains("docs/CHANGES.md"));

        let err = ChangelogError::ReadConfig {
            path: PathBuf::from("custom.toml"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().contains("custom.toml"));
    }

    #[test]
    fn test_error_helpers() {
        let err = ChangelogError::malformed_tag("", "v");
        assert!(matches!(err, ChangelogError::MalformedTag { .. }));

        let err = ChangelogError::missing_release("v1", "[1]", "CHANGELOG.md");
        assert!(matches!(err, ChangelogError::MissingRelease { .. }));
    }
}
