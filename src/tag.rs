//! Release tag parsing.
use std::fmt;

use crate::error::ChangelogError;

/// Default prefix expected in front of the version in a release tag.
pub const DEFAULT_TAG_PREFIX: &str = "v";

/// A git release tag split into its prefix and bare version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseTag {
    name: String,
    version: String,
}

impl ReleaseTag {
    /// Parses `tag` as `<prefix><version>`. The version is treated as an
    /// opaque string and must not be empty.
    pub fn parse(tag: &str, prefix: &str) -> Result<Self, ChangelogError> {
        let version = tag
            .strip_prefix(prefix)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ChangelogError::malformed_tag(tag, prefix))?;

        Ok(Self {
            name: tag.to_string(),
            version: version.to_string(),
        })
    }

    /// The tag exactly as supplied.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The tag with its prefix removed, used as the changelog search key.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The bracketed token a changelog heading must carry for this release.
    pub fn section(&self) -> String {
        format!("[{}]", self.version)
    }
}

impl fmt::Display for ReleaseTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_prefix_from_tag() {
        for version in ["1.2.3", "0.1.0-rc.1", "2024.10", "x", "v1"] {
            let tag = ReleaseTag::parse(&format!("v{version}"), "v").unwrap();
            assert_eq!(tag.version(), version);
            assert_eq!(tag.name(), format!("v{version}"));
        }
    }

    #[test]
    fn supports_custom_and_empty_prefixes() {
        let tag = ReleaseTag::parse("api-v2.0.0", "api-v").unwrap();
        assert_eq!(tag.version(), "2.0.0");

        let tag = ReleaseTag::parse("2.0.0", "").unwrap();
        assert_eq!(tag.version(), "2.0.0");
    }

    #[test]
    fn rejects_tag_without_prefix() {
        let err = ReleaseTag::parse("1.2.3", "v").unwrap_err();
        assert!(matches!(
            err,
            ChangelogError::MalformedTag { ref tag, ref prefix }
                if tag == "1.2.3" && prefix == "v"
        ));
    }

    #[test]
    fn rejects_tag_without_version() {
        assert!(ReleaseTag::parse("v", "v").is_err());
        assert!(ReleaseTag::parse("", "v").is_err());
        assert!(ReleaseTag::parse("", "").is_err());
    }

    #[test]
    fn builds_section_token() {
        let tag = ReleaseTag::parse("v9.9.9", "v").unwrap();
        assert_eq!(tag.section(), "[9.9.9]");
        assert_eq!(tag.to_string(), "v9.9.9");
    }
}
