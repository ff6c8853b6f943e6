use regex::Regex;
use std::sync::LazyLock;

/// Matches release headings such as `## [1.2.3]`, `### [1.0.1]` or
/// `## [1.2.3] - 2024-01-01`.
static HEADING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#{2,} \[(?<label>[^\]]+)\]").unwrap());

/// A release heading line in a changelog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heading<'a> {
    /// Text between the brackets
    pub label: &'a str,
    /// Whether the label is the reserved unreleased section
    pub unreleased: bool,
}

impl<'a> Heading<'a> {
    /// Parses a single line. Returns `None` for anything that is not a
    /// bracketed release heading.
    pub fn parse(line: &'a str, unreleased_label: &str) -> Option<Self> {
        let captures = HEADING_REGEX.captures(line)?;
        let label = captures.name("label")?.as_str();

        Some(Self {
            label,
            unreleased: label == unreleased_label,
        })
    }

    /// True if this heading opens the section for `version`.
    pub fn is_release(&self, version: &str) -> bool {
        !self.unreleased && self.label == version
    }
}
