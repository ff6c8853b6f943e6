//! Changelog document loading and release section lookup.
//!
//! A changelog is treated as a flat sequence of lines where release sections
//! start at headings of the form `## [<version>]` (or deeper, such as
//! `### [<version>]` for patch releases). The reserved unreleased
//! heading (`## [Unreleased]` by default) bounds sections but is never
//! matched as a release.
use log::*;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{config::ChangelogConfig, error::ChangelogError};

pub mod heading;

use heading::Heading;

/// Default changelog filename.
pub const DEFAULT_CHANGELOG_FILE: &str = "CHANGELOG.md";

/// Default label of the reserved unreleased section.
pub const DEFAULT_UNRELEASED_LABEL: &str = "Unreleased";

const BYTE_ORDER_MARK: char = '\u{feff}';

/// An in-memory changelog document.
#[derive(Debug, Clone)]
pub struct Changelog {
    path: PathBuf,
    content: String,
    unreleased_label: String,
}

impl Changelog {
    /// Wraps already loaded changelog content. `path` is only used to name
    /// the file in messages. A leading byte order mark is dropped.
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        let mut content = content.into();

        if content.starts_with(BYTE_ORDER_MARK) {
            content.drain(..BYTE_ORDER_MARK.len_utf8());
        }

        Self {
            path: path.into(),
            content,
            unreleased_label: DEFAULT_UNRELEASED_LABEL.to_string(),
        }
    }

    /// Overrides the label of the reserved unreleased section.
    pub fn with_unreleased_label(mut self, label: impl Into<String>) -> Self {
        self.unreleased_label = label.into();
        self
    }

    /// Reads the changelog described by `config` from disk.
    pub fn load(config: &ChangelogConfig) -> Result<Self, ChangelogError> {
        let content = fs::read_to_string(&config.path).map_err(|source| {
            ChangelogError::ReadChangelog {
                path: config.path.clone(),
                source,
            }
        })?;

        debug!(
            "read {} lines from changelog {}",
            content.lines().count(),
            config.path.display()
        );

        Ok(Self::new(&config.path, content)
            .with_unreleased_label(&config.unreleased_label))
    }

    /// Path the changelog was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All release headings in document order, including the unreleased one.
    pub fn headings(&self) -> impl Iterator<Item = Heading<'_>> {
        self.content
            .lines()
            .filter_map(|line| Heading::parse(line, &self.unreleased_label))
    }

    /// True if a heading for `version` exists.
    pub fn has_release(&self, version: &str) -> bool {
        self.headings().any(|h| h.is_release(version))
    }

    /// Returns the lines between the heading for `version` and the next
    /// release heading, with line endings preserved. Empty if the changelog
    /// has no section for `version`.
    pub fn release_notes(&self, version: &str) -> String {
        let mut capturing = false;
        let mut notes = String::new();
        let mut captured = 0;

        for line in self.content.split_inclusive('\n') {
            let heading = Heading::parse(line, &self.unreleased_label);

            if let Some(heading) = heading {
                if capturing {
                    debug!("section for {version} ends at [{}]", heading.label);
                    break;
                }

                if heading.is_release(version) {
                    debug!("found section heading for {version}");
                    capturing = true;
                }

                continue;
            }

            if capturing {
                notes.push_str(line);
                captured += 1;
            }
        }

        debug!("captured {captured} lines for {version}");

        notes
    }
}
