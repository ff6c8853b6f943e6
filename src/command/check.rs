//! Changelog check command implementation.
use log::*;

use crate::{
    changelog::Changelog, config::Config, error::ChangelogError,
    result::Result, tag::ReleaseTag,
};

/// Succeeds if the changelog has a release heading for `tag`, errors with
/// instructions for adding one otherwise.
pub fn execute(config: &Config, tag: &str) -> Result<()> {
    let tag = ReleaseTag::parse(tag, &config.tag_prefix)?;
    let changelog = Changelog::load(&config.changelog)?;

    if !changelog.has_release(tag.version()) {
        return Err(ChangelogError::missing_release(
            tag.name(),
            tag.section(),
            changelog.path().display().to_string(),
        )
        .into());
    }

    info!(
        "found section {} for tag {tag} in {}",
        tag.section(),
        changelog.path().display()
    );

    Ok(())
}
