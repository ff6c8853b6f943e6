//! Changelog print command implementation.
use log::*;
use std::{fs, path::Path};

use crate::{
    changelog::Changelog, config::Config, result::Result, tag::ReleaseTag,
};

/// Prints the notes for `tag`, or writes them to `out_file` if given. An
/// unknown release yields empty notes rather than an error.
pub fn execute(
    config: &Config,
    tag: &str,
    out_file: Option<&Path>,
) -> Result<()> {
    let notes = release_notes(config, tag)?;

    if let Some(file_path) = out_file {
        if let Some(parent) = file_path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        info!(
            "writing release notes for tag {tag} to: {}",
            file_path.display()
        );
        fs::write(file_path, &notes)?;
    } else {
        println!("{notes}");
    }

    Ok(())
}

/// Loads the changelog and extracts the section for `tag`.
pub fn release_notes(config: &Config, tag: &str) -> Result<String> {
    let tag = ReleaseTag::parse(tag, &config.tag_prefix)?;
    let changelog = Changelog::load(&config.changelog)?;
    let notes = changelog.release_notes(tag.version());

    if notes.is_empty() {
        warn!(
            "no release notes found for tag {tag} in {}",
            changelog.path().display()
        );
    }

    Ok(notes)
}
