//! CLI argument parsing and configuration resolution.
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::{
    config::{Config, DEFAULT_CONFIG_FILE, Overrides},
    error::ChangelogError,
};

/// Verifies release tags against a changelog and prints release notes.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, global = true)]
    /// Path to the changelog (default: CHANGELOG.md).
    pub changelog: Option<PathBuf>,

    #[arg(long, global = true)]
    /// Prefix expected in front of the version in tags (default: v).
    pub tag_prefix: Option<String>,

    #[arg(long, global = true)]
    /// Config file to load. Falls back to release-changelog.toml if present.
    pub config: Option<PathBuf>,

    #[arg(long, default_value_t = false, global = true)]
    /// Enable debug logging.
    pub debug: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Changelog subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Fail unless the changelog has a section for the given tag.
    CheckChangelog {
        #[arg(long)]
        /// Git tag being released, e.g. v1.2.3.
        tag: String,
    },

    /// Print the changelog section for the given tag.
    PrintChangelog {
        #[arg(long)]
        /// Git tag being released, e.g. v1.2.3.
        tag: String,

        #[arg(long)]
        /// Write the notes to this file instead of stdout.
        out_file: Option<PathBuf>,
    },
}

impl Args {
    /// Loads the config file and layers CLI overrides on top.
    pub fn resolve_config(&self) -> Result<Config, ChangelogError> {
        let config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::load_or_default(Path::new(DEFAULT_CONFIG_FILE))?,
        };

        Ok(config.with_overrides(self.overrides()))
    }

    fn overrides(&self) -> Overrides {
        Overrides {
            changelog: self.changelog.clone(),
            tag_prefix: self.tag_prefix.clone(),
        }
    }
}
