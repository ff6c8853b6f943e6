//! Result type used across release-changelog.
//!
//! Domain failures are modelled as [`crate::error::ChangelogError`] and
//! converted into `color_eyre` reports as they propagate, so `main` can
//! print a readable report and exit non-zero.
//!
//! ```rust,ignore
//! use crate::result::Result;
//! use color_eyre::eyre::WrapErr;
//!
//! fn notes(path: &Path) -> Result<String> {
//!     let changelog = Changelog::load(path, "Unreleased")
//!         .wrap_err("unable to load changelog")?;
//!     Ok(changelog.release_notes("1.2.3"))
//! }
//! ```

use color_eyre::eyre::Result as EyreResult;

/// Standard result type, an alias for `color_eyre::eyre::Result<T>`.
pub type Result<T> = EyreResult<T>;
