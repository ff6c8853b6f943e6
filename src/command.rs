//! Command execution for release-changelog.
//!
//! Each subcommand loads the changelog on its own from the resolved
//! [`crate::config::Config`] and runs a single linear scan over it.
//!
//! - **check**: fail unless the changelog has a section for a release tag
//! - **print**: write the notes of a release tag's section to stdout or a file

/// Verifies that a release tag has a changelog section.
///
/// Implements the `check-changelog` command, typically run in CI before a
/// tag is pushed or published.
pub mod check;

/// Release notes extraction.
///
/// Implements the `print-changelog` command, which feeds the notes of a
/// release into forge release bodies.
pub mod print;
