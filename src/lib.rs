pub mod changelog;
pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod result;
pub mod tag;

pub use cli::{Args, Command};
pub use result::Result;

#[cfg(test)]
pub mod test_helpers;
