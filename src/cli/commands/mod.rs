//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! [`CommandDispatcher`] picks one command from the parsed flags:
//! - `--version` runs [`VersionCommand`]
//! - `--list` / `--list-keys` run [`ListCommand`]
//! - anything else runs [`GenerateCommand`]

pub mod dispatcher;
pub mod generate;
pub mod list;
pub mod version;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use generate::{write_output, GenerateCommand, GenerateOptions, DEFAULT_KEY, DEFAULT_OUTPUT};
pub use list::ListCommand;
pub use version::VersionCommand;
