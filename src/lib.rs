//! lcns - Generate a LICENSE file for your project.
//!
//! lcns fetches a license template from the GitHub licenses catalog, fills
//! in its placeholders (year, author, email, project) and writes the result
//! to `LICENSE`. Fetched templates are kept in a small TTL cache under
//! `~/.lcns` so repeated runs work offline.
//!
//! # Modules
//!
//! - [`cache`] - Time-stamped on-disk template cache
//! - [`catalog`] - License catalog clients
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - User settings file
//! - [`error`] - Error types and result aliases
//! - [`license`] - Placeholder detection and substitution
//! - [`ui`] - Interruptible prompts, spinners, and terminal output
//! - [`updates`] - Background check for a newer release
//!
//! # Example
//!
//! ```
//! use lcns::license::{find_present_tokens, replace_all, PlaceholderCategory};
//!
//! let body = "Copyright (c) [year] [fullname]";
//! let tokens = find_present_tokens(body, PlaceholderCategory::Year.tokens());
//! assert_eq!(tokens, vec!["[year]"]);
//! assert_eq!(
//!     replace_all(body, tokens[0], "2024"),
//!     "Copyright (c) 2024 [fullname]"
//! );
//! ```

pub mod cache;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod license;
pub mod ui;
pub mod updates;

pub use error::{LcnsError, Result};
