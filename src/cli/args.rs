//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct. lcns has no subcommands:
//! the flags select between generating a license, listing the catalog and
//! printing the version.

use clap::builder::FalseyValueParser;
use clap::Parser;
use std::path::PathBuf;

use crate::catalog::DEFAULT_API_URL;

/// lcns - Generate a LICENSE file for your project.
#[derive(Debug, Parser)]
#[command(name = "lcns")]
#[command(about, long_about = None)]
#[command(
    after_help = "Without KEY, lcns asks you to pick a license from the catalog.\n\
                  See more about licenses at http://choosealicense.com/licenses/"
)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// License key to generate (e.g. mit, apache-2.0)
    pub key: Option<String>,

    /// Output file [default: LICENSE]
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Do not read or write the local license cache
    #[arg(long)]
    pub no_cache: bool,

    /// Overwrite the output file if it exists
    #[arg(short, long)]
    pub force: bool,

    /// Write the license template without filling in placeholders
    #[arg(long)]
    pub raw: bool,

    /// Copyright year [default: current year]
    #[arg(long)]
    pub year: Option<String>,

    /// Copyright holder; skips the author prompt
    #[arg(long)]
    pub author: Option<String>,

    /// Contact email; skips the email prompt
    #[arg(long)]
    pub email: Option<String>,

    /// Project name; skips the project prompt
    #[arg(long)]
    pub project: Option<String>,

    /// Show all available licenses and quit
    #[arg(long)]
    pub list: bool,

    /// Print only license keys, one per line
    #[arg(long, hide = true)]
    pub list_keys: bool,

    /// Choose a license with a short questionnaire
    #[arg(long)]
    pub choose: bool,

    /// Enable debug logging
    #[arg(
        long,
        env = "LCNS_DEBUG",
        value_parser = FalseyValueParser::new()
    )]
    pub debug: bool,

    /// Print version and check for a newer release
    #[arg(short = 'V', long)]
    pub version: bool,

    /// License catalog API base URL
    #[arg(
        long,
        env = "LCNS_CATALOG_URL",
        default_value = DEFAULT_API_URL,
        hide = true
    )]
    pub catalog_url: String,
}
