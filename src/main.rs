//! lcns CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use lcns::catalog::GithubCatalog;
use lcns::cli::{Cli, CommandDispatcher};
use lcns::config::load_settings;
use lcns::ui::{InterruptHub, TerminalUI, UserInterface};
use lcns::updates::{releases_url, spawn_check};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag (or `LCNS_DEBUG`) sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("lcns=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lcns=warn"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help goes to stdout and is not a failure
            let failed = e.use_stderr();
            e.print().ok();
            return if failed {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    init_tracing(cli.debug);

    tracing::debug!("lcns starting with args: {:?}", cli);

    let update_check = spawn_check(releases_url());

    let interrupts = InterruptHub::install().unwrap_or_else(|e| {
        tracing::debug!("{}", e);
        InterruptHub::new()
    });
    let mut ui = TerminalUI::new(interrupts);

    let settings = match load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            ui.error(&e.to_string());
            return ExitCode::FAILURE;
        }
    };

    let catalog = GithubCatalog::with_base_url(cli.catalog_url.clone());
    let dispatcher =
        CommandDispatcher::new(Box::new(catalog), settings).with_update_check(update_check);

    match dispatcher.dispatch(&cli, &mut ui) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
