//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing the parsed flags to a command

use crate::catalog::Catalog;
use crate::cli::args::Cli;
use crate::config::Settings;
use crate::error::{LcnsError, Result};
use crate::ui::UserInterface;
use crate::updates::UpdateCheck;

use super::generate::{GenerateCommand, GenerateOptions};
use super::list::ListCommand;
use super::version::VersionCommand;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// Errors end the run with status 1; the caller reports them.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Routes the command line to the version, list or generate command.
pub struct CommandDispatcher {
    catalog: Box<dyn Catalog>,
    settings: Settings,
    update_check: Option<UpdateCheck>,
}

impl CommandDispatcher {
    /// Create a dispatcher using `catalog` and the loaded user settings.
    pub fn new(catalog: Box<dyn Catalog>, settings: Settings) -> Self {
        Self {
            catalog,
            settings,
            update_check: None,
        }
    }

    /// Attach the background update check started at launch.
    pub fn with_update_check(mut self, check: UpdateCheck) -> Self {
        self.update_check = Some(check);
        self
    }

    /// Get the user settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Dispatch and execute the command selected by `cli`.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if cli.version {
            return VersionCommand::new(self.update_check.as_ref()).execute(ui);
        }

        if cli.list || cli.list_keys {
            if cli.key.is_some() {
                return Err(LcnsError::InvalidArguments {
                    message: "--list does not take a license key".to_string(),
                });
            }
            return ListCommand::new(self.catalog.as_ref(), cli.list_keys).execute(ui);
        }

        let options = GenerateOptions::resolve(cli, &self.settings)?;
        GenerateCommand::new(self.catalog.as_ref(), options).execute(ui)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MemoryCatalog;
    use crate::ui::MockUI;
    use clap::Parser;

    fn dispatcher() -> CommandDispatcher {
        let catalog = MemoryCatalog::new()
            .with_license("mit", "MIT License", "MIT body")
            .with_license("unlicense", "The Unlicense", "Public domain");
        CommandDispatcher::new(Box::new(catalog), Settings::default())
    }

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn version_flag_runs_version_command() {
        let cli = Cli::parse_from(["lcns", "--version"]);
        let mut ui = MockUI::new();

        let result = dispatcher().dispatch(&cli, &mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("lcns version"));
    }

    #[test]
    fn list_keys_prints_keys() {
        let cli = Cli::parse_from(["lcns", "--list-keys"]);
        let mut ui = MockUI::new();

        dispatcher().dispatch(&cli, &mut ui).unwrap();

        assert_eq!(ui.output_text(), "mit\nunlicense\n");
    }

    #[test]
    fn list_with_key_is_invalid() {
        let cli = Cli::parse_from(["lcns", "--list", "mit"]);
        let mut ui = MockUI::new();

        let err = dispatcher().dispatch(&cli, &mut ui).unwrap_err();
        assert!(matches!(err, LcnsError::InvalidArguments { .. }));
    }

    #[test]
    fn settings_are_kept() {
        let settings = Settings {
            author: Some("Ada".into()),
            ..Default::default()
        };
        let d = CommandDispatcher::new(Box::new(MemoryCatalog::new()), settings);
        assert_eq!(d.settings().author.as_deref(), Some("Ada"));
    }
}
