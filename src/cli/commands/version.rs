//! Version command implementation.

use std::time::Duration;

use crate::error::Result;
use crate::ui::UserInterface;
use crate::updates::{UpdateCheck, CHECK_TIMEOUT, NAME, VERSION};

use super::dispatcher::{Command, CommandResult};

/// Prints the version, plus a notice when a newer release turned up in time.
pub struct VersionCommand<'a> {
    check: Option<&'a UpdateCheck>,
    timeout: Duration,
}

impl<'a> VersionCommand<'a> {
    /// Create a new version command waiting up to [`CHECK_TIMEOUT`].
    pub fn new(check: Option<&'a UpdateCheck>) -> Self {
        Self {
            check,
            timeout: CHECK_TIMEOUT,
        }
    }

    /// Wait at most `timeout` for the update check.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Command for VersionCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.message(&format!("{} version {}", NAME, VERSION));

        if let Some(info) = self.check.and_then(|check| check.wait(self.timeout)) {
            ui.message(&format!(
                "Latest version of {} is {}, please update it",
                NAME, info.latest
            ));
            if let Some(url) = &info.release_url {
                ui.message(&format!("  {}", url));
            }
        }

        Ok(CommandResult::success())
    }
}
