//! List command implementation.
//!
//! `lcns --list` prints the catalog as a table; the hidden `--list-keys`
//! prints bare keys for scripts.

use tracing::debug;

use crate::catalog::{Catalog, LicenseSummary};
use crate::error::Result;
use crate::ui::{Table, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// Footer printed under the license table.
pub const SEE_MORE: &str = "See more about these LICENSE at http://choosealicense.com/licenses/";

/// The list command implementation.
pub struct ListCommand<'a> {
    catalog: &'a dyn Catalog,
    keys_only: bool,
}

impl<'a> ListCommand<'a> {
    /// Create a new list command.
    pub fn new(catalog: &'a dyn Catalog, keys_only: bool) -> Self {
        Self { catalog, keys_only }
    }
}

impl Command for ListCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let licenses = fetch_list(self.catalog, ui)?;

        if self.keys_only {
            let keys: String = licenses.iter().map(|l| format!("{}\n", l.key)).collect();
            ui.output(&keys);
            return Ok(CommandResult::success());
        }

        let mut table = Table::new(&["Key", "Name"]);
        for license in &licenses {
            debug!("{} ({})", license.name, license.key);
            table.add_row(&[&license.key, &license.name]);
        }

        ui.output(&table.render());
        ui.output(&format!("{}\n", SEE_MORE));

        Ok(CommandResult::success())
    }
}

/// Fetch the catalog listing behind a spinner.
pub(crate) fn fetch_list(
    catalog: &dyn Catalog,
    ui: &mut dyn UserInterface,
) -> Result<Vec<LicenseSummary>> {
    let mut spinner = ui.start_spinner("Fetching license list");
    match catalog.list_licenses() {
        Ok(licenses) => {
            spinner.finish_clear();
            Ok(licenses)
        }
        Err(e) => {
            spinner.finish_error("Failed to fetch license list");
            Err(e)
        }
    }
}
