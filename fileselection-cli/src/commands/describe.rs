//! Describe command implementation.

use crate::error::CliError;
use crate::utils::{load_selection, open_store, report, GlobalOptions};
use clap::Args;

/// Change the selection description.
#[derive(Args)]
pub struct DescribeCommand {
    /// New description (may be empty)
    #[arg(value_name = "TEXT")]
    pub description: String,
}

impl DescribeCommand {
    /// Execute the describe command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let store = open_store(global)?;
        let mut selection = load_selection(&store)?;

        selection.set_description(self.description);
        store.save(&selection)?;

        report(global, "Description updated");
        Ok(())
    }
}
