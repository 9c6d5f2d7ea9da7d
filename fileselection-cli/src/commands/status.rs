//! Status command implementation.
//!
//! `status` only checks for the selection file. It exits 0 when the folder
//! holds one and 1 when it does not, so it can be used in scripts.

use crate::error::CliError;
use crate::utils::{open_store, report, GlobalOptions};
use clap::Args;

/// Check whether the folder holds a selection.
#[derive(Args)]
pub struct StatusCommand {}

impl StatusCommand {
    /// Execute the status command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let store = open_store(global)?;

        if store.has_selection() {
            report(
                global,
                &format!("Selection found in {}", store.directory().display()),
            );
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!(
                "No selection in {}",
                store.directory().display()
            )))
        }
    }
}
