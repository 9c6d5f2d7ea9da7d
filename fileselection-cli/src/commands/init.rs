//! Init command implementation.
//!
//! This module implements the `init` command, which writes a new selection
//! file into a folder.

use crate::error::CliError;
use crate::utils::{open_store, paths_word, report, resolve_path_args, GlobalOptions};
use clap::Args;
use std::path::PathBuf;

/// Create a new selection in the folder.
#[derive(Args)]
pub struct InitCommand {
    /// Description of the selection
    #[arg(long, short = 'd', default_value = "")]
    pub description: String,

    /// Replace an existing selection
    #[arg(long)]
    pub force: bool,

    /// Paths to select right away
    #[arg(value_name = "PATHS")]
    pub paths: Vec<PathBuf>,
}

impl InitCommand {
    /// Execute the init command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let store = open_store(global)?;

        if store.has_selection() && !self.force {
            return Err(CliError::SemanticFailure(format!(
                "A selection already exists in {} (use --force to replace it)",
                store.directory().display()
            )));
        }

        let paths = resolve_path_args(&self.paths)?;
        let selection = store.create_new(self.description, &paths)?;
        store.save(&selection)?;

        report(
            global,
            &format!(
                "Initialized selection {} in {} with {} {}",
                selection.id(),
                store.directory().display(),
                selection.len(),
                paths_word(selection.len())
            ),
        );
        Ok(())
    }
}
