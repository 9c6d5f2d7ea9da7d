//! Add command implementation.

use crate::error::CliError;
use crate::utils::{
    load_selection, open_store, paths_word, report, resolve_path_args, GlobalOptions,
};
use clap::Args;
use std::path::PathBuf;

/// Add paths to the selection.
#[derive(Args)]
pub struct AddCommand {
    /// Paths to add, relative to the current directory or absolute
    #[arg(value_name = "PATHS", required = true)]
    pub paths: Vec<PathBuf>,
}

impl AddCommand {
    /// Execute the add command.
    ///
    /// Nothing is written if any path lies outside the folder.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let store = open_store(global)?;
        let mut selection = load_selection(&store)?;

        let paths = resolve_path_args(&self.paths)?;
        let added = selection.add(&paths)?;
        store.save(&selection)?;

        report(
            global,
            &format!(
                "Added {added} {} ({} selected)",
                paths_word(added),
                selection.len()
            ),
        );
        Ok(())
    }
}
