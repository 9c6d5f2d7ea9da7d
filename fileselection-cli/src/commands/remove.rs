//! Remove command implementation.

use crate::error::CliError;
use crate::utils::{
    load_selection, open_store, paths_word, report, resolve_path_args, GlobalOptions,
};
use clap::Args;
use std::path::PathBuf;

/// Remove paths from the selection.
#[derive(Args)]
pub struct RemoveCommand {
    /// Paths to remove, relative to the current directory or absolute
    #[arg(value_name = "PATHS", required = true)]
    pub paths: Vec<PathBuf>,
}

impl RemoveCommand {
    /// Execute the remove command.
    ///
    /// Paths that are not selected are ignored.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let store = open_store(global)?;
        let mut selection = load_selection(&store)?;

        let paths = resolve_path_args(&self.paths)?;
        let removed = selection.remove(&paths)?;
        store.save(&selection)?;

        report(
            global,
            &format!(
                "Removed {removed} {} ({} selected)",
                paths_word(removed),
                selection.len()
            ),
        );
        Ok(())
    }
}
