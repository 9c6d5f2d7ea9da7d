//! Show command implementation.

use crate::error::CliError;
use crate::utils::{load_selection, open_store, GlobalOptions};
use clap::Args;
use fileselection::DATA_FILE_NAME;

/// Show selection metadata.
#[derive(Args)]
pub struct ShowCommand {}

impl ShowCommand {
    /// Execute the show command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let store = open_store(global)?;
        let selection = load_selection(&store)?;

        println!("id:          {}", selection.id());
        println!("description: {}", selection.description());
        println!("root:        {}", selection.root_path().display());
        println!("file:        {DATA_FILE_NAME}");
        println!("paths:       {}", selection.len());
        Ok(())
    }
}
