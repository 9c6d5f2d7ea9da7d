//! List command implementation.
//!
//! This module implements the `list` command, which prints the selected
//! paths as plain text or JSON.

use crate::error::CliError;
use crate::utils::{load_configuration, load_selection, open_store, GlobalOptions};
use clap::{Args, ValueEnum};
use fileselection::{format_listing, OutputFormat};
use std::io::Write;

/// List the selected paths.
#[derive(Args)]
pub struct ListCommand {
    /// Print absolute paths instead of paths relative to the folder
    #[arg(long)]
    pub absolute: bool,

    /// Output format (defaults to the configured format)
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<ListFormat>,
}

/// Output format for list command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ListFormat {
    /// One path per line
    Text,
    /// JSON object with selection metadata
    Json,
}

impl From<ListFormat> for OutputFormat {
    fn from(format: ListFormat) -> Self {
        match format {
            ListFormat::Text => OutputFormat::Text,
            ListFormat::Json => OutputFormat::Json,
        }
    }
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Load configuration
        let config = load_configuration(global)?;

        // 2. Load the selection
        let store = open_store(global)?;
        let selection = load_selection(&store)?;

        // 3. Flags win over configuration
        let format = self
            .format
            .map_or_else(|| config.output_format(), OutputFormat::from);
        let absolute = self.absolute || config.absolute_paths();

        let listing = format_listing(&selection, format, absolute)?;
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(listing.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}
