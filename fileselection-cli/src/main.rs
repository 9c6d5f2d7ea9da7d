//! Main entry point for the fileselection CLI.
//!
//! This is the command-line interface for keeping a selection of files
//! inside a folder:
//! - `init`: Create a new selection
//! - `add` / `remove`: Change the selected paths
//! - `list` / `show`: Inspect the selection
//! - `describe`: Change the description
//! - `status`: Check for a selection

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    fileselection::init_logger(cli.verbose, cli.quiet).install();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        dir: cli.dir,
        config_dir: cli.config_dir,
    };

    let result = match cli.command {
        cli::Command::Init(cmd) => cmd.execute(&global),
        cli::Command::Add(cmd) => cmd.execute(&global),
        cli::Command::Remove(cmd) => cmd.execute(&global),
        cli::Command::List(cmd) => cmd.execute(&global),
        cli::Command::Show(cmd) => cmd.execute(&global),
        cli::Command::Describe(cmd) => cmd.execute(&global),
        cli::Command::Status(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            if !(global.quiet && matches!(e, error::CliError::SemanticFailure(_))) {
                eprintln!("Error: {e}");
            }
            std::process::exit(e.exit_code());
        }
    }
}
