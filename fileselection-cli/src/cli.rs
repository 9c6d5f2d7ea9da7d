//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AddCommand, CompletionsCommand, DescribeCommand, InitCommand, ListCommand, RemoveCommand,
    ShowCommand, StatusCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for keeping a selection of files inside a folder.
#[derive(Parser)]
#[command(name = "fileselection")]
#[command(version, about = "Keep a persisted selection of files within a folder", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Folder holding the selection (defaults to the current directory)
    #[arg(long, value_name = "PATH", global = true, env = "FILESELECTION_DIR")]
    pub dir: Option<PathBuf>,

    /// Override the configuration directory
    #[arg(
        long,
        value_name = "PATH",
        global = true,
        env = "FILESELECTION_CONFIG_DIR"
    )]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Create a new selection in the folder
    Init(InitCommand),

    /// Add paths to the selection
    Add(AddCommand),

    /// Remove paths from the selection
    Remove(RemoveCommand),

    /// List the selected paths
    List(ListCommand),

    /// Show selection metadata
    Show(ShowCommand),

    /// Change the selection description
    Describe(DescribeCommand),

    /// Check whether the folder holds a selection
    Status(StatusCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
