//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `init`: Create a new selection in a folder
//! - `add`: Add paths to the selection
//! - `remove`: Remove paths from the selection
//! - `list`: List the selected paths
//! - `show`: Show selection metadata
//! - `describe`: Change the selection description
//! - `status`: Check whether a folder holds a selection
//! - `completions`: Generate shell completion scripts

pub mod add;
pub mod completions;
pub mod describe;
pub mod init;
pub mod list;
pub mod remove;
pub mod show;
pub mod status;

pub use add::AddCommand;
pub use completions::CompletionsCommand;
pub use describe::DescribeCommand;
pub use init::InitCommand;
pub use list::ListCommand;
pub use remove::RemoveCommand;
pub use show::ShowCommand;
pub use status::StatusCommand;
