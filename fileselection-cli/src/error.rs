//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer,
//! wrapping library errors and providing appropriate exit codes.

use fileselection::Error as LibError;
use std::fmt;
use std::path::PathBuf;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// Invalid command-line arguments.
    InvalidArguments(String),

    /// I/O error.
    Io(std::io::Error),

    /// The directory holds no selection file.
    NoSelection(PathBuf),

    /// Configuration error.
    Config(String),

    /// Semantic failure (e.g., a selection already exists) - exit code 1.
    SemanticFailure(String),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Semantic failure (e.g., `status` found no selection)
    /// - 3: No selection file in the directory
    /// - 4: Invalid arguments, including paths outside the selection root
    /// - 5: I/O error
    /// - 6: Other library error
    /// - 7: Configuration error or unreadable selection file
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::SemanticFailure(_) => 1,
            CliError::NoSelection(_) => 3,
            CliError::InvalidArguments(_) => 4,
            CliError::Io(_) => 5,
            CliError::Config(_) => 7,
            CliError::Library(lib_err) => match lib_err {
                LibError::NotRelativeToRoot { .. } | LibError::InvalidPath { .. } => 4,
                LibError::Io(_) => 5,
                LibError::SelectionLoad { .. } => 7,
                _ => 6,
            },
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::NoSelection(dir) => write!(
                f,
                "No selection found in {} (run `fileselection init` first)",
                dir.display()
            ),
            CliError::Config(msg) => write!(f, "Configuration error: {msg}"),
            CliError::SemanticFailure(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        match e {
            LibError::FileNotFound { path } => {
                let dir = path.parent().map(PathBuf::from).unwrap_or(path);
                CliError::NoSelection(dir)
            }
            other => CliError::Library(other),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}
