//! Error types for the fileselection library.
//!
//! This module provides the error hierarchy for all operations in the
//! fileselection library, using `thiserror` for ergonomic error handling.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for operations that may fail with a fileselection error.
///
/// # Examples
///
/// ```
/// use fileselection::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(2)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the fileselection library.
#[derive(Debug, Error)]
pub enum Error {
    /// A selected path does not lie under the selection root.
    ///
    /// Raised by construction, `add` and `remove`. Paths are never silently
    /// coerced or dropped.
    #[error(
        "path {} is not relative to selection root {}",
        path.display(),
        root.display()
    )]
    NotRelativeToRoot {
        /// The offending path, as supplied by the caller.
        path: PathBuf,
        /// The root directory of the selection.
        root: PathBuf,
    },

    /// A persisted selection could not be loaded.
    ///
    /// Covers syntax errors, missing required keys and values of the wrong
    /// type.
    #[error("could not load selection from {source_name}: {reason}")]
    SelectionLoad {
        /// Identifier of the source being parsed, usually the data file path.
        source_name: String,
        /// What went wrong.
        reason: String,
    },

    /// The selection file (or one of its ancestor directories) does not exist.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// The file that was not found.
        path: PathBuf,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Build a load error for the given source.
    pub(crate) fn load(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::SelectionLoad {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }

    /// Map an I/O error on `path` to a library error.
    ///
    /// `NotFound` becomes [`Error::FileNotFound`], everything else is wrapped
    /// unchanged.
    pub(crate) fn from_io(err: io::Error, path: &Path) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => Self::Io(err),
        }
    }

    /// Check if error indicates the selection file does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use fileselection::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::FileNotFound { path: PathBuf::from("/data/.fileselection") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::FileNotFound { .. })
    }

    /// Check if error is a load failure for a malformed selection file.
    #[must_use]
    pub fn is_load_error(&self) -> bool {
        matches!(self, Self::SelectionLoad { .. })
    }

    /// Check if error is one of the selection-specific kinds.
    ///
    /// # Examples
    ///
    /// ```
    /// use fileselection::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::NotRelativeToRoot {
    ///     path: PathBuf::from("/elsewhere/file"),
    ///     root: PathBuf::from("/data"),
    /// };
    /// assert!(err.is_selection_error());
    /// ```
    #[must_use]
    pub fn is_selection_error(&self) -> bool {
        matches!(
            self,
            Self::NotRelativeToRoot { .. } | Self::SelectionLoad { .. }
        )
    }
}
