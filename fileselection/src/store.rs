//! Persistence of one selection per directory.
//!
//! A [`SelectionStore`] binds a directory to the fixed data file
//! [`DATA_FILE_NAME`] inside it. The directory is the root of the stored
//! selection. Every `save` rewrites the whole file and every `load` reparses
//! it; nothing is cached in between.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::format::{read_selection, to_yaml_string};
use crate::path::normalize::normalize;
use crate::path::PathRelationship;
use crate::selection::Selection;

/// Name of the data file a store reads and writes inside its directory.
pub const DATA_FILE_NAME: &str = ".fileselection";

/// The selection file of a single directory.
///
/// # Examples
///
/// ```no_run
/// use fileselection::SelectionStore;
///
/// let store = SelectionStore::new("/data");
/// let mut selection = if store.has_selection() {
///     store.load().unwrap()
/// } else {
///     store.create_new("files to upload", Vec::<&str>::new()).unwrap()
/// };
/// selection.add(["a.txt", "/data/sub/b.txt"]).unwrap();
/// store.save(&selection).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionStore {
    directory: PathBuf,
}

impl SelectionStore {
    /// Create a store for `directory`. Nothing is read or written.
    #[must_use]
    pub fn new(directory: impl AsRef<Path>) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
        }
    }

    /// The directory this store is bound to.
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Full path of the data file.
    #[must_use]
    pub fn data_file_path(&self) -> PathBuf {
        self.directory.join(DATA_FILE_NAME)
    }

    /// Whether the data file currently exists. The file is not parsed.
    #[must_use]
    pub fn has_selection(&self) -> bool {
        self.data_file_path().exists()
    }

    /// Build a new, unsaved selection rooted at this store's directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotRelativeToRoot`] if any path lies outside the
    /// directory.
    pub fn create_new<I, P>(
        &self,
        description: impl Into<String>,
        selected_paths: I,
    ) -> Result<Selection>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        Selection::builder(&self.directory)
            .description(description)
            .selected_paths(selected_paths)
            .build()
    }

    /// Load the selection stored in this directory.
    ///
    /// # Errors
    ///
    /// - [`Error::FileNotFound`] if the data file or the directory is missing
    /// - [`Error::SelectionLoad`] if the file is malformed
    /// - [`Error::NotRelativeToRoot`] if a listed path escapes the directory
    pub fn load(&self) -> Result<Selection> {
        let data_file = self.data_file_path();
        log::debug!("loading selection from {}", data_file.display());

        let file = File::open(&data_file).map_err(|e| Error::from_io(e, &data_file))?;
        let selection = read_selection(file, &data_file)?;

        log::debug!(
            "loaded selection {} with {} paths",
            selection.id(),
            selection.len()
        );
        Ok(selection)
    }

    /// Load the stored selection, or create a new unsaved one if there is none.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`SelectionStore::load`], except that a
    /// missing data file is not an error.
    pub fn load_or_create(&self, description: impl Into<String>) -> Result<Selection> {
        match self.load() {
            Ok(selection) => Ok(selection),
            Err(Error::FileNotFound { .. }) if self.directory.is_dir() => {
                self.create_new(description, Vec::<PathBuf>::new())
            }
            Err(e) => Err(e),
        }
    }

    /// Write `selection` to the data file, replacing any previous contents.
    ///
    /// # Errors
    ///
    /// - [`Error::FileNotFound`] if the directory does not exist
    /// - [`Error::Io`] for any other write failure
    pub fn save(&self, selection: &Selection) -> Result<()> {
        let data_file = self.data_file_path();

        if let Ok(directory) = normalize(&self.directory) {
            let relationship = PathRelationship::between(&directory, selection.root_path());
            if relationship != PathRelationship::Same {
                log::warn!(
                    "saving selection rooted at {} into {}; paths will be read relative to the latter",
                    selection.root_path().display(),
                    directory.display()
                );
            }
        }

        let text = to_yaml_string(selection)?;
        fs::write(&data_file, text).map_err(|e| Error::from_io(e, &data_file))?;

        log::debug!(
            "saved selection {} with {} paths to {}",
            selection.id(),
            selection.len(),
            data_file.display()
        );
        Ok(())
    }
}
