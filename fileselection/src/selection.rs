//! The in-memory file selection.
//!
//! A [`Selection`] is a set of paths relative to a root directory, together
//! with an id and a description. Every path that enters or leaves the set is
//! normalized with [`make_relative`], so the set never holds a path outside
//! the root.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::error::Result;
use crate::path::normalize::normalize;
use crate::path::{make_relative, to_slash_string};
use crate::representation::{Representable, SelectionRepresentation};

/// A named set of files relative to a root directory.
///
/// # Examples
///
/// ```
/// use fileselection::Selection;
/// use std::path::PathBuf;
///
/// let mut selection = Selection::builder("/data")
///     .description("files to upload")
///     .build()
///     .unwrap();
///
/// selection.add(["a.txt", "/data/sub/b.txt"]).unwrap();
/// assert!(selection.contains("sub/b.txt"));
/// assert_eq!(
///     selection.selected_paths_absolute(),
///     vec![PathBuf::from("/data/a.txt"), PathBuf::from("/data/sub/b.txt")]
/// );
///
/// // Paths outside the root are rejected
/// assert!(selection.add(["/etc/passwd"]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    id: String,
    description: String,
    root_path: PathBuf,
    selected_paths: BTreeSet<PathBuf>,
}

impl Selection {
    /// Create an empty selection rooted at `root_path` with a fresh id.
    ///
    /// # Errors
    ///
    /// Returns an error if the root cannot be normalized to an absolute path.
    pub fn new(root_path: impl AsRef<Path>) -> Result<Self> {
        Self::builder(root_path).build()
    }

    /// Creates a new selection builder.
    ///
    /// # Examples
    ///
    /// ```
    /// use fileselection::Selection;
    ///
    /// let selection = Selection::builder("/data")
    ///     .id("fixed-id")
    ///     .selected_paths(["a.txt"])
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(selection.id(), "fixed-id");
    /// assert_eq!(selection.len(), 1);
    /// ```
    #[must_use]
    pub fn builder(root_path: impl AsRef<Path>) -> SelectionBuilder {
        SelectionBuilder {
            root_path: root_path.as_ref().to_path_buf(),
            description: String::new(),
            selected_paths: Vec::new(),
            id: None,
        }
    }

    /// Returns the selection id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Replaces the description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Returns the absolute root directory all paths are relative to.
    #[must_use]
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    /// Returns the selected paths, relative to the root, in sorted order.
    #[must_use]
    pub fn selected_paths(&self) -> &BTreeSet<PathBuf> {
        &self.selected_paths
    }

    /// Returns every selected path joined onto the root.
    #[must_use]
    pub fn selected_paths_absolute(&self) -> Vec<PathBuf> {
        self.selected_paths
            .iter()
            .map(|path| self.root_path.join(path))
            .collect()
    }

    /// Number of selected paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.selected_paths.len()
    }

    /// Whether no paths are selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected_paths.is_empty()
    }

    /// Check whether `path` is selected.
    ///
    /// A path outside the root is never selected.
    #[must_use]
    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        make_relative(&self.root_path, path.as_ref())
            .map(|relative| self.selected_paths.contains(&relative))
            .unwrap_or(false)
    }

    /// Add paths to the selection.
    ///
    /// Relative paths are taken to be relative to the root; absolute paths are
    /// re-expressed relative to it. Adding a path that is already selected is
    /// not an error. Returns the number of paths that were newly added.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotRelativeToRoot`] if any path lies outside
    /// the root. The selection is left unchanged in that case.
    pub fn add<I, P>(&mut self, paths: I) -> Result<usize>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let relative = self.make_all_relative(paths)?;
        let before = self.selected_paths.len();
        self.selected_paths.extend(relative);
        Ok(self.selected_paths.len() - before)
    }

    /// Remove paths from the selection.
    ///
    /// Removing a path that is not selected is a no-op. Returns the number of
    /// paths that were actually removed.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotRelativeToRoot`] if any path lies outside
    /// the root. The selection is left unchanged in that case.
    pub fn remove<I, P>(&mut self, paths: I) -> Result<usize>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let relative = self.make_all_relative(paths)?;
        Ok(relative
            .iter()
            .filter(|path| self.selected_paths.remove(*path))
            .count())
    }

    /// Replace the whole path set.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotRelativeToRoot`] if any path lies outside
    /// the root. The selection is left unchanged in that case.
    pub fn set_selected_paths<I, P>(&mut self, paths: I) -> Result<()>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let relative = self.make_all_relative(paths)?;
        self.selected_paths = relative.into_iter().collect();
        Ok(())
    }

    /// Remove every selected path.
    pub fn clear(&mut self) {
        self.selected_paths.clear();
    }

    /// Normalize a whole batch before anything is committed.
    fn make_all_relative<I, P>(&self, paths: I) -> Result<Vec<PathBuf>>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        paths
            .into_iter()
            .map(|path| make_relative(&self.root_path, path.as_ref()))
            .collect()
    }
}

impl Representable for Selection {
    type Representation = SelectionRepresentation;

    fn to_representation(&self) -> SelectionRepresentation {
        SelectionRepresentation {
            id: self.id.clone(),
            description: self.description.clone(),
            selected_paths: self
                .selected_paths
                .iter()
                .map(|path| to_slash_string(path))
                .collect(),
        }
    }

    fn from_representation(repr: SelectionRepresentation, root: &Path) -> Result<Self> {
        Self::builder(root)
            .id(repr.id)
            .description(repr.description)
            .selected_paths(repr.selected_paths)
            .build()
    }
}

/// Builder for creating `Selection` instances.
#[derive(Debug)]
pub struct SelectionBuilder {
    root_path: PathBuf,
    description: String,
    selected_paths: Vec<PathBuf>,
    id: Option<String>,
}

impl SelectionBuilder {
    /// Sets the description. Defaults to the empty string.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the initially selected paths.
    #[must_use]
    pub fn selected_paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.selected_paths = paths
            .into_iter()
            .map(|path| path.as_ref().to_path_buf())
            .collect();
        self
    }

    /// Sets the id. An empty id is treated as absent.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Builds the selection.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The root cannot be normalized to an absolute path
    /// - Any selected path lies outside the root (`NotRelativeToRoot`)
    ///
    /// # Examples
    ///
    /// ```
    /// use fileselection::{Error, Selection};
    ///
    /// let result = Selection::builder("/data")
    ///     .selected_paths(["/data/a.txt", "/other/b.txt"])
    ///     .build();
    /// assert!(matches!(result, Err(Error::NotRelativeToRoot { .. })));
    /// ```
    pub fn build(self) -> Result<Selection> {
        let root_path = normalize(&self.root_path)?;
        let id = self
            .id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let mut selection = Selection {
            id,
            description: self.description,
            root_path,
            selected_paths: BTreeSet::new(),
        };
        selection.add(&self.selected_paths)?;
        Ok(selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    const ROOT: &str = "/fileselection_root_path/test1";

    fn selection() -> Selection {
        Selection::new(ROOT).unwrap()
    }

    #[test]
    fn test_new_is_empty_with_fresh_id() {
        let a = selection();
        let b = selection();
        assert!(a.is_empty());
        assert_eq!(a.description(), "");
        assert!(!a.id().is_empty());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_builder_with_description_and_paths() {
        let selection = Selection::builder(ROOT)
            .description("a test selection")
            .selected_paths(["selected_paths/file1", "selected_paths/file2"])
            .build()
            .unwrap();
        assert_eq!(selection.len(), 2);
        assert_eq!(selection.description(), "a test selection");
    }

    #[test]
    fn test_empty_id_is_replaced() {
        let selection = Selection::builder(ROOT).id("").build().unwrap();
        assert!(!selection.id().is_empty());
    }

    #[test]
    #[cfg(unix)]
    fn test_absolute_paths_stored_relative() {
        let root = Path::new(ROOT);
        let selection = Selection::builder(root)
            .selected_paths([root.join("file1"), root.join("file2")])
            .build()
            .unwrap();

        assert_eq!(selection.len(), 2);
        assert!(selection.selected_paths().iter().all(|p| !p.is_absolute()));
        assert_eq!(
            selection.selected_paths_absolute(),
            vec![root.join("file1"), root.join("file2")]
        );
    }

    #[test]
    #[cfg(unix)]
    fn test_construction_outside_root_fails() {
        let root = Path::new(ROOT);
        let result = Selection::builder(root)
            .selected_paths([root.join("file1"), PathBuf::from("/some_other_absolute_path/file2")])
            .build();
        assert!(matches!(result, Err(Error::NotRelativeToRoot { .. })));
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut selection = selection();
        assert_eq!(selection.add(["a.txt"]).unwrap(), 1);
        assert_eq!(selection.add(["a.txt", "./a.txt"]).unwrap(), 0);
        assert_eq!(selection.len(), 1);
    }

    #[test]
    #[cfg(unix)]
    fn test_add_absolute_and_relative_collapse() {
        let mut selection = selection();
        selection
            .add(["sub/b.txt", "/fileselection_root_path/test1/sub/b.txt"])
            .unwrap();
        assert_eq!(selection.len(), 1);
    }

    #[test]
    #[cfg(unix)]
    fn test_add_failure_leaves_set_unchanged() {
        let mut selection = selection();
        selection.add(["keep.txt"]).unwrap();

        let result = selection.add(["new1.txt", "/elsewhere/x.txt", "new2.txt"]);
        assert!(matches!(result, Err(Error::NotRelativeToRoot { .. })));
        assert_eq!(selection.len(), 1);
        assert!(selection.contains("keep.txt"));
        assert!(!selection.contains("new1.txt"));
    }

    #[test]
    fn test_remove_present_and_absent() {
        let mut selection = selection();
        selection.add(["a.txt", "b.txt"]).unwrap();

        assert_eq!(selection.remove(["a.txt"]).unwrap(), 1);
        assert_eq!(selection.remove(["not-there.txt"]).unwrap(), 0);
        assert_eq!(selection.len(), 1);
        assert!(selection.contains("b.txt"));
    }

    #[test]
    #[cfg(unix)]
    fn test_remove_outside_root_is_an_error() {
        let mut selection = selection();
        selection.add(["a.txt"]).unwrap();

        let result = selection.remove(["a.txt", "/elsewhere/a.txt"]);
        assert!(matches!(result, Err(Error::NotRelativeToRoot { .. })));
        assert!(selection.contains("a.txt"));
    }

    #[test]
    fn test_remove_escaping_relative_is_an_error() {
        let mut selection = selection();
        assert!(selection.remove(["../a.txt"]).is_err());
    }

    #[test]
    fn test_set_selected_paths_replaces() {
        let mut selection = selection();
        selection.add(["a.txt"]).unwrap();
        selection.set_selected_paths(["b.txt", "c.txt"]).unwrap();
        assert!(!selection.contains("a.txt"));
        assert_eq!(selection.len(), 2);

        selection.clear();
        assert!(selection.is_empty());
    }

    #[test]
    fn test_contains_outside_root_is_false() {
        let mut selection = selection();
        selection.add(["a.txt"]).unwrap();
        assert!(!selection.contains("../a.txt"));
    }

    #[test]
    fn test_to_representation_is_sorted_and_slashed() {
        let mut selection = Selection::builder(ROOT).id("abc").build().unwrap();
        let nested: PathBuf = ["sub", "b.txt"].iter().collect();
        selection.add([nested.as_path(), Path::new("a.txt")]).unwrap();

        let repr = selection.to_representation();
        assert_eq!(repr.id, "abc");
        assert_eq!(repr.selected_paths, vec!["a.txt", "sub/b.txt"]);
    }

    #[test]
    fn test_representation_round_trip() {
        let mut selection = selection();
        selection.set_description("line one\nline {two} \"quoted\"");
        selection.add(["a.txt", "sub/Ба́бушка.txt"]).unwrap();

        let restored =
            Selection::from_representation(selection.to_representation(), selection.root_path())
                .unwrap();
        assert_eq!(restored, selection);
    }
}
