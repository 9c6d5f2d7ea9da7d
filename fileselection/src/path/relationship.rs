//! Path relationship checking.
//!
//! This module determines how two absolute paths relate to each other in the
//! filesystem hierarchy. Comparison is component-wise, so `/data` is not an
//! ancestor of `/database`.

use std::path::{Path, PathBuf};

/// Relationship between two paths.
///
/// # Examples
///
/// ```
/// use fileselection::path::PathRelationship;
/// use std::path::Path;
///
/// let root = Path::new("/data");
/// let file = Path::new("/data/sub/b.txt");
///
/// assert_eq!(
///     PathRelationship::between(root, file),
///     PathRelationship::Ancestor
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRelationship {
    /// The first path is an ancestor of the second.
    Ancestor,

    /// The first path is a descendant of the second.
    Descendant,

    /// The paths are the same.
    Same,

    /// Neither path is an ancestor or descendant of the other.
    Unrelated,
}

impl PathRelationship {
    /// Determine the relationship between two paths.
    ///
    /// Trailing separators are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use fileselection::path::PathRelationship;
    /// use std::path::Path;
    ///
    /// let rel = PathRelationship::between(Path::new("/a/b"), Path::new("/a"));
    /// assert_eq!(rel, PathRelationship::Descendant);
    ///
    /// let rel = PathRelationship::between(Path::new("/a"), Path::new("/a/"));
    /// assert_eq!(rel, PathRelationship::Same);
    ///
    /// let rel = PathRelationship::between(Path::new("/data"), Path::new("/database"));
    /// assert_eq!(rel, PathRelationship::Unrelated);
    /// ```
    #[must_use]
    pub fn between(path1: &Path, path2: &Path) -> Self {
        let p1 = normalize_for_comparison(path1);
        let p2 = normalize_for_comparison(path2);

        if p1 == p2 {
            return Self::Same;
        }

        if p2.starts_with(&p1) {
            return Self::Ancestor;
        }

        if p1.starts_with(&p2) {
            return Self::Descendant;
        }

        Self::Unrelated
    }

    /// Check if `path` lies strictly beneath `directory`.
    ///
    /// This is the containment rule for selected paths: the directory itself
    /// does not count.
    ///
    /// # Examples
    ///
    /// ```
    /// use fileselection::path::PathRelationship;
    /// use std::path::Path;
    ///
    /// let dir = Path::new("/data");
    /// assert!(PathRelationship::is_strictly_within(Path::new("/data/a.txt"), dir));
    /// assert!(!PathRelationship::is_strictly_within(dir, dir));
    /// assert!(!PathRelationship::is_strictly_within(Path::new("/other"), dir));
    /// ```
    #[must_use]
    pub fn is_strictly_within(path: &Path, directory: &Path) -> bool {
        Self::between(path, directory) == Self::Descendant
    }

    /// Get a human-readable description of the relationship.
    #[must_use]
    pub fn description(&self, path1: &Path, path2: &Path) -> String {
        match self {
            Self::Ancestor => {
                format!("{} is an ancestor of {}", path1.display(), path2.display())
            }
            Self::Descendant => {
                format!("{} is a descendant of {}", path1.display(), path2.display())
            }
            Self::Same => {
                format!(
                    "{} and {} are the same path",
                    path1.display(),
                    path2.display()
                )
            }
            Self::Unrelated => {
                format!(
                    "{} and {} are unrelated paths",
                    path1.display(),
                    path2.display()
                )
            }
        }
    }
}

/// Normalize a path for comparison purposes by removing a trailing separator.
fn normalize_for_comparison(path: &Path) -> PathBuf {
    let mut p = path.to_path_buf();

    if let Some(s) = p.to_str() {
        if s.len() > 1 && (s.ends_with('/') || s.ends_with('\\')) {
            p = PathBuf::from(&s[..s.len() - 1]);
        }
    }

    p
}
