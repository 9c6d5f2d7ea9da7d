//! Containment of selected paths within a selection root.
//!
//! Every path that enters a selection goes through [`make_relative`]: on
//! construction, on `add` and on `remove`. The rule is lexical and never
//! touches the filesystem.

use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};
use crate::path::normalize::{resolve_components, resolve_relative};
use crate::path::relationship::PathRelationship;

/// Express `path` relative to `root`, enforcing containment.
///
/// - An absolute `path` has its `.`/`..` components resolved and must lie
///   strictly beneath `root`; the root prefix is then stripped.
/// - A relative `path` is taken to be relative to `root` already. Its
///   `.`/`..` components are resolved and it may not climb out of `root`.
///
/// `root` must already be normalized (absolute, no `.` or `..`).
///
/// # Errors
///
/// Returns [`Error::NotRelativeToRoot`] naming `path` and `root` if the path
/// escapes the root, is unrelated to it, or resolves to the root itself.
///
/// # Examples
///
/// ```
/// use fileselection::path::make_relative;
/// use std::path::{Path, PathBuf};
///
/// let root = Path::new("/data");
/// assert_eq!(
///     make_relative(root, Path::new("/data/sub/b.txt")).unwrap(),
///     PathBuf::from("sub/b.txt")
/// );
/// assert_eq!(
///     make_relative(root, Path::new("a.txt")).unwrap(),
///     PathBuf::from("a.txt")
/// );
/// assert!(make_relative(root, Path::new("/elsewhere/b.txt")).is_err());
/// assert!(make_relative(root, Path::new("../b.txt")).is_err());
/// ```
pub fn make_relative(root: &Path, path: &Path) -> Result<PathBuf> {
    let not_relative = || Error::NotRelativeToRoot {
        path: path.to_path_buf(),
        root: root.to_path_buf(),
    };

    let relative = if path.is_absolute() {
        let resolved = resolve_components(path).map_err(|_| not_relative())?;
        if !PathRelationship::is_strictly_within(&resolved, root) {
            return Err(not_relative());
        }
        resolved
            .strip_prefix(root)
            .map_err(|_| not_relative())?
            .to_path_buf()
    } else {
        resolve_relative(path).ok_or_else(not_relative)?
    };

    if relative.as_os_str().is_empty() {
        return Err(not_relative());
    }

    Ok(relative)
}

/// Render a relative path with `/` separators regardless of platform.
///
/// # Examples
///
/// ```
/// use fileselection::path::to_slash_string;
/// use std::path::PathBuf;
///
/// let path: PathBuf = ["sub", "b.txt"].iter().collect();
/// assert_eq!(to_slash_string(&path), "sub/b.txt");
/// ```
#[must_use]
pub fn to_slash_string(path: &Path) -> String {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
