//! Path normalization functions.
//!
//! This module provides functionality to normalize paths by:
//! - Expanding tilde (~) to the home directory
//! - Converting relative paths to absolute paths
//! - Resolving `.` and `..` components
//!
//! All of it is lexical. Symlinks are never followed, so a path that does
//! not exist yet normalizes the same way as one that does.

use std::env;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Expand tilde (~) to the home directory.
///
/// This function handles `~` and `~/path` but does not support `~user` syntax.
///
/// # Errors
///
/// Returns an error if:
/// - The path contains invalid UTF-8
/// - The home directory cannot be determined
/// - The path uses `~user` syntax (not supported)
///
/// # Examples
///
/// ```
/// use fileselection::path::normalize::expand_tilde;
/// use std::path::Path;
///
/// let expanded = expand_tilde(Path::new("~/selection")).unwrap();
/// assert!(expanded.is_absolute());
/// assert!(expanded.ends_with("selection"));
///
/// let expanded = expand_tilde(Path::new("/absolute")).unwrap();
/// assert_eq!(expanded, Path::new("/absolute"));
/// ```
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let Some(path_str) = path.to_str() else {
        // Non-UTF-8 paths cannot start with a literal tilde we care about.
        return Ok(path.to_path_buf());
    };

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Cannot determine home directory".to_string(),
    })?;

    if path_str == "~" {
        Ok(home)
    } else if path_str.starts_with("~/") || path_str.starts_with("~\\") {
        Ok(home.join(&path_str[2..]))
    } else {
        Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "~user syntax is not supported; use ~ or ~/path".to_string(),
        })
    }
}

/// Resolve `.` and `..` components in an absolute path.
///
/// # Errors
///
/// Returns an error if the path contains too many `..` components that would
/// escape the filesystem root.
///
/// # Examples
///
/// ```
/// use fileselection::path::normalize::resolve_components;
/// use std::path::{Path, PathBuf};
///
/// let resolved = resolve_components(Path::new("/data/./sub/../a.txt")).unwrap();
/// assert_eq!(resolved, PathBuf::from("/data/a.txt"));
///
/// assert!(resolve_components(Path::new("/data/../..")).is_err());
/// ```
pub fn resolve_components(path: &Path) -> Result<PathBuf> {
    let mut result = PathBuf::new();
    let mut has_root = false;
    // Number of Normal components currently in `result`; a `..` may only pop these.
    let mut depth = 0usize;

    for component in path.components() {
        match component {
            Component::RootDir => {
                result.push(component);
                has_root = true;
            }
            Component::Prefix(prefix) => {
                result.push(prefix.as_os_str());
                has_root = true;
            }
            Component::Normal(c) => {
                result.push(c);
                depth += 1;
            }
            Component::CurDir => {}
            Component::ParentDir => {
                if depth == 0 {
                    return Err(Error::InvalidPath {
                        path: path.to_path_buf(),
                        reason: "Path contains too many '..' components (escapes root)".to_string(),
                    });
                }
                result.pop();
                depth -= 1;
            }
        }
    }

    if has_root && result.as_os_str().is_empty() {
        result.push(Component::RootDir);
    }

    Ok(result)
}

/// Resolve `.` and `..` components in a relative path.
///
/// Returns `None` if the path is not relative, or if a `..` climbs above the
/// directory the path is relative to.
///
/// # Examples
///
/// ```
/// use fileselection::path::normalize::resolve_relative;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(
///     resolve_relative(Path::new("./sub/../a.txt")),
///     Some(PathBuf::from("a.txt"))
/// );
/// assert_eq!(resolve_relative(Path::new("../a.txt")), None);
/// assert_eq!(resolve_relative(Path::new(".")), Some(PathBuf::new()));
/// ```
#[must_use]
pub fn resolve_relative(path: &Path) -> Option<PathBuf> {
    let mut result = PathBuf::new();

    for component in path.components() {
        match component {
            Component::Normal(c) => result.push(c),
            Component::CurDir => {}
            Component::ParentDir => {
                if !result.pop() {
                    return None;
                }
            }
            Component::RootDir | Component::Prefix(_) => return None,
        }
    }

    Some(result)
}

/// Normalize a path to absolute form.
///
/// This is the main normalization function that:
/// 1. Expands tilde (~) if present
/// 2. Converts relative paths to absolute (using current directory)
/// 3. Resolves `.` and `..` components
///
/// # Errors
///
/// Returns an error if tilde expansion fails, the current directory cannot
/// be determined, or the path contains too many `..` components.
///
/// # Examples
///
/// ```no_run
/// use fileselection::path::normalize::normalize;
/// use std::path::Path;
///
/// let normalized = normalize(Path::new("./data")).unwrap();
/// assert!(normalized.is_absolute());
///
/// let normalized = normalize(Path::new("/a/./b/../c")).unwrap();
/// assert_eq!(normalized, Path::new("/a/c"));
/// ```
pub fn normalize(path: &Path) -> Result<PathBuf> {
    let expanded = expand_tilde(path)?;

    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        let cwd = env::current_dir().map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Cannot get current directory: {e}"),
        })?;
        cwd.join(expanded)
    };

    resolve_components(&absolute)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_tilde_home() {
        let home = home::home_dir().unwrap();
        assert_eq!(expand_tilde(Path::new("~")).unwrap(), home);
        assert_eq!(expand_tilde(Path::new("~/docs")).unwrap(), home.join("docs"));
    }

    #[test]
    fn test_expand_tilde_user_syntax_not_supported() {
        assert!(expand_tilde(Path::new("~user/path")).is_err());
    }

    #[test]
    fn test_expand_tilde_relative_unchanged() {
        assert_eq!(
            expand_tilde(Path::new("sub/file.txt")).unwrap(),
            PathBuf::from("sub/file.txt")
        );
    }

    #[test]
    #[cfg(unix)]
    fn test_resolve_components() {
        assert_eq!(
            resolve_components(Path::new("/a/./b/../c")).unwrap(),
            PathBuf::from("/a/c")
        );
        assert_eq!(
            resolve_components(Path::new("/a/b/../../c")).unwrap(),
            PathBuf::from("/c")
        );
        assert_eq!(
            resolve_components(Path::new("/")).unwrap(),
            PathBuf::from("/")
        );
    }

    #[test]
    #[cfg(unix)]
    fn test_resolve_components_too_many_parent() {
        assert!(resolve_components(Path::new("/a/../..")).is_err());
        assert!(resolve_components(Path::new("/..")).is_err());
    }

    #[test]
    fn test_resolve_relative() {
        assert_eq!(
            resolve_relative(Path::new("a/b/c.txt")),
            Some(PathBuf::from("a/b/c.txt"))
        );
        assert_eq!(
            resolve_relative(Path::new("a/./b/../c.txt")),
            Some(PathBuf::from("a/c.txt"))
        );
        assert_eq!(resolve_relative(Path::new("a/..")), Some(PathBuf::new()));
    }

    #[test]
    fn test_resolve_relative_escape() {
        assert_eq!(resolve_relative(Path::new("..")), None);
        assert_eq!(resolve_relative(Path::new("a/../../b")), None);
    }

    #[test]
    #[cfg(unix)]
    fn test_resolve_relative_rejects_absolute() {
        assert_eq!(resolve_relative(Path::new("/a")), None);
    }

    #[test]
    #[cfg(unix)]
    fn test_normalize_absolute() {
        let normalized = normalize(Path::new("/data/./sub/../x")).unwrap();
        assert_eq!(normalized, PathBuf::from("/data/x"));
    }

    #[test]
    fn test_normalize_relative() {
        let cwd = env::current_dir().unwrap();
        let normalized = normalize(Path::new("relative/path")).unwrap();
        assert!(normalized.is_absolute());
        assert!(normalized.starts_with(&cwd));
        assert!(normalized.ends_with("relative/path"));
    }

    #[test]
    fn test_normalize_current_dir() {
        let cwd = env::current_dir().unwrap();
        assert_eq!(normalize(Path::new(".")).unwrap(), cwd);
    }

    #[cfg(unix)]
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn relative_with_dots_strategy() -> impl Strategy<Value = String> {
            prop::collection::vec(
                prop_oneof![
                    Just(".".to_string()),
                    Just("..".to_string()),
                    "[a-zA-Z0-9_-]{1,10}".prop_map(|s| s),
                ],
                1..=8,
            )
            .prop_map(|parts| parts.join("/"))
        }

        proptest! {
            /// A resolved relative path never contains `.` or `..`
            #[test]
            fn resolve_relative_is_clean(s in relative_with_dots_strategy()) {
                if let Some(resolved) = resolve_relative(Path::new(&s)) {
                    for component in resolved.components() {
                        prop_assert!(matches!(component, Component::Normal(_)));
                    }
                }
            }

            /// Resolving twice gives the same result as resolving once
            #[test]
            fn resolve_relative_idempotent(s in relative_with_dots_strategy()) {
                if let Some(once) = resolve_relative(Path::new(&s)) {
                    prop_assert_eq!(resolve_relative(&once), Some(once.clone()));
                }
            }

            /// Relative and absolute resolution agree under a root
            #[test]
            fn resolve_relative_matches_absolute(s in relative_with_dots_strategy()) {
                let root = Path::new("/selection/root");
                let absolute = resolve_components(&root.join(&s));
                if let Some(relative) = resolve_relative(Path::new(&s)) {
                    prop_assert_eq!(absolute.unwrap(), root.join(relative));
                }
            }
        }
    }
}
