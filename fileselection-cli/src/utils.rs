//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including path resolution, configuration loading and selection access.

use crate::error::CliError;
use fileselection::path::normalize::normalize;
use fileselection::{Config, ConfigLoader, Selection, SelectionStore};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
#[allow(dead_code)] // `verbose` is consumed by the logger before commands run
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Folder holding the selection.
    pub dir: Option<PathBuf>,

    /// Override the configuration directory.
    pub config_dir: Option<PathBuf>,
}

/// Resolve the selection folder, using the working directory if not specified.
///
/// Paths are normalized (made absolute, `~` expanded) but NOT canonicalized,
/// so symlinked folders keep the name the user gave them.
pub fn resolve_dir(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    let cwd = working_dir()?;
    match &global.dir {
        Some(dir) => absolutize(dir, &cwd),
        None => normalize_path(&cwd),
    }
}

/// The directory relative arguments are resolved against.
///
/// `getcwd` reports the symlink-resolved directory. When `$PWD` names the
/// same directory it is used instead, so a folder entered through a symlink
/// keeps the name the user typed.
pub fn working_dir() -> Result<PathBuf, CliError> {
    let cwd = env::current_dir()?;
    match env::var_os("PWD").map(PathBuf::from) {
        Some(pwd) if pwd.is_absolute() && same_directory(&pwd, &cwd) => Ok(pwd),
        _ => Ok(cwd),
    }
}

fn same_directory(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Normalize a path (make absolute, expand ~, etc.) without following symlinks.
pub fn normalize_path(path: &Path) -> Result<PathBuf, CliError> {
    normalize(path).map_err(|e| CliError::InvalidArguments(e.to_string()))
}

/// Make `path` absolute against `base` unless it is absolute or starts with `~`.
fn absolutize(path: &Path, base: &Path) -> Result<PathBuf, CliError> {
    if path.is_absolute() || path.starts_with("~") {
        normalize_path(path)
    } else {
        normalize_path(&base.join(path))
    }
}

/// Resolve path arguments against the working directory.
///
/// The library reads relative paths as relative to the selection root. On
/// the command line they are relative to where the user stands, so every
/// argument is made absolute first.
pub fn resolve_path_args(paths: &[PathBuf]) -> Result<Vec<PathBuf>, CliError> {
    let cwd = working_dir()?;
    paths.iter().map(|path| absolutize(path, &cwd)).collect()
}

/// Open the store for the selected folder.
pub fn open_store(global: &GlobalOptions) -> Result<SelectionStore, CliError> {
    Ok(SelectionStore::new(resolve_dir(global)?))
}

/// Load the selection of the selected folder.
///
/// # Errors
///
/// Returns `NoSelection` if the folder has no selection file.
pub fn load_selection(store: &SelectionStore) -> Result<Selection, CliError> {
    store.load().map_err(CliError::from)
}

/// Load user configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables
/// 2. Configuration file
/// 3. Built-in defaults
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    ConfigLoader::load(global.config_dir.as_deref()).map_err(|e| CliError::Config(e.to_string()))
}

/// Print a status message unless `--quiet` was given.
pub fn report(global: &GlobalOptions, message: &str) {
    if !global.quiet {
        println!("{message}");
    }
}

/// Pluralize "path" for a count.
pub fn paths_word(count: usize) -> &'static str {
    if count == 1 {
        "path"
    } else {
        "paths"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(unix)]
    fn test_resolve_dir_explicit() {
        let global = GlobalOptions {
            dir: Some(PathBuf::from("/data/./sub/..")),
            ..Default::default()
        };
        assert_eq!(resolve_dir(&global).unwrap(), PathBuf::from("/data"));
    }

    #[test]
    fn test_resolve_dir_defaults_to_cwd() {
        let global = GlobalOptions::default();
        let cwd = working_dir().unwrap();
        assert_eq!(resolve_dir(&global).unwrap(), normalize(&cwd).unwrap());
    }

    #[test]
    #[cfg(unix)]
    fn test_resolve_path_args_makes_absolute() {
        let resolved = resolve_path_args(&[PathBuf::from("a.txt"), PathBuf::from("/x/y")]).unwrap();
        assert!(resolved[0].is_absolute());
        assert!(resolved[0].ends_with("a.txt"));
        assert_eq!(resolved[1], PathBuf::from("/x/y"));
    }

    #[test]
    fn test_working_dir_is_same_directory_as_cwd() {
        let cwd = env::current_dir().unwrap();
        assert!(same_directory(&working_dir().unwrap(), &cwd));
    }

    #[test]
    #[cfg(unix)]
    fn test_same_directory_through_symlink() {
        let temp_dir = tempfile::tempdir().unwrap();
        let real = temp_dir.path().join("real");
        let link = temp_dir.path().join("link");
        fs::create_dir(&real).unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        assert!(same_directory(&link, &real));
        assert!(!same_directory(&link, temp_dir.path()));
        assert!(!same_directory(&temp_dir.path().join("missing"), &real));
    }

    #[test]
    #[cfg(unix)]
    fn test_absolutize_keeps_base_name() {
        let resolved = absolutize(Path::new("sub/../a.txt"), Path::new("/link")).unwrap();
        assert_eq!(resolved, PathBuf::from("/link/a.txt"));
        assert_eq!(
            absolutize(Path::new("/x/y"), Path::new("/link")).unwrap(),
            PathBuf::from("/x/y")
        );
    }

    #[test]
    fn test_paths_word() {
        assert_eq!(paths_word(1), "path");
        assert_eq!(paths_word(0), "paths");
        assert_eq!(paths_word(3), "paths");
    }
}
