//! Configuration file discovery and loading.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Environment variable overriding the configuration directory.
pub const CONFIG_DIR_ENV: &str = "FILESELECTION_CONFIG_DIR";

/// Name of the configuration file inside the configuration directory.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Returns the default configuration directory, `~/.fileselection`.
///
/// `FILESELECTION_CONFIG_DIR` takes precedence when set.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_config_dir() -> Result<PathBuf> {
    if let Some(dir) = env::var_os(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    let home = home::home_dir().ok_or_else(|| Error::Validation {
        field: "home_directory".into(),
        message: "Cannot determine home directory".into(),
    })?;
    Ok(home.join(".fileselection"))
}

/// Loads user configuration.
///
/// # Examples
///
/// ```no_run
/// use fileselection::config::ConfigLoader;
///
/// let config = ConfigLoader::load(None).unwrap();
/// println!("listing format: {}", config.output_format());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the configuration file and apply environment overrides.
    ///
    /// Reads `{config_dir}/config.yaml`, or the file in
    /// [`default_config_dir`] when `config_dir` is `None`. A missing file
    /// yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed, or
    /// if an environment override is invalid.
    pub fn load(config_dir: Option<&Path>) -> Result<Config> {
        let config_path = match config_dir {
            Some(dir) => dir.join(CONFIG_FILE_NAME),
            None => default_config_dir()?.join(CONFIG_FILE_NAME),
        };

        let mut config = if config_path.exists() {
            log::debug!("loading configuration from {}", config_path.display());
            Self::load_file(&config_path)?
        } else {
            Config::default()
        };

        EnvironmentConfig::apply_overrides(&mut config)?;
        Ok(config)
    }

    /// Load and parse a YAML configuration file.
    ///
    /// An empty file is treated as an empty configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        if contents.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_yaml::from_str(&contents).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: format!("Invalid YAML: {e}"),
        })
    }
}
