//! Environment variable handling for configuration overrides.
//!
//! `FILESELECTION_*` variables override values from the configuration file.

use std::env;

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Environment variable overriding [`Config::output_format`].
pub const OUTPUT_FORMAT_ENV: &str = "FILESELECTION_OUTPUT_FORMAT";

/// Environment variable overriding [`Config::absolute_paths`].
pub const ABSOLUTE_PATHS_ENV: &str = "FILESELECTION_ABSOLUTE_PATHS";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use fileselection::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(format) = env::var(OUTPUT_FORMAT_ENV) {
            config.output_format = Some(format.parse().map_err(|_| Error::Validation {
                field: OUTPUT_FORMAT_ENV.into(),
                message: format!("Invalid output format: '{format}' (expected text or json)"),
            })?);
        }

        if let Ok(val) = env::var(ABSOLUTE_PATHS_ENV) {
            config.absolute_paths = Some(Self::parse_bool(ABSOLUTE_PATHS_ENV, &val)?);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
