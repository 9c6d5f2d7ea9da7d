//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;

/// User configuration.
///
/// Every field is optional so that a partial file only overrides what it
/// names.
///
/// # Examples
///
/// ```
/// use fileselection::config::Config;
/// use fileselection::output::OutputFormat;
///
/// let config: Config = serde_yaml::from_str("output_format: json\n").unwrap();
/// assert_eq!(config.output_format(), OutputFormat::Json);
/// assert!(!config.absolute_paths());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Default output format for `list`.
    pub output_format: Option<OutputFormat>,

    /// Print absolute paths in listings by default.
    pub absolute_paths: Option<bool>,
}

impl Config {
    /// The effective output format.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }

    /// Whether listings print absolute paths.
    #[must_use]
    pub fn absolute_paths(&self) -> bool {
        self.absolute_paths.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.output_format(), OutputFormat::Text);
        assert!(!config.absolute_paths());
    }

    #[test]
    fn test_parse_full() {
        let config: Config =
            serde_yaml::from_str("output_format: json\nabsolute_paths: true\n").unwrap();
        assert_eq!(config.output_format, Some(OutputFormat::Json));
        assert_eq!(config.absolute_paths, Some(true));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<Config, _> = serde_yaml::from_str("colour: blue\n");
        assert!(result.is_err());
    }
}
