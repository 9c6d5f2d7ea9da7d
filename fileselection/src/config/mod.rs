//! User configuration.
//!
//! Configuration comes from an optional YAML file and `FILESELECTION_*`
//! environment variables, the latter taking precedence:
//!
//! 1. Environment variables (`FILESELECTION_OUTPUT_FORMAT`,
//!    `FILESELECTION_ABSOLUTE_PATHS`)
//! 2. `config.yaml` in the configuration directory (`~/.fileselection` by
//!    default, or `FILESELECTION_CONFIG_DIR`)
//! 3. Built-in defaults
//!
//! The configuration only affects presentation. Selection files are never
//! influenced by it.
//!
//! # Examples
//!
//! ```
//! use fileselection::config::Config;
//! use fileselection::output::OutputFormat;
//!
//! let config = Config {
//!     output_format: Some(OutputFormat::Json),
//!     ..Default::default()
//! };
//! assert_eq!(config.output_format(), OutputFormat::Json);
//! ```

pub mod environment;
pub mod loader;
pub mod schema;

pub use environment::EnvironmentConfig;
pub use loader::{default_config_dir, ConfigLoader, CONFIG_DIR_ENV, CONFIG_FILE_NAME};
pub use schema::Config;
