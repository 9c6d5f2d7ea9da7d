#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # fileselection
//!
//! A library for persisting a selection of files inside a directory.
//!
//! A [`Selection`] is a set of paths, all relative to a root directory, with
//! a unique id and a free-form description. A [`SelectionStore`] saves one
//! selection per directory in a hidden data file, [`DATA_FILE_NAME`], that
//! stays readable and editable by hand.
//!
//! ## Core Types
//!
//! - [`Selection`] and [`SelectionBuilder`]: The in-memory selection
//! - [`SelectionStore`]: Loading and saving a directory's selection
//! - [`Representable`] and [`SelectionRepresentation`]: The persisted shape
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use fileselection::Selection;
//!
//! let mut selection = Selection::builder("/data")
//!     .description("files to upload")
//!     .build()
//!     .unwrap();
//!
//! selection.add(["a.txt", "/data/sub/b.txt"]).unwrap();
//! assert!(selection.contains("sub/b.txt"));
//!
//! // Paths outside the root are rejected, not dropped
//! assert!(selection.add(["/etc/passwd"]).is_err());
//! assert_eq!(selection.len(), 2);
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod output;
pub mod path;
pub mod representation;
pub mod selection;
pub mod store;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigLoader};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use output::{format_listing, OutputFormat};
pub use path::PathRelationship;
pub use representation::{Representable, SelectionRepresentation};
pub use selection::{Selection, SelectionBuilder};
pub use store::{SelectionStore, DATA_FILE_NAME};
