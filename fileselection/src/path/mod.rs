//! Path normalization and containment for selections.
//!
//! # Key Concepts
//!
//! ## Normalization
//!
//! The selection root is normalized to an absolute path by:
//! - Expanding tilde (~) to the home directory
//! - Converting relative paths to absolute paths
//! - Resolving `.` and `..` components
//!
//! ## Containment
//!
//! Selected paths are stored relative to the root. An absolute input is
//! re-expressed relative to the root; a relative input is assumed to be
//! relative to the root already. Either way the result must stay strictly
//! beneath the root, otherwise [`crate::Error::NotRelativeToRoot`] is
//! returned.
//!
//! Both steps are purely lexical. Symlinks are not followed.
//!
//! # Examples
//!
//! ```
//! use fileselection::path::{make_relative, PathRelationship};
//! use std::path::{Path, PathBuf};
//!
//! let root = Path::new("/data");
//! let rel = make_relative(root, Path::new("/data/sub/b.txt")).unwrap();
//! assert_eq!(rel, PathBuf::from("sub/b.txt"));
//!
//! assert_eq!(
//!     PathRelationship::between(root, Path::new("/data/sub")),
//!     PathRelationship::Ancestor
//! );
//! ```

pub mod containment;
pub mod normalize;
pub mod relationship;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use containment::{make_relative, to_slash_string};
pub use relationship::PathRelationship;
