//! Flat key-value representation of a selection.
//!
//! The [`Representable`] trait maps an in-memory value to and from a plain
//! serde structure. [`SelectionRepresentation`] is the shape persisted in a
//! selection file:
//!
//! ```yaml
//! id: 9a4e0c42-...
//! description: a test selection
//! selected_paths:
//! - a.txt
//! - sub/b.txt
//! ```

use std::path::Path;

use serde::{de, Deserialize, Deserializer, Serialize};

use crate::error::Result;

/// Top-level keys every persisted selection must carry.
pub const REQUIRED_KEYS: [&str; 3] = ["id", "description", "selected_paths"];

/// A value that can be converted to and from a flat representation.
///
/// The representation itself does not carry the root directory; it is
/// supplied again when converting back.
pub trait Representable: Sized {
    /// The flat structure this value maps to.
    type Representation;

    /// Convert to the flat representation.
    fn to_representation(&self) -> Self::Representation;

    /// Rebuild a value from its flat representation, bound to `root`.
    ///
    /// # Errors
    ///
    /// Returns an error if the representation violates an invariant of the
    /// value, such as a path outside `root`.
    fn from_representation(repr: Self::Representation, root: &Path) -> Result<Self>;
}

/// Persisted form of a [`crate::Selection`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRepresentation {
    /// Unique selection id.
    #[serde(deserialize_with = "scalar_string")]
    pub id: String,

    /// Free-form description.
    #[serde(deserialize_with = "optional_string")]
    pub description: String,

    /// Paths relative to the root, with `/` separators.
    #[serde(deserialize_with = "non_empty_entries")]
    pub selected_paths: Vec<String>,
}

/// A YAML scalar that may have been written without quotes.
///
/// Floats are recognized only to be rejected: `1.10` would read back as `1.1`.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    String(String),
    Integer(i64),
    Bool(bool),
    Float(f64),
}

impl Scalar {
    fn into_string<E: de::Error>(self, key: &str) -> std::result::Result<String, E> {
        match self {
            Self::String(s) => Ok(s),
            Self::Integer(i) => Ok(i.to_string()),
            Self::Bool(b) => Ok(b.to_string()),
            Self::Float(f) => Err(E::custom(format!(
                "\"{key}\" must be text or a whole number, found {f}; quote the value"
            ))),
        }
    }
}

// Hand-edited files may carry an unquoted numeric id. A null id reads as
// empty, which gets a fresh id when the selection is built.
fn scalar_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Scalar>::deserialize(deserializer)?
        .map_or_else(|| Ok(String::new()), |scalar| scalar.into_string("id"))
}

// `description:` with nothing after it parses as null.
fn optional_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Scalar>::deserialize(deserializer)?
        .map_or_else(|| Ok(String::new()), |scalar| scalar.into_string("description"))
}

// A bare `-` or `- ""` entry is dropped instead of rejected.
fn non_empty_entries<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Option::<Vec<Option<Scalar>>>::deserialize(deserializer)?.unwrap_or_default();
    let mut paths = Vec::with_capacity(entries.len());
    for entry in entries.into_iter().flatten() {
        let path = entry.into_string("selected_paths")?;
        if !path.is_empty() {
            paths.push(path);
        }
    }
    Ok(paths)
}
