//! Output formatting for selection listings.
//!
//! A listing is either plain text, one path per line, or a JSON document
//! carrying the selection metadata alongside the paths.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::path::to_slash_string;
use crate::selection::Selection;

/// Available output formats for listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One path per line.
    #[default]
    Text,
    /// A JSON object with id, description, root and paths.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(Error::Validation {
                field: "output_format".into(),
                message: format!("Invalid output format: '{s}' (expected text or json)"),
            }),
        }
    }
}

#[derive(Serialize)]
struct JsonListing<'a> {
    id: &'a str,
    description: &'a str,
    root_path: String,
    selected_paths: Vec<String>,
}

/// Render the paths of `selection` in the given format.
///
/// With `absolute` set, paths are joined onto the root; otherwise they are
/// relative with `/` separators.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
///
/// # Examples
///
/// ```
/// use fileselection::output::{format_listing, OutputFormat};
/// use fileselection::Selection;
///
/// let selection = Selection::builder("/data")
///     .selected_paths(["b.txt", "a.txt"])
///     .build()
///     .unwrap();
/// let text = format_listing(&selection, OutputFormat::Text, false).unwrap();
/// assert_eq!(text, "a.txt\nb.txt\n");
/// ```
pub fn format_listing(selection: &Selection, format: OutputFormat, absolute: bool) -> Result<String> {
    let paths: Vec<String> = if absolute {
        selection
            .selected_paths_absolute()
            .iter()
            .map(|path| path.display().to_string())
            .collect()
    } else {
        selection
            .selected_paths()
            .iter()
            .map(|path| to_slash_string(path))
            .collect()
    };

    match format {
        OutputFormat::Text => Ok(paths.iter().map(|path| format!("{path}\n")).collect()),
        OutputFormat::Json => {
            let listing = JsonListing {
                id: selection.id(),
                description: selection.description(),
                root_path: selection.root_path().display().to_string(),
                selected_paths: paths,
            };
            let mut json = serde_json::to_string_pretty(&listing).map_err(|e| Error::Validation {
                field: "output".into(),
                message: format!("could not render JSON: {e}"),
            })?;
            json.push('\n');
            Ok(json)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection() -> Selection {
        Selection::builder("/data")
            .id("abc")
            .description("demo")
            .selected_paths(["sub/b.txt", "a.txt"])
            .build()
            .unwrap()
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Text.to_string(), "text");
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_text_listing_relative() {
        let text = format_listing(&selection(), OutputFormat::Text, false).unwrap();
        assert_eq!(text, "a.txt\nsub/b.txt\n");
    }

    #[test]
    #[cfg(unix)]
    fn test_text_listing_absolute() {
        let text = format_listing(&selection(), OutputFormat::Text, true).unwrap();
        assert_eq!(text, "/data/a.txt\n/data/sub/b.txt\n");
    }

    #[test]
    fn test_empty_text_listing() {
        let empty = Selection::new("/data").unwrap();
        assert_eq!(format_listing(&empty, OutputFormat::Text, false).unwrap(), "");
    }

    #[test]
    fn test_json_listing() {
        let json = format_listing(&selection(), OutputFormat::Json, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["id"], "abc");
        assert_eq!(value["description"], "demo");
        assert_eq!(value["selected_paths"][0], "a.txt");
        assert_eq!(value["selected_paths"][1], "sub/b.txt");
    }
}
