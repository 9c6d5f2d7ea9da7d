//! Reading and writing the persisted selection format.
//!
//! These functions work on strings and streams. [`crate::SelectionStore`]
//! builds on them to bind a selection to a file on disk.
//!
//! Parsing happens in stages so that each kind of damage in a hand-edited
//! file is reported distinctly:
//!
//! 1. YAML syntax, reported with the line and column of the problem
//! 2. Presence of every required top-level key
//! 3. Value types (e.g. a scalar where a list of paths is expected)
//! 4. Containment of every path within the root

use std::io::{Read, Write};
use std::path::Path;

use serde_yaml::Value;

use crate::error::{Error, Result};
use crate::representation::{Representable, SelectionRepresentation, REQUIRED_KEYS};
use crate::selection::Selection;

/// Serialize a selection to its YAML text form.
///
/// # Errors
///
/// Returns an error if serialization fails.
///
/// # Examples
///
/// ```
/// use fileselection::{format, Selection};
///
/// let selection = Selection::builder("/data")
///     .id("abc")
///     .selected_paths(["a.txt"])
///     .build()
///     .unwrap();
/// let text = format::to_yaml_string(&selection).unwrap();
/// assert_eq!(text, "id: abc\ndescription: ''\nselected_paths:\n- a.txt\n");
/// ```
pub fn to_yaml_string(selection: &Selection) -> Result<String> {
    serde_yaml::to_string(&selection.to_representation()).map_err(|e| Error::Validation {
        field: "selection".to_string(),
        message: format!("could not serialize selection: {e}"),
    })
}

/// Write a selection to a stream.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn write_selection<W: Write>(selection: &Selection, mut writer: W) -> Result<()> {
    let text = to_yaml_string(selection)?;
    writer.write_all(text.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Parse a selection from YAML text.
///
/// `source_name` identifies the text in error messages, usually the data file
/// path. `root` is the directory the selected paths are relative to.
///
/// # Errors
///
/// Returns [`Error::SelectionLoad`] if the text is not valid YAML, lacks a
/// required key or holds a value of the wrong type, and
/// [`Error::NotRelativeToRoot`] if a listed path escapes `root`.
///
/// # Examples
///
/// ```
/// use fileselection::format::parse_selection;
/// use std::path::Path;
///
/// let text = "id: abc\ndescription: demo\nselected_paths:\n- a.txt\n-\n";
/// let selection = parse_selection(text, "demo.yaml", Path::new("/data")).unwrap();
/// assert_eq!(selection.len(), 1);
///
/// let missing = "id: abc\ndescription: demo\n";
/// let err = parse_selection(missing, "demo.yaml", Path::new("/data")).unwrap_err();
/// assert!(err.to_string().contains("selected_paths"));
/// ```
pub fn parse_selection(text: &str, source_name: &str, root: &Path) -> Result<Selection> {
    let document: Value = serde_yaml::from_str(text)
        .map_err(|e| Error::load(source_name, describe_yaml_error(&e)))?;

    let Value::Mapping(mapping) = &document else {
        return Err(Error::load(
            source_name,
            format!(
                "expected a mapping with keys {}, found {}",
                REQUIRED_KEYS.join(", "),
                value_kind(&document)
            ),
        ));
    };

    if let Some(missing) = REQUIRED_KEYS.iter().find(|key| !mapping.contains_key(**key)) {
        return Err(Error::load(
            source_name,
            format!("expected to find a line with \"{missing}:\" but there is none"),
        ));
    }

    let repr: SelectionRepresentation = serde_yaml::from_value(document)
        .map_err(|e| Error::load(source_name, format!("unexpected value: {e}")))?;

    let before = repr.selected_paths.len();
    let selection = Selection::from_representation(repr, root)?;
    if selection.len() < before {
        log::debug!(
            "{source_name}: {} duplicate entries collapsed",
            before - selection.len()
        );
    }
    Ok(selection)
}

/// Read a selection from a stream.
///
/// The selection is rooted at the parent directory of `data_file_path`,
/// which also names the source in error messages.
///
/// # Errors
///
/// Returns an error if the stream cannot be read or its contents cannot be
/// parsed (see [`parse_selection`]).
pub fn read_selection<R: Read>(mut reader: R, data_file_path: &Path) -> Result<Selection> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::InvalidData => Error::load(
                data_file_path.display().to_string(),
                "file is not valid UTF-8",
            ),
            _ => Error::from_io(e, data_file_path),
        })?;

    let root = data_file_path.parent().unwrap_or_else(|| Path::new(""));
    parse_selection(&text, &data_file_path.display().to_string(), root)
}

/// Render a YAML error with a 1-based line number when one is available.
fn describe_yaml_error(err: &serde_yaml::Error) -> String {
    match err.location() {
        Some(location) => format!(
            "format error near line {} column {}: {err}",
            location.line(),
            location.column()
        ),
        None => format!("format error: {err}"),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "an empty document",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
