//! # Notebook Model
//!
//! Notebooks arrive as loosely shaped JSON. [`Notebook::from_value`] is the one
//! place where that shape is checked: once a [`Notebook`] exists, every cell has
//! a known [`CellKind`] and a single normalized `source` string, so nothing
//! downstream re-validates.
//!
//! Fields the scrubber does not interpret (`nbformat`, cell `id`, `attachments`,
//! ...) are carried through untouched, and every object is written back with
//! its input key order.

use crate::error::{Result, ScrubberError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellKind {
    Code,
    Markdown,
    Raw,
}

impl CellKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CellKind::Code => "code",
            CellKind::Markdown => "markdown",
            CellKind::Raw => "raw",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "code" => Some(CellKind::Code),
            "markdown" => Some(CellKind::Markdown),
            "raw" => Some(CellKind::Raw),
            _ => None,
        }
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const CELL_TYPE: &str = "cell_type";
const CELLS: &str = "cells";
const METADATA: &str = "metadata";
const SOURCE: &str = "source";
const EXECUTION_COUNT: &str = "execution_count";
const OUTPUTS: &str = "outputs";

/// One notebook cell.
///
/// The typed fields are views over an ordered field map. Keys the scrubber
/// does not interpret stay in that map, and typed fields are written back
/// into the slots they were read from, so a cell serializes with its input
/// key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Cell {
    pub kind: CellKind,
    pub metadata: Map<String, Value>,
    /// Cell content. Fragment lists are joined on ingestion and always
    /// written back as one string.
    pub source: String,
    pub execution_count: Option<Value>,
    pub outputs: Option<Value>,
    fields: Map<String, Value>,
}

/// Take the value out of `key`, leaving a null placeholder that holds its position.
fn take_slot(fields: &mut Map<String, Value>, key: &str) -> Option<Value> {
    fields.get_mut(key).map(Value::take)
}

fn put_slot(fields: &mut Map<String, Value>, key: &str, value: Option<Value>) {
    match value {
        Some(value) => {
            fields.insert(key.to_string(), value);
        }
        None => {
            fields.shift_remove(key);
        }
    }
}

fn take_metadata(
    fields: &mut Map<String, Value>,
) -> std::result::Result<Map<String, Value>, String> {
    match take_slot(fields, METADATA) {
        None | Some(Value::Null) => Ok(Map::new()),
        Some(Value::Object(metadata)) => Ok(metadata),
        Some(other) => Err(format!("metadata must be an object, found {}", other)),
    }
}

fn join_source(value: Option<Value>) -> std::result::Result<String, String> {
    match value {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(text)) => Ok(text),
        Some(Value::Array(fragments)) => fragments
            .into_iter()
            .map(|fragment| match fragment {
                Value::String(text) => Ok(text),
                other => Err(format!("source fragment must be a string, found {}", other)),
            })
            .collect(),
        Some(other) => Err(format!(
            "source must be a string or a list of strings, found {}",
            other
        )),
    }
}

impl TryFrom<Map<String, Value>> for Cell {
    type Error = String;

    fn try_from(mut fields: Map<String, Value>) -> std::result::Result<Self, Self::Error> {
        let kind = match fields.get(CELL_TYPE) {
            Some(Value::String(name)) => CellKind::parse(name)
                .ok_or_else(|| format!("unknown cell_type '{}'", name))?,
            _ => return Err("cell_type must be a string".to_string()),
        };
        let metadata = take_metadata(&mut fields)?;
        let source = join_source(take_slot(&mut fields, SOURCE))?;
        let execution_count = take_slot(&mut fields, EXECUTION_COUNT).filter(|v| !v.is_null());
        let outputs = take_slot(&mut fields, OUTPUTS).filter(|v| !v.is_null());

        Ok(Self {
            kind,
            metadata,
            source,
            execution_count,
            outputs,
            fields,
        })
    }
}

impl From<Cell> for Map<String, Value> {
    fn from(cell: Cell) -> Self {
        let mut fields = cell.fields;
        fields.insert(
            CELL_TYPE.to_string(),
            Value::String(cell.kind.as_str().to_string()),
        );
        fields.insert(METADATA.to_string(), Value::Object(cell.metadata));
        fields.insert(SOURCE.to_string(), Value::String(cell.source));
        put_slot(&mut fields, EXECUTION_COUNT, cell.execution_count);
        put_slot(&mut fields, OUTPUTS, cell.outputs);
        fields
    }
}

impl Cell {
    pub fn new(kind: CellKind, source: impl Into<String>) -> Self {
        Self {
            kind,
            metadata: Map::new(),
            source: source.into(),
            execution_count: None,
            outputs: None,
            fields: Map::new(),
        }
    }

    /// A field the scrubber does not interpret, such as the cell `id`.
    pub fn field(&self, key: &str) -> Option<&Value> {
        match key {
            CELL_TYPE | METADATA | SOURCE | EXECUTION_COUNT | OUTPUTS => None,
            _ => self.fields.get(key),
        }
    }

    pub fn code(source: impl Into<String>) -> Self {
        Self::new(CellKind::Code, source)
    }

    pub fn markdown(source: impl Into<String>) -> Self {
        Self::new(CellKind::Markdown, source)
    }

    pub fn raw(source: impl Into<String>) -> Self {
        Self::new(CellKind::Raw, source)
    }

    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let tags = tags
            .into_iter()
            .map(|t| Value::String(t.into()))
            .collect();
        self.metadata.insert("tags".to_string(), Value::Array(tags));
        self
    }

    /// Structural tags from `metadata.tags`. Anything that is not an array of
    /// strings contributes no tags.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.metadata
            .get("tags")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(Value::as_str)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags().any(|t| t == tag)
    }

    pub fn has_execution_state(&self) -> bool {
        self.execution_count.is_some() || self.outputs.is_some()
    }

    pub fn strip_execution_state(&mut self) {
        self.execution_count = None;
        self.outputs = None;
    }
}

/// A whole notebook. Like [`Cell`], it keeps its top-level key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Notebook {
    pub cells: Vec<Cell>,
    pub metadata: Map<String, Value>,
    fields: Map<String, Value>,
}

impl TryFrom<Map<String, Value>> for Notebook {
    type Error = String;

    fn try_from(mut fields: Map<String, Value>) -> std::result::Result<Self, Self::Error> {
        let cells = match take_slot(&mut fields, CELLS) {
            Some(cells) => serde_json::from_value(cells).map_err(|e| e.to_string())?,
            None => return Err("missing cells".to_string()),
        };
        let metadata = take_metadata(&mut fields)?;
        Ok(Self {
            cells,
            metadata,
            fields,
        })
    }
}

impl From<Notebook> for Map<String, Value> {
    fn from(notebook: Notebook) -> Self {
        let mut fields = notebook.fields;
        let cells = notebook
            .cells
            .into_iter()
            .map(|cell| Value::Object(cell.into()))
            .collect();
        fields.insert(CELLS.to_string(), Value::Array(cells));
        fields.insert(METADATA.to_string(), Value::Object(notebook.metadata));
        fields
    }
}

impl Notebook {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self {
            cells,
            metadata: Map::new(),
            fields: Map::new(),
        }
    }

    /// A top-level field the scrubber does not interpret, such as `nbformat`.
    pub fn field(&self, key: &str) -> Option<&Value> {
        match key {
            CELLS | METADATA => None,
            _ => self.fields.get(key),
        }
    }

    /// Parse notebook JSON text, validating its shape.
    pub fn from_json_str(input: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(input).map_err(ScrubberError::InvalidJson)?;
        Self::from_value(value)
    }

    /// Check the structural shape of a JSON tree and convert it.
    ///
    /// Fails before anything is converted if `cells` is missing or not a list,
    /// or if any cell is not an object with a `cell_type` of `code`,
    /// `markdown` or `raw`.
    pub fn from_value(value: Value) -> Result<Self> {
        validate_shape(&value)?;
        serde_json::from_value(value)
            .map_err(|e| ScrubberError::InvalidNotebook(format!("Malformed notebook: {}", e)))
    }

    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Serialize with `indent` spaces per nesting level.
    ///
    /// Non-ASCII text is written as UTF-8, not as `\uXXXX` escapes, so
    /// accented and non-Latin cell content stays readable in diffs.
    pub fn write_json<W: Write>(&self, writer: W, indent: usize) -> Result<()> {
        let indent = vec![b' '; indent];
        let formatter = serde_json::ser::PrettyFormatter::with_indent(&indent);
        let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
        self.serialize(&mut serializer)?;
        Ok(())
    }

    pub fn to_json_string(&self, indent: usize) -> Result<String> {
        let mut buf = Vec::new();
        self.write_json(&mut buf, indent)?;
        String::from_utf8(buf).map_err(|e| ScrubberError::Processing(e.to_string()))
    }
}

fn validate_shape(value: &Value) -> Result<()> {
    let obj = value
        .as_object()
        .ok_or_else(|| invalid("Input is not a valid JSON object".to_string()))?;

    let cells = obj
        .get("cells")
        .ok_or_else(|| invalid("Notebook is missing required 'cells' field".to_string()))?;

    let cells = cells
        .as_array()
        .ok_or_else(|| invalid("Notebook 'cells' field must be a list".to_string()))?;

    for (i, cell) in cells.iter().enumerate() {
        let cell = cell
            .as_object()
            .ok_or_else(|| invalid(format!("Cell {} is not a valid object", i)))?;

        let cell_type = cell.get("cell_type").ok_or_else(|| {
            invalid(format!("Cell {} is missing required 'cell_type' field", i))
        })?;

        if cell_type.as_str().and_then(CellKind::parse).is_none() {
            let shown = match cell_type {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            return Err(invalid(format!(
                "Cell {} has invalid cell_type '{}'. Must be 'code', 'markdown', or 'raw'",
                i, shown
            )));
        }
    }

    Ok(())
}

fn invalid(message: String) -> ScrubberError {
    ScrubberError::InvalidNotebook(message)
}
