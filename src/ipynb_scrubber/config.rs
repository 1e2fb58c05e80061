//! # Configuration
//!
//! Two layers feed the scrubber:
//!
//! 1. [`ScrubbingOptions`]: the tag names and default replacement text used
//!    for one notebook. The CLI builds it from flags for `scrub-notebook`.
//! 2. [`ProjectConfig`]: a TOML project file for `scrub-project`, listing
//!    notebooks to process with optional per-file overrides.
//!
//! ## Project File
//!
//! Either a standalone `.ipynb-scrubber.toml`, or a `pyproject.toml` carrying a
//! `[tool.ipynb-scrubber]` table:
//!
//! ```toml
//! [options]
//! clear-text = "# YOUR CODE HERE"
//!
//! [[files]]
//! input = "lectures/lesson1.ipynb"
//! output = "exercises/lesson1.ipynb"
//! notes-file = "notes/lesson1.md"
//! omit-tag = "instructor-only"
//! ```
//!
//! Per-file keys override `[options]` only when present and non-empty.
//!
//! Relative `input`, `output` and `notes-file` paths resolve against the
//! directory holding the config file, not the working directory. A project
//! discovered from a subdirectory therefore reads and writes the same files
//! as one run from the project root.
//!
//! ## Discovery
//!
//! [`find_config_file`] walks from a start directory up to the filesystem root.
//! In each directory a standalone file wins over `pyproject.toml`, and a
//! `pyproject.toml` only counts if it parses and has the tool table.

use crate::error::{Result, ScrubberError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CLEAR_TAG: &str = "scrub-clear";
pub const DEFAULT_CLEAR_TEXT: &str = "# TODO: Implement this";
pub const DEFAULT_OMIT_TAG: &str = "scrub-omit";
pub const DEFAULT_NOTE_TAG: &str = "scrub-note";

pub const STANDALONE_CONFIG: &str = ".ipynb-scrubber.toml";
pub const PYPROJECT: &str = "pyproject.toml";
const TOOL_SECTION: &str = "ipynb-scrubber";

/// Tag names and default replacement text for one notebook.
///
/// Tag names double as inline directive names (`#| scrub-clear`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ScrubbingOptions {
    pub clear_tag: String,
    pub clear_text: String,
    pub omit_tag: String,
    pub note_tag: String,
}

impl Default for ScrubbingOptions {
    fn default() -> Self {
        Self {
            clear_tag: DEFAULT_CLEAR_TAG.to_string(),
            clear_text: DEFAULT_CLEAR_TEXT.to_string(),
            omit_tag: DEFAULT_OMIT_TAG.to_string(),
            note_tag: DEFAULT_NOTE_TAG.to_string(),
        }
    }
}

/// Per-file option overrides. `None` and empty strings defer to the global value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OptionOverrides {
    pub clear_tag: Option<String>,
    pub clear_text: Option<String>,
    pub omit_tag: Option<String>,
    pub note_tag: Option<String>,
}

impl OptionOverrides {
    pub fn apply(&self, base: &ScrubbingOptions) -> ScrubbingOptions {
        ScrubbingOptions {
            clear_tag: pick(&self.clear_tag, &base.clear_tag),
            clear_text: pick(&self.clear_text, &base.clear_text),
            omit_tag: pick(&self.omit_tag, &base.omit_tag),
            note_tag: pick(&self.note_tag, &base.note_tag),
        }
    }
}

fn pick(value: &Option<String>, fallback: &str) -> String {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

/// One notebook to scrub in a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub input: PathBuf,
    pub output: PathBuf,
    pub notes_file: Option<PathBuf>,
    pub overrides: OptionOverrides,
}

impl FileEntry {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            notes_file: None,
            overrides: OptionOverrides::default(),
        }
    }

    pub fn with_notes_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.notes_file = Some(path.into());
        self
    }

    pub fn with_overrides(mut self, overrides: OptionOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Options for this file: per-file overrides layered on the global ones.
    pub fn options(&self, global: &ScrubbingOptions) -> ScrubbingOptions {
        self.overrides.apply(global)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct RawFileEntry {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    notes_file: Option<PathBuf>,
    #[serde(flatten)]
    overrides: OptionOverrides,
}

impl RawFileEntry {
    fn resolve(self, base_dir: &Path) -> Result<FileEntry> {
        let input = self.input.ok_or_else(|| missing_field("input"))?;
        let output = self.output.ok_or_else(|| missing_field("output"))?;
        Ok(FileEntry {
            input: base_dir.join(input),
            output: base_dir.join(output),
            notes_file: self.notes_file.map(|p| base_dir.join(p)),
            overrides: self.overrides,
        })
    }
}

fn missing_field(name: &str) -> ScrubberError {
    ScrubberError::Config(format!("File entry missing required field: {}", name))
}

#[derive(Debug, Default, Deserialize)]
struct RawProjectConfig {
    #[serde(default)]
    options: ScrubbingOptions,
    #[serde(default)]
    files: Vec<RawFileEntry>,
}

/// A project: global options plus the notebooks to process, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    pub options: ScrubbingOptions,
    pub files: Vec<FileEntry>,
}

impl ProjectConfig {
    /// Load a project file. `pyproject.toml` files are read from their
    /// `[tool.ipynb-scrubber]` table.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ScrubberError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let text = fs::read_to_string(path)
            .map_err(|e| ScrubberError::Config(format!("Error reading config file: {}", e)))?;
        let table = parse_table(&text)?;

        let is_pyproject = path.file_name().is_some_and(|name| name == PYPROJECT);
        let section = if is_pyproject {
            tool_section(&table).cloned().ok_or_else(|| {
                ScrubberError::Config(format!(
                    "{} does not contain [tool.{}] section",
                    path.display(),
                    TOOL_SECTION
                ))
            })?
        } else {
            toml::Value::Table(table)
        };

        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
        Self::from_toml(section, base_dir)
    }

    /// Parse standalone project TOML text, resolving paths against `base_dir`.
    pub fn from_toml_str(text: &str, base_dir: &Path) -> Result<Self> {
        let table = parse_table(text)?;
        Self::from_toml(toml::Value::Table(table), base_dir)
    }

    fn from_toml(value: toml::Value, base_dir: &Path) -> Result<Self> {
        let raw: RawProjectConfig = value
            .try_into()
            .map_err(|e| ScrubberError::Config(format!("Invalid config file: {}", e)))?;

        if raw.files.is_empty() {
            return Err(ScrubberError::Config(
                "Config file must contain at least one file entry".to_string(),
            ));
        }

        let files = raw
            .files
            .into_iter()
            .map(|entry| entry.resolve(base_dir))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            options: raw.options,
            files,
        })
    }

    /// Find and load the nearest project file at or above `start_dir`.
    pub fn discover(start_dir: &Path) -> Result<Self> {
        let path = find_config_file(start_dir).ok_or_else(|| {
            ScrubberError::Config(format!(
                "No config file found. Expected {} or {} with [tool.{}] section",
                STANDALONE_CONFIG, PYPROJECT, TOOL_SECTION
            ))
        })?;
        tracing::debug!(path = %path.display(), "discovered project config");
        Self::from_file(&path)
    }
}

fn parse_table(text: &str) -> Result<toml::Table> {
    text.parse::<toml::Table>()
        .map_err(|e| ScrubberError::Config(format!("Invalid TOML in config file: {}", e)))
}

fn tool_section(table: &toml::Table) -> Option<&toml::Value> {
    table.get("tool")?.get(TOOL_SECTION)
}

fn pyproject_has_section(path: &Path) -> bool {
    fs::read_to_string(path)
        .ok()
        .and_then(|text| text.parse::<toml::Table>().ok())
        .is_some_and(|table| tool_section(&table).is_some())
}

/// Walk upward from `start_dir` looking for a project file.
/// Returns None once the filesystem root has been checked.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir
        .canonicalize()
        .unwrap_or_else(|_| start_dir.to_path_buf());

    loop {
        let standalone = current.join(STANDALONE_CONFIG);
        if standalone.is_file() {
            return Some(standalone);
        }

        let pyproject = current.join(PYPROJECT);
        if pyproject.is_file() && pyproject_has_section(&pyproject) {
            return Some(pyproject);
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => return None,
        }
    }
}
