//! # Notes
//!
//! Cells marked `#| scrub-note: <id>` keep their original content here while
//! the exercise notebook gets a placeholder pointing at `<id>`. The collection
//! renders to a Markdown reference file, one fenced block per note, in the
//! order identifiers were first seen.

use crate::error::{Result, ScrubberError};
use crate::model::CellKind;
use indexmap::IndexMap;
use std::fs;
use std::path::Path;

const HEADER: &str = "# Notebook Notes\n\n\
This file contains the original content of cells marked for note-taking.\n\n";
const FOOTER: &str = "---\n*Generated by ipynb-scrubber*\n";

/// Original content of a noted cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteEntry {
    pub kind: CellKind,
    pub content: String,
}

/// Note identifier → original content. Re-inserting an identifier replaces
/// its content but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notes {
    entries: IndexMap<String, NoteEntry>,
}

impl Notes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a note. Returns the entry it replaced, if the id was already taken.
    pub fn insert(
        &mut self,
        id: impl Into<String>,
        kind: CellKind,
        content: impl Into<String>,
    ) -> Option<NoteEntry> {
        self.entries.insert(
            id.into(),
            NoteEntry {
                kind,
                content: content.into(),
            },
        )
    }

    pub fn get(&self, id: &str) -> Option<&NoteEntry> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &NoteEntry)> {
        self.entries.iter().map(|(id, entry)| (id.as_str(), entry))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

fn fence_for(kind: CellKind) -> &'static str {
    match kind {
        CellKind::Code => "```python\n",
        CellKind::Markdown => "```markdown\n",
        CellKind::Raw => "```\n",
    }
}

/// Render the notes as a Markdown document.
pub fn render(notes: &Notes) -> String {
    let mut output = String::from(HEADER);

    for (id, entry) in notes.iter() {
        output.push_str(&format!("## {}\n\n", id));
        output.push_str(fence_for(entry.kind));
        output.push_str(&entry.content);
        if !entry.content.ends_with('\n') {
            output.push('\n');
        }
        output.push_str("```\n\n");
    }

    output.push_str(FOOTER);
    output
}

/// Render `notes` and write them to `path`, creating parent directories.
pub fn write_notes(notes: &Notes, path: &Path) -> Result<()> {
    let rendered = render(notes);
    write_rendered(&rendered, path)
        .map_err(|e| ScrubberError::Processing(format!("Error writing notes file: {}", e)))
}

fn write_rendered(rendered: &str, path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, rendered)
}
