//! # Notebook Processing
//!
//! One pass over the cells, in order:
//!
//! ```text
//! omit?  ──yes──▶ drop (nothing captured)
//!   │no
//! note?  ──yes──▶ capture original content into Notes, replace with reference
//!   │no
//! clear? ──yes──▶ replace with clear text
//!   │no
//! keep
//! ```
//!
//! Every kept cell loses its execution state. The result carries the exercise
//! notebook, the notes collection and a list of [`Diagnostic`]s; nothing here
//! prints or warns on its own.

use crate::classify::{clear_decision, note_decision, should_omit, NoteDecision};
use crate::config::ScrubbingOptions;
use crate::error::Result;
use crate::model::{Cell, Notebook};
use crate::notes::Notes;
use crate::transform::{scrub_cell, CellAction};
use serde_json::Value;
use std::fmt;

pub const EXERCISE_MARKER: &str = "exercise_version";

/// A non-fatal observation made while processing one cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Index of the cell in the input notebook.
    pub cell: usize,
    pub kind: DiagnosticKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A later cell reused a note id and replaced the earlier note.
    DuplicateNoteId(String),
    /// A note directive without an identifier; the cell was not noted.
    NoteWithoutId,
    /// A cell was both omitted and noted; omission won and no note was kept.
    NoteDroppedByOmit(String),
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DiagnosticKind::DuplicateNoteId(id) => write!(
                f,
                "Cell {}: note id \"{}\" was already used; the earlier note was replaced",
                self.cell, id
            ),
            DiagnosticKind::NoteWithoutId => write!(
                f,
                "Cell {}: note directive has no identifier; cell was not noted",
                self.cell
            ),
            DiagnosticKind::NoteDroppedByOmit(id) => write!(
                f,
                "Cell {}: cell is omitted, so note \"{}\" was not saved",
                self.cell, id
            ),
        }
    }
}

/// Everything one processing pass produces.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrubOutcome {
    pub notebook: Notebook,
    pub notes: Notes,
    pub diagnostics: Vec<Diagnostic>,
}

fn clear_or_keep(cell: &Cell, options: &ScrubbingOptions, index: usize) -> CellAction {
    match clear_decision(cell, &options.clear_tag) {
        Some(request) => {
            tracing::debug!(cell = index, kind = %cell.kind, "clearing cell");
            CellAction::Clear(request)
        }
        None => CellAction::Keep,
    }
}

/// Validate a JSON notebook tree, then scrub it.
pub fn process_value(value: Value, options: &ScrubbingOptions) -> Result<ScrubOutcome> {
    let notebook = Notebook::from_value(value)?;
    Ok(process_notebook(notebook, options))
}

/// Scrub an already validated notebook.
pub fn process_notebook(mut notebook: Notebook, options: &ScrubbingOptions) -> ScrubOutcome {
    let cells = std::mem::take(&mut notebook.cells);

    let mut notes = Notes::new();
    let mut diagnostics = Vec::new();
    let mut kept = Vec::with_capacity(cells.len());

    for (index, cell) in cells.into_iter().enumerate() {
        let note = note_decision(&cell, &options.note_tag);

        if should_omit(&cell, &options.omit_tag) {
            tracing::debug!(cell = index, kind = %cell.kind, "omitting cell");
            if let NoteDecision::Note(request) = note {
                diagnostics.push(Diagnostic {
                    cell: index,
                    kind: DiagnosticKind::NoteDroppedByOmit(request.id),
                });
            }
            continue;
        }

        let action = match note {
            NoteDecision::Note(request) => {
                tracing::debug!(cell = index, id = %request.id, "noting cell");
                if notes
                    .insert(request.id.clone(), cell.kind, cell.source.clone())
                    .is_some()
                {
                    diagnostics.push(Diagnostic {
                        cell: index,
                        kind: DiagnosticKind::DuplicateNoteId(request.id.clone()),
                    });
                }
                CellAction::Note(request)
            }
            NoteDecision::MissingId => {
                diagnostics.push(Diagnostic {
                    cell: index,
                    kind: DiagnosticKind::NoteWithoutId,
                });
                clear_or_keep(&cell, options, index)
            }
            NoteDecision::None => clear_or_keep(&cell, options, index),
        };

        kept.push(scrub_cell(cell, options, &action));
    }

    for diagnostic in &diagnostics {
        tracing::debug!(%diagnostic, "scrub diagnostic");
    }

    notebook.cells = kept;
    notebook
        .metadata
        .insert(EXERCISE_MARKER.to_string(), Value::Bool(true));

    ScrubOutcome {
        notebook,
        notes,
        diagnostics,
    }
}
