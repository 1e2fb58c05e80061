//! Produces the exercise version of a single cell once it has been classified.

use crate::classify::{ClearRequest, NoteRequest};
use crate::config::ScrubbingOptions;
use crate::model::Cell;

/// What to do with a kept cell's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellAction {
    Keep,
    Clear(ClearRequest),
    Note(NoteRequest),
}

/// Strip execution state and substitute content according to `action`.
///
/// Replacement text always gets a trailing newline appended, even when it
/// already ends in one.
pub fn scrub_cell(mut cell: Cell, options: &ScrubbingOptions, action: &CellAction) -> Cell {
    cell.strip_execution_state();

    match action {
        CellAction::Keep => {}
        CellAction::Clear(request) => {
            let text = request.text.as_deref().unwrap_or(&options.clear_text);
            cell.source = format!("{}\n", text);
        }
        CellAction::Note(request) => {
            let text = request.replacement.as_deref().unwrap_or(&options.clear_text);
            cell.source = format!("{}\n# (See notes: {})\n", text, request.id);
        }
    }

    cell
}
