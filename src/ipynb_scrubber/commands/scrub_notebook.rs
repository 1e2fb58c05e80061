use crate::commands::{CmdMessage, CmdResult};
use crate::config::ScrubbingOptions;
use crate::error::Result;
use crate::model::Notebook;
use crate::process::process_notebook;
use crate::store::NotebookStore;
use std::path::Path;

/// Scrub one notebook given as JSON text.
///
/// The exercise notebook is returned in [`CmdResult::notebook`]; writing it is
/// up to the caller. Notes go to `notes_file` when given. Without one they are
/// dropped and a warning is added.
pub fn run<S: NotebookStore>(
    store: &mut S,
    input: &str,
    options: &ScrubbingOptions,
    notes_file: Option<&Path>,
) -> Result<CmdResult> {
    let notebook = Notebook::from_json_str(input)?;
    let outcome = process_notebook(notebook, options);

    let mut result = CmdResult::default();
    result.add_diagnostics(&outcome.diagnostics);

    if !outcome.notes.is_empty() {
        match notes_file {
            Some(path) => {
                store.write_notes(path, &outcome.notes)?;
                tracing::info!(
                    notes = outcome.notes.len(),
                    path = %path.display(),
                    "wrote notes file"
                );
            }
            None => {
                result.add_message(CmdMessage::warning(format!(
                    "Found {} cell(s) marked with note tag \"{}\", but no --notes-file specified. \
                     Notes will not be saved.",
                    outcome.notes.len(),
                    options.note_tag
                )));
            }
        }
    }

    Ok(result.with_notebook(outcome.notebook))
}
