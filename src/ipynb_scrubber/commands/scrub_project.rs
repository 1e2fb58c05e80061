use crate::commands::{CmdMessage, CmdResult, ProcessedFile};
use crate::config::{FileEntry, ProjectConfig};
use crate::error::{Result, ScrubberError};
use crate::process::process_notebook;
use crate::store::NotebookStore;

/// Process every file of a project, in order.
///
/// The first entry that fails stops the run: its error is recorded as an
/// error message and in [`CmdResult::failed_input`], and later entries are
/// not touched. Files written before the failure stay written.
pub fn run<S: NotebookStore>(
    store: &mut S,
    config: &ProjectConfig,
    indent: usize,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for entry in &config.files {
        match process_entry(store, config, entry, indent, &mut result) {
            Ok(processed) => {
                tracing::info!(
                    input = %processed.input.display(),
                    output = %processed.output.display(),
                    notes = processed.notes,
                    notes_file = ?processed.notes_file,
                    "processed notebook"
                );
                result.add_message(CmdMessage::success(format!(
                    "Processed: {} → {}",
                    processed.input.display(),
                    processed.output.display()
                )));
                result.processed.push(processed);
            }
            Err(e) => {
                tracing::warn!(input = %entry.input.display(), error = %e, "project run stopped");
                result.add_message(CmdMessage::error(format!(
                    "Error processing {}: {}",
                    entry.input.display(),
                    e
                )));
                result.failed_input = Some(entry.input.clone());
                break;
            }
        }
    }

    Ok(result)
}

fn process_entry<S: NotebookStore>(
    store: &mut S,
    config: &ProjectConfig,
    entry: &FileEntry,
    indent: usize,
    result: &mut CmdResult,
) -> Result<ProcessedFile> {
    if !store.exists(&entry.input) {
        return Err(ScrubberError::InputNotFound(entry.input.clone()));
    }

    let options = entry.options(&config.options);
    let notebook = store.read_notebook(&entry.input)?;
    let outcome = process_notebook(notebook, &options);
    result.add_diagnostics(&outcome.diagnostics);

    // Notes are resolved before the output is written so a misconfigured
    // entry leaves no partial output behind.
    if !outcome.notes.is_empty() {
        let notes_file = entry
            .notes_file
            .as_deref()
            .ok_or_else(|| ScrubberError::MissingNotesFile {
                count: outcome.notes.len(),
                tag: options.note_tag.clone(),
            })?;
        store.write_notes(notes_file, &outcome.notes)?;
    }

    store.write_notebook(&entry.output, &outcome.notebook, indent)?;

    Ok(ProcessedFile {
        input: entry.input.clone(),
        output: entry.output.clone(),
        notes_file: entry
            .notes_file
            .clone()
            .filter(|_| !outcome.notes.is_empty()),
        notes: outcome.notes.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::config::{OptionOverrides, ScrubbingOptions};
    use crate::model::{Cell, CellKind, Notebook};
    use crate::store::memory::InMemoryStore;
    use std::path::{Path, PathBuf};

    fn seed(store: &mut InMemoryStore, path: &str, cells: Vec<Cell>) {
        store
            .write_notebook(Path::new(path), &Notebook::new(cells), 1)
            .unwrap();
    }

    fn project(files: Vec<FileEntry>) -> ProjectConfig {
        ProjectConfig {
            options: ScrubbingOptions::default(),
            files,
        }
    }

    #[test]
    fn processes_every_entry_in_order() {
        let mut store = InMemoryStore::new();
        seed(
            &mut store,
            "a.ipynb",
            vec![Cell::code("x").with_tags(["scrub-clear"])],
        );
        seed(&mut store, "b.ipynb", vec![Cell::markdown("# B")]);

        let config = project(vec![
            FileEntry::new("a.ipynb", "out/a.ipynb"),
            FileEntry::new("b.ipynb", "out/b.ipynb"),
        ]);

        let result = run(&mut store, &config, 1).unwrap();

        assert!(!result.is_failure());
        assert_eq!(result.processed.len(), 2);
        assert_eq!(result.messages.len(), 2);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(result.messages[0].content, "Processed: a.ipynb → out/a.ipynb");

        let a = store.read_notebook(Path::new("out/a.ipynb")).unwrap();
        assert_eq!(a.cells[0].source, "# TODO: Implement this\n");
        assert_eq!(a.metadata["exercise_version"], true);
        assert!(store.exists(Path::new("out/b.ipynb")));
    }

    #[test]
    fn per_file_overrides_apply() {
        let mut store = InMemoryStore::new();
        seed(
            &mut store,
            "a.ipynb",
            vec![Cell::code("x").with_tags(["hide"]), Cell::code("y")],
        );

        let overrides = OptionOverrides {
            omit_tag: Some("hide".to_string()),
            ..Default::default()
        };
        let config = project(vec![
            FileEntry::new("a.ipynb", "out.ipynb").with_overrides(overrides)
        ]);

        run(&mut store, &config, 1).unwrap();

        let out = store.read_notebook(Path::new("out.ipynb")).unwrap();
        assert_eq!(out.cells.len(), 1);
        assert_eq!(out.cells[0].source, "y");
    }

    #[test]
    fn writes_notes_next_to_output() {
        let mut store = InMemoryStore::new();
        seed(
            &mut store,
            "a.ipynb",
            vec![Cell::code("#| scrub-note: ex1 | # your turn\nanswer = 42")],
        );

        let config = project(vec![
            FileEntry::new("a.ipynb", "out.ipynb").with_notes_file("notes.md")
        ]);

        let result = run(&mut store, &config, 1).unwrap();

        assert_eq!(result.processed[0].notes, 1);
        assert_eq!(
            result.processed[0].notes_file.as_deref(),
            Some(Path::new("notes.md"))
        );
        assert!(store.get(Path::new("notes.md")).unwrap().contains("## ex1"));
        let out = store.read_notebook(Path::new("out.ipynb")).unwrap();
        assert_eq!(out.cells[0].source, "# your turn\n# (See notes: ex1)\n");
        assert_eq!(out.cells[0].kind, CellKind::Code);
    }

    #[test]
    fn notes_without_destination_stop_the_run() {
        let mut store = InMemoryStore::new();
        seed(&mut store, "a.ipynb", vec![Cell::code("#| scrub-note: ex1\nx")]);
        seed(&mut store, "b.ipynb", vec![Cell::code("y")]);

        let config = project(vec![
            FileEntry::new("a.ipynb", "out/a.ipynb"),
            FileEntry::new("b.ipynb", "out/b.ipynb"),
        ]);

        let result = run(&mut store, &config, 1).unwrap();

        assert!(result.is_failure());
        assert_eq!(result.failed_input, Some(PathBuf::from("a.ipynb")));
        let last = result.messages.last().unwrap();
        assert_eq!(last.level, MessageLevel::Error);
        assert!(last.content.starts_with("Error processing a.ipynb: Found 1 cell(s)"));
        assert!(!store.exists(Path::new("out/a.ipynb")));
        assert!(!store.exists(Path::new("out/b.ipynb")));
    }

    #[test]
    fn missing_input_stops_after_earlier_successes() {
        let mut store = InMemoryStore::new();
        seed(&mut store, "a.ipynb", vec![Cell::code("x")]);
        seed(&mut store, "c.ipynb", vec![Cell::code("z")]);

        let config = project(vec![
            FileEntry::new("a.ipynb", "out/a.ipynb"),
            FileEntry::new("missing.ipynb", "out/missing.ipynb"),
            FileEntry::new("c.ipynb", "out/c.ipynb"),
        ]);

        let result = run(&mut store, &config, 1).unwrap();

        assert!(result.is_failure());
        assert_eq!(result.processed.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(
            result.messages[1].content,
            "Error processing missing.ipynb: Input file not found: missing.ipynb"
        );
        assert!(store.exists(Path::new("out/a.ipynb")));
        assert!(!store.exists(Path::new("out/c.ipynb")));
    }

    #[test]
    fn invalid_notebook_is_reported_with_its_input() {
        let mut store = InMemoryStore::new();
        store.insert("bad.ipynb", r#"{"cells": "nope"}"#);

        let config = project(vec![FileEntry::new("bad.ipynb", "out.ipynb")]);
        let result = run(&mut store, &config, 1).unwrap();

        assert!(result.is_failure());
        assert!(result.messages[0]
            .content
            .starts_with("Error processing bad.ipynb:"));
    }
}
