//! # Commands
//!
//! Business logic for each CLI command. Commands take Rust values and a
//! [`NotebookStore`](crate::store::NotebookStore), and return a [`CmdResult`]:
//! user-facing messages plus whatever the caller needs to emit. They never
//! print, exit, or decide colors.
//!
//! - [`scrub_notebook`]: one notebook from text, result returned for the caller
//!   to write; a missing notes destination is a warning.
//! - [`scrub_project`]: every file of a [`ProjectConfig`](crate::config::ProjectConfig),
//!   in order, stopping at the first failure; a missing notes destination is
//!   an error.

use crate::model::Notebook;
use crate::process::Diagnostic;
use std::path::PathBuf;

pub mod scrub_notebook;
pub mod scrub_project;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// One notebook written by a project run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedFile {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Set only when notes were written.
    pub notes_file: Option<PathBuf>,
    pub notes: usize,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Exercise notebook for the caller to emit (single-notebook mode).
    pub notebook: Option<Notebook>,
    pub processed: Vec<ProcessedFile>,
    /// Input of the project entry that stopped the run.
    pub failed_input: Option<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_notebook(mut self, notebook: Notebook) -> Self {
        self.notebook = Some(notebook);
        self
    }

    pub fn is_failure(&self) -> bool {
        self.failed_input.is_some()
    }

    pub(crate) fn add_diagnostics(&mut self, diagnostics: &[Diagnostic]) {
        for diagnostic in diagnostics {
            self.add_message(CmdMessage::warning(diagnostic.to_string()));
        }
    }
}
