//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for scrubbing, whatever the UI.
//!
//! The facade:
//! - **Dispatches** to the matching command function
//! - **Resolves inputs** (e.g., an explicit config file versus discovery from
//!   a working directory)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no stdout/stderr work and makes no presentation decisions.
//!
//! ## Generic Over NotebookStore
//!
//! `ScrubberApi<S: NotebookStore>` is generic over the storage backend:
//! - Production: `ScrubberApi<FileStore>`
//! - Testing: `ScrubberApi<InMemoryStore>`
//!
//! API tests check dispatch and argument handling only. Scrubbing behaviour is
//! covered by the command and engine modules.

use crate::commands;
use crate::config::{ProjectConfig, ScrubbingOptions};
use crate::error::Result;
use crate::store::NotebookStore;
use std::path::Path;

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, ProcessedFile};

/// The main API facade for scrubbing operations.
pub struct ScrubberApi<S: NotebookStore> {
    store: S,
}

impl<S: NotebookStore> ScrubberApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Scrub a single notebook given as JSON text.
    pub fn scrub_notebook(
        &mut self,
        input: &str,
        options: &ScrubbingOptions,
        notes_file: Option<&Path>,
    ) -> Result<CmdResult> {
        commands::scrub_notebook::run(&mut self.store, input, options, notes_file)
    }

    /// Process every file in `config`, stopping at the first failure.
    pub fn scrub_project(&mut self, config: &ProjectConfig, indent: usize) -> Result<CmdResult> {
        commands::scrub_project::run(&mut self.store, config, indent)
    }

    /// Load the project config: `config_file` when given, otherwise the
    /// nearest one found walking up from `cwd`.
    pub fn load_project(&self, config_file: Option<&Path>, cwd: &Path) -> Result<ProjectConfig> {
        match config_file {
            Some(path) => ProjectConfig::from_file(path),
            None => ProjectConfig::discover(cwd),
        }
    }
}
