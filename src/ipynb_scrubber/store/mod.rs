//! # Storage Layer
//!
//! Commands never touch the filesystem directly. They read and write through
//! the [`NotebookStore`] trait so the batch logic can be exercised without a
//! disk:
//!
//! - [`fs::FileStore`]: production storage on the local filesystem. Parent
//!   directories of outputs and notes files are created on demand.
//! - [`memory::InMemoryStore`]: path → text map, for tests.
//!
//! Reading validates the notebook shape (see [`crate::model::Notebook::from_value`]),
//! so a store only ever hands back well-formed notebooks.

use crate::error::Result;
use crate::model::Notebook;
use crate::notes::Notes;
use std::path::Path;

pub mod fs;
pub mod memory;

pub trait NotebookStore {
    /// Whether an input exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Read and validate the notebook at `path`.
    fn read_notebook(&self, path: &Path) -> Result<Notebook>;

    /// Write `notebook` as JSON with `indent` spaces per level.
    fn write_notebook(&mut self, path: &Path, notebook: &Notebook, indent: usize) -> Result<()>;

    /// Render `notes` and write them to `path`.
    fn write_notes(&mut self, path: &Path, notes: &Notes) -> Result<()>;
}
