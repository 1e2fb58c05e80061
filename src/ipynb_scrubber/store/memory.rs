use super::NotebookStore;
use crate::error::{Result, ScrubberError};
use crate::model::Notebook;
use crate::notes::{self, Notes};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// In-memory storage for testing.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    files: HashMap<PathBuf, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file with raw text.
    pub fn insert(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }

    pub fn get(&self, path: &Path) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl NotebookStore for InMemoryStore {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn read_notebook(&self, path: &Path) -> Result<Notebook> {
        let content = self
            .files
            .get(path)
            .ok_or_else(|| ScrubberError::InputNotFound(path.to_path_buf()))?;
        Notebook::from_json_str(content)
    }

    fn write_notebook(&mut self, path: &Path, notebook: &Notebook, indent: usize) -> Result<()> {
        let content = notebook.to_json_string(indent)?;
        self.files.insert(path.to_path_buf(), content);
        Ok(())
    }

    fn write_notes(&mut self, path: &Path, notes: &Notes) -> Result<()> {
        self.files.insert(path.to_path_buf(), notes::render(notes));
        Ok(())
    }
}
