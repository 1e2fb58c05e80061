use super::NotebookStore;
use crate::error::{Result, ScrubberError};
use crate::model::Notebook;
use crate::notes::{self, Notes};
use std::fs;
use std::path::Path;

/// Filesystem-backed store.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileStore;

impl FileStore {
    pub fn new() -> Self {
        Self
    }

    fn ensure_parent(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(ScrubberError::Io)?;
            }
        }
        Ok(())
    }
}

impl NotebookStore for FileStore {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_notebook(&self, path: &Path) -> Result<Notebook> {
        if !path.exists() {
            return Err(ScrubberError::InputNotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path).map_err(ScrubberError::Io)?;
        Notebook::from_json_str(&content)
    }

    fn write_notebook(&mut self, path: &Path, notebook: &Notebook, indent: usize) -> Result<()> {
        self.ensure_parent(path)?;
        let mut content = notebook.to_json_string(indent)?;
        content.push('\n');
        fs::write(path, content).map_err(ScrubberError::Io)?;
        Ok(())
    }

    fn write_notes(&mut self, path: &Path, notes: &Notes) -> Result<()> {
        notes::write_notes(notes, path)
    }
}
