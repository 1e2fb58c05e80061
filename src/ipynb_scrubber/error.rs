use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrubberError {
    #[error("Invalid JSON input: {0}")]
    InvalidJson(serde_json::Error),

    #[error("{0}")]
    InvalidNotebook(String),

    #[error("{0}")]
    Processing(String),

    #[error("{0}")]
    Config(String),

    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error(
        "Found {count} cell(s) with note tag \"{tag}\", but no notes-file specified in config"
    )]
    MissingNotesFile { count: usize, tag: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Broad failure classes, used by callers that decide policy per class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    InvalidInput,
    Processing,
    Configuration,
    Resource,
}

impl ScrubberError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ScrubberError::InvalidJson(_) | ScrubberError::InvalidNotebook(_) => {
                ErrorCategory::InvalidInput
            }
            ScrubberError::Processing(_) => ErrorCategory::Processing,
            ScrubberError::Config(_) | ScrubberError::MissingNotesFile { .. } => {
                ErrorCategory::Configuration
            }
            ScrubberError::InputNotFound(_)
            | ScrubberError::Io(_)
            | ScrubberError::Serialization(_) => ErrorCategory::Resource,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScrubberError>;
