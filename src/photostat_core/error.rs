use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhotostatError {
    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Cannot write output file {path}: {source}")]
    OutputNotWritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Filesystem errors
    #[error("Directory walker error: {0}")]
    Walkdir(#[from] walkdir::Error),

    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    // Metadata errors
    #[error("Unknown {field} code {code}")]
    UnknownCode { field: &'static str, code: u32 },

    #[error("Failed to extract metadata from {path}: {reason}")]
    MetadataExtraction { path: PathBuf, reason: String },

    // Generic errors
    #[error("Argument error: {0}")]
    Argument(String),
}

/// Result type for photostat operations.
pub type Result<T> = std::result::Result<T, PhotostatError>;
