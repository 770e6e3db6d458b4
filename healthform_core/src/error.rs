use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while accepting a submission. Each variant
/// ends up in front of the caller as its display string and nothing else.
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("All fields are required.")]
    MissingFields,
    #[error("{0}")]
    Multipart(String),
    #[error("Could not save file {path:?}: {source}")]
    SaveFile {
        path: PathBuf,
        source: std::io::Error,
    },
}
