//! Error types for the editor

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("document not found: {0}")]
    DocumentNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("mutation error: {0}")]
    Mutation(#[from] crate::mutations::MutationError),

    #[error("document is not file-backed")]
    NotFileBacked,
}
