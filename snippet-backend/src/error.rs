//! Error taxonomy for note storage

use std::sync::PoisonError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NoteStoreError {
    /// A note with the same normalized title already exists
    #[error("A note titled \"{0}\" already exists")]
    DuplicateTitle(String),

    /// No note matches the normalized title. An expected outcome, not a fault.
    #[error("No note found under title \"{0}\"")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The database is unreachable, corrupt, or its lock was poisoned
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl From<rusqlite::Error> for NoteStoreError {
    fn from(e: rusqlite::Error) -> Self {
        NoteStoreError::StorageUnavailable(e.to_string())
    }
}

impl<T> From<PoisonError<T>> for NoteStoreError {
    fn from(e: PoisonError<T>) -> Self {
        NoteStoreError::StorageUnavailable(format!("connection lock poisoned: {}", e))
    }
}

pub type NoteResult<T> = Result<T, NoteStoreError>;
