//! Persistence layer abstractions and implementations.
//!
//! # Responsibility
//! - Define the load/save contract the store mutates through.
//! - Keep serialization details out of store/business logic.
//!
//! # Invariants
//! - `save` rewrites the whole serialized list; writes are never diffed.
//! - `load` never fails: absent or corrupt data yields the empty list.

pub mod json_file;
pub mod memory;

use crate::model::note::Note;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StorageResult<T> = Result<T, StorageError>;

/// Persistence error for note storage operations.
#[derive(Debug)]
pub enum StorageError {
    Io(std::io::Error),
    Serialize(serde_json::Error),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "storage i/o failed: {err}"),
            Self::Serialize(err) => write!(f, "note serialization failed: {err}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Storage interface the note store persists through.
///
/// One named entry in a key-value store, holding the serialized array of
/// note records. Read once at startup, overwritten on every list change.
pub trait NoteStorage {
    /// Reads the persisted note list.
    ///
    /// Absent entry and unparseable payload both yield an empty list; the
    /// reset is logged, never surfaced.
    fn load(&self) -> Vec<Note>;

    /// Serializes and writes the full note list, replacing the prior value.
    fn save(&self, notes: &[Note]) -> StorageResult<()>;
}
