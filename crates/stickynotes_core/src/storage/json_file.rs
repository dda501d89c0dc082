//! File-backed note storage.
//!
//! # Responsibility
//! - Map the single key-value entry onto one JSON file on disk.
//! - Emit `notes_load` / `notes_save` logging events.
//!
//! # Invariants
//! - The file always holds one serialized JSON array of note records.
//! - There is no versioning or migration; corrupt data resets to empty.

use super::{NoteStorage, StorageResult};
use crate::model::note::Note;
use log::{info, warn};
use std::path::{Path, PathBuf};

/// Stores the note list as a single JSON file.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Creates a storage handle for the given file path.
    ///
    /// The file does not need to exist yet; the parent directory is created
    /// on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl NoteStorage for JsonFileStorage {
    fn load(&self) -> Vec<Note> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                info!(
                    "event=notes_load module=storage status=ok result=absent path={}",
                    self.path.display()
                );
                return Vec::new();
            }
            Err(err) => {
                warn!(
                    "event=notes_load module=storage status=reset reason=io error={} path={}",
                    err,
                    self.path.display()
                );
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Note>>(&raw) {
            Ok(notes) => {
                info!(
                    "event=notes_load module=storage status=ok count={} path={}",
                    notes.len(),
                    self.path.display()
                );
                notes
            }
            Err(err) => {
                // Corrupt data is treated as no data; the next save
                // overwrites it.
                warn!(
                    "event=notes_load module=storage status=reset reason=parse error={} path={}",
                    err,
                    self.path.display()
                );
                Vec::new()
            }
        }
    }

    fn save(&self, notes: &[Note]) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let payload = serde_json::to_string(notes)?;
        std::fs::write(&self.path, payload)?;
        info!(
            "event=notes_save module=storage status=ok count={} path={}",
            notes.len(),
            self.path.display()
        );
        Ok(())
    }
}
