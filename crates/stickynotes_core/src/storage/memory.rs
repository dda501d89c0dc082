//! In-memory note storage for tests and ephemeral stores.

use super::{NoteStorage, StorageResult};
use crate::model::note::Note;
use std::cell::RefCell;
use std::rc::Rc;

/// Keeps the serialized list in a shared cell instead of on disk.
///
/// Clones share the same backing cell, so a store can be torn down and
/// rebuilt over the same "persisted" state in tests.
#[derive(Default, Clone)]
pub struct MemoryStorage {
    cell: Rc<RefCell<Vec<Note>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the currently persisted list.
    pub fn persisted(&self) -> Vec<Note> {
        self.cell.borrow().clone()
    }
}

impl NoteStorage for MemoryStorage {
    fn load(&self) -> Vec<Note> {
        self.cell.borrow().clone()
    }

    fn save(&self, notes: &[Note]) -> StorageResult<()> {
        *self.cell.borrow_mut() = notes.to_vec();
        Ok(())
    }
}
