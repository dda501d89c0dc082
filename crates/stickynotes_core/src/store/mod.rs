//! Note store: the single owner of all note state transitions.
//!
//! # Responsibility
//! - Hold the ordered note list, the new-note input buffer, and edit-mode
//!   state.
//! - Expose add/delete/edit operations as the only mutation entry points.
//! - Persist the full list and notify observers after every list change.
//!
//! # Invariants
//! - Note order is insertion order; no operation reorders.
//! - At most one note is in edit mode at a time.
//! - Issued ids are strictly increasing within one store instance.
//! - Every committed list change is persisted before observers run.

use crate::model::note::{now_epoch_ms, Note, NoteId};
use crate::storage::NoteStorage;
use log::{info, warn};

/// Observer contract for list changes.
///
/// Replaces an implicit re-render-on-change coupling: any UI layer can
/// subscribe without the store knowing how notes are drawn. Called after
/// every committed change to the note sequence; edit-mode transitions that
/// leave the list untouched do not fire.
pub trait StoreObserver {
    fn notes_changed(&self, notes: &[Note]);
}

/// In-flight edit state: target note plus a scratch buffer decoupled from
/// the note's committed text until saved.
#[derive(Debug, Clone, PartialEq, Eq)]
struct EditDraft {
    id: NoteId,
    text: String,
}

/// Ordered note list with edit cursor, persisted through a storage seam.
pub struct NoteStore<S: NoteStorage> {
    storage: S,
    notes: Vec<Note>,
    input: String,
    draft: Option<EditDraft>,
    last_id: NoteId,
    observers: Vec<Box<dyn StoreObserver>>,
}

impl<S: NoteStorage> NoteStore<S> {
    /// Opens a store over the given storage, loading persisted notes once.
    pub fn open(storage: S) -> Self {
        let notes = storage.load();
        let last_id = notes.iter().map(|note| note.id).max().unwrap_or(0);
        info!(
            "event=store_open module=store status=ok count={}",
            notes.len()
        );
        Self {
            storage,
            notes,
            input: String::new(),
            draft: None,
            last_id,
            observers: Vec::new(),
        }
    }

    /// Registers an observer for committed list changes.
    pub fn subscribe(&mut self, observer: Box<dyn StoreObserver>) {
        self.observers.push(observer);
    }

    /// Returns the notes in insertion order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Returns the id of the note currently in edit mode, if any.
    pub fn editing_id(&self) -> Option<NoteId> {
        self.draft.as_ref().map(|draft| draft.id)
    }

    /// Returns the scratch edit buffer while in edit mode.
    pub fn edit_text(&self) -> Option<&str> {
        self.draft.as_ref().map(|draft| draft.text.as_str())
    }

    /// Returns the new-note input buffer.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Rewrites the new-note input buffer.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Appends a new note built from `raw_text`.
    ///
    /// # Contract
    /// - Whitespace-only input is rejected: no note, no persist, `None`.
    /// - The stored text is `raw_text` exactly as given, untrimmed.
    /// - Color is a uniform random palette pick; id is fresh and unique.
    /// - The input buffer is cleared on success.
    pub fn add(&mut self, raw_text: &str) -> Option<NoteId> {
        if raw_text.trim().is_empty() {
            return None;
        }

        let id = self.next_id();
        self.notes.push(Note::with_id(id, raw_text));
        self.input.clear();
        info!("event=note_add module=store status=ok id={id}");
        self.commit();
        Some(id)
    }

    /// Submits the input buffer through `add`.
    pub fn submit_input(&mut self) -> Option<NoteId> {
        let raw = self.input.clone();
        self.add(&raw)
    }

    /// Removes the note with the given id, keeping the rest in order.
    ///
    /// Returns `false` without error when no note matches.
    pub fn delete(&mut self, id: NoteId) -> bool {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        if self.notes.len() == before {
            return false;
        }

        info!("event=note_delete module=store status=ok id={id}");
        self.commit();
        true
    }

    /// Enters edit mode for `id`, seeding the scratch buffer.
    ///
    /// Any unsaved prior edit state is overwritten, not merged.
    pub fn start_edit(&mut self, id: NoteId, current_text: impl Into<String>) {
        self.draft = Some(EditDraft {
            id,
            text: current_text.into(),
        });
    }

    /// Rewrites the scratch buffer; no-op outside edit mode.
    pub fn set_edit_text(&mut self, text: impl Into<String>) {
        if let Some(draft) = self.draft.as_mut() {
            draft.text = text.into();
        }
    }

    /// Commits the scratch buffer into the edited note's text.
    ///
    /// # Contract
    /// - A whitespace-only buffer discards the edit without touching the
    ///   note.
    /// - Only the `text` field changes; id, color, timestamp and list order
    ///   stay as they were.
    /// - Edit mode is exited unconditionally, whether or not the save
    ///   happened (including when the edited note no longer exists).
    ///
    /// Returns `true` when a note was modified.
    pub fn save_edit(&mut self) -> bool {
        let Some(draft) = self.draft.take() else {
            return false;
        };

        if draft.text.trim().is_empty() {
            return false;
        }

        let Some(note) = self.notes.iter_mut().find(|note| note.id == draft.id) else {
            return false;
        };

        note.text = draft.text;
        info!("event=note_edit module=store status=ok id={}", draft.id);
        self.commit();
        true
    }

    /// Exits edit mode without modifying any note.
    pub fn cancel_edit(&mut self) {
        self.draft = None;
    }

    /// Issues a fresh id: epoch milliseconds, bumped past the last issued
    /// id when the clock has not advanced.
    fn next_id(&mut self) -> NoteId {
        let candidate = now_epoch_ms();
        self.last_id = if candidate > self.last_id {
            candidate
        } else {
            self.last_id + 1
        };
        self.last_id
    }

    /// Persists the full list and notifies observers.
    ///
    /// Storage failure is logged and swallowed: the in-memory list stays
    /// authoritative and observers still run.
    fn commit(&mut self) {
        if let Err(err) = self.storage.save(&self.notes) {
            warn!("event=notes_save module=store status=error error={err}");
        }
        for observer in &self.observers {
            observer.notes_changed(&self.notes);
        }
    }
}
