//! Domain model for sticky notes.
//!
//! # Responsibility
//! - Define the canonical note record shared by storage and store layers.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId`.
//! - Deletion is hard removal from the list; there are no tombstones.

pub mod note;
