//! Core state-management logic for the sticky-notes app.
//! This crate is the single source of truth for note list invariants.

pub mod logging;
pub mod model;
pub mod storage;
pub mod store;

pub use logging::{default_log_level, init_logging};
pub use model::note::{Color, Note, NoteId, PALETTE};
pub use storage::json_file::JsonFileStorage;
pub use storage::memory::MemoryStorage;
pub use storage::{NoteStorage, StorageError, StorageResult};
pub use store::{NoteStore, StoreObserver};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
