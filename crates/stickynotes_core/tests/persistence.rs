use std::cell::RefCell;
use std::rc::Rc;
use stickynotes_core::{JsonFileStorage, MemoryStorage, Note, NoteStore, StoreObserver};

#[test]
fn every_list_change_rewrites_the_persisted_list() {
    let storage = MemoryStorage::new();
    let mut store = NoteStore::open(storage.clone());

    let id = store.add("persist me").unwrap();
    assert_eq!(storage.persisted().len(), 1);

    store.start_edit(id, "persist me");
    store.set_edit_text("persist me, edited");
    store.save_edit();
    assert_eq!(storage.persisted()[0].text, "persist me, edited");

    store.delete(id);
    assert!(storage.persisted().is_empty());
}

#[test]
fn edit_mode_transitions_alone_do_not_persist() {
    let storage = MemoryStorage::new();
    let mut store = NoteStore::open(storage.clone());
    let id = store.add("steady").unwrap();
    let persisted = storage.persisted();

    store.start_edit(id, "steady");
    store.set_edit_text("never committed");
    store.cancel_edit();

    assert_eq!(storage.persisted(), persisted);
}

#[test]
fn reopened_store_sees_the_notes_from_the_previous_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.json");

    let (first, second) = {
        let mut store = NoteStore::open(JsonFileStorage::new(&path));
        let first = store.add("session one, note one").unwrap();
        let second = store.add("session one, note two").unwrap();
        (first, second)
    };

    let store = NoteStore::open(JsonFileStorage::new(&path));
    assert_eq!(store.len(), 2);
    assert_eq!(store.notes()[0].id, first);
    assert_eq!(store.notes()[1].id, second);
}

#[test]
fn corrupt_file_resets_the_store_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.json");
    std::fs::write(&path, "[{\"id\": \"not an integer\"}]").unwrap();

    let mut store = NoteStore::open(JsonFileStorage::new(&path));
    assert!(store.is_empty());

    // The next mutation overwrites the corrupt payload.
    store.add("fresh start").unwrap();
    let reopened = NoteStore::open(JsonFileStorage::new(&path));
    assert_eq!(reopened.len(), 1);
    assert_eq!(reopened.notes()[0].text, "fresh start");
}

#[test]
fn serialized_list_round_trips_field_by_field() {
    let storage = MemoryStorage::new();
    let mut store = NoteStore::open(storage.clone());
    store.add("alpha").unwrap();
    store.add("  beta, untrimmed  ").unwrap();

    let json = serde_json::to_string(store.notes()).unwrap();
    let back: Vec<Note> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, store.notes());
}

struct CountingObserver {
    seen: Rc<RefCell<Vec<usize>>>,
}

impl StoreObserver for CountingObserver {
    fn notes_changed(&self, notes: &[Note]) {
        self.seen.borrow_mut().push(notes.len());
    }
}

#[test]
fn observers_fire_once_per_committed_list_change() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut store = NoteStore::open(MemoryStorage::new());
    store.subscribe(Box::new(CountingObserver { seen: seen.clone() }));

    let id = store.add("one").unwrap();
    store.add("two").unwrap();
    store.add("   ");
    store.start_edit(id, "one");
    store.cancel_edit();
    store.delete(id);
    store.delete(999);

    assert_eq!(*seen.borrow(), vec![1, 2, 1]);
}
