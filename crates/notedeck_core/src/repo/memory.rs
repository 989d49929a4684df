//! In-process slot repository.
//!
//! Holds encoded slot text in memory so store logic runs through the same
//! codec path as SQLite without any storage backend.

use crate::model::note::Note;
use crate::repo::codec::{
    decode_notes, decode_theme, encode_notes, encode_theme, NOTES_SLOT, THEME_SLOT,
};
use crate::repo::note_repo::{NoteRepository, RepoResult};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct MemoryNoteRepository {
    slots: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
}

impl MemoryNoteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw text currently stored under `key`.
    pub fn raw_slot(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }

    /// Stores raw text under `key` without encoding, e.g. to seed corrupt state.
    pub fn put_raw_slot(&self, key: &str, value: impl Into<String>) {
        self.slots.borrow_mut().insert(key.to_string(), value.into());
    }

    /// Number of slot writes performed through the repository contract.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    fn write(&self, key: &str, value: String) {
        self.slots.borrow_mut().insert(key.to_string(), value);
        self.writes.set(self.writes.get() + 1);
    }
}

impl NoteRepository for MemoryNoteRepository {
    fn load_notes(&self) -> RepoResult<Option<Vec<Note>>> {
        match self.raw_slot(NOTES_SLOT) {
            Some(raw) => Ok(Some(decode_notes(&raw)?)),
            None => Ok(None),
        }
    }

    fn save_notes(&self, notes: &[Note]) -> RepoResult<()> {
        let raw = encode_notes(notes)?;
        self.write(NOTES_SLOT, raw);
        Ok(())
    }

    fn load_dark_mode(&self) -> RepoResult<Option<bool>> {
        Ok(self.raw_slot(THEME_SLOT).as_deref().map(decode_theme))
    }

    fn save_dark_mode(&self, dark_mode: bool) -> RepoResult<()> {
        self.write(THEME_SLOT, encode_theme(dark_mode).to_string());
        Ok(())
    }
}
