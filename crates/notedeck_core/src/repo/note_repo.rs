//! Note repository contract and SQLite slot implementation.
//!
//! # Responsibility
//! - Provide whole-collection load/save over the `notes` slot.
//! - Provide theme flag load/save over the `theme` slot.
//!
//! # Invariants
//! - `load_*` returns `Ok(None)` only when the slot was never written.
//! - A slot that exists but cannot be decoded is reported as `RepoError::Codec`.
//!
//! # See also
//! - `repo::codec` for the slot wire format.

use crate::db::DbError;
use crate::model::note::Note;
use crate::repo::codec::{
    decode_notes, decode_theme, encode_notes, encode_theme, NOTES_SLOT, THEME_SLOT,
};
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for slot reads and writes.
#[derive(Debug)]
pub enum RepoError {
    /// Storage transport failure.
    Db(DbError),
    /// Slot content could not be encoded or decoded.
    Codec(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Codec(err) => write!(f, "invalid slot content: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Codec(err) => Some(err),
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Codec(value)
    }
}

/// Persistence capability used by the note store.
pub trait NoteRepository {
    /// Loads the whole collection in stored order.
    fn load_notes(&self) -> RepoResult<Option<Vec<Note>>>;
    /// Replaces the whole stored collection.
    fn save_notes(&self, notes: &[Note]) -> RepoResult<()>;
    fn load_dark_mode(&self) -> RepoResult<Option<bool>>;
    fn save_dark_mode(&self, dark_mode: bool) -> RepoResult<()>;
}

impl<R: NoteRepository + ?Sized> NoteRepository for &R {
    fn load_notes(&self) -> RepoResult<Option<Vec<Note>>> {
        (**self).load_notes()
    }

    fn save_notes(&self, notes: &[Note]) -> RepoResult<()> {
        (**self).save_notes(notes)
    }

    fn load_dark_mode(&self) -> RepoResult<Option<bool>> {
        (**self).load_dark_mode()
    }

    fn save_dark_mode(&self, dark_mode: bool) -> RepoResult<()> {
        (**self).save_dark_mode(dark_mode)
    }
}

/// SQLite-backed repository storing each slot as one row of `slots`.
pub struct SqliteNoteRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteNoteRepository<'conn> {
    /// Wraps a connection returned by `open_db`/`open_db_in_memory`.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Reads the raw text of one slot.
    pub fn read_slot(&self, key: &str) -> RepoResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM slots WHERE key = ?1;", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    /// Overwrites one slot with raw text.
    pub fn write_slot(&self, key: &str, value: &str) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO slots (key, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        debug!(
            "event=slot_write module=repo status=ok key={key} bytes={}",
            value.len()
        );
        Ok(())
    }
}

impl NoteRepository for SqliteNoteRepository<'_> {
    fn load_notes(&self) -> RepoResult<Option<Vec<Note>>> {
        match self.read_slot(NOTES_SLOT)? {
            Some(raw) => Ok(Some(decode_notes(&raw)?)),
            None => Ok(None),
        }
    }

    fn save_notes(&self, notes: &[Note]) -> RepoResult<()> {
        let raw = encode_notes(notes)?;
        self.write_slot(NOTES_SLOT, &raw)
    }

    fn load_dark_mode(&self) -> RepoResult<Option<bool>> {
        Ok(self.read_slot(THEME_SLOT)?.as_deref().map(decode_theme))
    }

    fn save_dark_mode(&self, dark_mode: bool) -> RepoResult<()> {
        self.write_slot(THEME_SLOT, encode_theme(dark_mode))
    }
}
