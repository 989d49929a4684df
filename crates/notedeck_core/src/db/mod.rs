//! Backing file for the notes and theme slots.
//!
//! # Responsibility
//! - Hand out connections whose `slots` table is ready for reads and writes.
//! - Bring older slot files up to the current layout on open.
//!
//! # Invariants
//! - The layout revision lives in `PRAGMA user_version`.
//! - A file written by a newer build is refused rather than downgraded.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Failure while opening or upgrading the slot file.
#[derive(Debug)]
pub enum DbError {
    /// SQLite rejected a statement or pragma.
    Sqlite(rusqlite::Error),
    /// The file carries a layout revision this build does not know.
    SchemaTooNew { found: u32, supported: u32 },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "slot storage error: {err}"),
            Self::SchemaTooNew { found, supported } => write!(
                f,
                "slot file layout v{found} was written by a newer build (this build reads up to v{supported})"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        if let Self::Sqlite(err) = self {
            Some(err)
        } else {
            None
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
