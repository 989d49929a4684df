//! Runtime configuration and process bootstrap.
//!
//! # Responsibility
//! - Resolve database path and logging options from the environment.
//! - Start logging (when configured) and open the slot database.
//!
//! # Invariants
//! - Blank environment values are treated as unset.
//! - Logging is only started when a log directory is configured.

use crate::db::{open_db, DbError};
use crate::logging::{default_log_level, init_logging};
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "NOTEDECK_DB_PATH";
pub const LOG_LEVEL_ENV: &str = "NOTEDECK_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "NOTEDECK_LOG_DIR";
const DEFAULT_DB_FILE_NAME: &str = "notedeck.sqlite3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// SQLite file holding the notes and theme slots.
    pub db_path: PathBuf,
    pub log_level: String,
    /// Absolute directory for rolling log files; `None` disables file logging.
    pub log_dir: Option<String>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            db_path: std::env::temp_dir().join(DEFAULT_DB_FILE_NAME),
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl CoreConfig {
    /// Reads `NOTEDECK_DB_PATH`, `NOTEDECK_LOG_LEVEL` and `NOTEDECK_LOG_DIR`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env` with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|raw| !raw.is_empty())
        };

        let mut config = Self::default();
        if let Some(path) = value(DB_PATH_ENV) {
            config.db_path = PathBuf::from(path);
        }
        if let Some(level) = value(LOG_LEVEL_ENV) {
            config.log_level = level;
        }
        config.log_dir = value(LOG_DIR_ENV);
        config
    }
}

#[derive(Debug)]
pub enum BootstrapError {
    Logging(String),
    Db(DbError),
}

impl Display for BootstrapError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Logging(message) => write!(f, "logging init failed: {message}"),
            Self::Db(err) => write!(f, "database open failed: {err}"),
        }
    }
}

impl Error for BootstrapError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Logging(_) => None,
            Self::Db(err) => Some(err),
        }
    }
}

impl From<DbError> for BootstrapError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

/// Starts logging if configured and opens the migrated slot database.
///
/// Pass the returned connection to `SqliteNoteRepository::new` and then
/// `NoteStore::open`.
pub fn bootstrap(config: &CoreConfig) -> Result<Connection, BootstrapError> {
    if let Some(log_dir) = config.log_dir.as_deref() {
        init_logging(&config.log_level, log_dir).map_err(BootstrapError::Logging)?;
    }
    Ok(open_db(&config.db_path)?)
}
