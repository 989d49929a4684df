//! Core domain logic for notedeck.
//! This crate is the single source of truth for note collection invariants.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod view;

pub use config::{bootstrap, BootstrapError, CoreConfig};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::category::{Category, CategoryParseError, CategoryTheme};
pub use model::note::{Note, NoteId, NoteValidationError};
pub use repo::memory::MemoryNoteRepository;
pub use repo::note_repo::{NoteRepository, RepoError, RepoResult, SqliteNoteRepository};
pub use service::draft::NoteDraft;
pub use service::note_store::{
    IgnoreReason, MutationOutcome, NoteStore, NoteStoreError, StoreResult,
};
pub use view::projector::{project, ViewCounts, ViewMode, ViewModeParseError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
