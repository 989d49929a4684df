//! Domain model for the note board.
//!
//! # Responsibility
//! - Define the canonical note record and its category set.
//! - Keep the persisted wire shape next to the type that owns it.
//!
//! # Invariants
//! - Every note is identified by a stable, never-reused `NoteId`.
//! - An archived note is never pinned.

pub mod category;
pub mod note;
