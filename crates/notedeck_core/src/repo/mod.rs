//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the load/save capability the note store persists through.
//! - Isolate slot encoding and SQLite details from store orchestration.
//!
//! # Invariants
//! - The notes slot always holds the whole collection, never a delta.
//! - The notes and theme slots are written independently.

pub mod codec;
pub mod memory;
pub mod note_repo;
