//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate note mutations and their persistence.
//! - Keep presentation layers decoupled from storage details.

pub mod draft;
pub mod note_store;
