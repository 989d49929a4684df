//! Derived display lists.
//!
//! # Responsibility
//! - Turn the authoritative collection into what a view shows.
//! - Stay pure: no storage access, no cached state.

pub mod projector;
