//! Filtering and ordering of notes for a view mode and search term.
//!
//! # Invariants
//! - Output is a function of inputs only; inputs are never mutated.
//! - Pinned notes precede unpinned ones; ties break by `id` descending.
//! - Search is a case-insensitive substring match on note text.

use crate::model::note::Note;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Which slice of the collection a view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Every non-archived note.
    #[default]
    Dashboard,
    /// Pinned, non-archived notes.
    Favorites,
    /// Archived notes only.
    Archive,
}

impl ViewMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Favorites => "favorites",
            Self::Archive => "archive",
        }
    }

    /// Mode predicate, applied after the text match.
    pub fn admits(self, note: &Note) -> bool {
        match self {
            Self::Dashboard => !note.is_archived,
            Self::Favorites => note.is_pinned && !note.is_archived,
            Self::Archive => note.is_archived,
        }
    }
}

impl Display for ViewMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModeParseError(pub String);

impl Display for ViewModeParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown view mode `{}`; expected dashboard|favorites|archive",
            self.0
        )
    }
}

impl Error for ViewModeParseError {}

impl FromStr for ViewMode {
    type Err = ViewModeParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "dashboard" => Ok(Self::Dashboard),
            "favorites" => Ok(Self::Favorites),
            "archive" => Ok(Self::Archive),
            other => Err(ViewModeParseError(other.to_string())),
        }
    }
}

/// Builds the ordered display list for `mode` and `search_term`.
pub fn project(notes: &[Note], mode: ViewMode, search_term: &str) -> Vec<Note> {
    let needle = search_term.to_lowercase();
    let mut visible = notes
        .iter()
        .filter(|note| note.text_contains_lowercase(&needle))
        .filter(|note| mode.admits(note))
        .cloned()
        .collect::<Vec<_>>();
    visible.sort_by(display_order);
    visible
}

/// Display ordering: pinned first, then newest id first.
pub fn display_order(a: &Note, b: &Note) -> Ordering {
    b.is_pinned
        .cmp(&a.is_pinned)
        .then_with(|| b.id.cmp(&a.id))
}

/// Per-mode badge counts, ignoring any search term.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewCounts {
    pub dashboard: usize,
    pub favorites: usize,
    pub archive: usize,
}

impl ViewCounts {
    pub fn from_notes(notes: &[Note]) -> Self {
        notes.iter().fold(Self::default(), |mut counts, note| {
            if ViewMode::Dashboard.admits(note) {
                counts.dashboard += 1;
            }
            if ViewMode::Favorites.admits(note) {
                counts.favorites += 1;
            }
            if ViewMode::Archive.admits(note) {
                counts.archive += 1;
            }
            counts
        })
    }

    pub fn get(&self, mode: ViewMode) -> usize {
        match mode {
            ViewMode::Dashboard => self.dashboard,
            ViewMode::Favorites => self.favorites,
            ViewMode::Archive => self.archive,
        }
    }
}
