//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical note record persisted in the notes slot.
//! - Own the pin/archive state transitions.
//!
//! # Invariants
//! - `text` is stored trimmed and is never empty for notes built by `Note::new`.
//! - `toggle_archive` never leaves a note both archived and pinned.
//! - `date` is fixed at creation and never recomputed.

use crate::model::category::Category;
use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable note identifier, derived from creation time in epoch milliseconds.
pub type NoteId = i64;

/// Validation failures for note construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteValidationError {
    /// Text is empty after trimming.
    EmptyText,
    /// Id is zero or negative.
    InvalidId(NoteId),
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "note text cannot be empty"),
            Self::InvalidId(id) => write!(f, "note id must be positive, got {id}"),
        }
    }
}

impl Error for NoteValidationError {}

/// One user-authored note.
///
/// Serialized with camelCase keys (`isPinned`, `isArchived`) to match the
/// persisted slot layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub text: String,
    pub category: Category,
    pub is_pinned: bool,
    pub is_archived: bool,
    /// Creation date label, e.g. `16 October 2026`.
    pub date: String,
}

impl Note {
    /// Builds a fresh, unpinned, active note.
    ///
    /// `text` is trimmed before storing; `created_at` only feeds the date label.
    pub fn new<Tz: TimeZone>(
        id: NoteId,
        text: &str,
        category: Category,
        created_at: &DateTime<Tz>,
    ) -> Result<Self, NoteValidationError>
    where
        Tz::Offset: Display,
    {
        if id <= 0 {
            return Err(NoteValidationError::InvalidId(id));
        }
        let text = normalize_text(text).ok_or(NoteValidationError::EmptyText)?;
        Ok(Self::from_checked(id, text, category, created_at))
    }

    /// Builds a note from an id already known to be positive and text
    /// already passed through `normalize_text`.
    pub(crate) fn from_checked<Tz: TimeZone>(
        id: NoteId,
        text: String,
        category: Category,
        created_at: &DateTime<Tz>,
    ) -> Self
    where
        Tz::Offset: Display,
    {
        Self {
            id,
            text,
            category,
            is_pinned: false,
            is_archived: false,
            date: date_label(created_at),
        }
    }

    pub fn toggle_pin(&mut self) {
        self.is_pinned = !self.is_pinned;
    }

    /// Flips the archive flag; archiving also unpins.
    pub fn toggle_archive(&mut self) {
        self.is_archived = !self.is_archived;
        if self.is_archived {
            self.is_pinned = false;
        }
    }

    /// Case-insensitive substring match against an already lowercased needle.
    pub(crate) fn text_contains_lowercase(&self, needle: &str) -> bool {
        needle.is_empty() || self.text.to_lowercase().contains(needle)
    }
}

/// Trims note text, returning `None` when nothing is left.
pub fn normalize_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Formats a creation date label as `<day> <full month name> <year>`.
pub fn date_label<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    at.format("%-d %B %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::{date_label, normalize_text, Note, NoteValidationError};
    use crate::model::category::Category;
    use chrono::{TimeZone, Utc};

    #[test]
    fn date_label_uses_unpadded_day_and_full_month() {
        let at = Utc.with_ymd_and_hms(2026, 3, 5, 9, 30, 0).unwrap();
        assert_eq!(date_label(&at), "5 March 2026");
    }

    #[test]
    fn normalize_text_trims_and_rejects_blank() {
        assert_eq!(normalize_text("  hi \n").as_deref(), Some("hi"));
        assert_eq!(normalize_text(" \t\n"), None);
    }

    #[test]
    fn new_rejects_non_positive_id() {
        let at = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let err = Note::new(0, "x", Category::Work, &at).unwrap_err();
        assert_eq!(err, NoteValidationError::InvalidId(0));
    }

    #[test]
    fn archive_clears_pin_but_unarchive_does_not_restore_it() {
        let at = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let mut note = Note::new(1, "x", Category::Ideas, &at).unwrap();
        note.toggle_pin();
        note.toggle_archive();
        assert!(note.is_archived);
        assert!(!note.is_pinned);

        note.toggle_archive();
        assert!(!note.is_archived);
        assert!(!note.is_pinned);
    }
}
