//! Editor form state shared by the create and edit flows.

use crate::model::category::Category;
use crate::model::note::{Note, NoteId};

/// Text/category being typed, plus the note under edit if any.
///
/// `editing == None` means the next submit creates a note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub editing: Option<NoteId>,
    pub text: String,
    pub category: Category,
}

impl NoteDraft {
    /// Empty draft for a new note.
    pub fn new(category: Category) -> Self {
        Self {
            editing: None,
            text: String::new(),
            category,
        }
    }

    /// Draft prefilled from an existing note.
    pub fn for_note(note: &Note) -> Self {
        Self {
            editing: Some(note.id),
            text: note.text.clone(),
            category: note.category,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Clears text and edit target; the chosen category stays.
    pub fn reset(&mut self) {
        self.editing = None;
        self.text.clear();
    }

    /// Abandons the current edit without saving.
    pub fn cancel(&mut self) {
        self.reset();
    }
}
