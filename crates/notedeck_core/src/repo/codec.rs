//! Encoding of the two persisted slots.
//!
//! - `notes`: JSON array of note records with camelCase keys.
//! - `theme`: `"dark"` or `"light"`; anything but the dark marker reads as light.

use crate::model::note::Note;

/// Key of the slot holding the serialized note collection.
pub const NOTES_SLOT: &str = "notes";
/// Key of the slot holding the theme marker.
pub const THEME_SLOT: &str = "theme";

pub const DARK_THEME_MARKER: &str = "dark";
pub const LIGHT_THEME_MARKER: &str = "light";

/// Serializes the full collection, preserving order.
pub fn encode_notes(notes: &[Note]) -> serde_json::Result<String> {
    serde_json::to_string(notes)
}

pub fn decode_notes(raw: &str) -> serde_json::Result<Vec<Note>> {
    serde_json::from_str(raw)
}

pub fn encode_theme(dark_mode: bool) -> &'static str {
    if dark_mode {
        DARK_THEME_MARKER
    } else {
        LIGHT_THEME_MARKER
    }
}

pub fn decode_theme(raw: &str) -> bool {
    raw == DARK_THEME_MARKER
}

#[cfg(test)]
mod tests {
    use super::{decode_notes, decode_theme, encode_notes, encode_theme};
    use crate::model::category::Category;
    use crate::model::note::Note;

    fn note(id: i64, text: &str, pinned: bool, archived: bool) -> Note {
        Note {
            id,
            text: text.to_string(),
            category: Category::Study,
            is_pinned: pinned,
            is_archived: archived,
            date: "1 May 2026".to_string(),
        }
    }

    #[test]
    fn notes_round_trip_preserves_content_and_order() {
        let notes = vec![
            note(30, "third", false, true),
            note(10, "first", true, false),
            note(20, "second", false, false),
        ];
        let decoded = decode_notes(&encode_notes(&notes).unwrap()).unwrap();
        assert_eq!(decoded, notes);
    }

    #[test]
    fn notes_use_camel_case_wire_fields() {
        let raw = encode_notes(&[note(7, "wire", true, false)]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value[0]["id"], 7);
        assert_eq!(value[0]["text"], "wire");
        assert_eq!(value[0]["category"], "Study");
        assert_eq!(value[0]["isPinned"], true);
        assert_eq!(value[0]["isArchived"], false);
        assert_eq!(value[0]["date"], "1 May 2026");
    }

    #[test]
    fn decode_rejects_unknown_category() {
        let raw = r#"[{"id":1,"text":"x","category":"Groceries","isPinned":false,"isArchived":false,"date":"1 May 2026"}]"#;
        assert!(decode_notes(raw).is_err());
    }

    #[test]
    fn only_the_dark_marker_reads_as_dark() {
        assert!(decode_theme(encode_theme(true)));
        assert!(!decode_theme(encode_theme(false)));
        assert!(!decode_theme("Dark"));
        assert!(!decode_theme(""));
    }
}
