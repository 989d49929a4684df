use notedeck_core::db::{open_db, open_db_in_memory};
use notedeck_core::repo::codec::{NOTES_SLOT, THEME_SLOT};
use notedeck_core::{Category, Note, NoteRepository, RepoError, SqliteNoteRepository};

fn note(id: i64, text: &str, category: Category) -> Note {
    Note {
        id,
        text: text.to_string(),
        category,
        is_pinned: false,
        is_archived: false,
        date: "16 October 2026".to_string(),
    }
}

#[test]
fn fresh_database_has_no_slots() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::new(&conn);

    assert!(repo.load_notes().unwrap().is_none());
    assert!(repo.load_dark_mode().unwrap().is_none());
}

#[test]
fn save_notes_replaces_whole_collection() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::new(&conn);

    repo.save_notes(&[note(1, "one", Category::Work)]).unwrap();
    let replacement = vec![
        note(3, "three", Category::Ideas),
        note(2, "two", Category::Urgent),
    ];
    repo.save_notes(&replacement).unwrap();

    assert_eq!(repo.load_notes().unwrap().unwrap(), replacement);
    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM slots;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn empty_collection_is_distinct_from_absent_slot() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::new(&conn);

    repo.save_notes(&[]).unwrap();
    assert_eq!(repo.load_notes().unwrap(), Some(Vec::new()));
}

#[test]
fn corrupt_notes_slot_reports_codec_error() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::new(&conn);
    repo.write_slot(NOTES_SLOT, "{not json").unwrap();

    let err = repo.load_notes().unwrap_err();
    assert!(matches!(err, RepoError::Codec(_)));
}

#[test]
fn theme_slot_stores_marker_text() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::new(&conn);

    repo.save_dark_mode(true).unwrap();
    assert_eq!(repo.read_slot(THEME_SLOT).unwrap().as_deref(), Some("dark"));
    assert_eq!(repo.load_dark_mode().unwrap(), Some(true));

    repo.save_dark_mode(false).unwrap();
    assert_eq!(repo.read_slot(THEME_SLOT).unwrap().as_deref(), Some("light"));
    assert_eq!(repo.load_dark_mode().unwrap(), Some(false));
}

#[test]
fn unknown_theme_marker_reads_as_light() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::new(&conn);
    repo.write_slot(THEME_SLOT, "solarized").unwrap();

    assert_eq!(repo.load_dark_mode().unwrap(), Some(false));
}

#[test]
fn slots_survive_reopening_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("slots.db");
    let notes = vec![note(9, "persisted", Category::Personal)];

    {
        let conn = open_db(&path).unwrap();
        let repo = SqliteNoteRepository::new(&conn);
        repo.save_notes(&notes).unwrap();
        repo.save_dark_mode(true).unwrap();
    }

    let conn = open_db(&path).unwrap();
    let repo = SqliteNoteRepository::new(&conn);
    assert_eq!(repo.load_notes().unwrap().unwrap(), notes);
    assert_eq!(repo.load_dark_mode().unwrap(), Some(true));
}
