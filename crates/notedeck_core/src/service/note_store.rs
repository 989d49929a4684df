//! Authoritative note collection and theme flag.
//!
//! # Responsibility
//! - Apply create/update/delete/pin/archive mutations by note id.
//! - Persist the whole collection after every applied mutation.
//! - Persist the theme flag independently of the collection.
//!
//! # Invariants
//! - In-memory state always equals the last successfully persisted state;
//!   a failed write leaves the store untouched.
//! - Ids are strictly increasing and never reissued within a store lifetime.
//! - New notes are prepended; edits keep their position.
//! - Ignored mutations write nothing.

use crate::model::category::Category;
use crate::model::note::{normalize_text, Note, NoteId};
use crate::repo::note_repo::{NoteRepository, RepoError};
use crate::service::draft::NoteDraft;
use crate::view::projector::{project, ViewCounts, ViewMode};
use chrono::{DateTime, Local, TimeZone};
use log::{debug, error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store error for failed writes and an exhausted id space.
#[derive(Debug)]
pub enum NoteStoreError {
    /// Repository write failed; in-memory state was not changed.
    Repo(RepoError),
    /// The largest stored id is `NoteId::MAX`; no larger id can be issued.
    IdSpaceExhausted,
}

impl Display for NoteStoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "failed to persist notes: {err}"),
            Self::IdSpaceExhausted => write!(f, "no note id left above {}", NoteId::MAX),
        }
    }
}

impl Error for NoteStoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::IdSpaceExhausted => None,
        }
    }
}

impl From<RepoError> for NoteStoreError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Why a mutation left the collection unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Text was empty after trimming.
    EmptyText,
    /// No note carries the requested id.
    NoteNotFound(NoteId),
}

impl IgnoreReason {
    fn code(self) -> &'static str {
        match self {
            Self::EmptyText => "empty_text",
            Self::NoteNotFound(_) => "note_not_found",
        }
    }
}

/// Result indicator for collection mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// Mutation applied and persisted for the given note.
    Applied(NoteId),
    /// Nothing changed and nothing was written.
    Ignored(IgnoreReason),
}

impl MutationOutcome {
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied(_))
    }

    /// Id of the affected note when applied.
    pub fn applied_id(self) -> Option<NoteId> {
        match self {
            Self::Applied(id) => Some(id),
            Self::Ignored(_) => None,
        }
    }
}

pub type StoreResult<T> = Result<T, NoteStoreError>;

/// Owned note collection backed by a repository.
pub struct NoteStore<R: NoteRepository> {
    repo: R,
    notes: Vec<Note>,
    dark_mode: bool,
    last_issued_id: NoteId,
}

impl<R: NoteRepository> NoteStore<R> {
    /// Restores state from `repo`.
    ///
    /// Missing or unreadable notes yield an empty collection; a missing or
    /// unreadable theme yields light mode. Never fails.
    pub fn open(repo: R) -> Self {
        let notes = match repo.load_notes() {
            Ok(Some(notes)) => notes,
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!("event=store_open module=store status=fallback slot=notes error={err}");
                Vec::new()
            }
        };
        let dark_mode = match repo.load_dark_mode() {
            Ok(value) => value.unwrap_or(false),
            Err(err) => {
                warn!("event=store_open module=store status=fallback slot=theme error={err}");
                false
            }
        };
        let last_issued_id = notes.iter().map(|note| note.id).max().unwrap_or(0);

        info!(
            "event=store_open module=store status=ok notes={} dark_mode={dark_mode}",
            notes.len()
        );
        Self {
            repo,
            notes,
            dark_mode,
            last_issued_id,
        }
    }

    /// Raw collection in stored order (newest creations first).
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn note(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Ordered display list for a view; recomputed on every call.
    pub fn display_list(&self, mode: ViewMode, search_term: &str) -> Vec<Note> {
        project(&self.notes, mode, search_term)
    }

    pub fn counts(&self) -> ViewCounts {
        ViewCounts::from_notes(&self.notes)
    }

    /// Creates a note stamped with the current local time.
    pub fn create_note(&mut self, text: &str, category: Category) -> StoreResult<MutationOutcome> {
        self.create_note_at(text, category, &Local::now())
    }

    /// Creates a note as if at `now`; `now` drives both id and date label.
    pub fn create_note_at<Tz: TimeZone>(
        &mut self,
        text: &str,
        category: Category,
        now: &DateTime<Tz>,
    ) -> StoreResult<MutationOutcome>
    where
        Tz::Offset: Display,
    {
        let Some(text) = normalize_text(text) else {
            return Ok(ignored("create", IgnoreReason::EmptyText));
        };
        let id = self.next_id(now.timestamp_millis())?;
        let note = Note::from_checked(id, text, category, now);

        let mut next = Vec::with_capacity(self.notes.len() + 1);
        next.push(note);
        next.extend(self.notes.iter().cloned());
        self.commit("create", id, next)?;
        self.last_issued_id = id;
        Ok(MutationOutcome::Applied(id))
    }

    /// Replaces text and category of an existing note in place.
    pub fn update_note(
        &mut self,
        id: NoteId,
        text: &str,
        category: Category,
    ) -> StoreResult<MutationOutcome> {
        let Some(index) = self.position(id) else {
            return Ok(ignored("update", IgnoreReason::NoteNotFound(id)));
        };
        let Some(text) = normalize_text(text) else {
            return Ok(ignored("update", IgnoreReason::EmptyText));
        };

        let mut next = self.notes.clone();
        next[index].text = text;
        next[index].category = category;
        self.commit("update", id, next)?;
        Ok(MutationOutcome::Applied(id))
    }

    /// Removes a note permanently.
    pub fn delete_note(&mut self, id: NoteId) -> StoreResult<MutationOutcome> {
        let Some(index) = self.position(id) else {
            return Ok(ignored("delete", IgnoreReason::NoteNotFound(id)));
        };

        let mut next = self.notes.clone();
        next.remove(index);
        self.commit("delete", id, next)?;
        Ok(MutationOutcome::Applied(id))
    }

    pub fn toggle_pin(&mut self, id: NoteId) -> StoreResult<MutationOutcome> {
        self.modify("toggle_pin", id, Note::toggle_pin)
    }

    /// Flips the archive flag; archiving also unpins the note.
    pub fn toggle_archive(&mut self, id: NoteId) -> StoreResult<MutationOutcome> {
        self.modify("toggle_archive", id, Note::toggle_archive)
    }

    /// Sets and persists the theme flag.
    pub fn set_theme(&mut self, dark_mode: bool) -> StoreResult<()> {
        if let Err(err) = self.repo.save_dark_mode(dark_mode) {
            error!("event=theme_write module=store status=error dark_mode={dark_mode} error={err}");
            return Err(err.into());
        }
        self.dark_mode = dark_mode;
        debug!("event=theme_write module=store status=ok dark_mode={dark_mode}");
        Ok(())
    }

    /// Saves an editor draft: creates when not editing, updates otherwise.
    ///
    /// The draft is reset only when the mutation is applied.
    pub fn submit_draft(&mut self, draft: &mut NoteDraft) -> StoreResult<MutationOutcome> {
        let outcome = match draft.editing {
            Some(id) => self.update_note(id, &draft.text, draft.category)?,
            None => self.create_note(&draft.text, draft.category)?,
        };
        if outcome.is_applied() {
            draft.reset();
        }
        Ok(outcome)
    }

    fn modify(
        &mut self,
        op: &'static str,
        id: NoteId,
        change: impl FnOnce(&mut Note),
    ) -> StoreResult<MutationOutcome> {
        let Some(index) = self.position(id) else {
            return Ok(ignored(op, IgnoreReason::NoteNotFound(id)));
        };

        let mut next = self.notes.clone();
        change(&mut next[index]);
        self.commit(op, id, next)?;
        Ok(MutationOutcome::Applied(id))
    }

    fn commit(&mut self, op: &'static str, id: NoteId, next: Vec<Note>) -> StoreResult<()> {
        if let Err(err) = self.repo.save_notes(&next) {
            error!("event=note_mutation module=store op={op} status=error id={id} error={err}");
            return Err(err.into());
        }
        self.notes = next;
        debug!(
            "event=note_mutation module=store op={op} status=ok id={id} total={}",
            self.notes.len()
        );
        Ok(())
    }

    fn position(&self, id: NoteId) -> Option<usize> {
        self.notes.iter().position(|note| note.id == id)
    }

    /// Clock time, bumped past the last issued id; never below 1.
    fn next_id(&self, timestamp_ms: i64) -> StoreResult<NoteId> {
        let Some(floor) = self.last_issued_id.checked_add(1) else {
            error!(
                "event=note_mutation module=store op=create status=error error_code=id_space_exhausted"
            );
            return Err(NoteStoreError::IdSpaceExhausted);
        };
        Ok(timestamp_ms.max(floor).max(1))
    }
}

fn ignored(op: &'static str, reason: IgnoreReason) -> MutationOutcome {
    debug!(
        "event=note_mutation module=store op={op} status=skipped reason={}",
        reason.code()
    );
    MutationOutcome::Ignored(reason)
}

#[cfg(test)]
mod tests {
    use super::{IgnoreReason, MutationOutcome, NoteStore};
    use crate::model::category::Category;
    use crate::repo::memory::MemoryNoteRepository;
    use chrono::{TimeZone, Utc};

    #[test]
    fn ids_stay_unique_when_clock_stalls_or_runs_backwards() {
        let mut store = NoteStore::open(MemoryNoteRepository::new());
        let at = Utc.timestamp_millis_opt(1_000).unwrap();
        let earlier = Utc.timestamp_millis_opt(500).unwrap();

        let first = store.create_note_at("a", Category::Work, &at).unwrap();
        let second = store.create_note_at("b", Category::Work, &at).unwrap();
        let third = store.create_note_at("c", Category::Work, &earlier).unwrap();

        assert_eq!(first, MutationOutcome::Applied(1_000));
        assert_eq!(second, MutationOutcome::Applied(1_001));
        assert_eq!(third, MutationOutcome::Applied(1_002));
    }

    #[test]
    fn deleted_ids_are_not_reissued() {
        let mut store = NoteStore::open(MemoryNoteRepository::new());
        let at = Utc.timestamp_millis_opt(42).unwrap();
        let id = store
            .create_note_at("gone soon", Category::Ideas, &at)
            .unwrap()
            .applied_id()
            .unwrap();
        store.delete_note(id).unwrap();

        let next = store
            .create_note_at("fresh", Category::Ideas, &at)
            .unwrap()
            .applied_id()
            .unwrap();
        assert!(next > id);
    }

    #[test]
    fn ignored_mutations_write_nothing() {
        let repo = MemoryNoteRepository::new();
        let mut store = NoteStore::open(&repo);
        assert_eq!(
            store.create_note("  ", Category::Work).unwrap(),
            MutationOutcome::Ignored(IgnoreReason::EmptyText)
        );
        assert_eq!(
            store.toggle_pin(9).unwrap(),
            MutationOutcome::Ignored(IgnoreReason::NoteNotFound(9))
        );
        assert_eq!(repo.write_count(), 0);
    }
}
