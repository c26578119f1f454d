//! Note repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide add/edit/delete/get/list/search over the note collection.
//! - Allocate monotonically increasing ids starting at 1.
//!
//! # Invariants
//! - Ids are never reused, even after deletion.
//! - `next_id` is strictly greater than every id ever issued.
//! - Stored notes always have non-empty title and content.
//! - List and search return owned snapshots; later writes do not leak into them.

use crate::clock::{Clock, SystemClock};
use crate::model::note::{Note, NoteId, NoteValidationError};
use crate::model::NoteMap;
use crate::search::query::{filter_notes, SearchQuery};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for note writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    Validation(NoteValidationError),
    NotFound(NoteId),
    /// Every id up to `u64::MAX - 1` has been issued.
    IdsExhausted,
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "note not found: {id}"),
            Self::IdsExhausted => write!(f, "no note ids left to issue"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) | Self::IdsExhausted => None,
        }
    }
}

impl From<NoteValidationError> for RepoError {
    fn from(value: NoteValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Repository interface for note operations.
pub trait NoteRepository {
    /// Stores a new note and returns its freshly allocated id.
    fn add_note(&mut self, title: &str, content: &str) -> RepoResult<NoteId>;
    /// Replaces title and content of an existing note.
    fn edit_note(&mut self, id: NoteId, title: &str, content: &str) -> RepoResult<()>;
    /// Removes a note permanently.
    fn delete_note(&mut self, id: NoteId) -> RepoResult<()>;
    /// Gets one note by id.
    fn get_note(&self, id: NoteId) -> Option<Note>;
    /// Returns a snapshot of every note.
    fn list_notes(&self) -> NoteMap;
    /// Returns a snapshot of the notes matching `query`.
    fn search_notes(&self, query: &SearchQuery) -> NoteMap;
}

/// Process-lifetime note storage keyed by id.
#[derive(Debug)]
pub struct InMemoryNoteRepository<C: Clock = SystemClock> {
    notes: NoteMap,
    next_id: NoteId,
    clock: C,
}

impl InMemoryNoteRepository<SystemClock> {
    /// Creates an empty repository stamped by local wall-clock time.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for InMemoryNoteRepository<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> InMemoryNoteRepository<C> {
    /// Creates an empty repository that reads time from `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self {
            notes: NoteMap::new(),
            next_id: NoteId::FIRST,
            clock,
        }
    }

    /// Id the next successful add will receive.
    pub fn next_id(&self) -> NoteId {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

impl<C: Clock> NoteRepository for InMemoryNoteRepository<C> {
    fn add_note(&mut self, title: &str, content: &str) -> RepoResult<NoteId> {
        let id = self.next_id;
        let note = Note::new(id, title, content, self.clock.now())?;
        let next_id = id.successor().ok_or(RepoError::IdsExhausted)?;

        self.notes.insert(id, note);
        self.next_id = next_id;
        Ok(id)
    }

    fn edit_note(&mut self, id: NoteId, title: &str, content: &str) -> RepoResult<()> {
        let now = self.clock.now();
        let note = self.notes.get_mut(&id).ok_or(RepoError::NotFound(id))?;
        note.revise(title, content, now)?;
        Ok(())
    }

    fn delete_note(&mut self, id: NoteId) -> RepoResult<()> {
        match self.notes.remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepoError::NotFound(id)),
        }
    }

    fn get_note(&self, id: NoteId) -> Option<Note> {
        self.notes.get(&id).cloned()
    }

    fn list_notes(&self) -> NoteMap {
        self.notes.clone()
    }

    fn search_notes(&self, query: &SearchQuery) -> NoteMap {
        filter_notes(self.notes.values(), query)
    }
}

#[cfg(test)]
mod tests {
    use super::{InMemoryNoteRepository, NoteRepository, RepoError};
    use crate::model::note::{NoteId, NoteValidationError};

    #[test]
    fn empty_repository_starts_at_first_id() {
        let repo = InMemoryNoteRepository::new();
        assert!(repo.is_empty());
        assert_eq!(repo.next_id(), NoteId::FIRST);
    }

    #[test]
    fn rejected_add_does_not_consume_an_id() {
        let mut repo = InMemoryNoteRepository::new();
        let err = repo.add_note("", "x").unwrap_err();
        assert_eq!(err, RepoError::Validation(NoteValidationError::EmptyTitle));
        assert_eq!(repo.next_id(), NoteId::FIRST);

        let id = repo.add_note("t", "c").unwrap();
        assert_eq!(id, NoteId::FIRST);
    }

    #[test]
    fn add_refuses_to_issue_the_last_id_and_keeps_state() {
        let mut repo = InMemoryNoteRepository::new();
        let last = NoteId::new(u64::MAX).unwrap();
        repo.next_id = last;

        assert_eq!(repo.add_note("t", "c").unwrap_err(), RepoError::IdsExhausted);
        assert!(repo.is_empty());
        assert_eq!(repo.next_id(), last);
    }

    #[test]
    fn edit_reports_missing_id_before_validation() {
        let mut repo = InMemoryNoteRepository::new();
        let missing = NoteId::new(9).unwrap();
        let err = repo.edit_note(missing, "", "").unwrap_err();
        assert_eq!(err, RepoError::NotFound(missing));
    }
}
