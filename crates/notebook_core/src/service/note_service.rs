//! Note use-case service.
//!
//! # Responsibility
//! - Provide add/edit/delete/get/list/search entry points for presentation
//!   layers.
//! - Parse caller-supplied id text into `NoteId` with an explicit error.
//! - Emit metadata-only diagnostic events for every operation.
//!
//! # Invariants
//! - Note titles and contents never appear in log output.
//! - Service APIs never bypass repository validation.

use crate::model::note::{Note, NoteId, NoteValidationError};
use crate::model::NoteMap;
use crate::repo::note_repo::{NoteRepository, RepoError};
use crate::search::query::SearchQuery;
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for note use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteServiceError {
    /// Empty title or content.
    Validation(NoteValidationError),
    /// Target note does not exist.
    NotFound(NoteId),
    /// Caller-supplied id text is not a positive integer.
    MalformedId(String),
    /// The repository cannot allocate another id.
    IdsExhausted,
}

impl Display for NoteServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "note not found: {id}"),
            Self::MalformedId(text) => write!(f, "invalid note id: `{text}`"),
            Self::IdsExhausted => write!(f, "no note ids left to issue"),
        }
    }
}

impl Error for NoteServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for NoteServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::Validation(err),
            RepoError::NotFound(id) => Self::NotFound(id),
            RepoError::IdsExhausted => Self::IdsExhausted,
        }
    }
}

impl NoteServiceError {
    fn kind(&self) -> &'static str {
        match self {
            Self::Validation(NoteValidationError::EmptyTitle) => "empty_title",
            Self::Validation(NoteValidationError::EmptyContent) => "empty_content",
            Self::NotFound(_) => "not_found",
            Self::MalformedId(_) => "malformed_id",
            Self::IdsExhausted => "ids_exhausted",
        }
    }
}

/// Parses user-entered id text.
///
/// Surrounding whitespace is ignored. Zero, negatives and non-digits are
/// rejected.
///
/// # Errors
/// - `MalformedId` carrying the original text.
pub fn parse_note_id(text: &str) -> Result<NoteId, NoteServiceError> {
    text.trim()
        .parse::<u64>()
        .ok()
        .and_then(NoteId::new)
        .ok_or_else(|| NoteServiceError::MalformedId(text.to_string()))
}

/// Note service facade over repository implementations.
pub struct NoteService<R: NoteRepository> {
    repo: R,
}

impl<R: NoteRepository> NoteService<R> {
    /// Creates a service that owns the provided repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Read access to the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Creates one note and returns its id.
    pub fn add_note(&mut self, title: &str, content: &str) -> Result<NoteId, NoteServiceError> {
        match self.repo.add_note(title, content) {
            Ok(id) => {
                info!("event=note_add module=service status=ok id={id}");
                Ok(id)
            }
            Err(err) => Err(log_failure("note_add", None, err.into())),
        }
    }

    /// Replaces title and content of an existing note.
    pub fn edit_note(
        &mut self,
        id: NoteId,
        title: &str,
        content: &str,
    ) -> Result<(), NoteServiceError> {
        match self.repo.edit_note(id, title, content) {
            Ok(()) => {
                info!("event=note_edit module=service status=ok id={id}");
                Ok(())
            }
            Err(err) => Err(log_failure("note_edit", Some(id), err.into())),
        }
    }

    /// Removes one note permanently.
    pub fn delete_note(&mut self, id: NoteId) -> Result<(), NoteServiceError> {
        match self.repo.delete_note(id) {
            Ok(()) => {
                info!("event=note_delete module=service status=ok id={id}");
                Ok(())
            }
            Err(err) => Err(log_failure("note_delete", Some(id), err.into())),
        }
    }

    /// Gets one note, failing with `NotFound` when absent.
    pub fn get_note(&self, id: NoteId) -> Result<Note, NoteServiceError> {
        self.repo
            .get_note(id)
            .ok_or_else(|| log_failure("note_get", Some(id), NoteServiceError::NotFound(id)))
    }

    /// Lists every note in id order.
    pub fn list_notes(&self) -> NoteMap {
        let notes = self.repo.list_notes();
        debug!(
            "event=note_list module=service status=ok count={}",
            notes.len()
        );
        notes
    }

    /// Runs a free-text search. Blank text returns every note.
    pub fn search_notes(&self, text: &str) -> NoteMap {
        self.run_search(&SearchQuery::parse(text))
    }

    /// Runs an already parsed query, e.g. one kept to refresh a filtered view.
    pub fn run_search(&self, query: &SearchQuery) -> NoteMap {
        let hits = self.repo.search_notes(query);
        debug!(
            "event=note_search module=service status=ok terms={} hits={}",
            query.terms().len(),
            hits.len()
        );
        hits
    }
}

fn log_failure(event: &str, id: Option<NoteId>, err: NoteServiceError) -> NoteServiceError {
    match id {
        Some(id) => warn!(
            "event={event} module=service status=error reason={} id={id}",
            err.kind()
        ),
        None => warn!(
            "event={event} module=service status=error reason={}",
            err.kind()
        ),
    }
    err
}
