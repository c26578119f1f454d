//! Core domain logic for the notebook.
//! This crate is the single source of truth for note invariants.

pub mod clock;
pub mod logging;
pub mod model;
pub mod render;
pub mod repo;
pub mod search;
pub mod service;

pub use clock::{Clock, ManualClock, SystemClock};
pub use logging::{default_log_level, init_logging, logging_status, parse_log_level, LoggingError};
pub use model::note::{validate_note_fields, Note, NoteId, NoteValidationError, TIMESTAMP_FORMAT};
pub use model::NoteMap;
pub use render::listing::{format_timestamp, note_summary, render_listing};
pub use repo::note_repo::{InMemoryNoteRepository, NoteRepository, RepoError, RepoResult};
pub use search::query::{filter_notes, SearchQuery};
pub use service::note_service::{parse_note_id, NoteService, NoteServiceError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
