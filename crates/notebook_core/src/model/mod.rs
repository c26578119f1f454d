//! Note domain model.
//!
//! # Responsibility
//! - Define the fixed-shape note record shared by repository, search and
//!   rendering code.
//! - Own field validation so no layer can store an incomplete note.
//!
//! # Invariants
//! - Every note is identified by a positive `NoteId` that is never reused.
//! - `last_modified >= created_at` for every note.

pub mod note;

use std::collections::BTreeMap;

/// Ordered snapshot of notes keyed by id, as returned by list/search.
pub type NoteMap = BTreeMap<note::NoteId, note::Note>;
