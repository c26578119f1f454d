//! Note record and validation.
//!
//! # Responsibility
//! - Define `NoteId` and `Note` with named, typed fields.
//! - Provide the only constructors/mutators that touch title and content.
//!
//! # Invariants
//! - `title` and `content` are never empty on a constructed note.
//! - `id` and `created_at` never change after construction.
//! - `last_modified` is clamped so it never precedes `created_at`.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Display and wire format for note timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Repository-assigned note identifier. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(u64);

impl NoteId {
    /// First id handed out by an empty repository.
    pub const FIRST: Self = Self(1);

    /// Wraps a raw value, rejecting zero.
    pub fn new(value: u64) -> Option<Self> {
        if value == 0 {
            None
        } else {
            Some(Self(value))
        }
    }

    /// Returns the raw integer value.
    pub fn get(self) -> u64 {
        self.0
    }

    /// Next id in sequence, or `None` once `u64` is exhausted.
    pub(crate) fn successor(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl Display for NoteId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Field validation failure for note writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteValidationError {
    EmptyTitle,
    EmptyContent,
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "note title cannot be empty"),
            Self::EmptyContent => write!(f, "note content cannot be empty"),
        }
    }
}

impl Error for NoteValidationError {}

/// Checks the user-editable fields of a note.
///
/// Only the empty string is rejected; whitespace-only text is accepted as-is.
///
/// # Errors
/// - `EmptyTitle` when `title` is empty (checked first).
/// - `EmptyContent` when `content` is empty.
pub fn validate_note_fields(title: &str, content: &str) -> Result<(), NoteValidationError> {
    if title.is_empty() {
        return Err(NoteValidationError::EmptyTitle);
    }
    if content.is_empty() {
        return Err(NoteValidationError::EmptyContent);
    }
    Ok(())
}

/// A single title/content record with lifecycle timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    #[serde(with = "timestamp")]
    pub created_at: NaiveDateTime,
    #[serde(with = "timestamp")]
    pub last_modified: NaiveDateTime,
}

impl Note {
    /// Creates a validated note stamped with `now` for both timestamps.
    pub fn new(
        id: NoteId,
        title: impl Into<String>,
        content: impl Into<String>,
        now: NaiveDateTime,
    ) -> Result<Self, NoteValidationError> {
        let title = title.into();
        let content = content.into();
        validate_note_fields(&title, &content)?;

        Ok(Self {
            id,
            title,
            content,
            created_at: now,
            last_modified: now,
        })
    }

    /// Replaces title and content and bumps `last_modified`.
    ///
    /// Leaves the note untouched when validation fails.
    pub fn revise(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
        now: NaiveDateTime,
    ) -> Result<(), NoteValidationError> {
        let title = title.into();
        let content = content.into();
        validate_note_fields(&title, &content)?;

        self.title = title;
        self.content = content;
        self.last_modified = now.max(self.created_at);
        Ok(())
    }
}

mod timestamp {
    use super::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &NaiveDateTime,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<NaiveDateTime, D::Error> {
        let text = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&text, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}
