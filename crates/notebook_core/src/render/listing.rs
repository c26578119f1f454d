//! One-line note summaries.
//!
//! Line shape:
//! `Note {id}: {title} (Created: {created_at}, Last Modified: {last_modified})`

use crate::model::note::{Note, TIMESTAMP_FORMAT};
use crate::model::NoteMap;
use chrono::NaiveDateTime;
use std::fmt::Write;

/// Formats a timestamp as `YYYY-MM-DD HH:MM:SS`.
pub fn format_timestamp(value: NaiveDateTime) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}

/// Renders the listing line for one note, without a trailing newline.
pub fn note_summary(note: &Note) -> String {
    format!(
        "Note {}: {} (Created: {}, Last Modified: {})",
        note.id,
        note.title,
        format_timestamp(note.created_at),
        format_timestamp(note.last_modified)
    )
}

/// Renders every note in id order, one newline-terminated line each.
pub fn render_listing(notes: &NoteMap) -> String {
    let mut out = String::new();
    for note in notes.values() {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{}", note_summary(note));
    }
    out
}
