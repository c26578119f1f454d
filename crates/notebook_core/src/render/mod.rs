//! Text projections of notes for presentation layers.

pub mod listing;
