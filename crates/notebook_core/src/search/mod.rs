//! In-memory note search.
//!
//! # Responsibility
//! - Parse free-text queries into lowercase terms.
//! - Filter note collections by all-terms, any-field substring matching.

pub mod query;
