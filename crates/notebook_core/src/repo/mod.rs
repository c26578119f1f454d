//! Repository layer contracts and in-memory storage.
//!
//! # Responsibility
//! - Define the note data access contract consumed by services.
//! - Own id allocation and timestamp stamping.
//!
//! # Invariants
//! - Write paths validate fields before mutating state.
//! - Failed operations leave the repository unchanged.
//! - Repository APIs return semantic errors (`NotFound`, `Validation`).

pub mod note_repo;
