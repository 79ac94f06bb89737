//! Domain model for the people table.
//!
//! # Responsibility
//! - Define the person record and its validation rules.
//! - Define how person identities are allocated.
//!
//! # Invariants
//! - Every person is identified by an ID allocated once at creation.
//! - Validation reports failures as values, never as panics.

pub mod id;
pub mod person;
