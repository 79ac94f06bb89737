//! Table use-case services.
//!
//! # Responsibility
//! - Own the ordered set of people shown by the front end.
//! - Notify subscribers after every mutation so views stay in sync.

pub mod person_table;
pub mod seed;
