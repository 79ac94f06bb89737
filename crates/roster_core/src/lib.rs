//! Core domain logic for the Roster people table.
//! This crate is the single source of truth for record and table rules;
//! front ends only collect input and render rows.

pub mod logging;
pub mod model;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::id::{process_ids, IdGenerator, PersonId, SequenceIdGenerator, FIRST_PERSON_ID};
pub use model::person::{
    messages, validate_birth_date, validate_birth_date_on, AgeCategory, Person,
    PersonValidationError,
};
pub use service::person_table::{
    ChangeListener, DeleteOutcome, PersonTable, SubscriptionId, TableChange,
};
pub use service::seed::{seed_people, SEED_LEN};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
