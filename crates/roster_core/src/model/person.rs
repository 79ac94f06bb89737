//! Person domain model.
//!
//! # Responsibility
//! - Define the record rendered as one row of the people table.
//! - Own the field validation rules and the stubbed save action.
//!
//! # Invariants
//! - `id` is assigned once at construction and never changes.
//! - Validation never short-circuits: every failing rule adds one error.
//! - Validation and save never mutate the record.

use crate::model::id::{IdGenerator, PersonId};
use chrono::{Local, NaiveDate};
use log::info;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

const BABY_MAX_YEARS: u32 = 2;
const CHILD_MAX_YEARS: u32 = 13;
const TEEN_MAX_YEARS: u32 = 19;
const ADULT_MAX_YEARS: u32 = 50;

/// One rule violated by a person record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonValidationError {
    /// First name is empty or whitespace only.
    EmptyFirstName,
    /// Last name is empty or whitespace only.
    EmptyLastName,
    /// Birth date lies strictly after the reference date.
    BirthDateInFuture {
        birth_date: NaiveDate,
        today: NaiveDate,
    },
}

impl Display for PersonValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyFirstName => write!(f, "First name must contain minimum one character."),
            Self::EmptyLastName => write!(f, "Last name must contain minimum one character."),
            Self::BirthDateInFuture { .. } => write!(f, "Birth date must not be in future."),
        }
    }
}

impl Error for PersonValidationError {}

/// Renders an error list as the user-facing messages, in order.
pub fn messages(errors: &[PersonValidationError]) -> Vec<String> {
    errors.iter().map(ToString::to_string).collect()
}

/// Coarse life stage derived from the birth date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeCategory {
    /// Under 2 years.
    Baby,
    /// 2 to 12 years.
    Child,
    /// 13 to 19 years.
    Teen,
    /// 20 to 50 years.
    Adult,
    /// Over 50 years.
    Senior,
    /// No birth date, or a birth date after the reference date.
    Unknown,
}

impl AgeCategory {
    /// Stable lowercase label, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Baby => "baby",
            Self::Child => "child",
            Self::Teen => "teen",
            Self::Adult => "adult",
            Self::Senior => "senior",
            Self::Unknown => "unknown",
        }
    }
}

impl Display for AgeCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Person row shown in the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    #[serde(rename = "person_id")]
    id: PersonId,
    /// May be empty until validated.
    pub first_name: String,
    /// May be empty until validated.
    pub last_name: String,
    /// Optional; must not be in the future once validated.
    pub birth_date: Option<NaiveDate>,
}

impl Person {
    /// Creates a person with a freshly allocated ID.
    pub fn new(
        ids: &impl IdGenerator,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birth_date: Option<NaiveDate>,
    ) -> Self {
        Self::with_id(ids.next_id(), first_name, last_name, birth_date)
    }

    /// Creates a person with empty names and no birth date.
    pub fn blank(ids: &impl IdGenerator) -> Self {
        Self::new(ids, "", "", None)
    }

    /// Creates a person with a caller-provided ID.
    ///
    /// Used where identity already exists, e.g. records decoded from JSON.
    pub fn with_id(
        id: PersonId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birth_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            birth_date,
        }
    }

    pub fn id(&self) -> PersonId {
        self.id
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) {
        self.first_name = first_name.into();
    }

    pub fn set_last_name(&mut self, last_name: impl Into<String>) {
        self.last_name = last_name.into();
    }

    pub fn set_birth_date(&mut self, birth_date: Option<NaiveDate>) {
        self.birth_date = birth_date;
    }

    /// Validates this record against today's local date.
    ///
    /// Appends one error per failing rule and returns `true` only when all
    /// rules pass.
    pub fn validate(&self, errors: &mut Vec<PersonValidationError>) -> bool {
        self.validate_on(today(), errors)
    }

    /// Same as [`Person::validate`] with an explicit reference date.
    pub fn validate_on(&self, today: NaiveDate, errors: &mut Vec<PersonValidationError>) -> bool {
        let mut is_valid = true;
        if self.first_name.trim().is_empty() {
            errors.push(PersonValidationError::EmptyFirstName);
            is_valid = false;
        }
        if self.last_name.trim().is_empty() {
            errors.push(PersonValidationError::EmptyLastName);
            is_valid = false;
        }
        if !validate_birth_date_on(self.birth_date, today, errors) {
            is_valid = false;
        }
        is_valid
    }

    /// Validates every field of `record`, including its own birth date.
    pub fn validate_record(record: &Person, errors: &mut Vec<PersonValidationError>) -> bool {
        record.validate(errors)
    }

    /// Saves the record when it is valid.
    ///
    /// There is no storage behind this; a successful save is reported as a
    /// log event carrying the record's text form.
    pub fn save(&self, errors: &mut Vec<PersonValidationError>) -> bool {
        self.save_on(today(), errors)
    }

    /// Same as [`Person::save`] with an explicit reference date.
    pub fn save_on(&self, today: NaiveDate, errors: &mut Vec<PersonValidationError>) -> bool {
        if !self.validate_on(today, errors) {
            return false;
        }
        info!(
            "event=person_saved module=model status=ok person_id={} record={}",
            self.id, self
        );
        true
    }

    pub fn age_category(&self) -> AgeCategory {
        self.age_category_on(today())
    }

    /// Classifies the person by whole years elapsed up to `today`.
    pub fn age_category_on(&self, today: NaiveDate) -> AgeCategory {
        let Some(years) = self
            .birth_date
            .and_then(|birth_date| today.years_since(birth_date))
        else {
            return AgeCategory::Unknown;
        };

        match years {
            y if y < BABY_MAX_YEARS => AgeCategory::Baby,
            y if y < CHILD_MAX_YEARS => AgeCategory::Child,
            y if y <= TEEN_MAX_YEARS => AgeCategory::Teen,
            y if y <= ADULT_MAX_YEARS => AgeCategory::Adult,
            _ => AgeCategory::Senior,
        }
    }
}

impl Display for Person {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[personId={}, firstName={}, lastName={}, birthDate=",
            self.id, self.first_name, self.last_name
        )?;
        match self.birth_date {
            Some(date) => write!(f, "{date}]"),
            None => write!(f, "none]"),
        }
    }
}

/// Checks a birth date against today's local date.
///
/// An absent date is valid. A future date appends
/// [`PersonValidationError::BirthDateInFuture`] and returns `false`.
pub fn validate_birth_date(
    birth_date: Option<NaiveDate>,
    errors: &mut Vec<PersonValidationError>,
) -> bool {
    validate_birth_date_on(birth_date, today(), errors)
}

/// Same as [`validate_birth_date`] with an explicit reference date.
pub fn validate_birth_date_on(
    birth_date: Option<NaiveDate>,
    today: NaiveDate,
    errors: &mut Vec<PersonValidationError>,
) -> bool {
    match birth_date {
        Some(birth_date) if birth_date > today => {
            errors.push(PersonValidationError::BirthDateInFuture { birth_date, today });
            false
        }
        _ => true,
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
