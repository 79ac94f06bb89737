//! Default table contents.
//!
//! Used for the initial population and for every restore.

use crate::model::id::IdGenerator;
use crate::model::person::Person;
use chrono::NaiveDate;

const SEED_ROWS: [(&str, &str, (i32, u32, u32)); 5] = [
    ("Ashwin", "Sharan", (2012, 10, 11)),
    ("Advik", "Sharan", (2012, 10, 11)),
    ("Layne", "Estes", (2011, 12, 16)),
    ("Mason", "Boyd", (2003, 4, 20)),
    ("Babalu", "Sharan", (1980, 1, 10)),
];

/// Number of rows produced by [`seed_people`].
pub const SEED_LEN: usize = SEED_ROWS.len();

/// Builds the five default people in their fixed order.
///
/// Every call allocates fresh IDs from `ids`.
pub fn seed_people(ids: &impl IdGenerator) -> Vec<Person> {
    SEED_ROWS
        .iter()
        .map(|&(first_name, last_name, (year, month, day))| {
            Person::new(
                ids,
                first_name,
                last_name,
                NaiveDate::from_ymd_opt(year, month, day),
            )
        })
        .collect()
}
