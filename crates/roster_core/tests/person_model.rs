use chrono::{Duration, Local, NaiveDate};
use roster_core::{
    messages, validate_birth_date, AgeCategory, Person, PersonValidationError,
    SequenceIdGenerator,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn new_person_takes_next_id_and_keeps_fields() {
    let ids = SequenceIdGenerator::starting_at(3);
    let person = Person::new(&ids, "Ashwin", "Sharan", Some(date(2012, 10, 11)));

    assert_eq!(person.id(), 3);
    assert_eq!(person.first_name, "Ashwin");
    assert_eq!(person.last_name, "Sharan");
    assert_eq!(person.birth_date, Some(date(2012, 10, 11)));
    assert_eq!(ids.peek(), 4);
}

#[test]
fn blank_person_has_empty_fields() {
    let ids = SequenceIdGenerator::new();
    let person = Person::blank(&ids);

    assert_eq!(person.id(), 1);
    assert!(person.first_name.is_empty());
    assert!(person.last_name.is_empty());
    assert_eq!(person.birth_date, None);
}

#[test]
fn setters_change_fields_but_not_id() {
    let ids = SequenceIdGenerator::new();
    let mut person = Person::blank(&ids);
    person.set_first_name("Layne");
    person.set_last_name("Estes");
    person.set_birth_date(Some(date(2011, 12, 16)));

    assert_eq!(person.id(), 1);
    assert_eq!(
        person.to_string(),
        "[personId=1, firstName=Layne, lastName=Estes, birthDate=2011-12-16]"
    );
}

#[test]
fn text_rendering_matches_row_format() {
    let person = Person::with_id(3, "Ashwin", "Sharan", Some(date(2012, 10, 11)));
    assert_eq!(
        person.to_string(),
        "[personId=3, firstName=Ashwin, lastName=Sharan, birthDate=2012-10-11]"
    );
}

#[test]
fn whitespace_first_name_fails_with_first_name_message() {
    let person = Person::with_id(1, "   ", "Boyd", None);
    let mut errors = Vec::new();

    assert!(!person.validate(&mut errors));
    assert_eq!(errors, vec![PersonValidationError::EmptyFirstName]);
    assert_eq!(
        messages(&errors),
        vec!["First name must contain minimum one character.".to_string()]
    );
}

#[test]
fn validation_accumulates_every_failure_in_rule_order() {
    let today = date(2024, 1, 1);
    let person = Person::with_id(1, "", "\t", Some(date(2030, 1, 1)));
    let mut errors = Vec::new();

    assert!(!person.validate_on(today, &mut errors));
    assert_eq!(
        messages(&errors),
        vec![
            "First name must contain minimum one character.".to_string(),
            "Last name must contain minimum one character.".to_string(),
            "Birth date must not be in future.".to_string(),
        ]
    );
}

#[test]
fn validation_appends_to_existing_error_list() {
    let person = Person::with_id(1, "Mason", "", None);
    let mut errors = vec![PersonValidationError::EmptyFirstName];

    assert!(!person.validate(&mut errors));
    assert_eq!(
        errors,
        vec![
            PersonValidationError::EmptyFirstName,
            PersonValidationError::EmptyLastName,
        ]
    );
}

#[test]
fn future_birth_date_fails_against_wall_clock() {
    let tomorrow = Local::now().date_naive() + Duration::days(1);
    let person = Person::with_id(1, "Advik", "Sharan", Some(tomorrow));
    let mut errors = Vec::new();

    assert!(!person.validate(&mut errors));
    assert_eq!(messages(&errors), vec!["Birth date must not be in future.".to_string()]);
}

#[test]
fn absent_or_past_birth_date_passes() {
    let mut errors = Vec::new();
    assert!(validate_birth_date(None, &mut errors));
    assert!(validate_birth_date(Some(date(1980, 1, 10)), &mut errors));
    assert!(errors.is_empty());

    let person = Person::with_id(1, "Babalu", "Sharan", Some(date(1980, 1, 10)));
    assert!(person.validate(&mut errors));
    assert!(errors.is_empty());
}

#[test]
fn birth_date_equal_to_reference_day_passes() {
    let today = date(2024, 2, 29);
    let person = Person::with_id(1, "Leap", "Day", Some(today));
    let mut errors = Vec::new();

    assert!(person.validate_on(today, &mut errors));
    assert!(errors.is_empty());
}

// Two-record validation is ambiguous in the Java program this table comes
// from: its `isValidPerson(p, errors)` checked `p`'s names but the receiver's
// birth date. This crate deliberately validates every field of the record
// passed in, and `validate_record` has no receiver to borrow a date from.
#[test]
fn validate_record_checks_birth_date_of_the_passed_record() {
    let tomorrow = Local::now().date_naive() + Duration::days(1);
    let future_born = Person::with_id(1, "Ashwin", "Sharan", Some(tomorrow));
    let mut errors = Vec::new();

    assert!(!Person::validate_record(&future_born, &mut errors));
    assert_eq!(errors.len(), 1);
    assert!(matches!(
        errors[0],
        PersonValidationError::BirthDateInFuture { .. }
    ));
}

#[test]
fn save_agrees_with_validate_and_never_mutates() {
    let today = date(2024, 6, 1);
    let valid = Person::with_id(4, "Mason", "Boyd", Some(date(2003, 4, 20)));
    let invalid = Person::with_id(5, "", "Boyd", Some(date(2003, 4, 20)));

    for person in [valid, invalid] {
        let before = person.clone();
        let mut validate_errors = Vec::new();
        let mut save_errors = Vec::new();

        let is_valid = person.validate_on(today, &mut validate_errors);
        let saved = person.save_on(today, &mut save_errors);

        assert_eq!(saved, is_valid);
        assert_eq!(save_errors, validate_errors);
        assert_eq!(person, before);
    }
}

#[test]
fn save_reports_errors_for_invalid_record() {
    let person = Person::with_id(1, "", "", None);
    let mut errors = Vec::new();

    assert!(!person.save(&mut errors));
    assert_eq!(errors.len(), 2);
}

#[test]
fn age_category_uses_reference_date() {
    let person = Person::with_id(1, "Ashwin", "Sharan", Some(date(2012, 10, 11)));
    assert_eq!(person.age_category_on(date(2024, 10, 10)), AgeCategory::Child);
    assert_eq!(person.age_category_on(date(2025, 10, 11)), AgeCategory::Teen);
    assert_eq!(AgeCategory::Teen.to_string(), "teen");
}

#[test]
fn person_serialization_uses_expected_wire_fields() {
    let person = Person::with_id(7, "Layne", "Estes", Some(date(2011, 12, 16)));

    let json = serde_json::to_value(&person).unwrap();
    assert_eq!(json["person_id"], 7);
    assert_eq!(json["first_name"], "Layne");
    assert_eq!(json["last_name"], "Estes");
    assert_eq!(json["birth_date"], "2011-12-16");

    let decoded: Person = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, person);
}

#[test]
fn person_without_birth_date_serializes_null() {
    let person = Person::with_id(8, "Ada", "Lovelace", None);
    let json = serde_json::to_value(&person).unwrap();
    assert!(json["birth_date"].is_null());
    assert_eq!(
        serde_json::to_value(AgeCategory::Senior).unwrap(),
        serde_json::json!("senior")
    );
}
