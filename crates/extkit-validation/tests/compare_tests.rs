// Rust guideline compliant 2026-02-09

//! Unit tests for the date comparison validators.
//!
//! These tests cover every supported date representation, absent values,
//! strictness, custom messages and unsupported value types.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use extkit_core::{Error, FieldValue};
use extkit_validation::{MustBeAfter, MustBeBefore, ValidationContext, ValidationResult};

struct DateTimeModel {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

struct NullableModel {
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
}

struct OffsetModel {
    start: DateTime<chrono::FixedOffset>,
    end: DateTime<chrono::FixedOffset>,
}

struct DateOnlyModel {
    start: NaiveDate,
    end: NaiveDate,
}

struct TextModel {
    start: String,
    end: String,
}

fn datetime(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .expect("valid date")
}

fn date_model(start: (i32, u32, u32), end: (i32, u32, u32)) -> DateTimeModel {
    DateTimeModel {
        start: datetime(start.0, start.1, start.2),
        end: datetime(end.0, end.1, end.2),
    }
}

fn before_end() -> MustBeBefore<DateTimeModel> {
    MustBeBefore::new("EndDate", |m: &DateTimeModel| Some(m.end.into()))
}

fn after_start() -> MustBeAfter<DateTimeModel> {
    MustBeAfter::new("StartDate", |m: &DateTimeModel| Some(m.start.into()))
}

fn start_context() -> ValidationContext {
    ValidationContext::for_member("StartDate")
}

fn end_context() -> ValidationContext {
    ValidationContext::for_member("EndDate")
}

#[test]
fn test_before_when_start_is_before_end() {
    let model = date_model((2023, 1, 1), (2023, 1, 2));
    let result = before_end()
        .validate(Some(&model.start.into()), &model, &start_context())
        .expect("dates should compare");
    assert_eq!(result, ValidationResult::Success);
}

#[test]
fn test_before_when_start_is_after_end() {
    let model = date_model((2023, 1, 2), (2023, 1, 1));
    let result = before_end()
        .validate(Some(&model.start.into()), &model, &start_context())
        .expect("dates should compare");
    assert_eq!(
        result.error_message(),
        Some("StartDate must be before EndDate.")
    );
}

#[test]
fn test_before_when_equal_fails() {
    let model = date_model((2023, 1, 1), (2023, 1, 1));
    let result = before_end()
        .validate(Some(&model.start.into()), &model, &start_context())
        .expect("dates should compare");
    assert_eq!(
        result.error_message(),
        Some("StartDate must be before EndDate.")
    );
}

#[test]
fn test_after_when_end_is_after_start() {
    let model = date_model((2023, 1, 1), (2023, 1, 2));
    let result = after_start()
        .validate(Some(&model.end.into()), &model, &end_context())
        .expect("dates should compare");
    assert!(result.is_success());
}

#[test]
fn test_after_when_end_is_before_start() {
    let model = date_model((2023, 1, 2), (2023, 1, 1));
    let result = after_start()
        .validate(Some(&model.end.into()), &model, &end_context())
        .expect("dates should compare");
    assert_eq!(result.error_message(), Some("EndDate must be after StartDate."));
}

#[test]
fn test_after_when_equal_fails() {
    let model = date_model((2023, 1, 1), (2023, 1, 1));
    let result = after_start()
        .validate(Some(&model.end.into()), &model, &end_context())
        .expect("dates should compare");
    assert_eq!(result.error_message(), Some("EndDate must be after StartDate."));
}

#[test]
fn test_custom_error_message() {
    let model = date_model((2023, 1, 2), (2023, 1, 1));
    let before = before_end().with_error_message("Custom error message");
    let result = before
        .validate(Some(&model.start.into()), &model, &start_context())
        .expect("dates should compare");
    assert_eq!(result.error_message(), Some("Custom error message"));

    let after = after_start().with_error_message("Custom error message");
    let result = after
        .validate(Some(&model.end.into()), &model, &end_context())
        .expect("dates should compare");
    assert_eq!(result.error_message(), Some("Custom error message"));
}

#[test]
fn test_both_absent_is_success() {
    let model = NullableModel {
        start: None,
        end: None,
    };
    let before = MustBeBefore::new("EndDate", |m: &NullableModel| m.end.map(FieldValue::from));
    let result = before
        .validate(model.start.map(FieldValue::from).as_ref(), &model, &start_context())
        .expect("absent values should not error");
    assert!(result.is_success());

    let after = MustBeAfter::new("StartDate", |m: &NullableModel| m.start.map(FieldValue::from));
    let result = after
        .validate(model.end.map(FieldValue::from).as_ref(), &model, &end_context())
        .expect("absent values should not error");
    assert!(result.is_success());
}

#[test]
fn test_one_absent_is_failure() {
    let model = NullableModel {
        start: None,
        end: Some(datetime(2023, 1, 1)),
    };
    let before = MustBeBefore::new("EndDate", |m: &NullableModel| m.end.map(FieldValue::from));
    let result = before
        .validate(model.start.map(FieldValue::from).as_ref(), &model, &start_context())
        .expect("absent values should not error");
    assert_eq!(
        result.error_message(),
        Some("StartDate must be before EndDate.")
    );

    let model = NullableModel {
        start: Some(datetime(2023, 1, 1)),
        end: None,
    };
    let after = MustBeAfter::new("StartDate", |m: &NullableModel| m.start.map(FieldValue::from));
    let result = after
        .validate(model.end.map(FieldValue::from).as_ref(), &model, &end_context())
        .expect("absent values should not error");
    assert_eq!(result.error_message(), Some("EndDate must be after StartDate."));
}

#[test]
fn test_offset_dates() {
    let model = OffsetModel {
        start: DateTime::parse_from_rfc3339("2023-01-01T00:00:00+00:00").expect("valid date"),
        end: DateTime::parse_from_rfc3339("2023-01-02T00:00:00+00:00").expect("valid date"),
    };
    let before = MustBeBefore::new("EndDate", |m: &OffsetModel| Some(m.end.into()));
    let result = before
        .validate(Some(&model.start.into()), &model, &start_context())
        .expect("dates should compare");
    assert!(result.is_success());
}

#[test]
fn test_offset_dates_compare_as_instants() {
    // 10:00 at +02:00 is 08:00 UTC, before 09:00 UTC.
    let model = OffsetModel {
        start: DateTime::parse_from_rfc3339("2023-01-01T10:00:00+02:00").expect("valid date"),
        end: DateTime::parse_from_rfc3339("2023-01-01T09:00:00+00:00").expect("valid date"),
    };
    let before = MustBeBefore::new("EndDate", |m: &OffsetModel| Some(m.end.into()));
    let result = before
        .validate(Some(&model.start.into()), &model, &start_context())
        .expect("dates should compare");
    assert!(result.is_success());
}

#[test]
fn test_date_only_values() {
    let model = DateOnlyModel {
        start: NaiveDate::from_ymd_opt(2023, 1, 1).expect("valid date"),
        end: NaiveDate::from_ymd_opt(2023, 1, 2).expect("valid date"),
    };
    let after = MustBeAfter::new("StartDate", |m: &DateOnlyModel| Some(m.start.into()));
    let result = after
        .validate(Some(&model.end.into()), &model, &end_context())
        .expect("dates should compare");
    assert!(result.is_success());
}

#[test]
fn test_date_only_compares_as_midnight() {
    let model = DateTimeModel {
        start: datetime(2023, 1, 1),
        end: datetime(2023, 1, 1),
    };
    let before = before_end();
    let date_only = FieldValue::from(NaiveDate::from_ymd_opt(2023, 1, 1).expect("valid date"));

    // Midnight of the same day is not strictly before midnight.
    let result = before
        .validate(Some(&date_only), &model, &start_context())
        .expect("dates should compare");
    assert!(!result.is_success());

    let later = DateTimeModel {
        start: datetime(2023, 1, 1),
        end: datetime(2023, 1, 1) + chrono::Duration::seconds(1),
    };
    let result = before
        .validate(Some(&date_only), &later, &start_context())
        .expect("dates should compare");
    assert!(result.is_success());
}

#[test]
fn test_unsupported_type_is_an_error() {
    let model = TextModel {
        start: "2023-01-01".to_string(),
        end: "2023-01-02".to_string(),
    };
    let before = MustBeBefore::new("EndDate", |m: &TextModel| Some(m.end.as_str().into()));
    let err = before
        .validate(Some(&model.start.as_str().into()), &model, &start_context())
        .expect_err("text is not a date");
    assert!(matches!(err, Error::UnsupportedDateType(_)));
    assert_eq!(err.to_string(), "Unsupported date type: String");
}

#[test]
fn test_failure_lists_member() {
    let model = date_model((2023, 1, 2), (2023, 1, 1));
    let result = before_end()
        .validate(Some(&model.start.into()), &model, &start_context())
        .expect("dates should compare");
    let failure = result.failure().expect("should fail");
    assert_eq!(failure.member_names, vec!["StartDate".to_string()]);
}
