//! Validation and coercion of raw request input.
//!
//! Raw inputs carry every field as an optional string, exactly as a client
//! sent it. The functions here check presence, coerce strings to numbers and
//! dates, and return the first failure as a [`CoreError::Validation`].
//!
//! An empty string counts as absent for every field.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};

use crate::domain::{LogQuery, NewExercise, NewUser};
use crate::ports::CoreError;

pub const USERNAME_NOT_PROVIDED: &str = "Username not provided.";
pub const MISSING_REQUIRED_FIELDS: &str = "Missing required field(s).";
pub const DURATION_NOT_A_NUMBER: &str = "Duration should be a number.";
pub const USER_NOT_FOUND: &str = "Unable to find user.";
pub const MISSING_USER_ID: &str = "Missing userId.";
pub const INVALID_DATE_FORMAT: &str = "Invalid Date Format";
pub const LIMIT_NOT_A_NUMBER: &str = "limit is not a number.";

/// Largest accepted year.
const MAX_YEAR: i32 = 9999;

/// Naive timestamp layouts accepted after RFC 3339 and plain dates fail.
/// Interpreted as UTC.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Raw input for user registration.
#[derive(Debug, Clone, Default)]
pub struct NewUserInput {
    pub username: Option<String>,
}

/// Raw input for appending an exercise entry.
#[derive(Debug, Clone, Default)]
pub struct NewExerciseInput {
    pub user_id: Option<String>,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub date: Option<String>,
}

/// Raw input for a log query.
#[derive(Debug, Clone, Default)]
pub struct LogRequest {
    pub user_id: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

fn present(field: Option<&String>) -> Option<&str> {
    field.map(String::as_str).filter(|s| !s.is_empty())
}

fn invalid(message: &str) -> CoreError {
    CoreError::Validation(message.to_string())
}

/// Validate a registration request.
pub fn validate_new_user(input: &NewUserInput) -> Result<NewUser, CoreError> {
    let username = present(input.username.as_ref()).ok_or_else(|| invalid(USERNAME_NOT_PROVIDED))?;

    Ok(NewUser {
        username: username.to_string(),
    })
}

/// Validate an append request, except for its date.
///
/// Checks run in order: required fields, duration. The returned entry has
/// no date; once the user is known to exist, [`validate_exercise_date`]
/// supplies it.
pub fn validate_new_exercise(input: &NewExerciseInput) -> Result<NewExercise, CoreError> {
    let (Some(user_id), Some(description), Some(duration)) = (
        present(input.user_id.as_ref()),
        present(input.description.as_ref()),
        present(input.duration.as_ref()),
    ) else {
        return Err(invalid(MISSING_REQUIRED_FIELDS));
    };

    let duration = parse_duration(duration).ok_or_else(|| invalid(DURATION_NOT_A_NUMBER))?;

    Ok(NewExercise {
        user_id: user_id.to_string(),
        description: description.to_string(),
        duration,
        date: None,
    })
}

/// Parse the optional date of an append request.
pub fn validate_exercise_date(input: &NewExerciseInput) -> Result<Option<DateTime<Utc>>, CoreError> {
    parse_optional_bound(input.date.as_ref())
}

/// Validate a log request.
///
/// Checks run in order: user id, both date bounds, limit.
pub fn validate_log_request(input: &LogRequest) -> Result<LogQuery, CoreError> {
    let user_id = present(input.user_id.as_ref()).ok_or_else(|| invalid(MISSING_USER_ID))?;

    let from = parse_optional_bound(input.from.as_ref())?;
    let to = parse_optional_bound(input.to.as_ref())?;

    let limit = match present(input.limit.as_ref()) {
        Some(raw) => parse_limit(raw).ok_or_else(|| invalid(LIMIT_NOT_A_NUMBER))?,
        None => None,
    };

    Ok(LogQuery {
        user_id: user_id.to_string(),
        from,
        to,
        limit,
    })
}

fn parse_optional_bound(raw: Option<&String>) -> Result<Option<DateTime<Utc>>, CoreError> {
    present(raw)
        .map(|raw| parse_date(raw).ok_or_else(|| invalid(INVALID_DATE_FORMAT)))
        .transpose()
}

/// Parse a duration in minutes.
///
/// Surrounding whitespace is ignored. Returns `None` for anything that is
/// not a finite number.
pub fn parse_duration(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Parse a calendar date or timestamp.
///
/// Accepts RFC 3339 timestamps, `YYYY-MM-DD` (midnight UTC) and naive
/// timestamps (UTC). The UTC year must lie in `0..=9999`, so every accepted
/// date formats as fixed-width text.
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    parse_any_date(raw.trim()).filter(|date| (0..=MAX_YEAR).contains(&date.year()))
}

fn parse_any_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }

    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
}

/// Parse a result-count cap.
///
/// Returns `None` when `raw` is not a number. Otherwise the value is
/// truncated toward zero; zero means no cap and a negative value caps at its
/// absolute value.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn parse_limit(raw: &str) -> Option<Option<u32>> {
    let value = parse_duration(raw)?;
    let cap = value.trunc().abs().min(f64::from(u32::MAX)) as u32;
    Some((cap > 0).then_some(cap))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn exercise_input(
        user_id: Option<&str>,
        description: Option<&str>,
        duration: Option<&str>,
        date: Option<&str>,
    ) -> NewExerciseInput {
        NewExerciseInput {
            user_id: user_id.map(str::to_string),
            description: description.map(str::to_string),
            duration: duration.map(str::to_string),
            date: date.map(str::to_string),
        }
    }

    fn validation_message(err: CoreError) -> String {
        match err {
            CoreError::Validation(msg) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_new_user_requires_username() {
        let err = validate_new_user(&NewUserInput::default()).unwrap_err();
        assert_eq!(validation_message(err), USERNAME_NOT_PROVIDED);

        let err = validate_new_user(&NewUserInput {
            username: Some(String::new()),
        })
        .unwrap_err();
        assert_eq!(validation_message(err), USERNAME_NOT_PROVIDED);
    }

    #[test]
    fn test_new_user_keeps_name_verbatim() {
        let user = validate_new_user(&NewUserInput {
            username: Some("alice".to_string()),
        })
        .unwrap();
        assert_eq!(user.username, "alice");
    }

    #[test]
    fn test_new_exercise_missing_fields() {
        let cases = [
            exercise_input(None, Some("run"), Some("30"), None),
            exercise_input(Some("u1"), None, Some("30"), None),
            exercise_input(Some("u1"), Some("run"), None, None),
            exercise_input(Some("u1"), Some(""), Some("30"), None),
        ];

        for input in cases {
            let err = validate_new_exercise(&input).unwrap_err();
            assert_eq!(validation_message(err), MISSING_REQUIRED_FIELDS);
        }
    }

    #[test]
    fn test_missing_fields_reported_before_bad_duration() {
        let input = exercise_input(None, Some("run"), Some("abc"), None);
        let err = validate_new_exercise(&input).unwrap_err();
        assert_eq!(validation_message(err), MISSING_REQUIRED_FIELDS);
    }

    #[test]
    fn test_new_exercise_rejects_non_numeric_duration() {
        let input = exercise_input(Some("u1"), Some("run"), Some("abc"), None);
        let err = validate_new_exercise(&input).unwrap_err();
        assert_eq!(validation_message(err), DURATION_NOT_A_NUMBER);
    }

    #[test]
    fn test_new_exercise_coerces_duration_and_defaults_date() {
        let input = exercise_input(Some("u1"), Some("run"), Some("30"), None);
        let exercise = validate_new_exercise(&input).unwrap();
        assert!((exercise.duration - 30.0).abs() < f64::EPSILON);
        assert_eq!(exercise.date, None);
        assert_eq!(exercise.user_id, "u1");
    }

    #[test]
    fn test_new_exercise_accepts_zero_and_negative_durations() {
        for raw in ["0", "-15"] {
            let input = exercise_input(Some("u1"), Some("run"), Some(raw), None);
            assert!(validate_new_exercise(&input).is_ok(), "{raw} rejected");
        }
    }

    #[test]
    fn test_new_exercise_leaves_date_for_later() {
        let input = exercise_input(Some("u1"), Some("run"), Some("30"), Some("yesterday"));
        assert_eq!(validate_new_exercise(&input).unwrap().date, None);
    }

    #[test]
    fn test_exercise_date_empty_is_absent() {
        let input = exercise_input(Some("u1"), Some("run"), Some("30"), Some(""));
        assert_eq!(validate_exercise_date(&input).unwrap(), None);
    }

    #[test]
    fn test_exercise_date_rejects_bad_date() {
        let input = exercise_input(Some("u1"), Some("run"), Some("30"), Some("yesterday"));
        let err = validate_exercise_date(&input).unwrap_err();
        assert_eq!(validation_message(err), INVALID_DATE_FORMAT);
    }

    #[test]
    fn test_exercise_date_parses_date() {
        let input = exercise_input(Some("u1"), Some("run"), Some("30"), Some("2024-03-05"));
        assert_eq!(
            validate_exercise_date(&input).unwrap(),
            Some(Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("30"), Some(30.0));
        assert_eq!(parse_duration(" 12.5 "), Some(12.5));
        assert_eq!(parse_duration("abc"), None);
        assert_eq!(parse_duration("30min"), None);
        assert_eq!(parse_duration("NaN"), None);
        assert_eq!(parse_duration("inf"), None);
    }

    #[test]
    fn test_parse_date_formats() {
        let midnight = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        assert_eq!(parse_date("2024-01-15"), Some(midnight));
        assert_eq!(
            parse_date("2024-01-15T10:30:00Z"),
            Some(Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap())
        );
        assert_eq!(
            parse_date("2024-01-15T12:30:00+02:00"),
            Some(Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap())
        );
        assert_eq!(
            parse_date("2024-01-15T10:30"),
            Some(Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap())
        );
    }

    #[test]
    fn test_parse_date_rejects_invalid() {
        assert_eq!(parse_date("not a date"), None);
        assert_eq!(parse_date("2024-02-30"), None);
        assert_eq!(parse_date("2024-13-01"), None);
    }

    #[test]
    fn test_parse_date_rejects_years_beyond_four_digits() {
        assert_eq!(parse_date("+10000-01-01"), None);
        assert_eq!(parse_date("10000-01-01T00:00:00Z"), None);
        assert_eq!(parse_date("-0001-01-01"), None);
        assert_eq!(parse_date("9999-12-31T23:00:00-05:00"), None);
        assert_eq!(
            parse_date("9999-12-31"),
            Some(Utc.with_ymd_and_hms(9999, 12, 31, 0, 0, 0).unwrap())
        );
        assert_eq!(
            parse_date("0000-01-01"),
            Some(Utc.with_ymd_and_hms(0, 1, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_parse_limit() {
        assert_eq!(parse_limit("2"), Some(Some(2)));
        assert_eq!(parse_limit("2.9"), Some(Some(2)));
        assert_eq!(parse_limit("-3"), Some(Some(3)));
        assert_eq!(parse_limit("0"), Some(None));
        assert_eq!(parse_limit("ten"), None);
    }

    #[test]
    fn test_log_request_requires_user_id() {
        let err = validate_log_request(&LogRequest::default()).unwrap_err();
        assert_eq!(validation_message(err), MISSING_USER_ID);
    }

    #[test]
    fn test_log_request_validation_order() {
        let request = LogRequest {
            user_id: Some("u1".to_string()),
            from: Some("2024-01-01".to_string()),
            to: Some("garbage".to_string()),
            limit: Some("many".to_string()),
        };
        let err = validate_log_request(&request).unwrap_err();
        assert_eq!(validation_message(err), INVALID_DATE_FORMAT);

        let request = LogRequest {
            to: None,
            ..request
        };
        let err = validate_log_request(&request).unwrap_err();
        assert_eq!(validation_message(err), LIMIT_NOT_A_NUMBER);
    }

    #[test]
    fn test_log_request_bounds_and_limit() {
        let request = LogRequest {
            user_id: Some("u1".to_string()),
            from: Some("2024-01-01".to_string()),
            to: Some("2024-02-01".to_string()),
            limit: Some("2".to_string()),
        };
        let query = validate_log_request(&request).unwrap();
        assert_eq!(query.user_id, "u1");
        assert_eq!(query.from, Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()));
        assert_eq!(query.to, Some(Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap()));
        assert_eq!(query.limit, Some(2));
    }

    #[test]
    fn test_log_request_empty_optionals_are_absent() {
        let request = LogRequest {
            user_id: Some("u1".to_string()),
            from: Some(String::new()),
            to: Some(String::new()),
            limit: Some(String::new()),
        };
        let query = validate_log_request(&request).unwrap();
        assert_eq!(query.from, None);
        assert_eq!(query.to, None);
        assert_eq!(query.limit, None);
    }
}
