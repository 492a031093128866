//! Response bodies.
//!
//! Dates use two textual forms: the add-exercise response renders a calendar
//! date (`Mon Jan 01 2024`), while log entries carry a full UTC timestamp with
//! millisecond precision (`2024-01-01T00:00:00.000Z`).

use chrono::{DateTime, SecondsFormat, Utc};
use extrack_core::{Exercise, ExerciseLog, LoggedExercise, User};
use serde::{Serialize, Serializer};

const CALENDAR_DATE_FORMAT: &str = "%a %b %d %Y";

/// Largest magnitude at which every integer is exactly representable in `f64`.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

pub fn calendar_date(date: &DateTime<Utc>) -> String {
    date.format(CALENDAR_DATE_FORMAT).to_string()
}

pub fn iso_timestamp(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Serialize whole-number durations as JSON integers (`30`, not `30.0`).
#[allow(clippy::trivially_copy_pass_by_ref, clippy::cast_possible_truncation)]
fn serialize_duration<S: Serializer>(duration: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if duration.fract() == 0.0 && duration.abs() <= MAX_EXACT_INTEGER {
        serializer.serialize_i64(*duration as i64)
    } else {
        serializer.serialize_f64(*duration)
    }
}

/// A user as returned by registration and listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}

/// Response of `POST /api/exercise/add`.
#[derive(Debug, Clone, Serialize)]
pub struct ExerciseAddedDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub description: String,
    #[serde(serialize_with = "serialize_duration")]
    pub duration: f64,
    pub date: String,
}

impl From<LoggedExercise> for ExerciseAddedDto {
    fn from(logged: LoggedExercise) -> Self {
        Self {
            id: logged.user.id,
            username: logged.user.username,
            description: logged.exercise.description,
            duration: logged.exercise.duration,
            date: calendar_date(&logged.exercise.date),
        }
    }
}

/// One line of an exercise log.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntryDto {
    pub description: String,
    #[serde(serialize_with = "serialize_duration")]
    pub duration: f64,
    pub date: String,
}

impl From<Exercise> for LogEntryDto {
    fn from(exercise: Exercise) -> Self {
        Self {
            description: exercise.description,
            duration: exercise.duration,
            date: iso_timestamp(&exercise.date),
        }
    }
}

/// Response of `GET /api/exercise/log`.
#[derive(Debug, Clone, Serialize)]
pub struct ExerciseLogDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub log: Vec<LogEntryDto>,
    pub count: usize,
}

impl From<ExerciseLog> for ExerciseLogDto {
    fn from(log: ExerciseLog) -> Self {
        let count = log.count();
        Self {
            id: log.user.id,
            username: log.user.username,
            log: log.entries.into_iter().map(LogEntryDto::from).collect(),
            count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn new_year() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_date_formats() {
        assert_eq!(calendar_date(&new_year()), "Mon Jan 01 2024");
        assert_eq!(iso_timestamp(&new_year()), "2024-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_log_entry_shape() {
        let entry = LogEntryDto::from(Exercise {
            id: "e1".to_string(),
            user_id: "u1".to_string(),
            description: "run".to_string(),
            duration: 30.0,
            date: new_year(),
        });

        assert_eq!(
            serde_json::to_value(entry).unwrap(),
            json!({"description": "run", "duration": 30, "date": "2024-01-01T00:00:00.000Z"})
        );
    }

    #[test]
    fn test_fractional_duration_stays_float() {
        let entry = LogEntryDto {
            description: "walk".to_string(),
            duration: 12.5,
            date: String::new(),
        };
        assert_eq!(serde_json::to_value(entry).unwrap()["duration"], json!(12.5));
    }
}
