//! Row mapping and error mapping helpers for `SQLite` queries.

use chrono::{DateTime, NaiveDateTime, SubsecRound, Utc};
use extrack_core::{Exercise, RepositoryError, User};
use sqlx::Row;
use sqlx::error::ErrorKind;
use sqlx::sqlite::SqliteRow;
use tracing::debug;

/// Storage format for timestamps: fixed-width UTC with millisecond precision.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Shared SELECT column list for exercise queries.
pub const EXERCISE_SELECT_COLUMNS: &str = "id, user_id, description, duration, date";

/// Drop sub-millisecond precision so a value survives a storage round trip.
pub fn storage_precision(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.trunc_subsecs(3)
}

/// Format a timestamp for storage and comparison in SQL.
pub fn format_timestamp(dt: DateTime<Utc>) -> String {
    dt.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a stored timestamp.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, RepositoryError> {
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|e| RepositoryError::Serialization(format!("bad timestamp {raw:?}: {e}")))
}

/// Parse a database row into a User.
pub fn row_to_user(row: &SqliteRow) -> Result<User, RepositoryError> {
    Ok(User {
        id: row.try_get("id").map_err(map_sqlx_error)?,
        username: row.try_get("username").map_err(map_sqlx_error)?,
    })
}

/// Parse a database row into an Exercise.
pub fn row_to_exercise(row: &SqliteRow) -> Result<Exercise, RepositoryError> {
    let date: String = row.try_get("date").map_err(map_sqlx_error)?;

    Ok(Exercise {
        id: row.try_get("id").map_err(map_sqlx_error)?,
        user_id: row.try_get("user_id").map_err(map_sqlx_error)?,
        description: row.try_get("description").map_err(map_sqlx_error)?,
        duration: row.try_get("duration").map_err(map_sqlx_error)?,
        date: parse_timestamp(&date)?,
    })
}

/// Map a sqlx error into a `RepositoryError`.
///
/// Schema constraint violations become `Constraint` with a client-readable
/// message; decode failures become `Serialization`; everything else is
/// `Storage`.
pub fn map_sqlx_error(err: sqlx::Error) -> RepositoryError {
    match &err {
        sqlx::Error::Database(db) => {
            debug!(kind = ?db.kind(), message = db.message(), "sqlite operation failed");
            match db.kind() {
                ErrorKind::NotNullViolation | ErrorKind::CheckViolation => {
                    RepositoryError::Constraint(required_field_message(db.message()))
                }
                ErrorKind::ForeignKeyViolation => {
                    RepositoryError::Constraint("Referenced record does not exist.".to_string())
                }
                ErrorKind::UniqueViolation => RepositoryError::Constraint(db.message().to_string()),
                _ => RepositoryError::Storage(err.to_string()),
            }
        }
        sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) | sqlx::Error::ColumnNotFound(_) => {
            RepositoryError::Serialization(err.to_string())
        }
        _ => RepositoryError::Storage(err.to_string()),
    }
}

/// Turn an `SQLite` NOT NULL / CHECK failure into "`<field>` is required.".
///
/// Handles both `NOT NULL constraint failed: users.username` and named
/// checks such as `CHECK constraint failed: username_required`.
fn required_field_message(message: &str) -> String {
    let detail = message.rsplit_once(": ").map_or(message, |(_, detail)| detail);
    let column = detail.split(',').next().unwrap_or(detail).trim();
    let column = column.rsplit_once('.').map_or(column, |(_, column)| column);
    let field = column.strip_suffix("_required").unwrap_or(column);
    format!("{field} is required.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_timestamp_format_is_fixed_width() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 5, 7, 8, 9).unwrap();
        assert_eq!(format_timestamp(dt), "2024-01-05T07:08:09.000Z");
    }

    #[test]
    fn test_parse_timestamp() {
        let parsed = parse_timestamp("2024-01-05T07:08:09.250Z").unwrap();
        assert_eq!(format_timestamp(parsed), "2024-01-05T07:08:09.250Z");
        assert!(matches!(
            parse_timestamp("yesterday"),
            Err(RepositoryError::Serialization(_))
        ));
    }

    #[test]
    fn test_storage_precision_truncates_to_millis() {
        let dt = Utc.timestamp_opt(1_700_000_000, 123_456_789).unwrap();
        let truncated = storage_precision(dt);
        assert_eq!(truncated.timestamp_subsec_nanos(), 123_000_000);
        assert_eq!(parse_timestamp(&format_timestamp(truncated)).unwrap(), truncated);
    }

    #[test]
    fn test_required_field_message() {
        assert_eq!(
            required_field_message("NOT NULL constraint failed: users.username"),
            "username is required."
        );
        assert_eq!(
            required_field_message("CHECK constraint failed: description_required"),
            "description is required."
        );
    }
}
