//! Exercise log query types.
//!
//! A [`LogQuery`] is the validated form of a log request. It is turned into an
//! [`ExerciseFilter`] for the repository according to an [`UpperBoundMode`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Exercise, User};

/// Whether the `to` bound of a log query applies on its own.
///
/// Historically the upper bound was only applied when a lower bound was also
/// present, so `?to=...` without `?from=...` returned the full log. That
/// behavior is kept as the default; `Independent` applies each bound by itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UpperBoundMode {
    /// `to` only takes effect when `from` is also given.
    #[default]
    RequiresLowerBound,
    /// `to` takes effect whenever it is given.
    Independent,
}

/// A validated log request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogQuery {
    pub user_id: String,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    /// Maximum number of entries to return. `None` means no cap.
    pub limit: Option<u32>,
}

impl LogQuery {
    /// Build the storage filter for this query.
    #[must_use]
    pub fn to_filter(&self, mode: UpperBoundMode) -> ExerciseFilter {
        let before = match mode {
            UpperBoundMode::RequiresLowerBound if self.from.is_none() => None,
            _ => self.to,
        };

        ExerciseFilter {
            after: self.from,
            before,
            limit: self.limit,
            ..ExerciseFilter::for_user(&self.user_id)
        }
    }
}

/// Filter passed to [`crate::ports::ExerciseRepository::find`].
///
/// Both bounds are exclusive. Results come back in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseFilter {
    pub user_id: String,
    pub after: Option<DateTime<Utc>>,
    pub before: Option<DateTime<Utc>>,
    pub limit: Option<u32>,
}

impl ExerciseFilter {
    /// Filter matching every entry owned by `user_id`.
    pub fn for_user(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            after: None,
            before: None,
            limit: None,
        }
    }
}

/// A user together with the entries selected by a log query.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseLog {
    pub user: User,
    pub entries: Vec<Exercise>,
}

impl ExerciseLog {
    /// Number of entries actually returned.
    pub fn count(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn query(from: bool, to: bool) -> LogQuery {
        LogQuery {
            user_id: "u1".to_string(),
            from: from.then(|| Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
            to: to.then(|| Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap()),
            limit: Some(5),
        }
    }

    #[test]
    fn test_upper_bound_ignored_without_lower_bound_by_default() {
        let filter = query(false, true).to_filter(UpperBoundMode::default());
        assert_eq!(filter.after, None);
        assert_eq!(filter.before, None);
        assert_eq!(filter.limit, Some(5));
    }

    #[test]
    fn test_upper_bound_applied_with_lower_bound() {
        let q = query(true, true);
        let filter = q.to_filter(UpperBoundMode::RequiresLowerBound);
        assert_eq!(filter.after, q.from);
        assert_eq!(filter.before, q.to);
    }

    #[test]
    fn test_independent_mode_applies_upper_bound_alone() {
        let q = query(false, true);
        let filter = q.to_filter(UpperBoundMode::Independent);
        assert_eq!(filter.after, None);
        assert_eq!(filter.before, q.to);
    }

    #[test]
    fn test_for_user_has_no_restrictions() {
        let filter = ExerciseFilter::for_user("abc");
        assert_eq!(filter.user_id, "abc");
        assert!(filter.after.is_none() && filter.before.is_none() && filter.limit.is_none());
    }
}
