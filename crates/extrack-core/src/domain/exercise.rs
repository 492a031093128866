//! Exercise entry domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::User;

/// A persisted exercise entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub user_id: String,
    pub description: String,
    /// Duration in minutes.
    pub duration: f64,
    /// When the exercise took place.
    pub date: DateTime<Utc>,
}

/// Data for appending a new exercise entry.
///
/// `date` is `None` when the caller did not supply one; the repository
/// assigns the current instant at write time in that case.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExercise {
    pub user_id: String,
    pub description: String,
    pub duration: f64,
    pub date: Option<DateTime<Utc>>,
}

/// Result of a successful append: the stored entry and the user it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggedExercise {
    pub user: User,
    pub exercise: Exercise,
}
