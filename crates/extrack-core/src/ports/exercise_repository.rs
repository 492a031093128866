//! Exercise repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{Exercise, ExerciseFilter, NewExercise};

/// Repository for exercise entry persistence operations.
///
/// Implementations do not check that `user_id` refers to an existing user;
/// the caller is responsible for that.
#[async_trait]
pub trait ExerciseRepository: Send + Sync {
    /// Insert a new exercise entry.
    ///
    /// When `exercise.date` is `None` the entry is stamped with the current
    /// instant at write time.
    async fn insert(&self, exercise: &NewExercise) -> Result<Exercise, RepositoryError>;

    /// Find entries matching a filter, in insertion order.
    async fn find(&self, filter: &ExerciseFilter) -> Result<Vec<Exercise>, RepositoryError>;
}
