//! `SQLite` implementation of the `ExerciseRepository` trait.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use uuid::Uuid;

use extrack_core::{Exercise, ExerciseFilter, ExerciseRepository, NewExercise, RepositoryError};

use super::row_mappers::{
    EXERCISE_SELECT_COLUMNS, format_timestamp, map_sqlx_error, row_to_exercise, storage_precision,
};

/// `SQLite` implementation of the `ExerciseRepository` trait.
pub struct SqliteExerciseRepository {
    pool: SqlitePool,
}

impl SqliteExerciseRepository {
    /// Create a new `SQLite` exercise repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ExerciseRepository for SqliteExerciseRepository {
    async fn insert(&self, exercise: &NewExercise) -> Result<Exercise, RepositoryError> {
        let id = Uuid::new_v4().to_string();
        let date = storage_precision(exercise.date.unwrap_or_else(Utc::now));

        sqlx::query(
            "INSERT INTO exercises (id, user_id, description, duration, date) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&exercise.user_id)
        .bind(&exercise.description)
        .bind(exercise.duration)
        .bind(format_timestamp(date))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(Exercise {
            id,
            user_id: exercise.user_id.clone(),
            description: exercise.description.clone(),
            duration: exercise.duration,
            date,
        })
    }

    async fn find(&self, filter: &ExerciseFilter) -> Result<Vec<Exercise>, RepositoryError> {
        let mut query = QueryBuilder::<Sqlite>::new(format!(
            "SELECT {EXERCISE_SELECT_COLUMNS} FROM exercises WHERE user_id = "
        ));
        query.push_bind(filter.user_id.clone());

        if let Some(after) = filter.after {
            query.push(" AND date > ").push_bind(format_timestamp(after));
        }
        if let Some(before) = filter.before {
            query.push(" AND date < ").push_bind(format_timestamp(before));
        }

        query.push(" ORDER BY rowid");

        if let Some(limit) = filter.limit {
            query.push(" LIMIT ").push_bind(i64::from(limit));
        }

        let rows = query
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.iter().map(row_to_exercise).collect()
    }
}
