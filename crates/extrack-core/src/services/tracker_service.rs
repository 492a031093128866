//! Tracker service - orchestrates user registration, exercise appends and
//! log queries.
//!
//! Each operation validates its raw input, checks that referenced users
//! exist, then delegates persistence to the injected repositories.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{ExerciseLog, LoggedExercise, NewExercise, UpperBoundMode, User};
use crate::ports::{CoreError, ExerciseRepository, Repos, UserRepository};
use crate::validation::{self, LogRequest, NewExerciseInput, NewUserInput, USER_NOT_FOUND};

/// Service for the exercise tracker operations.
pub struct TrackerService {
    users: Arc<dyn UserRepository>,
    exercises: Arc<dyn ExerciseRepository>,
    upper_bound_mode: UpperBoundMode,
}

impl TrackerService {
    /// Create a new tracker service with the given repositories.
    pub fn new(repos: Repos) -> Self {
        Self {
            users: repos.users,
            exercises: repos.exercises,
            upper_bound_mode: UpperBoundMode::default(),
        }
    }

    /// Set how the `to` bound of log queries is applied.
    #[must_use]
    pub const fn with_upper_bound_mode(mut self, mode: UpperBoundMode) -> Self {
        self.upper_bound_mode = mode;
        self
    }

    /// The configured upper-bound policy.
    pub const fn upper_bound_mode(&self) -> UpperBoundMode {
        self.upper_bound_mode
    }

    /// Register a new user.
    pub async fn register_user(&self, input: &NewUserInput) -> Result<User, CoreError> {
        let new_user = validation::validate_new_user(input)?;
        let user = self.users.insert(&new_user).await?;
        info!(user_id = %user.id, "Registered user");
        Ok(user)
    }

    /// Append an exercise entry for an existing user.
    ///
    /// The date is only checked once the user is known to exist, so an
    /// unknown user is reported as such whatever the date.
    pub async fn add_exercise(&self, input: &NewExerciseInput) -> Result<LoggedExercise, CoreError> {
        let validated = validation::validate_new_exercise(input)?;
        let user = self.require_user(&validated.user_id).await?;
        let new_exercise = NewExercise {
            date: validation::validate_exercise_date(input)?,
            ..validated
        };

        let exercise = self.exercises.insert(&new_exercise).await?;
        info!(
            user_id = %user.id,
            exercise_id = %exercise.id,
            duration = exercise.duration,
            "Logged exercise"
        );

        Ok(LoggedExercise { user, exercise })
    }

    /// Query a user's exercise log.
    pub async fn exercise_log(&self, request: &LogRequest) -> Result<ExerciseLog, CoreError> {
        let query = validation::validate_log_request(request)?;
        let user = self.require_user(&query.user_id).await?;

        let filter = query.to_filter(self.upper_bound_mode);
        if query.to.is_some() && filter.before.is_none() {
            debug!(user_id = %user.id, "Upper bound ignored without lower bound");
        }

        let entries = self.exercises.find(&filter).await?;
        Ok(ExerciseLog { user, entries })
    }

    /// List all registered users.
    pub async fn list_users(&self) -> Result<Vec<User>, CoreError> {
        self.users.list().await.map_err(CoreError::from)
    }

    async fn require_user(&self, id: &str) -> Result<User, CoreError> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| CoreError::NotFound(USER_NOT_FOUND.to_string()))
    }
}
