//! Exercise handlers - appending entries and reading the log.

use axum::Json;
use axum::extract::{Query, State};
use extrack_core::{LogRequest, NewExerciseInput};

use crate::dto::{AddExerciseRequest, ExerciseAddedDto, ExerciseLogDto, LogParams};
use crate::error::ApiError;
use crate::extract::JsonOrForm;
use crate::state::AppState;

/// Append an exercise to a user's log.
pub async fn add(
    State(state): State<AppState>,
    JsonOrForm(req): JsonOrForm<AddExerciseRequest>,
) -> Result<Json<ExerciseAddedDto>, ApiError> {
    let logged = state
        .tracker
        .add_exercise(&NewExerciseInput::from(req))
        .await?;
    Ok(Json(logged.into()))
}

/// Read a user's exercise log, optionally filtered by date and capped.
pub async fn log(
    State(state): State<AppState>,
    Query(params): Query<LogParams>,
) -> Result<Json<ExerciseLogDto>, ApiError> {
    let log = state.tracker.exercise_log(&LogRequest::from(params)).await?;
    Ok(Json(log.into()))
}
