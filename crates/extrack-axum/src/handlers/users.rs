//! User handlers - registration and listing.

use axum::Json;
use axum::extract::State;
use extrack_core::NewUserInput;

use crate::dto::{NewUserRequest, UserDto};
use crate::error::ApiError;
use crate::extract::JsonOrForm;
use crate::state::AppState;

/// Register a new user.
pub async fn create(
    State(state): State<AppState>,
    JsonOrForm(req): JsonOrForm<NewUserRequest>,
) -> Result<Json<UserDto>, ApiError> {
    let user = state.tracker.register_user(&NewUserInput::from(req)).await?;
    Ok(Json(user.into()))
}

/// List every registered user in creation order.
///
/// Storage failures are reported in the soft `{"error": ...}` shape like
/// the other business endpoints.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<UserDto>>, ApiError> {
    let users = state.tracker.list_users().await.map_err(|e| {
        tracing::warn!(error = %e, "Failed to list users");
        ApiError::soft(e)
    })?;
    Ok(Json(users.into_iter().map(UserDto::from).collect()))
}
