//! Handlers for the `/users` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serieswatch_core::error::CoreError;
use serieswatch_db::models::user::{CreateUser, UpdateUserName, User};

use crate::error::AppResult;
use crate::middleware::current_user::CurrentUser;
use crate::state::AppState;

/// POST /users
///
/// Registers a new user with an empty series list. A taken username is a
/// conflict and writes nothing.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateUser>,
) -> AppResult<(StatusCode, Json<User>)> {
    if state.store.find_by_username(&input.username).await?.is_some() {
        return Err(CoreError::Conflict("User already exists".into()).into());
    }

    let user = state.store.insert_user(&User::new(&input)).await?;
    tracing::info!(user_id = %user.id, username = %user.username, "User created");
    Ok((StatusCode::CREATED, Json(user)))
}

/// PUT /users
pub async fn update_name(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(input): Json<UpdateUserName>,
) -> AppResult<Json<User>> {
    let updated = state
        .store
        .update_name(user.id, &input.name)
        .await?
        .ok_or(CoreError::UserNotFound)?;
    Ok(Json(updated))
}
