//! User existence guard.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use serieswatch_core::error::CoreError;
use serieswatch_db::models::user::User;

use crate::error::AppError;
use crate::state::AppState;

/// Header carrying the caller's username. Trusted as supplied.
pub const USERNAME_HEADER: &str = "username";

/// The user named by the `username` header, loaded with all of their series.
///
/// Use this as an extractor parameter in any handler that operates on an
/// existing user:
///
/// ```ignore
/// async fn my_handler(CurrentUser(user): CurrentUser) -> AppResult<Json<Vec<Series>>> {
///     Ok(Json(user.series))
/// }
/// ```
///
/// A missing header, a non-UTF-8 value, or an unknown username all reject
/// with `404 User not found.` before the handler body runs.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let username = parts
            .headers
            .get(USERNAME_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::Core(CoreError::UserNotFound))?;

        let user = state
            .store
            .find_by_username(username)
            .await?
            .ok_or(AppError::Core(CoreError::UserNotFound))?;

        tracing::debug!(user_id = %user.id, "Resolved current user");
        Ok(CurrentUser(user))
    }
}
