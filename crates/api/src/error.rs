use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use serieswatch_core::error::CoreError;
use serieswatch_db::store::StoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for persistence
/// failures. Implements [`IntoResponse`] to produce consistent JSON error
/// responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `serieswatch_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failure reported by the user store.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::UserNotFound => {
                    (StatusCode::NOT_FOUND, "NOT_FOUND", core.to_string())
                }
                CoreError::SeriesNotFound { id } => {
                    tracing::debug!(series_id = %id, "Series not found for user");
                    (StatusCode::NOT_FOUND, "NOT_FOUND", core.to_string())
                }
                CoreError::EpisodeNotFound { series_id, number } => {
                    tracing::debug!(%series_id, ?number, "Episode not found in series");
                    (StatusCode::NOT_FOUND, "NOT_FOUND", core.to_string())
                }
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                // Duplicate registrations are reported as 400, not 409.
                CoreError::Conflict(msg) => (StatusCode::BAD_REQUEST, "CONFLICT", msg.clone()),
            },

            // --- Store errors ---
            AppError::Store(err) => classify_store_error(err),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a store error into an HTTP status, error code, and message.
///
/// - Username conflicts map to 400.
/// - A user that vanished between lookup and write maps to 404.
/// - Database failures map to 500; the store's message is passed through.
fn classify_store_error(err: &StoreError) -> (StatusCode, &'static str, String) {
    match err {
        StoreError::Conflict { .. } => (StatusCode::BAD_REQUEST, "CONFLICT", err.to_string()),
        StoreError::UserMissing(user_id) => {
            tracing::warn!(%user_id, "User disappeared during request");
            (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                CoreError::UserNotFound.to_string(),
            )
        }
        StoreError::Database(db_err) => {
            tracing::error!(error = %db_err, "Store operation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "STORE_ERROR",
                err.to_string(),
            )
        }
    }
}
