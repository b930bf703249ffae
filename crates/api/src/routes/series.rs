//! Route definitions for the `/series` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::series;
use crate::state::AppState;

/// Routes mounted at `/series`. All require the `username` header.
///
/// ```text
/// POST   /series                 -> create
/// GET    /series                 -> list
/// PATCH  /series/{id}/watched    -> mark_watched
/// GET    /series/{id}/progress   -> progress
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/series", get(series::list).post(series::create))
        .route("/series/{id}/watched", patch(series::mark_watched))
        .route("/series/{id}/progress", get(series::progress))
}
