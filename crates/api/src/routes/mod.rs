pub mod health;
pub mod series;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the tracking API route tree.
///
/// Route hierarchy:
///
/// ```text
/// /users                      create (public), rename (username header)
/// /series                     create, list
/// /series/{id}/watched        mark an episode watched
/// /series/{id}/progress       watched percentage
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(user::router())
        .merge(series::router())
}
