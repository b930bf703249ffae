//! Route definitions for the `/users` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// POST   /users    -> create
/// PUT    /users    -> update_name   (requires `username` header)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/users", post(user::create).put(user::update_name))
}
