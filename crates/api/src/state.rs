use std::sync::Arc;

use serieswatch_db::store::UserStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The single source of truth for users and series.
    pub store: Arc<dyn UserStore>,
}
