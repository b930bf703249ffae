//! Handlers for the `/series` resource.
//!
//! Every handler runs behind [`CurrentUser`], so lookups only ever see the
//! calling user's series.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serieswatch_core::error::CoreError;
use serieswatch_core::types::EntityId;
use serieswatch_db::models::series::{CreateSeries, MarkEpisodeWatched, Series};
use serieswatch_db::models::user::User;

use crate::error::AppResult;
use crate::middleware::current_user::CurrentUser;
use crate::state::AppState;

/// Find one of the user's series by the raw path id.
///
/// An id that does not parse as a UUID cannot match any series.
fn find_series<'a>(user: &'a User, raw_id: &str) -> Result<&'a Series, CoreError> {
    let not_found = || CoreError::SeriesNotFound {
        id: raw_id.to_string(),
    };
    let id: EntityId = raw_id.parse().map_err(|_| not_found())?;
    user.find_series(id).ok_or_else(not_found)
}

/// POST /series
pub async fn create(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(input): Json<CreateSeries>,
) -> AppResult<(StatusCode, Json<Series>)> {
    let series = Series::new(&input)?;
    state.store.append_series(user.id, &series).await?;

    tracing::info!(
        user_id = %user.id,
        series_id = %series.id,
        qt_episodes = series.qt_episodes,
        "Series created"
    );
    Ok((StatusCode::CREATED, Json(series)))
}

/// GET /series
pub async fn list(CurrentUser(user): CurrentUser) -> Json<Vec<Series>> {
    Json(user.series)
}

/// PATCH /series/{id}/watched
pub async fn mark_watched(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
    Json(input): Json<MarkEpisodeWatched>,
) -> AppResult<(StatusCode, Json<Series>)> {
    let series = find_series(&user, &id)?;
    let number = input.episode_number();
    let episode = number
        .and_then(|number| series.episode(number))
        .ok_or(CoreError::EpisodeNotFound {
            series_id: series.id,
            number,
        })?;

    let updated = state
        .store
        .mark_episode_watched(user.id, series.id, episode.number)
        .await?
        .ok_or_else(|| CoreError::SeriesNotFound { id: id.clone() })?;

    tracing::info!(
        user_id = %user.id,
        series_id = %updated.id,
        episode = episode.number,
        "Episode marked watched"
    );
    Ok((StatusCode::CREATED, Json(updated)))
}

/// GET /series/{id}/progress
///
/// Responds with the rounded percentage as a bare integer string.
pub async fn progress(
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
) -> AppResult<String> {
    let series = find_series(&user, &id)?;
    Ok(series.progress().to_string())
}
