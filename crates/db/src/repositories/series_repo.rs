//! Repository for the `series` and `episodes` tables.

use std::collections::HashMap;

use serieswatch_core::types::{EntityId, EpisodeNumber};
use sqlx::PgPool;

use crate::models::series::{Episode, EpisodeRow, Series, SeriesRow};

const SERIES_COLUMNS: &str = "s.id, s.name, s.qt_episodes";

/// Series are always read together with their episodes.
pub struct SeriesRepo;

impl SeriesRepo {
    /// Insert one series and its episode rows in a single transaction.
    ///
    /// Only rows belonging to the new series are written; other series of
    /// the same user are untouched.
    pub async fn create(
        pool: &PgPool,
        user_id: EntityId,
        series: &Series,
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query(
            "INSERT INTO series (id, user_id, name, qt_episodes)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(series.id)
        .bind(user_id)
        .bind(&series.name)
        .bind(series.qt_episodes)
        .execute(&mut *tx)
        .await?;

        let numbers: Vec<EpisodeNumber> = series.episodes.iter().map(|e| e.number).collect();
        let watched: Vec<bool> = series.episodes.iter().map(|e| e.watched).collect();
        sqlx::query(
            "INSERT INTO episodes (series_id, number, watched)
             SELECT $1, number, watched
             FROM UNNEST($2::INTEGER[], $3::BOOLEAN[]) AS t(number, watched)",
        )
        .bind(series.id)
        .bind(numbers)
        .bind(watched)
        .execute(&mut *tx)
        .await?;

        tx.commit().await
    }

    /// All series owned by a user, in insertion order, with episodes sorted
    /// by number.
    pub async fn list_by_user(pool: &PgPool, user_id: EntityId) -> Result<Vec<Series>, sqlx::Error> {
        let query = format!(
            "SELECT {SERIES_COLUMNS} FROM series s
             WHERE s.user_id = $1
             ORDER BY s.position"
        );
        let rows = sqlx::query_as::<_, SeriesRow>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await?;

        let episode_rows = sqlx::query_as::<_, EpisodeRow>(
            "SELECT e.series_id, e.number, e.watched
             FROM episodes e
             JOIN series s ON s.id = e.series_id
             WHERE s.user_id = $1
             ORDER BY e.series_id, e.number",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        let mut by_series: HashMap<EntityId, Vec<Episode>> = HashMap::new();
        for row in episode_rows {
            by_series.entry(row.series_id).or_default().push(Episode {
                number: row.number,
                watched: row.watched,
            });
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let episodes = by_series.remove(&row.id).unwrap_or_default();
                row.into_series(episodes)
            })
            .collect())
    }

    /// Find one series of a user by id.
    pub async fn find_by_id(
        pool: &PgPool,
        user_id: EntityId,
        series_id: EntityId,
    ) -> Result<Option<Series>, sqlx::Error> {
        let query = format!(
            "SELECT {SERIES_COLUMNS} FROM series s
             WHERE s.id = $1 AND s.user_id = $2"
        );
        let Some(row) = sqlx::query_as::<_, SeriesRow>(&query)
            .bind(series_id)
            .bind(user_id)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };

        let episodes = sqlx::query_as::<_, Episode>(
            "SELECT number, watched FROM episodes
             WHERE series_id = $1
             ORDER BY number",
        )
        .bind(series_id)
        .fetch_all(pool)
        .await?;

        Ok(Some(row.into_series(episodes)))
    }

    /// Set `watched = TRUE` on exactly one episode row.
    ///
    /// Returns `true` if the episode exists for that user and series
    /// (including when it was already watched).
    pub async fn mark_episode_watched(
        pool: &PgPool,
        user_id: EntityId,
        series_id: EntityId,
        number: EpisodeNumber,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE episodes e SET watched = TRUE
             FROM series s
             WHERE e.series_id = s.id
               AND s.id = $2
               AND s.user_id = $1
               AND e.number = $3",
        )
        .bind(user_id)
        .bind(series_id)
        .bind(number)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
