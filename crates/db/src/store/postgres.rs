use async_trait::async_trait;
use serieswatch_core::types::{EntityId, EpisodeNumber};

use crate::models::series::Series;
use crate::models::user::User;
use crate::repositories::{SeriesRepo, UserRepo};
use crate::store::{StoreError, StoreResult, UserStore};
use crate::DbPool;

/// PostgreSQL SQLSTATE for unique constraint violations.
const UNIQUE_VIOLATION: &str = "23505";
/// PostgreSQL SQLSTATE for foreign key violations.
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// [`UserStore`] backed by the `users`, `series` and `episodes` tables.
#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: DbPool,
}

impl PgUserStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn sqlstate(err: &sqlx::Error) -> Option<String> {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().map(|c| c.into_owned()),
        _ => None,
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn find_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        let Some(row) = UserRepo::find_by_username(&self.pool, username).await? else {
            return Ok(None);
        };
        let series = SeriesRepo::list_by_user(&self.pool, row.id).await?;
        Ok(Some(row.into_user(series)))
    }

    async fn insert_user(&self, user: &User) -> StoreResult<User> {
        match UserRepo::create(&self.pool, user).await {
            Ok(row) => Ok(row.into_user(Vec::new())),
            Err(err) if sqlstate(&err).as_deref() == Some(UNIQUE_VIOLATION) => {
                Err(StoreError::Conflict {
                    username: user.username.clone(),
                })
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn update_name(&self, user_id: EntityId, name: &str) -> StoreResult<Option<User>> {
        let Some(row) = UserRepo::update_name(&self.pool, user_id, name).await? else {
            return Ok(None);
        };
        let series = SeriesRepo::list_by_user(&self.pool, row.id).await?;
        Ok(Some(row.into_user(series)))
    }

    async fn append_series(&self, user_id: EntityId, series: &Series) -> StoreResult<()> {
        match SeriesRepo::create(&self.pool, user_id, series).await {
            Ok(()) => Ok(()),
            Err(err) if sqlstate(&err).as_deref() == Some(FOREIGN_KEY_VIOLATION) => {
                Err(StoreError::UserMissing(user_id))
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn mark_episode_watched(
        &self,
        user_id: EntityId,
        series_id: EntityId,
        number: EpisodeNumber,
    ) -> StoreResult<Option<Series>> {
        let updated =
            SeriesRepo::mark_episode_watched(&self.pool, user_id, series_id, number).await?;
        if !updated {
            return Ok(None);
        }
        Ok(SeriesRepo::find_by_id(&self.pool, user_id, series_id).await?)
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
