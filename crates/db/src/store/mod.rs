//! The user store: the single persistence seam the API layer depends on.
//!
//! Two implementations exist and exactly one is chosen at startup:
//! - [`PgUserStore`] -- PostgreSQL, normalized tables, targeted writes.
//! - [`MemoryUserStore`] -- in-process, for local runs without a database
//!   and for tests.

use async_trait::async_trait;
use serieswatch_core::types::{EntityId, EpisodeNumber};

use crate::models::series::Series;
use crate::models::user::User;

mod memory;
mod postgres;

pub use memory::MemoryUserStore;
pub use postgres::PgUserStore;

/// Errors surfaced by a [`UserStore`] implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The username is already registered.
    #[error("User already exists")]
    Conflict { username: String },

    /// A write referenced a user that is no longer present.
    #[error("user {0} does not exist")]
    UserMissing(EntityId),

    /// Any other database failure.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence operations for users and their embedded series.
///
/// Every mutation touches only the data it names: renaming writes the name,
/// appending a series writes that series, marking an episode writes that
/// episode. Concurrent writes to different series of one user never
/// overwrite each other.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Short backend name for logs and health output.
    fn backend(&self) -> &'static str;

    /// Load a user and all of their series by exact username.
    async fn find_by_username(&self, username: &str) -> StoreResult<Option<User>>;

    /// Insert a brand-new user. Fails with [`StoreError::Conflict`] if the
    /// username is taken.
    async fn insert_user(&self, user: &User) -> StoreResult<User>;

    /// Replace a user's name, returning the updated user.
    async fn update_name(&self, user_id: EntityId, name: &str) -> StoreResult<Option<User>>;

    /// Append a series to the end of a user's list.
    async fn append_series(&self, user_id: EntityId, series: &Series) -> StoreResult<()>;

    /// Mark one episode watched and return the series as stored afterwards.
    ///
    /// `None` means the series or the episode does not exist for that user.
    async fn mark_episode_watched(
        &self,
        user_id: EntityId,
        series_id: EntityId,
        number: EpisodeNumber,
    ) -> StoreResult<Option<Series>>;

    /// Confirm the backing store is reachable.
    async fn health_check(&self) -> StoreResult<()>;
}
