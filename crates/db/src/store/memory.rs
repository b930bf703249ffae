use async_trait::async_trait;
use serieswatch_core::types::{EntityId, EpisodeNumber};
use tokio::sync::RwLock;

use crate::models::series::Series;
use crate::models::user::User;
use crate::store::{StoreError, StoreResult, UserStore};

/// [`UserStore`] holding whole user aggregates in process memory.
///
/// Users are kept in registration order. All writes take the write lock, so
/// each mutation is applied atomically to the current state. Nothing is
/// persisted across restarts.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered users.
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn find_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    async fn insert_user(&self, user: &User) -> StoreResult<User> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.username == user.username) {
            return Err(StoreError::Conflict {
                username: user.username.clone(),
            });
        }
        users.push(user.clone());
        Ok(user.clone())
    }

    async fn update_name(&self, user_id: EntityId, name: &str) -> StoreResult<Option<User>> {
        let mut users = self.users.write().await;
        Ok(users.iter_mut().find(|u| u.id == user_id).map(|user| {
            user.name = name.to_string();
            user.clone()
        }))
    }

    async fn append_series(&self, user_id: EntityId, series: &Series) -> StoreResult<()> {
        let mut users = self.users.write().await;
        let user = users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(StoreError::UserMissing(user_id))?;
        user.series.push(series.clone());
        Ok(())
    }

    async fn mark_episode_watched(
        &self,
        user_id: EntityId,
        series_id: EntityId,
        number: EpisodeNumber,
    ) -> StoreResult<Option<Series>> {
        let mut users = self.users.write().await;
        let Some(series) = users
            .iter_mut()
            .find(|u| u.id == user_id)
            .and_then(|u| u.find_series_mut(series_id))
        else {
            return Ok(None);
        };
        if !series.mark_watched(number) {
            return Ok(None);
        }
        Ok(Some(series.clone()))
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }
}
