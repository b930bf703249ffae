//! User entity model and DTOs.

use serde::{Deserialize, Serialize};
use serieswatch_core::types::{new_entity_id, EntityId};
use sqlx::FromRow;

use crate::models::lenient;
use crate::models::series::Series;

/// A user together with their series, as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: EntityId,
    pub name: String,
    pub username: String,
    pub series: Vec<Series>,
}

impl User {
    /// Build a not-yet-persisted user with a fresh id and no series.
    pub fn new(input: &CreateUser) -> Self {
        Self {
            id: new_entity_id(),
            name: input.name.clone(),
            username: input.username.clone(),
            series: Vec::new(),
        }
    }

    /// First series whose id matches.
    pub fn find_series(&self, id: EntityId) -> Option<&Series> {
        self.series.iter().find(|s| s.id == id)
    }

    pub fn find_series_mut(&mut self, id: EntityId) -> Option<&mut Series> {
        self.series.iter_mut().find(|s| s.id == id)
    }
}

/// Row from the `users` table.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: EntityId,
    pub name: String,
    pub username: String,
}

impl UserRow {
    pub fn into_user(self, series: Vec<Series>) -> User {
        User {
            id: self.id,
            name: self.name,
            username: self.username,
            series,
        }
    }
}

/// DTO for registering a user.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub name: String,
    pub username: String,
}

/// DTO for renaming a user. A missing or non-string name is stored as empty.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserName {
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub name: String,
}
