//! Repository for the `users` table.

use serieswatch_core::types::EntityId;
use sqlx::PgPool;

use crate::models::user::{User, UserRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, username";

/// Provides insert, lookup and rename operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user row, returning it.
    ///
    /// Fails with a unique violation on `uq_users_username` if the username
    /// is already taken.
    pub async fn create(pool: &PgPool, user: &User) -> Result<UserRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (id, name, username)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserRow>(&query)
            .bind(user.id)
            .bind(&user.name)
            .bind(&user.username)
            .fetch_one(pool)
            .await
    }

    /// Find a user by username (case-sensitive).
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<UserRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE username = $1");
        sqlx::query_as::<_, UserRow>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite the `name` column only.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_name(
        pool: &PgPool,
        id: EntityId,
        name: &str,
    ) -> Result<Option<UserRow>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET name = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserRow>(&query)
            .bind(id)
            .bind(name)
            .fetch_optional(pool)
            .await
    }
}
