//! `SQLite` implementation of the `UserRepository` trait.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use extrack_core::{NewUser, RepositoryError, User, UserRepository};

use super::row_mappers::{format_timestamp, map_sqlx_error, row_to_user};

/// `SQLite` implementation of the `UserRepository` trait.
///
/// Identifiers are random UUIDs generated at insert time.
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Create a new `SQLite` user repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn insert(&self, user: &NewUser) -> Result<User, RepositoryError> {
        let id = Uuid::new_v4().to_string();

        sqlx::query("INSERT INTO users (id, username, created_at) VALUES (?, ?, ?)")
            .bind(&id)
            .bind(&user.username)
            .bind(format_timestamp(Utc::now()))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(User {
            id,
            username: user.username.clone(),
        })
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query("SELECT id, username FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        row.as_ref().map(row_to_user).transpose()
    }

    async fn list(&self) -> Result<Vec<User>, RepositoryError> {
        let rows = sqlx::query("SELECT id, username FROM users ORDER BY rowid")
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.iter().map(row_to_user).collect()
    }
}
