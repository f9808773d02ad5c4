//! PostgreSQL implementation of the user repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{NewUser, SortOrder, User, UserSort};
use crate::domain::repositories::{UserRepository, name_taken};
use crate::error::AppError;

/// PostgreSQL repository for users.
///
/// Ids come from the `BIGSERIAL` primary key and name uniqueness from the
/// `users_name_key` constraint. Each method issues a single statement, so
/// no operation leaves a partial write behind.
pub struct PgUserRepository {
    pool: Arc<PgPool>,
}

impl PgUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct UserRow {
    id: i64,
    name: String,
}

/// Maps a unique violation on `name` to the shared conflict error.
fn write_error(e: sqlx::Error, name: &str) -> AppError {
    let unique_violation = e
        .as_database_error()
        .is_some_and(|db| db.is_unique_violation());

    if unique_violation {
        name_taken(name)
    } else {
        e.into()
    }
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::new(row.id, row.name)
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (name)
            VALUES ($1)
            RETURNING id, name
            "#,
        )
        .bind(&new_user.name)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| write_error(e, &new_user.name))?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>("SELECT id, name FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(User::from))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>("SELECT id, name FROM users WHERE name = $1")
            .bind(name)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(User::from))
    }

    async fn list(&self, sort: UserSort) -> Result<Vec<User>, AppError> {
        // Sort direction cannot be bound as a parameter.
        let query = match sort.order {
            SortOrder::Ascending => "SELECT id, name FROM users ORDER BY name ASC, id ASC",
            SortOrder::Descending => "SELECT id, name FROM users ORDER BY name DESC, id ASC",
        };

        let rows = sqlx::query_as::<_, UserRow>(query)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn update_name_by_id(&self, id: i64, new_name: &str) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE users SET name = $2
            WHERE id = $1
            RETURNING id, name
            "#,
        )
        .bind(id)
        .bind(new_name)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(|e| write_error(e, new_name))?;

        Ok(row.map(User::from))
    }

    async fn update_name_by_name(
        &self,
        old_name: &str,
        new_name: &str,
    ) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE users SET name = $2
            WHERE name = $1
            RETURNING id, name
            "#,
        )
        .bind(old_name)
        .bind(new_name)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(|e| write_error(e, new_name))?;

        Ok(row.map(User::from))
    }

    async fn delete_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let row =
            sqlx::query_as::<_, UserRow>("DELETE FROM users WHERE id = $1 RETURNING id, name")
                .bind(id)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(row.map(User::from))
    }

    async fn delete_by_name(&self, name: &str) -> Result<Option<User>, AppError> {
        let row =
            sqlx::query_as::<_, UserRow>("DELETE FROM users WHERE name = $1 RETURNING id, name")
                .bind(name)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(row.map(User::from))
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
