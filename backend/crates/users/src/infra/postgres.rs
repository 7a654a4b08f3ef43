//! PostgreSQL Repository Implementation

use sqlx::PgPool;

use crate::domain::entity::user::{User, UserDraft};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_id::UserId, user_name::UserName};
use crate::error::{UserError, UserResult};

/// PostgreSQL-backed user repository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the `users` table if it does not exist yet
    ///
    /// Startup bootstrap only; there is no migration history.
    pub async fn ensure_schema(&self) -> UserResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id BIGINT GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY,
                username VARCHAR(80) NOT NULL UNIQUE,
                email VARCHAR(120) NOT NULL UNIQUE
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        tracing::info!("Users table ready");

        Ok(())
    }
}

impl UserRepository for PgUserRepository {
    async fn list(&self) -> UserResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, email
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(UserRow::into_user).collect())
    }

    async fn find_by_id(&self, user_id: UserId) -> UserResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, email
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRow::into_user))
    }

    async fn create(&self, draft: &UserDraft) -> UserResult<User> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (username, email)
            VALUES ($1, $2)
            RETURNING id, username, email
            "#,
        )
        .bind(draft.user_name.as_str())
        .bind(draft.email.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(UserError::from_write)?;

        Ok(row.into_user())
    }

    async fn replace(&self, user_id: UserId, draft: &UserDraft) -> UserResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE users
            SET username = $2, email = $3
            WHERE id = $1
            RETURNING id, username, email
            "#,
        )
        .bind(user_id.value())
        .bind(draft.user_name.as_str())
        .bind(draft.email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(UserError::from_write)?;

        Ok(row.map(UserRow::into_user))
    }

    async fn delete(&self, user_id: UserId) -> UserResult<bool> {
        let deleted = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user_id.value())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    username: String,
    email: String,
}

impl UserRow {
    fn into_user(self) -> User {
        User {
            user_id: UserId::new(self.id),
            user_name: UserName::from_db(self.username),
            email: Email::from_db(self.email),
        }
    }
}
