use clipshelf_core::models::User;
use clipshelf_core::AppError;
use sqlx::PgPool;

#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a user. Accounts are provisioned out of band (tests, admin
    /// tooling); the API never creates users on its own.
    pub async fn create(&self, username: &str) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username)
            VALUES ($1)
            RETURNING id, username, created_at
            "#,
        )
        .bind(username)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(username = %username, error = %e, "Failed to create user");
            AppError::Database(e)
        })?;

        tracing::info!(user_id = user.id, username = %user.username, "Created user");
        Ok(user)
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(username = %username, error = %e, "Failed to fetch user by username");
            AppError::Database(e)
        })?;

        Ok(user)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(user_id = id, error = %e, "Failed to fetch user by id");
            AppError::Database(e)
        })?;

        Ok(user)
    }
}
