//! User repository

use crate::domain::entities::{NewUser, User, UserCredentials};
use caredesk_common::{Error, Result};
use sqlx::PgPool;
use uuid::Uuid;

const USER_COLUMNS: &str = "id, email, role, created_at";

#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create an account; duplicate email is a conflict
    pub async fn create(&self, new_user: &NewUser) -> Result<User> {
        let query = format!(
            "INSERT INTO users (email, password_hash, role) \
             VALUES ($1, $2, $3) \
             RETURNING {USER_COLUMNS}"
        );
        let created = sqlx::query_as::<_, User>(&query)
            .bind(&new_user.email)
            .bind(&new_user.password_hash)
            .bind(new_user.role)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| Error::from_constraint(e, "User"))?;

        tracing::info!(user_id = %created.id, role = %created.role, "User created");
        Ok(created)
    }

    /// Get user by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        let user = sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    /// Find user by email, including the password hash for credential checks
    pub async fn find_by_email(&self, email: &str) -> Result<Option<UserCredentials>> {
        let user = sqlx::query_as::<_, UserCredentials>(
            r#"
            SELECT id, email, password_hash, role, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.trim().to_lowercase())
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}
