//! Domain entities for Users domain

use caredesk_auth::{AuthIdentity, AuthRole};
use caredesk_common::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Public user projection (never carries the password hash)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub role: AuthRole,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Identity value handed to the core's services on behalf of this user
    pub fn identity(&self) -> AuthIdentity {
        AuthIdentity::new(self.id, self.role)
    }
}

/// User row including the stored password hash, for credential checks only
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct UserCredentials {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub role: AuthRole,
    pub created_at: DateTime<Utc>,
}

impl From<UserCredentials> for User {
    fn from(c: UserCredentials) -> Self {
        Self {
            id: c.id,
            email: c.email,
            role: c.role,
            created_at: c.created_at,
        }
    }
}

/// Validated input for account creation
///
/// The password hash is computed by the caller; the core stores it verbatim.
#[derive(Debug, Clone, Validate)]
pub struct NewUser {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1, message = "Password hash is required"))]
    pub password_hash: String,

    pub role: AuthRole,
}

impl NewUser {
    pub fn new(email: &str, password_hash: String, role: AuthRole) -> Result<Self> {
        let new_user = Self {
            email: email.trim().to_lowercase(),
            password_hash,
            role,
        };
        new_user
            .validate()
            .map_err(|e| Error::Validation(e.to_string()))?;
        Ok(new_user)
    }
}
