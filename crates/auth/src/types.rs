//! Identity types shared by every domain

use std::str::FromStr;

use caredesk_common::Error;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthRole {
    User,
    Admin,
    Care,
}

impl AuthRole {
    /// Care and admin accounts see across users
    pub fn is_staff(&self) -> bool {
        matches!(self, AuthRole::Admin | AuthRole::Care)
    }
}

impl std::fmt::Display for AuthRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthRole::User => write!(f, "USER"),
            AuthRole::Admin => write!(f, "ADMIN"),
            AuthRole::Care => write!(f, "CARE"),
        }
    }
}

impl FromStr for AuthRole {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USER" => Ok(AuthRole::User),
            "ADMIN" => Ok(AuthRole::Admin),
            "CARE" => Ok(AuthRole::Care),
            other => Err(Error::Validation(format!("Unknown role '{other}'"))),
        }
    }
}

/// Authenticated caller, as produced by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthIdentity {
    pub id: Uuid,
    pub role: AuthRole,
}

impl AuthIdentity {
    pub fn new(id: Uuid, role: AuthRole) -> Self {
        Self { id, role }
    }

    pub fn user(id: Uuid) -> Self {
        Self::new(id, AuthRole::User)
    }

    pub fn care(id: Uuid) -> Self {
        Self::new(id, AuthRole::Care)
    }

    pub fn admin(id: Uuid) -> Self {
        Self::new(id, AuthRole::Admin)
    }

    pub fn is_staff(&self) -> bool {
        self.role.is_staff()
    }
}
