//! Domain entities for Documents domain
//!
//! Only document metadata is stored here; the file bytes live wherever
//! `storage_path` points.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use caredesk_common::{Error, Result};

/// Access class of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "document_visibility", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentVisibility {
    AdminOnly,
    UserSpecific,
    Public,
}

impl std::fmt::Display for DocumentVisibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentVisibility::AdminOnly => write!(f, "ADMIN_ONLY"),
            DocumentVisibility::UserSpecific => write!(f, "USER_SPECIFIC"),
            DocumentVisibility::Public => write!(f, "PUBLIC"),
        }
    }
}

impl FromStr for DocumentVisibility {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ADMIN_ONLY" => Ok(DocumentVisibility::AdminOnly),
            "USER_SPECIFIC" => Ok(DocumentVisibility::UserSpecific),
            "PUBLIC" => Ok(DocumentVisibility::Public),
            other => Err(Error::Validation(format!(
                "Unknown document visibility '{other}'"
            ))),
        }
    }
}

/// Document entity (full projection, staff only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Document {
    pub id: Uuid,
    pub filename: String,
    pub mime_type: String,
    pub storage_path: String,
    pub visibility: DocumentVisibility,
    pub owner_user_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// End-user projection: no storage path, no owner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserDocumentView {
    pub id: Uuid,
    pub filename: String,
    pub mime_type: String,
    pub visibility: DocumentVisibility,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Document> for UserDocumentView {
    fn from(d: Document) -> Self {
        Self {
            id: d.id,
            filename: d.filename,
            mime_type: d.mime_type,
            visibility: d.visibility,
            created_at: d.created_at,
            updated_at: d.updated_at,
        }
    }
}

/// A single document as seen by its caller
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DocumentView {
    User(UserDocumentView),
    Staff(Document),
}

impl DocumentView {
    pub fn id(&self) -> Uuid {
        match self {
            DocumentView::User(d) => d.id,
            DocumentView::Staff(d) => d.id,
        }
    }
}

/// A document listing as seen by its caller
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DocumentListing {
    User(Vec<UserDocumentView>),
    Staff(Vec<Document>),
}

impl DocumentListing {
    pub fn len(&self) -> usize {
        match self {
            DocumentListing::User(docs) => docs.len(),
            DocumentListing::Staff(docs) => docs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Document ids in listing order
    pub fn ids(&self) -> Vec<Uuid> {
        match self {
            DocumentListing::User(docs) => docs.iter().map(|d| d.id).collect(),
            DocumentListing::Staff(docs) => docs.iter().map(|d| d.id).collect(),
        }
    }
}

/// Validated input for document creation
#[derive(Debug, Clone, Validate)]
pub struct NewDocument {
    #[validate(length(min = 1, max = 255))]
    pub filename: String,

    #[validate(length(min = 1, max = 255))]
    pub mime_type: String,

    #[validate(length(min = 1))]
    pub storage_path: String,

    pub visibility: DocumentVisibility,

    pub owner_user_id: Option<Uuid>,
}

impl NewDocument {
    /// Build and validate a new document.
    ///
    /// An owner is required for `USER_SPECIFIC` documents and forbidden for
    /// every other tier.
    pub fn new(
        filename: &str,
        mime_type: &str,
        storage_path: &str,
        visibility: DocumentVisibility,
        owner_user_id: Option<Uuid>,
    ) -> Result<Self> {
        let doc = Self {
            filename: filename.trim().to_string(),
            mime_type: mime_type.trim().to_string(),
            storage_path: storage_path.trim().to_string(),
            visibility,
            owner_user_id,
        };

        doc.validate().map_err(|e| Error::Validation(e.to_string()))?;
        visibility.check_owner(owner_user_id)?;

        Ok(doc)
    }
}
