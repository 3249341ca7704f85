//! Document visibility rules
//!
//! Pure logic, no storage access:
//! - `PUBLIC`: any authenticated caller
//! - `USER_SPECIFIC`: care/admin, and the owning user
//! - `ADMIN_ONLY`: care/admin only
//!
//! A document a caller may not see is reported as not found.

use caredesk_auth::AuthIdentity;
use caredesk_common::{Error, Result};
use uuid::Uuid;

use super::entities::{Document, DocumentView, DocumentVisibility};

impl DocumentVisibility {
    /// Whether a document of this tier, owned by `owner_user_id`, is
    /// readable by `identity`
    pub fn is_visible_to(&self, owner_user_id: Option<Uuid>, identity: &AuthIdentity) -> bool {
        if identity.is_staff() {
            return true;
        }
        match self {
            DocumentVisibility::Public => true,
            DocumentVisibility::UserSpecific => owner_user_id == Some(identity.id),
            DocumentVisibility::AdminOnly => false,
        }
    }

    /// Enforce that an owner is set exactly for `USER_SPECIFIC` documents
    pub fn check_owner(&self, owner_user_id: Option<Uuid>) -> Result<()> {
        match (self, owner_user_id) {
            (DocumentVisibility::UserSpecific, None) => Err(Error::Validation(
                "USER_SPECIFIC documents require an owner_user_id".to_string(),
            )),
            (DocumentVisibility::UserSpecific, Some(_)) | (_, None) => Ok(()),
            (other, Some(_)) => Err(Error::Validation(format!(
                "{other} documents cannot have an owner_user_id"
            ))),
        }
    }
}

/// Project a document for its caller, or `None` if the caller may not see it
pub fn project(document: Document, identity: &AuthIdentity) -> Option<DocumentView> {
    if !document
        .visibility
        .is_visible_to(document.owner_user_id, identity)
    {
        return None;
    }

    if identity.is_staff() {
        Some(DocumentView::Staff(document))
    } else {
        Some(DocumentView::User(document.into()))
    }
}
