//! Document service: creation, visibility-checked reads, deletion

use caredesk_auth::{AuthIdentity, ReadScope};
use caredesk_common::{RepositoryError, Result};
use uuid::Uuid;

use crate::domain::entities::{Document, DocumentListing, DocumentView, NewDocument};
use crate::domain::visibility::project;
use crate::repository::DocumentRepository;

#[derive(Clone)]
pub struct DocumentService {
    documents: DocumentRepository,
}

impl DocumentService {
    pub fn new(documents: DocumentRepository) -> Self {
        Self { documents }
    }

    /// Store metadata for a new document
    pub async fn create_document(&self, doc: NewDocument) -> Result<Document> {
        // Re-check in case the caller built the struct by hand
        doc.visibility.check_owner(doc.owner_user_id)?;

        let created = self.documents.create(&doc).await?;

        tracing::info!(
            document_id = %created.id,
            visibility = %created.visibility,
            "Document created"
        );
        Ok(created)
    }

    /// Get a document projected for `identity`.
    ///
    /// A document the caller may not see is indistinguishable from a
    /// missing one.
    pub async fn get_document(&self, id: Uuid, identity: &AuthIdentity) -> Result<DocumentView> {
        self.documents
            .find(id)
            .await?
            .and_then(|doc| project(doc, identity))
            .ok_or_else(|| RepositoryError::NotFound("Document").into())
    }

    /// List every document `identity` may see, newest first
    pub async fn list_documents(&self, identity: &AuthIdentity) -> Result<DocumentListing> {
        let listing = match ReadScope::for_identity(identity) {
            ReadScope::Owner(user_id) => {
                DocumentListing::User(self.documents.list_for_user(user_id).await?)
            }
            ReadScope::All => DocumentListing::Staff(self.documents.list_all().await?),
        };

        tracing::debug!(
            caller = %identity.id,
            role = %identity.role,
            count = listing.len(),
            "Listed documents"
        );
        Ok(listing)
    }

    /// Delete a document's metadata
    pub async fn delete_document(&self, id: Uuid) -> Result<()> {
        if !self.documents.delete(id).await? {
            return Err(RepositoryError::NotFound("Document").into());
        }

        tracing::info!(document_id = %id, "Document deleted");
        Ok(())
    }
}
