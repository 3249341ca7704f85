//! Document repository

use crate::domain::entities::{Document, NewDocument, UserDocumentView};
use caredesk_common::{violated_foreign_key, Error, RepositoryError, Result};
use sqlx::PgPool;
use uuid::Uuid;

/// All columns in the documents table, used for SELECT and RETURNING clauses.
const DOCUMENT_COLUMNS: &str = "\
    id, filename, mime_type, storage_path, \
    visibility, owner_user_id, created_at, updated_at";

/// Columns exposed to end users.
const USER_VIEW_COLUMNS: &str = "\
    id, filename, mime_type, visibility, created_at, updated_at";

#[derive(Clone)]
pub struct DocumentRepository {
    pool: PgPool,
}

impl DocumentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new document
    pub async fn create(&self, doc: &NewDocument) -> Result<Document> {
        let query = format!(
            "INSERT INTO documents (filename, mime_type, storage_path, visibility, owner_user_id) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {DOCUMENT_COLUMNS}"
        );
        sqlx::query_as::<_, Document>(&query)
            .bind(&doc.filename)
            .bind(&doc.mime_type)
            .bind(&doc.storage_path)
            .bind(doc.visibility)
            .bind(doc.owner_user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                if violated_foreign_key(&e).is_some() {
                    RepositoryError::NotFound("User").into()
                } else {
                    Error::from_constraint(e, "Document")
                }
            })
    }

    /// Find a document by ID, regardless of visibility
    pub async fn find(&self, id: Uuid) -> Result<Option<Document>> {
        let query = format!("SELECT {DOCUMENT_COLUMNS} FROM documents WHERE id = $1");
        let doc = sqlx::query_as::<_, Document>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(doc)
    }

    /// List every document, newest first
    pub async fn list_all(&self) -> Result<Vec<Document>> {
        let query = format!(
            "SELECT {DOCUMENT_COLUMNS} FROM documents ORDER BY created_at DESC, id ASC"
        );
        let docs = sqlx::query_as::<_, Document>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(docs)
    }

    /// List the documents an end user may see: public ones and their own
    /// user-specific ones, newest first.
    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<UserDocumentView>> {
        let query = format!(
            "SELECT {USER_VIEW_COLUMNS} \
             FROM documents \
             WHERE visibility = 'PUBLIC' \
                OR (visibility = 'USER_SPECIFIC' AND owner_user_id = $1) \
             ORDER BY created_at DESC, id ASC"
        );
        let docs = sqlx::query_as::<_, UserDocumentView>(&query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(docs)
    }

    /// Delete a document. Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM documents WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
