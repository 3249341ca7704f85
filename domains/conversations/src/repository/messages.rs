//! Message repository

use crate::domain::entities::Message;
use caredesk_auth::ReadScope;
use caredesk_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

/// All columns in the messages table, used for SELECT and RETURNING clauses.
pub(crate) const MESSAGE_COLUMNS: &str = "\
    id, conversation_id, sender_role, sender_user_id, content, created_at";

#[derive(Clone)]
pub struct MessageRepository {
    pool: PgPool,
}

impl MessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List a conversation's transcript, oldest first.
    ///
    /// An owner-scoped read joins the conversation to prove ownership; a
    /// foreign or missing conversation yields an empty transcript.
    pub async fn list_in_scope(
        &self,
        conversation_id: Uuid,
        scope: ReadScope,
    ) -> Result<Vec<Message>> {
        let messages = match scope {
            ReadScope::Owner(user_id) => {
                sqlx::query_as::<_, Message>(
                    r#"
                    SELECT m.id, m.conversation_id, m.sender_role,
                           m.sender_user_id, m.content, m.created_at
                    FROM messages m
                    JOIN conversations c ON c.id = m.conversation_id
                    WHERE m.conversation_id = $1
                      AND c.user_id = $2
                    ORDER BY m.created_at ASC, m.id ASC
                    "#,
                )
                .bind(conversation_id)
                .bind(user_id)
                .fetch_all(&self.pool)
                .await?
            }
            ReadScope::All => {
                let query = format!(
                    "SELECT {MESSAGE_COLUMNS} FROM messages \
                     WHERE conversation_id = $1 \
                     ORDER BY created_at ASC, id ASC"
                );
                sqlx::query_as::<_, Message>(&query)
                    .bind(conversation_id)
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        Ok(messages)
    }
}
