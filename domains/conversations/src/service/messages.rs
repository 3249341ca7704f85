//! Messaging service: message append protocol and transcript reads

use caredesk_auth::{AuthIdentity, ReadScope};
use caredesk_common::{violated_foreign_key, Error, RepositoryError, Result};
use uuid::Uuid;

use crate::domain::entities::{Message, SenderRole};
use crate::repository::transactions::{insert_message_tx, touch_conversation_tx};
use crate::repository::ConversationsRepositories;

#[derive(Clone)]
pub struct MessagingService {
    repos: ConversationsRepositories,
}

impl MessagingService {
    pub fn new(repos: ConversationsRepositories) -> Self {
        Self { repos }
    }

    /// Append a message and record the activity on its conversation.
    ///
    /// Both writes commit together. On any error the transaction is dropped,
    /// which rolls it back, and the error is returned to the caller.
    pub async fn add_message(
        &self,
        conversation_id: Uuid,
        sender_role: SenderRole,
        sender_user_id: Option<Uuid>,
        content: String,
    ) -> Result<()> {
        let message = Message::new(conversation_id, sender_role, sender_user_id, content)?;

        let mut tx = self.repos.begin().await?;

        let inserted = insert_message_tx(&mut tx, &message)
            .await
            .map_err(missing_reference)?;

        let touched = touch_conversation_tx(&mut tx, conversation_id, inserted.created_at).await?;
        if touched == 0 {
            return Err(RepositoryError::NotFound("Conversation").into());
        }

        tx.commit().await?;

        tracing::info!(
            conversation_id = %conversation_id,
            message_id = %inserted.id,
            sender_role = %sender_role,
            "Message added"
        );
        Ok(())
    }

    /// List a conversation's messages, oldest first.
    ///
    /// End users get an empty list for conversations they do not own.
    pub async fn list_messages(
        &self,
        conversation_id: Uuid,
        identity: &AuthIdentity,
    ) -> Result<Vec<Message>> {
        self.repos
            .messages
            .list_in_scope(conversation_id, ReadScope::for_identity(identity))
            .await
    }
}

/// A dangling conversation or sender reference is a not-found, not a storage fault
fn missing_reference(err: sqlx::Error) -> Error {
    match violated_foreign_key(&err) {
        Some(constraint) if constraint.contains("sender_user_id") => {
            RepositoryError::NotFound("Sender").into()
        }
        Some(_) => RepositoryError::NotFound("Conversation").into(),
        None => Error::from_constraint(err, "Message"),
    }
}
