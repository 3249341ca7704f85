//! Conversation lifecycle service

use caredesk_auth::{AuthIdentity, ReadScope};
use caredesk_common::{violated_foreign_key, Error, RepositoryError, Result};
use uuid::Uuid;

use crate::domain::entities::{Conversation, ConversationStatus, ConversationView};
use crate::domain::filters::ConversationFilters;
use crate::domain::state::ConversationEvent;
use crate::repository::ConversationsRepositories;

#[derive(Clone)]
pub struct ConversationService {
    repos: ConversationsRepositories,
}

impl ConversationService {
    pub fn new(repos: ConversationsRepositories) -> Self {
        Self { repos }
    }

    /// Open a new conversation for `user_id`
    pub async fn create_conversation(&self, user_id: Uuid) -> Result<Conversation> {
        let conversation = Conversation::new(user_id);
        let created = self
            .repos
            .conversations
            .create(&conversation)
            .await
            .map_err(|e| match e {
                Error::Database(ref db) if violated_foreign_key(db).is_some() => {
                    RepositoryError::NotFound("User").into()
                }
                other => other,
            })?;

        tracing::info!(conversation_id = %created.id, user_id = %user_id, "Conversation created");
        Ok(created)
    }

    /// Get a conversation the caller is entitled to see.
    ///
    /// End users only see their own conversations; anything else is
    /// reported as not found.
    pub async fn get_conversation(
        &self,
        conversation_id: Uuid,
        identity: &AuthIdentity,
    ) -> Result<ConversationView> {
        self.repos
            .conversations
            .find_in_scope(conversation_id, ReadScope::for_identity(identity))
            .await?
            .ok_or_else(|| RepositoryError::NotFound("Conversation").into())
    }

    /// List conversations for the caller.
    ///
    /// End users get their own conversations and `filters` is ignored. Staff
    /// get the dashboard listing narrowed by `filters`.
    pub async fn list_conversations(
        &self,
        identity: &AuthIdentity,
        filters: ConversationFilters,
    ) -> Result<Vec<ConversationView>> {
        let convs = match ReadScope::for_identity(identity) {
            ReadScope::Owner(user_id) => self.repos.conversations.list_by_owner(user_id).await?,
            ReadScope::All => self.repos.conversations.list_for_dashboard(filters).await?,
        };

        tracing::debug!(
            caller = %identity.id,
            role = %identity.role,
            ?filters,
            count = convs.len(),
            "Listed conversations"
        );
        Ok(convs)
    }

    /// Set a conversation's status. Any status may follow any other.
    pub async fn set_status(
        &self,
        conversation_id: Uuid,
        new_status: ConversationStatus,
    ) -> Result<Conversation> {
        let event = ConversationEvent::SetStatus(new_status);
        let updated = self
            .repos
            .conversations
            .apply_event(conversation_id, event)
            .await?
            .ok_or(RepositoryError::NotFound("Conversation"))?;

        tracing::info!(conversation_id = %conversation_id, %event, "Conversation status set");
        Ok(updated)
    }
}
