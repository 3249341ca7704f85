//! Escalation service

use caredesk_common::{violated_foreign_key, Error, RepositoryError, Result};
use uuid::Uuid;

use crate::domain::entities::{Escalation, EscalationOutcome};
use crate::domain::state::ConversationEvent;
use crate::repository::transactions::{apply_event_tx, insert_escalation_tx};
use crate::repository::ConversationsRepositories;

#[derive(Clone)]
pub struct EscalationService {
    repos: ConversationsRepositories,
}

impl EscalationService {
    pub fn new(repos: ConversationsRepositories) -> Self {
        Self { repos }
    }

    /// Request human attention on a conversation.
    ///
    /// Records the escalation if none exists yet, then forces the
    /// conversation to `ESCALATED` whatever its prior status, in one
    /// transaction. Repeated requests succeed and return `escalation: None`.
    pub async fn request_escalation(
        &self,
        conversation_id: Uuid,
        requesting_user_id: Uuid,
    ) -> Result<EscalationOutcome> {
        let mut tx = self.repos.begin().await?;

        let escalation = insert_escalation_tx(&mut tx, conversation_id, requesting_user_id)
            .await
            .map_err(missing_reference)?;

        let conversation = apply_event_tx(&mut tx, conversation_id, ConversationEvent::Escalate)
            .await?
            .ok_or(RepositoryError::NotFound("Conversation"))?;

        tx.commit().await?;

        match &escalation {
            Some(row) => tracing::info!(
                conversation_id = %conversation_id,
                escalation_id = %row.id,
                requested_by = %requesting_user_id,
                "Conversation escalated"
            ),
            None => tracing::info!(
                conversation_id = %conversation_id,
                requested_by = %requesting_user_id,
                "Escalation already recorded, status re-applied"
            ),
        }

        Ok(EscalationOutcome {
            escalation,
            conversation,
        })
    }

    /// The escalation recorded for a conversation, if any
    pub async fn find_escalation(&self, conversation_id: Uuid) -> Result<Option<Escalation>> {
        self.repos
            .escalations
            .find_by_conversation(conversation_id)
            .await
    }
}

fn missing_reference(err: sqlx::Error) -> Error {
    match violated_foreign_key(&err) {
        Some(constraint) if constraint.contains("requested_by_user_id") => {
            RepositoryError::NotFound("User").into()
        }
        Some(_) => RepositoryError::NotFound("Conversation").into(),
        None => Error::Database(err),
    }
}
