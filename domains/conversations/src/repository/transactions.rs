//! Transaction helpers for Conversations domain
//!
//! Each helper runs one statement inside a caller-owned transaction. The
//! services compose them and decide when to commit.

use super::conversations::CONVERSATION_COLUMNS;
use super::escalations::ESCALATION_COLUMNS;
use super::messages::MESSAGE_COLUMNS;
use crate::domain::entities::{Conversation, Escalation, Message};
use crate::domain::state::ConversationEvent;
use chrono::{DateTime, Utc};
use sqlx::{Postgres, Transaction};
use uuid::Uuid;

/// Insert a message within a transaction
pub async fn insert_message_tx(
    tx: &mut Transaction<'_, Postgres>,
    msg: &Message,
) -> Result<Message, sqlx::Error> {
    let query = format!(
        "INSERT INTO messages ({MESSAGE_COLUMNS}) \
         VALUES ($1, $2, $3, $4, $5, $6) \
         RETURNING {MESSAGE_COLUMNS}"
    );
    let row = sqlx::query_as::<_, Message>(&query)
        .bind(msg.id)
        .bind(msg.conversation_id)
        .bind(msg.sender_role)
        .bind(msg.sender_user_id)
        .bind(&msg.content)
        .bind(msg.created_at)
        .fetch_one(&mut **tx)
        .await?;
    Ok(row)
}

/// Record message activity on the owning conversation within a transaction.
///
/// `last_message_at` only moves forward, so a slower transaction carrying an
/// older message cannot overwrite a newer committed timestamp. Returns the
/// number of rows touched (0 when the conversation does not exist).
pub async fn touch_conversation_tx(
    tx: &mut Transaction<'_, Postgres>,
    conversation_id: Uuid,
    message_at: DateTime<Utc>,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE conversations
        SET last_message_at = GREATEST(COALESCE(last_message_at, $2), $2),
            updated_at = NOW()
        WHERE id = $1
        "#,
    )
    .bind(conversation_id)
    .bind(message_at)
    .execute(&mut **tx)
    .await?;
    Ok(result.rows_affected())
}

/// Insert the escalation record unless one already exists.
///
/// The unique constraint on `conversation_id` arbitrates concurrent requests:
/// exactly one insert wins, the others return `None`.
pub async fn insert_escalation_tx(
    tx: &mut Transaction<'_, Postgres>,
    conversation_id: Uuid,
    requested_by_user_id: Uuid,
) -> Result<Option<Escalation>, sqlx::Error> {
    let query = format!(
        "INSERT INTO escalations (conversation_id, requested_by_user_id) \
         VALUES ($1, $2) \
         ON CONFLICT (conversation_id) DO NOTHING \
         RETURNING {ESCALATION_COLUMNS}"
    );
    let row = sqlx::query_as::<_, Escalation>(&query)
        .bind(conversation_id)
        .bind(requested_by_user_id)
        .fetch_optional(&mut **tx)
        .await?;
    Ok(row)
}

/// Apply a status event to a conversation within a transaction
pub async fn apply_event_tx(
    tx: &mut Transaction<'_, Postgres>,
    conversation_id: Uuid,
    event: ConversationEvent,
) -> Result<Option<Conversation>, sqlx::Error> {
    let query = format!(
        "UPDATE conversations SET \
            status = $2, \
            updated_at = NOW() \
         WHERE id = $1 \
         RETURNING {CONVERSATION_COLUMNS}"
    );
    let row = sqlx::query_as::<_, Conversation>(&query)
        .bind(conversation_id)
        .bind(event.target())
        .fetch_optional(&mut **tx)
        .await?;
    Ok(row)
}
