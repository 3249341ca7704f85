//! Conversation repository

use crate::domain::entities::{Conversation, ConversationView};
use crate::domain::filters::{dashboard_rank_sql, ConversationFilters};
use crate::domain::state::ConversationEvent;
use caredesk_auth::ReadScope;
use caredesk_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

/// All columns in the conversations table, used for SELECT and RETURNING clauses.
pub(crate) const CONVERSATION_COLUMNS: &str = "\
    id, user_id, status, assigned_admin_id, \
    last_message_at, created_at, updated_at";

/// Same columns qualified with the `c` alias, plus the owner's email from `users u`.
const STAFF_VIEW_COLUMNS: &str = "\
    c.id, c.user_id, c.status, c.assigned_admin_id, \
    c.last_message_at, c.created_at, c.updated_at, \
    u.email AS user_email";

#[derive(Clone)]
pub struct ConversationRepository {
    pool: PgPool,
}

impl ConversationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new conversation
    pub async fn create(&self, conv: &Conversation) -> Result<Conversation> {
        let query = format!(
            "INSERT INTO conversations ({CONVERSATION_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {CONVERSATION_COLUMNS}"
        );
        let created = sqlx::query_as::<_, Conversation>(&query)
            .bind(conv.id)
            .bind(conv.user_id)
            .bind(conv.status)
            .bind(conv.assigned_admin_id)
            .bind(conv.last_message_at)
            .bind(conv.created_at)
            .bind(conv.updated_at)
            .fetch_one(&self.pool)
            .await?;

        Ok(created)
    }

    /// Find a conversation visible within `scope`.
    ///
    /// Owner-scoped reads filter on `user_id` in SQL, so a conversation owned
    /// by someone else comes back as `None`, same as a missing one.
    pub async fn find_in_scope(
        &self,
        id: Uuid,
        scope: ReadScope,
    ) -> Result<Option<ConversationView>> {
        let view = match scope {
            ReadScope::Owner(user_id) => {
                let query = format!(
                    "SELECT {CONVERSATION_COLUMNS}, NULL::text AS user_email \
                     FROM conversations \
                     WHERE id = $1 AND user_id = $2"
                );
                sqlx::query_as::<_, ConversationView>(&query)
                    .bind(id)
                    .bind(user_id)
                    .fetch_optional(&self.pool)
                    .await?
            }
            ReadScope::All => {
                let query = format!(
                    "SELECT {STAFF_VIEW_COLUMNS} \
                     FROM conversations c \
                     JOIN users u ON u.id = c.user_id \
                     WHERE c.id = $1"
                );
                sqlx::query_as::<_, ConversationView>(&query)
                    .bind(id)
                    .fetch_optional(&self.pool)
                    .await?
            }
        };

        Ok(view)
    }

    /// List a user's own conversations, most recent activity first
    pub async fn list_by_owner(&self, user_id: Uuid) -> Result<Vec<ConversationView>> {
        let query = format!(
            "SELECT {CONVERSATION_COLUMNS}, NULL::text AS user_email \
             FROM conversations \
             WHERE user_id = $1 \
             ORDER BY last_message_at DESC NULLS LAST, created_at DESC"
        );
        let convs = sqlx::query_as::<_, ConversationView>(&query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(convs)
    }

    /// List conversations for the care dashboard.
    ///
    /// Escalated conversations always sort first, then open, then closed;
    /// within a rank, most recent activity first.
    pub async fn list_for_dashboard(
        &self,
        filters: ConversationFilters,
    ) -> Result<Vec<ConversationView>> {
        let statuses = filters.admissible_statuses();
        if statuses.is_empty() {
            return Ok(Vec::new());
        }

        let query = format!(
            "SELECT {STAFF_VIEW_COLUMNS} \
             FROM conversations c \
             JOIN users u ON u.id = c.user_id \
             WHERE c.status = ANY($1) \
             ORDER BY {rank}, c.last_message_at DESC NULLS LAST, c.created_at DESC",
            rank = dashboard_rank_sql("c.status"),
        );
        let convs = sqlx::query_as::<_, ConversationView>(&query)
            .bind(statuses)
            .fetch_all(&self.pool)
            .await?;

        Ok(convs)
    }

    /// Apply a status event unconditionally
    pub async fn apply_event(
        &self,
        id: Uuid,
        event: ConversationEvent,
    ) -> Result<Option<Conversation>> {
        let query = format!(
            "UPDATE conversations SET \
                status = $2, \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {CONVERSATION_COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Conversation>(&query)
            .bind(id)
            .bind(event.target())
            .fetch_optional(&self.pool)
            .await?;

        Ok(updated)
    }
}
