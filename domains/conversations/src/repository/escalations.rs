//! Escalation repository

use crate::domain::entities::Escalation;
use caredesk_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

/// All columns in the escalations table, used for SELECT and RETURNING clauses.
pub(crate) const ESCALATION_COLUMNS: &str =
    "id, conversation_id, requested_by_user_id, created_at";

#[derive(Clone)]
pub struct EscalationRepository {
    pool: PgPool,
}

impl EscalationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find the escalation recorded for a conversation, if any
    pub async fn find_by_conversation(&self, conversation_id: Uuid) -> Result<Option<Escalation>> {
        let query = format!(
            "SELECT {ESCALATION_COLUMNS} FROM escalations WHERE conversation_id = $1"
        );
        let escalation = sqlx::query_as::<_, Escalation>(&query)
            .bind(conversation_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(escalation)
    }

    /// Number of escalation rows for a conversation (0 or 1)
    pub async fn count_for_conversation(&self, conversation_id: Uuid) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM escalations WHERE conversation_id = $1",
        )
        .bind(conversation_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }
}
