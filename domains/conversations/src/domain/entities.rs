//! Domain entities for Conversations domain
//!
//! Conversations, their message transcript, and the one-time escalation
//! record. Each entity is validated before it reaches storage.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use caredesk_common::{Error, Result};

/// Conversation status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, Default)]
#[sqlx(type_name = "conversation_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConversationStatus {
    #[default]
    Open,
    Escalated,
    Closed,
}

impl ConversationStatus {
    /// Every status, in dashboard order
    pub const ALL: [ConversationStatus; 3] = [
        ConversationStatus::Escalated,
        ConversationStatus::Open,
        ConversationStatus::Closed,
    ];

    /// Storage literal
    pub fn as_str(&self) -> &'static str {
        match self {
            ConversationStatus::Open => "OPEN",
            ConversationStatus::Escalated => "ESCALATED",
            ConversationStatus::Closed => "CLOSED",
        }
    }
}

impl std::fmt::Display for ConversationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConversationStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ConversationStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| Error::Validation(format!("Unknown conversation status '{s}'")))
    }
}

/// Who authored a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "sender_role", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SenderRole {
    User,
    Care,
    Bot,
}

impl std::fmt::Display for SenderRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SenderRole::User => write!(f, "USER"),
            SenderRole::Care => write!(f, "CARE"),
            SenderRole::Bot => write!(f, "BOT"),
        }
    }
}

impl FromStr for SenderRole {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "USER" => Ok(SenderRole::User),
            "CARE" => Ok(SenderRole::Care),
            "BOT" => Ok(SenderRole::Bot),
            other => Err(Error::Validation(format!("Unknown sender role '{other}'"))),
        }
    }
}

/// Conversation entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Conversation {
    pub id: Uuid,
    pub user_id: Uuid,
    pub status: ConversationStatus,
    pub assigned_admin_id: Option<Uuid>,
    pub last_message_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Conversation {
    /// Create a new open conversation owned by `user_id`
    pub fn new(user_id: Uuid) -> Self {
        let now = Utc::now();
        Conversation {
            id: Uuid::new_v4(),
            user_id,
            status: ConversationStatus::default(),
            assigned_admin_id: None,
            last_message_at: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Conversation as returned to a caller.
///
/// Care and admin reads carry the owner's email; end-user reads do not.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct ConversationView {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub conversation: Conversation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
}

impl std::ops::Deref for ConversationView {
    type Target = Conversation;

    fn deref(&self) -> &Conversation {
        &self.conversation
    }
}

/// Message entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Message {
    pub id: Uuid,
    pub conversation_id: Uuid,
    pub sender_role: SenderRole,
    pub sender_user_id: Option<Uuid>,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Create a new message.
    ///
    /// Bot messages carry no sender; user messages always name one. Care
    /// messages name the agent only when one is attributed.
    pub fn new(
        conversation_id: Uuid,
        sender_role: SenderRole,
        sender_user_id: Option<Uuid>,
        content: String,
    ) -> Result<Self> {
        Self::validate_content(&content)?;
        Self::validate_sender(sender_role, sender_user_id)?;

        Ok(Message {
            id: Uuid::new_v4(),
            conversation_id,
            sender_role,
            sender_user_id,
            content,
            created_at: Utc::now(),
        })
    }

    /// Validate message content (CHECK (length(trim(content)) > 0))
    fn validate_content(content: &str) -> Result<()> {
        if content.trim().is_empty() {
            return Err(Error::Validation(
                "Message content cannot be empty or whitespace-only".to_string(),
            ));
        }
        Ok(())
    }

    fn validate_sender(role: SenderRole, sender_user_id: Option<Uuid>) -> Result<()> {
        match (role, sender_user_id) {
            (SenderRole::Bot, Some(_)) => Err(Error::Validation(
                "Bot messages cannot name a sender user".to_string(),
            )),
            (SenderRole::User, None) => Err(Error::Validation(
                "User messages must name the sender user".to_string(),
            )),
            _ => Ok(()),
        }
    }
}

/// Escalation entity: at most one per conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Escalation {
    pub id: Uuid,
    pub conversation_id: Uuid,
    pub requested_by_user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Result of an escalation request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EscalationOutcome {
    /// `None` when the conversation had already been escalated before
    pub escalation: Option<Escalation>,
    pub conversation: Conversation,
}

impl EscalationOutcome {
    pub fn newly_escalated(&self) -> bool {
        self.escalation.is_some()
    }
}

// ============================================================================
// Tests
// ============================================================================
