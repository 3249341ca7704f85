//! State machine for conversation status transitions
//!
//! Conversation states: Open, Escalated, Closed. The graph is flat: every
//! state accepts every event, and the event alone decides the next state, so
//! writes apply [`ConversationEvent::target`] without reading the prior status.

use serde::{Deserialize, Serialize};

use super::entities::ConversationStatus;

/// Events that trigger conversation state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "status", rename_all = "snake_case")]
pub enum ConversationEvent {
    /// Administrative status change by care/admin staff
    SetStatus(ConversationStatus),
    /// User asked for human attention
    Escalate,
}

impl ConversationEvent {
    /// State the conversation is in after this event
    pub fn target(&self) -> ConversationStatus {
        match self {
            Self::SetStatus(status) => *status,
            Self::Escalate => ConversationStatus::Escalated,
        }
    }
}

impl std::fmt::Display for ConversationEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SetStatus(status) => write!(f, "set_status({status})"),
            Self::Escalate => write!(f, "escalate"),
        }
    }
}
