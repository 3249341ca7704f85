//! Conversations domain: lifecycle, messages, escalations

pub mod domain;
pub mod repository;
pub mod service;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{
    Conversation, ConversationStatus, ConversationView, Escalation, EscalationOutcome, Message,
    SenderRole,
};
pub use domain::filters::{ConversationFilters, PriorityFilter, StatusFilter};
pub use domain::state::ConversationEvent;

// Re-export repository types
pub use repository::{
    ConversationRepository, ConversationsRepositories, EscalationRepository, MessageRepository,
};

// Re-export services
pub use service::{ConversationService, EscalationService, MessagingService};
