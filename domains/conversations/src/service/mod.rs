//! Services for the Conversations domain
//!
//! Each service holds an injected repository bundle and re-reads the store
//! on every call; nothing is cached between operations.

pub mod conversations;
pub mod escalations;
pub mod messages;

pub use conversations::ConversationService;
pub use escalations::EscalationService;
pub use messages::MessagingService;
