//! Repository implementations for Conversations domain

pub mod conversations;
pub mod escalations;
pub mod messages;
pub mod transactions;

use sqlx::{PgPool, Postgres, Transaction};

pub use conversations::ConversationRepository;
pub use escalations::EscalationRepository;
pub use messages::MessageRepository;

/// Combined repository access for the Conversations domain
#[derive(Clone)]
pub struct ConversationsRepositories {
    pool: PgPool,
    pub conversations: ConversationRepository,
    pub messages: MessageRepository,
    pub escalations: EscalationRepository,
}

impl ConversationsRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            conversations: ConversationRepository::new(pool.clone()),
            messages: MessageRepository::new(pool.clone()),
            escalations: EscalationRepository::new(pool.clone()),
            pool,
        }
    }

    /// Begin a new database transaction.
    ///
    /// Dropping the transaction without committing rolls it back and returns
    /// the connection to the pool.
    #[mutants::skip] // Thin wrapper over PgPool::begin, covered by integration tests
    pub async fn begin(&self) -> std::result::Result<Transaction<'static, Postgres>, sqlx::Error> {
        self.pool.begin().await
    }
}
