//! CareDesk composition root
//!
//! Wires every domain service onto a single connection pool. An embedding
//! shell (HTTP, CLI, worker) builds one [`CareDesk`] at startup and resolves
//! the caller's [`AuthIdentity`] itself before calling in.

use caredesk_common::{db, telemetry, Config, Result};
use caredesk_conversations::{
    ConversationService, ConversationsRepositories, EscalationService, MessagingService,
};
use caredesk_documents::{DocumentRepository, DocumentService};
use caredesk_users::UserRepository;
use sqlx::PgPool;

pub use caredesk_auth::{AuthIdentity, AuthRole};

/// All CareDesk services sharing one pool
#[derive(Clone)]
pub struct CareDesk {
    pool: PgPool,
    pub users: UserRepository,
    pub conversations: ConversationService,
    pub messages: MessagingService,
    pub escalations: EscalationService,
    pub documents: DocumentService,
}

impl CareDesk {
    /// Build the services on an existing pool. Migrations are not run.
    pub fn new(pool: PgPool) -> Self {
        let repos = ConversationsRepositories::new(pool.clone());

        Self {
            users: UserRepository::new(pool.clone()),
            conversations: ConversationService::new(repos.clone()),
            messages: MessagingService::new(repos.clone()),
            escalations: EscalationService::new(repos),
            documents: DocumentService::new(DocumentRepository::new(pool.clone())),
            pool,
        }
    }

    /// Load configuration, install tracing, connect and migrate
    pub async fn from_env() -> Result<Self> {
        let config = Config::from_env()?;
        Self::from_config(&config).await
    }

    pub async fn from_config(config: &Config) -> Result<Self> {
        telemetry::init_tracing(config);

        let pool = db::connect(config).await?;
        db::run_migrations(&pool).await?;

        tracing::info!(
            max_connections = config.max_connections,
            "CareDesk services ready"
        );
        Ok(Self::new(pool))
    }

    /// The shared connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Close the pool, waiting for checked-out connections to return
    pub async fn shutdown(&self) {
        self.pool.close().await;
        tracing::info!("Database pool closed");
    }
}
