// CareDesk - apply database migrations

use tracing::{error, info};

use caredesk_app::CareDesk;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = CareDesk::from_env().await.map_err(|e| {
        error!(error_code = e.error_code(), "Failed to start: {}", e);
        e
    })?;

    info!("Migrations applied");

    app.shutdown().await;
    Ok(())
}
