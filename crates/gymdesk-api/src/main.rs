use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use gymdesk_api::config::ApiConfig;
use gymdesk_api::state::AppState;
use gymdesk_audit::events::{AuditAction, AuditEvent};
use gymdesk_core::fixtures;
use gymdesk_storage::seed;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ApiConfig::from_env()?;
    tracing::info!(store = ?config.store, bucket = %config.bucket, "starting gymdesk-api");

    let store = config.build_store().await?;
    if config.seed {
        seed::seed(store.as_ref(), fixtures::dataset()).await?;
        AuditEvent::new(AuditAction::Seed, "dataset", "fixtures").emit();
    }

    let app = gymdesk_api::router(AppState::new(store));

    match config.bind {
        Some(addr) => {
            let listener = TcpListener::bind(addr).await?;
            tracing::info!(%addr, "listening");
            axum::serve(listener, app).await?;
            Ok(())
        }
        None => lambda_http::run(app).await.map_err(|e| eyre::eyre!(e)),
    }
}
