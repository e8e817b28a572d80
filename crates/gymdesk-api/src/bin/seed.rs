//! Replace the records in the configured bucket with the bundled fixtures.

use tracing_subscriber::EnvFilter;

use gymdesk_api::config::{ApiConfig, StoreKind};
use gymdesk_audit::events::{AuditAction, AuditEvent};
use gymdesk_core::{fixtures, validate};
use gymdesk_storage::seed;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ApiConfig::from_env()?;
    if config.store == StoreKind::Memory {
        eyre::bail!("seeding an in-memory store from a separate process has no effect");
    }

    let data = fixtures::dataset();
    let problems = validate::dataset(data);
    if !problems.is_empty() {
        eyre::bail!("fixtures are inconsistent:\n{}", problems.join("\n"));
    }

    let store = config.build_store().await?;
    seed::seed(store.as_ref(), data).await?;
    AuditEvent::new(AuditAction::Seed, "dataset", "fixtures")
        .with_details(serde_json::json!({
            "bucket": config.bucket,
            "clients": data.clients.len(),
            "exercises": data.exercises.len(),
            "workouts": data.workouts.len(),
            "routines": data.routines.len(),
            "clientRoutines": data.client_routines.len(),
            "progressMetrics": data.progress_metrics.len(),
            "goals": data.goals.len(),
        }))
        .emit();
    Ok(())
}
