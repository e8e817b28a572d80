use gymdesk_core::dataset::Dataset;
use gymdesk_core::s3_keys::RECORD_PREFIXES;
use tracing::info;

use crate::error::StorageError;
use crate::records::{self, Record};
use crate::store::ObjectStore;

/// Delete every object under `prefix`. Returns how many were removed.
pub async fn clear_prefix(store: &dyn ObjectStore, prefix: &str) -> Result<usize, StorageError> {
    let keys = store.list(prefix).await?;
    for key in &keys {
        store.delete(key).await?;
    }
    Ok(keys.len())
}

async fn save_all<R: Record>(store: &dyn ObjectStore, items: &[R]) -> Result<(), StorageError> {
    for item in items {
        records::save(store, item).await?;
    }
    info!(kind = R::KIND, count = items.len(), "seeded records");
    Ok(())
}

/// Replace all stored records with `data`.
pub async fn seed(store: &dyn ObjectStore, data: &Dataset) -> Result<(), StorageError> {
    for prefix in RECORD_PREFIXES {
        let removed = clear_prefix(store, prefix).await?;
        if removed > 0 {
            info!(prefix, removed, "cleared records");
        }
    }

    save_all(store, &data.clients).await?;
    save_all(store, &data.exercises).await?;
    save_all(store, &data.workouts).await?;
    save_all(store, &data.routines).await?;
    save_all(store, &data.client_routines).await?;
    save_all(store, &data.progress_metrics).await?;
    save_all(store, &data.goals).await?;
    Ok(())
}
