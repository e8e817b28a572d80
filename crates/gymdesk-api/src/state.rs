use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use gymdesk_storage::store::ObjectStore;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn ObjectStore>,
    /// Held by every handler that writes, so a reference check and its save
    /// never interleave with another write in this process.
    writes: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self {
            store,
            writes: Arc::new(Mutex::new(())),
        }
    }

    pub fn store(&self) -> &dyn ObjectStore {
        self.store.as_ref()
    }

    pub async fn write_lock(&self) -> MutexGuard<'_, ()> {
        self.writes.lock().await
    }
}
