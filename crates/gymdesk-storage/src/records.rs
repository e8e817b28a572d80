//! Typed JSON documents, one object per record.

use serde::Serialize;
use serde::de::DeserializeOwned;

use gymdesk_core::dataset::Dataset;
use gymdesk_core::models::assignment::ClientRoutine;
use gymdesk_core::models::client::Client;
use gymdesk_core::models::exercise::Exercise;
use gymdesk_core::models::goal::Goal;
use gymdesk_core::models::progress::ProgressMetrics;
use gymdesk_core::models::routine::Routine;
use gymdesk_core::models::workout::Workout;
use gymdesk_core::s3_keys;

use crate::error::StorageError;
use crate::store::ObjectStore;

const JSON: &str = "application/json";

/// A document stored under its own key.
pub trait Record: Serialize + DeserializeOwned + Send + Sync {
    /// Human-readable kind used in "not found" errors.
    const KIND: &'static str;
    const PREFIX: &'static str;

    fn id(&self) -> &str;

    fn key_for(id: &str) -> String;

    fn key(&self) -> String {
        Self::key_for(self.id())
    }
}

macro_rules! record {
    ($ty:ty, $kind:literal, $prefix:path, $key:path) => {
        impl Record for $ty {
            const KIND: &'static str = $kind;
            const PREFIX: &'static str = $prefix;

            fn id(&self) -> &str {
                &self.id
            }

            fn key_for(id: &str) -> String {
                $key(id)
            }
        }
    };
}

record!(Client, "client", s3_keys::CLIENTS_PREFIX, s3_keys::client);
record!(Exercise, "exercise", s3_keys::EXERCISES_PREFIX, s3_keys::exercise);
record!(Workout, "workout", s3_keys::WORKOUTS_PREFIX, s3_keys::workout);
record!(Routine, "routine", s3_keys::ROUTINES_PREFIX, s3_keys::routine);
record!(
    ClientRoutine,
    "client routine",
    s3_keys::CLIENT_ROUTINES_PREFIX,
    s3_keys::client_routine
);
record!(
    ProgressMetrics,
    "progress metrics",
    s3_keys::PROGRESS_METRICS_PREFIX,
    s3_keys::progress_metrics
);
record!(Goal, "goal", s3_keys::GOALS_PREFIX, s3_keys::goal);

/// Every record of type `R`.
pub async fn load_all<R: Record>(store: &dyn ObjectStore) -> Result<Vec<R>, StorageError> {
    let keys = store.list(R::PREFIX).await?;
    let mut records = Vec::with_capacity(keys.len());
    for key in keys.iter().filter(|k| k.ends_with(".json")) {
        let body = store.get(key).await?;
        records.push(serde_json::from_slice(&body)?);
    }
    Ok(records)
}

/// Load one record. A missing object maps to [`StorageError::RecordNotFound`].
pub async fn load<R: Record>(store: &dyn ObjectStore, id: &str) -> Result<R, StorageError> {
    let body = store.get(&R::key_for(id)).await.map_err(|e| match e {
        StorageError::NotFound { .. } => StorageError::RecordNotFound {
            kind: R::KIND,
            id: id.to_string(),
        },
        other => other,
    })?;
    Ok(serde_json::from_slice(&body)?)
}

pub async fn exists<R: Record>(store: &dyn ObjectStore, id: &str) -> Result<bool, StorageError> {
    match load::<R>(store, id).await {
        Ok(_) => Ok(true),
        Err(StorageError::RecordNotFound { .. }) => Ok(false),
        Err(e) => Err(e),
    }
}

pub async fn save<R: Record>(store: &dyn ObjectStore, record: &R) -> Result<(), StorageError> {
    let body = serde_json::to_vec_pretty(record)?;
    store.put(&record.key(), body, Some(JSON)).await
}

/// Delete a record, returning what was stored.
pub async fn remove<R: Record>(store: &dyn ObjectStore, id: &str) -> Result<R, StorageError> {
    let record = load::<R>(store, id).await?;
    store.delete(&R::key_for(id)).await?;
    Ok(record)
}

/// Read the whole bucket into a [`Dataset`].
pub async fn load_dataset(store: &dyn ObjectStore) -> Result<Dataset, StorageError> {
    Ok(Dataset {
        clients: load_all(store).await?,
        exercises: load_all(store).await?,
        workouts: load_all(store).await?,
        routines: load_all(store).await?,
        client_routines: load_all(store).await?,
        progress_metrics: load_all(store).await?,
        goals: load_all(store).await?,
    })
}
