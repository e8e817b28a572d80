use gymdesk_core::fixtures;
use gymdesk_core::models::client::Client;
use gymdesk_core::models::goal::Goal;
use gymdesk_core::models::routine::Routine;
use gymdesk_storage::error::StorageError;
use gymdesk_storage::records::{self, Record};
use gymdesk_storage::seed;
use gymdesk_storage::store::{MemoryStore, ObjectStore};

#[tokio::test]
async fn save_and_load_a_record() {
    let store = MemoryStore::new();
    let client = fixtures::dataset().client("1").unwrap().clone();

    records::save(&store, &client).await.unwrap();
    assert_eq!(client.key(), "clients/1.json");

    let loaded: Client = records::load(&store, "1").await.unwrap();
    assert_eq!(loaded, client);
    assert!(records::exists::<Client>(&store, "1").await.unwrap());
    assert!(!records::exists::<Client>(&store, "2").await.unwrap());
}

#[tokio::test]
async fn missing_records_name_their_kind() {
    let store = MemoryStore::new();
    let err = records::load::<Goal>(&store, "42").await.unwrap_err();
    match err {
        StorageError::RecordNotFound { kind, id } => {
            assert_eq!(kind, "goal");
            assert_eq!(id, "42");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn remove_returns_the_stored_record() {
    let store = MemoryStore::new();
    let goal = fixtures::dataset().goals[0].clone();
    records::save(&store, &goal).await.unwrap();

    let removed: Goal = records::remove(&store, &goal.id).await.unwrap();
    assert_eq!(removed, goal);
    assert!(store.is_empty().await);
    assert!(records::remove::<Goal>(&store, &goal.id).await.is_err());
}

#[tokio::test]
async fn seeding_replaces_existing_records() {
    let store = MemoryStore::new();
    store
        .put("routines/stale.json", b"{}".to_vec(), None)
        .await
        .unwrap();
    store.put("uploads/photo.jpg", vec![1, 2, 3], None).await.unwrap();

    let data = fixtures::dataset();
    seed::seed(&store, data).await.unwrap();

    let loaded = records::load_dataset(&store).await.unwrap();
    assert_eq!(loaded.clients.len(), data.clients.len());
    assert_eq!(loaded.goals.len(), data.goals.len());
    assert_eq!(loaded.client_routines, {
        let mut expected = data.client_routines.clone();
        expected.sort_by(|a, b| a.id.cmp(&b.id));
        expected
    });

    let routines: Vec<Routine> = records::load_all(&store).await.unwrap();
    assert_eq!(routines.len(), 3);
    assert!(routines.iter().all(|r| r.id != "stale"));

    // Uploads are not records and survive a reseed.
    assert!(store.get("uploads/photo.jpg").await.is_ok());
}

#[tokio::test]
async fn seeding_twice_is_stable() {
    let store = MemoryStore::new();
    let data = fixtures::dataset();
    seed::seed(&store, data).await.unwrap();
    let first = store.len().await;
    seed::seed(&store, data).await.unwrap();
    assert_eq!(store.len().await, first);
}
