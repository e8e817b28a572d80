//! Runs against a real bucket. Needs AWS credentials and `GYMDESK_TEST_BUCKET`.

use gymdesk_core::fixtures;
use gymdesk_core::models::exercise::Exercise;
use gymdesk_storage::records;
use gymdesk_storage::store::{ObjectStore, S3Store};

#[tokio::test]
#[ignore]
async fn s3_record_round_trip() {
    let bucket = std::env::var("GYMDESK_TEST_BUCKET").expect("GYMDESK_TEST_BUCKET");
    let store = S3Store::connect(bucket).await.unwrap();

    let exercise = fixtures::dataset().exercises[0].clone();
    records::save(&store, &exercise).await.unwrap();
    let loaded: Exercise = records::load(&store, &exercise.id).await.unwrap();
    assert_eq!(loaded, exercise);

    records::remove::<Exercise>(&store, &exercise.id).await.unwrap();
    assert!(store.get(&format!("exercises/{}.json", exercise.id)).await.is_err());
}
