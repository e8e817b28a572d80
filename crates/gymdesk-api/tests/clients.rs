mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{delete, get, ids, post, put, seeded_app};

fn new_client(email: &str) -> serde_json::Value {
    json!({
        "name": "Elena Vidal",
        "email": email,
        "phone": "+34 600 000 111",
        "age": 33,
        "weight": 61.5,
        "height": 168.0,
        "goals": ["Mejorar resistencia"],
        "joinDate": "2024-04-02",
        "subscription": { "type": "standard", "startDate": "2024-04-02", "endDate": "2024-10-02" }
    })
}

#[tokio::test]
async fn health_reports_ok() {
    let app = seeded_app().await;
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn list_orders_by_name_and_filters() {
    let app = seeded_app().await;

    let (status, body) = get(&app, "/clients").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 10);
    assert_eq!(body[0]["name"], "Ana Martínez");

    let (_, body) = get(&app, "/clients?search=GONZALEZ").await;
    assert_eq!(ids(&body), ["1"]);

    let (_, body) = get(&app, "/clients?minAge=35&ordering=-age").await;
    let ages: Vec<u64> = body.as_array().unwrap().iter().map(|c| c["age"].as_u64().unwrap()).collect();
    assert!(!ages.is_empty());
    assert!(ages.iter().all(|a| *a >= 35));
    assert!(ages.windows(2).all(|w| w[0] >= w[1]));

    let (_, body) = get(&app, "/clients?subscriptionType=premium,standard").await;
    assert_eq!(body.as_array().unwrap().len(), 7);
}

#[tokio::test]
async fn missing_client_is_a_json_404() {
    let app = seeded_app().await;
    let (status, body) = get(&app, "/clients/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "client not found: 999");
}

#[tokio::test]
async fn create_assigns_an_id_and_stores_the_client() {
    let app = seeded_app().await;
    let (status, created) = post(&app, "/clients", new_client("elena@email.com")).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().unwrap();
    assert!(!id.is_empty());

    let (status, fetched) = get(&app, &format!("/clients/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (_, body) = get(&app, "/clients").await;
    assert_eq!(body.as_array().unwrap().len(), 11);
}

#[tokio::test]
async fn create_rejects_bad_input() {
    let app = seeded_app().await;

    let (status, body) = post(&app, "/clients", new_client("MARIA.GONZALEZ@email.com")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("email"));

    let (status, _) = post(&app, "/clients", new_client("not-an-email")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

}

#[tokio::test]
async fn assigned_routines_are_not_taken_from_the_body() {
    let app = seeded_app().await;

    let mut dangling = new_client("elena@email.com");
    dangling["assignedRoutines"] = json!(["42"]);
    let (status, created) = post(&app, "/clients", dangling).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(created.get("assignedRoutines").is_none());

    // Client 1 keeps its active assignment whatever the update body says.
    let (_, before) = get(&app, "/clients/1").await;
    let kept = before["assignedRoutines"].clone();
    assert!(!kept.as_array().unwrap().is_empty());

    let mut body = before.clone();
    body.as_object_mut().unwrap().remove("assignedRoutines");
    body["notes"] = json!("Prefiere entrenar por la mañana");
    let (status, updated) = put(&app, "/clients/1", body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["assignedRoutines"], kept);

    let (_, with_routines) = get(&app, "/clients?hasRoutines=true").await;
    assert!(ids(&with_routines).contains(&"1".to_string()));

    let mut body = updated.clone();
    body["assignedRoutines"] = json!([]);
    let (_, updated) = put(&app, "/clients/1", body).await;
    assert_eq!(updated["assignedRoutines"], kept);
}

#[tokio::test]
async fn malformed_input_is_a_json_400() {
    let app = seeded_app().await;

    let mut body = new_client("elena@email.com");
    body["age"] = json!("treinta");
    let (status, err) = post(&app, "/clients", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(err["error"].as_str().unwrap().contains("age"));

    let (status, err) = get(&app, "/clients?minAge=many").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(err["error"].is_string());
}

#[tokio::test]
async fn update_keeps_the_path_id() {
    let app = seeded_app().await;
    let (_, mut client) = get(&app, "/clients/4").await;
    client["weight"] = json!(80.5);
    client["id"] = json!("something-else");

    let (status, updated) = put(&app, "/clients/4", client).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], "4");
    assert_eq!(updated["weight"], 80.5);

    // Keeping its own email is not a duplicate.
    let (status, _) = put(&app, "/clients/4", updated).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = put(&app, "/clients/999", new_client("x@email.com")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_cascades_to_owned_records() {
    let app = seeded_app().await;
    let (status, _) = delete(&app, "/clients/1").await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    assert_eq!(get(&app, "/clients/1").await.0, StatusCode::NOT_FOUND);
    let (_, goals) = get(&app, "/goals?clientId=1").await;
    assert!(goals.as_array().unwrap().is_empty());
    let (_, metrics) = get(&app, "/progress-metrics?clientId=1").await;
    assert!(metrics.as_array().unwrap().is_empty());
    let (_, assignments) = get(&app, "/client-routines?clientId=1").await;
    assert!(assignments.as_array().unwrap().is_empty());

    // Other clients are untouched.
    let (_, goals) = get(&app, "/goals").await;
    assert_eq!(goals.as_array().unwrap().len(), 2);
    assert_eq!(delete(&app, "/clients/1").await.0, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn statistics_cover_all_clients() {
    let app = seeded_app().await;
    let (status, body) = get(&app, "/clients/statistics").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalClients"], 10);
    assert_eq!(body["ageStats"]["min"], 25.0);
    assert_eq!(body["ageStats"]["max"], 40.0);
    assert_eq!(body["monthlyRegistrations"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn nested_client_collections() {
    let app = seeded_app().await;

    let (_, progress) = get(&app, "/clients/1/progress").await;
    assert_eq!(ids(&progress), ["2", "1"], "newest measurement first");

    let (_, goals) = get(&app, "/clients/3/goals").await;
    assert_eq!(ids(&goals), ["3"]);

    let (_, routines) = get(&app, "/clients/1/routines").await;
    assert_eq!(ids(&routines), ["1"]);

    assert_eq!(get(&app, "/clients/999/goals").await.0, StatusCode::NOT_FOUND);
}
