use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Deserialize;

use gymdesk_audit::events::AuditEvent;
use gymdesk_core::filter::tracking::ProgressMetricsQuery;
use gymdesk_core::models::client::Client;
use gymdesk_core::models::new_id;
use gymdesk_core::models::progress::ProgressMetrics;
use gymdesk_core::validate;
use gymdesk_storage::records::{self, Record};
use gymdesk_storage::store::ObjectStore;

use super::{Created, created};
use crate::error::ApiError;
use crate::extract::{Json, Query};
use crate::state::AppState;

pub async fn list_metrics(
    State(state): State<AppState>,
    Query(query): Query<ProgressMetricsQuery>,
) -> Result<Json<Vec<ProgressMetrics>>, ApiError> {
    let metrics = records::load_all(state.store()).await?;
    Ok(Json(query.apply(metrics)))
}

pub async fn get_metrics(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProgressMetrics>, ApiError> {
    Ok(Json(records::load(state.store(), &id).await?))
}

async fn check_metrics(store: &dyn ObjectStore, metrics: &ProgressMetrics) -> Result<(), ApiError> {
    validate::progress_metrics(metrics)?;
    records::load::<Client>(store, &metrics.client_id).await?;
    Ok(())
}

pub async fn create_metrics(
    State(state): State<AppState>,
    Json(mut metrics): Json<ProgressMetrics>,
) -> Result<Created<ProgressMetrics>, ApiError> {
    let _guard = state.write_lock().await;
    metrics.id = new_id();
    check_metrics(state.store(), &metrics).await?;
    records::save(state.store(), &metrics).await?;
    AuditEvent::created(ProgressMetrics::KIND, &metrics.id).emit();
    Ok(created(metrics))
}

pub async fn update_metrics(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(mut metrics): Json<ProgressMetrics>,
) -> Result<Json<ProgressMetrics>, ApiError> {
    let _guard = state.write_lock().await;
    records::load::<ProgressMetrics>(state.store(), &id).await?;
    metrics.id = id;
    check_metrics(state.store(), &metrics).await?;
    records::save(state.store(), &metrics).await?;
    AuditEvent::updated(ProgressMetrics::KIND, &metrics.id).emit();
    Ok(Json(metrics))
}

pub async fn delete_metrics(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let _guard = state.write_lock().await;
    records::remove::<ProgressMetrics>(state.store(), &id).await?;
    AuditEvent::deleted(ProgressMetrics::KIND, &id).emit();
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Deserialize)]
pub struct ClientProgressParams {
    #[serde(rename = "clientId", alias = "client_id")]
    pub client_id: Option<String>,
}

/// Measurements of one client, newest first. `clientId` is required.
pub async fn client_progress(
    State(state): State<AppState>,
    Query(params): Query<ClientProgressParams>,
) -> Result<Json<Vec<ProgressMetrics>>, ApiError> {
    let client_id = params
        .client_id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest("clientId is required".to_string()))?;
    let metrics = records::load_all(state.store()).await?;
    Ok(Json(ProgressMetricsQuery::for_client(&client_id).apply(metrics)))
}
