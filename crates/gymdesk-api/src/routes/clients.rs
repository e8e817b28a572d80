use axum::extract::{Path, State};
use axum::http::StatusCode;

use gymdesk_audit::events::AuditEvent;
use gymdesk_core::filter::client::ClientQuery;
use gymdesk_core::filter::goal::GoalQuery;
use gymdesk_core::filter::tracking::{ClientRoutineQuery, ProgressMetricsQuery};
use gymdesk_core::models::assignment::ClientRoutine;
use gymdesk_core::models::client::Client;
use gymdesk_core::models::goal::Goal;
use gymdesk_core::models::new_id;
use gymdesk_core::models::progress::ProgressMetrics;
use gymdesk_core::stats::{self, ClientStatistics};
use gymdesk_core::validate;
use gymdesk_storage::records::{self, Record};
use gymdesk_storage::store::ObjectStore;

use super::{Created, created, today};
use crate::error::ApiError;
use crate::extract::{Json, Query};
use crate::state::AppState;

pub async fn list_clients(
    State(state): State<AppState>,
    Query(query): Query<ClientQuery>,
) -> Result<Json<Vec<Client>>, ApiError> {
    let clients = records::load_all(state.store()).await?;
    Ok(Json(query.apply(clients, today())))
}

pub async fn get_client(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Client>, ApiError> {
    Ok(Json(records::load(state.store(), &id).await?))
}

/// Validation shared by create and update: field rules and unique email.
async fn check_client(store: &dyn ObjectStore, client: &Client) -> Result<(), ApiError> {
    validate::client(client)?;
    let existing: Vec<Client> = records::load_all(store).await?;
    validate::unique_email(client, &existing)?;
    Ok(())
}

pub async fn create_client(
    State(state): State<AppState>,
    Json(mut client): Json<Client>,
) -> Result<Created<Client>, ApiError> {
    client.id = new_id();
    // Routines are attached through client-routines, never directly.
    client.assigned_routines = None;
    let _guard = state.write_lock().await;
    check_client(state.store(), &client).await?;
    records::save(state.store(), &client).await?;
    AuditEvent::created(Client::KIND, &client.id).emit();
    Ok(created(client))
}

pub async fn update_client(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(mut client): Json<Client>,
) -> Result<Json<Client>, ApiError> {
    let _guard = state.write_lock().await;
    let stored: Client = records::load(state.store(), &id).await?;
    client.id = id;
    client.assigned_routines = stored.assigned_routines;
    check_client(state.store(), &client).await?;
    records::save(state.store(), &client).await?;
    AuditEvent::updated(Client::KIND, &client.id).emit();
    Ok(Json(client))
}

/// Delete a client along with its goals, measurements and routine
/// assignments.
pub async fn delete_client(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let store = state.store();
    let _guard = state.write_lock().await;
    records::remove::<Client>(store, &id).await?;

    let goals: Vec<Goal> = records::load_all(store).await?;
    for goal in goals.iter().filter(|g| g.client_id == id) {
        records::remove::<Goal>(store, &goal.id).await?;
    }
    let metrics: Vec<ProgressMetrics> = records::load_all(store).await?;
    for m in metrics.iter().filter(|m| m.client_id == id) {
        records::remove::<ProgressMetrics>(store, &m.id).await?;
    }
    let assignments: Vec<ClientRoutine> = records::load_all(store).await?;
    for a in assignments.iter().filter(|a| a.client_id == id) {
        records::remove::<ClientRoutine>(store, &a.id).await?;
    }

    AuditEvent::deleted(Client::KIND, &id).emit();
    Ok(StatusCode::NO_CONTENT)
}

pub async fn client_statistics(
    State(state): State<AppState>,
) -> Result<Json<ClientStatistics>, ApiError> {
    let clients: Vec<Client> = records::load_all(state.store()).await?;
    Ok(Json(stats::client_statistics(&clients, today())))
}

/// Body measurements of one client, newest first.
pub async fn client_progress(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<ProgressMetrics>>, ApiError> {
    records::load::<Client>(state.store(), &id).await?;
    let metrics = records::load_all(state.store()).await?;
    Ok(Json(ProgressMetricsQuery::for_client(&id).apply(metrics)))
}

pub async fn client_goals(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Goal>>, ApiError> {
    records::load::<Client>(state.store(), &id).await?;
    let goals = records::load_all(state.store()).await?;
    let query = GoalQuery {
        client_id: Some(id),
        ..Default::default()
    };
    Ok(Json(query.apply(goals)))
}

pub async fn client_routines(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<ClientRoutine>>, ApiError> {
    records::load::<Client>(state.store(), &id).await?;
    let assignments = records::load_all(state.store()).await?;
    let query = ClientRoutineQuery {
        client_id: Some(id),
        ..Default::default()
    };
    Ok(Json(query.apply(assignments)))
}
