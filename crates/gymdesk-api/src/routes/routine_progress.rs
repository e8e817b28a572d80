//! Progress entries live inside their client routine. This collection
//! exposes them flat across all assignments.

use axum::extract::{Path, State};
use axum::http::StatusCode;

use gymdesk_audit::events::AuditEvent;
use gymdesk_core::filter::tracking::RoutineProgressQuery;
use gymdesk_core::models::assignment::{ClientRoutine, RoutineProgress};
use gymdesk_core::models::new_id;
use gymdesk_core::models::workout::Workout;
use gymdesk_core::validate;
use gymdesk_storage::records;
use gymdesk_storage::store::ObjectStore;

use super::{Created, created};
use crate::error::ApiError;
use crate::extract::{Json, Query};
use crate::state::AppState;

const KIND: &str = "routine progress";

fn progress_not_found(id: &str) -> ApiError {
    ApiError::NotFound(format!("{KIND} not found: {id}"))
}

async fn owner(store: &dyn ObjectStore, id: &str) -> Result<ClientRoutine, ApiError> {
    let assignments: Vec<ClientRoutine> = records::load_all(store).await?;
    assignments
        .into_iter()
        .find(|a| a.progress_entry(id).is_some())
        .ok_or_else(|| progress_not_found(id))
}

pub async fn list_progress(
    State(state): State<AppState>,
    Query(query): Query<RoutineProgressQuery>,
) -> Result<Json<Vec<RoutineProgress>>, ApiError> {
    let assignments: Vec<ClientRoutine> = records::load_all(state.store()).await?;
    let entries = assignments.into_iter().flat_map(|a| a.progress).collect();
    Ok(Json(query.apply(entries)))
}

pub async fn get_progress(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RoutineProgress>, ApiError> {
    let assignment = owner(state.store(), &id).await?;
    assignment
        .progress_entry(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| progress_not_found(&id))
}

pub async fn create_progress(
    State(state): State<AppState>,
    Json(mut entry): Json<RoutineProgress>,
) -> Result<Created<RoutineProgress>, ApiError> {
    let store = state.store();
    let _guard = state.write_lock().await;
    let mut assignment: ClientRoutine = records::load(store, &entry.client_routine_id).await?;
    records::load::<Workout>(store, &entry.workout_id).await?;
    entry.id = new_id();
    validate::routine_progress(&entry)?;

    assignment.progress.push(entry.clone());
    records::save(store, &assignment).await?;

    AuditEvent::created(KIND, &entry.id).emit();
    Ok(created(entry))
}

pub async fn delete_progress(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let store = state.store();
    let _guard = state.write_lock().await;
    let mut assignment = owner(store, &id).await?;
    assignment.remove_progress(&id);
    records::save(store, &assignment).await?;

    AuditEvent::deleted(KIND, &id).emit();
    Ok(StatusCode::NO_CONTENT)
}
