use axum::extract::{Path, State};
use axum::http::StatusCode;
use jiff::Timestamp;

use gymdesk_audit::events::AuditEvent;
use gymdesk_core::error::CoreError;
use gymdesk_core::filter::tracking::{ClientRoutineQuery, RoutineProgressQuery};
use gymdesk_core::models::assignment::{
    ClientRoutine, RoutineProgress, WorkoutCompletion, has_active_assignment,
};
use gymdesk_core::models::client::Client;
use gymdesk_core::models::new_id;
use gymdesk_core::models::routine::Routine;
use gymdesk_core::models::workout::Workout;
use gymdesk_core::validate;
use gymdesk_storage::error::StorageError;
use gymdesk_storage::records::{self, Record};
use gymdesk_storage::store::ObjectStore;

use super::{Created, created};
use crate::error::ApiError;
use crate::extract::{Json, Query};
use crate::state::AppState;

pub async fn list_client_routines(
    State(state): State<AppState>,
    Query(query): Query<ClientRoutineQuery>,
) -> Result<Json<Vec<ClientRoutine>>, ApiError> {
    let assignments = records::load_all(state.store()).await?;
    Ok(Json(query.apply(assignments)))
}

pub async fn get_client_routine(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ClientRoutine>, ApiError> {
    Ok(Json(records::load(state.store(), &id).await?))
}

/// Reject assignments that reference missing records or duplicate an active
/// assignment of the same routine to the same client.
async fn check_assignment(
    store: &dyn ObjectStore,
    assignment: &ClientRoutine,
) -> Result<(), ApiError> {
    validate::client_routine(assignment)?;
    records::load::<Client>(store, &assignment.client_id).await?;
    records::load::<Routine>(store, &assignment.routine_id).await?;

    let existing: Vec<ClientRoutine> = records::load_all(store).await?;
    if assignment.is_active
        && has_active_assignment(
            &existing,
            &assignment.client_id,
            &assignment.routine_id,
            Some(&assignment.id),
        )
    {
        return Err(CoreError::DuplicateAssignment {
            client: assignment.client_id.clone(),
            routine: assignment.routine_id.clone(),
        }
        .into());
    }
    Ok(())
}

/// Keep `assignedRoutines` of `client_id` in line with its active
/// assignments of `routine_id`.
async fn sync_assigned_routine(
    store: &dyn ObjectStore,
    client_id: &str,
    routine_id: &str,
) -> Result<(), ApiError> {
    let assignments: Vec<ClientRoutine> = records::load_all(store).await?;
    let active = has_active_assignment(&assignments, client_id, routine_id, None);
    let mut client: Client = match records::load(store, client_id).await {
        Ok(client) => client,
        // Client already gone (cascade delete); nothing to keep in sync.
        Err(StorageError::RecordNotFound { .. }) => return Ok(()),
        Err(e) => return Err(e.into()),
    };
    if client.set_routine_assigned(routine_id, active) {
        records::save(store, &client).await?;
    }
    Ok(())
}

pub async fn create_client_routine(
    State(state): State<AppState>,
    Json(mut assignment): Json<ClientRoutine>,
) -> Result<Created<ClientRoutine>, ApiError> {
    let store = state.store();
    let _guard = state.write_lock().await;
    assignment.id = new_id();
    // Progress is recorded through complete-workout, never on creation.
    assignment.progress.clear();
    check_assignment(store, &assignment).await?;

    records::save(store, &assignment).await?;
    sync_assigned_routine(store, &assignment.client_id, &assignment.routine_id).await?;

    AuditEvent::created(ClientRoutine::KIND, &assignment.id).emit();
    Ok(created(assignment))
}

/// Replace an assignment. Recorded progress is kept.
pub async fn update_client_routine(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(mut assignment): Json<ClientRoutine>,
) -> Result<Json<ClientRoutine>, ApiError> {
    let store = state.store();
    let _guard = state.write_lock().await;
    let previous: ClientRoutine = records::load(store, &id).await?;
    assignment.id = id;
    assignment.progress = previous.progress;
    for entry in &mut assignment.progress {
        entry.client_routine_id = assignment.id.clone();
    }
    check_assignment(store, &assignment).await?;

    records::save(store, &assignment).await?;
    sync_assigned_routine(store, &previous.client_id, &previous.routine_id).await?;
    if (previous.client_id.as_str(), previous.routine_id.as_str())
        != (assignment.client_id.as_str(), assignment.routine_id.as_str())
    {
        sync_assigned_routine(store, &assignment.client_id, &assignment.routine_id).await?;
    }

    AuditEvent::updated(ClientRoutine::KIND, &assignment.id).emit();
    Ok(Json(assignment))
}

pub async fn delete_client_routine(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let store = state.store();
    let _guard = state.write_lock().await;
    let removed: ClientRoutine = records::remove(store, &id).await?;
    sync_assigned_routine(store, &removed.client_id, &removed.routine_id).await?;

    AuditEvent::deleted(ClientRoutine::KIND, &id).emit();
    Ok(StatusCode::NO_CONTENT)
}

/// Completed sessions of one assignment, most recent first.
pub async fn client_routine_progress(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<RoutineProgress>>, ApiError> {
    let assignment: ClientRoutine = records::load(state.store(), &id).await?;
    Ok(Json(RoutineProgressQuery::default().apply(assignment.progress)))
}

pub async fn complete_workout(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(completion): Json<WorkoutCompletion>,
) -> Result<Created<RoutineProgress>, ApiError> {
    let store = state.store();
    let _guard = state.write_lock().await;
    let mut assignment: ClientRoutine = records::load(store, &id).await?;
    validate::rating(completion.rating)?;
    let workout: Workout = records::load(store, &completion.workout_id).await?;

    let entry = assignment
        .record_completion(&workout, completion, Timestamp::now())
        .clone();
    records::save(store, &assignment).await?;

    AuditEvent::created("routine progress", &entry.id)
        .with_details(serde_json::json!({ "clientRoutineId": id, "workoutId": entry.workout_id }))
        .emit();
    Ok(created(entry))
}
