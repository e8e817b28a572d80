use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Deserialize;

use gymdesk_audit::events::AuditEvent;
use gymdesk_core::filter::routine::RoutineQuery;
use gymdesk_core::models::assignment::ClientRoutine;
use gymdesk_core::models::client::Client;
use gymdesk_core::models::new_id;
use gymdesk_core::models::routine::{Frequency, Routine, RoutineInput};
use gymdesk_core::models::workout::Workout;
use gymdesk_core::stats::{self, RoutineStatistics};
use gymdesk_core::validate;
use gymdesk_storage::records::{self, Record};
use gymdesk_storage::store::ObjectStore;

use super::{Created, created};
use crate::error::ApiError;
use crate::extract::{Json, Query};
use crate::state::AppState;

pub async fn list_routines(
    State(state): State<AppState>,
    Query(query): Query<RoutineQuery>,
) -> Result<Json<Vec<Routine>>, ApiError> {
    let routines = records::load_all(state.store()).await?;
    let clients: Vec<Client> = records::load_all(state.store()).await?;
    let counts = stats::routine_client_counts(&clients);
    Ok(Json(query.apply(routines, &counts)))
}

pub async fn get_routine(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Routine>, ApiError> {
    Ok(Json(records::load(state.store(), &id).await?))
}

/// Resolve `workoutIds` against the stored catalog and validate the result.
async fn build_routine(
    store: &dyn ObjectStore,
    id: String,
    input: RoutineInput,
) -> Result<Routine, ApiError> {
    let catalog: Vec<Workout> = records::load_all(store).await?;
    let routine = input.into_routine(id, &catalog)?;
    validate::routine(&routine)?;
    Ok(routine)
}

pub async fn create_routine(
    State(state): State<AppState>,
    Json(input): Json<RoutineInput>,
) -> Result<Created<Routine>, ApiError> {
    let _guard = state.write_lock().await;
    let routine = build_routine(state.store(), new_id(), input).await?;
    records::save(state.store(), &routine).await?;
    AuditEvent::created(Routine::KIND, &routine.id).emit();
    Ok(created(routine))
}

pub async fn update_routine(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<RoutineInput>,
) -> Result<Json<Routine>, ApiError> {
    let _guard = state.write_lock().await;
    records::load::<Routine>(state.store(), &id).await?;
    let routine = build_routine(state.store(), id, input).await?;
    records::save(state.store(), &routine).await?;
    AuditEvent::updated(Routine::KIND, &routine.id).emit();
    Ok(Json(routine))
}

/// Delete a routine, its assignments, and its id from every client's
/// `assignedRoutines`.
pub async fn delete_routine(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let store = state.store();
    let _guard = state.write_lock().await;
    records::remove::<Routine>(store, &id).await?;

    let assignments: Vec<ClientRoutine> = records::load_all(store).await?;
    for a in assignments.iter().filter(|a| a.routine_id == id) {
        records::remove::<ClientRoutine>(store, &a.id).await?;
    }
    let clients: Vec<Client> = records::load_all(store).await?;
    for mut client in clients {
        if client.set_routine_assigned(&id, false) {
            records::save(store, &client).await?;
        }
    }

    AuditEvent::deleted(Routine::KIND, &id).emit();
    Ok(StatusCode::NO_CONTENT)
}

pub async fn routine_workouts(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Workout>>, ApiError> {
    let routine: Routine = records::load(state.store(), &id).await?;
    Ok(Json(routine.workouts))
}

#[derive(Deserialize)]
pub struct FrequencyParams {
    pub frequency: Option<Frequency>,
}

/// Routines of one frequency, weekly when none is given.
pub async fn by_frequency(
    State(state): State<AppState>,
    Query(params): Query<FrequencyParams>,
) -> Result<Json<Vec<Routine>>, ApiError> {
    let frequency = params.frequency.unwrap_or(Frequency::Weekly);
    let mut routines: Vec<Routine> = records::load_all(state.store()).await?;
    routines.retain(|r| r.frequency == frequency);
    routines.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(Json(routines))
}

pub async fn routine_statistics(
    State(state): State<AppState>,
) -> Result<Json<RoutineStatistics>, ApiError> {
    let routines: Vec<Routine> = records::load_all(state.store()).await?;
    let clients: Vec<Client> = records::load_all(state.store()).await?;
    Ok(Json(stats::routine_statistics(&routines, &clients)))
}
