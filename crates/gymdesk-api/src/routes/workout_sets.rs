//! Sets live inside their workout. This collection exposes them flat, each
//! tagged with the owning `workoutId`.

use axum::extract::{Path, State};
use axum::http::StatusCode;

use gymdesk_audit::events::AuditEvent;
use gymdesk_core::filter::tracking::WorkoutSetQuery;
use gymdesk_core::models::exercise::Exercise;
use gymdesk_core::models::new_id;
use gymdesk_core::models::workout::{PlacedSet, Workout};
use gymdesk_core::validate;
use gymdesk_storage::records;
use gymdesk_storage::store::ObjectStore;

use super::workouts::save_workout;
use super::{Created, created};
use crate::error::ApiError;
use crate::extract::{Json, Query};
use crate::state::AppState;

const KIND: &str = "workout set";

fn set_not_found(id: &str) -> ApiError {
    ApiError::NotFound(format!("{KIND} not found: {id}"))
}

/// The workout that owns set `id`.
async fn owner(store: &dyn ObjectStore, id: &str) -> Result<Workout, ApiError> {
    let workouts: Vec<Workout> = records::load_all(store).await?;
    workouts
        .into_iter()
        .find(|w| w.set(id).is_some())
        .ok_or_else(|| set_not_found(id))
}

async fn check_set(store: &dyn ObjectStore, placed: &PlacedSet) -> Result<(), ApiError> {
    validate::workout_set(&placed.set)?;
    if !records::exists::<Exercise>(store, &placed.set.exercise_id).await? {
        return Err(ApiError::NotFound(format!(
            "exercise not found: {}",
            placed.set.exercise_id
        )));
    }
    Ok(())
}

pub async fn list_sets(
    State(state): State<AppState>,
    Query(query): Query<WorkoutSetQuery>,
) -> Result<Json<Vec<PlacedSet>>, ApiError> {
    let workouts: Vec<Workout> = records::load_all(state.store()).await?;
    let sets = workouts.iter().flat_map(Workout::placed_sets).collect();
    Ok(Json(query.apply(sets)))
}

pub async fn get_set(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PlacedSet>, ApiError> {
    let workout = owner(state.store(), &id).await?;
    workout
        .placed_sets()
        .find(|p| p.set.id == id)
        .map(Json)
        .ok_or_else(|| set_not_found(&id))
}

pub async fn create_set(
    State(state): State<AppState>,
    Json(mut placed): Json<PlacedSet>,
) -> Result<Created<PlacedSet>, ApiError> {
    let store = state.store();
    let _guard = state.write_lock().await;
    let mut workout: Workout = records::load(store, &placed.workout_id).await?;
    check_set(store, &placed).await?;

    placed.set.id = new_id();
    workout.exercises.push(placed.set.clone());
    save_workout(store, &workout).await?;

    AuditEvent::created(KIND, &placed.set.id).emit();
    Ok(created(placed))
}

/// Replace a set. Changing `workoutId` moves the set to that workout.
pub async fn update_set(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(mut placed): Json<PlacedSet>,
) -> Result<Json<PlacedSet>, ApiError> {
    let store = state.store();
    let _guard = state.write_lock().await;
    let mut current = owner(store, &id).await?;
    check_set(store, &placed).await?;
    placed.set.id = id.clone();

    if current.id == placed.workout_id {
        if let Some(slot) = current.exercises.iter_mut().find(|s| s.id == id) {
            *slot = placed.set.clone();
        }
        save_workout(store, &current).await?;
    } else {
        let mut target: Workout = records::load(store, &placed.workout_id).await?;
        current.remove_set(&id);
        target.exercises.push(placed.set.clone());
        save_workout(store, &current).await?;
        save_workout(store, &target).await?;
    }

    AuditEvent::updated(KIND, &id).emit();
    Ok(Json(placed))
}

pub async fn delete_set(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let store = state.store();
    let _guard = state.write_lock().await;
    let mut workout = owner(store, &id).await?;
    workout.remove_set(&id);
    save_workout(store, &workout).await?;

    AuditEvent::deleted(KIND, &id).emit();
    Ok(StatusCode::NO_CONTENT)
}
