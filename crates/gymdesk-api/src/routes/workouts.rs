use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Deserialize;

use gymdesk_audit::events::AuditEvent;
use gymdesk_core::filter::tracking::WorkoutSetQuery;
use gymdesk_core::filter::workout::WorkoutQuery;
use gymdesk_core::models::assignment::ClientRoutine;
use gymdesk_core::models::exercise::Exercise;
use gymdesk_core::models::new_id;
use gymdesk_core::models::routine::Routine;
use gymdesk_core::models::workout::{PlacedSet, Workout, WorkoutCategory};
use gymdesk_core::validate;
use gymdesk_storage::records::{self, Record};
use gymdesk_storage::store::ObjectStore;

use super::{Created, created};
use crate::error::ApiError;
use crate::extract::{Json, Query};
use crate::state::AppState;

pub async fn list_workouts(
    State(state): State<AppState>,
    Query(query): Query<WorkoutQuery>,
) -> Result<Json<Vec<Workout>>, ApiError> {
    let workouts = records::load_all(state.store()).await?;
    Ok(Json(query.apply(workouts)))
}

pub async fn get_workout(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Workout>, ApiError> {
    Ok(Json(records::load(state.store(), &id).await?))
}

/// Field rules plus every set pointing at a stored exercise.
pub(crate) async fn check_workout(store: &dyn ObjectStore, workout: &Workout) -> Result<(), ApiError> {
    validate::workout(workout)?;
    for set in &workout.exercises {
        if !records::exists::<Exercise>(store, &set.exercise_id).await? {
            return Err(ApiError::NotFound(format!(
                "exercise not found: {}",
                set.exercise_id
            )));
        }
    }
    Ok(())
}

/// Store `workout` and refresh the copies embedded in routines.
pub(crate) async fn save_workout(store: &dyn ObjectStore, workout: &Workout) -> Result<(), ApiError> {
    records::save(store, workout).await?;
    let routines: Vec<Routine> = records::load_all(store).await?;
    for mut routine in routines {
        if routine.refresh_workout(workout) {
            records::save(store, &routine).await?;
        }
    }
    Ok(())
}

pub async fn create_workout(
    State(state): State<AppState>,
    Json(mut workout): Json<Workout>,
) -> Result<Created<Workout>, ApiError> {
    workout.id = new_id();
    workout.renew_set_ids();
    let _guard = state.write_lock().await;
    check_workout(state.store(), &workout).await?;
    records::save(state.store(), &workout).await?;
    AuditEvent::created(Workout::KIND, &workout.id).emit();
    Ok(created(workout))
}

pub async fn update_workout(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(mut workout): Json<Workout>,
) -> Result<Json<Workout>, ApiError> {
    let _guard = state.write_lock().await;
    records::load::<Workout>(state.store(), &id).await?;
    workout.id = id;
    workout.assign_set_ids();
    let others: Vec<Workout> = records::load_all(state.store()).await?;
    workout.check_set_ids(&others)?;
    check_workout(state.store(), &workout).await?;
    save_workout(state.store(), &workout).await?;
    AuditEvent::updated(Workout::KIND, &workout.id).emit();
    Ok(Json(workout))
}

/// Delete a workout, dropping it from routines and discarding progress
/// recorded against it.
pub async fn delete_workout(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let store = state.store();
    let _guard = state.write_lock().await;
    records::remove::<Workout>(store, &id).await?;

    let routines: Vec<Routine> = records::load_all(store).await?;
    for mut routine in routines {
        if routine.remove_workout(&id) {
            records::save(store, &routine).await?;
        }
    }
    let assignments: Vec<ClientRoutine> = records::load_all(store).await?;
    for mut assignment in assignments {
        if assignment.forget_workout(&id) {
            records::save(store, &assignment).await?;
        }
    }

    AuditEvent::deleted(Workout::KIND, &id).emit();
    Ok(StatusCode::NO_CONTENT)
}

pub async fn workout_sets(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<PlacedSet>>, ApiError> {
    let workout: Workout = records::load(state.store(), &id).await?;
    let sets = workout.placed_sets().collect();
    Ok(Json(WorkoutSetQuery::default().apply(sets)))
}

#[derive(Deserialize)]
pub struct CategoryParams {
    pub category: Option<WorkoutCategory>,
}

/// Workouts of one category, strength when none is given.
pub async fn by_category(
    State(state): State<AppState>,
    Query(params): Query<CategoryParams>,
) -> Result<Json<Vec<Workout>>, ApiError> {
    let category = params.category.unwrap_or(WorkoutCategory::Strength);
    let mut workouts: Vec<Workout> = records::load_all(state.store()).await?;
    workouts.retain(|w| w.category == category);
    Ok(Json(WorkoutQuery::default().apply(workouts)))
}
