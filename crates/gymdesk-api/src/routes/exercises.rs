use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Deserialize;

use gymdesk_audit::events::AuditEvent;
use gymdesk_core::filter::exercise::{self, ExerciseQuery};
use gymdesk_core::models::exercise::{Difficulty, Exercise};
use gymdesk_core::models::new_id;
use gymdesk_core::models::workout::Workout;
use gymdesk_core::validate;
use gymdesk_storage::records::{self, Record};

use super::{Created, created};
use crate::error::ApiError;
use crate::extract::{Json, Query};
use crate::state::AppState;

pub async fn list_exercises(
    State(state): State<AppState>,
    Query(query): Query<ExerciseQuery>,
) -> Result<Json<Vec<Exercise>>, ApiError> {
    let exercises = records::load_all(state.store()).await?;
    Ok(Json(query.apply(exercises)))
}

pub async fn get_exercise(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Exercise>, ApiError> {
    Ok(Json(records::load(state.store(), &id).await?))
}

pub async fn create_exercise(
    State(state): State<AppState>,
    Json(mut exercise): Json<Exercise>,
) -> Result<Created<Exercise>, ApiError> {
    let _guard = state.write_lock().await;
    exercise.id = new_id();
    validate::exercise(&exercise)?;
    records::save(state.store(), &exercise).await?;
    AuditEvent::created(Exercise::KIND, &exercise.id).emit();
    Ok(created(exercise))
}

pub async fn update_exercise(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(mut exercise): Json<Exercise>,
) -> Result<Json<Exercise>, ApiError> {
    let _guard = state.write_lock().await;
    records::load::<Exercise>(state.store(), &id).await?;
    exercise.id = id;
    validate::exercise(&exercise)?;
    records::save(state.store(), &exercise).await?;
    AuditEvent::updated(Exercise::KIND, &exercise.id).emit();
    Ok(Json(exercise))
}

/// Refused while any workout still prescribes the exercise.
pub async fn delete_exercise(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let _guard = state.write_lock().await;
    records::load::<Exercise>(state.store(), &id).await?;

    let workouts: Vec<Workout> = records::load_all(state.store()).await?;
    let users: Vec<&str> = workouts
        .iter()
        .filter(|w| w.references_exercise(&id))
        .map(|w| w.id.as_str())
        .collect();
    if !users.is_empty() {
        return Err(ApiError::BadRequest(format!(
            "exercise {id} is used by workouts: {}",
            users.join(", ")
        )));
    }

    records::remove::<Exercise>(state.store(), &id).await?;
    AuditEvent::deleted(Exercise::KIND, &id).emit();
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Deserialize)]
pub struct DifficultyParams {
    pub difficulty: Option<Difficulty>,
}

/// Exercises of one difficulty, beginner when none is given.
pub async fn by_difficulty(
    State(state): State<AppState>,
    Query(params): Query<DifficultyParams>,
) -> Result<Json<Vec<Exercise>>, ApiError> {
    let difficulty = params.difficulty.unwrap_or(Difficulty::Beginner);
    let mut exercises: Vec<Exercise> = records::load_all(state.store()).await?;
    exercises.retain(|e| e.difficulty == difficulty);
    Ok(Json(ExerciseQuery::default().apply(exercises)))
}

#[derive(Deserialize)]
pub struct MuscleGroupParams {
    #[serde(rename = "muscleGroup", alias = "muscle_group")]
    pub muscle_group: Option<String>,
}

pub async fn by_muscle_group(
    State(state): State<AppState>,
    Query(params): Query<MuscleGroupParams>,
) -> Result<Json<Vec<Exercise>>, ApiError> {
    let exercises: Vec<Exercise> = records::load_all(state.store()).await?;
    let group = params.muscle_group.unwrap_or_default();
    let found = exercise::by_muscle_group(exercises, &group);
    Ok(Json(ExerciseQuery::default().apply(found)))
}
