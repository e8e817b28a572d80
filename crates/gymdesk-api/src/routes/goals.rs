use axum::extract::{Path, State};
use axum::http::StatusCode;

use gymdesk_audit::events::AuditEvent;
use gymdesk_core::filter::goal::GoalQuery;
use gymdesk_core::models::client::Client;
use gymdesk_core::models::goal::{Goal, GoalProgressUpdate};
use gymdesk_core::models::new_id;
use gymdesk_core::validate;
use gymdesk_storage::records::{self, Record};
use gymdesk_storage::store::ObjectStore;

use super::{Created, created};
use crate::error::ApiError;
use crate::extract::{Json, Query};
use crate::state::AppState;

pub async fn list_goals(
    State(state): State<AppState>,
    Query(query): Query<GoalQuery>,
) -> Result<Json<Vec<Goal>>, ApiError> {
    let goals = records::load_all(state.store()).await?;
    Ok(Json(query.apply(goals)))
}

pub async fn get_goal(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Goal>, ApiError> {
    Ok(Json(records::load(state.store(), &id).await?))
}

async fn check_goal(store: &dyn ObjectStore, goal: &Goal) -> Result<(), ApiError> {
    validate::goal(goal)?;
    records::load::<Client>(store, &goal.client_id).await?;
    Ok(())
}

pub async fn create_goal(
    State(state): State<AppState>,
    Json(mut goal): Json<Goal>,
) -> Result<Created<Goal>, ApiError> {
    let _guard = state.write_lock().await;
    goal.id = new_id();
    check_goal(state.store(), &goal).await?;
    records::save(state.store(), &goal).await?;
    AuditEvent::created(Goal::KIND, &goal.id).emit();
    Ok(created(goal))
}

pub async fn update_goal(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(mut goal): Json<Goal>,
) -> Result<Json<Goal>, ApiError> {
    let _guard = state.write_lock().await;
    records::load::<Goal>(state.store(), &id).await?;
    goal.id = id;
    check_goal(state.store(), &goal).await?;
    records::save(state.store(), &goal).await?;
    AuditEvent::updated(Goal::KIND, &goal.id).emit();
    Ok(Json(goal))
}

pub async fn delete_goal(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let _guard = state.write_lock().await;
    records::remove::<Goal>(state.store(), &id).await?;
    AuditEvent::deleted(Goal::KIND, &id).emit();
    Ok(StatusCode::NO_CONTENT)
}

pub async fn update_progress(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<GoalProgressUpdate>,
) -> Result<Json<Goal>, ApiError> {
    let _guard = state.write_lock().await;
    let current_value = update
        .current_value
        .ok_or_else(|| ApiError::BadRequest("currentValue is required".to_string()))?;
    let mut goal: Goal = records::load(state.store(), &id).await?;
    goal.update_progress(current_value);
    records::save(state.store(), &goal).await?;

    AuditEvent::updated(Goal::KIND, &goal.id)
        .with_details(serde_json::json!({
            "currentValue": goal.current_value,
            "isCompleted": goal.is_completed,
        }))
        .emit();
    Ok(Json(goal))
}

async fn goals_by_completion(state: &AppState, completed: bool) -> Result<Vec<Goal>, ApiError> {
    let goals = records::load_all(state.store()).await?;
    let query = GoalQuery {
        is_completed: Some(completed),
        ..Default::default()
    };
    Ok(query.apply(goals))
}

pub async fn completed_goals(State(state): State<AppState>) -> Result<Json<Vec<Goal>>, ApiError> {
    Ok(Json(goals_by_completion(&state, true).await?))
}

pub async fn pending_goals(State(state): State<AppState>) -> Result<Json<Vec<Goal>>, ApiError> {
    Ok(Json(goals_by_completion(&state, false).await?))
}
