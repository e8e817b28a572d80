//! gymdesk-api
//!
//! HTTP API over the gymdesk records. Served by `lambda_http` on Lambda, or by
//! `axum::serve` when a bind address is configured.

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use routes::{
    client_routines, clients, exercises, goals, health, progress_metrics, routine_progress,
    routines, uploads, workout_sets, workouts,
};
use state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health_check))
        // Clients
        .route(
            "/clients",
            get(clients::list_clients).post(clients::create_client),
        )
        .route("/clients/statistics", get(clients::client_statistics))
        .route(
            "/clients/{id}",
            get(clients::get_client)
                .put(clients::update_client)
                .delete(clients::delete_client),
        )
        .route("/clients/{id}/progress", get(clients::client_progress))
        .route("/clients/{id}/goals", get(clients::client_goals))
        .route("/clients/{id}/routines", get(clients::client_routines))
        // Exercises
        .route(
            "/exercises",
            get(exercises::list_exercises).post(exercises::create_exercise),
        )
        .route("/exercises/by-difficulty", get(exercises::by_difficulty))
        .route("/exercises/by-muscle-group", get(exercises::by_muscle_group))
        .route(
            "/exercises/{id}",
            get(exercises::get_exercise)
                .put(exercises::update_exercise)
                .delete(exercises::delete_exercise),
        )
        // Workouts and their sets
        .route(
            "/workouts",
            get(workouts::list_workouts).post(workouts::create_workout),
        )
        .route("/workouts/by-category", get(workouts::by_category))
        .route(
            "/workouts/{id}",
            get(workouts::get_workout)
                .put(workouts::update_workout)
                .delete(workouts::delete_workout),
        )
        .route("/workouts/{id}/sets", get(workouts::workout_sets))
        .route(
            "/workout-sets",
            get(workout_sets::list_sets).post(workout_sets::create_set),
        )
        .route(
            "/workout-sets/{id}",
            get(workout_sets::get_set)
                .put(workout_sets::update_set)
                .delete(workout_sets::delete_set),
        )
        // Routines
        .route(
            "/routines",
            get(routines::list_routines).post(routines::create_routine),
        )
        .route("/routines/statistics", get(routines::routine_statistics))
        .route("/routines/by-frequency", get(routines::by_frequency))
        .route(
            "/routines/{id}",
            get(routines::get_routine)
                .put(routines::update_routine)
                .delete(routines::delete_routine),
        )
        .route("/routines/{id}/workouts", get(routines::routine_workouts))
        // Assignments and progress
        .route(
            "/client-routines",
            get(client_routines::list_client_routines).post(client_routines::create_client_routine),
        )
        .route(
            "/client-routines/{id}",
            get(client_routines::get_client_routine)
                .put(client_routines::update_client_routine)
                .delete(client_routines::delete_client_routine),
        )
        .route(
            "/client-routines/{id}/progress",
            get(client_routines::client_routine_progress),
        )
        .route(
            "/client-routines/{id}/complete-workout",
            post(client_routines::complete_workout),
        )
        .route(
            "/routine-progress",
            get(routine_progress::list_progress).post(routine_progress::create_progress),
        )
        .route(
            "/routine-progress/{id}",
            get(routine_progress::get_progress).delete(routine_progress::delete_progress),
        )
        .route(
            "/progress-metrics",
            get(progress_metrics::list_metrics).post(progress_metrics::create_metrics),
        )
        .route(
            "/progress-metrics/client-progress",
            get(progress_metrics::client_progress),
        )
        .route(
            "/progress-metrics/{id}",
            get(progress_metrics::get_metrics)
                .put(progress_metrics::update_metrics)
                .delete(progress_metrics::delete_metrics),
        )
        // Goals
        .route("/goals", get(goals::list_goals).post(goals::create_goal))
        .route("/goals/completed", get(goals::completed_goals))
        .route("/goals/pending", get(goals::pending_goals))
        .route(
            "/goals/{id}",
            get(goals::get_goal)
                .put(goals::update_goal)
                .delete(goals::delete_goal),
        )
        .route("/goals/{id}/update-progress", post(goals::update_progress))
        // Uploads
        .route("/uploads", post(uploads::create_upload))
        .layer(
            ServiceBuilder::new()
                .layer(axum_mw::from_fn(middleware::audit::audit_log))
                .layer(cors),
        )
        .with_state(state)
}
