pub mod client_routines;
pub mod clients;
pub mod exercises;
pub mod goals;
pub mod health;
pub mod progress_metrics;
pub mod routine_progress;
pub mod routines;
pub mod uploads;
pub mod workout_sets;
pub mod workouts;

use axum::Json;
use axum::http::StatusCode;
use jiff::Zoned;
use jiff::civil::Date;

/// Response for a newly stored record.
pub type Created<T> = (StatusCode, Json<T>);

fn created<T>(value: T) -> Created<T> {
    (StatusCode::CREATED, Json(value))
}

/// Current date in the server's time zone. Subscription and join-date
/// filters are relative to it.
fn today() -> Date {
    Zoned::now().date()
}
