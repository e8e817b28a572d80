//! Filters for the collections that only need equality matching: workout
//! sets, routine assignments, routine progress and body measurements.

use jiff::civil::Date;
use serde::Deserialize;

use super::sort_by_ordering;
use crate::models::assignment::{ClientRoutine, RoutineProgress};
use crate::models::progress::ProgressMetrics;
use crate::models::workout::PlacedSet;

fn eq_opt(wanted: &Option<String>, actual: &str) -> bool {
    wanted.as_deref().is_none_or(|w| w == actual)
}

fn cmp_opt_f64(a: Option<f64>, b: Option<f64>) -> std::cmp::Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (a, b) => a.is_some().cmp(&b.is_some()),
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkoutSetQuery {
    pub workout_id: Option<String>,
    pub exercise_id: Option<String>,
    pub completed: Option<bool>,
    pub ordering: Option<String>,
}

impl WorkoutSetQuery {
    pub fn apply(&self, mut sets: Vec<PlacedSet>) -> Vec<PlacedSet> {
        sets.retain(|p| {
            eq_opt(&self.workout_id, &p.workout_id)
                && eq_opt(&self.exercise_id, &p.set.exercise_id)
                && self.completed.is_none_or(|c| c == p.set.completed)
        });
        sort_by_ordering(
            &mut sets,
            self.ordering.as_deref(),
            &["id", "reps", "weight", "restTime"],
            "id",
            |field, a, b| match field {
                "reps" => a.set.reps.cmp(&b.set.reps),
                "weight" => a.set.weight.total_cmp(&b.set.weight),
                "restTime" => a.set.rest_time.cmp(&b.set.rest_time),
                _ => natural_id_cmp(&a.set.id, &b.set.id),
            },
        );
        sets
    }
}

/// Order ids numerically when both are numbers ("2" before "10"), otherwise
/// lexically.
pub(crate) fn natural_id_cmp(a: &str, b: &str) -> std::cmp::Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        _ => a.cmp(b),
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientRoutineQuery {
    pub client_id: Option<String>,
    pub routine_id: Option<String>,
    pub is_active: Option<bool>,
    pub start_date: Option<Date>,
    pub ordering: Option<String>,
}

impl ClientRoutineQuery {
    pub fn apply(&self, mut assignments: Vec<ClientRoutine>) -> Vec<ClientRoutine> {
        assignments.retain(|a| {
            eq_opt(&self.client_id, &a.client_id)
                && eq_opt(&self.routine_id, &a.routine_id)
                && self.is_active.is_none_or(|v| v == a.is_active)
                && self.start_date.is_none_or(|d| d == a.start_date)
        });
        sort_by_ordering(
            &mut assignments,
            self.ordering.as_deref(),
            &["startDate", "endDate"],
            "-startDate",
            |field, a, b| match field {
                "endDate" => a.end_date.cmp(&b.end_date),
                _ => a.start_date.cmp(&b.start_date),
            },
        );
        assignments
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoutineProgressQuery {
    pub client_routine_id: Option<String>,
    pub workout_id: Option<String>,
    pub ordering: Option<String>,
}

impl RoutineProgressQuery {
    pub fn apply(&self, mut entries: Vec<RoutineProgress>) -> Vec<RoutineProgress> {
        entries.retain(|p| {
            eq_opt(&self.client_routine_id, &p.client_routine_id)
                && eq_opt(&self.workout_id, &p.workout_id)
        });
        sort_by_ordering(
            &mut entries,
            self.ordering.as_deref(),
            &["completedAt", "rating"],
            "-completedAt",
            |field, a, b| match field {
                "rating" => a.rating.cmp(&b.rating),
                _ => a.completed_at.cmp(&b.completed_at),
            },
        );
        entries
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressMetricsQuery {
    pub client_id: Option<String>,
    pub date: Option<Date>,
    pub ordering: Option<String>,
}

impl ProgressMetricsQuery {
    pub fn for_client(client_id: &str) -> Self {
        ProgressMetricsQuery {
            client_id: Some(client_id.to_string()),
            ..Default::default()
        }
    }

    pub fn apply(&self, mut metrics: Vec<ProgressMetrics>) -> Vec<ProgressMetrics> {
        metrics.retain(|m| {
            eq_opt(&self.client_id, &m.client_id) && self.date.is_none_or(|d| d == m.date)
        });
        sort_by_ordering(
            &mut metrics,
            self.ordering.as_deref(),
            &["date", "weight", "bodyFat", "muscleMass"],
            "-date",
            |field, a, b| match field {
                "weight" => a.weight.total_cmp(&b.weight),
                "bodyFat" => cmp_opt_f64(a.body_fat, b.body_fat),
                "muscleMass" => cmp_opt_f64(a.muscle_mass, b.muscle_mass),
                _ => a.date.cmp(&b.date),
            },
        );
        metrics
    }
}
