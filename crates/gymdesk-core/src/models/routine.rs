use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::weekday::Weekday;
use super::workout::{Workout, WorkoutCategory};
use crate::error::CoreError;

/// A multi-week training program. Workouts are embedded by copy, in the
/// order they are performed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Routine {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub workouts: Vec<Workout>,
    pub frequency: Frequency,
    pub days_per_week: u32,
    /// Weeks.
    pub duration: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub scheduled_days: Option<Vec<Weekday>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Frequency {
    Daily,
    Weekly,
    Custom,
}

/// Write shape for routines: workouts are referenced by id and resolved to
/// embedded copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RoutineInput {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub workout_ids: Vec<String>,
    pub frequency: Frequency,
    pub days_per_week: u32,
    pub duration: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub scheduled_days: Option<Vec<Weekday>>,
}

impl RoutineInput {
    /// Build the routine, copying each referenced workout out of `catalog`.
    pub fn into_routine(self, id: String, catalog: &[Workout]) -> Result<Routine, CoreError> {
        let workouts = self
            .workout_ids
            .iter()
            .map(|wid| {
                catalog
                    .iter()
                    .find(|w| &w.id == wid)
                    .cloned()
                    .ok_or_else(|| CoreError::unknown("workout", wid.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Routine {
            id,
            name: self.name,
            description: self.description,
            workouts,
            frequency: self.frequency,
            days_per_week: self.days_per_week,
            duration: self.duration,
            scheduled_days: self.scheduled_days,
        })
    }
}

impl Routine {
    pub fn workout_count(&self) -> usize {
        self.workouts.len()
    }

    pub fn workout(&self, workout_id: &str) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id == workout_id)
    }

    pub fn has_category(&self, category: WorkoutCategory) -> bool {
        self.workouts.iter().any(|w| w.category == category)
    }

    /// Replace every embedded copy of `workout` with the current version.
    /// Returns `true` if anything changed.
    pub fn refresh_workout(&mut self, workout: &Workout) -> bool {
        let mut changed = false;
        for embedded in self.workouts.iter_mut().filter(|w| w.id == workout.id) {
            if embedded != workout {
                *embedded = workout.clone();
                changed = true;
            }
        }
        changed
    }

    pub fn remove_workout(&mut self, workout_id: &str) -> bool {
        let before = self.workouts.len();
        self.workouts.retain(|w| w.id != workout_id);
        self.workouts.len() != before
    }
}
