use jiff::Timestamp;
use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::weekday::{Weekday, deserialize_days};
use super::workout::{Workout, WorkoutSet};

/// A routine assigned to a client, with the sessions completed so far.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ClientRoutine {
    #[serde(default)]
    pub id: String,
    pub client_id: String,
    pub routine_id: String,
    pub start_date: Date,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub end_date: Option<Date>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "deserialize_days")]
    pub assigned_days: Vec<Weekday>,
    #[serde(default)]
    pub progress: Vec<RoutineProgress>,
}

fn default_active() -> bool {
    true
}

/// One completed workout within a client routine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RoutineProgress {
    #[serde(default)]
    pub id: String,
    pub client_routine_id: String,
    pub workout_id: String,
    pub completed_at: Timestamp,
    #[serde(default)]
    pub sets: Vec<WorkoutSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub notes: Option<String>,
    /// 1–5 stars.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub rating: Option<u8>,
}

/// Body of a "complete workout" request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct WorkoutCompletion {
    pub workout_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub rating: Option<u8>,
}

impl ClientRoutine {
    /// Append a progress entry for `workout`, copying its sets marked as
    /// completed.
    pub fn record_completion(
        &mut self,
        workout: &Workout,
        completion: WorkoutCompletion,
        completed_at: Timestamp,
    ) -> &RoutineProgress {
        let sets = workout
            .exercises
            .iter()
            .cloned()
            .map(|mut set| {
                set.completed = true;
                set
            })
            .collect();

        self.progress.push(RoutineProgress {
            id: super::new_id(),
            client_routine_id: self.id.clone(),
            workout_id: workout.id.clone(),
            completed_at,
            sets,
            notes: completion.notes.filter(|n| !n.trim().is_empty()),
            rating: completion.rating,
        });
        &self.progress[self.progress.len() - 1]
    }

    pub fn progress_entry(&self, progress_id: &str) -> Option<&RoutineProgress> {
        self.progress.iter().find(|p| p.id == progress_id)
    }

    pub fn remove_progress(&mut self, progress_id: &str) -> Option<RoutineProgress> {
        let pos = self.progress.iter().position(|p| p.id == progress_id)?;
        Some(self.progress.remove(pos))
    }

    /// Drop progress recorded against a workout that no longer exists.
    pub fn forget_workout(&mut self, workout_id: &str) -> bool {
        let before = self.progress.len();
        self.progress.retain(|p| p.workout_id != workout_id);
        self.progress.len() != before
    }
}

/// Whether `client_id` holds an active assignment of `routine_id`, ignoring
/// the assignment `except` (the one being edited).
pub fn has_active_assignment(
    assignments: &[ClientRoutine],
    client_id: &str,
    routine_id: &str,
    except: Option<&str>,
) -> bool {
    assignments.iter().any(|a| {
        a.is_active
            && a.client_id == client_id
            && a.routine_id == routine_id
            && except != Some(a.id.as_str())
    })
}
