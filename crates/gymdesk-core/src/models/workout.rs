use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::exercise::Difficulty;
use crate::error::CoreError;

/// One exercise prescription within a workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct WorkoutSet {
    #[serde(default)]
    pub id: String,
    pub exercise_id: String,
    pub reps: u32,
    /// Load in kilograms. Zero for body-weight work.
    pub weight: f64,
    /// Rest after the set, in seconds.
    pub rest_time: u32,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Workout {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub exercises: Vec<WorkoutSet>,
    /// Minutes.
    pub estimated_duration: u32,
    pub difficulty: Difficulty,
    pub category: WorkoutCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum WorkoutCategory {
    Strength,
    Cardio,
    Flexibility,
    Mixed,
}

/// A set together with the workout that owns it. This is the shape served by
/// the flat `workout-sets` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PlacedSet {
    pub workout_id: String,
    #[serde(flatten)]
    pub set: WorkoutSet,
}

impl Workout {
    /// Number of distinct exercises referenced by this workout's sets.
    pub fn distinct_exercise_count(&self) -> usize {
        self.exercises
            .iter()
            .map(|s| s.exercise_id.as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    pub fn references_exercise(&self, exercise_id: &str) -> bool {
        self.exercises.iter().any(|s| s.exercise_id == exercise_id)
    }

    pub fn set(&self, set_id: &str) -> Option<&WorkoutSet> {
        self.exercises.iter().find(|s| s.id == set_id)
    }

    /// Give every set without an id a fresh one.
    pub fn assign_set_ids(&mut self) {
        for set in &mut self.exercises {
            super::ensure_id(&mut set.id);
        }
    }

    /// Replace every set id, caller-supplied or not.
    pub fn renew_set_ids(&mut self) {
        for set in &mut self.exercises {
            set.id = super::new_id();
        }
    }

    /// Set ids must be unique within this workout and must not be owned by
    /// any other workout in `others`.
    pub fn check_set_ids(&self, others: &[Workout]) -> Result<(), CoreError> {
        let mut seen = HashSet::new();
        for set in &self.exercises {
            if !seen.insert(set.id.as_str()) {
                return Err(CoreError::invalid(
                    "exercises",
                    format!("set id '{}' is repeated", set.id),
                ));
            }
            if let Some(owner) = others
                .iter()
                .find(|w| w.id != self.id && w.set(&set.id).is_some())
            {
                return Err(CoreError::invalid(
                    "exercises",
                    format!("set id '{}' belongs to workout '{}'", set.id, owner.id),
                ));
            }
        }
        Ok(())
    }

    pub fn remove_set(&mut self, set_id: &str) -> Option<WorkoutSet> {
        let pos = self.exercises.iter().position(|s| s.id == set_id)?;
        Some(self.exercises.remove(pos))
    }

    pub fn placed_sets(&self) -> impl Iterator<Item = PlacedSet> + '_ {
        self.exercises.iter().map(|set| PlacedSet {
            workout_id: self.id.clone(),
            set: set.clone(),
        })
    }
}
