use serde::Deserialize;

use super::{icontains, parse_list, sort_by_ordering, within};
use crate::models::exercise::Difficulty;
use crate::models::workout::{Workout, WorkoutCategory};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkoutQuery {
    pub search: Option<String>,
    pub difficulty: Option<String>,
    pub category: Option<String>,
    /// Minutes.
    pub min_duration: Option<u32>,
    pub max_duration: Option<u32>,
    /// Number of distinct exercises.
    pub exercise_count: Option<usize>,
    pub ordering: Option<String>,
}

const ORDERING_FIELDS: &[&str] = &["name", "difficulty", "estimatedDuration"];

impl WorkoutQuery {
    pub fn matches(&self, workout: &Workout) -> bool {
        if let Some(term) = &self.search
            && !(icontains(&workout.name, term) || icontains(&workout.description, term))
        {
            return false;
        }
        if let Some(raw) = &self.difficulty
            && !parse_list::<Difficulty>(raw).contains(&workout.difficulty)
        {
            return false;
        }
        if let Some(raw) = &self.category
            && !parse_list::<WorkoutCategory>(raw).contains(&workout.category)
        {
            return false;
        }
        within(workout.estimated_duration, self.min_duration, self.max_duration)
            && self
                .exercise_count
                .is_none_or(|n| workout.distinct_exercise_count() == n)
    }

    pub fn apply(&self, mut workouts: Vec<Workout>) -> Vec<Workout> {
        workouts.retain(|w| self.matches(w));
        sort_by_ordering(
            &mut workouts,
            self.ordering.as_deref(),
            ORDERING_FIELDS,
            "name",
            |field, a, b| match field {
                "difficulty" => a.difficulty.cmp(&b.difficulty),
                "estimatedDuration" => a.estimated_duration.cmp(&b.estimated_duration),
                _ => a.name.cmp(&b.name),
            },
        );
        workouts
    }
}
