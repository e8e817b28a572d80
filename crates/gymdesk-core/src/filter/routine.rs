use std::collections::HashMap;

use serde::Deserialize;

use super::{icontains, parse_list, sort_by_ordering, within};
use crate::models::routine::{Frequency, Routine};
use crate::models::workout::WorkoutCategory;

/// Rough effort bucket derived from days per week and program length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimatedDifficulty {
    Easy,
    Medium,
    Hard,
}

impl EstimatedDifficulty {
    pub fn matches(self, routine: &Routine) -> bool {
        let days = routine.days_per_week;
        let weeks = routine.duration;
        match self {
            EstimatedDifficulty::Easy => days <= 3 && weeks <= 4,
            EstimatedDifficulty::Medium => {
                (5..=8).contains(&weeks) && ((4..=5).contains(&days) || days == 3)
            }
            EstimatedDifficulty::Hard => days >= 6 || weeks >= 9 || (days >= 5 && weeks >= 8),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoutineQuery {
    pub search: Option<String>,
    pub frequency: Option<String>,
    pub days_per_week: Option<u32>,
    pub min_days: Option<u32>,
    pub max_days: Option<u32>,
    pub duration: Option<u32>,
    pub min_duration: Option<u32>,
    pub max_duration: Option<u32>,
    pub workout_count: Option<usize>,
    pub min_workouts: Option<usize>,
    pub max_workouts: Option<usize>,
    pub min_clients: Option<usize>,
    pub max_clients: Option<usize>,
    pub estimated_difficulty: Option<EstimatedDifficulty>,
    /// Comma-separated; a routine matches if any of its workouts is in one.
    pub workout_categories: Option<String>,
    pub ordering: Option<String>,
}

const ORDERING_FIELDS: &[&str] = &["name", "duration", "daysPerWeek", "frequency"];

impl RoutineQuery {
    /// `client_counts` maps routine id to the number of clients it is
    /// assigned to; routines missing from the map have none.
    pub fn matches(&self, routine: &Routine, client_counts: &HashMap<String, usize>) -> bool {
        if let Some(term) = &self.search
            && !(icontains(&routine.name, term) || icontains(&routine.description, term))
        {
            return false;
        }
        if let Some(raw) = &self.frequency
            && !parse_list::<Frequency>(raw).contains(&routine.frequency)
        {
            return false;
        }
        if self.days_per_week.is_some_and(|d| d != routine.days_per_week)
            || self.duration.is_some_and(|d| d != routine.duration)
            || self.workout_count.is_some_and(|n| n != routine.workout_count())
        {
            return false;
        }

        let clients = client_counts.get(&routine.id).copied().unwrap_or(0);
        if !within(routine.days_per_week, self.min_days, self.max_days)
            || !within(routine.duration, self.min_duration, self.max_duration)
            || !within(routine.workout_count(), self.min_workouts, self.max_workouts)
            || !within(clients, self.min_clients, self.max_clients)
        {
            return false;
        }

        if let Some(level) = self.estimated_difficulty
            && !level.matches(routine)
        {
            return false;
        }

        if let Some(raw) = &self.workout_categories {
            let wanted: Vec<WorkoutCategory> = parse_list(raw);
            if !wanted.iter().any(|c| routine.has_category(*c)) {
                return false;
            }
        }
        true
    }

    pub fn apply(
        &self,
        mut routines: Vec<Routine>,
        client_counts: &HashMap<String, usize>,
    ) -> Vec<Routine> {
        routines.retain(|r| self.matches(r, client_counts));
        sort_by_ordering(
            &mut routines,
            self.ordering.as_deref(),
            ORDERING_FIELDS,
            "name",
            |field, a, b| match field {
                "duration" => a.duration.cmp(&b.duration),
                "daysPerWeek" => a.days_per_week.cmp(&b.days_per_week),
                "frequency" => a.frequency.cmp(&b.frequency),
                _ => a.name.cmp(&b.name),
            },
        );
        routines
    }
}
