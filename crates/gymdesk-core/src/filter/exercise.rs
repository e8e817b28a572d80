use serde::Deserialize;

use super::{icontains, parse_list, sort_by_ordering, split_list};
use crate::models::exercise::{Difficulty, Exercise};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExerciseQuery {
    /// Matches name or description.
    pub search: Option<String>,
    /// Comma-separated difficulties.
    pub difficulty: Option<String>,
    /// Comma-separated; an exercise matches if it trains any of them.
    pub muscle_groups: Option<String>,
    /// Comma-separated; an exercise matches if it uses any of them.
    pub equipment: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub ordering: Option<String>,
}

const ORDERING_FIELDS: &[&str] = &["name", "difficulty"];

/// True when any entry of `values` equals any of `wanted`, ignoring case.
fn overlaps(values: &[String], wanted: &[String]) -> bool {
    values
        .iter()
        .any(|v| wanted.iter().any(|w| v.to_lowercase() == w.to_lowercase()))
}

impl ExerciseQuery {
    pub fn matches(&self, exercise: &Exercise) -> bool {
        if let Some(term) = &self.search
            && !(icontains(&exercise.name, term) || icontains(&exercise.description, term))
        {
            return false;
        }
        if let Some(raw) = &self.difficulty
            && !parse_list::<Difficulty>(raw).contains(&exercise.difficulty)
        {
            return false;
        }
        if let Some(raw) = &self.muscle_groups
            && !overlaps(&exercise.muscle_groups, &split_list(raw))
        {
            return false;
        }
        if let Some(raw) = &self.equipment
            && !overlaps(&exercise.equipment, &split_list(raw))
        {
            return false;
        }
        if let Some(name) = &self.name
            && !icontains(&exercise.name, name)
        {
            return false;
        }
        if let Some(description) = &self.description
            && !icontains(&exercise.description, description)
        {
            return false;
        }
        true
    }

    pub fn apply(&self, mut exercises: Vec<Exercise>) -> Vec<Exercise> {
        exercises.retain(|e| self.matches(e));
        sort_by_ordering(
            &mut exercises,
            self.ordering.as_deref(),
            ORDERING_FIELDS,
            "name",
            |field, a, b| match field {
                "difficulty" => a.difficulty.cmp(&b.difficulty),
                _ => a.name.cmp(&b.name),
            },
        );
        exercises
    }
}

/// Exercises that list `muscle_group` among their muscle groups (case-insensitive).
pub fn by_muscle_group(exercises: Vec<Exercise>, muscle_group: &str) -> Vec<Exercise> {
    let wanted = [muscle_group.trim().to_string()];
    exercises
        .into_iter()
        .filter(|e| overlaps(&e.muscle_groups, &wanted))
        .collect()
}
