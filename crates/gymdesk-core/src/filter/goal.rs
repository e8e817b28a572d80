use jiff::civil::Date;
use serde::Deserialize;

use super::{icontains, parse_list, sort_by_ordering, within};
use crate::models::goal::{Goal, GoalCategory};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GoalQuery {
    /// Matches title or description.
    pub search: Option<String>,
    pub client_id: Option<String>,
    pub category: Option<String>,
    pub is_completed: Option<bool>,
    pub deadline_from: Option<Date>,
    pub deadline_to: Option<Date>,
    pub ordering: Option<String>,
}

const ORDERING_FIELDS: &[&str] = &["deadline", "targetValue", "currentValue"];

impl GoalQuery {
    pub fn matches(&self, goal: &Goal) -> bool {
        if let Some(term) = &self.search
            && !(icontains(&goal.title, term) || icontains(&goal.description, term))
        {
            return false;
        }
        if self.client_id.as_ref().is_some_and(|id| *id != goal.client_id) {
            return false;
        }
        if let Some(raw) = &self.category
            && !parse_list::<GoalCategory>(raw).contains(&goal.category)
        {
            return false;
        }
        self.is_completed.is_none_or(|c| c == goal.is_completed)
            && within(goal.deadline, self.deadline_from, self.deadline_to)
    }

    pub fn apply(&self, mut goals: Vec<Goal>) -> Vec<Goal> {
        goals.retain(|g| self.matches(g));
        sort_by_ordering(
            &mut goals,
            self.ordering.as_deref(),
            ORDERING_FIELDS,
            "deadline",
            |field, a, b| match field {
                "targetValue" => a.target_value.total_cmp(&b.target_value),
                "currentValue" => a.current_value.total_cmp(&b.current_value),
                _ => a.deadline.cmp(&b.deadline),
            },
        );
        goals
    }
}
