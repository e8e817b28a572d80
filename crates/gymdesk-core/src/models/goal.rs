use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Goal {
    #[serde(default)]
    pub id: String,
    pub client_id: String,
    pub title: String,
    pub description: String,
    pub target_value: f64,
    pub current_value: f64,
    pub unit: String,
    pub deadline: Date,
    #[serde(default)]
    pub is_completed: bool,
    pub category: GoalCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum GoalCategory {
    Weight,
    Strength,
    Endurance,
    Flexibility,
    Custom,
}

/// Body of a goal progress update.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct GoalProgressUpdate {
    #[serde(default)]
    #[ts(optional)]
    pub current_value: Option<f64>,
}

impl Goal {
    /// Record a new current value. The goal is complete once the value
    /// reaches the target.
    pub fn update_progress(&mut self, current_value: f64) {
        self.current_value = current_value;
        self.is_completed = current_value >= self.target_value;
    }
}
