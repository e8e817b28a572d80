use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Client {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub age: u32,
    pub weight: f64,
    pub height: f64,
    #[serde(default)]
    pub goals: Vec<String>,
    pub join_date: Date,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub profile_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub subscription: Option<Subscription>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub assigned_routines: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub emergency_contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub medical_conditions: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Subscription {
    #[serde(rename = "type")]
    pub subscription_type: SubscriptionType,
    pub start_date: Date,
    pub end_date: Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SubscriptionType {
    Standard,
    Premium,
    Personalized,
}

impl Client {
    pub fn assigned_routine_ids(&self) -> &[String] {
        self.assigned_routines.as_deref().unwrap_or_default()
    }

    pub fn subscription_type(&self) -> Option<SubscriptionType> {
        self.subscription.as_ref().map(|s| s.subscription_type)
    }

    pub fn subscription_end(&self) -> Option<Date> {
        self.subscription.as_ref().map(|s| s.end_date)
    }

    /// A subscription counts as active while it has no end date or the end
    /// date is still in the future. Clients without a subscription therefore
    /// count as active too.
    pub fn has_active_subscription(&self, today: Date) -> bool {
        self.subscription_end().is_none_or(|end| end > today)
    }

    pub fn has_expired_subscription(&self, today: Date) -> bool {
        self.subscription_end().is_some_and(|end| end < today)
    }

    /// Add or remove `routine_id` from `assignedRoutines`.
    ///
    /// Returns `true` when the list changed.
    pub fn set_routine_assigned(&mut self, routine_id: &str, assigned: bool) -> bool {
        let present = self.assigned_routine_ids().iter().any(|r| r == routine_id);
        match (present, assigned) {
            (false, true) => {
                self.assigned_routines
                    .get_or_insert_with(Vec::new)
                    .push(routine_id.to_string());
                true
            }
            (true, false) => {
                if let Some(routines) = self.assigned_routines.as_mut() {
                    routines.retain(|r| r != routine_id);
                }
                true
            }
            _ => false,
        }
    }
}
