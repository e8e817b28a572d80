use jiff::ToSpan;
use jiff::civil::Date;
use serde::Deserialize;

use super::{icontains, icontains_opt, parse_list, sort_by_ordering, within};
use crate::models::client::{Client, SubscriptionType};

/// Named shortcuts offered by the client list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClientPreset {
    All,
    Active,
    Premium,
    Standard,
    Personalized,
    WithRoutines,
    WithoutRoutines,
    /// Subscription ends within the next 30 days.
    Expiring,
    Expired,
    /// Joined within the last 30 days.
    New,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Active,
    Expired,
    None,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientQuery {
    pub search: Option<String>,
    pub min_age: Option<u32>,
    pub max_age: Option<u32>,
    pub min_weight: Option<f64>,
    pub max_weight: Option<f64>,
    pub min_height: Option<f64>,
    pub max_height: Option<f64>,
    pub joined_after: Option<Date>,
    pub joined_before: Option<Date>,
    /// Comma-separated subscription types.
    pub subscription_type: Option<String>,
    pub subscription_status: Option<SubscriptionStatus>,
    pub has_goals: Option<bool>,
    pub has_routines: Option<bool>,
    pub routine_count: Option<usize>,
    pub phone: Option<String>,
    pub emergency_contact: Option<String>,
    pub medical_conditions: Option<String>,
    pub filter: Option<ClientPreset>,
    pub ordering: Option<String>,
}

const ORDERING_FIELDS: &[&str] = &["name", "joinDate", "age", "weight", "height"];

impl ClientQuery {
    pub fn matches(&self, client: &Client, today: Date) -> bool {
        if let Some(term) = &self.search {
            let hit = icontains(&client.name, term)
                || icontains(&client.email, term)
                || icontains(&client.phone, term)
                || icontains_opt(client.emergency_contact.as_deref(), term);
            if !hit {
                return false;
            }
        }

        if !within(client.age, self.min_age, self.max_age)
            || !within(client.weight, self.min_weight, self.max_weight)
            || !within(client.height, self.min_height, self.max_height)
            || !within(client.join_date, self.joined_after, self.joined_before)
        {
            return false;
        }

        if let Some(raw) = &self.subscription_type {
            let wanted: Vec<SubscriptionType> = parse_list(raw);
            if !client.subscription_type().is_some_and(|t| wanted.contains(&t)) {
                return false;
            }
        }

        if let Some(status) = self.subscription_status {
            let ok = match status {
                SubscriptionStatus::Active => client.has_active_subscription(today),
                SubscriptionStatus::Expired => client.has_expired_subscription(today),
                SubscriptionStatus::None => client.subscription.is_none(),
            };
            if !ok {
                return false;
            }
        }

        if let Some(wanted) = self.has_goals
            && client.goals.is_empty() == wanted
        {
            return false;
        }

        let routines = client.assigned_routine_ids().len();
        if let Some(wanted) = self.has_routines
            && (routines > 0) != wanted
        {
            return false;
        }
        if self.routine_count.is_some_and(|n| n != routines) {
            return false;
        }

        let text_filters = [
            (self.phone.as_deref(), Some(client.phone.as_str())),
            (self.emergency_contact.as_deref(), client.emergency_contact.as_deref()),
            (self.medical_conditions.as_deref(), client.medical_conditions.as_deref()),
        ];
        for (needle, haystack) in text_filters {
            if let Some(needle) = needle
                && !icontains_opt(haystack, needle)
            {
                return false;
            }
        }

        self.filter
            .is_none_or(|preset| preset_matches(preset, client, today))
    }

    /// Filter and order `clients`. `today` anchors the subscription and
    /// recency rules.
    pub fn apply(&self, mut clients: Vec<Client>, today: Date) -> Vec<Client> {
        clients.retain(|c| self.matches(c, today));
        sort_by_ordering(
            &mut clients,
            self.ordering.as_deref(),
            ORDERING_FIELDS,
            "name",
            |field, a, b| match field {
                "joinDate" => a.join_date.cmp(&b.join_date),
                "age" => a.age.cmp(&b.age),
                "weight" => a.weight.total_cmp(&b.weight),
                "height" => a.height.total_cmp(&b.height),
                _ => a.name.cmp(&b.name),
            },
        );
        clients
    }
}

fn preset_matches(preset: ClientPreset, client: &Client, today: Date) -> bool {
    let window = 30.days();
    match preset {
        ClientPreset::All => true,
        ClientPreset::Active => client.has_active_subscription(today),
        ClientPreset::Premium => client.subscription_type() == Some(SubscriptionType::Premium),
        ClientPreset::Standard => client.subscription_type() == Some(SubscriptionType::Standard),
        ClientPreset::Personalized => {
            client.subscription_type() == Some(SubscriptionType::Personalized)
        }
        ClientPreset::WithRoutines => !client.assigned_routine_ids().is_empty(),
        ClientPreset::WithoutRoutines => client.assigned_routine_ids().is_empty(),
        ClientPreset::Expiring => {
            let horizon = today.saturating_add(window);
            client
                .subscription_end()
                .is_some_and(|end| end > today && end <= horizon)
        }
        ClientPreset::Expired => client.has_expired_subscription(today),
        ClientPreset::New => client.join_date >= today.saturating_sub(window),
    }
}
