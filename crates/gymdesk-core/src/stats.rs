//! Aggregate statistics for the client and routine dashboards.

use std::collections::{BTreeMap, HashMap};

use jiff::civil::Date;
use serde::Serialize;
use ts_rs::TS;

use crate::models::client::{Client, SubscriptionType};
use crate::models::routine::{Frequency, Routine};

/// Average, minimum and maximum of a numeric field. All `None` for an empty
/// collection.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, TS)]
#[ts(export)]
pub struct NumericSummary {
    pub avg: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl NumericSummary {
    pub fn of(values: impl IntoIterator<Item = f64>) -> Self {
        let mut count = 0usize;
        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in values {
            count += 1;
            sum += v;
            min = min.min(v);
            max = max.max(v);
        }
        if count == 0 {
            return NumericSummary::default();
        }
        NumericSummary {
            avg: Some(sum / count as f64),
            min: Some(min),
            max: Some(max),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SubscriptionCount {
    /// `None` groups clients without a subscription.
    pub subscription_type: Option<SubscriptionType>,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct MonthCount {
    pub month: i8,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ClientStatistics {
    pub total_clients: usize,
    pub active_subscriptions: usize,
    pub subscription_stats: Vec<SubscriptionCount>,
    pub age_stats: NumericSummary,
    pub weight_stats: NumericSummary,
    /// Registrations grouped by calendar month of the join date, all years
    /// folded together.
    pub monthly_registrations: Vec<MonthCount>,
}

pub fn client_statistics(clients: &[Client], today: Date) -> ClientStatistics {
    let mut by_type: BTreeMap<Option<SubscriptionType>, usize> = BTreeMap::new();
    let mut by_month: BTreeMap<i8, usize> = BTreeMap::new();
    for client in clients {
        *by_type.entry(client.subscription_type()).or_default() += 1;
        *by_month.entry(client.join_date.month()).or_default() += 1;
    }

    ClientStatistics {
        total_clients: clients.len(),
        active_subscriptions: clients
            .iter()
            .filter(|c| c.has_active_subscription(today))
            .count(),
        subscription_stats: by_type
            .into_iter()
            .map(|(subscription_type, count)| SubscriptionCount {
                subscription_type,
                count,
            })
            .collect(),
        age_stats: NumericSummary::of(clients.iter().map(|c| f64::from(c.age))),
        weight_stats: NumericSummary::of(clients.iter().map(|c| c.weight)),
        monthly_registrations: by_month
            .into_iter()
            .map(|(month, count)| MonthCount { month, count })
            .collect(),
    }
}

/// Number of clients holding each routine id in `assignedRoutines`.
pub fn routine_client_counts(clients: &[Client]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for client in clients {
        for rid in client.assigned_routine_ids() {
            *counts.entry(rid.clone()).or_default() += 1;
        }
    }
    counts
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct FrequencyCount {
    pub frequency: Frequency,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct WorkoutCountBucket {
    pub workout_count: usize,
    pub routine_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PopularRoutine {
    pub id: String,
    pub name: String,
    pub client_count: usize,
    pub frequency: Frequency,
    pub duration: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RoutineStatistics {
    pub total_routines: usize,
    pub frequency_stats: Vec<FrequencyCount>,
    pub duration_stats: NumericSummary,
    pub days_stats: NumericSummary,
    pub workout_count_stats: Vec<WorkoutCountBucket>,
    pub popular_routines: Vec<PopularRoutine>,
}

const POPULAR_LIMIT: usize = 10;

pub fn routine_statistics(routines: &[Routine], clients: &[Client]) -> RoutineStatistics {
    let counts = routine_client_counts(clients);

    let mut by_frequency: BTreeMap<Frequency, usize> = BTreeMap::new();
    let mut by_workouts: BTreeMap<usize, usize> = BTreeMap::new();
    for routine in routines {
        *by_frequency.entry(routine.frequency).or_default() += 1;
        *by_workouts.entry(routine.workout_count()).or_default() += 1;
    }

    let mut popular: Vec<PopularRoutine> = routines
        .iter()
        .map(|r| PopularRoutine {
            id: r.id.clone(),
            name: r.name.clone(),
            client_count: counts.get(&r.id).copied().unwrap_or(0),
            frequency: r.frequency,
            duration: r.duration,
        })
        .collect();
    popular.sort_by(|a, b| {
        b.client_count
            .cmp(&a.client_count)
            .then_with(|| a.name.cmp(&b.name))
    });
    popular.truncate(POPULAR_LIMIT);

    RoutineStatistics {
        total_routines: routines.len(),
        frequency_stats: by_frequency
            .into_iter()
            .map(|(frequency, count)| FrequencyCount { frequency, count })
            .collect(),
        duration_stats: NumericSummary::of(routines.iter().map(|r| f64::from(r.duration))),
        days_stats: NumericSummary::of(routines.iter().map(|r| f64::from(r.days_per_week))),
        workout_count_stats: by_workouts
            .into_iter()
            .map(|(workout_count, routine_count)| WorkoutCountBucket {
                workout_count,
                routine_count,
            })
            .collect(),
        popular_routines: popular,
    }
}
