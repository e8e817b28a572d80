use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

/// Day names accepted by routine schedules and client assignments.
///
/// The derived ordering is calendar order, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DaysInput {
    List(Vec<Weekday>),
    Flags(BTreeMap<Weekday, bool>),
}

/// Accept either `["monday", "friday"]` or `{"monday": true, "tuesday": false, ...}`.
///
/// The object form keeps the days flagged `true`, in calendar order.
pub fn deserialize_days<'de, D>(deserializer: D) -> Result<Vec<Weekday>, D::Error>
where
    D: Deserializer<'de>,
{
    match DaysInput::deserialize(deserializer) {
        Ok(DaysInput::List(days)) => Ok(days),
        Ok(DaysInput::Flags(flags)) => Ok(flags
            .into_iter()
            .filter_map(|(day, on)| on.then_some(day))
            .collect()),
        Err(_) => Err(serde::de::Error::custom(
            "assignedDays must be a list of day names or an object of day name to boolean",
        )),
    }
}
