//! Hand-authored example data: ten clients of a small Madrid gym, the
//! exercise catalog, three workouts, three routines built from them, and a
//! few goals, measurements and routine assignments.
//!
//! The JSON documents are embedded at compile time and parsed once.

use std::sync::LazyLock;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::dataset::Dataset;
use crate::models::routine::RoutineInput;

const CLIENTS: &str = include_str!("../fixtures/clients.json");
const EXERCISES: &str = include_str!("../fixtures/exercises.json");
const WORKOUTS: &str = include_str!("../fixtures/workouts.json");
const ROUTINES: &str = include_str!("../fixtures/routines.json");
const CLIENT_ROUTINES: &str = include_str!("../fixtures/client_routines.json");
const PROGRESS_METRICS: &str = include_str!("../fixtures/progress_metrics.json");
const GOALS: &str = include_str!("../fixtures/goals.json");

/// Routines are authored by workout id and expanded into embedded copies.
#[derive(Deserialize)]
struct RoutineFixture {
    id: String,
    #[serde(flatten)]
    input: RoutineInput,
}

static DATASET: LazyLock<Dataset> = LazyLock::new(build);

/// The full fixture dataset.
///
/// # Panics
///
/// Panics on first use if an embedded document is malformed or a routine
/// names a workout that is not in the fixture set. The documents are compiled
/// in, so this indicates a fixture authoring bug.
pub fn dataset() -> &'static Dataset {
    &DATASET
}

fn parse<T: DeserializeOwned>(name: &str, source: &str) -> Vec<T> {
    serde_json::from_str(source).unwrap_or_else(|e| panic!("fixture '{name}' is malformed: {e}"))
}

fn build() -> Dataset {
    let workouts = parse("workouts", WORKOUTS);
    let routines = parse::<RoutineFixture>("routines", ROUTINES)
        .into_iter()
        .map(|f| {
            let id = f.id.clone();
            f.input
                .into_routine(f.id, &workouts)
                .unwrap_or_else(|e| panic!("fixture routine {id}: {e}"))
        })
        .collect();

    Dataset {
        clients: parse("clients", CLIENTS),
        exercises: parse("exercises", EXERCISES),
        workouts,
        routines,
        client_routines: parse("client_routines", CLIENT_ROUTINES),
        progress_metrics: parse("progress_metrics", PROGRESS_METRICS),
        goals: parse("goals", GOALS),
    }
}
