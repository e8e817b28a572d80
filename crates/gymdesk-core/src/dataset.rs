use serde::{Deserialize, Serialize};

use crate::models::assignment::ClientRoutine;
use crate::models::client::Client;
use crate::models::exercise::Exercise;
use crate::models::goal::Goal;
use crate::models::progress::ProgressMetrics;
use crate::models::routine::Routine;
use crate::models::workout::Workout;

/// Every record kind, held together. Used for fixtures and for whole-store
/// consistency checks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub clients: Vec<Client>,
    pub exercises: Vec<Exercise>,
    pub workouts: Vec<Workout>,
    pub routines: Vec<Routine>,
    pub client_routines: Vec<ClientRoutine>,
    pub progress_metrics: Vec<ProgressMetrics>,
    pub goals: Vec<Goal>,
}

/// An id reference that points at nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingReference {
    pub from_kind: &'static str,
    pub from_id: String,
    pub to_kind: &'static str,
    pub to_id: String,
}

impl std::fmt::Display for DanglingReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} references missing {} {}",
            self.from_kind, self.from_id, self.to_kind, self.to_id
        )
    }
}

impl Dataset {
    pub fn client(&self, id: &str) -> Option<&Client> {
        self.clients.iter().find(|c| c.id == id)
    }

    pub fn exercise(&self, id: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.id == id)
    }

    pub fn workout(&self, id: &str) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id == id)
    }

    pub fn routine(&self, id: &str) -> Option<&Routine> {
        self.routines.iter().find(|r| r.id == id)
    }

    pub fn client_routine(&self, id: &str) -> Option<&ClientRoutine> {
        self.client_routines.iter().find(|a| a.id == id)
    }

    /// Walk every id reference and report the ones that do not resolve.
    pub fn check_references(&self) -> Vec<DanglingReference> {
        let mut dangling = Vec::new();
        let mut check = |from_kind, from_id: &str, to_kind, to_id: &str, ok: bool| {
            if !ok {
                dangling.push(DanglingReference {
                    from_kind,
                    from_id: from_id.to_string(),
                    to_kind,
                    to_id: to_id.to_string(),
                });
            }
        };

        for client in &self.clients {
            for rid in client.assigned_routine_ids() {
                check("client", &client.id, "routine", rid, self.routine(rid).is_some());
            }
        }

        let embedded = self.routines.iter().flat_map(|r| r.workouts.iter());
        for workout in self.workouts.iter().chain(embedded) {
            for set in &workout.exercises {
                check(
                    "workout set",
                    &set.id,
                    "exercise",
                    &set.exercise_id,
                    self.exercise(&set.exercise_id).is_some(),
                );
            }
        }

        for routine in &self.routines {
            for workout in &routine.workouts {
                check("routine", &routine.id, "workout", &workout.id, self.workout(&workout.id).is_some());
            }
        }

        for assignment in &self.client_routines {
            check(
                "client routine",
                &assignment.id,
                "client",
                &assignment.client_id,
                self.client(&assignment.client_id).is_some(),
            );
            check(
                "client routine",
                &assignment.id,
                "routine",
                &assignment.routine_id,
                self.routine(&assignment.routine_id).is_some(),
            );
            for entry in &assignment.progress {
                check(
                    "routine progress",
                    &entry.id,
                    "client routine",
                    &entry.client_routine_id,
                    entry.client_routine_id == assignment.id,
                );
                check(
                    "routine progress",
                    &entry.id,
                    "workout",
                    &entry.workout_id,
                    self.workout(&entry.workout_id).is_some(),
                );
            }
        }

        for metrics in &self.progress_metrics {
            check(
                "progress metrics",
                &metrics.id,
                "client",
                &metrics.client_id,
                self.client(&metrics.client_id).is_some(),
            );
        }

        for goal in &self.goals {
            check("goal", &goal.id, "client", &goal.client_id, self.client(&goal.client_id).is_some());
        }

        dangling
    }
}
