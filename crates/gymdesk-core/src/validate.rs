//! Field-level checks applied before a record is written.

use crate::dataset::Dataset;
use crate::error::CoreError;
use crate::models::assignment::{ClientRoutine, RoutineProgress};
use crate::models::client::Client;
use crate::models::exercise::Exercise;
use crate::models::goal::Goal;
use crate::models::progress::ProgressMetrics;
use crate::models::routine::Routine;
use crate::models::workout::{Workout, WorkoutSet};

fn non_empty(field: &'static str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::invalid(field, "must not be empty"));
    }
    Ok(())
}

fn non_negative(field: &'static str, value: f64) -> Result<(), CoreError> {
    if !value.is_finite() || value < 0.0 {
        return Err(CoreError::invalid(field, format!("{value} must be a non-negative number")));
    }
    Ok(())
}

pub fn rating(value: Option<u8>) -> Result<(), CoreError> {
    match value {
        Some(r) if !(1..=5).contains(&r) => {
            Err(CoreError::invalid("rating", format!("{r} is outside 1-5")))
        }
        _ => Ok(()),
    }
}

pub fn client(client: &Client) -> Result<(), CoreError> {
    non_empty("name", &client.name)?;
    if !client.email.contains('@') {
        return Err(CoreError::invalid("email", format!("'{}' is not an email address", client.email)));
    }
    non_empty("phone", &client.phone)?;
    non_negative("weight", client.weight)?;
    non_negative("height", client.height)?;
    if let Some(sub) = &client.subscription
        && sub.start_date > sub.end_date
    {
        return Err(CoreError::invalid(
            "subscription",
            format!("starts {} after it ends {}", sub.start_date, sub.end_date),
        ));
    }
    Ok(())
}

/// Emails identify clients; no two may share one (case-insensitive).
pub fn unique_email(client: &Client, existing: &[Client]) -> Result<(), CoreError> {
    let taken = existing
        .iter()
        .any(|c| c.id != client.id && c.email.eq_ignore_ascii_case(&client.email));
    if taken {
        return Err(CoreError::DuplicateEmail(client.email.clone()));
    }
    Ok(())
}

pub fn exercise(exercise: &Exercise) -> Result<(), CoreError> {
    non_empty("name", &exercise.name)
}

pub fn workout_set(set: &WorkoutSet) -> Result<(), CoreError> {
    non_empty("exerciseId", &set.exercise_id)?;
    non_negative("weight", set.weight)
}

pub fn workout(workout: &Workout) -> Result<(), CoreError> {
    non_empty("name", &workout.name)?;
    workout.exercises.iter().try_for_each(workout_set)
}

pub fn routine(routine: &Routine) -> Result<(), CoreError> {
    non_empty("name", &routine.name)?;
    if routine.days_per_week > 7 {
        return Err(CoreError::invalid(
            "daysPerWeek",
            format!("{} exceeds the days in a week", routine.days_per_week),
        ));
    }
    routine.workouts.iter().try_for_each(workout)
}

pub fn client_routine(assignment: &ClientRoutine) -> Result<(), CoreError> {
    if let Some(end) = assignment.end_date
        && end < assignment.start_date
    {
        return Err(CoreError::invalid(
            "endDate",
            format!("{end} is before startDate {}", assignment.start_date),
        ));
    }
    assignment.progress.iter().try_for_each(routine_progress)
}

pub fn routine_progress(entry: &RoutineProgress) -> Result<(), CoreError> {
    rating(entry.rating)?;
    entry.sets.iter().try_for_each(workout_set)
}

pub fn progress_metrics(metrics: &ProgressMetrics) -> Result<(), CoreError> {
    non_negative("weight", metrics.weight)?;
    if let Some(fat) = metrics.body_fat {
        non_negative("bodyFat", fat)?;
    }
    if let Some(mass) = metrics.muscle_mass {
        non_negative("muscleMass", mass)?;
    }
    for (_, value) in metrics.measurements.iter() {
        non_negative("measurements", value)?;
    }
    Ok(())
}

pub fn goal(goal: &Goal) -> Result<(), CoreError> {
    non_empty("title", &goal.title)?;
    non_empty("unit", &goal.unit)
}

/// Run every record check and the reference check over a whole dataset,
/// collecting all failures instead of stopping at the first.
pub fn dataset(data: &Dataset) -> Vec<String> {
    let mut problems: Vec<String> = Vec::new();
    let mut record = |kind: &str, id: &str, result: Result<(), CoreError>| {
        if let Err(e) = result {
            problems.push(format!("{kind} {id}: {e}"));
        }
    };

    for c in &data.clients {
        record("client", &c.id, client(c));
        record("client", &c.id, unique_email(c, &data.clients));
    }
    for e in &data.exercises {
        record("exercise", &e.id, exercise(e));
    }
    for w in &data.workouts {
        record("workout", &w.id, workout(w));
    }
    for r in &data.routines {
        record("routine", &r.id, routine(r));
    }
    for a in &data.client_routines {
        record("client routine", &a.id, client_routine(a));
    }
    for m in &data.progress_metrics {
        record("progress metrics", &m.id, progress_metrics(m));
    }
    for g in &data.goals {
        record("goal", &g.id, goal(g));
    }

    problems.extend(data.check_references().iter().map(ToString::to_string));
    problems
}
