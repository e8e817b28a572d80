use gymdesk_core::filter::client::{ClientPreset, ClientQuery, SubscriptionStatus};
use gymdesk_core::filter::exercise::{ExerciseQuery, by_muscle_group};
use gymdesk_core::filter::goal::GoalQuery;
use gymdesk_core::filter::routine::{EstimatedDifficulty, RoutineQuery};
use gymdesk_core::filter::tracking::{ProgressMetricsQuery, WorkoutSetQuery};
use gymdesk_core::filter::workout::WorkoutQuery;
use gymdesk_core::fixtures;
use gymdesk_core::stats::routine_client_counts;
use jiff::civil::date;

fn ids<T>(items: &[T], id: impl Fn(&T) -> &str) -> Vec<String> {
    items.iter().map(|i| id(i).to_string()).collect()
}

fn clients(query: ClientQuery, today: jiff::civil::Date) -> Vec<String> {
    let found = query.apply(fixtures::dataset().clients.clone(), today);
    ids(&found, |c| &c.id)
}

#[test]
fn client_search_is_case_insensitive_across_fields() {
    let query = ClientQuery {
        search: Some("RODRÍGUEZ".into()),
        ..Default::default()
    };
    assert_eq!(clients(query, date(2026, 1, 1)), ["2"]);

    let by_phone = ClientQuery {
        search: Some("690 123".into()),
        ..Default::default()
    };
    assert_eq!(clients(by_phone, date(2026, 1, 1)), ["9"]);
}

#[test]
fn client_default_ordering_is_by_name() {
    let found = ClientQuery::default().apply(fixtures::dataset().clients.clone(), date(2026, 1, 1));
    let names: Vec<&str> = found.iter().map(|c| c.name.as_str()).collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}

#[test]
fn client_descending_ordering_and_unknown_field_fallback() {
    let oldest_first = ClientQuery {
        ordering: Some("-age".into()),
        ..Default::default()
    };
    assert_eq!(clients(oldest_first, date(2026, 1, 1))[0], "8");

    let bogus = ClientQuery {
        ordering: Some("password".into()),
        ..Default::default()
    };
    let found = clients(bogus, date(2026, 1, 1));
    assert_eq!(found[0], "3"); // Ana Martínez, first by name
}

#[test]
fn client_age_range() {
    let query = ClientQuery {
        min_age: Some(30),
        max_age: Some(35),
        ordering: Some("age".into()),
        ..Default::default()
    };
    assert_eq!(clients(query, date(2026, 1, 1)), ["7", "2", "10", "4"]);
}

#[test]
fn client_subscription_status_and_presets() {
    let today = date(2026, 1, 1);

    let active = ClientQuery {
        subscription_status: Some(SubscriptionStatus::Active),
        ..Default::default()
    };
    assert_eq!(clients(active, today).len(), 6);

    let expired = ClientQuery {
        filter: Some(ClientPreset::Expired),
        ..Default::default()
    };
    let mut expired = clients(expired, today);
    expired.sort();
    assert_eq!(expired, ["1", "2", "3", "4"]);

    let none = ClientQuery {
        subscription_status: Some(SubscriptionStatus::None),
        ..Default::default()
    };
    assert!(clients(none, today).is_empty());

    let expiring = ClientQuery {
        filter: Some(ClientPreset::Expiring),
        ..Default::default()
    };
    assert_eq!(clients(expiring, date(2026, 5, 15)), ["5"]);

    let new = ClientQuery {
        filter: Some(ClientPreset::New),
        ..Default::default()
    };
    let mut joined = clients(new, date(2024, 3, 20));
    joined.sort();
    assert_eq!(joined, ["4", "7", "8"]);
}

#[test]
fn client_subscription_type_list() {
    let query = ClientQuery {
        subscription_type: Some("standard, personalized".into()),
        ..Default::default()
    };
    let mut found = clients(query, date(2026, 1, 1));
    found.sort_by_key(|id| id.parse::<u32>().unwrap());
    assert_eq!(found, ["2", "3", "5", "6", "8", "9"]);
}

#[test]
fn client_routine_filters() {
    let today = date(2026, 1, 1);
    let without = ClientQuery {
        has_routines: Some(false),
        ..Default::default()
    };
    assert!(clients(without, today).is_empty());

    let two = ClientQuery {
        routine_count: Some(2),
        ..Default::default()
    };
    assert_eq!(clients(two, today).len(), 5);
}

#[test]
fn client_query_parses_from_camel_case_pairs() {
    let query: ClientQuery = serde_json::from_value(serde_json::json!({
        "minAge": 30,
        "filter": "with-routines",
        "subscriptionStatus": "expired",
    }))
    .unwrap();
    assert_eq!(query.min_age, Some(30));
    assert_eq!(query.filter, Some(ClientPreset::WithRoutines));
    assert_eq!(query.subscription_status, Some(SubscriptionStatus::Expired));
}

#[test]
fn exercise_overlap_filters() {
    let all = fixtures::dataset().exercises.clone();

    let glutes = ExerciseQuery {
        muscle_groups: Some("glúteos".into()),
        ..Default::default()
    };
    let found = glutes.apply(all.clone());
    assert_eq!(ids(&found, |e| &e.id), ["3", "1"]); // Peso Muerto, Sentadillas

    let barbell_beginner = ExerciseQuery {
        equipment: Some("Barra".into()),
        difficulty: Some("beginner".into()),
        ..Default::default()
    };
    assert_eq!(ids(&barbell_beginner.apply(all.clone()), |e| &e.id), ["1"]);

    let core = by_muscle_group(all, "Abdominales");
    assert_eq!(ids(&core, |e| &e.id), ["5"]);
}

#[test]
fn exercise_ordering_by_difficulty_level() {
    let query = ExerciseQuery {
        ordering: Some("-difficulty".into()),
        ..Default::default()
    };
    let found = query.apply(fixtures::dataset().exercises.clone());
    assert_eq!(found[0].id, "3");
    assert_eq!(found[1].id, "2");
}

#[test]
fn workout_filters() {
    let all = fixtures::dataset().workouts.clone();

    let strength = WorkoutQuery {
        category: Some("strength".into()),
        min_duration: Some(41),
        ..Default::default()
    };
    assert_eq!(ids(&strength.apply(all.clone()), |w| &w.id), ["1"]);

    let three = WorkoutQuery {
        exercise_count: Some(3),
        ordering: Some("estimatedDuration".into()),
        ..Default::default()
    };
    assert_eq!(ids(&three.apply(all), |w| &w.id), ["3", "2", "1"]);
}

#[test]
fn routine_estimated_difficulty_buckets() {
    let data = fixtures::dataset();
    let easy = data.routine("1").unwrap();
    let medium = data.routine("2").unwrap();
    let hard = data.routine("3").unwrap();

    assert!(EstimatedDifficulty::Easy.matches(easy));
    assert!(!EstimatedDifficulty::Medium.matches(easy));
    assert!(EstimatedDifficulty::Medium.matches(medium));
    assert!(!EstimatedDifficulty::Hard.matches(medium));
    assert!(EstimatedDifficulty::Hard.matches(hard));
    assert!(!EstimatedDifficulty::Medium.matches(hard));
}

#[test]
fn routine_client_and_category_filters() {
    let data = fixtures::dataset();
    let counts = routine_client_counts(&data.clients);

    let popular = RoutineQuery {
        min_clients: Some(5),
        ordering: Some("duration".into()),
        ..Default::default()
    };
    let found = popular.apply(data.routines.clone(), &counts);
    assert_eq!(ids(&found, |r| &r.id), ["1", "2"]);

    let mixed = RoutineQuery {
        workout_categories: Some("mixed,cardio".into()),
        max_workouts: Some(2),
        ..Default::default()
    };
    assert_eq!(ids(&mixed.apply(data.routines.clone(), &counts), |r| &r.id), ["1"]);
}

#[test]
fn goal_filters_and_ordering() {
    let goals = fixtures::dataset().goals.clone();

    let pending = GoalQuery {
        is_completed: Some(false),
        ..Default::default()
    };
    assert_eq!(ids(&pending.apply(goals.clone()), |g| &g.id), ["1", "2"]);

    let weight = GoalQuery {
        category: Some("weight".into()),
        ordering: Some("-targetValue".into()),
        ..Default::default()
    };
    assert_eq!(ids(&weight.apply(goals.clone()), |g| &g.id), ["1", "3"]);

    let search = GoalQuery {
        search: Some("banca".into()),
        ..Default::default()
    };
    assert_eq!(ids(&search.apply(goals), |g| &g.id), ["2"]);
}

#[test]
fn progress_metrics_newest_first_for_client() {
    let metrics = fixtures::dataset().progress_metrics.clone();
    let found = ProgressMetricsQuery::for_client("2").apply(metrics);
    let dates: Vec<String> = found.iter().map(|m| m.date.to_string()).collect();
    assert_eq!(dates, ["2024-03-01", "2024-02-01"]);
}

#[test]
fn workout_sets_order_numerically() {
    let placed = fixtures::dataset()
        .workouts
        .iter()
        .flat_map(|w| w.placed_sets())
        .collect::<Vec<_>>();

    let plank = WorkoutSetQuery {
        exercise_id: Some("5".into()),
        ..Default::default()
    };
    let found = plank.apply(placed.clone());
    assert_eq!(ids(&found, |p| &p.set.id), ["3", "6", "9"]);

    let all = WorkoutSetQuery::default().apply(placed);
    assert_eq!(all.last().unwrap().set.id, "9");
}
