use gymdesk_core::error::CoreError;
use gymdesk_core::fixtures;
use gymdesk_core::models::assignment::{ClientRoutine, WorkoutCompletion, has_active_assignment};
use gymdesk_core::models::goal::Goal;
use gymdesk_core::models::routine::RoutineInput;
use gymdesk_core::models::weekday::Weekday;
use gymdesk_core::s3_keys;
use gymdesk_core::validate;
use serde_json::json;

fn assignment(days: serde_json::Value) -> Result<ClientRoutine, serde_json::Error> {
    serde_json::from_value(json!({
        "clientId": "1",
        "routineId": "1",
        "startDate": "2023-01-01",
        "assignedDays": days,
    }))
}

#[test]
fn assigned_days_accept_flag_objects() {
    let a = assignment(json!({
        "monday": true,
        "wednesday": true,
        "friday": true,
        "tuesday": false,
        "thursday": false,
        "saturday": false,
        "sunday": false,
    }))
    .unwrap();
    assert_eq!(a.assigned_days, [Weekday::Monday, Weekday::Wednesday, Weekday::Friday]);
    assert!(a.is_active, "assignments default to active");
    assert!(a.progress.is_empty());
}

#[test]
fn assigned_days_accept_lists() {
    let a = assignment(json!(["monday", "wednesday", "friday"])).unwrap();
    assert_eq!(a.assigned_days, [Weekday::Monday, Weekday::Wednesday, Weekday::Friday]);
}

#[test]
fn assigned_days_reject_unknown_days_and_other_types() {
    assert!(assignment(json!(["monday", "invalid_day", "friday"])).is_err());
    assert!(assignment(json!("invalid_type")).is_err());
    assert!(assignment(json!({ "funday": true })).is_err());
}

#[test]
fn goal_completes_when_value_reaches_target() {
    let mut goal: Goal = fixtures::dataset().goals[1].clone();
    assert!(!goal.is_completed);

    goal.update_progress(95.0);
    assert_eq!(goal.current_value, 95.0);
    assert!(!goal.is_completed);

    goal.update_progress(100.0);
    assert!(goal.is_completed);
}

#[test]
fn completing_a_workout_copies_its_sets() {
    let data = fixtures::dataset();
    let mut assignment = data.client_routine("2").unwrap().clone();
    let workout = data.workout("2").unwrap();
    let at: jiff::Timestamp = "2024-02-06T19:00:00Z".parse().unwrap();

    let entry = assignment
        .record_completion(
            workout,
            WorkoutCompletion {
                workout_id: workout.id.clone(),
                notes: Some("  ".into()),
                rating: Some(5),
            },
            at,
        )
        .clone();

    assert_eq!(entry.client_routine_id, "2");
    assert_eq!(entry.workout_id, "2");
    assert_eq!(entry.completed_at, at);
    assert_eq!(entry.sets.len(), 3);
    assert!(entry.sets.iter().all(|s| s.completed));
    assert_eq!(entry.notes, None, "blank notes are dropped");
    assert_eq!(assignment.progress.len(), 1);
    assert!(assignment.progress_entry(&entry.id).is_some());
}

#[test]
fn duplicate_active_assignment_detection() {
    let data = fixtures::dataset();
    let existing = &data.client_routines;

    assert!(has_active_assignment(existing, "1", "1", None));
    assert!(!has_active_assignment(existing, "1", "1", Some("1")));
    assert!(!has_active_assignment(existing, "1", "3", None));
}

#[test]
fn routine_input_resolves_workouts_by_id() {
    let data = fixtures::dataset();
    let input: RoutineInput = serde_json::from_value(json!({
        "name": "Cardio",
        "description": "Short sessions",
        "workoutIds": ["3", "3"],
        "frequency": "daily",
        "daysPerWeek": 7,
        "duration": 2,
    }))
    .unwrap();

    let routine = input.clone().into_routine("r".into(), &data.workouts).unwrap();
    assert_eq!(routine.workout_count(), 2);
    assert_eq!(routine.workouts[0], *data.workout("3").unwrap());

    let mut broken = input;
    broken.workout_ids.push("99".into());
    match broken.into_routine("r".into(), &data.workouts) {
        Err(CoreError::UnknownReference { kind, id }) => {
            assert_eq!(kind, "workout");
            assert_eq!(id, "99");
        }
        other => panic!("expected unknown workout, got {other:?}"),
    }
}

#[test]
fn client_validation_rules() {
    let data = fixtures::dataset();
    let mut client = data.client("1").unwrap().clone();
    assert!(validate::client(&client).is_ok());

    client.weight = -1.0;
    assert!(matches!(
        validate::client(&client),
        Err(CoreError::InvalidField { field: "weight", .. })
    ));

    let mut twin = data.client("2").unwrap().clone();
    twin.email = "MARIA.GONZALEZ@email.com".into();
    assert!(matches!(
        validate::unique_email(&twin, &data.clients),
        Err(CoreError::DuplicateEmail(_))
    ));

    // A client never collides with itself.
    let maria = data.client("1").unwrap();
    assert!(validate::unique_email(maria, &data.clients).is_ok());
}

#[test]
fn ratings_outside_one_to_five_are_rejected() {
    assert!(validate::rating(None).is_ok());
    assert!(validate::rating(Some(1)).is_ok());
    assert!(validate::rating(Some(5)).is_ok());
    assert!(validate::rating(Some(0)).is_err());
    assert!(validate::rating(Some(6)).is_err());
}

#[test]
fn assigned_routines_stay_deduplicated() {
    let mut client = fixtures::dataset().client("3").unwrap().clone();
    assert!(!client.set_routine_assigned("1", true));
    assert!(client.set_routine_assigned("2", true));
    assert_eq!(client.assigned_routine_ids(), ["1", "2"]);
    assert!(client.set_routine_assigned("1", false));
    assert_eq!(client.assigned_routine_ids(), ["2"]);
}

#[test]
fn routine_refresh_and_removal_of_embedded_workouts() {
    let data = fixtures::dataset();
    let mut routine = data.routine("3").unwrap().clone();
    let mut edited = data.workout("1").unwrap().clone();
    edited.estimated_duration = 50;

    assert!(routine.refresh_workout(&edited));
    assert_eq!(routine.workout("1").unwrap().estimated_duration, 50);
    assert!(!routine.refresh_workout(&edited));

    assert!(routine.remove_workout("2"));
    assert_eq!(routine.workout_count(), 2);
}

#[test]
fn upload_keys_keep_only_the_extension() {
    let key = s3_keys::upload("profile-images", "Me at the Gym.JPG").unwrap();
    assert!(key.starts_with("profile-images/"));
    assert!(key.ends_with(".jpg"));
    assert!(!key.contains("Gym"));

    let bare = s3_keys::upload("", "README").unwrap();
    assert!(bare.starts_with("uploads/"));
    assert!(!bare.contains('.'));

    let trailing = s3_keys::upload("/progress-photos/", "front.png").unwrap();
    assert!(trailing.starts_with("progress-photos/"));
}

#[test]
fn upload_keys_stay_out_of_record_prefixes() {
    for prefix in s3_keys::RECORD_PREFIXES {
        let folder = prefix.trim_end_matches('/');
        assert!(matches!(
            s3_keys::upload(folder, "pic.json"),
            Err(CoreError::InvalidField { field: "folder", .. })
        ));
    }
    assert!(s3_keys::upload("uploads/../clients", "pic.json").is_err());
    assert!(s3_keys::upload("clients/nested", "pic.png").is_err());
}

#[test]
fn set_ids_are_owned_by_one_workout() {
    let workouts = &fixtures::dataset().workouts;
    let mut second = workouts[1].clone();
    assert!(second.check_set_ids(workouts).is_ok());

    second.exercises[0].id = "1".to_string();
    assert!(matches!(
        second.check_set_ids(workouts),
        Err(CoreError::InvalidField { field: "exercises", .. })
    ));

    let mut copy = workouts[0].clone();
    copy.renew_set_ids();
    assert!(copy.exercises.iter().all(|s| workouts[0].set(&s.id).is_none()));
    copy.exercises[1].id = copy.exercises[0].id.clone();
    assert!(copy.check_set_ids(workouts).is_err());
}
