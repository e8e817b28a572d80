use gymdesk_audit::events::{AuditAction, AuditEvent};
use serde_json::json;

#[test]
fn constructors_set_the_action() {
    assert_eq!(AuditEvent::created("goal", "1").action, AuditAction::Create);
    assert_eq!(AuditEvent::updated("goal", "1").action, AuditAction::Update);
    assert_eq!(AuditEvent::deleted("goal", "1").action, AuditAction::Delete);
}

#[test]
fn events_serialize_without_empty_details() {
    let event = AuditEvent::deleted("client", "7");
    assert_eq!(
        serde_json::to_value(&event).unwrap(),
        json!({ "action": "delete", "resource_type": "client", "resource_id": "7" })
    );

    let event = AuditEvent::new(AuditAction::Seed, "dataset", "fixtures")
        .with_details(json!({ "clients": 10 }));
    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(value["action"], "seed");
    assert_eq!(value["details"]["clients"], 10);

    // No subscriber installed; emitting is a no-op but must not panic.
    event.emit();
}
