pub mod assignment;
pub mod client;
pub mod exercise;
pub mod goal;
pub mod progress;
pub mod routine;
pub mod weekday;
pub mod workout;

use uuid::Uuid;

/// Generate an id for a record created at runtime.
///
/// Fixture records use short numeric ids; anything created through the API
/// gets a UUID so the two never collide.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Fill in `id` when the caller left it blank.
pub fn ensure_id(id: &mut String) {
    if id.trim().is_empty() {
        *id = new_id();
    }
}
