//! S3 key/path conventions.
//!
//! Pure string functions, no AWS SDK dependency. These define the canonical
//! layout of objects in the gymdesk bucket.

use uuid::Uuid;

use crate::error::CoreError;

pub const CLIENTS_PREFIX: &str = "clients/";
pub const EXERCISES_PREFIX: &str = "exercises/";
pub const WORKOUTS_PREFIX: &str = "workouts/";
pub const ROUTINES_PREFIX: &str = "routines/";
pub const CLIENT_ROUTINES_PREFIX: &str = "client-routines/";
pub const PROGRESS_METRICS_PREFIX: &str = "progress-metrics/";
pub const GOALS_PREFIX: &str = "goals/";

/// Every prefix that holds a record document, in seeding order.
pub const RECORD_PREFIXES: [&str; 7] = [
    EXERCISES_PREFIX,
    WORKOUTS_PREFIX,
    ROUTINES_PREFIX,
    CLIENTS_PREFIX,
    PROGRESS_METRICS_PREFIX,
    GOALS_PREFIX,
    CLIENT_ROUTINES_PREFIX,
];

pub fn client(id: &str) -> String {
    format!("{CLIENTS_PREFIX}{id}.json")
}

pub fn exercise(id: &str) -> String {
    format!("{EXERCISES_PREFIX}{id}.json")
}

pub fn workout(id: &str) -> String {
    format!("{WORKOUTS_PREFIX}{id}.json")
}

pub fn routine(id: &str) -> String {
    format!("{ROUTINES_PREFIX}{id}.json")
}

pub fn client_routine(id: &str) -> String {
    format!("{CLIENT_ROUTINES_PREFIX}{id}.json")
}

pub fn progress_metrics(id: &str) -> String {
    format!("{PROGRESS_METRICS_PREFIX}{id}.json")
}

pub fn goal(id: &str) -> String {
    format!("{GOALS_PREFIX}{id}.json")
}

/// Folders a client may upload into. Record prefixes are never writable
/// through a presigned URL.
pub const UPLOAD_FOLDERS: [&str; 3] = ["uploads", "profile-images", "progress-photos"];

/// Key for an uploaded file (profile images, progress photos).
///
/// The original file name only contributes its extension; the stem is
/// replaced by a fresh UUID so uploads never collide. `folder` must be one of
/// [`UPLOAD_FOLDERS`]; blank means `uploads`.
pub fn upload(folder: &str, original_filename: &str) -> Result<String, CoreError> {
    let folder = folder.trim_matches('/');
    let folder = if folder.is_empty() { "uploads" } else { folder };
    if !UPLOAD_FOLDERS.contains(&folder) {
        return Err(CoreError::invalid(
            "folder",
            format!("must be one of {}", UPLOAD_FOLDERS.join(", ")),
        ));
    }
    let ext = original_filename
        .rsplit_once('.')
        .filter(|(stem, ext)| !stem.is_empty() && !ext.is_empty() && !ext.contains('/'))
        .map(|(_, ext)| format!(".{}", ext.to_ascii_lowercase()))
        .unwrap_or_default();
    Ok(format!("{folder}/{}{ext}", Uuid::new_v4()))
}
