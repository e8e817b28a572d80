use std::time::Duration;

use axum::extract::State;
use serde::{Deserialize, Serialize};

use gymdesk_core::s3_keys;

use crate::error::ApiError;
use crate::extract::Json;
use crate::state::AppState;

const UPLOAD_EXPIRY: Duration = Duration::from_secs(3600);

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    pub file_name: String,
    pub content_type: Option<String>,
    /// One of `uploads`, `profile-images` or `progress-photos`; `uploads`
    /// when omitted.
    #[serde(default)]
    pub folder: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadTicket {
    pub key: String,
    pub upload_url: String,
    /// Where the object is readable once the upload completes. Store this in
    /// `profileImage` or `photos`.
    pub public_url: String,
    pub expires_in: u64,
}

/// Presign a direct upload for a profile image or progress photo.
pub async fn create_upload(
    State(state): State<AppState>,
    Json(req): Json<UploadRequest>,
) -> Result<Json<UploadTicket>, ApiError> {
    if req.file_name.trim().is_empty() {
        return Err(ApiError::BadRequest("fileName is required".to_string()));
    }

    let key = s3_keys::upload(req.folder.as_deref().unwrap_or_default(), &req.file_name)?;
    let upload_url = state
        .store()
        .presign_put(&key, req.content_type.as_deref(), UPLOAD_EXPIRY)
        .await?;
    let public_url = state.store().object_url(&key);
    tracing::info!(key = %key, "presigned upload");

    Ok(Json(UploadTicket {
        key,
        upload_url,
        public_url,
        expires_in: UPLOAD_EXPIRY.as_secs(),
    }))
}
