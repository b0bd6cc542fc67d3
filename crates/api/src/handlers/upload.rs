//! Handler for `POST /admin/v1/upload`.
//!
//! Each multipart field name selects the destination folder (see
//! [`courtside_core::upload::UPLOAD_FOLDERS`]). Every field is checked
//! before anything is written, so a rejected request leaves no files behind.

use std::collections::HashSet;

use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use courtside_core::upload::{folder_for_field, is_allowed_image, stored_file_name};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::response::ApiResponse;
use crate::state::AppState;

/// One stored file.
#[derive(Debug, Serialize)]
pub struct UploadedFile {
    /// Multipart field the file arrived in.
    pub field: String,
    /// Name on disk.
    pub file_name: String,
    /// Public URL path, served from `/uploads`.
    pub path: String,
    /// Size in bytes.
    pub size: usize,
}

/// A validated file waiting to be written.
struct PendingFile {
    field: String,
    folder: &'static str,
    original_name: String,
    data: axum::body::Bytes,
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text())
    } else {
        AppError::BadRequest(err.body_text())
    }
}

/// POST /admin/v1/upload
pub async fn upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<(StatusCode, Json<ApiResponse<Vec<UploadedFile>>>)> {
    let mut multipart = multipart.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let mut pending = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or("").to_string();
        let folder = folder_for_field(&name)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown upload field '{name}'")))?;

        let original_name = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| AppError::BadRequest(format!("Field '{name}' does not contain a file")))?;

        let content_type = field.content_type().unwrap_or("").to_string();
        if !is_allowed_image(&content_type) {
            return Err(AppError::BadRequest(format!(
                "Unsupported file type '{content_type}' for '{name}'. Only images are accepted"
            )));
        }

        let data = field.bytes().await.map_err(multipart_error)?;
        if data.is_empty() {
            return Err(AppError::BadRequest(format!("Field '{name}' is empty")));
        }

        pending.push(PendingFile {
            field: name,
            folder,
            original_name,
            data,
        });
    }

    if pending.is_empty() {
        return Err(AppError::BadRequest("No file uploaded".into()));
    }

    let now_millis = chrono::Utc::now().timestamp_millis();
    let mut used_names = HashSet::new();
    let mut stored = Vec::with_capacity(pending.len());
    for file in pending {
        let dir = state.config.upload_dir.join(file.folder);
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to create upload dir: {e}")))?;

        // Same-named files in one request get successive stamps.
        let mut stamp = now_millis;
        let mut file_name = stored_file_name(&file.original_name, stamp);
        while !used_names.insert((file.folder, file_name.clone())) {
            stamp += 1;
            file_name = stored_file_name(&file.original_name, stamp);
        }
        tokio::fs::write(dir.join(&file_name), &file.data)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to store upload: {e}")))?;

        tracing::info!(field = %file.field, file_name = %file_name, size = file.data.len(), "File uploaded");
        stored.push(UploadedFile {
            path: format!("/uploads/{}/{file_name}", file.folder),
            field: file.field,
            file_name,
            size: file.data.len(),
        });
    }

    Ok(ApiResponse::created(stored, "File(s) uploaded"))
}
