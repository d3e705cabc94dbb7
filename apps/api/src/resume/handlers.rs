//! Axum route handlers for the resume API.

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Deserialize;
use tempfile::NamedTempFile;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::resume::models::StructuredResume;
use crate::resume::service::ResumeSource;
use crate::snapshots;
use crate::state::AppState;

/// Multipart field carrying the document.
pub const UPLOAD_FIELD: &str = "resume";

#[derive(Debug, Deserialize)]
pub struct ProcessResumeRequest {
    #[serde(default)]
    pub resume_text: String,
}

/// An uploaded document, held until the request completes.
struct Upload {
    file_name: String,
    data: Vec<u8>,
}

/// POST /api/resume/upload
///
/// Multipart upload; the document is staged in a temp file for the extractor
/// and removed when the request completes.
pub async fn handle_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<StructuredResume>, AppError> {
    let upload = read_upload(multipart).await?;
    let upload_id = Uuid::new_v4();
    info!(
        "Upload {upload_id}: {} ({} bytes)",
        upload.file_name,
        upload.data.len()
    );

    let staged = tokio::task::spawn_blocking(move || stage_upload(&upload))
        .await
        .context("Upload staging task failed")??;

    let resume = state
        .resumes
        .structure(ResumeSource::Path(staged.path().to_path_buf()))
        .await?;
    info!("Upload {upload_id}: structured resume for {}", resume.name);

    state
        .snapshots
        .write(snapshots::STRUCTURED_RESUME, &resume)
        .await;
    Ok(Json(resume))
}

/// POST /api/process_resume
pub async fn handle_process_resume(
    State(state): State<AppState>,
    Json(request): Json<ProcessResumeRequest>,
) -> Result<Json<StructuredResume>, AppError> {
    let resume = state
        .resumes
        .structure(ResumeSource::Text(request.resume_text))
        .await?;

    state
        .snapshots
        .write(snapshots::STRUCTURED_RESUME, &resume)
        .await;
    Ok(Json(resume))
}

async fn read_upload(mut multipart: Multipart) -> Result<Upload, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Failed to read form field: {e}")))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        if file_name.trim().is_empty() {
            return Err(AppError::Validation("No file selected".to_string()));
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read file data: {e}")))?
            .to_vec();

        return Ok(Upload { file_name, data });
    }

    Err(AppError::Validation(format!(
        "Missing multipart field '{UPLOAD_FIELD}'"
    )))
}

/// Writes the upload to a temp file that keeps the original extension.
fn stage_upload(upload: &Upload) -> anyhow::Result<NamedTempFile> {
    let suffix = Path::new(&upload.file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default();

    let mut file = tempfile::Builder::new()
        .prefix("resume-")
        .suffix(&suffix)
        .tempfile()
        .context("Failed to create temp file for upload")?;
    file.write_all(&upload.data)
        .context("Failed to write upload to temp file")?;
    file.flush()?;
    Ok(file)
}
