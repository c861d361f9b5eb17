//! Axum route handlers for the Studio API.

use axum::{
    extract::{Multipart, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::ingest;
use crate::render::render_resume_pdf;
use crate::state::AppState;
use crate::studio::pipeline::run_pipeline;

/// Fixed download filename for the exported document.
pub const EXPORT_FILENAME: &str = "Optimized_Resume.pdf";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct OptimizeResponse {
    pub request_id: Uuid,
    /// Text extracted from the upload, echoed back for display.
    pub resume_text: String,
    pub optimized_text: String,
    pub analysis: String,
}

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub text: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/optimize
///
/// Multipart form: `resume` (PDF file, required) + `job_role` (text, may be
/// empty). Runs ingestion and both generation calls to completion, then
/// returns everything the client needs to display. Nothing is persisted, so
/// any failure leaves the service ready for an immediate retry.
pub async fn handle_optimize(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<OptimizeResponse>, AppError> {
    let request_id = Uuid::new_v4();

    let mut job_role = String::new();
    let mut resume_bytes: Option<Bytes> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("malformed multipart request: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume" => {
                resume_bytes = Some(field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("failed to read resume upload: {e}"))
                })?);
            }
            "job_role" => {
                job_role = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("failed to read job role: {e}")))?;
            }
            _ => {}
        }
    }

    let resume_bytes =
        resume_bytes.ok_or_else(|| AppError::Validation("no resume file provided".to_string()))?;

    info!(
        %request_id,
        upload_bytes = resume_bytes.len(),
        job_role = %job_role,
        "resume upload received"
    );

    // Ingestion fails before any generation call is made.
    let resume_text = ingest::extract_text(&resume_bytes)?;

    let outcome = run_pipeline(state.llm.as_ref(), &job_role, &resume_text).await?;

    info!(%request_id, "optimization pipeline complete");

    Ok(Json(OptimizeResponse {
        request_id,
        resume_text,
        optimized_text: outcome.optimized_text,
        analysis: outcome.analysis,
    }))
}

/// POST /api/v1/resumes/export
///
/// Turns a block of resume text into the downloadable PDF. Rendering is
/// CPU-bound, so it runs under `spawn_blocking` to keep the executor free.
pub async fn handle_export(
    State(state): State<AppState>,
    Json(request): Json<ExportRequest>,
) -> Result<Response, AppError> {
    let page_config = state.page_config.clone();
    let text = request.text;

    let pdf = tokio::task::spawn_blocking(move || render_resume_pdf(&text, &page_config))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("render task failed: {e}")))?
        .map_err(|e| AppError::Render(e.to_string()))?;

    info!(pdf_bytes = pdf.len(), "resume export rendered");

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILENAME}\""),
            ),
        ],
        pdf,
    )
        .into_response())
}
