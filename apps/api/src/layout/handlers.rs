//! Axum route handlers for the Layout API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::layout::accumulator::Page1;
use crate::layout::geometry::PAGE_WIDTH;
use crate::layout::orchestrator::SkippedSection;
use crate::layout::pages::{scale_page1, Page, PageList};
use crate::layout::{pack_resume, LayoutParams};
use crate::models::resume::{ColorTheme, ResumeDocument};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct ScaleQuery {
    /// Multiplier applied to every coordinate. Defaults to 1 (layout units).
    pub scale: Option<f64>,
    /// When true, every `top` is measured from its own page instead of the document top.
    #[serde(default)]
    pub relative: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutResponse {
    pub page_count: usize,
    pub page_width: f64,
    pub page_height: f64,
    pub pages: Vec<Page>,
    pub page1: Page1,
    pub color_theme: ColorTheme,
    pub skipped: Vec<SkippedSection>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/layout
///
/// Lays out the resume document in the request body.
pub async fn handle_layout(
    State(state): State<AppState>,
    Query(query): Query<ScaleQuery>,
    Json(document): Json<ResumeDocument>,
) -> Result<Json<LayoutResponse>, AppError> {
    let scale = validate_scale(query.scale)?;
    let response = run_layout(document, state.config.layout, scale, query.relative).await?;
    Ok(Json(response))
}

/// GET /api/v1/resumes/:id/layout
///
/// Loads a stored resume document and lays it out.
pub async fn handle_stored_layout(
    State(state): State<AppState>,
    Path(resume_id): Path<Uuid>,
    Query(query): Query<ScaleQuery>,
) -> Result<Json<LayoutResponse>, AppError> {
    let scale = validate_scale(query.scale)?;
    let document = state
        .store
        .fetch_document(resume_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {resume_id} not found")))?;

    info!(%resume_id, "Laying out stored resume");
    let response = run_layout(document, state.config.layout, scale, query.relative).await?;
    Ok(Json(response))
}

// ────────────────────────────────────────────────────────────────────────────
// Internal helpers
// ────────────────────────────────────────────────────────────────────────────

fn validate_scale(scale: Option<f64>) -> Result<f64, AppError> {
    match scale {
        None => Ok(1.0),
        Some(s) if s.is_finite() && s > 0.0 => Ok(s),
        Some(s) => Err(AppError::Validation(format!(
            "scale must be a positive number, got {s}"
        ))),
    }
}

/// Packing is CPU-bound, so it runs off the async scheduler.
async fn run_layout(
    document: ResumeDocument,
    params: LayoutParams,
    scale: f64,
    relative: bool,
) -> Result<LayoutResponse, AppError> {
    tokio::task::spawn_blocking(move || build_response(&document, &params, scale, relative))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Layout task failed: {e}")))?
}

pub(crate) fn build_response(
    document: &ResumeDocument,
    params: &LayoutParams,
    scale: f64,
    relative: bool,
) -> Result<LayoutResponse, AppError> {
    let outcome = pack_resume(document, params)?;
    let mut pages = PageList::from_accumulator(&outcome.accumulator);
    if relative {
        pages = pages.page_relative(params.page_height);
    }
    let pages = pages.scaled(scale);
    let page1 = scale_page1(outcome.accumulator.page1(), scale);

    Ok(LayoutResponse {
        page_count: pages.page_count(),
        page_width: PAGE_WIDTH * scale,
        page_height: params.page_height * scale,
        pages: pages.pages,
        page1,
        color_theme: document.color_theme.clone(),
        skipped: outcome.skipped,
    })
}
