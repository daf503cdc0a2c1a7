//! Axum route handlers for the myth-check API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::myths::models::{Citation, MythRecord, NutritionRecord};
use crate::myths::store::MythStore;
use crate::render::format_for_display;
use crate::reply::generator::{generate_reply, ReplyKind};
use crate::reply::style::ReplyFormat;
use crate::state::AppState;

/// How many citations the check response surfaces.
const MAX_CITATIONS: usize = 2;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    pub query: String,
    /// Tone name; anything outside {comic, snarky, warm} gets the default style.
    #[serde(default = "default_tone")]
    pub tone: String,
    #[serde(default)]
    pub format: ReplyFormat,
    pub animal_nutrition: Option<NutritionRecord>,
    pub plant_nutrition: Option<NutritionRecord>,
}

fn default_tone() -> String {
    "comic".to_string()
}

#[derive(Debug, Serialize)]
pub struct CheckResponse {
    /// Raw reply text (remote or degraded).
    pub reply: String,
    /// Display-ready HTML: markdown converted, closer stripped, footer added.
    pub reply_html: String,
    pub source: ReplyKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_myth: Option<MythRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advice: Option<String>,
    pub citations: Vec<Citation>,
    /// The citations as a ready-to-render markdown line, `[Title](URL) | ...`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources_markdown: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MythListResponse {
    pub myths: Vec<MythRecord>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/myths/check
///
/// Full reply pipeline: store lookup → prompt → remote generate (or degraded
/// fallback) → display formatting. Always answers; degraded outcomes are
/// reported in `source`/`reason`, never as HTTP errors.
pub async fn handle_check(
    State(state): State<AppState>,
    Json(request): Json<CheckRequest>,
) -> Result<Json<CheckResponse>, AppError> {
    if request.query.trim().is_empty() {
        return Err(AppError::Validation("query cannot be empty".to_string()));
    }

    // Re-read per request so edits to the store file show up without restart.
    let store = MythStore::load(&state.config.myths_path);
    let myth = store.find(&request.query).cloned();

    let reply = generate_reply(
        state.llm.as_deref(),
        &request.query,
        myth.as_ref(),
        &request.tone,
        request.format,
        request.animal_nutrition.as_ref(),
        request.plant_nutrition.as_ref(),
    )
    .await;

    let reply_html = format_for_display(&reply.text);
    let advice = myth.as_ref().and_then(|m| m.advice.clone());
    let citations: Vec<Citation> = myth
        .as_ref()
        .and_then(|m| m.citations.clone())
        .unwrap_or_default()
        .into_iter()
        .take(MAX_CITATIONS)
        .collect();
    let sources_markdown = (!citations.is_empty()).then(|| {
        citations
            .iter()
            .map(Citation::as_markdown)
            .collect::<Vec<_>>()
            .join(" | ")
    });

    Ok(Json(CheckResponse {
        reply: reply.text,
        reply_html,
        source: reply.kind,
        reason: reply.reason,
        matched_myth: myth,
        advice,
        citations,
        sources_markdown,
    }))
}

/// GET /api/v1/myths
///
/// Returns every loaded record so a front end can show what the database
/// covers. An unreadable store file returns an empty list, not an error.
pub async fn handle_list_myths(State(state): State<AppState>) -> Json<MythListResponse> {
    let store = MythStore::load(&state.config.myths_path);
    Json(MythListResponse {
        myths: store.records().to_vec(),
    })
}
