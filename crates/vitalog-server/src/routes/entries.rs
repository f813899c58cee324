//! Daily entry route handlers.

use crate::auth::CurrentUser;
use crate::routes::summary_or_empty;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;
use vitalog_types::{DailyEntry, DailySummary, HealthCategory};

/// GET /api/v1/today - today's entries grouped by category.
pub async fn today(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
) -> Json<DailySummary> {
    Json(summary_or_empty(&state, user_id, super::today()))
}

#[derive(Deserialize)]
pub struct AddEntryRequest {
    pub category: HealthCategory,
    #[serde(default)]
    pub details: Map<String, Value>,
}

#[derive(Serialize)]
pub struct AddEntryResponse {
    pub success: bool,
    pub entry: DailyEntry,
}

/// POST /api/v1/entries - log a health entry for today.
pub async fn add(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
    Json(req): Json<AddEntryRequest>,
) -> Result<Json<AddEntryResponse>, (StatusCode, String)> {
    let entry = state
        .store
        .add_entry(user_id, super::today(), req.category, req.details)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    debug!(target: "vitalog::api", "Logged {} entry for {}", entry.category.as_str(), user_id);

    Ok(Json(AddEntryResponse {
        success: true,
        entry,
    }))
}

#[derive(Serialize)]
pub struct DeleteEntryResponse {
    pub success: bool,
}

/// DELETE /api/v1/entries/{id} - remove an entry the user owns.
///
/// Deleting someone else's entry (or a missing one) reports
/// `success: false` rather than an error.
pub async fn remove(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteEntryResponse>, (StatusCode, String)> {
    let removed = state
        .store
        .delete_entry(id, user_id)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(DeleteEntryResponse { success: removed }))
}
