//! HTTP route handlers.

pub mod advice;
pub mod clinics;
pub mod entries;

use crate::state::AppState;
use axum::Json;
use chrono::NaiveDate;
use serde::Serialize;
use tracing::warn;
use uuid::Uuid;
use vitalog_types::DailySummary;

/// Server-local calendar date, matching how users think about "today".
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Fetch a day's summary, degrading to an empty one when the store read
/// fails. The score and advice functions always get a usable input.
pub fn summary_or_empty(state: &AppState, user_id: Uuid, date: NaiveDate) -> DailySummary {
    state.store.daily_summary(user_id, date).unwrap_or_else(|e| {
        warn!(target: "vitalog::api", "Summary read failed for {}: {}", user_id, e);
        DailySummary::empty(user_id, date)
    })
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
