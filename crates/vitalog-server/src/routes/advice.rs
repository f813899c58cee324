//! Score and advice route handlers.

use crate::auth::CurrentUser;
use crate::routes::{summary_or_empty, today};
use crate::state::AppState;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;
use vitalog_core::{compute_score, generate_advice, AdviceMode};
use vitalog_types::ScoreBreakdown;

#[derive(Serialize)]
pub struct AlertResponse {
    #[serde(flatten)]
    pub breakdown: ScoreBreakdown,
    /// Summary-mode advice report for today.
    pub feedback: String,
}

/// GET /api/v1/alert - today's score breakdown plus the daily report.
pub async fn alert(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
) -> Json<AlertResponse> {
    let summary = summary_or_empty(&state, user_id, today());
    let breakdown = compute_score(&summary);
    let feedback = generate_advice(None, &summary, breakdown.score, AdviceMode::Summary);

    debug!(target: "vitalog::api", "Daily score for {}: {}", user_id, breakdown.score);

    Json(AlertResponse {
        breakdown,
        feedback,
    })
}

#[derive(Deserialize)]
pub struct AskRequest {
    pub question: String,
}

#[derive(Serialize)]
pub struct AskResponse {
    pub generated_feedback: String,
    pub question: String,
}

/// POST /api/ask - chat-style advice about today's data.
pub async fn ask(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
    Json(req): Json<AskRequest>,
) -> Json<AskResponse> {
    let summary = summary_or_empty(&state, user_id, today());
    let score = compute_score(&summary).score;
    let answer = generate_advice(Some(&req.question), &summary, score, AdviceMode::Chat);

    Json(AskResponse {
        generated_feedback: answer,
        question: req.question,
    })
}
