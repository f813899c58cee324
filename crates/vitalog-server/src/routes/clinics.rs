//! Clinic listing route handlers.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use std::sync::Arc;
use vitalog_types::Clinic;

#[derive(Serialize)]
pub struct ClinicsResponse {
    pub clinics: Vec<Clinic>,
}

/// GET /api/v1/clinics - the clinic reference list.
pub async fn list(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ClinicsResponse>, (StatusCode, String)> {
    let clinics = state
        .store
        .list_clinics()
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(ClinicsResponse { clinics }))
}
