//! Vitalog server library - HTTP backend for the health tracker.
//!
//! This library provides the HTTP routes, cookie-based user identification,
//! and application state for the Vitalog backend. It's separated from
//! main.rs to enable integration testing.

pub mod auth;
pub mod config;
pub mod logging;
pub mod routes;
pub mod state;

use axum::{routing::{delete, get, post}, Router};
use state::AppState;
use std::sync::Arc;

/// Build the API router. Shared between main.rs and the integration tests.
pub fn api_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        // Login / logout
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        // Daily data
        .route("/v1/today", get(routes::entries::today))
        .route("/v1/entries", post(routes::entries::add))
        .route("/v1/entries/{id}", delete(routes::entries::remove))
        // Score and advice
        .route("/v1/alert", get(routes::advice::alert))
        .route("/ask", post(routes::advice::ask))
        // Reference data
        .route("/v1/clinics", get(routes::clinics::list))
        .route("/health", get(routes::health));

    Router::new().nest("/api", api_routes).with_state(state)
}
