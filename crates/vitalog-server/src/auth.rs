//! Cookie-based user identification.
//!
//! A `user_id` cookie holds the profile id. This is demo-grade
//! identification, not session security: the cookie is the id itself and
//! nothing is signed.

use crate::state::AppState;
use axum::{
    extract::{FromRequestParts, State},
    http::{header, request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

const USER_COOKIE: &str = "user_id";

/// Extractor for the logged-in user. Rejects with 401 when the cookie is
/// missing or not a valid id.
pub struct CurrentUser(pub Uuid);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(header::COOKIE)
            .and_then(|value| value.to_str().ok())
            .and_then(cookie_user_id)
            .map(CurrentUser)
            .ok_or((StatusCode::UNAUTHORIZED, "Not logged in"))
    }
}

/// Pull the user id out of a `Cookie` header value.
fn cookie_user_id(header: &str) -> Option<Uuid> {
    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        if name == USER_COOKIE {
            value.parse().ok()
        } else {
            None
        }
    })
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub name: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub user_id: Uuid,
    pub full_name: String,
}

/// POST /api/auth/login - find or create the profile and set the cookie.
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Response, (StatusCode, String)> {
    let email = req.email.trim();
    if email.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "email is required".to_string()));
    }

    let profile = match state
        .store
        .get_user_by_email(email)
        .map_err(internal_error)?
    {
        Some(existing) => existing,
        None => {
            let created = state
                .store
                .create_user(email, req.name.trim())
                .map_err(internal_error)?;
            info!(target: "vitalog::auth", "Created profile for {}", created.email);
            created
        }
    };

    let cookie = format!("{}={}; Path=/; HttpOnly", USER_COOKIE, profile.id);
    let body = Json(LoginResponse {
        user_id: profile.id,
        full_name: profile.full_name,
    });
    Ok(([(header::SET_COOKIE, cookie)], body).into_response())
}

/// POST /api/auth/logout - expire the cookie.
pub async fn logout() -> Response {
    let cookie = format!("{}=; Path=/; Max-Age=0", USER_COOKIE);
    ([(header::SET_COOKIE, cookie)], StatusCode::NO_CONTENT).into_response()
}

fn internal_error(e: vitalog_core::VitalogError) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookie_parsing_finds_user_id_among_other_cookies() {
        let id = Uuid::new_v4();
        let header = format!("theme=dark; user_id={}; lang=en", id);
        assert_eq!(cookie_user_id(&header), Some(id));
    }

    #[test]
    fn cookie_parsing_rejects_garbage() {
        assert_eq!(cookie_user_id("user_id=not-a-uuid"), None);
        assert_eq!(cookie_user_id("theme=dark"), None);
        assert_eq!(cookie_user_id(""), None);
    }
}
