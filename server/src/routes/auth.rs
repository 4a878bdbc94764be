//! Auth routes — access-code login, session probe, logout.
//!
//! TRADE-OFFS
//! ==========
//! Identity here is deliberately thin: one shared access code gates session
//! creation, and each session mints a fresh user id. That is enough to key
//! rate limits and keep the transform endpoint off the open internet
//! without pulling in an identity provider.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use time::Duration;
use uuid::Uuid;

use crate::services::session;
use crate::state::AppState;

const COOKIE_NAME: &str = "fhirbench_session";
const SESSION_TTL_DAYS: i64 = 7;

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

pub(crate) fn cookie_secure() -> bool {
    if let Some(value) = env_bool("COOKIE_SECURE") {
        return value;
    }

    std::env::var("PUBLIC_BASE_URL")
        .map(|url| url.starts_with("https://"))
        .unwrap_or(false)
}

/// Validate a submitted access code against the configured one.
fn check_access_code(configured: Option<&str>, submitted: &str) -> Result<(), StatusCode> {
    let Some(expected) = configured else {
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    };
    if submitted.trim() != expected {
        return Err(StatusCode::UNAUTHORIZED);
    }
    Ok(())
}

/// Trimmed display name, with a fallback for blank submissions.
fn normalize_display_name(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        "Anonymous".to_owned()
    } else {
        trimmed.to_owned()
    }
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: session::SessionUser,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(StatusCode::UNAUTHORIZED);
        }

        let app_state = AppState::from_ref(state);
        let user = session::validate_session(&app_state.sessions, token)
            .await
            .ok_or(StatusCode::UNAUTHORIZED)?;

        Ok(Self { user })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Deserialize)]
pub struct LoginRequest {
    name: String,
    code: String,
}

/// `POST /api/auth/login` — validate the access code, mint a session, set
/// the cookie, and return the session user.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<LoginRequest>,
) -> Response {
    if let Err(status) = check_access_code(state.access_code.as_deref(), &payload.code) {
        let body = match status {
            StatusCode::SERVICE_UNAVAILABLE => "access-code auth not configured",
            _ => "invalid access code",
        };
        return (status, body).into_response();
    }

    let user = session::SessionUser {
        id: Uuid::new_v4(),
        name: normalize_display_name(&payload.name),
        auth_method: "access-code".to_owned(),
    };
    let token = session::create_session(&state.sessions, user.clone()).await;

    let cookie = Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(cookie_secure())
        .max_age(Duration::days(SESSION_TTL_DAYS));

    tracing::info!(user = %user.id, name = %user.name, "session created");
    (jar.add(cookie), Json(user)).into_response()
}

/// `GET /api/auth/me` — current session user, or 401.
pub async fn me(auth: AuthUser) -> Json<session::SessionUser> {
    Json(auth.user)
}

/// `POST /api/auth/logout` — drop the session and clear the cookie.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> Response {
    if let Some(cookie) = jar.get(COOKIE_NAME) {
        session::remove_session(&state.sessions, cookie.value()).await;
    }
    let removal = Cookie::build((COOKIE_NAME, "")).path("/");
    (jar.remove(removal), StatusCode::NO_CONTENT).into_response()
}
