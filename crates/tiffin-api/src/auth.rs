//! Session-cookie authentication: login/logout/check handlers and the
//! [`Staff`] extractor that gates the admin endpoints.
//!
//! Passwords are verified against the argon2 PHC string stored on the user
//! record. A successful login issues an opaque session token in an
//! `HttpOnly` cookie; the extractor resolves that cookie on every gated
//! request.

use argon2::{Argon2, PasswordHash, PasswordVerifier};
use axum::{
  Json,
  extract::{FromRequestParts, State},
  http::{HeaderMap, header, request::Parts},
  response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tiffin_core::store::RestaurantStore;

use crate::{
  AppState,
  error::ApiError,
  session::{SESSION_COOKIE, SESSION_TTL_SECS, SessionUser},
};

// ─── Cookie plumbing ─────────────────────────────────────────────────────────

/// Pull the session token out of the `Cookie` header, if present and
/// well-formed.
fn session_token(headers: &HeaderMap) -> Option<Uuid> {
  let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
  cookies.split(';').find_map(|pair| {
    let (name, value) = pair.trim().split_once('=')?;
    if name == SESSION_COOKIE {
      value.parse().ok()
    } else {
      None
    }
  })
}

fn set_cookie(token: Uuid) -> String {
  format!(
    "{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={SESSION_TTL_SECS}"
  )
}

fn clear_cookie() -> String {
  format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

// ─── Extractor ───────────────────────────────────────────────────────────────

/// Present in a handler's signature means the request carried a live staff
/// session. This is the authorization gate for every mutating endpoint
/// except public reservation submission.
pub struct Staff(pub SessionUser);

impl<S> FromRequestParts<AppState<S>> for Staff
where
  S: RestaurantStore + Clone + Send + Sync + 'static,
{
  type Rejection = ApiError;

  async fn from_request_parts(
    parts: &mut Parts,
    state: &AppState<S>,
  ) -> Result<Self, Self::Rejection> {
    let token = session_token(&parts.headers).ok_or(ApiError::Unauthorized)?;
    let user = state
      .sessions
      .resolve(token)
      .await
      .ok_or(ApiError::Unauthorized)?;
    Ok(Staff(user))
  }
}

// ─── Handlers ────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct LoginBody {
  pub username: String,
  pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
  pub message: String,
  pub user:    SessionUser,
}

/// `POST /login` — body: `{"username": "...", "password": "..."}`.
///
/// On success, sets the session cookie and returns the session user.
/// Unknown username and wrong password produce the same 401.
pub async fn login<S>(
  State(state): State<AppState<S>>,
  Json(body): Json<LoginBody>,
) -> Result<Response, ApiError>
where
  S: RestaurantStore + Clone + Send + Sync + 'static,
{
  if body.username.is_empty() || body.password.is_empty() {
    return Err(ApiError::BadRequest(
      "Username and password are required".into(),
    ));
  }

  let user = state
    .store
    .user_by_username(&body.username)
    .await
    .map_err(ApiError::store)?
    .ok_or(ApiError::InvalidCredentials)?;

  let parsed_hash =
    PasswordHash::new(&user.password).map_err(|_| ApiError::InvalidCredentials)?;
  Argon2::default()
    .verify_password(body.password.as_bytes(), &parsed_hash)
    .map_err(|_| ApiError::InvalidCredentials)?;

  let session_user = SessionUser {
    id:       user.id,
    username: user.username,
    role:     user.role,
  };
  let token = state.sessions.issue(session_user.clone()).await;

  tracing::info!(username = %session_user.username, "staff login");

  Ok(
    (
      [(header::SET_COOKIE, set_cookie(token))],
      Json(LoginResponse {
        message: "Login successful".into(),
        user:    session_user,
      }),
    )
      .into_response(),
  )
}

/// `POST /logout` — destroys the session (if any) and clears the cookie.
/// Always succeeds, even without a session.
pub async fn logout<S>(
  State(state): State<AppState<S>>,
  headers: HeaderMap,
) -> Response
where
  S: RestaurantStore + Clone + Send + Sync + 'static,
{
  if let Some(token) = session_token(&headers) {
    state.sessions.revoke(token).await;
  }
  (
    [(header::SET_COOKIE, clear_cookie())],
    Json(serde_json::json!({ "message": "Logged out successfully" })),
  )
    .into_response()
}

#[derive(Debug, Serialize)]
pub struct CheckResponse {
  pub authenticated: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub user:          Option<SessionUser>,
}

/// `GET /auth/check` — always 200; reports whether a live session exists.
pub async fn check<S>(
  State(state): State<AppState<S>>,
  headers: HeaderMap,
) -> Json<CheckResponse>
where
  S: RestaurantStore + Clone + Send + Sync + 'static,
{
  let user = match session_token(&headers) {
    Some(token) => state.sessions.resolve(token).await,
    None => None,
  };
  Json(CheckResponse {
    authenticated: user.is_some(),
    user,
  })
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use axum::http::Request;
  use tiffin_store_mem::MemStore;

  use super::*;
  use crate::session::SessionStore;

  fn make_state() -> AppState<MemStore> {
    AppState {
      store:    Arc::new(MemStore::new()),
      sessions: Arc::new(SessionStore::new()),
    }
  }

  async fn extract(
    req: Request<axum::body::Body>,
    state: &AppState<MemStore>,
  ) -> Result<Staff, ApiError> {
    let (mut parts, _) = req.into_parts();
    Staff::from_request_parts(&mut parts, state).await
  }

  #[tokio::test]
  async fn live_session_passes_the_gate() {
    let state = make_state();
    let token = state
      .sessions
      .issue(SessionUser {
        id:       1,
        username: "admin".into(),
        role:     "admin".into(),
      })
      .await;

    let req = Request::builder()
      .header(header::COOKIE, format!("{SESSION_COOKIE}={token}"))
      .body(axum::body::Body::empty())
      .unwrap();

    let Staff(user) = extract(req, &state).await.unwrap();
    assert_eq!(user.username, "admin");
  }

  #[tokio::test]
  async fn missing_cookie_is_unauthorized() {
    let state = make_state();
    let req = Request::builder().body(axum::body::Body::empty()).unwrap();
    assert!(matches!(
      extract(req, &state).await,
      Err(ApiError::Unauthorized)
    ));
  }

  #[tokio::test]
  async fn unknown_token_is_unauthorized() {
    let state = make_state();
    let req = Request::builder()
      .header(
        header::COOKIE,
        format!("{SESSION_COOKIE}={}", Uuid::new_v4()),
      )
      .body(axum::body::Body::empty())
      .unwrap();
    assert!(matches!(
      extract(req, &state).await,
      Err(ApiError::Unauthorized)
    ));
  }

  #[tokio::test]
  async fn malformed_token_is_unauthorized() {
    let state = make_state();
    let req = Request::builder()
      .header(header::COOKIE, format!("{SESSION_COOKIE}=not-a-uuid"))
      .body(axum::body::Body::empty())
      .unwrap();
    assert!(matches!(
      extract(req, &state).await,
      Err(ApiError::Unauthorized)
    ));
  }

  #[tokio::test]
  async fn token_found_among_other_cookies() {
    let state = make_state();
    let token = state
      .sessions
      .issue(SessionUser {
        id:       1,
        username: "admin".into(),
        role:     "admin".into(),
      })
      .await;

    let req = Request::builder()
      .header(
        header::COOKIE,
        format!("theme=dark; {SESSION_COOKIE}={token}; lang=en"),
      )
      .body(axum::body::Body::empty())
      .unwrap();
    assert!(extract(req, &state).await.is_ok());
  }
}
