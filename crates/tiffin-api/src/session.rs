//! In-memory session store for the admin console.
//!
//! A session is an opaque UUID token mapped to the logged-in user. Tokens
//! live for 24 hours; expiry is checked (and the entry dropped) lazily on
//! lookup, so no background sweeper is needed. Like the entity store, this is
//! volatile by design — a restart logs everyone out.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

use tiffin_core::Id;

/// Name of the session cookie issued on login.
pub const SESSION_COOKIE: &str = "tiffin_session";

/// Session lifetime in seconds (24 h); also the cookie `Max-Age`.
pub const SESSION_TTL_SECS: i64 = 24 * 60 * 60;

/// The user identity attached to a session. Never carries the password hash.
#[derive(Debug, Clone, Serialize)]
pub struct SessionUser {
  pub id:       Id,
  pub username: String,
  pub role:     String,
}

struct Session {
  user:      SessionUser,
  issued_at: DateTime<Utc>,
}

/// Token → session map behind an async lock.
#[derive(Default)]
pub struct SessionStore {
  sessions: RwLock<HashMap<Uuid, Session>>,
}

impl SessionStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Create a session for `user` and return its token.
  pub async fn issue(&self, user: SessionUser) -> Uuid {
    let token = Uuid::new_v4();
    let session = Session {
      user,
      issued_at: Utc::now(),
    };
    self.sessions.write().await.insert(token, session);
    token
  }

  /// Resolve a token to its user, dropping the session if it has expired.
  pub async fn resolve(&self, token: Uuid) -> Option<SessionUser> {
    let mut sessions = self.sessions.write().await;
    let session = sessions.get(&token)?;
    if Utc::now() - session.issued_at > Duration::seconds(SESSION_TTL_SECS) {
      sessions.remove(&token);
      return None;
    }
    Some(session.user.clone())
  }

  /// Destroy a session. Returns `false` if the token was unknown.
  pub async fn revoke(&self, token: Uuid) -> bool {
    self.sessions.write().await.remove(&token).is_some()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn staff() -> SessionUser {
    SessionUser {
      id:       1,
      username: "admin".into(),
      role:     "admin".into(),
    }
  }

  #[tokio::test]
  async fn issue_resolve_revoke() {
    let store = SessionStore::new();

    let token = store.issue(staff()).await;
    let user = store.resolve(token).await.unwrap();
    assert_eq!(user.username, "admin");

    assert!(store.revoke(token).await);
    assert!(store.resolve(token).await.is_none());
    assert!(!store.revoke(token).await);
  }

  #[tokio::test]
  async fn unknown_token_resolves_to_none() {
    let store = SessionStore::new();
    assert!(store.resolve(Uuid::new_v4()).await.is_none());
  }

  #[tokio::test]
  async fn expired_session_is_dropped_on_lookup() {
    let store = SessionStore::new();
    let token = store.issue(staff()).await;

    // Backdate the session past its lifetime.
    {
      let mut sessions = store.sessions.write().await;
      let session = sessions.get_mut(&token).unwrap();
      session.issued_at = Utc::now() - Duration::seconds(SESSION_TTL_SECS + 1);
    }

    assert!(store.resolve(token).await.is_none());
    assert!(!store.sessions.read().await.contains_key(&token));
  }
}
