use std::collections::HashMap;
use std::sync::Arc;

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::{DateTime, TimeDelta, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::MovieDetail;

/// Cookie holding the session id
pub const SESSION_COOKIE: &str = "movie_session";

/// One browser's interaction state
#[derive(Debug, Clone)]
pub struct Session {
    /// Title currently chosen in the dropdown
    pub selected_title: Option<String>,
    /// Last successfully computed recommendation list
    pub recommendations: Option<Vec<MovieDetail>>,
    /// Whether the last detail fetch reached the metadata API
    ///
    /// Diagnostic only: rendering depends on `recommendations`, which a
    /// failed fetch leaves untouched.
    pub connection: bool,
    pub last_seen: DateTime<Utc>,
}

impl Session {
    fn new() -> Self {
        Self {
            selected_title: None,
            recommendations: None,
            connection: true,
            last_seen: Utc::now(),
        }
    }

    /// True once a recommendation has been computed for this session
    pub fn has_recommendations(&self) -> bool {
        self.recommendations.is_some()
    }
}

/// In-memory session storage keyed by cookie
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
    ttl: TimeDelta,
}

impl SessionStore {
    pub fn new(ttl_secs: i64) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl: TimeDelta::seconds(ttl_secs),
        }
    }

    /// Returns the session named by the cookie, creating one when missing or expired
    ///
    /// The returned jar carries the session cookie and must be sent back.
    pub async fn resolve(&self, jar: CookieJar) -> (Uuid, Session, CookieJar) {
        let existing = jar
            .get(SESSION_COOKIE)
            .and_then(|cookie| Uuid::parse_str(cookie.value()).ok());

        if let Some(id) = existing {
            let mut sessions = self.sessions.write().await;
            if let Some(session) = sessions.get_mut(&id) {
                if Utc::now() - session.last_seen <= self.ttl {
                    session.last_seen = Utc::now();
                    return (id, session.clone(), jar);
                }
                sessions.remove(&id);
                tracing::debug!(session_id = %id, "Session expired");
            }
        }

        let id = self.create().await;
        let cookie = Cookie::build((SESSION_COOKIE, id.to_string()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax);

        (id, Session::new(), jar.add(cookie))
    }

    /// Starts a new session, dropping every idle one
    async fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        let now = Utc::now();
        let ttl = self.ttl;

        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| now - session.last_seen <= ttl);
        if sessions.len() < before {
            tracing::debug!(pruned = before - sessions.len(), "Pruned idle sessions");
        }
        sessions.insert(id, Session::new());

        tracing::debug!(session_id = %id, active = sessions.len(), "Session created");
        id
    }

    /// Applies `f` to the session and returns the updated copy
    pub async fn update<F>(&self, id: Uuid, f: F) -> Session
    where
        F: FnOnce(&mut Session),
    {
        let mut sessions = self.sessions.write().await;
        let session = sessions.entry(id).or_insert_with(Session::new);
        f(session);
        session.last_seen = Utc::now();
        session.clone()
    }

    pub async fn get(&self, id: Uuid) -> Option<Session> {
        self.sessions.read().await.get(&id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}
