use std::time::Duration;

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use moka::future::Cache;

use common::{PredictionSeries, TableRow};

/// Header carrying the caller's session identity.
pub const SESSION_HEADER: &str = "x-session-id";

/// Fallback identity for callers that send no session header.
const ANONYMOUS_SESSION: &str = "anonymous";

/// Per-session state.
///
/// Each session is logically single-threaded: one interaction at a time
/// reads, optionally mutates, and writes back.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// Raised on the first forecast request of the session, never cleared
    pub prediction_made: bool,
    /// Most recent prediction, replaced wholesale on every run
    pub prediction: Option<PredictionSeries>,
    /// Log of past prediction rows. Nothing writes to it yet; kept for a
    /// per-session run-history view.
    pub history: Vec<TableRow>,
}

/// Keyed store of per-session state. Sessions never observe each other.
#[derive(Debug, Clone)]
pub struct SessionStore {
    inner: Cache<String, SessionState>,
}

impl SessionStore {
    pub fn new(max_sessions: u64, idle: Duration) -> Self {
        let inner = Cache::builder()
            .max_capacity(max_sessions)
            .time_to_idle(idle)
            .build();
        Self { inner }
    }

    /// Returns the session's state, initializing an empty one on first touch.
    /// Repeated calls within a session never re-initialize.
    pub async fn get_or_init(&self, id: &str) -> SessionState {
        if let Some(state) = self.inner.get(id).await {
            return state;
        }
        let fresh = SessionState::default();
        self.inner.insert(id.to_string(), fresh.clone()).await;
        fresh
    }

    /// Stores the session's state, replacing the previous value.
    pub async fn put(&self, id: &str, state: SessionState) {
        self.inner.insert(id.to_string(), state).await;
    }
}

/// The caller's session id, taken from the request headers.
#[derive(Debug, Clone)]
pub struct SessionId(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for SessionId
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let id = parts
            .headers
            .get(SESSION_HEADER)
            .and_then(|value| value.to_str().ok())
            .unwrap_or(ANONYMOUS_SESSION)
            .to_string();
        Ok(SessionId(id))
    }
}
