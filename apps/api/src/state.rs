use std::sync::Arc;

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;

use crate::config::Config;
use crate::llm_client::{GenerationParams, TextGenerator};
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable text generator. Default: `LlmClient` against the configured provider.
    pub llm: Arc<dyn TextGenerator>,
    /// Pluggable session store. Default: in-memory; Redis when `REDIS_URL` is set.
    pub sessions: Arc<dyn SessionStore>,
    pub params: GenerationParams,
    /// Signs the session cookie.
    pub cookie_key: Key,
    pub config: Config,
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}
