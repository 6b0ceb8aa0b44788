//! Session-scoped result storage.
//!
//! Generation and export code only see the narrow `SessionStore` trait, so the
//! backing (process memory or Redis) can be swapped at startup.

use async_trait::async_trait;
use thiserror::Error;

pub mod cookie;
pub mod memory;
pub mod redis_store;

pub use cookie::{session_key_from_secret, SessionId};
pub use memory::InMemorySessionStore;
pub use redis_store::RedisSessionStore;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),
}

/// The fixed set of values a session can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKey {
    Resume,
    CoverLetter,
}

impl DocumentKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKey::Resume => "resume",
            DocumentKey::CoverLetter => "cover_letter",
        }
    }
}

/// Keyed text storage partitioned by session id.
///
/// Carried in `AppState` as `Arc<dyn SessionStore>`.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self, session_id: &str, key: DocumentKey) -> Result<Option<String>, SessionError>;

    async fn set(&self, session_id: &str, key: DocumentKey, text: String) -> Result<(), SessionError>;

    /// Writes every entry or none of them.
    async fn set_all(
        &self,
        session_id: &str,
        entries: Vec<(DocumentKey, String)>,
    ) -> Result<(), SessionError>;
}

/// The generated resume / cover letter pair held for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionDocument {
    pub resume: String,
    pub cover_letter: String,
}

impl SessionDocument {
    /// Reads both values; a session that never generated reads as empty text.
    pub async fn load(store: &dyn SessionStore, session_id: &str) -> Result<Self, SessionError> {
        Ok(Self {
            resume: store
                .get(session_id, DocumentKey::Resume)
                .await?
                .unwrap_or_default(),
            cover_letter: store
                .get(session_id, DocumentKey::CoverLetter)
                .await?
                .unwrap_or_default(),
        })
    }

    /// Replaces both values atomically.
    pub async fn save(&self, store: &dyn SessionStore, session_id: &str) -> Result<(), SessionError> {
        store
            .set_all(
                session_id,
                vec![
                    (DocumentKey::Resume, self.resume.clone()),
                    (DocumentKey::CoverLetter, self.cover_letter.clone()),
                ],
            )
            .await
    }

    pub fn is_empty(&self) -> bool {
        self.resume.is_empty() && self.cover_letter.is_empty()
    }
}
