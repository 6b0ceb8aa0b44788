use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::debug;

use crate::session::{DocumentKey, SessionError, SessionStore};

const DEFAULT_TTL: Duration = Duration::from_secs(24 * 60 * 60);

struct SessionEntry {
    values: HashMap<DocumentKey, String>,
    last_seen: Instant,
}

/// Process-local session store with a sliding expiry.
///
/// Expired sessions are dropped lazily: reads ignore them and every write
/// sweeps the map.
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, SessionEntry>>,
    ttl: Duration,
}

impl InMemorySessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    fn sweep(&self, sessions: &mut HashMap<String, SessionEntry>, now: Instant) {
        let before = sessions.len();
        sessions.retain(|_, entry| now.duration_since(entry.last_seen) < self.ttl);
        let dropped = before - sessions.len();
        if dropped > 0 {
            debug!("Dropped {dropped} expired session(s)");
        }
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, session_id: &str, key: DocumentKey) -> Result<Option<String>, SessionError> {
        let mut sessions = self.sessions.write().await;
        let now = Instant::now();
        match sessions.get_mut(session_id) {
            Some(entry) if now.duration_since(entry.last_seen) < self.ttl => {
                entry.last_seen = now;
                Ok(entry.values.get(&key).cloned())
            }
            _ => Ok(None),
        }
    }

    async fn set(&self, session_id: &str, key: DocumentKey, text: String) -> Result<(), SessionError> {
        self.set_all(session_id, vec![(key, text)]).await
    }

    async fn set_all(
        &self,
        session_id: &str,
        entries: Vec<(DocumentKey, String)>,
    ) -> Result<(), SessionError> {
        let mut sessions = self.sessions.write().await;
        let now = Instant::now();
        self.sweep(&mut sessions, now);

        let entry = sessions
            .entry(session_id.to_string())
            .or_insert_with(|| SessionEntry {
                values: HashMap::new(),
                last_seen: now,
            });
        entry.last_seen = now;
        entry.values.extend(entries);
        Ok(())
    }
}
