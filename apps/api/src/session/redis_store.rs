use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use tracing::info;

use crate::session::{DocumentKey, SessionError, SessionStore};

const KEY_PREFIX: &str = "coverforge:session";

/// Redis-backed session store. Every value carries the session TTL, refreshed
/// on each read; multi-key writes run inside `MULTI`/`EXEC`.
#[derive(Clone)]
pub struct RedisSessionStore {
    conn: MultiplexedConnection,
    ttl_secs: u64,
}

impl RedisSessionStore {
    pub async fn connect(redis_url: &str, ttl_secs: u64) -> Result<Self, SessionError> {
        let client = redis::Client::open(redis_url)?;
        let conn = client.get_multiplexed_async_connection().await?;
        info!("Redis session store connected");
        Ok(Self { conn, ttl_secs })
    }
}

fn redis_key(session_id: &str, key: DocumentKey) -> String {
    format!("{KEY_PREFIX}:{session_id}:{}", key.as_str())
}

/// `GETEX .. EX ttl`: reading a value pushes its expiry forward.
fn read_cmd(session_id: &str, key: DocumentKey, ttl_secs: u64) -> redis::Cmd {
    let mut cmd = redis::cmd("GETEX");
    cmd.arg(redis_key(session_id, key)).arg("EX").arg(ttl_secs);
    cmd
}

/// `MULTI`, one `SET .. EX ttl` per entry, `EXEC`.
fn write_pipeline(
    session_id: &str,
    entries: Vec<(DocumentKey, String)>,
    ttl_secs: u64,
) -> redis::Pipeline {
    let mut pipe = redis::pipe();
    pipe.atomic();
    for (key, text) in entries {
        pipe.cmd("SET")
            .arg(redis_key(session_id, key))
            .arg(text)
            .arg("EX")
            .arg(ttl_secs)
            .ignore();
    }
    pipe
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn get(&self, session_id: &str, key: DocumentKey) -> Result<Option<String>, SessionError> {
        let mut conn = self.conn.clone();
        let value = read_cmd(session_id, key, self.ttl_secs)
            .query_async::<_, Option<String>>(&mut conn)
            .await?;
        Ok(value)
    }

    async fn set(&self, session_id: &str, key: DocumentKey, text: String) -> Result<(), SessionError> {
        self.set_all(session_id, vec![(key, text)]).await
    }

    async fn set_all(
        &self,
        session_id: &str,
        entries: Vec<(DocumentKey, String)>,
    ) -> Result<(), SessionError> {
        let pipe = write_pipeline(session_id, entries, self.ttl_secs);
        let mut conn = self.conn.clone();
        pipe.query_async::<_, ()>(&mut conn).await?;
        Ok(())
    }
}
