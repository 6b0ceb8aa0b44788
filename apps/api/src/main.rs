mod config;
mod errors;
mod export;
mod generation;
mod llm_client;
mod pages;
mod profile;
mod routes;
mod session;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::{GenerationParams, LlmClient, TextGenerator};
use crate::routes::build_router;
use crate::session::{
    session_key_from_secret, InMemorySessionStore, RedisSessionStore, SessionStore,
};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Configuration first: a missing API key or session secret stops startup.
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting coverforge v{}", env!("CARGO_PKG_VERSION"));

    let llm = LlmClient::new(
        config.openai_api_key.clone(),
        &config.openai_api_base,
        Duration::from_secs(config.llm_timeout_secs),
        config.llm_max_retries,
    )?;
    info!(
        "LLM client initialized (model: {}, base: {})",
        config.openai_model, config.openai_api_base
    );

    let sessions: Arc<dyn SessionStore> = match &config.redis_url {
        Some(url) => Arc::new(RedisSessionStore::connect(url, config.session_ttl_secs).await?),
        None => {
            info!("REDIS_URL not set, keeping sessions in memory");
            Arc::new(InMemorySessionStore::new(Duration::from_secs(
                config.session_ttl_secs,
            )))
        }
    };

    let state = AppState {
        llm: Arc::new(llm) as Arc<dyn TextGenerator>,
        sessions,
        params: GenerationParams {
            model: config.openai_model.clone(),
            max_tokens: config.llm_max_tokens,
            temperature: config.llm_temperature,
        },
        cookie_key: session_key_from_secret(&config.session_secret),
        config: config.clone(),
    };

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
