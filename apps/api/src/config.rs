use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_api_base: String,
    pub openai_model: String,
    pub llm_max_tokens: u32,
    pub llm_temperature: f32,
    pub llm_timeout_secs: u64,
    pub llm_max_retries: u32,
    pub session_secret: String,
    pub session_ttl_secs: u64,
    /// When unset, sessions live in process memory.
    pub redis_url: Option<String>,
    pub resume_image_path: PathBuf,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: require_env("OPENAI_API_KEY")?,
            openai_api_base: std::env::var("OPENAI_API_BASE")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            openai_model: std::env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            llm_max_tokens: parse_env("LLM_MAX_TOKENS", 1024)?,
            llm_temperature: parse_env("LLM_TEMPERATURE", 0.7)?,
            llm_timeout_secs: parse_env("LLM_TIMEOUT_SECS", 60)?,
            llm_max_retries: parse_env("LLM_MAX_RETRIES", 2)?,
            session_secret: require_env("SESSION_SECRET")?,
            session_ttl_secs: non_zero(
                "SESSION_TTL_SECS",
                parse_env("SESSION_TTL_SECS", 86_400)?,
            )?,
            redis_url: std::env::var("REDIS_URL").ok().filter(|v| !v.trim().is_empty()),
            resume_image_path: std::env::var("RESUME_IMAGE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("static/resume_preview.png")),
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => parse_value(key, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse::<T>()
        .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw:?}"))
}

fn non_zero(key: &str, value: u64) -> Result<u64> {
    if value == 0 {
        bail!("Environment variable '{key}' must be greater than zero");
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value_accepts_padded_number() {
        let port: u16 = parse_value("PORT", " 9090 ").unwrap();
        assert_eq!(port, 9090);
    }

    #[test]
    fn test_parse_value_rejects_garbage_with_key_in_message() {
        let err = parse_value::<u32>("LLM_MAX_TOKENS", "lots").unwrap_err();
        assert!(err.to_string().contains("LLM_MAX_TOKENS"));
    }

    #[test]
    fn test_zero_session_ttl_is_rejected() {
        let err = non_zero("SESSION_TTL_SECS", 0).unwrap_err();
        assert!(err.to_string().contains("SESSION_TTL_SECS"));
        assert_eq!(non_zero("SESSION_TTL_SECS", 60).unwrap(), 60);
    }

    #[test]
    fn test_parse_value_float() {
        let temperature: f32 = parse_value("LLM_TEMPERATURE", "0.2").unwrap();
        assert!((temperature - 0.2).abs() < 1e-6);
    }
}
