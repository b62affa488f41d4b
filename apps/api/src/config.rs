use anyhow::{Context, Result};
use axum::http::HeaderValue;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// The single browser origin allowed to call the solve endpoint.
    pub allowed_origin: HeaderValue,
    /// Ceiling on `order + smallest pack - 1`; larger requests are rejected
    /// before the solver allocates its tables.
    pub max_search_bound: usize,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let allowed_origin = env_or("ALLOWED_ORIGIN", "http://localhost:3000");

        Ok(Config {
            port: env_or("PORT", "5000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            allowed_origin: HeaderValue::from_str(&allowed_origin)
                .with_context(|| format!("ALLOWED_ORIGIN '{allowed_origin}' is not a valid origin"))?,
            max_search_bound: env_or("MAX_SEARCH_BOUND", "5000000")
                .parse::<usize>()
                .context("MAX_SEARCH_BOUND must be a non-negative integer")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
