use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// A missing Gemini key runs the service in DB-truth mode instead of
/// failing startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Enables remote generation when present.
    pub gemini_api_key: Option<String>,
    pub myths_path: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: std::env::var("GEMINI_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            myths_path: std::env::var("MYTHS_PATH").unwrap_or_else(|_| "myths.json".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
