use anyhow::{Context, Result};

/// Default OpenAI-compatible endpoint for the answering model.
pub const DEFAULT_CHAT_API_URL: &str = "https://api.openai.com/v1";
/// Default OpenAI-compatible endpoint for the evaluator model (Google's
/// compatibility surface for the Gemini API).
pub const DEFAULT_EVAL_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/openai";

pub const DEFAULT_CHAT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_EVAL_MODEL: &str = "gemini-2.0-flash";

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub gemini_api_key: String,
    pub chat_api_url: String,
    pub eval_api_url: String,
    pub chat_model: String,
    pub eval_model: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: require_env("OPENAI_API_KEY")?,
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            chat_api_url: env_or("CHAT_API_URL", DEFAULT_CHAT_API_URL),
            eval_api_url: env_or("EVAL_API_URL", DEFAULT_EVAL_API_URL),
            chat_model: env_or("CHAT_MODEL", DEFAULT_CHAT_MODEL),
            eval_model: env_or("EVAL_MODEL", DEFAULT_EVAL_MODEL),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
