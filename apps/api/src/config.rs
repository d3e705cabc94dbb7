use std::path::PathBuf;

use anyhow::{Context, Result};

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;
const DEFAULT_MAX_JOBS: usize = 10;

/// Application configuration loaded from environment variables.
/// Every AI-related setting is optional: without an API key the service runs
/// entirely on the rule-based and mock generators.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub resume_parser_model: String,
    pub advisor_model: String,
    pub port: u16,
    pub rust_log: String,
    /// Directory for JSON snapshots of results. Disabled when unset.
    pub output_dir: Option<PathBuf>,
    pub max_upload_bytes: usize,
    pub max_jobs_to_return: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            resume_parser_model: optional_env("RESUME_PARSER_MODEL")
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            advisor_model: optional_env("ADVISOR_MODEL")
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            output_dir: optional_env("OUTPUT_DIR").map(PathBuf::from),
            max_upload_bytes: parse_env_or("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            max_jobs_to_return: parse_env_or("MAX_JOBS_TO_RETURN", DEFAULT_MAX_JOBS)?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            resume_parser_model: DEFAULT_MODEL.to_string(),
            advisor_model: DEFAULT_MODEL.to_string(),
            port: 8080,
            rust_log: "info".to_string(),
            output_dir: None,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            max_jobs_to_return: DEFAULT_MAX_JOBS,
        }
    }
}

/// Reads an env var, treating unset and blank values the same way.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env_or(key: &str, default: usize) -> Result<usize> {
    match optional_env(key) {
        Some(raw) => raw
            .parse::<usize>()
            .with_context(|| format!("Environment variable '{key}' must be a positive integer")),
        None => Ok(default),
    }
}
