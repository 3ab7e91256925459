use anyhow::{Context, Result, anyhow};
use std::path::PathBuf;
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub session_file: PathBuf,
    pub otel_endpoint: Option<String>,
    pub dev_mode: bool,
    pub enable_file_log: bool,
}

impl Config {
    pub fn init() -> Result<Self> {
        let api_base_url = std::env::var("API_BASE_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        let api_base_url = normalize_base_url(&api_base_url).context("Invalid API_BASE_URL")?;

        let session_file = std::env::var("SESSION_FILE")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_session_path);

        let otel_endpoint = std::env::var("OTEL_ENDPOINT")
            .ok()
            .filter(|value| !value.trim().is_empty());

        let dev_mode = parse_flag("DEV_MODE")?;
        let enable_file_log = parse_flag("ENABLE_FILE_LOG")?;

        Ok(Self {
            api_base_url,
            session_file,
            otel_endpoint,
            dev_mode,
            enable_file_log,
        })
    }

    pub fn set_base_url(&mut self, raw: &str) -> Result<()> {
        self.api_base_url = normalize_base_url(raw)?;
        Ok(())
    }
}

fn normalize_base_url(raw: &str) -> Result<String> {
    Url::parse(raw).with_context(|| format!("Base URL must be an absolute URL, got '{raw}'"))?;
    Ok(raw.trim_end_matches('/').to_string())
}

pub fn default_session_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("salesinbox")
        .join("session.json")
}

fn parse_flag(name: &str) -> Result<bool> {
    match std::env::var(name) {
        Err(_) => Ok(false),
        Ok(value) => match value.as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" | "" => Ok(false),
            other => Err(anyhow!("{name} must be 'true' or 'false', got '{other}'")),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            session_file: PathBuf::from("session.json"),
            otel_endpoint: None,
            dev_mode: false,
            enable_file_log: false,
        }
    }

    #[test]
    fn base_url_override_is_trimmed() {
        let mut config = config();
        config.set_base_url("https://api.example.com/").unwrap();
        assert_eq!(config.api_base_url, "https://api.example.com");
    }

    #[test]
    fn invalid_base_url_override_is_rejected() {
        let mut config = config();
        let err = config.set_base_url("/api/v1").unwrap_err();
        assert!(err.to_string().contains("/api/v1"));
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }
}
