use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use postboard_client::HttpGatewayOptions;
use postboard_core::{DEFAULT_API_BASE_URL, ViewerConfig};

use crate::logging::DEFAULT_LOG_LEVEL;

#[derive(Debug, Clone)]
pub struct Settings {
    pub api_url: String,
    pub viewer: ViewerConfig,
    pub log_level: String,
    pub connect_timeout_secs: u64,
    pub timeout_secs: u64,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        let api_url = std::env::var("POSTBOARD_API_URL")
            .map(|value| value.trim().to_string())
            .ok()
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let viewer = ViewerConfig::from_raw(std::env::var("POSTBOARD_USER_ID").ok().as_deref());
        let log_level = std::env::var("LOG_LEVEL")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
        let connect_timeout_secs = parse_u64_env("POSTBOARD_CONNECT_TIMEOUT_SECS", 5)?;
        let timeout_secs = parse_u64_env("POSTBOARD_TIMEOUT_SECS", 15)?;

        Ok(Self {
            api_url,
            viewer,
            log_level,
            connect_timeout_secs,
            timeout_secs,
        })
    }

    /// Флаги командной строки имеют приоритет над окружением.
    pub fn with_overrides(mut self, server: Option<String>, user_id: Option<i64>) -> Self {
        if let Some(server) = server {
            self.api_url = normalize_server(server);
        }
        if let Some(user_id) = user_id {
            self.viewer = ViewerConfig::from_raw(Some(user_id.to_string().as_str()));
        }
        self
    }

    pub fn gateway_options(&self) -> HttpGatewayOptions {
        HttpGatewayOptions {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

pub fn normalize_server(server: String) -> String {
    if server.starts_with("http://") || server.starts_with("https://") {
        return server;
    }

    format!("https://{server}")
}

fn parse_u64_env(key: &str, default: u64) -> Result<u64> {
    let value = std::env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse::<u64>()
        .with_context(|| format!("Failed to parse {key}, expecting positive integer"))?;

    if value == 0 {
        return Err(anyhow!("{key} must be > 0"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Settings {
        Settings {
            api_url: DEFAULT_API_BASE_URL.to_string(),
            viewer: ViewerConfig::default(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            connect_timeout_secs: 5,
            timeout_secs: 15,
        }
    }

    #[test]
    fn normalize_server_keeps_scheme() {
        let s = normalize_server("http://127.0.0.1:3000".to_string());
        assert_eq!(s, "http://127.0.0.1:3000");
    }

    #[test]
    fn normalize_server_adds_https_scheme() {
        let s = normalize_server("jsonplaceholder.typicode.com".to_string());
        assert_eq!(s, "https://jsonplaceholder.typicode.com");
    }

    #[test]
    fn overrides_replace_env_values() {
        let settings = base().with_overrides(Some("localhost:3000".to_string()), Some(3));
        assert_eq!(settings.api_url, "https://localhost:3000");
        assert_eq!(settings.viewer.logged_in_user_id, 3);
    }

    #[test]
    fn zero_user_override_falls_back_to_default() {
        let settings = base().with_overrides(None, Some(0));
        assert_eq!(settings.viewer.logged_in_user_id, 1);
        assert_eq!(settings.api_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn gateway_options_use_configured_timeouts() {
        let options = base().gateway_options();
        assert_eq!(options.connect_timeout, Duration::from_secs(5));
        assert_eq!(options.timeout, Duration::from_secs(15));
    }
}
