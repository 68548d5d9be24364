use crate::error::Slide300Error;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Upper bound for the simulated strategy latency
const MAX_STRATEGY_DELAY_MS: u64 = 60_000;

/// `ALLOWED_ORIGIN` value meaning "any origin"
pub const ANY_ORIGIN: &str = "*";

/// Slide300 application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server bind address
    pub server_host: String,

    /// Server port
    pub server_port: u16,

    /// Log directory
    pub log_dir: PathBuf,

    /// Log level
    pub log_level: String,

    /// Write logs to a file in `log_dir` as well as the console
    pub log_to_file: bool,

    /// Simulated latency before a strategic variant is shown (milliseconds)
    pub strategy_delay_ms: u64,

    /// CORS origin allowed to call the API (permissive when unset or `*`)
    pub allowed_origin: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_host: "127.0.0.1".to_string(),
            server_port: 8300,
            log_dir: PathBuf::from("./log"),
            log_level: "info".to_string(),
            log_to_file: false,
            strategy_delay_ms: 1500,
            allowed_origin: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self, Slide300Error> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        let defaults = Self::default();

        let config = Self {
            server_host: std::env::var("SERVER_HOST")
                .unwrap_or(defaults.server_host),
            server_port: std::env::var("SERVER_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.server_port),
            log_dir: std::env::var("LOG_DIR")
                .ok()
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            log_level: std::env::var("LOG_LEVEL")
                .unwrap_or(defaults.log_level),
            log_to_file: std::env::var("LOG_TO_FILE")
                .ok()
                .map(|s| parse_flag(&s))
                .unwrap_or(defaults.log_to_file),
            strategy_delay_ms: std::env::var("STRATEGY_DELAY_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.strategy_delay_ms),
            allowed_origin: std::env::var("ALLOWED_ORIGIN")
                .ok()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        };

        config.validate()?;

        Ok(config)
    }

    /// Get server bind address (host:port)
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Simulated strategy latency as a Duration
    pub fn strategy_delay(&self) -> Duration {
        Duration::from_millis(self.strategy_delay_ms)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), Slide300Error> {
        if self.server_host.trim().is_empty() {
            return Err(Slide300Error::config("Server host cannot be empty"));
        }

        if self.server_port == 0 {
            return Err(Slide300Error::config("Server port cannot be 0"));
        }

        if self.strategy_delay_ms > MAX_STRATEGY_DELAY_MS {
            return Err(Slide300Error::config(format!(
                "Strategy delay must be at most {} ms (got {})",
                MAX_STRATEGY_DELAY_MS, self.strategy_delay_ms
            )));
        }

        if let Some(origin) = &self.allowed_origin {
            if origin != ANY_ORIGIN && !is_valid_origin(origin) {
                return Err(Slide300Error::config(format!(
                    "Allowed origin must look like scheme://host[:port] or be '*' (got '{}')",
                    origin
                )));
            }
        }

        Ok(())
    }
}

/// `scheme://host[:port]` with no path, query or whitespace
fn is_valid_origin(origin: &str) -> bool {
    let Some((scheme, authority)) = origin.split_once("://") else {
        return false;
    };

    let scheme_ok = scheme.starts_with(|c: char| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));

    let (host, port_ok) = match authority.rsplit_once(':') {
        Some((host, port)) => (host, port.parse::<u16>().is_ok()),
        None => (authority, true),
    };

    let host_ok = !host.is_empty()
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'));

    scheme_ok && host_ok && port_ok
}

/// Interpret common truthy strings ("1", "true", "yes", "on")
fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
