//! Application configuration from environment variables
//!
//! `.env` files are loaded by `main` through dotenvy before this runs.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use reqwest::Url;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_VENUE_API_BASE_URL: &str =
    "https://consumer-api.development.dev.woltapi.com/home-assignment-api/v1/venues";
const DEFAULT_VENUE_API_TIMEOUT_SECS: u64 = 10;

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {name}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Runtime configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub venue_api_base_url: Url,
    pub venue_api_timeout: Duration,
}

impl Config {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for
    /// unset variables
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        let host = var("HOST", DEFAULT_HOST);
        let host = host.parse::<IpAddr>().map_err(|e| invalid("HOST", &host, e))?;

        let port = var("PORT", &DEFAULT_PORT.to_string());
        let port = port.parse::<u16>().map_err(|e| invalid("PORT", &port, e))?;

        let base_url = var("VENUE_API_BASE_URL", DEFAULT_VENUE_API_BASE_URL);
        let venue_api_base_url = parse_base_url(&base_url)?;

        let timeout = var(
            "VENUE_API_TIMEOUT_SECS",
            &DEFAULT_VENUE_API_TIMEOUT_SECS.to_string(),
        );
        let timeout_secs = timeout
            .parse::<u64>()
            .map_err(|e| invalid("VENUE_API_TIMEOUT_SECS", &timeout, e))?;
        if timeout_secs == 0 {
            return Err(invalid(
                "VENUE_API_TIMEOUT_SECS",
                &timeout,
                "must be at least 1",
            ));
        }

        Ok(Self {
            host,
            port,
            venue_api_base_url,
            venue_api_timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim_end_matches('/'))
        .map_err(|e| invalid("VENUE_API_BASE_URL", raw, e))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(invalid(
            "VENUE_API_BASE_URL",
            raw,
            format!("unsupported scheme {}", scheme),
        )),
    }
}

fn invalid(name: &'static str, value: &str, reason: impl ToString) -> ConfigError {
    ConfigError::Invalid {
        name,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
