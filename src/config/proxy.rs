use crate::config::EnvSource;
use crate::utils::error::{AppError, Result};
use crate::utils::validation::{validate_endpoint, validate_port, Validate};
use std::time::Duration;

pub const DEFAULT_UPSTREAM_ENDPOINT: &str = "http://localhost:8000";
pub const DEFAULT_PROXY_PORT: u16 = 5000;
pub const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    pub upstream_endpoint: String,
    pub port: u16,
    pub timeout: Duration,
}

impl ProxyConfig {
    pub fn new(upstream_endpoint: impl Into<String>) -> Self {
        Self {
            upstream_endpoint: upstream_endpoint.into(),
            port: DEFAULT_PROXY_PORT,
            timeout: UPSTREAM_TIMEOUT,
        }
    }

    pub fn from_env() -> Result<Self> {
        Self::from_source(&EnvSource::load())
    }

    pub fn from_source(env: &EnvSource) -> Result<Self> {
        let port = match env.get("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| AppError::ConfigError {
                message: format!("PORT must be a port number, got '{}'", raw),
            })?,
            None => DEFAULT_PROXY_PORT,
        };

        Ok(Self {
            upstream_endpoint: env.get_or("API_ENDPOINT", DEFAULT_UPSTREAM_ENDPOINT),
            port,
            timeout: UPSTREAM_TIMEOUT,
        })
    }

    /// URL of the upstream root route.
    pub fn target_url(&self) -> String {
        format!("{}/", self.upstream_endpoint.trim_end_matches('/'))
    }
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self::new(DEFAULT_UPSTREAM_ENDPOINT)
    }
}

impl Validate for ProxyConfig {
    fn validate(&self) -> Result<()> {
        validate_endpoint("api_endpoint", &self.upstream_endpoint)?;
        validate_port("port", self.port)?;

        tracing::debug!("✅ Proxy configuration validation passed");
        Ok(())
    }
}
