use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::{fs, path::Path};

/// Process-wide gateway settings.
///
/// Loaded once at startup and read-only from then on; request handling
/// never touches configuration mutably.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Socket address the HTTP listener binds to.
    pub bind_addr: String,

    /// Base URL of the upstream weather API.
    pub upstream_base_url: String,

    /// Identification header sent with every upstream request. The upstream
    /// provider rejects unidentified clients with a 403.
    pub user_agent: String,

    /// Per-request timeout for outbound calls, in seconds.
    pub request_timeout_secs: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            upstream_base_url: "https://api.weather.gov".to_string(),
            user_agent: "weather-gateway/0.1 (contact@example.com)".to_string(),
            request_timeout_secs: 10,
        }
    }
}

impl GatewayConfig {
    /// Load config from disk, or return defaults if the file doesn't exist yet.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: GatewayConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        cfg.validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        Ok(cfg)
    }

    fn validate(&self) -> Result<()> {
        if self.user_agent.trim().is_empty() {
            bail!("user_agent must not be empty; the upstream API rejects unidentified clients");
        }
        if self.upstream_base_url.trim().is_empty() {
            bail!("upstream_base_url must not be empty");
        }
        Ok(())
    }
}
