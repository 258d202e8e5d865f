//! Client configuration from environment variables.

use std::env;
use std::time::Duration;

/// Default request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Client configuration.
#[derive(Clone)]
pub struct ClientConfig {
    /// Workspace base URL, normalized (scheme present, no trailing slash).
    pub host: String,
    /// Personal access token sent as a Bearer header.
    pub token: Option<String>,
    /// Per-request timeout.
    pub timeout: Duration,
    /// `User-Agent` header value.
    pub user_agent: String,
}

impl ClientConfig {
    /// Build a configuration for `host` with default settings.
    pub fn new(host: impl AsRef<str>) -> Self {
        Self {
            host: normalize_host(host.as_ref()),
            token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("workspace-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `WORKSPACE_HOST`: Workspace base URL
    ///
    /// Optional:
    /// - `WORKSPACE_TOKEN`: Bearer token
    /// - `WORKSPACE_TIMEOUT_SECS`: Request timeout in seconds (default: 60)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with_host(None)
    }

    /// Load configuration from environment variables, with `host` taking
    /// precedence over `WORKSPACE_HOST` when given.
    pub fn from_env_with_host(host: Option<&str>) -> Result<Self, ConfigError> {
        Self::from_lookup(|name| match (name, host) {
            ("WORKSPACE_HOST", Some(host)) => Some(host.to_string()),
            _ => env::var(name).ok(),
        })
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("WORKSPACE_HOST")
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("WORKSPACE_HOST".to_string()))?;

        let mut config = Self::new(host);

        if let Some(token) = lookup("WORKSPACE_TOKEN").filter(|s| !s.is_empty()) {
            config.token = Some(token);
        }

        if let Some(raw) = lookup("WORKSPACE_TIMEOUT_SECS") {
            let secs: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                name: "WORKSPACE_TIMEOUT_SECS".to_string(),
                reason: format!("expected a whole number of seconds, got '{}'", raw),
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("host", &self.host)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Trim trailing slashes and default to `https://` when no scheme is given.
pub fn normalize_host(host: &str) -> String {
    let trimmed = host.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Required environment variable is missing.
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Invalid environment variable value.
    #[error("invalid value for environment variable {name}: {reason}")]
    InvalidValue { name: String, reason: String },
}
