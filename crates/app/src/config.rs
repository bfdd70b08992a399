//! Configuration loading: TOML defaults with named string overrides.
//!
//! The adapter supplies the TOML text (embedded at build time) and a lookup
//! for overrides (page `<meta>` tags in the browser). Every field has a
//! default so both are optional.

use serde::Deserialize;
use sensorboard_domain::device::DeviceId;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Sensor API endpoints.
    pub api: ApiConfig,
    /// Timer settings.
    pub polling: PollingConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Sensor API endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// URL of the fleet snapshot.
    pub fleet_url: String,
    /// URL prefix of the per-device history; the device id is appended.
    pub history_url_prefix: String,
    /// Upper bound on a single request, in milliseconds.
    pub request_timeout_ms: u32,
}

/// Timer settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PollingConfig {
    /// Period of both the fleet and the history timer, in milliseconds.
    pub interval_ms: u32,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Configuration could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Validation(String),
}

impl DashboardConfig {
    /// Parse `toml`, apply overrides from `lookup`, then validate.
    ///
    /// Override keys: `fleet-url`, `history-url-prefix`, `poll-interval-ms`,
    /// `request-timeout-ms`, `log`. Numeric overrides that do not parse are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::Validation`] when the result is unusable.
    pub fn load(toml: &str, lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(toml)?;
        config.apply_overrides(lookup);
        config.validate()?;
        Ok(config)
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("fleet-url") {
            self.api.fleet_url = val;
        }
        if let Some(val) = lookup("history-url-prefix") {
            self.api.history_url_prefix = val;
        }
        if let Some(val) = lookup("poll-interval-ms") {
            match val.trim().parse() {
                Ok(ms) => self.polling.interval_ms = ms,
                Err(_) => tracing::warn!(value = %val, "ignoring unparseable poll-interval-ms"),
            }
        }
        if let Some(val) = lookup("request-timeout-ms") {
            match val.trim().parse() {
                Ok(ms) => self.api.request_timeout_ms = ms,
                Err(_) => tracing::warn!(value = %val, "ignoring unparseable request-timeout-ms"),
            }
        }
        if let Some(val) = lookup("log") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.api.fleet_url.trim().is_empty() {
            return Err(ConfigError::Validation("api.fleet_url must not be empty".to_string()));
        }
        if self.api.history_url_prefix.trim().is_empty() {
            return Err(ConfigError::Validation(
                "api.history_url_prefix must not be empty".to_string(),
            ));
        }
        if self.api.request_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "api.request_timeout_ms must be non-zero".to_string(),
            ));
        }
        if self.polling.interval_ms == 0 {
            return Err(ConfigError::Validation(
                "polling.interval_ms must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// History URL for `device`, with the id encoded as a path segment.
    #[must_use]
    pub fn history_url(&self, device: &DeviceId) -> String {
        format!(
            "{}{}",
            self.api.history_url_prefix,
            encode_path_segment(device.as_str())
        )
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            fleet_url: "/cfd/get-latest-all".to_string(),
            history_url_prefix: "/cfd/get-last-50/".to_string(),
            request_timeout_ms: 10_000,
        }
    }
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self { interval_ms: 4_000 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

/// Percent-encode the characters that would change a URL path's meaning.
fn encode_path_segment(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('/', "%2F")
        .replace('?', "%3F")
        .replace('#', "%23")
        .replace(' ', "%20")
}
