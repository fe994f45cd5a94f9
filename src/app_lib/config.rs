//! Client configuration: the API base URL and the request timeout.
//!
//! A build-time default is taken from `PROJECTDESK_API_BASE_URL` and can be
//! overridden at runtime through the process environment, so a single binary
//! can target different deployments. Configuration values are public; do not
//! store secrets here.

use super::errors::AppError;
use std::{env, time::Duration};

/// Default request timeout (milliseconds) applied to every HTTP call.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

pub const ENV_API_BASE_URL: &str = "PROJECTDESK_API_BASE_URL";
pub const ENV_TIMEOUT_MS: &str = "PROJECTDESK_TIMEOUT_MS";

/// Settings needed to build an [`ApiClient`](super::api::ApiClient).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub timeout: Duration,
}

impl AppConfig {
    /// Config for `api_base_url` with the default timeout.
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Loads config from build-time environment variables and applies runtime overrides.
    ///
    /// # Errors
    /// Returns `AppError::Config` if `PROJECTDESK_TIMEOUT_MS` is set but is not a
    /// positive number of milliseconds.
    pub fn load() -> Result<Self, AppError> {
        let api_base_url = option_env!("PROJECTDESK_API_BASE_URL").unwrap_or("");

        let mut config = Self::new(api_base_url);
        apply_runtime_overrides(&mut config, runtime_config()?);

        Ok(config)
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    timeout_ms: Option<u64>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
    if let Some(value) = runtime.timeout_ms {
        config.timeout = Duration::from_millis(value);
    }
}

fn runtime_config() -> Result<RuntimeConfig, AppError> {
    let timeout_ms = match read_runtime_value(ENV_TIMEOUT_MS) {
        Some(value) => Some(parse_timeout_ms(&value).ok_or_else(|| {
            AppError::Config(format!(
                "{ENV_TIMEOUT_MS} must be a positive number of milliseconds, got {value:?}"
            ))
        })?),
        None => None,
    };

    Ok(RuntimeConfig {
        api_base_url: read_runtime_value(ENV_API_BASE_URL),
        timeout_ms,
    })
}

fn read_runtime_value(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .and_then(|value| normalize_runtime_value(&value))
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

// zero would disable the timeout entirely
fn parse_timeout_ms(value: &str) -> Option<u64> {
    value.parse::<u64>().ok().filter(|ms| *ms > 0)
}
