use std::{
    path::Path,
    time::Duration,
};

use serde::{
    Deserialize,
    Serialize,
};
use tracing::info;
use url::Url;

use crate::{
    core::KardiaError,
    persistence::{
        load_json,
        load_json_or_default,
        save_json,
    },
};

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/predict";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where predictions are sent and how long a request may take.
///
/// `timeout_secs: null` (or `0`) disables the request timeout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KardiaConfig {
    pub endpoint: String,
    pub timeout_secs: Option<u64>,
}

impl Default for KardiaConfig {
    fn default() -> Self {
        Self { endpoint: DEFAULT_ENDPOINT.to_string(), timeout_secs: Some(DEFAULT_TIMEOUT_SECS) }
    }
}

impl KardiaConfig {
    pub fn load_from(path: &Path) -> Result<Self, KardiaError> {
        load_json(path)
    }

    /// Like `load_from`, but an unreadable or corrupt file yields defaults.
    pub fn load_or_default(path: &Path) -> Self {
        let config: Self = load_json_or_default(path);
        info!(endpoint = %config.endpoint, timeout_secs = ?config.timeout_secs, "Config loaded");
        config
    }

    pub fn save_to(&self, path: &Path) -> Result<(), KardiaError> {
        save_json(self, path)
    }

    pub fn endpoint_url(&self) -> Result<Url, KardiaError> {
        let invalid = |reason: String| KardiaError::InvalidEndpoint {
            endpoint: self.endpoint.clone(),
            reason,
        };

        let url = Url::parse(self.endpoint.trim()).map_err(|e| invalid(e.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(invalid(format!("unsupported scheme '{other}'"))),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.filter(|secs| *secs > 0).map(Duration::from_secs)
    }
}
