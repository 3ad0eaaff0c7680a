//! Runtime configuration loaded from an optional TOML file.
//!
//! Only run-time knobs live here. The domain chain sets and the
//! supplementary endpoint table are compiled into [`chain_endpoints`].
//!
//! ```toml
//! registry_url = "https://chainid.network/chains.json"
//! max_drift_secs = 60
//! request_timeout_secs = 5
//! registry_timeout_secs = 30
//! on_config_mismatch = "abort"   # or "skip"
//! ```

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{CollectError, Result};

/// Public chain registry queried for candidate endpoints.
pub const DEFAULT_REGISTRY_URL: &str = "https://chainid.network/chains.json";

/// Largest accepted gap between system time and the latest block timestamp.
pub const DEFAULT_MAX_DRIFT_SECS: u64 = 60;

/// Per-request timeout for health-check RPC calls.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 5;

/// Timeout for the registry download, which is several megabytes.
pub const DEFAULT_REGISTRY_TIMEOUT_SECS: u64 = 30;

/// What to do when an endpoint reports a different chain than the one it is
/// listed under.
///
/// A mismatch means a maintainer mapped an endpoint to the wrong chain,
/// which is a configuration error rather than endpoint flakiness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnConfigMismatch {
    /// Fail the whole domain run and write nothing.
    #[default]
    Abort,
    /// Log the mismatch and drop the endpoint like any unhealthy one.
    #[serde(alias = "skip")]
    SkipEndpoint,
}

impl std::str::FromStr for OnConfigMismatch {
    type Err = CollectError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "abort" => Ok(Self::Abort),
            "skip" | "skip_endpoint" | "skip-endpoint" => Ok(Self::SkipEndpoint),
            other => Err(CollectError::Config(format!(
                "invalid on-config-mismatch policy `{other}` (expected `abort` or `skip`)"
            ))),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Chain registry URL.
    pub registry_url: String,
    /// Maximum allowed clock drift of the latest block, in seconds.
    pub max_drift_secs: u64,
    /// Timeout applied to each health-check request, in seconds.
    pub request_timeout_secs: u64,
    /// Timeout for the registry request, in seconds.
    pub registry_timeout_secs: u64,
    /// Handling of chain ID mismatches.
    pub on_config_mismatch: OnConfigMismatch,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            registry_url: DEFAULT_REGISTRY_URL.to_owned(),
            max_drift_secs: DEFAULT_MAX_DRIFT_SECS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            registry_timeout_secs: DEFAULT_REGISTRY_TIMEOUT_SECS,
            on_config_mismatch: OnConfigMismatch::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// Returns [`Config::default`] if the file does not exist,
    /// allowing the binary to work without any config.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text)
            .map_err(|e| CollectError::Config(format!("parsing {}: {e}", path.display())))
    }

    /// Per-request timeout as a [`Duration`].
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Registry request timeout as a [`Duration`].
    #[must_use]
    pub const fn registry_timeout(&self) -> Duration {
        Duration::from_secs(self.registry_timeout_secs)
    }
}
