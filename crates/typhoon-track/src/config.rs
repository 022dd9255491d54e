//! Tracker API client configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Where the tracker API lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackClientConfig {
    /// Base URL; requests go to `{base_url}/variables/trackers`.
    pub base_url: String,

    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for TrackClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: 30,
        }
    }
}

impl TrackClientConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("TRACKER_API_URL") {
            config.base_url = url;
        }

        if let Ok(val) = std::env::var("TRACKER_TIMEOUT_SECS") {
            if let Ok(secs) = val.parse() {
                config.timeout_secs = secs;
            }
        }

        config
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(format!("base_url must be an http(s) URL, got '{}'", self.base_url));
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be > 0".to_string());
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Full URL of the tracker endpoint.
    pub fn trackers_url(&self) -> String {
        format!("{}/variables/trackers", self.base_url.trim_end_matches('/'))
    }
}
