//! Configuration for the claim simulation.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;
use typhoon_common::{BoundingBox, RiskError, RiskResult};

use crate::params::TyphoonLevel;

/// Configuration for the claim simulation and its premium quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClaimConfig {
    /// Delay between automatic step advances in milliseconds.
    pub step_interval_ms: u64,

    /// Premium before any loading, in yuan.
    pub base_premium: f64,

    /// Multiplier per forecast intensity band.
    pub level_factors: LevelFactors,

    /// Region covered by the policy. Locations outside are not quoted;
    /// inside, the premium grows with distance from its centre.
    pub insured_region: BoundingBox,
}

impl Default for ClaimConfig {
    fn default() -> Self {
        Self {
            step_interval_ms: 500,
            base_premium: 1000.0,
            level_factors: LevelFactors::default(),
            insured_region: BoundingBox::new(120.0, 27.0, 123.0, 30.0),
        }
    }
}

impl ClaimConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("CLAIM_STEP_INTERVAL_MS") {
            if let Ok(ms) = val.parse() {
                config.step_interval_ms = ms;
            }
        }

        if let Ok(val) = std::env::var("CLAIM_BASE_PREMIUM") {
            if let Ok(premium) = val.parse() {
                config.base_premium = premium;
            }
        }

        if let Ok(val) = std::env::var("CLAIM_INSURED_REGION") {
            match BoundingBox::from_csv(&val) {
                Ok(bbox) => config.insured_region = bbox,
                Err(e) => warn!(error = %e, "Ignoring CLAIM_INSURED_REGION"),
            }
        }

        config
    }

    /// Parse a YAML document. Missing keys take their defaults.
    pub fn from_yaml_str(yaml: &str) -> RiskResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate().map_err(RiskError::invalid_config)?;
        Ok(config)
    }

    /// Load and validate a YAML configuration file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> RiskResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&content)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.step_interval_ms == 0 {
            return Err("step_interval_ms must be > 0".to_string());
        }

        if !(self.base_premium.is_finite() && self.base_premium > 0.0) {
            return Err("base_premium must be a positive number".to_string());
        }

        self.level_factors.validate()?;

        if self.insured_region.width() <= 0.0 || self.insured_region.height() <= 0.0 {
            return Err("insured_region must have a positive width and height".to_string());
        }

        Ok(())
    }

    pub fn step_interval(&self) -> Duration {
        Duration::from_millis(self.step_interval_ms)
    }
}

/// Premium multiplier per intensity band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelFactors {
    #[serde(rename = "level5-6")]
    pub level5_6: f64,
    #[serde(rename = "level7-8")]
    pub level7_8: f64,
    #[serde(rename = "level9-10")]
    pub level9_10: f64,
}

impl Default for LevelFactors {
    fn default() -> Self {
        Self {
            level5_6: 1.0,
            level7_8: 1.5,
            level9_10: 2.0,
        }
    }
}

impl LevelFactors {
    /// Multiplier for `level`; `None` for [`TyphoonLevel::None`].
    pub fn factor_for(&self, level: TyphoonLevel) -> Option<f64> {
        match level {
            TyphoonLevel::None => None,
            TyphoonLevel::Level5To6 => Some(self.level5_6),
            TyphoonLevel::Level7To8 => Some(self.level7_8),
            TyphoonLevel::Level9To10 => Some(self.level9_10),
        }
    }

    fn validate(&self) -> Result<(), String> {
        for (name, factor) in [
            ("level5-6", self.level5_6),
            ("level7-8", self.level7_8),
            ("level9-10", self.level9_10),
        ] {
            if !(factor.is_finite() && factor > 0.0) {
                return Err(format!("level factor {} must be a positive number", name));
            }
        }
        Ok(())
    }
}
