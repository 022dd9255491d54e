//! Configuration for the raster store.

use serde::{Deserialize, Serialize};

/// Layer name used when the producer does not name its grid.
pub const DEFAULT_LAYER_NAME: &str = "surf_2t";

/// Configuration for the raster store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RasterStoreConfig {
    /// Name given to a canonical raster whose raw grid carries no name.
    pub default_layer_name: String,
}

impl Default for RasterStoreConfig {
    fn default() -> Self {
        Self {
            default_layer_name: DEFAULT_LAYER_NAME.to_string(),
        }
    }
}

impl RasterStoreConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("RASTER_DEFAULT_NAME") {
            if !val.trim().is_empty() {
                config.default_layer_name = val.trim().to_string();
            }
        }

        config
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.default_layer_name.trim().is_empty() {
            return Err("default_layer_name must not be empty".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RasterStoreConfig::default();
        assert_eq!(config.default_layer_name, "surf_2t");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let config = RasterStoreConfig {
            default_layer_name: "  ".to_string(),
        };
        assert!(config.validate().is_err());
    }
}
