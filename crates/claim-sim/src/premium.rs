//! Premium quoting.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::config::ClaimConfig;
use crate::params::SimulationParams;

/// Outcome of a premium quote.
///
/// Displays as the string the simulation shows to the user.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum PremiumQuote {
    /// No simulation has produced a quote yet.
    #[default]
    Pending,
    /// Location or intensity missing.
    NotAvailable,
    /// Location outside the insured region.
    OutOfCoverage,
    /// Premium in yuan.
    Amount(f64),
}

impl PremiumQuote {
    pub fn amount(&self) -> Option<f64> {
        match self {
            Self::Amount(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for PremiumQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "待定"),
            Self::NotAvailable => write!(f, "N/A"),
            Self::OutOfCoverage => write!(f, "不在承保范围"),
            Self::Amount(value) => write!(f, "¥ {:.2}", value),
        }
    }
}

impl Serialize for PremiumQuote {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Quote the premium for `params`.
///
/// Base premium times the intensity factor, loaded by
/// `1 + (|lat - centre lat| + |lon - centre lon|) / 10` inside the insured
/// region. Pure: depends only on its arguments.
pub fn calculate_premium(params: &SimulationParams, config: &ClaimConfig) -> PremiumQuote {
    let (Some(lat), Some(lon)) = (params.lat, params.lon) else {
        return PremiumQuote::NotAvailable;
    };
    let Some(level_factor) = config.level_factors.factor_for(params.typhoon_level) else {
        return PremiumQuote::NotAvailable;
    };

    let region = &config.insured_region;
    if !region.contains_point(lon, lat) {
        return PremiumQuote::OutOfCoverage;
    }

    let (center_lon, center_lat) = region.center();
    let risk_factor = 1.0 + ((lat - center_lat).abs() + (lon - center_lon).abs()) / 10.0;

    PremiumQuote::Amount(config.base_premium * level_factor * risk_factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::TyphoonLevel;

    fn at(lat: f64, lon: f64, level: TyphoonLevel) -> SimulationParams {
        SimulationParams {
            lat: Some(lat),
            lon: Some(lon),
            typhoon_level: level,
            ..Default::default()
        }
    }

    #[test]
    fn test_center_point_level7_8() {
        let quote = calculate_premium(&at(28.5, 121.5, TyphoonLevel::Level7To8), &ClaimConfig::default());
        assert_eq!(quote.to_string(), "¥ 1500.00");
    }

    #[test]
    fn test_outside_region_any_level() {
        for level in [
            TyphoonLevel::Level5To6,
            TyphoonLevel::Level7To8,
            TyphoonLevel::Level9To10,
        ] {
            let quote = calculate_premium(&at(10.0, 10.0, level), &ClaimConfig::default());
            assert_eq!(quote, PremiumQuote::OutOfCoverage);
            assert_eq!(quote.to_string(), "不在承保范围");
        }
    }

    #[test]
    fn test_missing_inputs() {
        let config = ClaimConfig::default();
        let mut params = at(28.5, 121.5, TyphoonLevel::None);
        assert_eq!(calculate_premium(&params, &config).to_string(), "N/A");

        params.typhoon_level = TyphoonLevel::Level5To6;
        params.lon = None;
        assert_eq!(calculate_premium(&params, &config), PremiumQuote::NotAvailable);
    }

    #[test]
    fn test_risk_loading() {
        // |28 - 28.5| + |122 - 121.5| = 1.0 -> factor 1.1
        let quote = calculate_premium(&at(28.0, 122.0, TyphoonLevel::Level9To10), &ClaimConfig::default());
        assert!((quote.amount().unwrap() - 2200.0).abs() < 1e-9);
        assert_eq!(quote.to_string(), "¥ 2200.00");
    }

    #[test]
    fn test_region_edges_inclusive() {
        // corner: 1.5 + 1.5 = 3.0 -> factor 1.3
        let quote = calculate_premium(&at(30.0, 123.0, TyphoonLevel::Level5To6), &ClaimConfig::default());
        assert_eq!(quote.to_string(), "¥ 1300.00");
    }

    #[test]
    fn test_serializes_as_display_string() {
        let json = serde_json::to_string(&PremiumQuote::Amount(1234.5)).unwrap();
        assert_eq!(json, "\"¥ 1234.50\"");
        assert_eq!(PremiumQuote::default().to_string(), "待定");
    }
}
