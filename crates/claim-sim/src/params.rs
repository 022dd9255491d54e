//! Simulation input parameters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use typhoon_common::RiskError;

/// Forecast typhoon intensity band (Beaufort-style level ranges).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TyphoonLevel {
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "level5-6")]
    Level5To6,
    #[serde(rename = "level7-8")]
    Level7To8,
    #[serde(rename = "level9-10")]
    Level9To10,
}

impl TyphoonLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Level5To6 => "level5-6",
            Self::Level7To8 => "level7-8",
            Self::Level9To10 => "level9-10",
        }
    }
}

impl FromStr for TyphoonLevel {
    type Err = RiskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "level5-6" | "5-6" => Ok(Self::Level5To6),
            "level7-8" | "7-8" => Ok(Self::Level7To8),
            "level9-10" | "9-10" => Ok(Self::Level9To10),
            other => Err(RiskError::invalid_parameter(
                "typhoon_level",
                format!("unknown level '{}'", other),
            )),
        }
    }
}

impl fmt::Display for TyphoonLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How far ahead of landfall the forecast was issued.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PredictTime {
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "oneWeek")]
    OneWeek,
    #[serde(rename = "twoWeeks")]
    TwoWeeks,
}

impl PredictTime {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::OneWeek => "oneWeek",
            Self::TwoWeeks => "twoWeeks",
        }
    }
}

impl FromStr for PredictTime {
    type Err = RiskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "oneweek" | "one-week" | "1w" => Ok(Self::OneWeek),
            "twoweeks" | "two-weeks" | "2w" => Ok(Self::TwoWeeks),
            other => Err(RiskError::invalid_parameter(
                "predict_time",
                format!("unknown lead time '{}'", other),
            )),
        }
    }
}

impl fmt::Display for PredictTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Caller-supplied inputs of one simulation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulationParams {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub typhoon_level: TyphoonLevel,
    pub impact_region: bool,
    pub predict_time: PredictTime,
}

impl SimulationParams {
    /// Every field the evaluation needs has been provided.
    pub fn is_complete(&self) -> bool {
        self.lat.is_some()
            && self.lon.is_some()
            && self.typhoon_level != TyphoonLevel::None
            && self.predict_time != PredictTime::None
    }
}

/// A shallow partial update of [`SimulationParams`].
///
/// Absent fields are left alone. `lat`/`lon` are doubly optional so an
/// update can also clear them (`Some(None)`, or JSON `null`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParamsUpdate {
    #[serde(deserialize_with = "present")]
    pub lat: Option<Option<f64>>,
    #[serde(deserialize_with = "present")]
    pub lon: Option<Option<f64>>,
    pub typhoon_level: Option<TyphoonLevel>,
    pub impact_region: Option<bool>,
    pub predict_time: Option<PredictTime>,
}

/// Marks a field as present even when its value is `null`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl ParamsUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn location(mut self, lat: f64, lon: f64) -> Self {
        self.lat = Some(Some(lat));
        self.lon = Some(Some(lon));
        self
    }

    pub fn typhoon_level(mut self, level: TyphoonLevel) -> Self {
        self.typhoon_level = Some(level);
        self
    }

    pub fn impact_region(mut self, hit: bool) -> Self {
        self.impact_region = Some(hit);
        self
    }

    pub fn predict_time(mut self, time: PredictTime) -> Self {
        self.predict_time = Some(time);
        self
    }

    /// Merge the present fields into `params`.
    pub fn apply(self, params: &mut SimulationParams) {
        if let Some(lat) = self.lat {
            params.lat = lat;
        }
        if let Some(lon) = self.lon {
            params.lon = lon;
        }
        if let Some(level) = self.typhoon_level {
            params.typhoon_level = level;
        }
        if let Some(hit) = self.impact_region {
            params.impact_region = hit;
        }
        if let Some(time) = self.predict_time {
            params.predict_time = time;
        }
    }
}
