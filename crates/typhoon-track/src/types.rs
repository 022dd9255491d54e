//! Track data exchanged with the tracker API.

use serde::{Deserialize, Serialize};

/// A forecast typhoon track as parallel arrays, one entry per forecast time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TyphoonTrack {
    pub times: Vec<String>,
    pub lats: Vec<f64>,
    pub lons: Vec<f64>,
    /// Mean sea-level pressure.
    pub msls: Vec<f64>,
    /// Maximum wind speed.
    pub winds: Vec<f64>,
}

impl TyphoonTrack {
    /// Number of forecast times.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// The track sampled at `index`, or `None` past the end of any array.
    pub fn point(&self, index: usize) -> Option<TrackPoint> {
        Some(TrackPoint {
            lat: *self.lats.get(index)?,
            lon: *self.lons.get(index)?,
            time: self.times.get(index)?.clone(),
            msl: *self.msls.get(index)?,
            wind: *self.winds.get(index)?,
        })
    }
}

/// One position along a track.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackPoint {
    pub lat: f64,
    pub lon: f64,
    pub time: String,
    pub msl: f64,
    pub wind: f64,
}

/// Body of a tracker request: where and when the cyclone is seeded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackRequest {
    pub init_lat: f64,
    pub init_lon: f64,
    pub init_time_index: usize,
}

/// Body of a tracker response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrackResponse {
    pub track: TyphoonTrack,
}
