//! Core types for the raster store.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use typhoon_common::{CellSize, GridOrigin, RadianRectangle, RiskResult};

/// A raw grid as delivered by the producer.
///
/// Longitudes are assumed to run 0..359.75° east and latitudes 90..-89.75°.
/// Nothing is validated until [`crate::RasterStore::transform`] runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawGrid {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub data: Option<RawValues>,
    /// Arbitrary producer metadata, passed through untouched.
    #[serde(default)]
    pub params: Option<Value>,
}

impl RawGrid {
    /// Create a named grid from 2D rows.
    pub fn from_rows(name: impl Into<String>, rows: Vec<Vec<Option<f64>>>) -> Self {
        Self {
            name: Some(name.into()),
            data: Some(RawValues::Rows(rows)),
            params: None,
        }
    }

    /// Create a named grid from a flat row-major sequence.
    pub fn from_flat(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self {
            name: Some(name.into()),
            data: Some(RawValues::Flat(values)),
            params: None,
        }
    }

    /// Attach producer metadata.
    pub fn with_params(mut self, params: Value) -> Self {
        self.params = Some(params);
        self
    }

    /// Parse the producer JSON shape `{ "name", "data", "params" }`.
    pub fn from_json_str(json: &str) -> RiskResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a producer JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> RiskResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }
}

/// Raw grid values, either nested rows or one flat sequence.
///
/// `None` cells stand for JSON `null`. Any other JSON shape is kept as
/// [`RawValues::Unrecognized`] so loading succeeds and the transform skips it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValues {
    Rows(Vec<Vec<Option<f64>>>),
    Flat(Vec<Option<f64>>),
    Unrecognized(Value),
}

impl RawValues {
    /// `None` for an unrecognised shape.
    pub fn layout(&self) -> Option<SourceLayout> {
        match self {
            RawValues::Rows(_) => Some(SourceLayout::TwoDimensional),
            RawValues::Flat(_) => Some(SourceLayout::Flat),
            RawValues::Unrecognized(_) => None,
        }
    }
}

/// Dimensionality of the raw input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceLayout {
    TwoDimensional,
    Flat,
}

/// Axis description of the canonical raster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RasterMetadata {
    pub cell_size: CellSize,
    pub origin: GridOrigin,
    /// Row latitudes, descending from +90°.
    pub latitudes: Vec<f64>,
    /// Column longitudes, ascending from -180°.
    pub longitudes: Vec<f64>,
}

/// The validated, longitude-rotated raster every query reads from.
///
/// `data.len() == shape[0] * shape[1]`; missing cells are NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalRaster {
    pub name: String,
    pub data: Vec<f64>,
    /// `[rows, cols]`
    pub shape: [usize; 2],
    pub params: Option<Value>,
    /// `[west, south, east, north]` in degrees
    pub extent: [f64; 4],
    pub raster: RasterMetadata,
}

/// Read-only view of the whole canonical raster.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RasterLayer<'a> {
    pub name: &'a str,
    pub values: &'a [f64],
    pub dimensions: [usize; 2],
    pub extent: [f64; 4],
    pub raster: &'a RasterMetadata,
    pub metadata: Option<&'a Value>,
}

/// Raster bundle shaped for a 3D globe renderer.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RenderableRaster<'a> {
    pub values: &'a [f64],
    pub width: usize,
    pub height: usize,
    pub rectangle: RadianRectangle,
    pub raster: &'a RasterMetadata,
    pub metadata: Option<&'a Value>,
}

/// Summary statistics over the non-missing cells.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RasterStatistics {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Sorted element at index `count / 2`; never an averaged midpoint.
    pub median: f64,
    pub range: f64,
}
