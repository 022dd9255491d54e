//! Geometry of the regular global lat/lon grid used for weather fields.

use crate::BoundingBox;
use serde::{Deserialize, Serialize};

/// Cell size in degrees along each axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellSize {
    pub lat: f64,
    pub lon: f64,
}

/// Coordinates of the grid's top-left corner in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridOrigin {
    pub lat: f64,
    pub lon: f64,
}

/// A regular global grid whose rows run north to south and whose columns,
/// once canonicalised, run west to east starting at -180°.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlobalGrid {
    /// Number of rows (latitude direction)
    pub rows: usize,
    /// Number of columns (longitude direction)
    pub cols: usize,
    pub cell_size: CellSize,
    pub origin: GridOrigin,
}

impl GlobalGrid {
    /// The 0.25° global grid: 720 rows from 90° down to -89.75°,
    /// 1440 columns from -180° to 179.75°.
    pub const QUARTER_DEGREE: GlobalGrid = GlobalGrid {
        rows: 720,
        cols: 1440,
        cell_size: CellSize {
            lat: 0.25,
            lon: 0.25,
        },
        origin: GridOrigin {
            lat: 90.0,
            lon: -180.0,
        },
    };

    /// Total number of grid points.
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    /// Check if grid is empty.
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Latitude of every row, descending from the origin.
    pub fn latitudes(&self) -> Vec<f64> {
        (0..self.rows)
            .map(|i| self.origin.lat - i as f64 * self.cell_size.lat)
            .collect()
    }

    /// Longitude of every column, ascending from the origin.
    pub fn longitudes(&self) -> Vec<f64> {
        (0..self.cols)
            .map(|j| self.origin.lon + j as f64 * self.cell_size.lon)
            .collect()
    }

    /// Extent covered by the first and last grid points.
    pub fn extent(&self) -> BoundingBox {
        let south = self.origin.lat - (self.rows.saturating_sub(1)) as f64 * self.cell_size.lat;
        let east = self.origin.lon + (self.cols.saturating_sub(1)) as f64 * self.cell_size.lon;
        BoundingBox::new(self.origin.lon, south, east, self.origin.lat)
    }

    /// Source column feeding canonical column `col` when the source axis
    /// runs 0..360° and the canonical axis runs -180..180°.
    ///
    /// Only valid for an even column count spanning exactly 360°.
    pub fn rotated_source_column(&self, col: usize) -> usize {
        (col + self.cols / 2) % self.cols
    }

    /// Row/column of the cell containing `(lat, lon)`.
    ///
    /// `None` for a non-finite coordinate. Otherwise the result may lie
    /// outside the grid; callers bounds-check it.
    pub fn cell_for_coordinate(&self, lat: f64, lon: f64) -> Option<(i64, i64)> {
        if !lat.is_finite() || !lon.is_finite() {
            return None;
        }
        let lon = normalize_longitude(lon);
        let row = ((self.origin.lat - lat) / self.cell_size.lat).floor() as i64;
        let col = ((lon - self.origin.lon) / self.cell_size.lon).floor() as i64;
        Some((row, col))
    }
}

/// Wrap a longitude into `[-180, 180)`.
pub fn normalize_longitude(lon: f64) -> f64 {
    (lon + 180.0).rem_euclid(360.0) - 180.0
}
