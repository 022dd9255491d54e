//! Bounding box types and operations.

use serde::{Deserialize, Serialize};

/// A geographic bounding box in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    /// Create a new bounding box from corner coordinates.
    pub fn new(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        Self {
            min_lon,
            min_lat,
            max_lon,
            max_lat,
        }
    }

    /// Build from an extent array ordered `[west, south, east, north]`.
    pub fn from_extent(extent: [f64; 4]) -> Self {
        Self::new(extent[0], extent[1], extent[2], extent[3])
    }

    /// Extent array ordered `[west, south, east, north]`.
    pub fn to_extent(&self) -> [f64; 4] {
        [self.min_lon, self.min_lat, self.max_lon, self.max_lat]
    }

    /// Parse a `"west,south,east,north"` string.
    pub fn from_csv(s: &str) -> Result<Self, BboxParseError> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(BboxParseError::InvalidFormat(s.to_string()));
        }

        let mut values = [0.0; 4];
        for (slot, part) in values.iter_mut().zip(&parts) {
            *slot = part
                .parse()
                .map_err(|_| BboxParseError::InvalidNumber(part.to_string()))?;
        }

        Ok(Self::from_extent(values))
    }

    /// Width in degrees.
    pub fn width(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// Height in degrees.
    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Center point as `(lon, lat)`.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lon + self.max_lon) / 2.0,
            (self.min_lat + self.max_lat) / 2.0,
        )
    }

    /// Check if a point is contained within this bbox. Edges are inclusive.
    pub fn contains_point(&self, lon: f64, lat: f64) -> bool {
        lon >= self.min_lon && lon <= self.max_lon && lat >= self.min_lat && lat <= self.max_lat
    }

    /// Convert to a rectangle in radians, the form globe renderers consume.
    pub fn to_radians(&self) -> RadianRectangle {
        RadianRectangle {
            west: self.min_lon.to_radians(),
            south: self.min_lat.to_radians(),
            east: self.max_lon.to_radians(),
            north: self.max_lat.to_radians(),
        }
    }
}

/// A west/south/east/north rectangle expressed in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadianRectangle {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

#[derive(Debug, thiserror::Error)]
pub enum BboxParseError {
    #[error("Invalid bounding box format: {0}. Expected 'west,south,east,north'")]
    InvalidFormat(String),

    #[error("Invalid number in bounding box: {0}")]
    InvalidNumber(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_csv_bbox() {
        let bbox = BoundingBox::from_csv("120.0,27.0,123.0,30.0").unwrap();
        assert_eq!(bbox.min_lon, 120.0);
        assert_eq!(bbox.min_lat, 27.0);
        assert_eq!(bbox.max_lon, 123.0);
        assert_eq!(bbox.max_lat, 30.0);
    }

    #[test]
    fn test_to_radians() {
        let rect = BoundingBox::new(-180.0, -90.0, 180.0, 90.0).to_radians();
        assert!((rect.west + std::f64::consts::PI).abs() < 1e-12);
        assert!((rect.south + std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!((rect.east - std::f64::consts::PI).abs() < 1e-12);
        assert!((rect.north - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }
}
