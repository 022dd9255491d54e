//! Common test fixtures for typhoon risk tests.
//!
//! Plain tuples and JSON so that every crate can use them without this
//! crate depending on the crates under test.

use std::io::Write;

use tempfile::NamedTempFile;

/// Dimensions of the producer's global grid.
pub mod grid {
    pub const ROWS: usize = 720;
    pub const COLS: usize = 1440;
    pub const CELL_DEGREES: f64 = 0.25;
}

/// Points relative to the insured region `lat 27..30, lon 120..123`.
pub mod points {
    /// (lat, lon) at the centre of the insured region.
    pub const INSURED_CENTER: (f64, f64) = (28.5, 121.5);

    /// (lat, lon) on the north-east corner; edges are inside.
    pub const INSURED_NE_CORNER: (f64, f64) = (30.0, 123.0);

    /// (lat, lon) inside the region, off-centre.
    pub const INSURED_OFF_CENTER: (f64, f64) = (28.0, 122.0);

    /// (lat, lon) well outside the region.
    pub const OUTSIDE: (f64, f64) = (10.0, 10.0);
}

/// A tracker API response body with a three-point track.
pub fn sample_track_response() -> serde_json::Value {
    serde_json::json!({
        "track": {
            "times": ["2024-09-14T00:00", "2024-09-14T06:00", "2024-09-14T12:00"],
            "lats": [18.5, 19.6, 20.9],
            "lons": [130.2, 128.9, 127.4],
            "msls": [99800.0, 99350.0, 98700.0],
            "winds": [25.0, 28.5, 33.0]
        }
    })
}

/// Write `value` to a temporary JSON file that lives as long as the handle.
pub fn write_json_fixture(value: &serde_json::Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    let body = serde_json::to_vec(value).expect("serialize fixture");
    file.write_all(&body).expect("write fixture");
    file.flush().expect("flush fixture");
    file
}
