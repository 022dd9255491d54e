//! Common types and utilities shared across the typhoon risk crates.

pub mod bbox;
pub mod error;
pub mod grid;

pub use bbox::{BoundingBox, RadianRectangle};
pub use error::{RiskError, RiskResult};
pub use grid::{normalize_longitude, CellSize, GlobalGrid, GridOrigin};
