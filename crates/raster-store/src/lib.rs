//! Canonical global raster store.
//!
//! This crate holds one raw global weather field, as delivered by the
//! producer, and derives from it a single query-ready raster in a
//! `[-180, 180)` longitude frame. It enables:
//!
//! - **Validation**: only the 720 x 1440, 0.25° global grid is accepted
//! - **Canonicalisation**: rows are rotated so column 0 sits at -180°
//! - **Queries**: cell and coordinate lookups, summary statistics
//! - **Rendering**: a radians-rectangle descriptor for globe renderers
//!
//! # Architecture
//!
//! ```text
//! RawGrid (0..360° columns, 2D or flat)
//!      │
//!      ▼
//! RasterStore::set_raw_data(raw)
//!      │
//!      ▼
//! RasterStore::transform()
//!      │
//!      ├─► Shape check (warn + keep previous state on mismatch)
//!      │
//!      ├─► Flatten row-major, rotate each row by cols/2
//!      │
//!      └─► Swap in a fully built CanonicalRaster
//!               │
//!               ▼
//!     value_at_coordinate / raster_statistics / renderable_raster_descriptor
//! ```
//!
//! # Example
//!
//! ```ignore
//! use raster_store::{RasterStore, RawGrid};
//!
//! let mut store = RasterStore::default();
//! store.set_raw_data(RawGrid::from_json_file("surf_2t.json")?);
//! store.transform();
//!
//! let temperature = store.value_at_coordinate(28.5, 121.5);
//! ```

pub mod config;
pub mod statistics;
pub mod store;
pub mod types;

// Re-export commonly used types at crate root
pub use config::RasterStoreConfig;
pub use statistics::compute_statistics;
pub use store::{RasterStore, TransformOutcome};
pub use types::{
    CanonicalRaster, RasterLayer, RasterMetadata, RasterStatistics, RawGrid, RawValues,
    RenderableRaster, SourceLayout,
};
