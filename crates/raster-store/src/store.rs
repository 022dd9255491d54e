//! The raster store: one raw grid in, one canonical raster out.

use tracing::{debug, info, warn};
use typhoon_common::GlobalGrid;

use crate::config::RasterStoreConfig;
use crate::statistics::compute_statistics;
use crate::types::{
    CanonicalRaster, RasterLayer, RasterMetadata, RasterStatistics, RawGrid, RawValues,
    RenderableRaster, SourceLayout,
};

/// Result of a [`RasterStore::transform`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformOutcome {
    /// A new canonical raster replaced the previous one.
    Published { points: usize, layout: SourceLayout },
    /// No raw data was stored, or its shape was not rows or a flat array;
    /// nothing changed.
    Skipped,
    /// The raw grid had the wrong dimensions; nothing changed.
    ShapeMismatch { layout: SourceLayout },
}

/// Holds one raw grid and the canonical raster derived from it.
///
/// One instance per consumer session. All operations are synchronous and
/// the derived raster is replaced in a single assignment, so a query never
/// observes a mix of old and new state.
#[derive(Debug, Default)]
pub struct RasterStore {
    config: RasterStoreConfig,
    raw: Option<RawGrid>,
    canonical: Option<CanonicalRaster>,
}

impl RasterStore {
    /// The only grid the store accepts.
    pub const GRID: GlobalGrid = GlobalGrid::QUARTER_DEGREE;

    pub fn new(config: RasterStoreConfig) -> Self {
        Self {
            config,
            raw: None,
            canonical: None,
        }
    }

    /// Store `raw` verbatim. Validation happens in [`Self::transform`].
    pub fn set_raw_data(&mut self, raw: RawGrid) {
        self.raw = Some(raw);
    }

    pub fn raw_data(&self) -> Option<&RawGrid> {
        self.raw.as_ref()
    }

    pub fn canonical(&self) -> Option<&CanonicalRaster> {
        self.canonical.as_ref()
    }

    /// Validate, flatten and rotate the stored raw grid into the canonical
    /// `[-180, 180)` frame.
    pub fn transform(&mut self) -> TransformOutcome {
        let grid = Self::GRID;
        let Some(raw) = self.raw.as_ref() else {
            return TransformOutcome::Skipped;
        };
        let Some(values) = raw.data.as_ref() else {
            return TransformOutcome::Skipped;
        };
        let Some(layout) = values.layout() else {
            debug!("Raw data is neither rows nor a flat array, nothing to transform");
            return TransformOutcome::Skipped;
        };

        let Some(data) = rotate_to_canonical(values, &grid) else {
            match values {
                RawValues::Rows(rows) => warn!(
                    expected_rows = grid.rows,
                    expected_cols = grid.cols,
                    rows = rows.len(),
                    first_row_cols = rows.first().map(Vec::len).unwrap_or(0),
                    "Raster dimensions do not match, keeping previous raster"
                ),
                RawValues::Flat(flat) => warn!(
                    expected_len = grid.len(),
                    len = flat.len(),
                    "Flat raster length is wrong, keeping previous raster"
                ),
                RawValues::Unrecognized(_) => {}
            }
            return TransformOutcome::ShapeMismatch { layout };
        };

        let name = raw
            .name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.config.default_layer_name)
            .to_string();

        let canonical = CanonicalRaster {
            name,
            data,
            shape: [grid.rows, grid.cols],
            params: raw.params.clone(),
            extent: grid.extent().to_extent(),
            raster: RasterMetadata {
                cell_size: grid.cell_size,
                origin: grid.origin,
                latitudes: grid.latitudes(),
                longitudes: grid.longitudes(),
            },
        };

        let points = canonical.data.len();
        info!(
            name = %canonical.name,
            total_points = points,
            layout = ?layout,
            "Raster transformed, longitudes rotated to -180..180"
        );

        self.canonical = Some(canonical);
        TransformOutcome::Published { points, layout }
    }

    /// Read-only view of the whole canonical raster.
    pub fn full_raster_layer(&self) -> Option<RasterLayer<'_>> {
        let raster = self.canonical.as_ref()?;
        Some(RasterLayer {
            name: &raster.name,
            values: &raster.data,
            dimensions: raster.shape,
            extent: raster.extent,
            raster: &raster.raster,
            metadata: raster.params.as_ref(),
        })
    }

    pub fn raster_statistics(&self) -> Option<RasterStatistics> {
        compute_statistics(&self.canonical.as_ref()?.data)
    }

    /// Value at `(row, col)` of the canonical raster.
    ///
    /// `None` when there is no raster, the cell is outside the grid, or the
    /// cell is missing.
    pub fn value_at_raster_cell(&self, row: i64, col: i64) -> Option<f64> {
        let raster = self.canonical.as_ref()?;
        let [rows, cols] = raster.shape;
        if row < 0 || col < 0 || row as usize >= rows || col as usize >= cols {
            return None;
        }

        let value = *raster.data.get(row as usize * cols + col as usize)?;
        (!value.is_nan()).then_some(value)
    }

    /// Value of the cell containing `(lat, lon)`. Longitude wraps; NaN or
    /// infinite inputs find nothing.
    pub fn value_at_coordinate(&self, lat: f64, lon: f64) -> Option<f64> {
        let raster = self.canonical.as_ref()?;
        let lookup = GlobalGrid {
            rows: raster.shape[0],
            cols: raster.shape[1],
            cell_size: raster.raster.cell_size,
            origin: raster.raster.origin,
        };
        let Some((row, col)) = lookup.cell_for_coordinate(lat, lon) else {
            debug!(lat, lon, "Coordinate lookup with non-finite input");
            return None;
        };
        debug!(lat, lon, row, col, "Coordinate lookup");
        self.value_at_raster_cell(row, col)
    }

    /// Values, dimensions and a radians rectangle for a globe renderer.
    pub fn renderable_raster_descriptor(&self) -> Option<RenderableRaster<'_>> {
        let layer = self.full_raster_layer()?;
        let [rows, cols] = layer.dimensions;
        let bbox = typhoon_common::BoundingBox::from_extent(layer.extent);

        Some(RenderableRaster {
            values: layer.values,
            width: cols,
            height: rows,
            rectangle: bbox.to_radians(),
            raster: layer.raster,
            metadata: layer.metadata,
        })
    }

    /// Drop the canonical raster. The raw grid is kept.
    pub fn reset(&mut self) {
        self.canonical = None;
    }
}

/// Flatten `values` row-major and rotate every row by half its width.
///
/// Returns `None` if the values do not match `grid`.
fn rotate_to_canonical(values: &RawValues, grid: &GlobalGrid) -> Option<Vec<f64>> {
    let cols = grid.cols;
    let cell = |v: Option<f64>| v.unwrap_or(f64::NAN);
    let mut out = Vec::with_capacity(grid.len());

    match values {
        RawValues::Rows(rows) => {
            if rows.len() != grid.rows || rows.iter().any(|row| row.len() != cols) {
                return None;
            }
            for row in rows {
                out.extend((0..cols).map(|j| cell(row[grid.rotated_source_column(j)])));
            }
        }
        RawValues::Flat(flat) => {
            if flat.len() != grid.len() {
                return None;
            }
            for row in flat.chunks_exact(cols) {
                out.extend((0..cols).map(|j| cell(row[grid.rotated_source_column(j)])));
            }
        }
        RawValues::Unrecognized(_) => return None,
    }

    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(value: f64) -> RawGrid {
        RawGrid::from_flat("const", vec![Some(value); RasterStore::GRID.len()])
    }

    #[test]
    fn test_transform_without_raw_is_skipped() {
        let mut store = RasterStore::default();
        assert_eq!(store.transform(), TransformOutcome::Skipped);
        assert!(store.canonical().is_none());
    }

    #[test]
    fn test_transform_without_values_is_skipped() {
        let mut store = RasterStore::default();
        store.set_raw_data(RawGrid::default());
        assert_eq!(store.transform(), TransformOutcome::Skipped);
    }

    #[test]
    fn test_default_name_applied() {
        let mut store = RasterStore::default();
        let mut raw = filled(1.0);
        raw.name = None;
        store.set_raw_data(raw);
        store.transform();
        assert_eq!(store.canonical().unwrap().name, "surf_2t");

        let mut raw = filled(1.0);
        raw.name = Some(String::new());
        store.set_raw_data(raw);
        store.transform();
        assert_eq!(store.canonical().unwrap().name, "surf_2t");
    }

    #[test]
    fn test_custom_default_name() {
        let mut store = RasterStore::new(RasterStoreConfig {
            default_layer_name: "msl".to_string(),
        });
        store.set_raw_data(RawGrid {
            name: None,
            ..filled(2.0)
        });
        store.transform();
        assert_eq!(store.canonical().unwrap().name, "msl");
    }

    #[test]
    fn test_reset_keeps_raw() {
        let mut store = RasterStore::default();
        store.set_raw_data(filled(3.0));
        store.transform();
        store.reset();
        assert!(store.canonical().is_none());
        assert!(store.raw_data().is_some());
        assert!(store.full_raster_layer().is_none());

        // the raw grid can be re-derived after a reset
        assert!(matches!(
            store.transform(),
            TransformOutcome::Published { .. }
        ));
    }

    #[test]
    fn test_missing_cell_reads_as_none() {
        let mut values = vec![Some(1.0); RasterStore::GRID.len()];
        // raw column 720 lands in canonical column 0
        values[720] = None;
        let mut store = RasterStore::default();
        store.set_raw_data(RawGrid::from_flat("gappy", values));
        store.transform();
        assert_eq!(store.value_at_raster_cell(0, 0), None);
        assert_eq!(store.value_at_raster_cell(0, 1), Some(1.0));
        assert_eq!(store.raster_statistics().unwrap().count, RasterStore::GRID.len() - 1);
    }
}
