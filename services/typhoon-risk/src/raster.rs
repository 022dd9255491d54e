//! `raster` subcommand.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use raster_store::{RasterStatistics, RasterStore, RasterStoreConfig, RawGrid, TransformOutcome};
use serde::Serialize;
use tracing::info;

pub struct RasterArgs {
    pub input: PathBuf,
    /// `(lat, lon)`
    pub coordinate: Option<(f64, f64)>,
    /// `(row, col)`
    pub cell: Option<(i64, i64)>,
    pub descriptor: Option<PathBuf>,
}

#[derive(Serialize)]
struct RasterReport<'a> {
    name: &'a str,
    shape: [usize; 2],
    extent: [f64; 4],
    statistics: Option<RasterStatistics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    coordinate: Option<Lookup<(f64, f64)>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cell: Option<Lookup<(i64, i64)>>,
}

#[derive(Serialize)]
struct Lookup<K> {
    at: K,
    /// `null` for a missing cell or a point off the grid.
    value: Option<f64>,
}

pub fn run(args: RasterArgs) -> Result<()> {
    let config = RasterStoreConfig::from_env();
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid raster configuration: {}", e))?;

    let raw = RawGrid::from_json_file(&args.input)
        .with_context(|| format!("Failed to load grid from {}", args.input.display()))?;

    let mut store = RasterStore::new(config);
    store.set_raw_data(raw);

    match store.transform() {
        TransformOutcome::Published { points, layout } => {
            info!(points = points, layout = ?layout, "Raster ready");
        }
        TransformOutcome::Skipped => bail!("{} has no data array", args.input.display()),
        TransformOutcome::ShapeMismatch { layout } => bail!(
            "{} is not a {}x{} global grid ({:?} layout)",
            args.input.display(),
            RasterStore::GRID.rows,
            RasterStore::GRID.cols,
            layout
        ),
    }

    let Some(canonical) = store.canonical() else {
        bail!("Raster store has no canonical raster after transform");
    };

    let report = RasterReport {
        name: &canonical.name,
        shape: canonical.shape,
        extent: canonical.extent,
        statistics: store.raster_statistics(),
        coordinate: args.coordinate.map(|(lat, lon)| Lookup {
            at: (lat, lon),
            value: store.value_at_coordinate(lat, lon),
        }),
        cell: args.cell.map(|(row, col)| Lookup {
            at: (row, col),
            value: store.value_at_raster_cell(row, col),
        }),
    };
    crate::print_json(&report)?;

    if let Some(path) = args.descriptor {
        let descriptor = store.renderable_raster_descriptor();
        let body = serde_json::to_vec(&descriptor)?;
        std::fs::write(&path, body)
            .with_context(|| format!("Failed to write descriptor to {}", path.display()))?;
        info!(path = %path.display(), "Wrote renderer descriptor");
    }

    Ok(())
}
