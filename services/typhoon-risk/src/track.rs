//! `track` subcommand.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;
use typhoon_track::{TrackClient, TrackClientConfig, TrackPoint, TrackRequest, TrackStore};

#[derive(Serialize)]
struct TrackReport {
    steps: usize,
    points: Vec<TrackPoint>,
}

pub async fn run(lat: f64, lon: f64, time_index: usize, api_url: Option<String>) -> Result<()> {
    let mut config = TrackClientConfig::from_env();
    if let Some(url) = api_url {
        config = config.with_base_url(url);
    }

    let client = TrackClient::new(&config).context("Failed to create tracker client")?;
    let request = TrackRequest {
        init_lat: lat,
        init_lon: lon,
        init_time_index: time_index,
    };

    let mut store = TrackStore::new();
    store
        .fetch_track(&client, &request)
        .await
        .with_context(|| format!("Failed to fetch track from {}", client.url()))?;

    let mut points = Vec::with_capacity(store.steps());
    for index in 0..store.steps() {
        store.set_index(index);
        match store.current_point() {
            Some(point) => points.push(point),
            None => break,
        }
    }
    info!(steps = store.steps(), points = points.len(), "Fetched typhoon track");

    crate::print_json(&TrackReport {
        steps: store.steps(),
        points,
    })
}
