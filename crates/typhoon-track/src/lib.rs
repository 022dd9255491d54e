//! Typhoon track store.
//!
//! Fetches a forecast track from the tracker API (`POST /variables/trackers`)
//! and keeps it with a cursor, so a viewer can step through the forecast
//! one time at a time.

pub mod client;
pub mod config;
pub mod store;
pub mod types;

pub use client::TrackClient;
pub use config::TrackClientConfig;
pub use store::TrackStore;
pub use types::{TrackPoint, TrackRequest, TrackResponse, TyphoonTrack};
