//! HTTP client for the tracker API.

use tracing::{debug, error, warn};
use typhoon_common::{RiskError, RiskResult};

use crate::config::TrackClientConfig;
use crate::types::{TrackRequest, TrackResponse, TyphoonTrack};

/// Fetches forecast tracks from the tracker API.
#[derive(Debug, Clone)]
pub struct TrackClient {
    http: reqwest::Client,
    url: String,
}

impl TrackClient {
    /// Build a client. Fails if the configuration is invalid or the HTTP
    /// client cannot be constructed.
    pub fn new(config: &TrackClientConfig) -> RiskResult<Self> {
        config.validate().map_err(RiskError::invalid_config)?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            http,
            url: config.trackers_url(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// POST the seed position and return the forecast track.
    pub async fn fetch_track(&self, request: &TrackRequest) -> RiskResult<TyphoonTrack> {
        debug!(
            url = %self.url,
            init_lat = request.init_lat,
            init_lon = request.init_lon,
            init_time_index = request.init_time_index,
            "Requesting typhoon track"
        );

        let response = self.http.post(&self.url).json(request).send().await.map_err(|e| {
            error!(url = %self.url, error = %e, "Tracker request failed");
            RiskError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), body = %body, "Tracker returned an error status");
            return Err(RiskError::TrackerStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await?;
        let parsed: TrackResponse = serde_json::from_slice(&body).map_err(|e| {
            warn!(error = %e, "Tracker response is not a track");
            RiskError::from(e)
        })?;

        debug!(points = parsed.track.len(), "Received typhoon track");
        Ok(parsed.track)
    }
}
