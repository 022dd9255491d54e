//! Holds one fetched track and a cursor into it.

use typhoon_common::RiskResult;

use crate::client::TrackClient;
use crate::types::{TrackPoint, TrackRequest, TyphoonTrack};

/// One typhoon track plus the index currently being shown.
#[derive(Debug, Clone, Default)]
pub struct TrackStore {
    track: Option<TyphoonTrack>,
    current_index: usize,
}

impl TrackStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track(&self) -> Option<&TyphoonTrack> {
        self.track.as_ref()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Replace the track and rewind the cursor.
    pub fn set_track(&mut self, track: TyphoonTrack) {
        self.track = Some(track);
        self.current_index = 0;
    }

    /// Number of forecast times, 0 without a track.
    pub fn steps(&self) -> usize {
        self.track.as_ref().map_or(0, TyphoonTrack::len)
    }

    /// The point under the cursor. `None` without a track or when the
    /// cursor is past the end of any of its arrays.
    pub fn current_point(&self) -> Option<TrackPoint> {
        self.track.as_ref()?.point(self.current_index)
    }

    /// Move the cursor. Not bounds-checked; see [`Self::current_point`].
    pub fn set_index(&mut self, index: usize) {
        self.current_index = index;
    }

    /// Fetch a track and store it. On failure the current track is kept.
    pub async fn fetch_track(
        &mut self,
        client: &TrackClient,
        request: &TrackRequest,
    ) -> RiskResult<()> {
        let track = client.fetch_track(request).await?;
        self.set_track(track);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_point_track() -> TyphoonTrack {
        TyphoonTrack {
            times: vec!["t0".into(), "t1".into(), "t2".into()],
            lats: vec![18.5, 19.6, 20.9],
            lons: vec![130.2, 128.9, 127.4],
            msls: vec![99800.0, 99350.0, 98700.0],
            winds: vec![25.0, 28.5, 33.0],
        }
    }

    #[test]
    fn test_empty_store() {
        let store = TrackStore::new();
        assert_eq!(store.steps(), 0);
        assert!(store.current_point().is_none());
    }

    #[test]
    fn test_set_track_rewinds_cursor() {
        let mut store = TrackStore::new();
        store.set_track(three_point_track());
        store.set_index(2);
        assert_eq!(store.current_point().unwrap().time, "t2");

        store.set_track(three_point_track());
        assert_eq!(store.current_index(), 0);
        assert_eq!(store.current_point().unwrap().lat, 18.5);
    }

    #[test]
    fn test_index_past_end() {
        let mut store = TrackStore::new();
        store.set_track(three_point_track());
        assert_eq!(store.steps(), 3);
        store.set_index(3);
        assert!(store.current_point().is_none());
    }
}
