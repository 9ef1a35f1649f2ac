//! Single track / clip selection.

use serde::{Deserialize, Serialize};

use crate::clip::ClipId;
use crate::track::TrackId;

/// Which track and clip are selected.
///
/// A selected clip always comes with the track that contains it; the store
/// re-establishes this after every mutation that moves or removes things.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    track: Option<TrackId>,
    clip: Option<ClipId>,
}

impl Selection {
    pub fn track(&self) -> Option<TrackId> {
        self.track
    }

    pub fn clip(&self) -> Option<ClipId> {
        self.clip
    }

    pub fn is_empty(&self) -> bool {
        self.track.is_none()
    }

    pub fn has_clip(&self) -> bool {
        self.clip.is_some() && self.track.is_some()
    }

    /// Select a track, dropping any clip selection.
    pub(crate) fn set_track(&mut self, track: TrackId) {
        self.track = Some(track);
        self.clip = None;
    }

    pub(crate) fn set_clip(&mut self, track: TrackId, clip: ClipId) {
        self.track = Some(track);
        self.clip = Some(clip);
    }

    pub(crate) fn clear_clip(&mut self) {
        self.clip = None;
    }

    pub(crate) fn clear(&mut self) {
        self.track = None;
        self.clip = None;
    }
}
