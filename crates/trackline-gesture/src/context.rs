//! Per-gesture guide tracking.

use trackline_core::EngineConfig;
use trackline_timeline::{ClipId, Track, TrackId};

use crate::guides::{compute_guides, GuideSet, Guideline};

/// Guide state for one gesture.
///
/// Created when a gesture starts and dropped when it ends, so guides can
/// never outlive the interaction that produced them.
#[derive(Debug, Clone)]
pub struct GestureContext {
    track: TrackId,
    clip: ClipId,
    tracked_edge: f32,
    guides: GuideSet,
}

impl GestureContext {
    /// Start tracking `edge` of `clip`, computing the initial guides.
    pub fn new(
        track: TrackId,
        clip: ClipId,
        edge: f32,
        tracks: &[Track],
        config: &EngineConfig,
    ) -> Self {
        let mut ctx = Self {
            track,
            clip,
            tracked_edge: edge,
            guides: GuideSet::new(),
        };
        ctx.track_edge(edge, tracks, config);
        ctx
    }

    /// Move the tracked edge and recompute guides from scratch.
    pub fn track_edge(&mut self, edge: f32, tracks: &[Track], config: &EngineConfig) {
        self.tracked_edge = edge;
        self.guides = compute_guides(edge, Some((self.track, self.clip)), tracks, config);
    }

    pub fn tracked_edge(&self) -> f32 {
        self.tracked_edge
    }

    /// Guides from the most recent edge update.
    pub fn guides(&self) -> &[Guideline] {
        &self.guides
    }

    pub fn clip(&self) -> ClipId {
        self.clip
    }

    pub fn track(&self) -> TrackId {
        self.track
    }
}
