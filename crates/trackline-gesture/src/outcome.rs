//! Values gestures hand back to the host.

use serde::{Deserialize, Serialize};
use trackline_core::ClipEdge;
use trackline_timeline::{ClipId, TrackId};

use crate::guides::GuideSet;

/// Preview placement of the gestured clip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClipGeometry {
    pub position: f32,
    pub duration: f32,
}

impl ClipGeometry {
    pub fn new(position: f32, duration: f32) -> Self {
        Self { position, duration }
    }

    pub fn end(&self) -> f32 {
        self.position + self.duration
    }
}

/// What a gesture update gives the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureFrame {
    pub preview: ClipGeometry,
    pub guides: GuideSet,
}

/// Where the pointer was released during a drag.
///
/// `left` is the screen x of the receiving element's left edge, in the same
/// space as the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DropTarget {
    /// Over an existing track lane.
    Track { track: TrackId, left: f32 },
    /// Inside the timeline but below every track.
    BelowTracks { left: f32 },
    /// Anywhere else.
    Outside,
}

/// The store mutation a gesture ended with.
#[derive(Debug, Clone, PartialEq)]
pub enum Commit {
    Repositioned {
        track: TrackId,
        clip: ClipId,
        position: f32,
    },
    MovedToTrack {
        source: TrackId,
        target: TrackId,
        clip: ClipId,
        position: f32,
    },
    MovedToNewTrack {
        source: TrackId,
        track: TrackId,
        clip: ClipId,
        position: f32,
    },
    Resized {
        track: TrackId,
        clip: ClipId,
        edge: ClipEdge,
        position: f32,
        duration: f32,
    },
}

/// How a gesture ended.
#[derive(Debug, Clone, PartialEq)]
pub enum GestureOutcome {
    Committed(Commit),
    /// Nothing was written to the store.
    Cancelled,
}

impl GestureOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, GestureOutcome::Committed(_))
    }
}
