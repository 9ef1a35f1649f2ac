//! Clip types for the timeline.

use std::fmt;

use serde::{Deserialize, Serialize};
use trackline_core::{clamp_duration, clamp_position};

use crate::track::TrackId;

/// Clip ids are `track * CLIP_ID_STRIDE + sequence`.
pub const CLIP_ID_STRIDE: u64 = 1000;

/// Unique clip id, stable across moves between tracks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ClipId(pub u64);

impl ClipId {
    /// Derive the id for the `sequence`-th clip created on `track`.
    pub fn compose(track: TrackId, sequence: u64) -> Self {
        Self(u64::from(track.0) * CLIP_ID_STRIDE + sequence)
    }

    /// Intra-track sequence number this id was created with.
    pub fn sequence(self) -> u64 {
        self.0 % CLIP_ID_STRIDE
    }
}

impl fmt::Display for ClipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A positioned block on a track.
///
/// Only [`crate::TrackStore`] hands out clips, and only by shared reference,
/// so `position >= 0` and `duration >= MIN_DURATION` hold for every clip
/// reachable through it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clip {
    pub id: ClipId,
    pub name: String,
    /// CSS-style hex color, e.g. `#3498db`.
    pub color: String,
    pub position: f32,
    pub duration: f32,
}

impl Clip {
    /// Create a clip, clamping position and duration into range.
    pub fn new(
        id: ClipId,
        name: impl Into<String>,
        color: impl Into<String>,
        position: f32,
        duration: f32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
            position: clamp_position(position),
            duration: clamp_duration(duration),
        }
    }

    /// Right edge of the clip.
    #[inline]
    pub fn end(&self) -> f32 {
        self.position + self.duration
    }

    pub(crate) fn set_position(&mut self, position: f32) {
        self.position = clamp_position(position);
    }

    pub(crate) fn set_duration(&mut self, duration: f32) {
        self.duration = clamp_duration(duration);
    }
}

/// Partial clip accepted by [`crate::TrackStore::add_clip`].
///
/// Every field left `None` receives its default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClipSpec {
    pub name: Option<String>,
    pub color: Option<String>,
    pub position: Option<f32>,
    pub duration: Option<f32>,
}

impl ClipSpec {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn at(mut self, position: f32) -> Self {
        self.position = Some(position);
        self
    }

    pub fn lasting(mut self, duration: f32) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn colored(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}
