//! Track types for the timeline.

use std::fmt;

use serde::{Deserialize, Serialize};
use trackline_core::limits::{DEFAULT_TRACK_PAN, DEFAULT_TRACK_VOLUME};

use crate::clip::{Clip, ClipId};

/// Unique, immutable track id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TrackId(pub u32);

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Channel layout of a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TrackKind {
    #[default]
    Mono,
    Stereo,
}

impl fmt::Display for TrackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackKind::Mono => f.write_str("Mono"),
            TrackKind::Stereo => f.write_str("Stereo"),
        }
    }
}

/// A lane of clips plus its header values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: TrackId,
    pub name: String,
    pub kind: TrackKind,
    /// 0..=100
    pub volume: f32,
    /// 0..=100, 50 is centered
    pub pan: f32,
    pub mute: bool,
    pub solo: bool,
    /// Insertion order, not position order.
    pub clips: Vec<Clip>,
}

impl Track {
    /// Create an empty track with default header values.
    pub fn new(id: TrackId, name: impl Into<String>, kind: TrackKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            volume: DEFAULT_TRACK_VOLUME,
            pan: DEFAULT_TRACK_PAN,
            mute: false,
            solo: false,
            clips: Vec::new(),
        }
    }

    /// Find a clip by id. Returns (index, &Clip).
    pub fn find_clip(&self, id: ClipId) -> Option<(usize, &Clip)> {
        self.clips.iter().enumerate().find(|(_, c)| c.id == id)
    }

    pub(crate) fn clip_mut(&mut self, id: ClipId) -> Option<&mut Clip> {
        self.clips.iter_mut().find(|c| c.id == id)
    }

    /// Right edge of the rightmost clip, 0 for an empty track.
    pub fn end(&self) -> f32 {
        self.clips.iter().map(Clip::end).fold(0.0, f32::max)
    }

    /// Number of clips in this track.
    pub fn clip_count(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }
}
