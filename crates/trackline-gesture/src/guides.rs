//! Alignment guides for an edge in motion.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use trackline_core::EngineConfig;
use trackline_timeline::{ClipId, Track, TrackId};

/// What a guide is aligned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuideKind {
    ClipStart,
    ClipEnd,
    Grid,
}

/// A transient alignment hint at a horizontal position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Guideline {
    pub position: f32,
    pub kind: GuideKind,
}

impl Guideline {
    pub fn new(position: f32, kind: GuideKind) -> Self {
        Self { position, kind }
    }
}

/// Guides active for one tracked edge. Rarely more than a handful.
pub type GuideSet = SmallVec<[Guideline; 4]>;

/// Compute every guide within `config.guide_threshold` of `edge`.
///
/// Scans all clips on all tracks from scratch; the gestured clip, named by
/// `exclude`, never guides itself. At most one grid guide is emitted.
pub fn compute_guides(
    edge: f32,
    exclude: Option<(TrackId, ClipId)>,
    tracks: &[Track],
    config: &EngineConfig,
) -> GuideSet {
    let threshold = config.guide_threshold;
    let mut guides = GuideSet::new();

    for track in tracks {
        for clip in &track.clips {
            if exclude == Some((track.id, clip.id)) {
                continue;
            }
            if (edge - clip.position).abs() < threshold {
                guides.push(Guideline::new(clip.position, GuideKind::ClipStart));
            }
            let end = clip.end();
            if (edge - end).abs() < threshold {
                guides.push(Guideline::new(end, GuideKind::ClipEnd));
            }
        }
    }

    if config.grid_size > 0.0 {
        let nearest = (edge / config.grid_size).round() * config.grid_size;
        if (edge - nearest).abs() < threshold {
            guides.push(Guideline::new(nearest, GuideKind::Grid));
        }
    }

    guides
}

/// Position of the guide closest to `edge`, if one lies strictly within
/// `threshold`. The earliest guide wins a tie.
pub fn nearest_within(guides: &[Guideline], edge: f32, threshold: f32) -> Option<f32> {
    let mut best: Option<(f32, f32)> = None;
    for guide in guides {
        let dist = (guide.position - edge).abs();
        if dist < threshold && best.map_or(true, |(_, d)| dist < d) {
            best = Some((guide.position, dist));
        }
    }
    best.map(|(position, _)| position)
}
