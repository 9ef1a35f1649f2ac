//! Clip edge resize gesture.

use tracing::debug;
use trackline_core::limits::MIN_DURATION;
use trackline_core::{
    clamp_duration, snap_to_grid, ClipEdge, EngineConfig, Result, TracklineError,
};
use trackline_timeline::{ClipId, TrackId, TrackStore};

use crate::context::GestureContext;
use crate::guides::nearest_within;
use crate::outcome::{ClipGeometry, Commit, GestureOutcome};

/// Placement after dragging `edge` by `delta` from `(position, duration)`.
///
/// Right: the duration grows or shrinks, floored at the minimum.
/// Left: the right edge stays put; `delta` is clamped so the duration keeps
/// its minimum and the position stays non-negative.
pub fn resized(edge: ClipEdge, position: f32, duration: f32, delta: f32) -> ClipGeometry {
    match edge {
        ClipEdge::Right => ClipGeometry::new(position, clamp_duration(duration + delta)),
        ClipEdge::Left => {
            let delta = delta.max(-position).min(duration - MIN_DURATION);
            ClipGeometry::new(position + delta, duration - delta)
        }
    }
}

/// The edge that moves during a resize of `edge`.
pub fn moving_edge(edge: ClipEdge, geometry: ClipGeometry) -> f32 {
    match edge {
        ClipEdge::Left => geometry.position,
        ClipEdge::Right => geometry.end(),
    }
}

/// An in-flight edge resize.
#[derive(Debug, Clone)]
pub struct ResizeSession {
    clip: ClipId,
    track: TrackId,
    edge: ClipEdge,
    anchor_x: f32,
    initial: ClipGeometry,
    live: ClipGeometry,
}

impl ResizeSession {
    /// Grab `edge` of `clip` with the pointer at `pointer_x`.
    pub fn begin(
        store: &TrackStore,
        config: &EngineConfig,
        track: TrackId,
        clip: ClipId,
        edge: ClipEdge,
        pointer_x: f32,
    ) -> Result<(Self, GestureContext)> {
        let grabbed = store.clip(track, clip).ok_or(TracklineError::ClipNotFound {
            track: track.0,
            clip: clip.0,
        })?;
        let initial = ClipGeometry::new(grabbed.position, grabbed.duration);
        let session = Self {
            clip,
            track,
            edge,
            anchor_x: pointer_x,
            initial,
            live: initial,
        };
        let ctx = GestureContext::new(
            track,
            clip,
            moving_edge(edge, initial),
            store.tracks(),
            config,
        );
        debug!(%track, %clip, ?edge, "resize started");
        Ok((session, ctx))
    }

    pub fn clip(&self) -> ClipId {
        self.clip
    }

    pub fn track(&self) -> TrackId {
        self.track
    }

    pub fn edge(&self) -> ClipEdge {
        self.edge
    }

    pub fn initial(&self) -> ClipGeometry {
        self.initial
    }

    pub fn live(&self) -> ClipGeometry {
        self.live
    }

    /// Follow the pointer. The delta is always taken from the anchor, never
    /// from the previous sample.
    pub fn update(
        &mut self,
        ctx: &mut GestureContext,
        store: &TrackStore,
        config: &EngineConfig,
        pointer_x: f32,
    ) -> ClipGeometry {
        let delta = pointer_x - self.anchor_x;
        self.live = resized(self.edge, self.initial.position, self.initial.duration, delta);
        ctx.track_edge(moving_edge(self.edge, self.live), store.tracks(), config);
        self.live
    }

    /// Release the edge.
    ///
    /// The moving edge first snaps to the nearest guide from the last update
    /// within the commit threshold, then to the grid. One store call writes
    /// the result.
    pub fn commit(
        self,
        ctx: &GestureContext,
        store: &mut TrackStore,
        config: &EngineConfig,
    ) -> Result<GestureOutcome> {
        let edge = moving_edge(self.edge, self.live);
        let guided =
            nearest_within(ctx.guides(), edge, config.commit_snap_threshold).unwrap_or(edge);
        let snapped = snap_to_grid(guided, config.grid_size);

        match self.edge {
            ClipEdge::Right => {
                store.resize_clip(self.track, self.clip, snapped - self.initial.position)?;
            }
            ClipEdge::Left => {
                let duration = self.initial.duration - (snapped - self.initial.position);
                store.reposition_and_resize_clip(self.track, self.clip, snapped, duration)?;
            }
        }

        let stored = store
            .clip(self.track, self.clip)
            .ok_or(TracklineError::ClipNotFound {
                track: self.track.0,
                clip: self.clip.0,
            })?;
        let commit = Commit::Resized {
            track: self.track,
            clip: self.clip,
            edge: self.edge,
            position: stored.position,
            duration: stored.duration,
        };
        debug!(?commit, guided = guided != edge, "resize committed");
        Ok(GestureOutcome::Committed(commit))
    }
}
