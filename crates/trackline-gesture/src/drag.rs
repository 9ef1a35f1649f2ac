//! Clip move gesture.
//!
//! Pick-up records where on the clip the pointer grabbed it. Each update
//! derives the clip's raw left edge from the absolute pointer position and
//! feeds it to the guides; nothing is written until the drop, where the raw
//! edge is snapped to the grid and committed with a single store call (or a
//! create-then-move pair when dropping below every track).

use tracing::debug;
use trackline_core::{clamp_position, snap_to_grid, EngineConfig, Result, TracklineError};
use trackline_timeline::{ClipId, TrackId, TrackStore};

use crate::context::GestureContext;
use crate::outcome::{ClipGeometry, Commit, DropTarget, GestureOutcome};
use crate::payload::DragPayload;

/// An in-flight clip move.
#[derive(Debug, Clone)]
pub struct DragSession {
    clip: ClipId,
    source_track: TrackId,
    pointer_offset: f32,
    duration: f32,
    raw_position: f32,
}

impl DragSession {
    /// Pick up `clip` from `track`.
    ///
    /// `clip_left` is the clip's rendered left edge in pointer space.
    pub fn begin(
        store: &TrackStore,
        config: &EngineConfig,
        track: TrackId,
        clip: ClipId,
        pointer_x: f32,
        clip_left: f32,
    ) -> Result<(Self, GestureContext)> {
        let picked = store.clip(track, clip).ok_or(TracklineError::ClipNotFound {
            track: track.0,
            clip: clip.0,
        })?;
        let session = Self {
            clip,
            source_track: track,
            pointer_offset: pointer_x - clip_left,
            duration: picked.duration,
            raw_position: picked.position,
        };
        let ctx = GestureContext::new(track, clip, picked.position, store.tracks(), config);
        debug!(%track, %clip, offset = session.pointer_offset, "drag started");
        Ok((session, ctx))
    }

    /// Rebuild a session on the receiving side of a hand-off.
    pub fn from_payload(store: &TrackStore, payload: &DragPayload) -> Result<Self> {
        let picked = store
            .clip(payload.source_track, payload.clip)
            .ok_or(TracklineError::ClipNotFound {
                track: payload.source_track.0,
                clip: payload.clip.0,
            })?;
        Ok(Self {
            clip: payload.clip,
            source_track: payload.source_track,
            pointer_offset: payload.pointer_offset,
            duration: picked.duration,
            raw_position: picked.position,
        })
    }

    pub fn payload(&self) -> DragPayload {
        DragPayload {
            clip: self.clip,
            source_track: self.source_track,
            pointer_offset: self.pointer_offset,
        }
    }

    pub fn clip(&self) -> ClipId {
        self.clip
    }

    pub fn source_track(&self) -> TrackId {
        self.source_track
    }

    pub fn raw_position(&self) -> f32 {
        self.raw_position
    }

    /// Unsnapped placement from the latest update.
    pub fn preview(&self) -> ClipGeometry {
        ClipGeometry::new(self.raw_position, self.duration)
    }

    /// Unsnapped left edge for a pointer over an element whose left edge is `left`.
    fn raw_position_at(&self, pointer_x: f32, left: f32) -> f32 {
        clamp_position(pointer_x - left - self.pointer_offset)
    }

    /// Follow the pointer. Pure preview: the store is only read.
    pub fn update(
        &mut self,
        ctx: &mut GestureContext,
        store: &TrackStore,
        config: &EngineConfig,
        pointer_x: f32,
        track_left: f32,
    ) -> ClipGeometry {
        self.raw_position = self.raw_position_at(pointer_x, track_left);
        ctx.track_edge(self.raw_position, store.tracks(), config);
        ClipGeometry::new(self.raw_position, self.duration)
    }

    /// Drop the clip. `Outside` cancels without touching the store.
    pub fn commit(
        self,
        store: &mut TrackStore,
        config: &EngineConfig,
        pointer_x: f32,
        target: DropTarget,
    ) -> Result<GestureOutcome> {
        let (left, track) = match target {
            DropTarget::Track { track, left } => (left, Some(track)),
            DropTarget::BelowTracks { left } => (left, None),
            DropTarget::Outside => {
                debug!(clip = %self.clip, "drag dropped outside any track");
                return Ok(GestureOutcome::Cancelled);
            }
        };
        let position = snap_to_grid(self.raw_position_at(pointer_x, left), config.grid_size);

        let commit = match track {
            Some(track) if track == self.source_track => {
                store.reposition_clip(track, self.clip, position)?;
                Commit::Repositioned {
                    track,
                    clip: self.clip,
                    position,
                }
            }
            Some(target) => {
                store.move_clip_to_track(self.source_track, target, self.clip, position)?;
                Commit::MovedToTrack {
                    source: self.source_track,
                    target,
                    clip: self.clip,
                    position,
                }
            }
            None => self.commit_to_new_track(store, position)?,
        };
        debug!(?commit, "drag committed");
        Ok(GestureOutcome::Committed(commit))
    }

    /// Create a track below the others and move the clip into it.
    ///
    /// The source is checked first so a stale clip never leaves an empty
    /// track behind; if the move still fails the new track is removed again.
    fn commit_to_new_track(&self, store: &mut TrackStore, position: f32) -> Result<Commit> {
        if store.clip(self.source_track, self.clip).is_none() {
            return Err(TracklineError::ClipNotFound {
                track: self.source_track.0,
                clip: self.clip.0,
            });
        }

        let track = store.next_track_id();
        let name = format!("Track {}", store.track_count() + 1);
        store.create_track(track, name)?;
        if let Err(e) = store.move_clip_to_track(self.source_track, track, self.clip, position) {
            store.remove_track(track)?;
            return Err(e);
        }
        store.select_track(track)?;

        Ok(Commit::MovedToNewTrack {
            source: self.source_track,
            track,
            clip: self.clip,
            position,
        })
    }
}
