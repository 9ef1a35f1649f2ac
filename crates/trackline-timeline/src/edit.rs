//! Store mutations as data.
//!
//! Every mutation of [`TrackStore`] has a `TimelineEdit` variant carrying its
//! payload, so a host can collect edits from widgets and apply them later.

use serde::{Deserialize, Serialize};
use trackline_core::Result;

use crate::clip::{ClipId, ClipSpec};
use crate::store::TrackStore;
use crate::track::{TrackId, TrackKind};

/// A single named store mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TimelineEdit {
    // ── Clips ───────────────────────────────────────────────────
    AddClip {
        track: TrackId,
        spec: ClipSpec,
    },
    RemoveClip {
        track: TrackId,
        clip: ClipId,
    },
    RenameClip {
        track: TrackId,
        clip: ClipId,
        name: String,
    },
    RepositionClip {
        track: TrackId,
        clip: ClipId,
        position: f32,
    },
    ResizeClip {
        track: TrackId,
        clip: ClipId,
        duration: f32,
    },
    RepositionAndResizeClip {
        track: TrackId,
        clip: ClipId,
        position: f32,
        duration: f32,
    },
    MoveClipToTrack {
        source: TrackId,
        target: TrackId,
        clip: ClipId,
        position: f32,
    },

    // ── Tracks ──────────────────────────────────────────────────
    AddTrack {
        kind: TrackKind,
    },
    CreateTrack {
        id: TrackId,
        name: String,
    },
    RemoveTrack {
        track: TrackId,
    },
    RenameTrack {
        track: TrackId,
        name: String,
    },
    MoveTrack {
        track: TrackId,
        index: usize,
    },
    SetVolume {
        track: TrackId,
        volume: f32,
    },
    SetPan {
        track: TrackId,
        pan: f32,
    },
    SetMute {
        track: TrackId,
        mute: bool,
    },
    SetSolo {
        track: TrackId,
        solo: bool,
    },

    // ── Selection ───────────────────────────────────────────────
    SelectTrack {
        track: TrackId,
    },
    SelectClip {
        track: TrackId,
        clip: ClipId,
    },
    ClearSelection,
}

impl TrackStore {
    /// Apply one edit. On error the store is unchanged.
    pub fn apply(&mut self, edit: TimelineEdit) -> Result<()> {
        match edit {
            TimelineEdit::AddClip { track, spec } => self.add_clip(track, spec).map(drop),
            TimelineEdit::RemoveClip { track, clip } => self.remove_clip(track, clip).map(drop),
            TimelineEdit::RenameClip { track, clip, name } => self.rename_clip(track, clip, name),
            TimelineEdit::RepositionClip {
                track,
                clip,
                position,
            } => self.reposition_clip(track, clip, position),
            TimelineEdit::ResizeClip {
                track,
                clip,
                duration,
            } => self.resize_clip(track, clip, duration),
            TimelineEdit::RepositionAndResizeClip {
                track,
                clip,
                position,
                duration,
            } => self.reposition_and_resize_clip(track, clip, position, duration),
            TimelineEdit::MoveClipToTrack {
                source,
                target,
                clip,
                position,
            } => self.move_clip_to_track(source, target, clip, position),
            TimelineEdit::AddTrack { kind } => {
                self.add_track(kind);
                Ok(())
            }
            TimelineEdit::CreateTrack { id, name } => self.create_track(id, name),
            TimelineEdit::RemoveTrack { track } => self.remove_track(track).map(drop),
            TimelineEdit::RenameTrack { track, name } => self.rename_track(track, name),
            TimelineEdit::MoveTrack { track, index } => self.move_track(track, index),
            TimelineEdit::SetVolume { track, volume } => self.set_volume(track, volume),
            TimelineEdit::SetPan { track, pan } => self.set_pan(track, pan),
            TimelineEdit::SetMute { track, mute } => self.set_mute(track, mute),
            TimelineEdit::SetSolo { track, solo } => self.set_solo(track, solo),
            TimelineEdit::SelectTrack { track } => self.select_track(track),
            TimelineEdit::SelectClip { track, clip } => self.select_clip(track, clip),
            TimelineEdit::ClearSelection => {
                self.clear_selection();
                Ok(())
            }
        }
    }
}
