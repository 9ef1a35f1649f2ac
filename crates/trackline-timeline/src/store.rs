//! The track/clip store.
//!
//! `TrackStore` is the only writer of [`Track`] and [`Clip`] records. Each
//! mutation either applies fully or returns an error and leaves the store
//! exactly as it was.

use tracing::debug;
use trackline_core::{EngineConfig, Result, TracklineError};

use crate::clip::{Clip, ClipId, ClipSpec};
use crate::selection::Selection;
use crate::track::{Track, TrackId, TrackKind};

/// Ordered tracks, their clips and the current selection.
#[derive(Debug, Clone)]
pub struct TrackStore {
    tracks: Vec<Track>,
    selection: Selection,
    default_clip_duration: f32,
    default_clip_color: String,
}

impl Default for TrackStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TrackStore {
    /// Empty store with default clip settings.
    pub fn new() -> Self {
        Self::with_config(&EngineConfig::default())
    }

    /// Empty store taking clip defaults from `config`.
    pub fn with_config(config: &EngineConfig) -> Self {
        Self {
            tracks: Vec::new(),
            selection: Selection::default(),
            default_clip_duration: config.default_clip_duration,
            default_clip_color: config.default_clip_color.clone(),
        }
    }

    /// The editor's starting state: one mono track, selected.
    pub fn with_default_track(config: &EngineConfig) -> Self {
        let mut store = Self::with_config(config);
        let id = store.add_track(TrackKind::Mono);
        store.selection.set_track(id);
        store
    }

    // ── Lookups ─────────────────────────────────────────────────

    fn track_pos(&self, id: TrackId) -> Result<usize> {
        self.tracks
            .iter()
            .position(|t| t.id == id)
            .ok_or(TracklineError::TrackNotFound(id.0))
    }

    fn clip_mut(&mut self, track: TrackId, clip: ClipId) -> Result<&mut Clip> {
        let idx = self.track_pos(track)?;
        self.tracks[idx]
            .clip_mut(clip)
            .ok_or(TracklineError::ClipNotFound {
                track: track.0,
                clip: clip.0,
            })
    }

    // ── Clip mutations ──────────────────────────────────────────

    /// Append a clip to `track`, filling unspecified fields with defaults.
    ///
    /// The default position is the end of the rightmost clip already on the
    /// track, so repeated adds lay clips out end to end.
    pub fn add_clip(&mut self, track: TrackId, spec: ClipSpec) -> Result<ClipId> {
        let idx = self.track_pos(track)?;
        let owner = &self.tracks[idx];

        let mut seq = owner
            .clips
            .iter()
            .map(|c| c.id.sequence())
            .max()
            .map_or(1, |m| m + 1);
        let mut id = ClipId::compose(track, seq);
        while self.find_clip(id).is_some() {
            seq += 1;
            id = ClipId::compose(track, seq);
        }

        let clip = Clip::new(
            id,
            spec.name.unwrap_or_else(|| format!("Clip {track}.{seq}")),
            spec.color.unwrap_or_else(|| self.default_clip_color.clone()),
            spec.position.unwrap_or_else(|| owner.end()),
            spec.duration.unwrap_or(self.default_clip_duration),
        );
        debug!(%track, clip = %id, position = clip.position, duration = clip.duration, "clip added");
        self.tracks[idx].clips.push(clip);
        Ok(id)
    }

    /// Remove a clip. Other clip ids are left alone.
    pub fn remove_clip(&mut self, track: TrackId, clip: ClipId) -> Result<Clip> {
        let idx = self.track_pos(track)?;
        let (clip_idx, _) = self.tracks[idx]
            .find_clip(clip)
            .ok_or(TracklineError::ClipNotFound {
                track: track.0,
                clip: clip.0,
            })?;
        let removed = self.tracks[idx].clips.remove(clip_idx);
        self.reconcile_selection();
        debug!(%track, %clip, "clip removed");
        Ok(removed)
    }

    pub fn rename_clip(
        &mut self,
        track: TrackId,
        clip: ClipId,
        name: impl Into<String>,
    ) -> Result<()> {
        self.clip_mut(track, clip)?.name = name.into();
        Ok(())
    }

    /// Set a clip's position, clamped to `>= 0`.
    pub fn reposition_clip(&mut self, track: TrackId, clip: ClipId, position: f32) -> Result<()> {
        let target = self.clip_mut(track, clip)?;
        target.set_position(position);
        debug!(%track, %clip, position = target.position, "clip repositioned");
        Ok(())
    }

    /// Set a clip's duration, clamped to `>= MIN_DURATION`.
    pub fn resize_clip(&mut self, track: TrackId, clip: ClipId, duration: f32) -> Result<()> {
        let target = self.clip_mut(track, clip)?;
        target.set_duration(duration);
        debug!(%track, %clip, duration = target.duration, "clip resized");
        Ok(())
    }

    /// Set position and duration together, as a left-edge resize does.
    pub fn reposition_and_resize_clip(
        &mut self,
        track: TrackId,
        clip: ClipId,
        position: f32,
        duration: f32,
    ) -> Result<()> {
        let target = self.clip_mut(track, clip)?;
        target.set_position(position);
        target.set_duration(duration);
        debug!(
            %track,
            %clip,
            position = target.position,
            duration = target.duration,
            "clip repositioned and resized"
        );
        Ok(())
    }

    /// Transfer a clip to the end of `target`'s sequence at `position`.
    ///
    /// Both tracks are resolved before anything is removed: an unknown target
    /// leaves the clip where it was.
    pub fn move_clip_to_track(
        &mut self,
        source: TrackId,
        target: TrackId,
        clip: ClipId,
        position: f32,
    ) -> Result<()> {
        let src_idx = self.track_pos(source)?;
        let (clip_idx, _) = self.tracks[src_idx]
            .find_clip(clip)
            .ok_or(TracklineError::ClipNotFound {
                track: source.0,
                clip: clip.0,
            })?;
        let dst_idx = self.track_pos(target)?;

        let mut moved = self.tracks[src_idx].clips.remove(clip_idx);
        moved.set_position(position);
        let landed = moved.position;
        self.tracks[dst_idx].clips.push(moved);
        self.reconcile_selection();
        debug!(%source, %target, %clip, position = landed, "clip moved between tracks");
        Ok(())
    }

    // ── Track mutations ─────────────────────────────────────────

    /// Id the next [`add_track`](Self::add_track) would use.
    ///
    /// `len + 1`, or one past the highest id when that is already taken.
    /// If the highest id is `u32::MAX`, the lowest free id is used instead.
    pub fn next_track_id(&self) -> TrackId {
        let len = self.tracks.len() as u32;
        let candidate = TrackId(len.saturating_add(1));
        if self.track(candidate).is_none() {
            return candidate;
        }
        let max = self.tracks.iter().map(|t| t.id.0).max().unwrap_or(0);
        match max.checked_add(1) {
            Some(next) => TrackId(next),
            // `len` tracks cannot fill all of 1..=len+1.
            None => (1..=len.saturating_add(1))
                .map(TrackId)
                .find(|id| self.track(*id).is_none())
                .unwrap_or(candidate),
        }
    }

    /// Append a track with a generated id and default header values.
    pub fn add_track(&mut self, kind: TrackKind) -> TrackId {
        let id = self.next_track_id();
        self.tracks.push(Track::new(id, format!("{kind} track {id}"), kind));
        debug!(track = %id, %kind, "track added");
        id
    }

    /// Append a mono track with a caller-chosen id.
    pub fn create_track(&mut self, id: TrackId, name: impl Into<String>) -> Result<()> {
        if self.track(id).is_some() {
            return Err(TracklineError::DuplicateTrack(id.0));
        }
        self.tracks.push(Track::new(id, name, TrackKind::Mono));
        debug!(track = %id, "track created");
        Ok(())
    }

    /// Remove a track together with its clips.
    pub fn remove_track(&mut self, id: TrackId) -> Result<Track> {
        let idx = self.track_pos(id)?;
        let removed = self.tracks.remove(idx);
        self.reconcile_selection();
        debug!(track = %id, clips = removed.clip_count(), "track removed");
        Ok(removed)
    }

    pub fn rename_track(&mut self, id: TrackId, name: impl Into<String>) -> Result<()> {
        let idx = self.track_pos(id)?;
        self.tracks[idx].name = name.into();
        Ok(())
    }

    /// Move a track to `index` in display order.
    pub fn move_track(&mut self, id: TrackId, index: usize) -> Result<()> {
        let from = self.track_pos(id)?;
        if index >= self.tracks.len() {
            return Err(TracklineError::IndexOutOfRange {
                index,
                len: self.tracks.len(),
            });
        }
        let track = self.tracks.remove(from);
        self.tracks.insert(index, track);
        debug!(track = %id, from, to = index, "track moved");
        Ok(())
    }

    pub fn set_volume(&mut self, id: TrackId, volume: f32) -> Result<()> {
        let idx = self.track_pos(id)?;
        self.tracks[idx].volume = volume.clamp(0.0, 100.0);
        Ok(())
    }

    pub fn set_pan(&mut self, id: TrackId, pan: f32) -> Result<()> {
        let idx = self.track_pos(id)?;
        self.tracks[idx].pan = pan.clamp(0.0, 100.0);
        Ok(())
    }

    pub fn set_mute(&mut self, id: TrackId, mute: bool) -> Result<()> {
        let idx = self.track_pos(id)?;
        self.tracks[idx].mute = mute;
        Ok(())
    }

    pub fn set_solo(&mut self, id: TrackId, solo: bool) -> Result<()> {
        let idx = self.track_pos(id)?;
        self.tracks[idx].solo = solo;
        Ok(())
    }

    // ── Selection ───────────────────────────────────────────────

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Select a track and drop any clip selection.
    pub fn select_track(&mut self, id: TrackId) -> Result<()> {
        self.track_pos(id)?;
        self.selection.set_track(id);
        Ok(())
    }

    /// Select a clip. Rejected unless the clip is on `track`.
    pub fn select_clip(&mut self, track: TrackId, clip: ClipId) -> Result<()> {
        if self.clip(track, clip).is_none() {
            return Err(TracklineError::ClipNotFound {
                track: track.0,
                clip: clip.0,
            });
        }
        self.selection.set_clip(track, clip);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Re-point the selection at live records after a removal or move.
    fn reconcile_selection(&mut self) {
        let Some(track) = self.selection.track() else {
            return;
        };
        if self.track(track).is_none() {
            self.selection.clear();
            return;
        }
        if let Some(clip) = self.selection.clip() {
            match self.find_clip(clip).map(|(owner, _)| owner) {
                Some(owner) if owner != track => self.selection.set_clip(owner, clip),
                Some(_) => {}
                None => self.selection.clear_clip(),
            }
        }
    }

    // ── Read accessors ──────────────────────────────────────────

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn track(&self, id: TrackId) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == id)
    }

    pub fn track_by_index(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn track_index(&self, id: TrackId) -> Option<usize> {
        self.tracks.iter().position(|t| t.id == id)
    }

    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    pub fn tracks_of_kind(&self, kind: TrackKind) -> impl Iterator<Item = &Track> {
        self.tracks.iter().filter(move |t| t.kind == kind)
    }

    /// Clips of a track in insertion order. Empty for an unknown track.
    pub fn clips(&self, track: TrackId) -> &[Clip] {
        self.track(track)
            .map(|t| t.clips.as_slice())
            .unwrap_or_default()
    }

    pub fn clip(&self, track: TrackId, clip: ClipId) -> Option<&Clip> {
        self.track(track)?.find_clip(clip).map(|(_, c)| c)
    }

    /// Locate a clip anywhere in the store.
    pub fn find_clip(&self, clip: ClipId) -> Option<(TrackId, &Clip)> {
        self.all_clips().find(|(_, c)| c.id == clip)
    }

    /// Every clip paired with the id of the track holding it.
    pub fn all_clips(&self) -> impl Iterator<Item = (TrackId, &Clip)> {
        self.tracks
            .iter()
            .flat_map(|t| t.clips.iter().map(move |c| (t.id, c)))
    }

    pub fn clip_count(&self) -> usize {
        self.tracks.iter().map(Track::clip_count).sum()
    }

    /// Rightmost occupied position across all tracks, 0 when there are no clips.
    pub fn max_clip_end(&self) -> f32 {
        self.tracks.iter().map(Track::end).fold(0.0, f32::max)
    }

    /// Width of the scrollable canvas.
    pub fn canvas_width(&self, min_width: f32, padding: f32) -> f32 {
        min_width.max(self.max_clip_end() + padding)
    }

    pub fn selected_track(&self) -> Option<&Track> {
        self.track(self.selection.track()?)
    }

    pub fn selected_clip(&self) -> Option<&Clip> {
        self.clip(self.selection.track()?, self.selection.clip()?)
    }

    pub fn selected_track_index(&self) -> Option<usize> {
        self.track_index(self.selection.track()?)
    }

    pub fn has_selection(&self) -> bool {
        !self.selection.is_empty()
    }

    pub fn has_clip_selection(&self) -> bool {
        self.selection.has_clip()
    }
}
