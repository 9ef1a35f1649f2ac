//! Integration tests for the track store and named edits.
//!
//! Exercises trackline-core's configuration and limits through
//! trackline-timeline's store the way a host routes UI actions.

use proptest::prelude::*;
use trackline_core::limits::{DEFAULT_CLIP_DURATION, MIN_DURATION};
use trackline_core::EngineConfig;
use trackline_timeline::{ClipId, ClipSpec, TimelineEdit, TrackId, TrackKind, TrackStore};

// ── Helpers ────────────────────────────────────────────────────

fn two_track_store() -> (TrackStore, ClipId) {
    let config = EngineConfig::default();
    let mut store = TrackStore::with_default_track(&config);
    store.add_track(TrackKind::Stereo);
    let clip = store
        .add_clip(TrackId(1), ClipSpec::default().at(140.0))
        .unwrap();
    (store, clip)
}

fn occurrences(store: &TrackStore, clip: ClipId) -> usize {
    store.all_clips().filter(|(_, c)| c.id == clip).count()
}

// ── Initial state & defaults ───────────────────────────────────

#[test]
fn default_store_has_selected_mono_track() {
    let store = TrackStore::with_default_track(&EngineConfig::default());
    assert_eq!(store.track_count(), 1);
    let track = store.selected_track().unwrap();
    assert_eq!(track.name, "Mono track 1");
    assert_eq!(track.kind, TrackKind::Mono);
    assert_eq!((track.volume, track.pan), (50.0, 50.0));
    assert!(!track.mute && !track.solo);
}

#[test]
fn add_clip_without_overrides_uses_defaults() {
    let mut store = TrackStore::with_default_track(&EngineConfig::default());
    assert!(store.clips(TrackId(1)).is_empty());

    store
        .apply(TimelineEdit::AddClip {
            track: TrackId(1),
            spec: ClipSpec::default(),
        })
        .unwrap();

    let clip = &store.clips(TrackId(1))[0];
    assert_eq!(clip.id, ClipId(1001));
    assert_eq!(clip.position, 0.0);
    assert_eq!(clip.duration, DEFAULT_CLIP_DURATION);
    assert_eq!(clip.color, "#3498db");
    assert_eq!(clip.name, "Clip 1.1");
}

#[test]
fn configured_defaults_reach_new_clips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("engine.json");
    std::fs::write(
        &path,
        r##"{ "default_clip_duration": 70.0, "default_clip_color": "#e74c3c" }"##,
    )
    .unwrap();

    let config = EngineConfig::load(&path).unwrap();
    let mut store = TrackStore::with_default_track(&config);
    let id = store.add_clip(TrackId(1), ClipSpec::default()).unwrap();
    let clip = store.clip(TrackId(1), id).unwrap();
    assert_eq!(clip.duration, 70.0);
    assert_eq!(clip.color, "#e74c3c");
    // Untouched fields keep their defaults.
    assert_eq!(config.grid_size, 140.0);
}

#[test]
fn clip_ids_stay_unique_after_moves() {
    let (mut store, first) = two_track_store();
    let second = store.add_clip(TrackId(2), ClipSpec::default()).unwrap();
    assert_eq!(second, ClipId(2001));

    store
        .move_clip_to_track(TrackId(1), TrackId(2), first, 0.0)
        .unwrap();
    // Track 1 is empty again, but 1001 still lives on track 2.
    let third = store.add_clip(TrackId(1), ClipSpec::default()).unwrap();
    assert_eq!(third, ClipId(1002));
    assert_eq!(store.clip(TrackId(1), third).unwrap().name, "Clip 1.2");

    let fourth = store.add_clip(TrackId(2), ClipSpec::default()).unwrap();
    assert_eq!(fourth, ClipId(2002));
    assert_eq!(store.clip_count(), 4);
    assert_eq!(occurrences(&store, first), 1);
}

// ── Clamping through edits ─────────────────────────────────────

#[test]
fn edits_clamp_instead_of_rejecting() {
    let (mut store, clip) = two_track_store();
    store
        .apply(TimelineEdit::RepositionAndResizeClip {
            track: TrackId(1),
            clip,
            position: -50.0,
            duration: 3.0,
        })
        .unwrap();
    let stored = store.clip(TrackId(1), clip).unwrap();
    assert_eq!((stored.position, stored.duration), (0.0, MIN_DURATION));

    store
        .apply(TimelineEdit::SetVolume {
            track: TrackId(2),
            volume: 140.0,
        })
        .unwrap();
    assert_eq!(store.track(TrackId(2)).unwrap().volume, 100.0);
}

#[test]
fn stale_ids_leave_store_untouched() {
    let (mut store, clip) = two_track_store();
    let before = store.clone();

    let stale = [
        TimelineEdit::RepositionClip {
            track: TrackId(2),
            clip,
            position: 10.0,
        },
        TimelineEdit::ResizeClip {
            track: TrackId(9),
            clip,
            duration: 10.0,
        },
        TimelineEdit::RemoveClip {
            track: TrackId(1),
            clip: ClipId(1999),
        },
        TimelineEdit::MoveClipToTrack {
            source: TrackId(1),
            target: TrackId(7),
            clip,
            position: 0.0,
        },
        TimelineEdit::MoveTrack {
            track: TrackId(1),
            index: 5,
        },
        TimelineEdit::SelectClip {
            track: TrackId(2),
            clip,
        },
    ];
    for edit in stale {
        assert!(store.apply(edit.clone()).is_err(), "{edit:?}");
    }
    assert_eq!(store.tracks(), before.tracks());
    assert_eq!(store.selection(), before.selection());
}

// ── Track operations & selection ───────────────────────────────

#[test]
fn move_track_reorders_lanes() {
    let (mut store, _) = two_track_store();
    store.add_track(TrackKind::Mono);
    store
        .apply(TimelineEdit::MoveTrack {
            track: TrackId(3),
            index: 0,
        })
        .unwrap();
    let order: Vec<_> = store.tracks().iter().map(|t| t.id).collect();
    assert_eq!(order, vec![TrackId(3), TrackId(1), TrackId(2)]);
    assert_eq!(store.track_index(TrackId(1)), Some(1));
}

#[test]
fn selection_follows_moved_clip_and_clears_on_removal() {
    let (mut store, clip) = two_track_store();
    store.select_clip(TrackId(1), clip).unwrap();

    store
        .move_clip_to_track(TrackId(1), TrackId(2), clip, 280.0)
        .unwrap();
    assert_eq!(store.selection().track(), Some(TrackId(2)));
    assert_eq!(store.selection().clip(), Some(clip));

    store.remove_track(TrackId(2)).unwrap();
    assert!(!store.has_clip_selection());
    assert!(store.selected_track().is_none());
}

#[test]
fn canvas_grows_with_rightmost_clip() {
    let (mut store, clip) = two_track_store();
    let config = EngineConfig::default();
    assert_eq!(
        store.canvas_width(config.canvas_min_width, config.canvas_padding),
        1200.0
    );
    store.reposition_clip(TrackId(1), clip, 1400.0).unwrap();
    assert_eq!(store.max_clip_end(), 1540.0);
    assert_eq!(
        store.canvas_width(config.canvas_min_width, config.canvas_padding),
        1640.0
    );
}

// ── Edits as data ──────────────────────────────────────────────

#[test]
fn edits_survive_json_routing() {
    let edits = vec![
        TimelineEdit::AddTrack {
            kind: TrackKind::Stereo,
        },
        TimelineEdit::AddClip {
            track: TrackId(2),
            spec: ClipSpec::named("Pad").at(420.0),
        },
        TimelineEdit::SetMute {
            track: TrackId(2),
            mute: true,
        },
        TimelineEdit::RenameTrack {
            track: TrackId(1),
            name: "Drums".into(),
        },
    ];
    let text = serde_json::to_string(&edits).unwrap();
    let routed: Vec<TimelineEdit> = serde_json::from_str(&text).unwrap();

    let config = EngineConfig::default();
    let mut direct = TrackStore::with_default_track(&config);
    let mut via_json = TrackStore::with_default_track(&config);
    for edit in edits {
        direct.apply(edit).unwrap();
    }
    for edit in routed {
        via_json.apply(edit).unwrap();
    }
    assert_eq!(direct.tracks(), via_json.tracks());
    assert_eq!(via_json.track(TrackId(1)).unwrap().name, "Drums");
    assert_eq!(via_json.clips(TrackId(2))[0].name, "Pad");
}

// ── Properties ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn move_round_trip_restores_clip(
        p0 in 0.0f32..5000.0,
        p in 0.0f32..5000.0,
    ) {
        let (mut store, clip) = two_track_store();
        store.reposition_clip(TrackId(1), clip, p0).unwrap();

        store.move_clip_to_track(TrackId(1), TrackId(2), clip, p).unwrap();
        prop_assert_eq!(occurrences(&store, clip), 1);
        prop_assert!(store.clip(TrackId(2), clip).is_some());

        store.move_clip_to_track(TrackId(2), TrackId(1), clip, p0).unwrap();
        prop_assert_eq!(occurrences(&store, clip), 1);
        let back = store.clip(TrackId(1), clip).unwrap();
        prop_assert_eq!(back.position, p0);
    }

    #[test]
    fn failed_moves_never_lose_clips(target in 3u32..50, p in -100.0f32..100.0) {
        let (mut store, clip) = two_track_store();
        prop_assert!(store
            .move_clip_to_track(TrackId(1), TrackId(target), clip, p)
            .is_err());
        prop_assert_eq!(occurrences(&store, clip), 1);
        prop_assert!(store.clip(TrackId(1), clip).is_some());
    }
}
