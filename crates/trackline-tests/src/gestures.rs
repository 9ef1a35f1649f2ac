//! Integration tests for pointer gestures.
//!
//! Drives trackline-gesture's engine with absolute pointer coordinates and
//! caller-supplied bounds, then checks what trackline-timeline's store holds.

use proptest::prelude::*;
use trackline_core::limits::MIN_DURATION;
use trackline_core::{ClipEdge, EngineConfig, Rect, Vec2};
use trackline_gesture::{
    resized, Commit, DropTarget, GestureOutcome, GesturePhase, GuideKind, TimelineEngine,
};
use trackline_timeline::{ClipId, ClipSpec, TimelineEdit, TrackId, TrackKind, TrackStore};

// ── Helpers ────────────────────────────────────────────────────

/// Screen x of the lanes' left edge.
const LANES_LEFT: f32 = 180.0;
const LANE_TOP: f32 = 32.0;
const LANE_HEIGHT: f32 = 64.0;

fn lane_y(index: usize) -> f32 {
    LANE_TOP + index as f32 * LANE_HEIGHT + LANE_HEIGHT * 0.5
}

fn bounds(engine: &TimelineEngine, track: TrackId, clip: ClipId) -> Rect {
    let index = engine.store().track_index(track).unwrap();
    let c = engine.store().clip(track, clip).unwrap();
    Rect::new(
        LANES_LEFT + c.position,
        LANE_TOP + index as f32 * LANE_HEIGHT,
        c.duration,
        LANE_HEIGHT,
    )
}

fn on_track(track: TrackId) -> DropTarget {
    DropTarget::Track {
        track,
        left: LANES_LEFT,
    }
}

/// One mono track with clip 1001 at 0..140.
fn single_clip_engine() -> (TimelineEngine, ClipId) {
    let config = EngineConfig::default();
    let mut store = TrackStore::with_default_track(&config);
    let clip = store.add_clip(TrackId(1), ClipSpec::default()).unwrap();
    (TimelineEngine::new(store, config), clip)
}

// ── Drag ───────────────────────────────────────────────────────

#[test]
fn drag_commit_snaps_to_grid() {
    let (mut engine, clip) = single_clip_engine();
    assert_eq!(clip, ClipId(1001));
    let rect = bounds(&engine, TrackId(1), clip);

    // Grab at the clip's left edge: pointer offset 0.
    let pointer = Vec2::new(rect.left(), lane_y(0));
    let frame = engine.begin_drag(TrackId(1), clip, pointer, rect).unwrap();
    assert_eq!(frame.preview.position, 0.0);

    let target = Vec2::new(LANES_LEFT + 305.0, lane_y(0));
    let frame = engine.update_drag(target, LANES_LEFT).unwrap();
    assert_eq!(frame.preview.position, 305.0);
    // Nothing within the live threshold of 305.
    assert!(frame.guides.is_empty());

    let outcome = engine.commit_drag(target, on_track(TrackId(1)));
    assert_eq!(
        outcome,
        GestureOutcome::Committed(Commit::Repositioned {
            track: TrackId(1),
            clip,
            position: 280.0,
        })
    );
    assert_eq!(engine.store().clip(TrackId(1), clip).unwrap().position, 280.0);
}

#[test]
fn drag_updates_never_write() {
    let (mut engine, clip) = single_clip_engine();
    let before = engine.store().tracks().to_vec();
    let rect = bounds(&engine, TrackId(1), clip);
    engine.begin_drag(TrackId(1), clip, Vec2::new(rect.left() + 30.0, lane_y(0)), rect);

    for x in [400.0, 520.0, 90.0, 1300.0] {
        engine.update_drag(Vec2::new(x, lane_y(0)), LANES_LEFT);
        assert_eq!(engine.store().tracks(), before.as_slice());
    }
    assert_eq!(engine.phase(), GesturePhase::Dragging);
}

#[test]
fn drag_guides_track_neighbour_edges() {
    let (mut engine, clip) = single_clip_engine();
    engine.apply(TimelineEdit::AddTrack {
        kind: TrackKind::Mono,
    });
    engine.apply(TimelineEdit::AddClip {
        track: TrackId(2),
        spec: ClipSpec::default().at(500.0).lasting(90.0),
    });
    let rect = bounds(&engine, TrackId(1), clip);
    engine.begin_drag(TrackId(1), clip, Vec2::new(rect.left(), lane_y(0)), rect);

    // Left edge at 594: near the neighbour's end (590), far from any grid line.
    let frame = engine
        .update_drag(Vec2::new(LANES_LEFT + 594.0, lane_y(0)), LANES_LEFT)
        .unwrap();
    assert_eq!(frame.guides.len(), 1);
    assert_eq!(frame.guides[0].position, 590.0);
    assert_eq!(frame.guides[0].kind, GuideKind::ClipEnd);
    assert_eq!(engine.guides(), frame.guides.as_slice());

    // Drop snaps to the grid, not the guide.
    engine.commit_drag(Vec2::new(LANES_LEFT + 594.0, lane_y(0)), on_track(TrackId(1)));
    assert_eq!(engine.store().clip(TrackId(1), clip).unwrap().position, 560.0);
    assert!(engine.guides().is_empty());
}

#[test]
fn drag_below_tracks_creates_track() {
    let (mut engine, clip) = single_clip_engine();
    let rect = bounds(&engine, TrackId(1), clip);
    engine.begin_drag(TrackId(1), clip, Vec2::new(rect.left(), lane_y(0)), rect);

    let drop_at = Vec2::new(LANES_LEFT + 150.0, lane_y(1));
    engine.update_drag(drop_at, LANES_LEFT);
    let outcome = engine.commit_drag(drop_at, DropTarget::BelowTracks { left: LANES_LEFT });

    let GestureOutcome::Committed(Commit::MovedToNewTrack { source, track, .. }) = outcome else {
        panic!("expected a new-track commit, got {outcome:?}");
    };
    let store = engine.store();
    assert_eq!(source, TrackId(1));
    assert_eq!(store.track_count(), 2);
    assert_eq!(store.track(track).unwrap().name, "Track 2");
    assert!(store.clips(TrackId(1)).is_empty());
    assert_eq!(store.clips(track).len(), 1);
    assert_eq!(store.clip(track, clip).unwrap().position, 140.0);
    assert_eq!(store.selection().track(), Some(track));
}

#[test]
fn drop_below_tracks_finds_free_id_after_max_id() {
    let (mut engine, clip) = single_clip_engine();
    assert!(engine.apply(TimelineEdit::CreateTrack {
        id: TrackId(4),
        name: "Track 2".into(),
    }));
    assert!(engine.apply(TimelineEdit::CreateTrack {
        id: TrackId(u32::MAX),
        name: "Track 3".into(),
    }));
    assert_eq!(engine.store().track_count(), 3);

    let rect = bounds(&engine, TrackId(1), clip);
    engine.begin_drag(TrackId(1), clip, Vec2::new(rect.left(), lane_y(0)), rect);
    let outcome = engine.commit_drag(
        Vec2::new(LANES_LEFT, lane_y(3)),
        DropTarget::BelowTracks { left: LANES_LEFT },
    );

    let GestureOutcome::Committed(Commit::MovedToNewTrack { track, .. }) = outcome else {
        panic!("expected a new-track commit, got {outcome:?}");
    };
    assert_eq!(track, TrackId(2));
    assert_eq!(engine.store().track_count(), 4);
    assert_eq!(engine.store().clip(track, clip).unwrap().position, 0.0);
}

#[test]
fn drag_to_other_track_then_back() {
    let (mut engine, clip) = single_clip_engine();
    engine.apply(TimelineEdit::AddTrack {
        kind: TrackKind::Stereo,
    });

    let rect = bounds(&engine, TrackId(1), clip);
    engine.begin_drag(TrackId(1), clip, Vec2::new(rect.left() + 10.0, lane_y(0)), rect);
    let outcome = engine.commit_drag(
        Vec2::new(LANES_LEFT + 10.0 + 420.0, lane_y(1)),
        on_track(TrackId(2)),
    );
    assert!(matches!(
        outcome,
        GestureOutcome::Committed(Commit::MovedToTrack { target, position, .. })
            if target == TrackId(2) && position == 420.0
    ));

    let rect = bounds(&engine, TrackId(2), clip);
    engine.begin_drag(TrackId(2), clip, Vec2::new(rect.left(), lane_y(1)), rect);
    engine.commit_drag(Vec2::new(LANES_LEFT, lane_y(0)), on_track(TrackId(1)));

    let store = engine.store();
    assert_eq!(store.clip(TrackId(1), clip).unwrap().position, 0.0);
    assert!(store.clips(TrackId(2)).is_empty());
}

#[test]
fn drop_outside_or_escape_changes_nothing() {
    let (mut engine, clip) = single_clip_engine();
    let before = engine.store().tracks().to_vec();
    let rect = bounds(&engine, TrackId(1), clip);

    engine.begin_drag(TrackId(1), clip, Vec2::new(rect.left(), lane_y(0)), rect);
    engine.update_drag(Vec2::new(LANES_LEFT + 700.0, lane_y(0)), LANES_LEFT);
    let outcome = engine.commit_drag(Vec2::new(5.0, 5.0), DropTarget::Outside);
    assert_eq!(outcome, GestureOutcome::Cancelled);

    engine.begin_drag(TrackId(1), clip, Vec2::new(rect.left(), lane_y(0)), rect);
    engine.update_drag(Vec2::new(LANES_LEFT + 700.0, lane_y(0)), LANES_LEFT);
    assert_eq!(engine.cancel_drag(), GestureOutcome::Cancelled);

    assert_eq!(engine.store().tracks(), before.as_slice());
    assert_eq!(engine.phase(), GesturePhase::Idle);
}

// ── Resize ─────────────────────────────────────────────────────

#[test]
fn right_resize_commits_snapped_edge() {
    let config = EngineConfig::default();
    let mut store = TrackStore::with_default_track(&config);
    let clip = store
        .add_clip(TrackId(1), ClipSpec::default().at(100.0).lasting(100.0))
        .unwrap();
    let mut engine = TimelineEngine::new(store, config);
    let rect = bounds(&engine, TrackId(1), clip);

    let grab = Vec2::new(rect.right() - 2.0, lane_y(0));
    engine.begin_resize(TrackId(1), clip, grab, rect).unwrap();
    assert_eq!(engine.phase(), GesturePhase::Resizing(ClipEdge::Right));

    let frame = engine
        .update_resize(Vec2::new(grab.x + 45.0, lane_y(0)))
        .unwrap();
    assert_eq!(frame.preview.duration, 145.0);

    let outcome = engine.commit_resize();
    assert_eq!(
        outcome,
        GestureOutcome::Committed(Commit::Resized {
            track: TrackId(1),
            clip,
            edge: ClipEdge::Right,
            position: 100.0,
            duration: 180.0,
        })
    );
}

#[test]
fn left_resize_keeps_right_edge_until_commit() {
    let config = EngineConfig::default();
    let mut store = TrackStore::with_default_track(&config);
    let clip = store
        .add_clip(TrackId(1), ClipSpec::default().at(420.0).lasting(140.0))
        .unwrap();
    let mut engine = TimelineEngine::new(store, config);
    let rect = bounds(&engine, TrackId(1), clip);

    let grab = Vec2::new(rect.left() + 3.0, lane_y(0));
    engine.begin_resize(TrackId(1), clip, grab, rect).unwrap();
    for dx in [-50.0, -333.0, 17.0, 119.0, 400.0, -1000.0] {
        let frame = engine
            .update_resize(Vec2::new(grab.x + dx, lane_y(0)))
            .unwrap();
        assert_eq!(frame.preview.end(), 560.0, "dx {dx}");
        assert!(frame.preview.position >= 0.0);
        assert!(frame.preview.duration >= MIN_DURATION);
    }

    // Last update hit the zero clamp; commit snaps 0 to 0.
    engine.commit_resize();
    let stored = engine.store().clip(TrackId(1), clip).unwrap();
    assert_eq!((stored.position, stored.duration), (0.0, 560.0));
}

#[test]
fn left_resize_guide_snap_picks_the_grid_line() {
    let config = EngineConfig::default();
    let mut store = TrackStore::with_default_track(&config);
    // Neighbour ends at 352.
    store
        .add_clip(TrackId(1), ClipSpec::default().at(212.0).lasting(140.0))
        .unwrap();
    let clip = store
        .add_clip(TrackId(1), ClipSpec::default().at(560.0).lasting(140.0))
        .unwrap();
    let mut engine = TimelineEngine::new(store, config);
    let rect = bounds(&engine, TrackId(1), clip);

    let grab = Vec2::new(rect.left() + 3.0, lane_y(0));
    engine.begin_resize(TrackId(1), clip, grab, rect).unwrap();
    let frame = engine
        .update_resize(Vec2::new(grab.x - 212.0, lane_y(0)))
        .unwrap();
    assert_eq!(frame.preview.position, 348.0);
    assert!(frame
        .guides
        .iter()
        .any(|g| g.kind == GuideKind::ClipEnd && g.position == 352.0));

    // 348 alone would round down to 280; the guide at 352 rounds up to 420.
    let outcome = engine.commit_resize();
    assert_eq!(
        outcome,
        GestureOutcome::Committed(Commit::Resized {
            track: TrackId(1),
            clip,
            edge: ClipEdge::Left,
            position: 420.0,
            duration: 280.0,
        })
    );
}

#[test]
fn resize_is_refused_from_the_body() {
    let (mut engine, clip) = single_clip_engine();
    let rect = bounds(&engine, TrackId(1), clip);
    let body = Vec2::new(rect.left() + 70.0, lane_y(0));
    assert!(engine.resize_affordance(body, rect).is_none());
    assert!(engine.begin_resize(TrackId(1), clip, body, rect).is_none());
    // The same press can still start a drag.
    assert!(engine.begin_drag(TrackId(1), clip, body, rect).is_some());
}

// ── Configuration ──────────────────────────────────────────────

#[test]
fn configured_grid_changes_drop_snapping() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("engine.json");
    std::fs::write(&path, r#"{ "grid_size": 100.0, "minor_grid_size": 10.0 }"#).unwrap();

    let config = EngineConfig::load_or_default(&path);
    assert_eq!(config.grid_size, 100.0);
    let mut store = TrackStore::with_default_track(&config);
    let clip = store.add_clip(TrackId(1), ClipSpec::default()).unwrap();
    let mut engine = TimelineEngine::new(store, config);

    let rect = bounds(&engine, TrackId(1), clip);
    engine.begin_drag(TrackId(1), clip, Vec2::new(rect.left(), lane_y(0)), rect);
    engine.commit_drag(Vec2::new(LANES_LEFT + 305.0, lane_y(0)), on_track(TrackId(1)));
    assert_eq!(engine.store().clip(TrackId(1), clip).unwrap().position, 300.0);
}

#[test]
fn invalid_config_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("engine.json");
    // Commit threshold looser than the live threshold.
    std::fs::write(
        &path,
        r#"{ "guide_threshold": 4.0, "commit_snap_threshold": 8.0 }"#,
    )
    .unwrap();
    assert!(EngineConfig::load(&path).is_err());
    assert_eq!(EngineConfig::load_or_default(&path), EngineConfig::default());
}

// ── Properties ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn left_resize_updates_preserve_right_edge(
        position in 0.0f32..1500.0,
        duration in 20.0f32..600.0,
        moves in proptest::collection::vec(-2000.0f32..2000.0, 1..12),
    ) {
        for delta in moves {
            let live = resized(ClipEdge::Left, position, duration, delta);
            prop_assert!((live.end() - (position + duration)).abs() < 1e-2);
            prop_assert!(live.position >= 0.0);
            prop_assert!(live.duration >= MIN_DURATION - 1e-3);
        }
    }

    #[test]
    fn committed_gestures_keep_clip_invariants(
        start in 0.0f32..800.0,
        length in 20.0f32..400.0,
        grab_right in any::<bool>(),
        pointer_moves in proptest::collection::vec(-1500.0f32..1500.0, 1..8),
    ) {
        let config = EngineConfig::default();
        let mut store = TrackStore::with_default_track(&config);
        let clip = store
            .add_clip(TrackId(1), ClipSpec::default().at(start).lasting(length))
            .unwrap();
        let mut engine = TimelineEngine::new(store, config);
        let rect = bounds(&engine, TrackId(1), clip);

        let grab_x = if grab_right { rect.right() - 1.0 } else { rect.left() + 1.0 };
        let started = engine.begin_resize(TrackId(1), clip, Vec2::new(grab_x, lane_y(0)), rect);
        prop_assert!(started.is_some());
        for dx in pointer_moves {
            engine.update_resize(Vec2::new(grab_x + dx, lane_y(0)));
        }
        engine.commit_resize();

        let stored = engine.store().clip(TrackId(1), clip).unwrap();
        prop_assert!(stored.position >= 0.0);
        prop_assert!(stored.duration >= MIN_DURATION);
        prop_assert_eq!(engine.phase(), GesturePhase::Idle);
    }
}
