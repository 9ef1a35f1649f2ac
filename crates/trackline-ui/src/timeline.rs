//! Timeline view with toolbar, track headers, lanes, clips and guides.
//!
//! Pointer input on the lanes drives the engine's gestures directly. Header
//! and toolbar controls only describe what they want as [`TimelineEdit`]s,
//! which the host applies after the frame.

use crate::theme::Theme;
use crate::widgets;
use egui::{self, Color32, Pos2, Rect, Rounding, Shape, Stroke, Vec2};
use tracing::debug;
use trackline_core::EngineConfig;
use trackline_gesture::{
    ClipGeometry, DropTarget, GestureFrame, GestureOutcome, GesturePhase, GuideKind,
    TimelineEngine,
};
use trackline_timeline::{ClipId, ClipSpec, TimelineEdit, Track, TrackId, TrackKind, TrackStore};

const TOOLBAR_HEIGHT: f32 = 30.0;
const RULER_LABEL_OFFSET: f32 = 3.0;

// ── State ──────────────────────────────────────────────────────

/// What the toolbar's rename field is editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameTarget {
    Track(TrackId),
    Clip(TrackId, ClipId),
}

/// View state that survives between frames.
#[derive(Debug, Default)]
pub struct TimelineViewState {
    /// Preview from the latest gesture update.
    pub frame: Option<GestureFrame>,
    /// Lane under the pointer while dragging. `track_count` is the drop zone.
    pub drag_lane: Option<usize>,
    /// Clip the context menu was opened on.
    pub context_clip: Option<(TrackId, ClipId)>,
    pub rename: Option<(RenameTarget, String)>,
    pub last_outcome: Option<GestureOutcome>,
}

impl TimelineViewState {
    fn end_gesture(&mut self, outcome: GestureOutcome) {
        self.frame = None;
        self.drag_lane = None;
        self.last_outcome = Some(outcome);
    }
}

// ── Rendering ──────────────────────────────────────────────────

pub fn show_timeline(
    ui: &mut egui::Ui,
    state: &mut TimelineViewState,
    engine: &mut TimelineEngine,
) -> Vec<TimelineEdit> {
    let mut edits = Vec::new();

    if engine.phase() != GesturePhase::Idle && ui.input(|i| i.key_pressed(egui::Key::Escape)) {
        cancel_gesture(state, engine);
    }

    ui.vertical(|ui| {
        draw_toolbar(ui, state, engine.store(), &mut edits);

        let lanes_height =
            engine.store().track_count() as f32 * Theme::TRACK_HEIGHT + Theme::DROP_ZONE_HEIGHT;

        ui.horizontal_top(|ui| {
            ui.spacing_mut().item_spacing = Vec2::ZERO;

            ui.allocate_ui(Vec2::new(Theme::HEADER_WIDTH, lanes_height), |ui| {
                ui.vertical(|ui| {
                    ui.spacing_mut().item_spacing = Vec2::ZERO;
                    draw_track_headers(ui, state, engine.store(), &mut edits);
                });
            });

            egui::ScrollArea::horizontal()
                .id_salt("timeline_lanes")
                .show(ui, |ui| {
                    draw_lanes(ui, state, engine, lanes_height, &mut edits);
                });
        });
    });

    edits
}

fn draw_lanes(
    ui: &mut egui::Ui,
    state: &mut TimelineViewState,
    engine: &mut TimelineEngine,
    height: f32,
    edits: &mut Vec<TimelineEdit>,
) {
    let config = engine.config().clone();
    let width = engine
        .store()
        .canvas_width(config.canvas_min_width, config.canvas_padding)
        .max(ui.available_width());
    let (response, painter) =
        ui.allocate_painter(Vec2::new(width, height), egui::Sense::click_and_drag());
    let rect = response.rect;

    // --- Gestures first so this frame paints the fresh preview ---
    if response.drag_started() {
        let origin = ui
            .input(|i| i.pointer.press_origin())
            .or(response.interact_pointer_pos());
        if let Some(origin) = origin {
            begin_gesture(state, engine, rect, origin, edits);
        }
    }
    if response.dragged() {
        if let Some(pos) = response.interact_pointer_pos() {
            update_gesture(ui, state, engine, rect, pos);
        }
    }
    if response.drag_stopped() {
        let released = response
            .interact_pointer_pos()
            .or(ui.input(|i| i.pointer.latest_pos()));
        if let Some(pos) = released {
            finish_gesture(state, engine, rect, pos);
        }
    }

    // --- Hover cursor ---
    if engine.phase() == GesturePhase::Idle {
        if let Some(pos) = response.hover_pos() {
            if let Some((_, _, clip_rect)) =
                clip_at(engine.store(), rect, pos, config.edge_tolerance)
            {
                let icon = if engine
                    .resize_affordance(to_point(pos), to_bounds(clip_rect))
                    .is_some()
                {
                    egui::CursorIcon::ResizeHorizontal
                } else {
                    egui::CursorIcon::Grab
                };
                ui.ctx().set_cursor_icon(icon);
            }
        }
    }

    // --- Clicks and context menu ---
    if response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            edits.push(click_edit(engine.store(), rect, pos, config.edge_tolerance));
        }
    }
    if response.double_clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            if let Some((track, clip, _)) = clip_at(engine.store(), rect, pos, 0.0) {
                if let Some(found) = engine.store().clip(track, clip) {
                    state.rename = Some((RenameTarget::Clip(track, clip), found.name.clone()));
                }
            }
        }
    }
    if response.secondary_clicked() {
        state.context_clip = response
            .interact_pointer_pos()
            .and_then(|pos| clip_at(engine.store(), rect, pos, 0.0))
            .map(|(track, clip, _)| (track, clip));
    }
    response.context_menu(|ui| match state.context_clip {
        Some((track, clip)) => {
            if ui.button("Rename clip").clicked() {
                if let Some(found) = engine.store().clip(track, clip) {
                    state.rename = Some((RenameTarget::Clip(track, clip), found.name.clone()));
                }
                ui.close_menu();
            }
            if ui.button("Remove clip").clicked() {
                edits.push(TimelineEdit::RemoveClip { track, clip });
                ui.close_menu();
            }
        }
        None => {
            ui.label(
                egui::RichText::new("No clip here")
                    .size(Theme::FONT_XS)
                    .color(Theme::t3()),
            );
        }
    });

    // --- Paint ---
    let store = engine.store();
    let track_count = store.track_count();
    let tracks_bottom = rect.top() + track_count as f32 * Theme::TRACK_HEIGHT;

    painter.rect_filled(rect, 0.0, Theme::bg());

    for (i, track) in store.tracks().iter().enumerate() {
        let lane = lane_rect(rect, i);
        let selected = store.selection().track() == Some(track.id);
        let lane_bg = if selected {
            Theme::accent_subtle()
        } else if i % 2 == 0 {
            Theme::white_04()
        } else {
            Color32::TRANSPARENT
        };
        painter.rect_filled(lane, 0.0, lane_bg);
        painter.line_segment(
            [lane.left_bottom(), lane.right_bottom()],
            Stroke::new(Theme::STROKE_SUBTLE, Theme::white_06()),
        );
    }

    draw_grid(&painter, rect, tracks_bottom, &config);

    let dragging = engine.phase() == GesturePhase::Dragging;
    draw_drop_zone(
        &painter,
        Rect::from_min_max(Pos2::new(rect.left(), tracks_bottom), rect.right_bottom()),
        dragging && state.drag_lane == Some(track_count),
    );

    let active = engine.active_clip();
    let phase = engine.phase();
    for (i, track) in store.tracks().iter().enumerate() {
        for clip in &track.clips {
            let fill = Theme::clip_fill(&clip.color);
            let stored = ClipGeometry::new(clip.position, clip.duration);
            let selected = store.selection().clip() == Some(clip.id);
            let is_active = active == Some((track.id, clip.id));

            match (is_active, phase, state.frame.as_ref()) {
                (true, GesturePhase::Resizing(_), Some(frame)) => {
                    let r = clip_rect(rect, i, track_count, frame.preview);
                    draw_clip(&painter, r, &clip.name, fill, ClipLook::Selected);
                }
                (true, GesturePhase::Dragging, Some(frame)) => {
                    let r = clip_rect(rect, i, track_count, stored);
                    draw_clip(&painter, r, &clip.name, fill, ClipLook::Source);
                    let lane = state.drag_lane.unwrap_or(i);
                    let ghost = clip_rect(rect, lane, track_count, frame.preview);
                    draw_clip(&painter, ghost, &clip.name, fill, ClipLook::Ghost);
                }
                _ => {
                    let look = if selected {
                        ClipLook::Selected
                    } else {
                        ClipLook::Normal
                    };
                    let r = clip_rect(rect, i, track_count, stored);
                    draw_clip(&painter, r, &clip.name, fill, look);
                }
            }
        }
    }

    for guide in engine.guides() {
        let x = rect.left() + guide.position;
        let color = match guide.kind {
            GuideKind::ClipStart | GuideKind::ClipEnd => Theme::cyan(),
            GuideKind::Grid => Theme::amber(),
        };
        painter.line_segment(
            [Pos2::new(x, rect.top()), Pos2::new(x, tracks_bottom)],
            Stroke::new(Theme::GUIDE_WIDTH, Theme::with_alpha(color, 200)),
        );
    }

    if track_count == 0 {
        painter.text(
            Pos2::new(rect.left() + Theme::SPACE_MD, rect.top() + Theme::DROP_ZONE_HEIGHT * 0.5),
            egui::Align2::LEFT_CENTER,
            "No tracks. Add one from the toolbar.",
            egui::FontId::proportional(Theme::FONT_XS),
            Theme::t3(),
        );
    }
}

// ── Gesture plumbing ───────────────────────────────────────────

fn begin_gesture(
    state: &mut TimelineViewState,
    engine: &mut TimelineEngine,
    lanes: Rect,
    origin: Pos2,
    edits: &mut Vec<TimelineEdit>,
) {
    let tolerance = engine.config().edge_tolerance;
    let Some((track, clip, clip_rect)) = clip_at(engine.store(), lanes, origin, tolerance) else {
        return;
    };
    let pointer = to_point(origin);
    let bounds = to_bounds(clip_rect);

    // An edge press resizes; anything else on the clip drags it.
    let frame = engine
        .begin_resize(track, clip, pointer, bounds)
        .or_else(|| engine.begin_drag(track, clip, pointer, bounds));
    if frame.is_some() {
        edits.push(TimelineEdit::SelectClip { track, clip });
        state.drag_lane = engine.store().track_index(track);
    }
    state.frame = frame;
}

fn update_gesture(
    ui: &egui::Ui,
    state: &mut TimelineViewState,
    engine: &mut TimelineEngine,
    lanes: Rect,
    pos: Pos2,
) {
    match engine.phase() {
        GesturePhase::Dragging => {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
            state.drag_lane = lane_index(lanes, pos.y)
                .filter(|_| lanes.contains(pos))
                .map(|i| i.min(engine.store().track_count()));
            state.frame = engine.update_drag(to_point(pos), lanes.left());
        }
        GesturePhase::Resizing(_) => {
            ui.ctx().set_cursor_icon(egui::CursorIcon::ResizeHorizontal);
            state.frame = engine.update_resize(to_point(pos));
        }
        GesturePhase::Idle => {}
    }
}

fn finish_gesture(
    state: &mut TimelineViewState,
    engine: &mut TimelineEngine,
    lanes: Rect,
    pos: Pos2,
) {
    let outcome = match engine.phase() {
        GesturePhase::Dragging => {
            let target = drop_target(lanes, engine.store().tracks(), pos);
            engine.commit_drag(to_point(pos), target)
        }
        GesturePhase::Resizing(_) => engine.commit_resize(),
        GesturePhase::Idle => GestureOutcome::Cancelled,
    };
    if let GestureOutcome::Committed(commit) = &outcome {
        debug!(?commit, "timeline gesture committed");
    }
    state.end_gesture(outcome);
}

fn cancel_gesture(state: &mut TimelineViewState, engine: &mut TimelineEngine) {
    let outcome = match engine.phase() {
        GesturePhase::Dragging => engine.cancel_drag(),
        GesturePhase::Resizing(_) => engine.cancel_resize(),
        GesturePhase::Idle => GestureOutcome::Cancelled,
    };
    debug!("timeline gesture cancelled from keyboard");
    state.end_gesture(outcome);
}

fn click_edit(store: &TrackStore, lanes: Rect, pos: Pos2, tolerance: f32) -> TimelineEdit {
    if let Some((track, clip, _)) = clip_at(store, lanes, pos, tolerance) {
        return TimelineEdit::SelectClip { track, clip };
    }
    match lane_index(lanes, pos.y).and_then(|i| store.track_by_index(i)) {
        Some(track) => TimelineEdit::SelectTrack { track: track.id },
        None => TimelineEdit::ClearSelection,
    }
}

// ── Layout helpers ─────────────────────────────────────────────

fn to_point(pos: Pos2) -> trackline_core::Vec2 {
    trackline_core::Vec2::new(pos.x, pos.y)
}

fn to_bounds(rect: Rect) -> trackline_core::Rect {
    trackline_core::Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

/// Index of the lane band containing `y`. Bands past the last track are
/// returned too; callers bound them.
fn lane_index(lanes: Rect, y: f32) -> Option<usize> {
    let offset = y - lanes.top();
    (offset >= 0.0).then(|| (offset / Theme::TRACK_HEIGHT) as usize)
}

fn lane_rect(lanes: Rect, index: usize) -> Rect {
    Rect::from_min_size(
        Pos2::new(lanes.left(), lanes.top() + index as f32 * Theme::TRACK_HEIGHT),
        Vec2::new(lanes.width(), Theme::TRACK_HEIGHT),
    )
}

/// Screen rect of a clip placed in lane `index`. `index == track_count`
/// places it in the drop zone.
fn clip_rect(lanes: Rect, index: usize, track_count: usize, geometry: ClipGeometry) -> Rect {
    let band_height = if index < track_count {
        Theme::TRACK_HEIGHT
    } else {
        Theme::DROP_ZONE_HEIGHT
    };
    let top = lanes.top() + index.min(track_count) as f32 * Theme::TRACK_HEIGHT;
    Rect::from_min_size(
        Pos2::new(lanes.left() + geometry.position, top + Theme::CLIP_INSET),
        Vec2::new(geometry.duration, band_height - Theme::CLIP_INSET * 2.0),
    )
}

/// Topmost clip under `pos`, widened by `tolerance` on both sides so a
/// press just outside an edge still grabs it.
fn clip_at(
    store: &TrackStore,
    lanes: Rect,
    pos: Pos2,
    tolerance: f32,
) -> Option<(TrackId, ClipId, Rect)> {
    let index = lane_index(lanes, pos.y)?;
    let track = store.track_by_index(index)?;
    let track_count = store.track_count();
    let rects = || {
        track.clips.iter().rev().map(move |clip| {
            let geometry = ClipGeometry::new(clip.position, clip.duration);
            (clip.id, clip_rect(lanes, index, track_count, geometry))
        })
    };
    rects()
        .find(|(_, r)| r.contains(pos))
        .or_else(|| rects().find(|(_, r)| r.expand2(Vec2::new(tolerance, 0.0)).contains(pos)))
        .map(|(clip, r)| (track.id, clip, r))
}

/// Where a drag released at `pointer` lands.
pub fn drop_target(lanes: Rect, tracks: &[Track], pointer: Pos2) -> DropTarget {
    if !lanes.contains(pointer) {
        return DropTarget::Outside;
    }
    let left = lanes.left();
    match lane_index(lanes, pointer.y).and_then(|i| tracks.get(i)) {
        Some(track) => DropTarget::Track {
            track: track.id,
            left,
        },
        None => DropTarget::BelowTracks { left },
    }
}

// ── Painting ───────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClipLook {
    Normal,
    Selected,
    /// Left in place while its ghost is dragged.
    Source,
    Ghost,
}

fn draw_clip(painter: &egui::Painter, rect: Rect, name: &str, fill: Color32, look: ClipLook) {
    let rounding = Rounding::same(Theme::RADIUS_SM);
    let (bg_alpha, border, border_width) = match look {
        ClipLook::Normal => (150, Theme::with_alpha(fill, 220), Theme::STROKE_SUBTLE),
        ClipLook::Selected => (190, Color32::WHITE, Theme::STROKE_EMPHASIS * 1.5),
        ClipLook::Source => (50, Theme::with_alpha(fill, 90), Theme::STROKE_SUBTLE),
        ClipLook::Ghost => (120, Theme::accent(), Theme::STROKE_EMPHASIS),
    };

    painter.rect_filled(rect, rounding, Theme::with_alpha(fill, bg_alpha));
    painter.rect_stroke(rect, rounding, Stroke::new(border_width, border));

    // Edge grips
    for x in [rect.left() + 3.0, rect.right() - 3.0] {
        painter.line_segment(
            [
                Pos2::new(x, rect.top() + rect.height() * 0.3),
                Pos2::new(x, rect.bottom() - rect.height() * 0.3),
            ],
            Stroke::new(1.0, Theme::white_25()),
        );
    }

    let text_color = match look {
        ClipLook::Source => Theme::t3(),
        _ => Theme::t1(),
    };
    painter.with_clip_rect(rect.shrink(2.0)).text(
        Pos2::new(rect.left() + Theme::SPACE_SM, rect.center().y),
        egui::Align2::LEFT_CENTER,
        name,
        egui::FontId::proportional(Theme::FONT_SM),
        text_color,
    );
}

fn draw_grid(painter: &egui::Painter, rect: Rect, bottom: f32, config: &EngineConfig) {
    let lines = |step: f32, color: Color32, width: f32| {
        if step <= 0.0 {
            return;
        }
        let count = (rect.width() / step).floor() as usize;
        for i in 0..=count {
            let x = rect.left() + i as f32 * step;
            painter.line_segment(
                [Pos2::new(x, rect.top()), Pos2::new(x, bottom)],
                Stroke::new(width, color),
            );
        }
    };
    lines(config.minor_grid_size, Theme::grid_minor(), Theme::STROKE_SUBTLE);
    lines(config.grid_size, Theme::grid_major(), Theme::STROKE_EMPHASIS);

    // Positions along the top of each major line
    if config.grid_size > 0.0 {
        let count = (rect.width() / config.grid_size).floor() as usize;
        for i in 0..=count {
            let position = i as f32 * config.grid_size;
            painter.text(
                Pos2::new(rect.left() + position + RULER_LABEL_OFFSET, rect.top() + 1.0),
                egui::Align2::LEFT_TOP,
                format!("{position:.0}"),
                egui::FontId::monospace(9.0),
                Theme::t3(),
            );
        }
    }
}

fn draw_drop_zone(painter: &egui::Painter, zone: Rect, armed: bool) {
    let (fill, color) = if armed {
        (Theme::accent_subtle(), Theme::accent())
    } else {
        (Color32::TRANSPARENT, Theme::t3())
    };
    painter.rect_filled(zone, 0.0, fill);
    painter.extend(Shape::dashed_line(
        &[zone.left_top(), zone.right_top()],
        Stroke::new(Theme::STROKE_EMPHASIS, Theme::with_alpha(color, 160)),
        6.0,
        4.0,
    ));
    painter.text(
        Pos2::new(zone.left() + Theme::SPACE_MD, zone.center().y),
        egui::Align2::LEFT_CENTER,
        "Drop here to create a new track",
        egui::FontId::proportional(Theme::FONT_XS),
        color,
    );
}

// ── Sub-components ─────────────────────────────────────────────

fn draw_toolbar(
    ui: &mut egui::Ui,
    state: &mut TimelineViewState,
    store: &TrackStore,
    edits: &mut Vec<TimelineEdit>,
) {
    Theme::toolbar_frame().show(ui, |ui| {
        ui.set_height(TOOLBAR_HEIGHT);
        ui.horizontal_centered(|ui| {
            ui.spacing_mut().item_spacing = Vec2::new(Theme::SPACE_SM, 0.0);

            for kind in [TrackKind::Mono, TrackKind::Stereo] {
                if ui
                    .button(
                        egui::RichText::new(format!("+ {kind} track"))
                            .size(Theme::FONT_XS)
                            .color(Theme::t2()),
                    )
                    .clicked()
                {
                    edits.push(TimelineEdit::AddTrack { kind });
                }
            }

            // Separator
            ui.add_space(Theme::SPACE_XS);
            let (sep_resp, sep_painter) =
                ui.allocate_painter(Vec2::new(1.0, 12.0), egui::Sense::hover());
            sep_painter.rect_filled(sep_resp.rect, 0.0, Theme::white_10());
            ui.add_space(Theme::SPACE_XS);

            let mut finished = false;
            if let Some((target, buffer)) = state.rename.as_mut() {
                ui.label(
                    egui::RichText::new("Rename")
                        .size(Theme::FONT_XS)
                        .color(Theme::t3()),
                );
                let field = ui.add(egui::TextEdit::singleline(buffer).desired_width(160.0));
                let entered = field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if entered || ui.small_button("OK").clicked() {
                    edits.push(rename_edit(*target, buffer.clone()));
                    finished = true;
                }
                if ui.small_button("Cancel").clicked() {
                    finished = true;
                }
            } else {
                ui.label(
                    egui::RichText::new(selection_summary(store))
                        .size(Theme::FONT_XS)
                        .color(Theme::t2()),
                );
            }
            if finished {
                state.rename = None;
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(format!(
                        "{} tracks  {} clips",
                        store.track_count(),
                        store.clip_count()
                    ))
                    .size(Theme::FONT_XS)
                    .color(Theme::t3())
                    .family(egui::FontFamily::Monospace),
                );
            });
        });
    });
}

fn rename_edit(target: RenameTarget, name: String) -> TimelineEdit {
    match target {
        RenameTarget::Track(track) => TimelineEdit::RenameTrack { track, name },
        RenameTarget::Clip(track, clip) => TimelineEdit::RenameClip { track, clip, name },
    }
}

fn selection_summary(store: &TrackStore) -> String {
    match (store.selected_track(), store.selected_clip()) {
        (Some(track), Some(clip)) => format!("{} / {}", track.name, clip.name),
        (Some(track), None) => track.name.clone(),
        _ => "Nothing selected".to_string(),
    }
}

fn draw_track_headers(
    ui: &mut egui::Ui,
    state: &mut TimelineViewState,
    store: &TrackStore,
    edits: &mut Vec<TimelineEdit>,
) {
    let count = store.track_count();
    for (index, track) in store.tracks().iter().enumerate() {
        let selected = store.selection().track() == Some(track.id);
        let name_color = match track.kind {
            TrackKind::Mono => Theme::with_alpha(Theme::accent(), 200),
            TrackKind::Stereo => Theme::with_alpha(Theme::green(), 200),
        };

        let header_frame = egui::Frame::none()
            .fill(if selected { Theme::bg2() } else { Theme::bg1() })
            .stroke(Stroke::new(Theme::STROKE_SUBTLE, Theme::white_04()))
            .inner_margin(egui::Margin::symmetric(Theme::SPACE_SM, Theme::SPACE_XS));

        header_frame.show(ui, |ui| {
            ui.set_height(Theme::TRACK_HEIGHT - Theme::SPACE_XS * 2.0);
            ui.set_width(Theme::HEADER_WIDTH - Theme::SPACE_SM * 2.0);
            ui.spacing_mut().item_spacing = Vec2::new(Theme::SPACE_XS, 2.0);

            ui.horizontal(|ui| {
                let name = ui.add(
                    egui::Label::new(
                        egui::RichText::new(&track.name)
                            .size(Theme::FONT_MD)
                            .color(name_color)
                            .strong(),
                    )
                    .sense(egui::Sense::click())
                    .truncate(),
                );
                if name.clicked() {
                    edits.push(TimelineEdit::SelectTrack { track: track.id });
                }
                if name.double_clicked() {
                    state.rename = Some((RenameTarget::Track(track.id), track.name.clone()));
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if widgets::icon_button(ui, "\u{00D7}", "Remove track") {
                        edits.push(TimelineEdit::RemoveTrack { track: track.id });
                    }
                    if widgets::icon_button(ui, "+", "Add clip") {
                        edits.push(TimelineEdit::AddClip {
                            track: track.id,
                            spec: ClipSpec::default().at(track.end()),
                        });
                    }
                    if index + 1 < count && widgets::icon_button(ui, "\u{25BC}", "Move down") {
                        edits.push(TimelineEdit::MoveTrack {
                            track: track.id,
                            index: index + 1,
                        });
                    }
                    if index > 0 && widgets::icon_button(ui, "\u{25B2}", "Move up") {
                        edits.push(TimelineEdit::MoveTrack {
                            track: track.id,
                            index: index - 1,
                        });
                    }
                });
            });

            ui.horizontal(|ui| {
                if widgets::flag_button(ui, "M", track.mute, Theme::red()) {
                    edits.push(TimelineEdit::SetMute {
                        track: track.id,
                        mute: !track.mute,
                    });
                }
                if widgets::flag_button(ui, "S", track.solo, Theme::amber()) {
                    edits.push(TimelineEdit::SetSolo {
                        track: track.id,
                        solo: !track.solo,
                    });
                }
                if let Some(volume) = widgets::level_readout(ui, "Vol", track.volume) {
                    edits.push(TimelineEdit::SetVolume {
                        track: track.id,
                        volume,
                    });
                }
                if let Some(pan) = widgets::level_readout(ui, "Pan", track.pan) {
                    edits.push(TimelineEdit::SetPan {
                        track: track.id,
                        pan,
                    });
                }
            });
        });
    }

    // Keeps the header column as tall as the lanes' drop zone.
    ui.add_space(Theme::DROP_ZONE_HEIGHT);
}
