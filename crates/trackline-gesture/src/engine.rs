//! The facade a UI layer drives.
//!
//! `TimelineEngine` owns the store and at most one active gesture. Gesture
//! entry points take absolute pointer coordinates plus caller-supplied
//! element bounds and hand back preview geometry and guides. Failures are
//! logged and absorbed: a gesture that cannot commit ends as `Cancelled` and
//! leaves the store untouched.

use tracing::{debug, warn};
use trackline_core::{edge_hit_test, ClipEdge, EngineConfig, Rect, TracklineError, Vec2};
use trackline_timeline::{ClipId, TimelineEdit, TrackId, TrackStore};

use crate::context::GestureContext;
use crate::drag::DragSession;
use crate::guides::{GuideSet, Guideline};
use crate::outcome::{ClipGeometry, DropTarget, GestureFrame, GestureOutcome};
use crate::payload::DragPayload;
use crate::resize::ResizeSession;

/// What the engine is doing right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Idle,
    Dragging,
    Resizing(ClipEdge),
}

#[derive(Debug, Clone)]
enum ActiveGesture {
    Drag {
        session: DragSession,
        ctx: GestureContext,
    },
    Resize {
        session: ResizeSession,
        ctx: GestureContext,
    },
}

impl ActiveGesture {
    fn ctx(&self) -> &GestureContext {
        match self {
            ActiveGesture::Drag { ctx, .. } | ActiveGesture::Resize { ctx, .. } => ctx,
        }
    }
}

fn frame(preview: ClipGeometry, ctx: &GestureContext) -> GestureFrame {
    GestureFrame {
        preview,
        guides: GuideSet::from_slice(ctx.guides()),
    }
}

/// Store, configuration and the gesture in flight.
#[derive(Debug, Clone)]
pub struct TimelineEngine {
    store: TrackStore,
    config: EngineConfig,
    active: Option<ActiveGesture>,
}

impl TimelineEngine {
    pub fn new(store: TrackStore, config: EngineConfig) -> Self {
        Self {
            store,
            config,
            active: None,
        }
    }

    pub fn store(&self) -> &TrackStore {
        &self.store
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Apply a named edit, logging it if the store rejects it.
    pub fn apply(&mut self, edit: TimelineEdit) -> bool {
        let label = format!("{edit:?}");
        match self.store.apply(edit) {
            Ok(()) => true,
            Err(e) => {
                warn!(edit = %label, error = %e, "edit ignored");
                false
            }
        }
    }

    pub fn phase(&self) -> GesturePhase {
        match &self.active {
            None => GesturePhase::Idle,
            Some(ActiveGesture::Drag { .. }) => GesturePhase::Dragging,
            Some(ActiveGesture::Resize { session, .. }) => GesturePhase::Resizing(session.edge()),
        }
    }

    /// Guides for the gesture in flight. Always empty when idle.
    pub fn guides(&self) -> &[Guideline] {
        self.active
            .as_ref()
            .map(|g| g.ctx().guides())
            .unwrap_or_default()
    }

    /// Clip currently being dragged or resized.
    pub fn active_clip(&self) -> Option<(TrackId, ClipId)> {
        self.active.as_ref().map(|g| (g.ctx().track(), g.ctx().clip()))
    }

    /// Force the engine back to idle, discarding all preview state.
    pub fn interrupt(&mut self) {
        if let Some(gesture) = self.active.take() {
            debug!(clip = %gesture.ctx().clip(), "gesture interrupted");
        }
    }

    fn replace_active(&mut self) {
        if self.active.is_some() {
            warn!("new gesture started while another was active");
            self.interrupt();
        }
    }

    // ── Drag ────────────────────────────────────────────────────

    /// Pick up a clip by its body.
    pub fn begin_drag(
        &mut self,
        track: TrackId,
        clip: ClipId,
        pointer: Vec2,
        clip_rect: Rect,
    ) -> Option<GestureFrame> {
        self.replace_active();
        match DragSession::begin(
            &self.store,
            &self.config,
            track,
            clip,
            pointer.x,
            clip_rect.left(),
        ) {
            Ok((session, ctx)) => {
                let out = frame(session.preview(), &ctx);
                self.active = Some(ActiveGesture::Drag { session, ctx });
                Some(out)
            }
            Err(e) => {
                warn!(%track, %clip, error = %e, "drag not started");
                None
            }
        }
    }

    /// Move the dragged clip. `track_left` is the left edge of the lane
    /// under the pointer.
    pub fn update_drag(&mut self, pointer: Vec2, track_left: f32) -> Option<GestureFrame> {
        match &mut self.active {
            Some(ActiveGesture::Drag { session, ctx }) => {
                let preview = session.update(ctx, &self.store, &self.config, pointer.x, track_left);
                Some(frame(preview, ctx))
            }
            _ => None,
        }
    }

    /// Drop the dragged clip on `target`.
    pub fn commit_drag(&mut self, pointer: Vec2, target: DropTarget) -> GestureOutcome {
        match self.active.take() {
            Some(ActiveGesture::Drag { session, .. }) => {
                let clip = session.clip();
                match session.commit(&mut self.store, &self.config, pointer.x, target) {
                    Ok(outcome) => outcome,
                    Err(e) => {
                        warn!(%clip, error = %e, "drag commit dropped");
                        GestureOutcome::Cancelled
                    }
                }
            }
            other => {
                self.active = other;
                warn!(error = %TracklineError::NoActiveGesture, "commit_drag without a drag");
                GestureOutcome::Cancelled
            }
        }
    }

    /// Abandon the drag. Nothing is written.
    pub fn cancel_drag(&mut self) -> GestureOutcome {
        if matches!(self.active, Some(ActiveGesture::Drag { .. })) {
            self.interrupt();
        }
        GestureOutcome::Cancelled
    }

    /// JSON hand-off for the drag in flight.
    pub fn drag_payload(&self) -> Option<String> {
        match &self.active {
            Some(ActiveGesture::Drag { session, .. }) => match session.payload().to_json() {
                Ok(text) => Some(text),
                Err(e) => {
                    warn!(error = %e, "drag payload not encoded");
                    None
                }
            },
            _ => None,
        }
    }

    /// Commit a drop described by a hand-off payload.
    ///
    /// Ends any drag in flight. Text that does not parse, or that names a clip
    /// no longer in its source track, is a no-op.
    pub fn commit_drop_payload(
        &mut self,
        text: &str,
        pointer: Vec2,
        target: DropTarget,
    ) -> GestureOutcome {
        if matches!(self.active, Some(ActiveGesture::Drag { .. })) {
            self.active = None;
        }
        let committed = DragPayload::from_json(text)
            .and_then(|payload| DragSession::from_payload(&self.store, &payload))
            .and_then(|session| session.commit(&mut self.store, &self.config, pointer.x, target));
        match committed {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(error = %e, "drop ignored");
                GestureOutcome::Cancelled
            }
        }
    }

    // ── Resize ──────────────────────────────────────────────────

    /// Which edge of `clip_rect` a resize would grab at `pointer`.
    ///
    /// Always `None` while a gesture is in flight.
    pub fn resize_affordance(&self, pointer: Vec2, clip_rect: Rect) -> Option<ClipEdge> {
        if self.active.is_some() {
            return None;
        }
        self.edge_at(pointer, clip_rect)
    }

    fn edge_at(&self, pointer: Vec2, clip_rect: Rect) -> Option<ClipEdge> {
        let tolerance = self.config.edge_tolerance;
        if !clip_rect.expand_x(tolerance).contains(pointer) {
            return None;
        }
        edge_hit_test(pointer.x, clip_rect.left(), clip_rect.right(), tolerance)
    }

    /// Start a resize if the pointer is on an edge of `clip_rect`.
    ///
    /// Returns `None` for a press on the clip body and leaves the engine
    /// untouched, so the caller can start a drag instead. A press on an edge
    /// interrupts any gesture in flight.
    pub fn begin_resize(
        &mut self,
        track: TrackId,
        clip: ClipId,
        pointer: Vec2,
        clip_rect: Rect,
    ) -> Option<GestureFrame> {
        let edge = self.edge_at(pointer, clip_rect)?;
        self.replace_active();
        match ResizeSession::begin(&self.store, &self.config, track, clip, edge, pointer.x) {
            Ok((session, ctx)) => {
                let out = frame(session.live(), &ctx);
                self.active = Some(ActiveGesture::Resize { session, ctx });
                Some(out)
            }
            Err(e) => {
                warn!(%track, %clip, error = %e, "resize not started");
                None
            }
        }
    }

    pub fn update_resize(&mut self, pointer: Vec2) -> Option<GestureFrame> {
        match &mut self.active {
            Some(ActiveGesture::Resize { session, ctx }) => {
                let preview = session.update(ctx, &self.store, &self.config, pointer.x);
                Some(frame(preview, ctx))
            }
            _ => None,
        }
    }

    /// Release the edge. Releasing always commits; use
    /// [`cancel_resize`](Self::cancel_resize) to abandon.
    pub fn commit_resize(&mut self) -> GestureOutcome {
        match self.active.take() {
            Some(ActiveGesture::Resize { session, ctx }) => {
                let clip = session.clip();
                match session.commit(&ctx, &mut self.store, &self.config) {
                    Ok(outcome) => outcome,
                    Err(e) => {
                        warn!(%clip, error = %e, "resize commit dropped");
                        GestureOutcome::Cancelled
                    }
                }
            }
            other => {
                self.active = other;
                warn!(error = %TracklineError::NoActiveGesture, "commit_resize without a resize");
                GestureOutcome::Cancelled
            }
        }
    }

    /// Abandon the resize, e.g. on Escape. Nothing is written.
    pub fn cancel_resize(&mut self) -> GestureOutcome {
        if matches!(self.active, Some(ActiveGesture::Resize { .. })) {
            self.interrupt();
        }
        GestureOutcome::Cancelled
    }
}
