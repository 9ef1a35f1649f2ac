//! Trackline Gesture - interactive geometry for clip drags and resizes
//!
//! - Alignment guides against other clips' edges and the grid
//! - Drag-move and edge-resize sessions that preview without writing
//! - A `TimelineEngine` facade that commits each gesture exactly once
//! - JSON hand-off payload for drops received by another component

pub mod context;
pub mod drag;
pub mod engine;
pub mod guides;
pub mod outcome;
pub mod payload;
pub mod resize;

pub use context::GestureContext;
pub use drag::DragSession;
pub use engine::{GesturePhase, TimelineEngine};
pub use guides::{compute_guides, nearest_within, GuideKind, GuideSet, Guideline};
pub use outcome::{ClipGeometry, Commit, DropTarget, GestureFrame, GestureOutcome};
pub use payload::DragPayload;
pub use resize::{moving_edge, resized, ResizeSession};
