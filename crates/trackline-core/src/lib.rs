//! Trackline Core - Foundation types for the timeline engine
//!
//! This crate provides the pieces every other trackline crate builds on:
//! - Grid snapping, clamping and edge hit testing
//! - Caller-supplied element bounds (Rect) and pointer coordinates
//! - Engine configuration with the fixed defaults
//! - The error taxonomy

pub mod config;
pub mod error;
pub mod geometry;

pub use config::EngineConfig;
pub use error::{Result, TracklineError};
pub use geometry::{
    clamp_duration, clamp_position, edge_hit_test, interval_distance, snap_to_grid, ClipEdge,
    Rect, Vec2,
};

/// Fixed limits and defaults of the timeline model.
///
/// Positions and durations share one abstract horizontal unit, which the
/// default layout renders 1:1 as pixels.
pub mod limits {
    /// Smallest duration a clip may ever have.
    pub const MIN_DURATION: f32 = 20.0;

    /// Major grid quantum used for drop and commit snapping.
    pub const GRID_SIZE: f32 = 140.0;

    /// Minor grid quantum (display only).
    pub const MINOR_GRID_SIZE: f32 = 14.0;

    /// Duration given to a clip created without one.
    pub const DEFAULT_CLIP_DURATION: f32 = 140.0;

    /// Color given to a clip created without one.
    pub const DEFAULT_CLIP_COLOR: &str = "#3498db";

    /// Distance within which a live guideline is shown.
    pub const GUIDE_THRESHOLD: f32 = 10.0;

    /// Distance within which a resize commit snaps onto a guideline.
    /// Tighter than [`GUIDE_THRESHOLD`] on purpose.
    pub const COMMIT_SNAP_THRESHOLD: f32 = 5.0;

    /// Pointer distance from a clip edge that arms a resize.
    pub const EDGE_TOLERANCE: f32 = 10.0;

    /// Header defaults for new tracks.
    pub const DEFAULT_TRACK_VOLUME: f32 = 50.0;
    pub const DEFAULT_TRACK_PAN: f32 = 50.0;

    /// Scrollable canvas sizing.
    pub const CANVAS_MIN_WIDTH: f32 = 1200.0;
    pub const CANVAS_PADDING: f32 = 100.0;
}
