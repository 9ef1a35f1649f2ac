//! Timeline geometry: grid snapping, clamping and edge hit testing.
//!
//! Everything here is a pure function of its inputs. Positions and durations
//! are abstract horizontal units; element bounds are supplied by the caller
//! in the same space as pointer coordinates.

use serde::{Deserialize, Serialize};

use crate::limits::MIN_DURATION;

/// 2D vector, used for pointer coordinates.
pub type Vec2 = glam::Vec2;

/// Which edge of a clip is under the pointer or being resized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClipEdge {
    Left,
    Right,
}

/// Round `value` to the nearest multiple of `grid_size`.
///
/// A non-positive grid disables snapping.
#[inline]
pub fn snap_to_grid(value: f32, grid_size: f32) -> f32 {
    if grid_size <= 0.0 {
        return value;
    }
    (value / grid_size).round() * grid_size
}

/// Positions are never negative.
#[inline]
pub fn clamp_position(value: f32) -> f32 {
    value.max(0.0)
}

/// Durations never drop below [`MIN_DURATION`].
#[inline]
pub fn clamp_duration(value: f32) -> f32 {
    value.max(MIN_DURATION)
}

/// Report which edge, if any, `pointer_x` is within `tolerance` of.
///
/// The right edge is tested first, so on a clip narrower than twice the
/// tolerance the right edge wins.
pub fn edge_hit_test(
    pointer_x: f32,
    element_left: f32,
    element_right: f32,
    tolerance: f32,
) -> Option<ClipEdge> {
    if (pointer_x - element_right).abs() < tolerance {
        Some(ClipEdge::Right)
    } else if (pointer_x - element_left).abs() < tolerance {
        Some(ClipEdge::Left)
    } else {
        None
    }
}

/// Gap between two half-open intervals `[start, end)`; zero when they touch or overlap.
///
/// Informational only: clips on one track are allowed to overlap.
pub fn interval_distance(a: (f32, f32), b: (f32, f32)) -> f32 {
    if a.1 <= b.0 {
        b.0 - a.1
    } else if b.1 <= a.0 {
        a.0 - b.1
    } else {
        0.0
    }
}

/// Axis-aligned rectangle describing a rendered element.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from two corners.
    pub fn from_corners(min: Vec2, max: Vec2) -> Self {
        Self {
            x: min.x,
            y: min.y,
            width: max.x - min.x,
            height: max.y - min.y,
        }
    }

    #[inline]
    pub fn left(self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(self) -> f32 {
        self.y + self.height
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub fn contains(self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }

    /// Check if a vertical coordinate falls inside the rectangle's band.
    #[inline]
    pub fn contains_y(self, y: f32) -> bool {
        y >= self.y && y < self.y + self.height
    }

    /// Expand the rectangle horizontally by a margin on both sides.
    pub fn expand_x(self, margin: f32) -> Self {
        Self::new(self.x - margin, self.y, self.width + margin * 2.0, self.height)
    }
}
