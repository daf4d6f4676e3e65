// SPDX-License-Identifier: MPL-2.0
//! Swipe classification for touch input.
//!
//! Distances are measured as `start - end` in screen coordinates (y grows
//! downward):
//!
//! - finger moves left past the horizontal threshold: next image
//! - finger moves right past the horizontal threshold: previous image
//! - finger moves down past the vertical threshold: close the gallery
//!
//! Upward swipes do nothing.

use super::session::Point;
use crate::config::{
    DEFAULT_SWIPE_HORIZONTAL_PX, DEFAULT_SWIPE_VERTICAL_PX, MAX_SWIPE_PX, MIN_SWIPE_PX,
};

/// Swipe distance in logical pixels, guaranteed to be within the valid range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThreshold(f32);

impl SwipeThreshold {
    /// Creates a new threshold, clamping the value to the valid range.
    /// Non-finite input falls back to the minimum.
    #[must_use]
    pub fn new(px: f32) -> Self {
        if px.is_finite() {
            Self(px.clamp(MIN_SWIPE_PX, MAX_SWIPE_PX))
        } else {
            Self(MIN_SWIPE_PX)
        }
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

/// Horizontal and vertical swipe thresholds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThresholds {
    pub horizontal: SwipeThreshold,
    pub vertical: SwipeThreshold,
}

impl Default for SwipeThresholds {
    fn default() -> Self {
        Self {
            horizontal: SwipeThreshold(DEFAULT_SWIPE_HORIZONTAL_PX),
            vertical: SwipeThreshold(DEFAULT_SWIPE_VERTICAL_PX),
        }
    }
}

/// Outcome of a completed swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeAction {
    Next,
    Previous,
    Close,
    None,
}

/// Classifies a finished swipe from its start and end points.
#[must_use]
pub fn classify_swipe(start: Point, end: Point, thresholds: SwipeThresholds) -> SwipeAction {
    let distance_x = start.x - end.x;
    let distance_y = start.y - end.y;

    if distance_x.abs() > distance_y.abs() {
        let limit = thresholds.horizontal.value();
        if distance_x > limit {
            SwipeAction::Next
        } else if distance_x < -limit {
            SwipeAction::Previous
        } else {
            SwipeAction::None
        }
    } else if distance_y < -thresholds.vertical.value() {
        SwipeAction::Close
    } else {
        SwipeAction::None
    }
}
