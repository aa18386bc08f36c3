//! Zoom/pan viewport and the pointer-to-canvas coordinate transform.
//!
//! The viewport is purely visual: node coordinates are always stored in
//! canvas space, and pointer (screen) coordinates are converted into canvas
//! space before being compared against node positions.

use cognito_canvas_graph::Point;
use serde::{Deserialize, Serialize};

/// Minimum zoom factor.
pub const ZOOM_MIN: f64 = 0.5;
/// Maximum zoom factor.
pub const ZOOM_MAX: f64 = 2.0;
/// Zoom adjustment per step.
pub const ZOOM_STEP: f64 = 0.1;

/// Logical canvas width, used for centering newly added nodes.
pub const CANVAS_WIDTH: f64 = 2000.0;
/// Logical canvas height.
pub const CANVAS_HEIGHT: f64 = 1000.0;

/// Converts a pointer position in screen space into canvas space.
#[must_use]
pub fn to_canvas_space(pointer: Point, zoom: f64, pan: Point) -> Point {
    Point::new(pointer.x / zoom - pan.x, pointer.y / zoom - pan.y)
}

/// The visual transform applied to the canvas content.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Scale factor, clamped to `[ZOOM_MIN, ZOOM_MAX]`.
    pub zoom: f64,
    /// Pan offset in canvas units.
    pub pan: Point,
}

impl Viewport {
    /// Increases zoom by one step, saturating at [`ZOOM_MAX`].
    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + ZOOM_STEP).min(ZOOM_MAX);
    }

    /// Decreases zoom by one step, saturating at [`ZOOM_MIN`].
    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom - ZOOM_STEP).max(ZOOM_MIN);
    }

    /// Shifts the pan offset by a delta in canvas units.
    pub fn pan_by(&mut self, delta: Point) {
        self.pan = self.pan + delta;
    }

    /// Restores the default transform (zoom 1, no pan).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Converts a pointer position into canvas space under this transform.
    #[must_use]
    pub fn to_canvas_space(&self, pointer: Point) -> Point {
        to_canvas_space(pointer, self.zoom, self.pan)
    }

    /// The canvas-space point currently at the center of the logical canvas,
    /// adjusted for pan. New nodes are placed here.
    #[must_use]
    pub fn canvas_center(&self) -> Point {
        Point::new(CANVAS_WIDTH / 2.0 - self.pan.x, CANVAS_HEIGHT / 2.0 - self.pan.y)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan: Point::new(0.0, 0.0),
        }
    }
}
