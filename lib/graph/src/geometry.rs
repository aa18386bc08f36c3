//! Canvas-space geometry.
//!
//! Node positions are stored in canvas space: the untransformed coordinate
//! system of the drawing surface. On-screen pixel coordinates are a further
//! zoom/pan transform away and never stored.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A 2D point in canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}
