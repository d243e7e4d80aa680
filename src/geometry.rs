//! Plain 2D value types and the pure geometry helpers the navigation service
//! is built on: vectors, sizes, axis-aligned boxes and overlap testing.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// A point or offset in world or viewport space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The origin `(0, 0)`.
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

/// Width and height of a box, in world units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `{0, 0}`, the size that hides an overlay marker.
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Both dimensions set to `side`.
    #[must_use]
    pub fn square(side: f64) -> Self {
        Self { width: side, height: side }
    }

    /// Whether either dimension is zero or negative, i.e. nothing would be
    /// drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Axis-aligned bounding box with a top-left origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Aabb {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Right edge.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Build a top-left AABB from a centre `position` and a `size`.
///
/// Entity and camera transforms anchor their position at the box centre, so
/// the left/top edges sit half a dimension away from it.
#[must_use]
pub fn to_top_left_aabb(position: Vec2, size: Size) -> Aabb {
    Aabb {
        x: position.x - size.width / 2.0,
        y: position.y - size.height / 2.0,
        width: size.width,
        height: size.height,
    }
}

/// Separating-axis overlap test for two AABBs.
///
/// The boxes intersect iff their projections overlap on both the X and Y
/// axes. Boxes that only share an edge do not intersect.
#[must_use]
pub fn intersects(a: &Aabb, b: &Aabb) -> bool {
    a.x < b.right() && b.x < a.right() && a.y < b.bottom() && b.y < a.bottom()
}

/// Round `value` to `decimals` fractional digits, half away from zero.
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
