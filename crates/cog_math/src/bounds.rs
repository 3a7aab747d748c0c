//! Bounding shapes for overlap tests
//!
//! All overlap tests are strict: shapes that only touch along an edge do not
//! overlap. Solids resting flush against each other on the pixel grid must
//! not register as colliding.

use crate::vector::Vec2;

/// Axis-aligned rectangle, `y` grows downward
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Create from a top-left corner and a size
    #[inline]
    pub fn from_position_size(position: Vec2, size: Vec2) -> Self {
        Self::new(position.x, position.y, size.x, size.y)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Midpoint of the right edge
    #[inline]
    pub fn center_right(&self) -> Vec2 {
        Vec2::new(self.right(), self.y + self.height * 0.5)
    }

    /// Move by an offset
    #[inline]
    pub fn translate(&self, offset: Vec2) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y, self.width, self.height)
    }

    /// Check if a point is inside (edges inclusive)
    #[inline]
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.left() && point.x <= self.right() &&
        point.y >= self.top() && point.y <= self.bottom()
    }

    /// Check if two rectangles overlap
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right() && self.right() > other.left() &&
        self.top() < other.bottom() && self.bottom() > other.top()
    }

    /// Get the closest point inside the rectangle to a given point
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            point.x.clamp(self.left(), self.right()),
            point.y.clamp(self.top(), self.bottom()),
        )
    }

    /// Check overlap with a circle
    #[inline]
    pub fn intersects_circle(&self, circle: &Circle) -> bool {
        circle.intersects_rect(self)
    }
}

/// Circle bounds
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    #[inline]
    pub const fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    #[inline]
    pub fn contains_point(&self, point: Vec2) -> bool {
        (point - self.center).length_squared() <= self.radius * self.radius
    }

    #[inline]
    pub fn intersects_circle(&self, other: &Circle) -> bool {
        let r = self.radius + other.radius;
        (other.center - self.center).length_squared() < r * r
    }

    #[inline]
    pub fn intersects_rect(&self, rect: &Rect) -> bool {
        let closest = rect.closest_point(self.center);
        (closest - self.center).length_squared() < self.radius * self.radius
    }

    /// Tight rectangular bounds
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.radius * 2.0,
            self.radius * 2.0,
        )
    }
}
