//! Collision shapes
//!
//! Shapes are stored relative to their owner. Every query takes the owner's
//! world position and resolves the shape against it.

use cog_math::{Circle, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Rectangular hitbox relative to its owner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hitbox {
    /// Width in pixels
    pub width: f32,
    /// Height in pixels
    pub height: f32,
    /// Top-left corner relative to the owner position
    pub offset: Vec2,
}

impl Hitbox {
    /// Create a hitbox anchored at the owner position
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            offset: Vec2::ZERO,
        }
    }

    /// Set offset
    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    /// Resolve to world space
    pub fn world_rect(&self, at: Vec2) -> Rect {
        Rect::from_position_size(at + self.offset, Vec2::new(self.width, self.height))
    }

    /// Midpoint of the right edge, relative to the owner
    pub fn center_right(&self) -> Vec2 {
        self.offset + Vec2::new(self.width, self.height * 0.5)
    }
}

/// Circular hitbox relative to its owner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleShape {
    /// Radius in pixels
    pub radius: f32,
    /// Center relative to the owner position
    pub offset: Vec2,
}

impl CircleShape {
    /// Resolve to world space
    pub fn world_circle(&self, at: Vec2) -> Circle {
        Circle::new(at + self.offset, self.radius)
    }
}

/// Collision shape variants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CollisionShape {
    /// Axis-aligned box
    Hitbox(Hitbox),
    /// Circle
    Circle(CircleShape),
    /// Union of shapes; overlaps when any member overlaps
    List(Vec<CollisionShape>),
}

impl Default for CollisionShape {
    fn default() -> Self {
        Self::Hitbox(Hitbox::new(8.0, 8.0))
    }
}

impl CollisionShape {
    /// Create a hitbox anchored at the owner position
    pub fn hitbox(width: f32, height: f32) -> Self {
        Self::Hitbox(Hitbox::new(width, height))
    }

    /// Create a circle centered on the owner position
    pub fn circle(radius: f32) -> Self {
        Self::Circle(CircleShape {
            radius,
            offset: Vec2::ZERO,
        })
    }

    /// Create a compound shape
    pub fn list(shapes: Vec<CollisionShape>) -> Self {
        Self::List(shapes)
    }

    /// Get the hitbox if this is a plain hitbox
    pub fn as_hitbox(&self) -> Option<&Hitbox> {
        match self {
            Self::Hitbox(hitbox) => Some(hitbox),
            _ => None,
        }
    }

    /// Get the hitbox mutably if this is a plain hitbox
    pub fn as_hitbox_mut(&mut self) -> Option<&mut Hitbox> {
        match self {
            Self::Hitbox(hitbox) => Some(hitbox),
            _ => None,
        }
    }

    /// World-space bounding rectangle, `None` for an empty list
    pub fn bounds(&self, at: Vec2) -> Option<Rect> {
        match self {
            Self::Hitbox(hitbox) => Some(hitbox.world_rect(at)),
            Self::Circle(circle) => Some(circle.world_circle(at).bounds()),
            Self::List(shapes) => shapes
                .iter()
                .filter_map(|shape| shape.bounds(at))
                .reduce(|a, b| {
                    let left = a.left().min(b.left());
                    let top = a.top().min(b.top());
                    let right = a.right().max(b.right());
                    let bottom = a.bottom().max(b.bottom());
                    Rect::new(left, top, right - left, bottom - top)
                }),
        }
    }

    /// Check overlap against another shape, each resolved at its owner position
    pub fn overlaps(&self, at: Vec2, other: &CollisionShape, other_at: Vec2) -> bool {
        match (self, other) {
            (Self::List(shapes), _) => shapes.iter().any(|s| s.overlaps(at, other, other_at)),
            (_, Self::List(shapes)) => shapes.iter().any(|s| self.overlaps(at, s, other_at)),
            (Self::Hitbox(a), Self::Hitbox(b)) => {
                a.world_rect(at).intersects(&b.world_rect(other_at))
            }
            (Self::Hitbox(a), Self::Circle(b)) => {
                a.world_rect(at).intersects_circle(&b.world_circle(other_at))
            }
            (Self::Circle(a), Self::Hitbox(b)) => {
                a.world_circle(at).intersects_rect(&b.world_rect(other_at))
            }
            (Self::Circle(a), Self::Circle(b)) => {
                a.world_circle(at).intersects_circle(&b.world_circle(other_at))
            }
        }
    }
}
