//! Positioned collision bodies

use crate::shape::CollisionShape;
use cog_math::{Rect, Vec2};

/// An entity's position and primary collision shape
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// Entity ID
    pub id: u64,
    /// World position
    pub position: Vec2,
    /// Primary shape; a body without one never overlaps anything
    pub shape: Option<CollisionShape>,
}

impl Body {
    /// Create a body without a shape
    pub fn new(id: u64, position: Vec2) -> Self {
        Self {
            id,
            position,
            shape: None,
        }
    }

    /// Set shape
    pub fn with_shape(mut self, shape: CollisionShape) -> Self {
        self.shape = Some(shape);
        self
    }

    /// Install a new primary shape, returning the previous one
    pub fn replace_shape(&mut self, shape: Option<CollisionShape>) -> Option<CollisionShape> {
        std::mem::replace(&mut self.shape, shape)
    }

    /// World-space bounds of the primary shape
    pub fn bounds(&self) -> Option<Rect> {
        self.shape.as_ref().and_then(|shape| shape.bounds(self.position))
    }

    /// Discrete overlap test between two bodies
    pub fn collides(&self, other: &Body) -> bool {
        match (&self.shape, &other.shape) {
            (Some(a), Some(b)) => a.overlaps(self.position, b, other.position),
            _ => false,
        }
    }
}

/// Anything that owns a [`Body`]
pub trait Collide {
    fn body(&self) -> &Body;
    fn body_mut(&mut self) -> &mut Body;
}

impl Collide for Body {
    fn body(&self) -> &Body {
        self
    }

    fn body_mut(&mut self) -> &mut Body {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shapeless_body_never_collides() {
        let a = Body::new(1, Vec2::ZERO);
        let b = Body::new(2, Vec2::ZERO).with_shape(CollisionShape::hitbox(4.0, 4.0));
        assert!(!a.collides(&b));
        assert!(!b.collides(&a));
        assert_eq!(a.bounds(), None);
    }

    #[test]
    fn test_replace_shape() {
        let mut body = Body::new(1, Vec2::ZERO).with_shape(CollisionShape::hitbox(4.0, 4.0));
        let previous = body.replace_shape(Some(CollisionShape::circle(1.0)));
        assert_eq!(previous, Some(CollisionShape::hitbox(4.0, 4.0)));
        assert_eq!(body.shape, Some(CollisionShape::circle(1.0)));
    }
}
