//! # cog_math - 2D Math Primitives
//!
//! Small, copyable math types for pixel-space gameplay code:
//! - `Vec2` positions, offsets and directions
//! - `Rect` axis-aligned hitbox bounds
//! - `Circle` bounds for round hitboxes

pub mod bounds;
pub mod vector;

pub use bounds::*;
pub use vector::*;

/// Common math constants
pub mod consts {
    pub const PI: f32 = core::f32::consts::PI;
    pub const FRAC_PI_2: f32 = PI / 2.0;
    pub const EPSILON: f32 = 1e-6;
}

/// Re-export commonly used types
pub mod prelude {
    pub use crate::bounds::{Circle, Rect};
    pub use crate::vector::Vec2;
}
