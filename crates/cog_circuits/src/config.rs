//! Fuse box tuning

use cog_math::{consts, Vec2};
use cog_schedule::SparkleConfig;
use serde::{Deserialize, Serialize};

/// Screen displacement pulse requested when a fuse box breaks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplacementPulse {
    /// Pulse duration (seconds)
    pub duration: f32,
    /// Starting ring radius
    pub radius_from: f32,
    /// Final ring radius
    pub radius_to: f32,
    /// Distortion strength
    pub alpha: f32,
}

impl Default for DisplacementPulse {
    fn default() -> Self {
        Self {
            duration: 0.35,
            radius_from: 8.0,
            radius_to: 32.0,
            alpha: 0.25,
        }
    }
}

/// Particle descriptor for the fuse box sparks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparkParticles {
    /// Particle size in pixels
    pub size: f32,
    /// Primary color (0xRRGGBB)
    pub color: u32,
    /// Secondary color (0xRRGGBB)
    pub color2: u32,
    /// Alternate between the two colors instead of blending
    pub blink: bool,
    /// Fade out only near the end of life
    pub late_fade: bool,
    /// Minimum launch speed
    pub speed_min: f32,
    /// Maximum launch speed
    pub speed_max: f32,
    /// Constant acceleration (gravity)
    pub acceleration: Vec2,
    /// Spread around the launch direction (radians)
    pub direction_range: f32,
    /// Minimum lifetime (seconds)
    pub life_min: f32,
    /// Maximum lifetime (seconds)
    pub life_max: f32,
}

impl Default for SparkParticles {
    fn default() -> Self {
        Self {
            size: 1.0,
            color: 0xd97b00,
            color2: 0xf7be00,
            blink: true,
            late_fade: true,
            speed_min: 5.0,
            speed_max: 30.0,
            acceleration: Vec2::Y * 60.0,
            direction_range: consts::FRAC_PI_2,
            life_min: 0.5,
            life_max: 1.0,
        }
    }
}

/// Fuse box configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuseBoxConfig {
    /// Solid size while intact
    pub size: Vec2,
    /// Solid width once busted open
    pub busted_width: f32,
    /// Hitbox shift applied to left-facing boxes
    pub left_hitbox_shift: f32,
    /// Level-wide flag gating the first-break cutscene
    pub cutscene_flag: String,
    /// Sound event played on break
    pub break_sound: String,
    /// Recurring spark timing
    pub sparkle: SparkleConfig,
    /// Displacement pulse on break
    pub displacement: DisplacementPulse,
    /// Spark particle look
    pub sparks: SparkParticles,
}

impl Default for FuseBoxConfig {
    fn default() -> Self {
        Self {
            size: Vec2::new(4.0, 16.0),
            busted_width: 2.0,
            left_hitbox_shift: 4.0,
            cutscene_flag: "fuse_cutscene_seen".to_string(),
            break_sound: "event:/new_content/game/10_farewell/fusebox_hit_2".to_string(),
            sparkle: SparkleConfig::default(),
            displacement: DisplacementPulse::default(),
            sparks: SparkParticles::default(),
        }
    }
}

impl FuseBoxConfig {
    /// Set the cutscene gate flag
    pub fn with_cutscene_flag(mut self, flag: impl Into<String>) -> Self {
        self.cutscene_flag = flag.into();
        self
    }

    /// Set spark timing
    pub fn with_sparkle(mut self, sparkle: SparkleConfig) -> Self {
        self.sparkle = sparkle;
        self
    }
}
