//! Level data for fuse boxes

use crate::error::Result;
use cog_math::{consts, Vec2};
use cog_session::EntityId;
use cog_signals::ActivationSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Side a fuse box opens towards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    Left,
    Right,
}

impl Default for Facing {
    fn default() -> Self {
        Self::Right
    }
}

impl Facing {
    /// Dash direction that breaks a box with this facing
    pub fn press_direction(self) -> Vec2 {
        match self {
            Self::Left => Vec2::X,
            Self::Right => -Vec2::X,
        }
    }

    /// Launch direction of sparks (radians)
    pub fn spark_direction(self) -> f32 {
        match self {
            Self::Left => consts::PI,
            Self::Right => 0.0,
        }
    }
}

impl FromStr for Facing {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Left" => Ok(Self::Left),
            "Right" => Ok(Self::Right),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("Left"),
            Self::Right => f.write_str("Right"),
        }
    }
}

fn default_direction() -> String {
    Facing::default().to_string()
}

/// Fuse box placement as authored in the level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuseBoxData {
    /// Level (room) name
    pub level: String,
    /// Per-level placement id
    pub id: u32,
    /// Position x
    pub x: f32,
    /// Position y
    pub y: f32,
    /// Comma-separated activation ids
    #[serde(default)]
    pub activation_ids: String,
    /// Whether activation is written to the session
    #[serde(default)]
    pub persistent: bool,
    /// Whether breaking it plays the first-break cutscene
    #[serde(default)]
    pub start_cutscene: bool,
    /// "Left" or "Right"
    #[serde(default = "default_direction")]
    pub direction: String,
}

impl FuseBoxData {
    /// Create data for a right-facing box with no circuits
    pub fn new(level: impl Into<String>, id: u32, position: Vec2) -> Self {
        Self {
            level: level.into(),
            id,
            x: position.x,
            y: position.y,
            activation_ids: String::new(),
            persistent: false,
            start_cutscene: false,
            direction: default_direction(),
        }
    }

    /// Parse from a JSON object
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set activation ids (comma-separated)
    pub fn with_activation_ids(mut self, ids: impl Into<String>) -> Self {
        self.activation_ids = ids.into();
        self
    }

    /// Set persistence
    pub fn with_persistent(mut self, persistent: bool) -> Self {
        self.persistent = persistent;
        self
    }

    /// Set cutscene
    pub fn with_start_cutscene(mut self, start_cutscene: bool) -> Self {
        self.start_cutscene = start_cutscene;
        self
    }

    /// Set facing
    pub fn with_facing(mut self, facing: Facing) -> Self {
        self.direction = facing.to_string();
        self
    }

    /// Authored position
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Stable identity
    pub fn entity_id(&self) -> EntityId {
        EntityId::new(self.level.clone(), self.id)
    }

    /// Parsed activation ids
    pub fn activation_set(&self) -> ActivationSet {
        ActivationSet::parse(&self.activation_ids)
    }

    /// Parsed facing; unknown values fall back to `Right`
    pub fn facing(&self) -> Facing {
        self.direction.parse().unwrap_or_else(|bad: String| {
            log::warn!(
                "Fuse box {}:{} has unknown direction {:?}; using Right",
                self.level,
                self.id,
                bad
            );
            Facing::Right
        })
    }
}
