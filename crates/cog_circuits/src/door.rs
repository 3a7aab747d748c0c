//! Companion door of a fuse box

/// Frame the door rests on once fully opened
pub const DOOR_OPEN_FRAME: u32 = 4;

/// Door sprite state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorPose {
    /// Not shown
    Hidden,
    /// Playing the opening animation
    Opening,
    /// Frozen on a frame
    Frozen(u32),
}

/// Decorative door shown over a busted fuse box
#[derive(Debug, Clone, PartialEq)]
pub struct FuseDoor {
    pose: DoorPose,
    in_scene: bool,
}

impl FuseDoor {
    /// Create a hidden door
    pub fn new() -> Self {
        Self {
            pose: DoorPose::Hidden,
            in_scene: false,
        }
    }

    /// Current pose
    pub fn pose(&self) -> DoorPose {
        self.pose
    }

    /// Whether the door is drawn
    pub fn is_visible(&self) -> bool {
        self.pose != DoorPose::Hidden
    }

    /// Whether the door is in the scene
    pub fn in_scene(&self) -> bool {
        self.in_scene
    }

    /// Enter the scene
    pub fn add(&mut self) {
        self.in_scene = true;
    }

    /// Leave the scene
    pub fn remove(&mut self) {
        self.in_scene = false;
    }

    /// Start the opening animation
    pub fn play(&mut self) {
        self.pose = DoorPose::Opening;
    }

    /// Show the door already open
    pub fn show_open(&mut self) {
        self.pose = DoorPose::Frozen(DOOR_OPEN_FRAME);
    }
}

impl Default for FuseDoor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_door_hidden_until_opened() {
        let mut door = FuseDoor::new();
        assert!(!door.is_visible());

        door.add();
        assert!(door.in_scene());
        assert!(!door.is_visible());

        door.play();
        assert_eq!(door.pose(), DoorPose::Opening);
    }

    #[test]
    fn test_show_open_freezes_last_frame() {
        let mut door = FuseDoor::new();
        door.show_open();
        assert_eq!(door.pose(), DoorPose::Frozen(DOOR_OPEN_FRAME));
        assert!(door.is_visible());
    }
}
