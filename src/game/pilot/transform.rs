// Position and heading of a pilot

use crate::core::math::{heading_to_up, wrap_degrees};
use glam::{Vec2, Vec3};

/// Position plus heading around the forward (Z) axis
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    pub position: Vec3,
    /// Heading in degrees, kept in [0, 360)
    rotation: f32,
}

impl Transform {
    pub fn new(position: Vec3, rotation: f32) -> Self {
        Self {
            position,
            rotation: wrap_degrees(rotation),
        }
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn set_rotation(&mut self, degrees: f32) {
        self.rotation = wrap_degrees(degrees);
    }

    /// Facing direction
    pub fn up(&self) -> Vec2 {
        heading_to_up(self.rotation)
    }

    /// Position projected onto the XY plane
    pub fn position_2d(&self) -> Vec2 {
        self.position.truncate()
    }
}
