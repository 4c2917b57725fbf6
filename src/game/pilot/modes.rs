// Aim and movement modes

use super::ConfigError;
use crate::core::math::{heading_to_up, up_to_heading, wrap_degrees};
use crate::engine::input::InputSnapshot;
use glam::{Vec2, Vec3};
use std::fmt;
use std::str::FromStr;

/// How the pilot chooses where to look
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AimMode {
    /// Face the pointer
    #[default]
    AimTowardMouse,
    /// Keep facing the current heading
    AimForward,
}

/// How movement input turns into motion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MovementMode {
    /// Only the horizontal axis moves the pilot
    Horizontal,
    /// Only the vertical axis moves the pilot
    Vertical,
    /// Both axes move the pilot directly
    #[default]
    FreeRoam,
    /// Vertical input thrusts along the heading, horizontal input turns
    Asteroids,
}

/// Per-frame motion produced by a movement mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Move the transform directly by this displacement
    Translate(Vec3),
    /// Push the physics body and turn to a new heading (degrees)
    Thrust { force: Vec2, heading: f32 },
}

/// What the look step should do to the orientation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AimAction {
    /// Snap the heading to this value (degrees)
    Snap(f32),
    /// Hand the orientation to the physics body and lock it
    LockRotation,
    /// Leave the orientation alone
    Hold,
}

impl MovementMode {
    /// Whether this mode needs a physics body to move
    pub fn uses_physics(&self) -> bool {
        matches!(self, Self::Asteroids)
    }

    /// Whether this mode owns the heading (the look step must not snap it)
    pub fn drives_heading(&self) -> bool {
        matches!(self, Self::Asteroids)
    }

    /// Apply the axis locks for direct-movement modes
    pub fn constrain(&self, input: Vec2) -> Vec2 {
        match self {
            Self::Horizontal => Vec2::new(input.x, 0.0),
            Self::Vertical => Vec2::new(0.0, input.y),
            Self::FreeRoam | Self::Asteroids => input,
        }
    }

    /// Compute this frame's motion
    ///
    /// `heading` is the current heading in degrees. `rotation_speed` is in
    /// degrees per second.
    pub fn compute_motion(
        &self,
        input: Vec2,
        heading: f32,
        move_speed: f32,
        rotation_speed: f32,
        dt: f32,
    ) -> Motion {
        match self {
            Self::Asteroids => Motion::Thrust {
                force: heading_to_up(heading) * input.y * move_speed * dt,
                heading: wrap_degrees(heading - rotation_speed * input.x * dt),
            },
            _ => {
                let axis = self.constrain(input);
                Motion::Translate(Vec3::new(axis.x, axis.y, 0.0) * move_speed * dt)
            }
        }
    }
}

impl AimMode {
    /// Point (or direction) to look at this frame
    pub fn look_target(&self, snapshot: &InputSnapshot, facing: Vec2) -> Vec2 {
        match self {
            Self::AimForward => facing,
            Self::AimTowardMouse => snapshot.look_axis,
        }
    }

    /// Decide how to orient given a world-space look direction
    pub fn resolve(&self, direction: Vec2) -> AimAction {
        match self {
            Self::AimTowardMouse => up_to_heading(direction)
                .map(AimAction::Snap)
                .unwrap_or(AimAction::Hold),
            Self::AimForward => AimAction::LockRotation,
        }
    }
}

impl FromStr for AimMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "aimtowardmouse" | "mouse" => Ok(Self::AimTowardMouse),
            "aimforward" | "forward" => Ok(Self::AimForward),
            _ => Err(ConfigError::UnknownMode {
                kind: "aim",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for MovementMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "horizontal" => Ok(Self::Horizontal),
            "vertical" => Ok(Self::Vertical),
            "freeroam" => Ok(Self::FreeRoam),
            "asteroids" => Ok(Self::Asteroids),
            _ => Err(ConfigError::UnknownMode {
                kind: "movement",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for AimMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AimTowardMouse => write!(f, "aim-toward-mouse"),
            Self::AimForward => write!(f, "aim-forward"),
        }
    }
}

impl fmt::Display for MovementMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "horizontal"),
            Self::Vertical => write!(f, "vertical"),
            Self::FreeRoam => write!(f, "free-roam"),
            Self::Asteroids => write!(f, "asteroids"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_free_roam_translation() {
        let motion = MovementMode::FreeRoam.compute_motion(Vec2::new(1.0, -0.5), 0.0, 10.0, 60.0, 0.1);
        assert_eq!(motion, Motion::Translate(Vec3::new(1.0, -0.5, 0.0)));
    }

    #[test]
    fn test_axis_locks() {
        let input = Vec2::new(0.7, -0.3);
        assert_eq!(MovementMode::Horizontal.constrain(input), Vec2::new(0.7, 0.0));
        assert_eq!(MovementMode::Vertical.constrain(input), Vec2::new(0.0, -0.3));
        assert_eq!(MovementMode::FreeRoam.constrain(input), input);
    }

    #[test]
    fn test_asteroids_thrust_along_heading() {
        let Motion::Thrust { force, heading } =
            MovementMode::Asteroids.compute_motion(Vec2::new(0.0, 1.0), 90.0, 10.0, 60.0, 0.1)
        else {
            panic!("asteroids mode should thrust");
        };

        assert_relative_eq!(force.x, -1.0, epsilon = 1e-6);
        assert_relative_eq!(force.y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(heading, 90.0);
    }

    #[test]
    fn test_asteroids_turn_wraps() {
        let Motion::Thrust { heading, .. } =
            MovementMode::Asteroids.compute_motion(Vec2::new(1.0, 0.0), 0.0, 10.0, 60.0, 0.1)
        else {
            panic!("asteroids mode should thrust");
        };

        assert_relative_eq!(heading, 354.0, epsilon = 1e-4);
    }

    #[test]
    fn test_look_target() {
        let mut snapshot = InputSnapshot::new();
        snapshot.set_look_axis(100.0, 200.0);
        let facing = Vec2::Y;

        assert_eq!(
            AimMode::AimTowardMouse.look_target(&snapshot, facing),
            Vec2::new(100.0, 200.0)
        );
        assert_eq!(AimMode::AimForward.look_target(&snapshot, facing), facing);
    }

    #[test]
    fn test_resolve() {
        assert!(matches!(
            AimMode::AimTowardMouse.resolve(Vec2::new(0.0, 3.0)),
            AimAction::Snap(h) if h.abs() < 1e-6
        ));
        assert_eq!(AimMode::AimTowardMouse.resolve(Vec2::ZERO), AimAction::Hold);
        assert_eq!(AimMode::AimTowardMouse.resolve(Vec2::NAN), AimAction::Hold);
        assert_eq!(
            AimMode::AimForward.resolve(Vec2::new(1.0, 1.0)),
            AimAction::LockRotation
        );
    }

    #[test]
    fn test_parse_modes() {
        assert_eq!("asteroids".parse::<MovementMode>().unwrap(), MovementMode::Asteroids);
        assert_eq!("Free-Roam".parse::<MovementMode>().unwrap(), MovementMode::FreeRoam);
        assert_eq!("aim_forward".parse::<AimMode>().unwrap(), AimMode::AimForward);
        assert_eq!("mouse".parse::<AimMode>().unwrap(), AimMode::AimTowardMouse);
        assert!("diagonal".parse::<MovementMode>().is_err());
    }

    #[test]
    fn test_display_parses_back() {
        for mode in [
            MovementMode::Horizontal,
            MovementMode::Vertical,
            MovementMode::FreeRoam,
            MovementMode::Asteroids,
        ] {
            assert_eq!(mode.to_string().parse::<MovementMode>().unwrap(), mode);
        }
    }
}
