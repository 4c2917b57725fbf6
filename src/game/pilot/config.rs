// Controller tuning

use super::modes::{AimMode, MovementMode};
use super::ConfigError;

/// Environment variable overriding the aim mode
pub const AIM_MODE_VAR: &str = "PILOT_AIM_MODE";
/// Environment variable overriding the movement mode
pub const MOVEMENT_MODE_VAR: &str = "PILOT_MOVEMENT_MODE";
/// Environment variable overriding the move speed
pub const MOVE_SPEED_VAR: &str = "PILOT_MOVE_SPEED";
/// Environment variable overriding the rotation speed
pub const ROTATION_SPEED_VAR: &str = "PILOT_ROTATION_SPEED";

/// Controller settings, fixed for the lifetime of a controller
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerConfig {
    pub aim_mode: AimMode,
    pub movement_mode: MovementMode,
    /// Units per second (or force scale in asteroids mode)
    pub move_speed: f32,
    /// Degrees per second, asteroids mode only
    pub rotation_speed: f32,
}

/// Default tuning
pub const DEFAULT_CONFIG: ControllerConfig = ControllerConfig {
    aim_mode: AimMode::AimTowardMouse,
    movement_mode: MovementMode::FreeRoam,
    move_speed: 10.0,
    rotation_speed: 60.0,
};

impl Default for ControllerConfig {
    fn default() -> Self {
        DEFAULT_CONFIG
    }
}

impl ControllerConfig {
    pub fn with_aim_mode(mut self, aim_mode: AimMode) -> Self {
        self.aim_mode = aim_mode;
        self
    }

    pub fn with_movement_mode(mut self, movement_mode: MovementMode) -> Self {
        self.movement_mode = movement_mode;
        self
    }

    pub fn with_move_speed(mut self, move_speed: f32) -> Self {
        self.move_speed = move_speed;
        self
    }

    pub fn with_rotation_speed(mut self, rotation_speed: f32) -> Self {
        self.rotation_speed = rotation_speed;
        self
    }

    /// Defaults overridden by `PILOT_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each `PILOT_*` key
    ///
    /// Invalid values are logged and the default is kept.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(value) = lookup(AIM_MODE_VAR) {
            match value.parse() {
                Ok(mode) => config = config.with_aim_mode(mode),
                Err(e) => log::warn!("Ignoring {}: {}", AIM_MODE_VAR, e),
            }
        }

        if let Some(value) = lookup(MOVEMENT_MODE_VAR) {
            match value.parse() {
                Ok(mode) => config = config.with_movement_mode(mode),
                Err(e) => log::warn!("Ignoring {}: {}", MOVEMENT_MODE_VAR, e),
            }
        }

        if let Some(value) = lookup(MOVE_SPEED_VAR) {
            match parse_speed(MOVE_SPEED_VAR, &value) {
                Ok(speed) => config = config.with_move_speed(speed),
                Err(e) => log::warn!("{}", e),
            }
        }

        if let Some(value) = lookup(ROTATION_SPEED_VAR) {
            match parse_speed(ROTATION_SPEED_VAR, &value) {
                Ok(speed) => config = config.with_rotation_speed(speed),
                Err(e) => log::warn!("{}", e),
            }
        }

        config
    }
}

fn parse_speed(key: &'static str, value: &str) -> Result<f32, ConfigError> {
    value
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|speed| speed.is_finite())
        .ok_or_else(|| ConfigError::InvalidNumber {
            key,
            value: value.to_string(),
        })
}
