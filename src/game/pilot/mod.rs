// Player pilot: movement and aiming driven by the input snapshot

pub mod config;
pub mod controller;
pub mod modes;
pub mod transform;

pub use config::ControllerConfig;
pub use controller::{FrameContext, MotionController};
#[allow(unused_imports)]
pub use modes::{AimMode, MovementMode};
pub use transform::Transform;

/// Controller configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Unknown {kind} mode: {value}")]
    UnknownMode { kind: &'static str, value: String },

    #[error("Invalid number for {key}: {value}")]
    InvalidNumber { key: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::UnknownMode {
            kind: "movement",
            value: "diagonal".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown movement mode: diagonal");
    }
}
