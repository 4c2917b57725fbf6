// Input handling system
//
// Window events are mapped through remappable bindings into a single
// `InputSnapshot` that gameplay reads once per frame.
//
// ## Architecture
//
// - `action`: Controls, input events and default bindings
// - `config`: Binding configuration and remapping
// - `snapshot`: Latest input values and one-shot flags
// - `manager`: Owns the live snapshot and feeds it from winit events
//
// ## Usage Example
//
// ```rust
// use engine::input::{InputManager, InputSnapshot};
//
// let mut input = InputManager::new();
// input.register(InputSnapshot::new())?;
//
// // In your event loop, forward window events
// input.process_keyboard_event(&key_event);
//
// // Once per frame, let consumers read the snapshot...
// if let Some(snapshot) = input.snapshot() {
//     if snapshot.fire_pressed {
//         // Fire went down this frame
//     }
// }
//
// // ...then clear the one-shot flags
// input.end_frame();
// ```

pub mod action;
pub mod config;
pub mod manager;
pub mod snapshot;

// Re-export commonly used types
#[allow(unused_imports)]
pub use action::{Control, InputEvent, InputSource};
#[allow(unused_imports)]
pub use config::InputConfig;
pub use manager::InputManager;
pub use snapshot::InputSnapshot;

/// Input registration errors
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("An input snapshot is already registered")]
    AlreadyRegistered,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_display() {
        let err = InputError::AlreadyRegistered;
        assert_eq!(err.to_string(), "An input snapshot is already registered");
    }
}
