// Input manager - owns the live snapshot and feeds it from window events

use super::action::{Control, InputEvent, InputSource};
use super::config::InputConfig;
use super::snapshot::InputSnapshot;
use super::InputError;
use glam::Vec2;
use std::collections::HashSet;
use winit::event::{ElementState, KeyEvent, MouseButton};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Owns the single live input snapshot and translates window events into it
///
/// Only one snapshot can be registered. Events arriving before registration
/// are dropped.
#[derive(Debug)]
pub struct InputManager {
    /// Source -> control bindings
    config: InputConfig,

    /// The registered snapshot, if any
    snapshot: Option<InputSnapshot>,

    /// Directional controls currently held down
    held_directions: HashSet<Control>,
}

impl InputManager {
    /// Create an input manager with default bindings and no snapshot
    pub fn new() -> Self {
        Self::with_config(InputConfig::default())
    }

    /// Create an input manager with custom bindings and no snapshot
    pub fn with_config(config: InputConfig) -> Self {
        Self {
            config,
            snapshot: None,
            held_directions: HashSet::new(),
        }
    }

    /// Register the live snapshot
    ///
    /// The snapshot is reset to defaults first. If one is already registered
    /// the new one is dropped and the existing one stays authoritative.
    pub fn register(&mut self, mut snapshot: InputSnapshot) -> Result<(), InputError> {
        snapshot.reset();

        if self.snapshot.is_some() {
            log::warn!("Input snapshot already registered, discarding the new one");
            return Err(InputError::AlreadyRegistered);
        }

        self.snapshot = Some(snapshot);
        log::info!("Input snapshot registered");
        Ok(())
    }

    /// Get the live snapshot
    pub fn snapshot(&self) -> Option<&InputSnapshot> {
        self.snapshot.as_ref()
    }

    /// Apply an input event to the live snapshot
    pub fn apply(&mut self, event: InputEvent) {
        if let Some(snapshot) = self.snapshot.as_mut() {
            snapshot.apply(event);
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(code) = event.physical_key {
            self.process_key(code, event.state, event.repeat);
        }
    }

    /// Process a key press or release
    pub fn process_key(&mut self, code: KeyCode, state: ElementState, repeat: bool) {
        if repeat {
            return;
        }
        self.process_source(InputSource::key(code), state);
    }

    /// Process a mouse button press or release
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        self.process_source(InputSource::mouse(button), state);
    }

    /// Process a cursor move (screen pixels)
    pub fn process_cursor_moved(&mut self, x: f64, y: f64) {
        self.apply(InputEvent::Pointer(Vec2::new(x as f32, y as f32)));
    }

    /// End-of-frame cleanup
    /// Call once per frame after every consumer has read the snapshot
    pub fn end_frame(&mut self) {
        if let Some(snapshot) = self.snapshot.as_mut() {
            snapshot.clear_transient_flags();
        }
    }

    fn process_source(&mut self, source: InputSource, state: ElementState) {
        let Some(control) = self.config.get_control(source) else {
            return;
        };
        let active = state == ElementState::Pressed;

        let event = match control {
            Control::Fire => InputEvent::Fire(active),
            Control::Dash => InputEvent::Dash(active),
            Control::Pause => InputEvent::Pause(active),
            Control::MoveUp | Control::MoveDown | Control::MoveLeft | Control::MoveRight => {
                if active {
                    self.held_directions.insert(control);
                } else {
                    self.held_directions.remove(&control);
                }
                InputEvent::Move(self.move_axis())
            }
        };

        self.apply(event);
    }

    /// Sum of held directional controls, each axis clamped to [-1, 1]
    fn move_axis(&self) -> Vec2 {
        self.held_directions
            .iter()
            .filter_map(Control::direction)
            .fold(Vec2::ZERO, |acc, dir| acc + dir)
            .clamp(Vec2::NEG_ONE, Vec2::ONE)
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}
