// Input controls, events and default bindings

use glam::Vec2;
use winit::event::MouseButton;
use winit::keyboard::KeyCode;

/// Logical controls that physical inputs can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    // Movement
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,

    // Buttons
    Fire,
    Dash,
    Pause,
}

impl Control {
    /// Contribution of this control to the movement axis, if it is directional
    pub fn direction(&self) -> Option<Vec2> {
        match self {
            Self::MoveUp => Some(Vec2::Y),
            Self::MoveDown => Some(Vec2::NEG_Y),
            Self::MoveLeft => Some(Vec2::NEG_X),
            Self::MoveRight => Some(Vec2::X),
            Self::Fire | Self::Dash | Self::Pause => None,
        }
    }
}

/// Represents an input source (keyboard key or mouse button)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Keyboard(KeyCode),
    Mouse(MouseButton),
}

impl InputSource {
    /// Create a keyboard input source
    pub fn key(code: KeyCode) -> Self {
        Self::Keyboard(code)
    }

    /// Create a mouse button input source
    pub fn mouse(button: MouseButton) -> Self {
        Self::Mouse(button)
    }
}

/// A named input event delivered to the snapshot
///
/// Vector payloads carry the latest value, button payloads carry whether the
/// input is active (`false` once it is released or cancelled).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Movement intent, typically in [-1, 1] per axis
    Move(Vec2),
    /// Pointer position in screen pixels, subject to the magnitude guard
    Pointer(Vec2),
    Fire(bool),
    Pause(bool),
    Dash(bool),
}

/// Default keyboard/mouse bindings
pub fn default_bindings() -> Vec<(InputSource, Control)> {
    vec![
        // Movement (WASD)
        (InputSource::key(KeyCode::KeyW), Control::MoveUp),
        (InputSource::key(KeyCode::KeyS), Control::MoveDown),
        (InputSource::key(KeyCode::KeyA), Control::MoveLeft),
        (InputSource::key(KeyCode::KeyD), Control::MoveRight),
        // Movement (arrows)
        (InputSource::key(KeyCode::ArrowUp), Control::MoveUp),
        (InputSource::key(KeyCode::ArrowDown), Control::MoveDown),
        (InputSource::key(KeyCode::ArrowLeft), Control::MoveLeft),
        (InputSource::key(KeyCode::ArrowRight), Control::MoveRight),
        // Buttons
        (InputSource::mouse(MouseButton::Left), Control::Fire),
        (InputSource::mouse(MouseButton::Right), Control::Dash),
        (InputSource::key(KeyCode::Escape), Control::Pause),
    ]
}
