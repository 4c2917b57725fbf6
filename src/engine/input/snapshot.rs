// Latest input values read by gameplay each frame

use super::action::InputEvent;
use glam::Vec2;

/// Both pointer components must exceed this magnitude for an update to be kept
const POINTER_MIN_MAGNITUDE: f32 = 1.0;

/// Snapshot of the most recent input
///
/// Axes are overwritten whenever a new value arrives. The `*_pressed` flags
/// are one-shot: they stay set until `clear_transient_flags` runs at the end
/// of the frame, whether or not anything read them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSnapshot {
    /// Movement intent along x/y
    pub move_axis: Vec2,
    /// Look target (screen point) or look direction
    pub look_axis: Vec2,

    /// Fire went active this frame
    pub fire_pressed: bool,
    /// Fire is being held
    pub fire_held: bool,

    /// Pause went active this frame
    pub pause_pressed: bool,
    /// Dash went active this frame
    pub dash_pressed: bool,
}

impl InputSnapshot {
    /// Create a snapshot with every field at its default
    pub fn new() -> Self {
        Self::default()
    }

    /// Put every field back to its default
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Overwrite the movement axis
    pub fn set_move_axis(&mut self, x: f32, y: f32) {
        self.move_axis = Vec2::new(x, y);
    }

    /// Overwrite the look axis
    pub fn set_look_axis(&mut self, x: f32, y: f32) {
        self.look_axis = Vec2::new(x, y);
    }

    /// Update the look axis from a pointer position
    ///
    /// Readings with either component at or below magnitude 1 are dropped;
    /// devices report near-zero positions while switching over.
    pub fn set_pointer_position(&mut self, x: f32, y: f32) {
        if x.abs() > POINTER_MIN_MAGNITUDE && y.abs() > POINTER_MIN_MAGNITUDE {
            self.set_look_axis(x, y);
        } else {
            log::debug!("Dropped pointer reading ({}, {})", x, y);
        }
    }

    /// Fire went active (`true`) or was released (`false`)
    pub fn trigger_fire(&mut self, active: bool) {
        self.fire_pressed = active;
        self.fire_held = active;
    }

    pub fn trigger_pause(&mut self, active: bool) {
        self.pause_pressed = active;
    }

    pub fn trigger_dash(&mut self, active: bool) {
        self.dash_pressed = active;
    }

    /// Apply a single input event
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::Move(v) => self.set_move_axis(v.x, v.y),
            InputEvent::Pointer(v) => self.set_pointer_position(v.x, v.y),
            InputEvent::Fire(active) => self.trigger_fire(active),
            InputEvent::Pause(active) => self.trigger_pause(active),
            InputEvent::Dash(active) => self.trigger_dash(active),
        }
    }

    /// Clear the one-shot flags
    /// Call once per frame after every consumer has run
    pub fn clear_transient_flags(&mut self) {
        self.fire_pressed = false;
        self.pause_pressed = false;
        self.dash_pressed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_defaults() {
        let snapshot = InputSnapshot::new();
        assert_eq!(snapshot.move_axis, Vec2::ZERO);
        assert_eq!(snapshot.look_axis, Vec2::ZERO);
        assert!(!snapshot.fire_pressed);
        assert!(!snapshot.fire_held);
        assert!(!snapshot.pause_pressed);
        assert!(!snapshot.dash_pressed);
    }

    #[test]
    fn test_move_and_look_overwrite() {
        let mut snapshot = InputSnapshot::new();
        snapshot.set_move_axis(1.0, -1.0);
        snapshot.set_move_axis(0.5, 0.25);
        snapshot.set_look_axis(0.1, 0.2);

        assert_eq!(snapshot.move_axis, Vec2::new(0.5, 0.25));
        assert_eq!(snapshot.look_axis, Vec2::new(0.1, 0.2));
    }

    #[test]
    fn test_pointer_small_values_dropped() {
        let mut snapshot = InputSnapshot::new();
        snapshot.set_pointer_position(0.5, 0.5);
        assert_eq!(snapshot.look_axis, Vec2::ZERO);
    }

    #[test]
    fn test_pointer_requires_both_components() {
        let mut snapshot = InputSnapshot::new();
        snapshot.set_pointer_position(5.0, 5.0);
        snapshot.set_pointer_position(200.0, 1.0);
        snapshot.set_pointer_position(-0.5, 300.0);

        assert_eq!(snapshot.look_axis, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_pointer_accepts_negative_magnitudes() {
        let mut snapshot = InputSnapshot::new();
        snapshot.set_pointer_position(-4.0, -3.0);
        assert_eq!(snapshot.look_axis, Vec2::new(-4.0, -3.0));
    }

    #[test]
    fn test_fire_latches_for_one_frame() {
        let mut snapshot = InputSnapshot::new();
        snapshot.trigger_fire(true);
        assert!(snapshot.fire_pressed);
        assert!(snapshot.fire_held);

        snapshot.clear_transient_flags();
        assert!(!snapshot.fire_pressed);
        assert!(snapshot.fire_held);
    }

    #[test]
    fn test_fire_release_clears_immediately() {
        let mut snapshot = InputSnapshot::new();
        snapshot.trigger_fire(true);
        snapshot.clear_transient_flags();

        snapshot.trigger_fire(false);
        assert!(!snapshot.fire_pressed);
        assert!(!snapshot.fire_held);
    }

    #[test]
    fn test_pause_and_dash_are_one_shot() {
        let mut snapshot = InputSnapshot::new();
        snapshot.trigger_pause(true);
        snapshot.trigger_dash(true);
        assert!(snapshot.pause_pressed);
        assert!(snapshot.dash_pressed);

        snapshot.clear_transient_flags();
        assert!(!snapshot.pause_pressed);
        assert!(!snapshot.dash_pressed);
    }

    #[test]
    fn test_clear_keeps_axes() {
        let mut snapshot = InputSnapshot::new();
        snapshot.set_move_axis(1.0, 0.0);
        snapshot.set_look_axis(10.0, 20.0);
        snapshot.clear_transient_flags();

        assert_eq!(snapshot.move_axis, Vec2::new(1.0, 0.0));
        assert_eq!(snapshot.look_axis, Vec2::new(10.0, 20.0));
    }

    #[test]
    fn test_apply_events() {
        let mut snapshot = InputSnapshot::new();
        snapshot.apply(InputEvent::Move(Vec2::new(0.0, 1.0)));
        snapshot.apply(InputEvent::Pointer(Vec2::new(0.2, 0.2)));
        snapshot.apply(InputEvent::Dash(true));

        assert_eq!(snapshot.move_axis, Vec2::new(0.0, 1.0));
        assert_eq!(snapshot.look_axis, Vec2::ZERO);
        assert!(snapshot.dash_pressed);
        assert!(!snapshot.fire_pressed);
    }

    #[test]
    fn test_reset() {
        let mut snapshot = InputSnapshot::new();
        snapshot.set_move_axis(1.0, 1.0);
        snapshot.trigger_fire(true);
        snapshot.reset();

        assert_eq!(snapshot, InputSnapshot::default());
    }
}
