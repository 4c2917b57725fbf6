// Per-frame orchestration of the pilot, its input and the physics world

use crate::engine::game_loop::{FrameClock, FrameTime, FIXED_TIMESTEP};
use crate::engine::input::{InputManager, InputSnapshot};
use crate::engine::physics::PhysicsWorld;
use crate::engine::renderer::Viewpoint;
use crate::game::pilot::{ControllerConfig, FrameContext, MotionController, Transform};

/// Entity ID of the local player
pub const PLAYER_ENTITY: u64 = 1;

/// One-shot input seen by this frame's consumers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    pub fire_pressed: bool,
    pub dash_pressed: bool,
    pub pause_pressed: bool,
}

/// Everything a running game owns: clock, input, physics and the pilot
pub struct Session {
    clock: FrameClock,
    input: InputManager,
    physics: PhysicsWorld,
    pilot: MotionController,
}

impl Session {
    /// Register the input snapshot and spawn the player
    pub fn new(config: ControllerConfig) -> Self {
        let mut input = InputManager::new();
        if let Err(e) = input.register(InputSnapshot::new()) {
            log::warn!("{}", e);
        }

        let mut physics = PhysicsWorld::new();
        physics.set_timestep(FIXED_TIMESTEP);

        let mut pilot = MotionController::new(PLAYER_ENTITY, config, Transform::default());
        if pilot.config().movement_mode.uses_physics() && pilot.body().is_none() {
            pilot.spawn_body(&mut physics);
            log::info!("Spawned physics body for entity {}", pilot.entity_id());
        }

        Self {
            clock: FrameClock::new(),
            input,
            physics,
            pilot,
        }
    }

    /// Input manager, for forwarding window events between frames
    pub fn input_mut(&mut self) -> &mut InputManager {
        &mut self.input
    }

    pub fn pilot(&self) -> &MotionController {
        &self.pilot
    }

    /// Measure wall-clock time for the next frame
    pub fn begin_frame(&mut self) -> FrameTime {
        self.clock.begin_frame()
    }

    /// Run every per-frame consumer, step physics, then clear one-shot input
    ///
    /// One-shot flags are captured after all consumers ran and before they are
    /// cleared, so the report matches what the consumers saw.
    pub fn run_frame(
        &mut self,
        frame: FrameTime,
        viewpoint: Option<&dyn Viewpoint>,
    ) -> FrameReport {
        let mut ctx = FrameContext {
            frame,
            viewpoint,
            physics: Some(&mut self.physics),
        };
        self.pilot.tick(self.input.snapshot(), &mut ctx);

        for _ in 0..frame.physics_steps {
            self.physics.step();
        }
        self.pilot.sync_from_physics(&self.physics);

        let report = match self.input.snapshot() {
            Some(snapshot) => FrameReport {
                fire_pressed: snapshot.fire_pressed,
                dash_pressed: snapshot.dash_pressed,
                pause_pressed: snapshot.pause_pressed,
            },
            None => FrameReport {
                fire_pressed: false,
                dash_pressed: false,
                pause_pressed: false,
            },
        };
        self.input.end_frame();

        if report.pause_pressed {
            self.clock.toggle_pause();
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::InputEvent;
    use crate::game::pilot::MovementMode;
    use approx::assert_relative_eq;
    use glam::Vec2;
    use std::time::Duration;

    const FRAME: Duration = Duration::from_millis(100);

    fn step(session: &mut Session) -> FrameReport {
        let frame = session.clock.advance(FRAME);
        session.run_frame(frame, None)
    }

    fn step_timed(session: &mut Session) -> (FrameTime, FrameReport) {
        let frame = session.clock.advance(FRAME);
        (frame, session.run_frame(frame, None))
    }

    #[test]
    fn test_fire_visible_for_one_frame() {
        let mut session = Session::new(ControllerConfig::default());
        session.input_mut().apply(InputEvent::Fire(true));

        let report = step(&mut session);
        assert!(report.fire_pressed);

        let snapshot = session.input.snapshot().unwrap();
        assert!(!snapshot.fire_pressed);
        assert!(snapshot.fire_held);

        assert!(!step(&mut session).fire_pressed);
    }

    #[test]
    fn test_dash_cleared_after_frame() {
        let mut session = Session::new(ControllerConfig::default());
        session.input_mut().apply(InputEvent::Dash(true));

        assert!(step(&mut session).dash_pressed);
        assert!(!step(&mut session).dash_pressed);
    }

    #[test]
    fn test_single_pause_press_toggles_once() {
        let mut session = Session::new(ControllerConfig::default());
        session.input_mut().apply(InputEvent::Pause(true));

        let (frame, report) = step_timed(&mut session);
        assert!(report.pause_pressed);
        assert!(!frame.is_paused());
        assert!(session.clock.is_paused());

        // No new input: stays paused
        let (frame, report) = step_timed(&mut session);
        assert!(!report.pause_pressed);
        assert!(frame.is_paused());
        assert_eq!(frame.dt, 0.0);
        assert!(session.clock.is_paused());

        session.input_mut().apply(InputEvent::Pause(true));
        step(&mut session);
        assert!(!session.clock.is_paused());
    }

    #[test]
    fn test_pilot_moves_during_frame() {
        let mut session = Session::new(ControllerConfig::default());
        session.input_mut().apply(InputEvent::Move(Vec2::new(1.0, 0.0)));

        step(&mut session);

        let position = session.pilot().transform().position;
        assert_relative_eq!(position.x, 1.0, epsilon = 1e-5);
        assert_relative_eq!(position.y, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_paused_frame_does_not_move_pilot() {
        let mut session = Session::new(ControllerConfig::default());
        session.clock.pause();
        session.input_mut().apply(InputEvent::Move(Vec2::new(1.0, 1.0)));

        step(&mut session);

        assert_eq!(session.pilot().transform().position.x, 0.0);
        assert_eq!(session.pilot().transform().position.y, 0.0);
    }

    #[test]
    fn test_asteroids_session_spawns_body() {
        let config = ControllerConfig::default().with_movement_mode(MovementMode::Asteroids);
        let session = Session::new(config);

        assert!(session.pilot().body().is_some());
        assert!(session.physics.body_for_entity(PLAYER_ENTITY).is_some());
    }

    #[test]
    fn test_free_roam_session_has_no_body() {
        let session = Session::new(ControllerConfig::default());
        assert!(session.pilot().body().is_none());
    }
}
