// Pilot motion controller

use super::config::ControllerConfig;
use super::modes::{AimAction, Motion};
use super::transform::Transform;
use crate::engine::game_loop::FrameTime;
use crate::engine::input::InputSnapshot;
use crate::engine::physics::body::presets;
use crate::engine::physics::{PhysicsWorld, RigidBodyHandle};
use crate::engine::renderer::Viewpoint;
use glam::Vec2;

/// Ship collider radius used when the controller spawns its own body
const SHIP_RADIUS: f32 = 0.5;

/// Engine collaborators available to a controller for one frame
///
/// Any of them may be missing; the steps that need a missing collaborator
/// are skipped for that frame.
pub struct FrameContext<'a> {
    pub frame: FrameTime,
    pub viewpoint: Option<&'a dyn Viewpoint>,
    pub physics: Option<&'a mut PhysicsWorld>,
}

/// Turns the input snapshot into motion and orientation once per frame
#[derive(Debug)]
pub struct MotionController {
    /// Entity ID used to find our body in the physics world
    entity_id: u64,
    config: ControllerConfig,
    transform: Transform,

    /// Physics body, resolved lazily in asteroids mode
    body: Option<RigidBodyHandle>,

    /// Set once the missing-input warning has been logged
    warned_missing_input: bool,
}

impl MotionController {
    pub fn new(entity_id: u64, config: ControllerConfig, transform: Transform) -> Self {
        log::info!(
            "Pilot {} using {} movement, {} aim",
            entity_id,
            config.movement_mode,
            config.aim_mode
        );
        Self {
            entity_id,
            config,
            transform,
            body: None,
            warned_missing_input: false,
        }
    }

    pub fn entity_id(&self) -> u64 {
        self.entity_id
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn body(&self) -> Option<RigidBodyHandle> {
        self.body
    }

    /// Create a ship body at the current transform and attach it
    pub fn spawn_body(&mut self, physics: &mut PhysicsWorld) -> RigidBodyHandle {
        let position = self.transform.position_2d();
        let handle = physics.add_rigid_body(presets::ship_body(position.x, position.y));
        physics.add_collider(presets::ship_collider(SHIP_RADIUS), handle);
        physics.set_entity_mapping(handle, self.entity_id);
        physics.set_rotation_degrees(handle, self.transform.rotation());
        self.body = Some(handle);
        handle
    }

    /// Resolved look target for this frame
    ///
    /// Without a snapshot this is the facing direction.
    pub fn look_position(&self, input: Option<&InputSnapshot>) -> Vec2 {
        match input {
            Some(snapshot) => self.config.aim_mode.look_target(snapshot, self.transform.up()),
            None => self.transform.up(),
        }
    }

    /// Run one frame
    pub fn tick(&mut self, input: Option<&InputSnapshot>, ctx: &mut FrameContext<'_>) {
        let Some(snapshot) = input else {
            if !self.warned_missing_input {
                log::warn!("No input snapshot available, pilot {} will not move", self.entity_id);
                self.warned_missing_input = true;
            }
            return;
        };

        let look_target = self.look_position(Some(snapshot));
        let motion = self.config.movement_mode.compute_motion(
            snapshot.move_axis,
            self.transform.rotation(),
            self.config.move_speed,
            self.config.rotation_speed,
            ctx.frame.dt,
        );

        self.apply_motion(motion, ctx.physics.as_deref_mut());
        self.look_at(look_target, ctx);
        self.signal_animator();
    }

    /// Copy the body's position back into the transform after physics has stepped
    pub fn sync_from_physics(&mut self, physics: &PhysicsWorld) {
        if !self.config.movement_mode.uses_physics() {
            return;
        }
        if let Some(translation) = self.body.and_then(|handle| physics.translation(handle)) {
            self.transform.position.x = translation.x;
            self.transform.position.y = translation.y;
        }
    }

    fn apply_motion(&mut self, motion: Motion, physics: Option<&mut PhysicsWorld>) {
        match motion {
            Motion::Translate(delta) => {
                self.transform.position += delta;
            }
            Motion::Thrust { force, heading } => {
                let Some(physics) = physics else {
                    return;
                };
                let Some(handle) = self.resolve_body(physics) else {
                    return;
                };

                physics.add_force(handle, force);
                self.transform.set_rotation(heading);
                physics.set_rotation_degrees(handle, self.transform.rotation());
            }
        }
    }

    fn look_at(&mut self, target: Vec2, ctx: &mut FrameContext<'_>) {
        if ctx.frame.is_paused() {
            return;
        }
        let Some(viewpoint) = ctx.viewpoint else {
            return;
        };

        let Some(world_target) = viewpoint.project_to_world(target) else {
            return;
        };
        let direction = world_target - self.transform.position_2d();

        match self.config.aim_mode.resolve(direction) {
            AimAction::Snap(heading) => {
                // Asteroids turns with input only
                if !self.config.movement_mode.drives_heading() {
                    self.transform.set_rotation(heading);
                }
            }
            AimAction::LockRotation => {
                if let (Some(handle), Some(physics)) = (self.body, ctx.physics.as_deref_mut()) {
                    physics.lock_rotation(handle, true);
                }
            }
            AimAction::Hold => {}
        }
    }

    /// Find our body, keeping a cached handle only while it is still alive
    fn resolve_body(&mut self, physics: &PhysicsWorld) -> Option<RigidBodyHandle> {
        if let Some(handle) = self.body {
            if physics.get_rigid_body(handle).is_some() {
                return Some(handle);
            }
        }

        self.body = physics.body_for_entity(self.entity_id);
        if self.body.is_some() {
            log::debug!("Pilot {} found its physics body", self.entity_id);
        }
        self.body
    }

    fn signal_animator(&self) {
        // No animator parameters yet
    }
}
