use glam::Vec2;
use rapier2d::prelude::*;
use std::collections::HashMap;

/// Physics world that manages all physics simulation
pub struct PhysicsWorld {
    /// Gravity vector (top-down games use zero)
    gravity: Vector<Real>,

    /// Integration parameters for the physics simulation
    integration_parameters: IntegrationParameters,

    /// Physics pipeline handles collision detection and solving
    physics_pipeline: PhysicsPipeline,

    /// Island manager for sleeping bodies
    island_manager: IslandManager,

    /// Broad phase collision detection
    broad_phase: DefaultBroadPhase,

    /// Narrow phase collision detection
    narrow_phase: NarrowPhase,

    /// Impulse joint set
    impulse_joint_set: ImpulseJointSet,

    /// Multibody joint set
    multibody_joint_set: MultibodyJointSet,

    /// CCD solver for fast-moving objects
    ccd_solver: CCDSolver,

    /// Rigid body set
    rigid_body_set: RigidBodySet,

    /// Collider set
    collider_set: ColliderSet,

    /// Lookup from game entity IDs to their bodies
    entity_to_body: HashMap<u64, RigidBodyHandle>,
}

impl PhysicsWorld {
    /// Create a new physics world without gravity
    pub fn new() -> Self {
        Self::with_gravity(vector![0.0, 0.0])
    }

    /// Create a new physics world with custom gravity
    pub fn with_gravity(gravity: Vector<Real>) -> Self {
        let mut integration_parameters = IntegrationParameters::default();
        // Fixed timestep of 1/60 seconds (60 FPS)
        integration_parameters.dt = 1.0 / 60.0;

        Self {
            gravity,
            integration_parameters,
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joint_set: ImpulseJointSet::new(),
            multibody_joint_set: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
            entity_to_body: HashMap::new(),
        }
    }

    /// Step the physics simulation forward by one timestep
    ///
    /// Forces added since the previous step are applied during this step and
    /// then cleared, so callers add them again every frame they want them.
    pub fn step(&mut self) {
        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigid_body_set,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            &mut self.ccd_solver,
            None,
            &(),
            &(),
        );

        for (_, body) in self.rigid_body_set.iter_mut() {
            body.reset_forces(false);
        }
    }

    /// Add a rigid body to the physics world
    pub fn add_rigid_body(&mut self, body: RigidBody) -> RigidBodyHandle {
        self.rigid_body_set.insert(body)
    }

    /// Add a collider attached to a rigid body
    pub fn add_collider(&mut self, collider: Collider, parent_handle: RigidBodyHandle) {
        self.collider_set
            .insert_with_parent(collider, parent_handle, &mut self.rigid_body_set);
    }

    /// Get a reference to a rigid body
    pub fn get_rigid_body(&self, handle: RigidBodyHandle) -> Option<&RigidBody> {
        self.rigid_body_set.get(handle)
    }

    /// Associate a game entity ID with a rigid body
    pub fn set_entity_mapping(&mut self, body_handle: RigidBodyHandle, entity_id: u64) {
        self.entity_to_body.insert(entity_id, body_handle);
    }

    /// Find the body attached to a game entity
    pub fn body_for_entity(&self, entity_id: u64) -> Option<RigidBodyHandle> {
        self.entity_to_body
            .get(&entity_id)
            .copied()
            .filter(|handle| self.rigid_body_set.contains(*handle))
    }

    /// Add a force to a body, applied during the next step
    pub fn add_force(&mut self, handle: RigidBodyHandle, force: Vec2) -> bool {
        let Some(body) = self.rigid_body_set.get_mut(handle) else {
            return false;
        };
        body.add_force(vector![force.x, force.y], true);
        true
    }

    /// Set a body's rotation directly (degrees, counter-clockwise)
    pub fn set_rotation_degrees(&mut self, handle: RigidBodyHandle, degrees: f32) -> bool {
        let Some(body) = self.rigid_body_set.get_mut(handle) else {
            return false;
        };
        body.set_rotation(Rotation::new(degrees.to_radians()), true);
        true
    }

    /// Lock or unlock a body's rotation
    pub fn lock_rotation(&mut self, handle: RigidBodyHandle, locked: bool) -> bool {
        let Some(body) = self.rigid_body_set.get_mut(handle) else {
            return false;
        };
        body.lock_rotations(locked, true);
        true
    }

    /// Current translation of a body
    pub fn translation(&self, handle: RigidBodyHandle) -> Option<Vec2> {
        self.rigid_body_set
            .get(handle)
            .map(|body| Vec2::new(body.translation().x, body.translation().y))
    }

    /// Set the timestep for physics simulation
    pub fn set_timestep(&mut self, dt: Real) {
        self.integration_parameters.dt = dt;
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}
