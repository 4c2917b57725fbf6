// Physics system using rapier2d

pub mod body;
mod world;

pub use body::RigidBodyHandle;
pub use world::PhysicsWorld;
