// View transforms between the rendering surface and the world

mod camera;

pub use camera::Camera;

use glam::Vec2;

/// Something that can map a point on the rendering surface into world space
pub trait Viewpoint {
    /// Project a surface point (screen pixels) to a world point
    ///
    /// Returns `None` while the surface has no area (minimized window).
    fn project_to_world(&self, point: Vec2) -> Option<Vec2>;
}
