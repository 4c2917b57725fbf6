// Camera and viewport for 2D rendering

use super::Viewpoint;
use glam::Vec2;

/// 2D orthographic camera
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera position in world space
    pub position: Vec2,
    /// Camera zoom level (1.0 = one world unit per pixel, 2.0 = zoomed in 2x)
    pub zoom: f32,
    /// Viewport width in pixels
    viewport_width: f32,
    /// Viewport height in pixels
    viewport_height: f32,
}

impl Camera {
    /// Create a new camera
    pub fn new(position: Vec2, viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            position,
            zoom: 1.0,
            viewport_width,
            viewport_height,
        }
    }

    /// Set camera zoom
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.max(0.1); // Prevent zoom from being too small
    }

    /// Resize the viewport
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport_width = width;
        self.viewport_height = height;
    }

    /// Whether the viewport has any area to project from
    pub fn has_area(&self) -> bool {
        self.viewport_width > 0.0 && self.viewport_height > 0.0
    }

    /// Convert screen coordinates (pixels, origin top-left) to world coordinates
    ///
    /// Returns `None` for a zero-sized viewport.
    pub fn screen_to_world(&self, screen_pos: Vec2) -> Option<Vec2> {
        if !self.has_area() {
            return None;
        }

        let normalized_x = (screen_pos.x / self.viewport_width) * 2.0 - 1.0;
        let normalized_y = 1.0 - (screen_pos.y / self.viewport_height) * 2.0;
        let half_extents = Vec2::new(self.viewport_width, self.viewport_height) / 2.0 / self.zoom;

        Some(self.position + Vec2::new(normalized_x, normalized_y) * half_extents)
    }
}

impl Viewpoint for Camera {
    fn project_to_world(&self, point: Vec2) -> Option<Vec2> {
        self.screen_to_world(point)
    }
}
