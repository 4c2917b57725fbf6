// Math utilities and helper functions

use glam::Vec2;

/// Wrap an angle in degrees into the range [0, 360)
pub fn wrap_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Unit "up" vector for a heading in degrees (counter-clockwise around +Z)
///
/// A heading of 0 faces +Y, 90 faces -X.
pub fn heading_to_up(degrees: f32) -> Vec2 {
    let radians = degrees.to_radians();
    Vec2::new(-radians.sin(), radians.cos())
}

/// Heading in degrees whose "up" vector points along `direction`
///
/// Returns `None` for a zero-length or non-finite direction.
pub fn up_to_heading(direction: Vec2) -> Option<f32> {
    if !direction.is_finite() || direction.length_squared() <= f32::EPSILON {
        return None;
    }
    Some(wrap_degrees((-direction.x).atan2(direction.y).to_degrees()))
}
