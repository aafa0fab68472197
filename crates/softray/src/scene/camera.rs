use crate::geometry::Vec3;

/// Pinhole viewer at a fixed position, looking down +Z through a viewport
/// rectangle `viewport_distance` away.
///
/// Canvas pixel coordinates are centered: x in [-W/2, W/2), y in [-H/2, H/2),
/// with +y pointing up (device space flips it back on write).
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,

    pub viewport_width: f32,
    pub viewport_height: f32,
    pub viewport_distance: f32,

    pub canvas_width: usize,
    pub canvas_height: usize,
}

impl Camera {
    /// The course setup: 1x1 viewport at distance 1, camera at the origin.
    pub fn unit_viewport(canvas_width: usize, canvas_height: usize) -> Camera {
        Camera {
            position: Vec3::zero(),
            viewport_width: 1.0,
            viewport_height: 1.0,
            viewport_distance: 1.0,
            canvas_width,
            canvas_height,
        }
    }

    /// Maps a centered canvas pixel onto the viewport plane, yielding a ray
    /// direction. The direction is deliberately not normalized; parametric
    /// distances along it are in units of its magnitude.
    pub fn canvas_to_viewport(&self, pixel_x: i32, pixel_y: i32) -> Vec3 {
        Vec3(
            pixel_x as f32 * self.viewport_width / self.canvas_width as f32,
            pixel_y as f32 * self.viewport_height / self.canvas_height as f32,
            self.viewport_distance,
        )
    }
}
