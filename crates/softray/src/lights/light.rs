use crate::geometry::Vec3;

/// Light sources understood by the shading evaluator.
///
/// Intensity is a single scalar channel; the surface color carries the hue.
#[derive(Debug, Clone, Copy)]
pub enum Light {
    Ambient {
        intensity: f32,
    },
    Point {
        position: Vec3,
        intensity: f32,
    },
    Directional {
        direction: Vec3,
        intensity: f32,
    },
}
