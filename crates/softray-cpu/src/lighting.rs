use softray::{geometry::Vec3, lights::Light, scene::Sphere};

use crate::{intersect::closest_intersection, ray::Ray};

// offset for shadow rays so a surface does not occlude itself
const SHADOW_EPSILON: f32 = 1e-3;

/// Scalar light intensity arriving at `point`, clamped to [0, 1].
///
/// `normal` must be unit length and point outward; `view` is the negated ray
/// direction. A negative `specular` exponent disables the highlight term.
pub fn compute_lighting(
    point: Vec3,
    normal: Vec3,
    view: Vec3,
    specular: f32,
    spheres: &[Sphere],
    lights: &[Light],
) -> f32 {
    let mut total = 0.0;

    for light in lights {
        let (l, light_intensity, shadow_t_max) = match *light {
            Light::Ambient { intensity } => {
                total += intensity;
                continue;
            }
            // the light sits at t = 1.0 along L; anything past it cannot occlude
            Light::Point { position, intensity } => (position - point, intensity, 1.0),
            Light::Directional { direction, intensity } => (direction, intensity, f32::INFINITY),
        };

        let shadow_ray = Ray {
            origin: point,
            direction: l,
        };
        if closest_intersection(shadow_ray, SHADOW_EPSILON, shadow_t_max, spheres).is_some() {
            // point is in shadow for this light
            continue;
        }

        let n_dot_l = Vec3::dot(normal, l);
        if n_dot_l > 0.0 {
            total += light_intensity * n_dot_l / (normal.length() * l.length());
        }

        if specular >= 0.0 {
            let reflected = 2.0 * normal * n_dot_l - l;
            let r_dot_v = Vec3::dot(reflected, view);
            if r_dot_v > 0.0 {
                total += light_intensity
                    * (r_dot_v / (reflected.length() * view.length())).powf(specular);
            }
        }
    }

    total.clamp(0.0, 1.0)
}
