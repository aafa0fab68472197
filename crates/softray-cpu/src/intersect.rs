use softray::{geometry::Vec3, scene::Sphere};

use crate::ray::Ray;

/// Nearest in-bounds intersection found by [`closest_intersection`].
#[derive(Clone, Copy, Debug)]
pub struct Hit<'a> {
    pub sphere: &'a Sphere,
    pub t: f32,
}

/// Solves `a*t^2 + b*t + c = 0` for the ray against one sphere.
///
/// Returns the (+sqrt, -sqrt) branches, deliberately unordered; a miss is a
/// pair of infinite sentinels rather than a separate signal, so both roots
/// must be bound-checked by the caller either way.
pub fn ray_intersect_sphere(ray: Ray, sphere: &Sphere) -> (f32, f32) {
    let oc = ray.origin - sphere.center;
    let a = Vec3::dot(ray.direction, ray.direction);
    let b = 2.0 * Vec3::dot(oc, ray.direction);
    let c = Vec3::dot(oc, oc) - sphere.radius * sphere.radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return (f32::INFINITY, f32::INFINITY);
    }

    let sqrt_d = discriminant.sqrt();
    ((-b + sqrt_d) / (2.0 * a), (-b - sqrt_d) / (2.0 * a))
}

/// Linear scan over every sphere, keeping the smallest `t` inside
/// `[t_min, t_max]`. The first sphere reaching the minimal `t` wins.
pub fn closest_intersection<'a>(
    ray: Ray,
    t_min: f32,
    t_max: f32,
    spheres: &'a [Sphere],
) -> Option<Hit<'a>> {
    let mut closest: Option<Hit<'a>> = None;
    let mut closest_t = f32::INFINITY;

    for sphere in spheres {
        let (t_plus, t_minus) = ray_intersect_sphere(ray, sphere);
        for t in [t_plus, t_minus] {
            if t >= t_min && t <= t_max && t < closest_t {
                closest_t = t;
                closest = Some(Hit { sphere, t });
            }
        }
    }

    closest
}
