use rayon::prelude::*;

use softray::{
    canvas::{Canvas, Color},
    geometry::Vec3,
    scene::Scene,
};

use crate::{intersect::closest_intersection, lighting::compute_lighting, ray::Ray};

pub mod intersect;
pub mod lighting;
pub mod ray;
pub mod utils;


// primary rays start at the viewport plane, which sits at t = 1.0 in units
// of the unnormalized viewport direction
const PRIMARY_T_MIN: f32 = 1.0;

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// 1 reproduces the reference's sequential sweep; more dispatches rows
    /// across a rayon pool. Output is identical either way.
    pub num_threads: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions { num_threads: 1 }
    }
}

fn generate_ray(scene: &Scene, x: i32, y: i32) -> Ray {
    Ray {
        origin: scene.camera.position,
        direction: scene.camera.canvas_to_viewport(x, y),
    }
}

/// Nearest hit inside `[t_min, t_max]` shaded against the scene lights, or
/// the background color on a miss.
pub fn trace_ray(scene: &Scene, ray: Ray, t_min: f32, t_max: f32) -> Vec3 {
    let Some(hit) = closest_intersection(ray, t_min, t_max, &scene.spheres) else {
        return scene.background;
    };

    let point = ray.at(hit.t);
    let normal = Vec3::normalized(point - hit.sphere.center);
    let view = -ray.direction;

    let intensity = compute_lighting(
        point,
        normal,
        view,
        hit.sphere.specular,
        &scene.spheres,
        &scene.lights,
    );

    hit.sphere.color * intensity
}

/// One synchronous sweep over every canvas pixel.
pub fn render(scene: &Scene, options: RenderOptions) -> Canvas {
    let width = scene.camera.canvas_width;
    let height = scene.camera.canvas_height;
    let half_width = width as i32 / 2;
    let half_height = height as i32 / 2;

    let trace_row = |y: i32| -> Vec<Vec3> {
        (-half_width..half_width)
            .map(|x| {
                let ray = generate_ray(scene, x, y);
                trace_ray(scene, ray, PRIMARY_T_MIN, f32::INFINITY)
            })
            .collect()
    };

    let rows: Vec<(i32, Vec<Vec3>)> = if options.num_threads > 1 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(options.num_threads as usize)
            .build()
            .expect("failed to build render thread pool");
        pool.install(|| {
            (-half_height..half_height)
                .into_par_iter()
                .map(|y| (y, trace_row(y)))
                .collect()
        })
    } else {
        (-half_height..half_height)
            .map(|y| (y, trace_row(y)))
            .collect()
    };

    let mut canvas = Canvas::new(width, height);
    for (y, row) in rows {
        for (i, color) in row.into_iter().enumerate() {
            put_pixel(&mut canvas, i as i32 - half_width, y, color);
        }
    }

    canvas
}

// centered coordinates to device space; out-of-canvas writes are dropped
// silently (the y = -H/2 row lands one past the bottom edge)
fn put_pixel(canvas: &mut Canvas, x: i32, y: i32, color: Vec3) {
    let image_x = canvas.width() as i32 / 2 + x;
    let image_y = canvas.height() as i32 / 2 - y;

    if image_x < 0
        || image_x >= canvas.width() as i32
        || image_y < 0
        || image_y >= canvas.height() as i32
    {
        return;
    }

    canvas.set_pixel(image_x as usize, image_y as usize, Color::from_unit(color));
}
