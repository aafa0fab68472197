//! Builtin scenes which act as a smoke test for the renderer and as the
//! demo content driven from the command line

use crate::{
    geometry::Vec3,
    lights::Light,
    scene::{Camera, Scene, Sphere},
};

const RED: Vec3 = Vec3(1.0, 0.0, 0.0);
const GREEN: Vec3 = Vec3(0.0, 1.0, 0.0);
const BLUE: Vec3 = Vec3(0.0, 0.0, 1.0);
const YELLOW: Vec3 = Vec3(1.0, 1.0, 0.0);
const WHITE: Vec3 = Vec3(1.0, 1.0, 1.0);

pub struct TestSceneDescriptor {
    pub name: &'static str,
    pub scene_func: fn() -> Scene,
}

const ALL_TEST_SCENES: [TestSceneDescriptor; 3] = [
    TestSceneDescriptor {
        name: "course",
        scene_func: course_scene,
    },
    TestSceneDescriptor {
        name: "single_sphere",
        scene_func: single_sphere_scene,
    },
    TestSceneDescriptor {
        name: "shadow",
        scene_func: shadow_scene,
    },
];

pub fn all_test_scenes() -> &'static [TestSceneDescriptor] {
    &ALL_TEST_SCENES
}

/// Three shiny spheres resting on a huge yellow ground sphere, lit by an
/// ambient, a point, and a directional light.
pub fn course_scene() -> Scene {
    let spheres = vec![
        Sphere {
            center: Vec3(0.0, -1.0, 3.0),
            radius: 1.0,
            color: RED,
            specular: 500.0,
        },
        Sphere {
            center: Vec3(2.0, 0.0, 4.0),
            radius: 1.0,
            color: BLUE,
            specular: 500.0,
        },
        Sphere {
            center: Vec3(-2.0, 0.0, 4.0),
            radius: 1.0,
            color: GREEN,
            specular: 10.0,
        },
        Sphere {
            center: Vec3(0.0, -5001.0, 0.0),
            radius: 5000.0,
            color: YELLOW,
            specular: 1000.0,
        },
    ];

    let lights = vec![
        Light::Ambient { intensity: 0.2 },
        Light::Point {
            position: Vec3(2.0, 1.0, 0.0),
            intensity: 0.6,
        },
        Light::Directional {
            direction: Vec3(1.0, 4.0, 4.0),
            intensity: 0.2,
        },
    ];

    Scene {
        camera: Camera::unit_viewport(640, 640),
        spheres,
        lights,
        background: WHITE,
    }
}

/// A single matte red sphere under ambient light only; the dimmest scene the
/// shading evaluator can produce a hit in.
pub fn single_sphere_scene() -> Scene {
    Scene {
        camera: Camera::unit_viewport(640, 640),
        spheres: vec![Sphere {
            center: Vec3(0.0, -1.0, 3.0),
            radius: 1.0,
            color: RED,
            specular: -1.0,
        }],
        lights: vec![Light::Ambient { intensity: 0.2 }],
        background: WHITE,
    }
}

/// A small sphere between a point light and a large one, so the large sphere
/// carries a visible cast shadow.
pub fn shadow_scene() -> Scene {
    let spheres = vec![
        Sphere {
            center: Vec3(0.0, 0.0, 6.0),
            radius: 2.0,
            color: GREEN,
            specular: 10.0,
        },
        Sphere {
            center: Vec3(0.5, 0.5, 2.5),
            radius: 0.4,
            color: BLUE,
            specular: 500.0,
        },
    ];

    let lights = vec![
        Light::Ambient { intensity: 0.1 },
        Light::Point {
            position: Vec3(2.0, 2.0, 0.0),
            intensity: 0.9,
        },
    ];

    Scene {
        camera: Camera::unit_viewport(640, 640),
        spheres,
        lights,
        background: WHITE,
    }
}
