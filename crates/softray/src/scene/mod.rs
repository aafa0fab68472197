mod camera;
mod scene;
pub mod test_scenes;

pub use camera::Camera;
pub use scene::{Scene, Sphere};
