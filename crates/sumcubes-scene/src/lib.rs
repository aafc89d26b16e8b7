//! Rendering-side model for sumcubes layouts: cube mesh, per-unit instances,
//! orbit camera and the rebuild-on-change scene.

pub mod camera;
pub mod geometry;
pub mod instances;
pub mod scene;

pub use camera::OrbitCamera;
pub use geometry::{generate_cube, CubeMesh, CubeVertex};
pub use instances::{build_instances, CubeInstance, GroupPalette};
pub use scene::SumScene;
