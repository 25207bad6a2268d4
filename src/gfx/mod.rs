//! Geometry, camera, lighting, and the wgpu renderer.

pub mod camera;
pub mod cube;
pub mod lighting;
pub mod mesh;
pub mod render;
pub mod vertex;

pub use camera::Camera;
pub use mesh::Mesh;
pub use render::RenderContext;
