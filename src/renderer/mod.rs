//! wgpu rendering module
//!
//! The scene is rebuilt every frame as flat-colored triangles in logical
//! pixels; the pipeline maps them onto the surface.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod text;
pub mod vertex;

pub use pipeline::RenderState;
pub use vertex::Vertex;
