//! Windowing-free parts of the texture demos.
//!
//! Everything in here can be exercised without an OpenGL context: the vertex and index tables
//! uploaded by the demos, the byte layouts that bind them to shader inputs, and the fly camera
//! driven by the 3D demo.

pub mod camera;
pub mod geometry;

pub use camera::{Camera, CameraInput};
pub use geometry::{CubeVertex, GeometryError, QuadVertex, Vertex, VertexAttribute, VertexLayout};
