//! Thin owners of OpenGL objects.
//!
//! Each wrapper holds one GPU handle together with a shared [`glow::Context`] and releases the
//! handle when dropped, so the lifetime of a GPU object is the lifetime of its Rust value.

pub mod app;
pub mod buffer;
pub mod shader;
pub mod texture;
pub mod vertex_array;

pub use app::*;
pub use buffer::*;
pub use shader::*;
pub use texture::*;
pub use vertex_array::*;
