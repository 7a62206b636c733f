//! Two small OpenGL demos: a textured quad and a textured cube seen through a fly camera.
//!
//! [`abs`] owns the GPU objects, [`scenes`] holds the frame loop and the two scenes, and the
//! windowing-free geometry and camera logic lives in `texdemo_core`.

pub mod abs;
pub mod config;
pub mod input;
pub mod logging;
pub mod render;
pub mod scenes;
