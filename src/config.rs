//! Compile-time settings of the two demos.

use crate::abs::TextureFilter;

pub const WINDOW_WIDTH: u32 = 1280;
pub const WINDOW_HEIGHT: u32 = 720;

/// Background colour, (245, 245, 250) in 8-bit terms.
pub const CLEAR_COLOR: [f32; 4] = [245.0 / 255.0, 245.0 / 255.0, 250.0 / 255.0, 1.0];

/// Width over height, with empty dimensions counted as one pixel.
pub fn aspect_ratio(width: u32, height: u32) -> f32 {
    width.max(1) as f32 / height.max(1) as f32
}

/// Everything a demo needs to know before it opens its window. Paths are relative to the
/// working directory.
#[derive(Clone, Debug, PartialEq)]
pub struct DemoConfig {
    pub title: &'static str,
    pub width: u32,
    pub height: u32,
    pub vertex_shader: &'static str,
    pub fragment_shader: &'static str,
    pub texture: &'static str,
    pub texture_unit: u32,
    pub filter: TextureFilter,
    pub clear_color: [f32; 4],
}

impl DemoConfig {
    /// The 2D textured quad.
    pub fn quad() -> Self {
        Self {
            title: "texture",
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            vertex_shader: "shaders/quad/vertex.glsl",
            fragment_shader: "shaders/quad/fragment.glsl",
            texture: "data/car.png",
            texture_unit: 0,
            filter: TextureFilter::Nearest,
            clear_color: CLEAR_COLOR,
        }
    }

    /// The 3D textured cube.
    pub fn cube() -> Self {
        Self {
            title: "texture cube",
            vertex_shader: "shaders/cube/vertex.glsl",
            fragment_shader: "shaders/cube/fragment.glsl",
            texture: "data/crate.png",
            filter: TextureFilter::Linear,
            ..Self::quad()
        }
    }

    pub fn aspect_ratio(&self) -> f32 {
        aspect_ratio(self.width, self.height)
    }
}
