//! Structs and functions for handling textures.
//!
//! The module provides the [`Texture`] struct which owns a GPU texture loaded from an image file.

use std::{path::Path, sync::Arc};

use glow::HasContext;
use image::GenericImageView;

/// How a texture is sampled when minified and magnified. Both policies use mipmaps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextureFilter {
    Linear,
    Nearest,
}

impl TextureFilter {
    /// The `(min, mag)` filter pair for this policy.
    pub fn gl_filters(self) -> (u32, u32) {
        match self {
            TextureFilter::Linear => (glow::LINEAR_MIPMAP_LINEAR, glow::LINEAR),
            TextureFilter::Nearest => (glow::NEAREST_MIPMAP_NEAREST, glow::NEAREST),
        }
    }
}

/// Represents a texture stored on the GPU side.
pub struct Texture {
    gl: Arc<glow::Context>,
    id: glow::Texture,
    unit: u32,
}

impl Texture {
    /// Loads the image at `path` and uploads it to texture unit `unit`.
    ///
    /// Rows are flipped so the first row in memory is the bottom of the image, which is where
    /// OpenGL puts texture coordinate `v = 0`. The texture is left bound on `unit`.
    pub fn from_file(
        gl: &Arc<glow::Context>,
        path: impl AsRef<Path>,
        unit: u32,
        filter: TextureFilter,
    ) -> Result<Self, String> {
        let path = path.as_ref();
        let image = image::open(path)
            .map_err(|e| format!("cannot load texture {}: {e}", path.display()))?
            .flipv();
        let (width, height) = image.dimensions();
        let data = image.to_rgba8().into_raw();
        drop(image);

        let (min_filter, mag_filter) = filter.gl_filters();
        unsafe {
            let texture = gl.create_texture()?;
            gl.active_texture(glow::TEXTURE0 + unit);
            gl.bind_texture(glow::TEXTURE_2D, Some(texture));
            gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                glow::RGBA as i32,
                width as i32,
                height as i32,
                0,
                glow::RGBA,
                glow::UNSIGNED_BYTE,
                glow::PixelUnpackData::Slice(Some(data.as_slice())),
            );
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_S, glow::REPEAT as i32);
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_T, glow::REPEAT as i32);
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MIN_FILTER, min_filter as i32);
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MAG_FILTER, mag_filter as i32);
            gl.generate_mipmap(glow::TEXTURE_2D);

            log::info!(
                "loaded texture {} ({width}x{height}, {filter:?}) on unit {unit}",
                path.display()
            );

            Ok(Self {
                gl: Arc::clone(gl),
                id: texture,
                unit,
            })
        }
    }

    /// Binds the texture to its texture unit.
    pub fn bind(&self) {
        unsafe {
            self.gl.active_texture(glow::TEXTURE0 + self.unit);
            self.gl.bind_texture(glow::TEXTURE_2D, Some(self.id));
        }
    }
}

impl Drop for Texture {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_texture(self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_pairs_use_mipmaps() {
        assert_eq!(
            TextureFilter::Linear.gl_filters(),
            (glow::LINEAR_MIPMAP_LINEAR, glow::LINEAR)
        );
        assert_eq!(
            TextureFilter::Nearest.gl_filters(),
            (glow::NEAREST_MIPMAP_NEAREST, glow::NEAREST)
        );
    }
}
