//! The single textured, indexed mesh both demos draw.

use std::sync::Arc;

use glow::HasContext;
use texdemo_core::{Vertex, geometry::validate_indices};

use crate::{
    abs::{Buffer, BufferTarget, ShaderProgram, Texture, VertexArray},
    config::DemoConfig,
};

/// Name of the sampler uniform in every demo shader.
pub const TEXTURE_UNIFORM: &str = "uTexture";

/// Logs a failed setup step and turns it into an absent resource.
fn setup_step<T>(what: &str, result: Result<T, String>) -> Option<T> {
    result.inspect_err(|e| log::error!("{what}: {e}")).ok()
}

/// A draw needs both a program and uploaded geometry.
fn drawable<'a, S, G>(shader: &'a Option<S>, geometry: &'a Option<G>) -> Option<(&'a S, &'a G)> {
    shader.as_ref().zip(geometry.as_ref())
}

/// Vertex array with the two buffers it reads from.
struct Geometry {
    vertex_array: VertexArray,
    _vertex_buffer: Buffer,
    _index_buffer: Buffer,
    index_count: i32,
}

impl Geometry {
    fn upload<V: Vertex>(
        gl: &Arc<glow::Context>,
        vertices: &[V],
        indices: &[u32],
    ) -> Result<Self, String> {
        validate_indices(indices, vertices.len()).map_err(|e| e.to_string())?;

        let vertex_array = VertexArray::new(gl)?;
        vertex_array.bind();
        let vertex_buffer = Buffer::new(gl, BufferTarget::Array, vertices)?;
        let index_buffer = Buffer::new(gl, BufferTarget::ElementArray, indices)?;
        vertex_array.set_layout(&V::LAYOUT);
        vertex_array.unbind();
        log::debug!(
            "mesh ready: {} vertices ({} bytes), {} indices",
            vertices.len(),
            vertex_buffer.size(),
            indices.len()
        );

        Ok(Self {
            vertex_array,
            _vertex_buffer: vertex_buffer,
            _index_buffer: index_buffer,
            index_count: indices.len() as i32,
        })
    }
}

/// A vertex/index buffer pair with its vertex array, shader program and texture.
///
/// Every setup failure is logged and leaves the respective slot empty. The frame loop keeps
/// running, but nothing is drawn without both a shader program and geometry.
pub struct TexturedMesh {
    gl: Arc<glow::Context>,
    shader: Option<ShaderProgram>,
    texture: Option<Texture>,
    texture_unit: u32,
    geometry: Option<Geometry>,
}

impl TexturedMesh {
    pub fn new<V: Vertex>(
        gl: &Arc<glow::Context>,
        config: &DemoConfig,
        vertices: &[V],
        indices: &[u32],
    ) -> Self {
        let shader = setup_step(
            "shader program",
            ShaderProgram::from_files(gl, config.vertex_shader, config.fragment_shader),
        );
        let texture = setup_step(
            "texture",
            Texture::from_file(gl, config.texture, config.texture_unit, config.filter),
        );
        let geometry = setup_step("geometry", Geometry::upload(gl, vertices, indices));

        Self {
            gl: Arc::clone(gl),
            shader,
            texture,
            texture_unit: config.texture_unit,
            geometry,
        }
    }

    /// Issues one indexed draw. `set_uniforms` runs with the program in use, after the sampler
    /// uniform is set.
    pub fn draw(&self, set_uniforms: impl FnOnce(&ShaderProgram)) {
        let Some((shader, geometry)) = drawable(&self.shader, &self.geometry) else {
            return;
        };

        geometry.vertex_array.bind();
        shader.use_program();
        if let Some(texture) = &self.texture {
            texture.bind();
        }
        shader.set_uniform_int(TEXTURE_UNIFORM, self.texture_unit as i32);
        set_uniforms(shader);
        unsafe {
            self.gl.draw_elements(
                glow::TRIANGLES,
                geometry.index_count,
                glow::UNSIGNED_INT,
                0,
            );
        }
        geometry.vertex_array.unbind();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_setup_step_leaves_resource_absent() {
        let failed: Option<u32> = setup_step("vertex array", Err("generation failed".to_string()));
        assert_eq!(failed, None);
        assert_eq!(setup_step("vertex array", Ok::<_, String>(7)), Some(7));
    }

    #[test]
    fn test_draw_needs_shader_and_geometry() {
        let shader = Some("program");
        let geometry = Some(36);
        assert_eq!(drawable(&shader, &geometry), Some((&"program", &36)));
        assert_eq!(drawable(&shader, &None::<i32>), None);
        assert_eq!(drawable(&None::<&str>, &geometry), None);
    }
}
