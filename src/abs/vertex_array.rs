//! Vertex array objects.
//!
//! A [`VertexArray`] records how the bound array buffer is split into shader inputs, plus the
//! element array buffer bound while it was active.

use std::sync::Arc;

use glow::HasContext;
use texdemo_core::VertexLayout;

pub struct VertexArray {
    gl: Arc<glow::Context>,
    id: glow::VertexArray,
}

impl VertexArray {
    pub fn new(gl: &Arc<glow::Context>) -> Result<Self, String> {
        let id = unsafe { gl.create_vertex_array() }
            .map_err(|e| format!("vertex array generation failed: {e}"))?;
        Ok(Self {
            gl: Arc::clone(gl),
            id,
        })
    }

    /// Declares a float attribute at `index` reading `components` floats every `stride` bytes,
    /// starting `offset` bytes into the bound array buffer, and enables it.
    pub fn set_attribute(&self, index: u32, components: i32, stride: i32, offset: i32) {
        unsafe {
            self.gl
                .vertex_attrib_pointer_f32(index, components, glow::FLOAT, false, stride, offset);
            self.gl.enable_vertex_attrib_array(index);
        }
    }

    /// Declares every attribute of `layout`. The vertex array must be bound.
    pub fn set_layout(&self, layout: &VertexLayout) {
        for attribute in layout.attributes {
            self.set_attribute(
                attribute.location,
                attribute.components,
                layout.stride,
                attribute.offset,
            );
        }
    }

    pub fn bind(&self) {
        unsafe {
            self.gl.bind_vertex_array(Some(self.id));
        }
    }

    pub fn unbind(&self) {
        unsafe {
            self.gl.bind_vertex_array(None);
        }
    }
}

impl Drop for VertexArray {
    fn drop(&mut self) {
        self.unbind();
        unsafe {
            self.gl.delete_vertex_array(self.id);
        }
    }
}
