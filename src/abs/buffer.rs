//! GPU buffer objects.

use std::sync::Arc;

use glow::HasContext;

/// What a [`Buffer`] is bound as.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BufferTarget {
    /// Vertex records.
    Array,
    /// Indices into the vertex records.
    ElementArray,
}

impl BufferTarget {
    pub fn gl_enum(self) -> u32 {
        match self {
            BufferTarget::Array => glow::ARRAY_BUFFER,
            BufferTarget::ElementArray => glow::ELEMENT_ARRAY_BUFFER,
        }
    }
}

/// A buffer uploaded once and never written again.
pub struct Buffer {
    gl: Arc<glow::Context>,
    id: glow::Buffer,
    size: usize,
}

impl Buffer {
    /// Creates a buffer, binds it to `target` and uploads `data` with a static usage hint.
    ///
    /// The buffer stays bound afterwards. An element array buffer bound while a vertex array is
    /// bound becomes part of that vertex array's state.
    pub fn new<T: Copy>(
        gl: &Arc<glow::Context>,
        target: BufferTarget,
        data: &[T],
    ) -> Result<Self, String> {
        let size = std::mem::size_of_val(data);
        unsafe {
            let buffer = gl.create_buffer()?;
            gl.bind_buffer(target.gl_enum(), Some(buffer));
            gl.buffer_data_u8_slice(
                target.gl_enum(),
                std::slice::from_raw_parts(data.as_ptr() as *const u8, size),
                glow::STATIC_DRAW,
            );
            log::debug!("uploaded {size} bytes to {target:?} buffer");

            Ok(Self {
                gl: Arc::clone(gl),
                id: buffer,
                size,
            })
        }
    }

    /// Size of the uploaded data in bytes.
    pub fn size(&self) -> usize {
        self.size
    }
}

impl Drop for Buffer {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_buffer(self.id);
        }
    }
}
