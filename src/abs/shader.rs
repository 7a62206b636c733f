//! OpenGL Shaders
//!
//! This module defines the [`Shader`] and [`ShaderProgram`] structs for managing OpenGL shaders.
//! This module also provides the [`Uniform`] trait for setting uniform variables in shader
//! programs.

use std::{cell::RefCell, collections::HashSet, fmt, path::Path, sync::Arc};

use glam::Mat4;
use glow::HasContext;

/// The pipeline stage a [`Shader`] is compiled for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub fn gl_enum(self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex shader"),
            ShaderStage::Fragment => f.write_str("fragment shader"),
        }
    }
}

/// Represents an individual OpenGL shader.
pub struct Shader {
    gl: Arc<glow::Context>,
    id: glow::Shader,
}

impl Shader {
    /// Compiles a new shader from the given source code.
    ///
    /// On failure the error names the stage and carries the driver's info log.
    pub fn new(gl: &Arc<glow::Context>, stage: ShaderStage, source: &str) -> Result<Self, String> {
        unsafe {
            let shader = gl
                .create_shader(stage.gl_enum())
                .map_err(|e| format!("{stage}: {e}"))?;
            gl.shader_source(shader, source);
            gl.compile_shader(shader);

            if !gl.get_shader_compile_status(shader) {
                let log = gl.get_shader_info_log(shader);
                gl.delete_shader(shader);
                return Err(format!("{stage} failed to compile:\n{log}"));
            }

            Ok(Self {
                gl: Arc::clone(gl),
                id: shader,
            })
        }
    }

    /// Reads `path` and compiles its contents.
    pub fn from_file(
        gl: &Arc<glow::Context>,
        stage: ShaderStage,
        path: impl AsRef<Path>,
    ) -> Result<Self, String> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|e| format!("{stage}: cannot read {}: {e}", path.display()))?;
        log::debug!("compiling {stage} from {}", path.display());
        Self::new(gl, stage, &source)
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_shader(self.id);
        }
    }
}

/// A value that can be uploaded to a uniform location.
pub trait Uniform {
    /// Uploads the value to `location` of the currently used program.
    fn upload(&self, gl: &glow::Context, location: &glow::UniformLocation);
}

impl Uniform for i32 {
    fn upload(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        unsafe {
            gl.uniform_1_i32(Some(location), *self);
        }
    }
}

impl Uniform for Mat4 {
    fn upload(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        unsafe {
            gl.uniform_matrix_4_f32_slice(Some(location), false, self.as_ref());
        }
    }
}

impl<T: Uniform> Uniform for &T {
    fn upload(&self, gl: &glow::Context, location: &glow::UniformLocation) {
        (*self).upload(gl, location);
    }
}

/// Pairs two stage results, or joins the messages of every stage that failed.
fn both_stages<V, F>(
    vertex: Result<V, String>,
    fragment: Result<F, String>,
) -> Result<(V, F), String> {
    match (vertex, fragment) {
        (Ok(vertex), Ok(fragment)) => Ok((vertex, fragment)),
        (vertex, fragment) => {
            let errors: Vec<String> = [vertex.err(), fragment.err()]
                .into_iter()
                .flatten()
                .collect();
            Err(errors.join("\n"))
        }
    }
}

/// Represents an OpenGL shader program composed of multiple shaders.
pub struct ShaderProgram {
    gl: Arc<glow::Context>,
    id: glow::Program,
    /// Uniform names already reported as missing, so each is warned about once.
    missing_uniforms: RefCell<HashSet<String>>,
}

impl ShaderProgram {
    /// Links a new shader program from the given shaders.
    pub fn new(gl: &Arc<glow::Context>, shaders: &[&Shader]) -> Result<Self, String> {
        unsafe {
            let program = gl.create_program()?;

            for shader in shaders {
                gl.attach_shader(program, shader.id);
            }

            gl.link_program(program);

            if !gl.get_program_link_status(program) {
                let log = gl.get_program_info_log(program);
                gl.delete_program(program);
                return Err(format!("program failed to link:\n{log}"));
            }

            for shader in shaders {
                gl.detach_shader(program, shader.id);
            }

            Ok(Self {
                gl: Arc::clone(gl),
                id: program,
                missing_uniforms: RefCell::new(HashSet::new()),
            })
        }
    }

    /// Reads, compiles and links a vertex and fragment shader pair.
    ///
    /// Both stages are always compiled, so the error lists every stage that failed. The
    /// intermediate shader objects are released before returning.
    pub fn from_files(
        gl: &Arc<glow::Context>,
        vertex_path: impl AsRef<Path>,
        fragment_path: impl AsRef<Path>,
    ) -> Result<Self, String> {
        let vertex = Shader::from_file(gl, ShaderStage::Vertex, vertex_path);
        let fragment = Shader::from_file(gl, ShaderStage::Fragment, fragment_path);
        let (vertex, fragment) = both_stages(vertex, fragment)?;
        let program = Self::new(gl, &[&vertex, &fragment])?;
        log::info!("linked shader program");
        Ok(program)
    }

    /// Binds the shader program for use.
    pub fn use_program(&self) {
        unsafe {
            self.gl.use_program(Some(self.id));
        }
    }

    /// Sets a uniform variable in the shader program.
    ///
    /// The program must be in use. A name the program does not expose is a no-op with a
    /// warning.
    pub fn set_uniform<T: Uniform>(&self, name: &str, value: T) {
        let location = unsafe { self.gl.get_uniform_location(self.id, name) };
        match location {
            Some(location) => value.upload(&self.gl, &location),
            None => {
                if self.missing_uniforms.borrow_mut().insert(name.to_owned()) {
                    log::warn!("uniform `{name}` not found in shader program");
                }
            }
        }
    }

    /// Sets an integer uniform, typically a sampler's texture unit.
    pub fn set_uniform_int(&self, name: &str, value: i32) {
        self.set_uniform(name, value);
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_program(self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_names_and_enums() {
        assert_eq!(ShaderStage::Vertex.to_string(), "vertex shader");
        assert_eq!(ShaderStage::Fragment.to_string(), "fragment shader");
        assert_eq!(ShaderStage::Vertex.gl_enum(), glow::VERTEX_SHADER);
        assert_eq!(ShaderStage::Fragment.gl_enum(), glow::FRAGMENT_SHADER);
    }

    #[test]
    fn test_both_stage_errors_are_reported() {
        let err = both_stages::<(), ()>(
            Err("vertex shader failed to compile:\n0:3: syntax error".to_string()),
            Err("fragment shader failed to compile:\n0:7: undeclared identifier".to_string()),
        )
        .unwrap_err();
        assert!(err.contains("vertex shader failed to compile"));
        assert!(err.contains("0:3: syntax error"));
        assert!(err.contains("fragment shader failed to compile"));
        assert!(err.contains("0:7: undeclared identifier"));

        let err = both_stages::<(), ()>(Ok(()), Err("fragment shader: cannot read".to_string()))
            .unwrap_err();
        assert_eq!(err, "fragment shader: cannot read");

        assert_eq!(both_stages::<_, _>(Ok(1), Ok(2)), Ok((1, 2)));
    }
}
