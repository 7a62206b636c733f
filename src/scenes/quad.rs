//! The 2D demo: one textured quad in clip space.

use std::sync::Arc;

use texdemo_core::geometry::{QUAD_INDICES, QUAD_VERTICES};

use crate::{config::DemoConfig, render::TexturedMesh};

pub struct QuadScene {
    mesh: TexturedMesh,
}

impl QuadScene {
    pub fn new(gl: &Arc<glow::Context>, config: &DemoConfig) -> Self {
        Self {
            mesh: TexturedMesh::new(gl, config, &QUAD_VERTICES[..], &QUAD_INDICES),
        }
    }
}

impl super::Scene for QuadScene {
    fn render(&mut self) {
        self.mesh.draw(|_| {});
    }
}
