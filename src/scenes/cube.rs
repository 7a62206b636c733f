//! The 3D demo: a textured cube at the origin and a keyboard driven fly camera.

use std::sync::Arc;

use glam::Mat4;
use sdl2::event::{Event, WindowEvent};
use texdemo_core::{
    Camera,
    geometry::{CUBE_INDICES, CUBE_VERTICES},
};

use crate::{
    config::{DemoConfig, aspect_ratio},
    input::UpdateContext,
    render::TexturedMesh,
};

const FOV_Y_DEGREES: f32 = 45.0;
const Z_NEAR: f32 = 0.1;
const Z_FAR: f32 = 100.0;

pub fn projection(aspect: f32) -> Mat4 {
    Mat4::perspective_rh_gl(FOV_Y_DEGREES.to_radians(), aspect, Z_NEAR, Z_FAR)
}

/// Aspect ratio of a window size reported by SDL. Negative sizes count as empty.
fn resized_aspect(width: i32, height: i32) -> f32 {
    aspect_ratio(
        u32::try_from(width).unwrap_or(0),
        u32::try_from(height).unwrap_or(0),
    )
}

pub struct CubeScene {
    mesh: TexturedMesh,
    camera: Camera,
    model: Mat4,
    projection: Mat4,
}

impl CubeScene {
    pub fn new(gl: &Arc<glow::Context>, config: &DemoConfig) -> Self {
        Self {
            mesh: TexturedMesh::new(gl, config, &CUBE_VERTICES[..], &CUBE_INDICES),
            camera: Camera::default(),
            model: Mat4::IDENTITY,
            projection: projection(config.aspect_ratio()),
        }
    }
}

impl super::Scene for CubeScene {
    fn handle_event(&mut self, event: &Event) {
        if let Event::Window {
            win_event: WindowEvent::Resized(width, height),
            ..
        } = event
        {
            self.projection = projection(resized_aspect(*width, *height));
        }
    }

    fn update(&mut self, ctx: &UpdateContext) {
        self.camera
            .update(&ctx.keyboard.camera_input(), ctx.delta_time);
    }

    fn render(&mut self) {
        let view = self.camera.view();
        self.mesh.draw(|shader| {
            shader.set_uniform("uModel", self.model);
            shader.set_uniform("uView", view);
            shader.set_uniform("uProjection", self.projection);
        });
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec4;

    use super::*;

    #[test]
    fn test_resize_with_negative_or_zero_size() {
        assert_eq!(resized_aspect(-1280, 720), 1.0 / 720.0);
        assert_eq!(resized_aspect(1280, -5), 1280.0);
        assert_eq!(resized_aspect(0, 0), 1.0);
        assert!((resized_aspect(1280, 720) - 16.0 / 9.0).abs() < 1e-6);
        let m = projection(resized_aspect(1280, 0));
        assert!(m.to_cols_array().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_cube_in_front_of_initial_camera_is_visible() {
        let camera = Camera::default();
        let aspect = DemoConfig::cube().aspect_ratio();
        let clip = projection(aspect) * camera.view() * Vec4::new(0.0, 0.0, 0.0, 1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(clip.w > 0.0);
        assert!(ndc.x.abs() < 1.0 && ndc.y.abs() < 1.0 && ndc.z.abs() < 1.0);
    }
}
