//! Module providing the `Scene` trait, the frame loop that drives a scene, and both demo scenes.

use std::{sync::Arc, time::Instant};

use glow::HasContext;
use sdl2::event::{Event, WindowEvent};

use crate::{
    abs::App,
    config::DemoConfig,
    input::{KeyboardState, UpdateContext},
};

pub mod cube;
pub mod quad;

/// The Scene trait defines the common interface of the demos.
pub trait Scene {
    /// Handles an event.
    fn handle_event(&mut self, _event: &Event) {}

    /// Updates the scene state.
    fn update(&mut self, _ctx: &UpdateContext) {}

    /// Renders the scene. The framebuffer is already cleared.
    fn render(&mut self);
}

/// Opens the window described by `config`, builds the scene with `setup` and runs the frame
/// loop until the window is closed.
///
/// Returns an error only when the window cannot be created. Scene setup failures are logged by
/// the scene and do not end the loop.
pub fn run<S, F>(config: &DemoConfig, setup: F) -> Result<(), String>
where
    S: Scene,
    F: FnOnce(&Arc<glow::Context>, &DemoConfig) -> S,
{
    let mut app = App::new(config.title, config.width, config.height)?;

    unsafe {
        app.gl.enable(glow::DEPTH_TEST);
        app.gl.disable(glow::CULL_FACE);
        app.gl.viewport(0, 0, config.width as i32, config.height as i32);
    }

    let mut scene = setup(&app.gl, config);
    let mut keyboard = KeyboardState::default();
    let [r, g, b, a] = config.clear_color;

    let mut last_frame_time = Instant::now();

    'running: loop {
        let now = Instant::now();
        let delta_time = now.duration_since(last_frame_time).as_secs_f32();
        last_frame_time = now;

        for event in app.event_pump.poll_iter() {
            keyboard.handle_event(&event);
            scene.handle_event(&event);
            match event {
                Event::Quit { .. } => break 'running,
                Event::Window {
                    win_event: WindowEvent::Resized(width, height),
                    ..
                } => unsafe {
                    app.gl.viewport(0, 0, width, height);
                },
                _ => {}
            }
        }

        scene.update(&UpdateContext::new(&keyboard, delta_time));

        unsafe {
            app.gl.clear_color(r, g, b, a);
            app.gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }
        scene.render();

        app.window.gl_swap_window();
    }

    log::info!("window closed");
    Ok(())
}
