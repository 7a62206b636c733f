use std::collections::HashSet;

use sdl2::{event::Event, keyboard::Keycode};
use texdemo_core::CameraInput;

/// The current state of the keyboard.
#[derive(Default)]
pub struct KeyboardState {
    pub down: HashSet<Keycode>,
}

impl KeyboardState {
    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::KeyDown {
                keycode: Some(keycode),
                repeat: false,
                ..
            } => self.key_down(*keycode),
            Event::KeyUp {
                keycode: Some(keycode),
                repeat: false,
                ..
            } => self.key_up(*keycode),
            _ => {}
        }
    }

    pub fn key_down(&mut self, keycode: Keycode) {
        self.down.insert(keycode);
    }

    pub fn key_up(&mut self, keycode: Keycode) {
        self.down.remove(&keycode);
    }

    pub fn is_down(&self, keycode: Keycode) -> bool {
        self.down.contains(&keycode)
    }

    /// Maps held keys to camera controls: WASD moves, the arrow keys turn.
    pub fn camera_input(&self) -> CameraInput {
        CameraInput {
            forward: self.is_down(Keycode::W),
            backward: self.is_down(Keycode::S),
            left: self.is_down(Keycode::A),
            right: self.is_down(Keycode::D),
            yaw_left: self.is_down(Keycode::Left),
            yaw_right: self.is_down(Keycode::Right),
            pitch_up: self.is_down(Keycode::Up),
            pitch_down: self.is_down(Keycode::Down),
        }
    }
}

/// Context provided to scenes during the update phase.
pub struct UpdateContext<'a> {
    pub keyboard: &'a KeyboardState,
    pub delta_time: f32,
}

impl<'a> UpdateContext<'a> {
    pub fn new(keyboard: &'a KeyboardState, delta_time: f32) -> Self {
        Self {
            keyboard,
            delta_time,
        }
    }
}
