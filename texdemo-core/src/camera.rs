//! Keyboard driven fly camera used by the cube demo.
//!
//! The camera keeps yaw and pitch in degrees and derives its forward vector and view matrix from
//! them after every update.

use glam::{Mat4, Vec3};

/// Translation speed in world units per second.
pub const MOVE_SPEED: f32 = 2.5;
/// Rotation speed in degrees per second.
pub const ROTATION_SPEED: f32 = 60.0;
/// Pitch is kept within `[-PITCH_LIMIT, PITCH_LIMIT]` degrees.
pub const PITCH_LIMIT: f32 = 89.0;

pub const INITIAL_YAW: f32 = -90.0;
pub const INITIAL_PITCH: f32 = 0.0;
pub const INITIAL_POSITION: Vec3 = Vec3::new(0.0, 0.0, 3.0);
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Which camera controls are held down this frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CameraInput {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub yaw_left: bool,
    pub yaw_right: bool,
    pub pitch_up: bool,
    pub pitch_down: bool,
}

/// Clamps a pitch angle (degrees) to the range that keeps the look-at basis well defined.
pub fn clamp_pitch(pitch: f32) -> f32 {
    pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT)
}

/// Converts yaw and pitch in degrees to a unit direction vector.
pub fn forward_from_angles(yaw: f32, pitch: f32) -> Vec3 {
    let (yaw, pitch) = (yaw.to_radians(), pitch.to_radians());
    Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos()).normalize()
}

#[derive(Clone, Debug)]
pub struct Camera {
    pub position: Vec3,
    pub up: Vec3,
    pub forward: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    view: Mat4,
}

impl Camera {
    /// Creates a camera at `position` looking down the negative Z axis.
    pub fn new(position: Vec3) -> Self {
        let mut camera = Self {
            position,
            up: WORLD_UP,
            forward: forward_from_angles(INITIAL_YAW, INITIAL_PITCH),
            yaw: INITIAL_YAW,
            pitch: INITIAL_PITCH,
            view: Mat4::IDENTITY,
        };
        camera.update_view();
        camera
    }

    /// Advances the camera by `delta_time` seconds of held input.
    pub fn update(&mut self, input: &CameraInput, delta_time: f32) {
        let step = MOVE_SPEED * delta_time;
        let right = self.forward.cross(self.up).normalize();

        if input.forward {
            self.position += self.forward * step;
        }
        if input.backward {
            self.position -= self.forward * step;
        }
        if input.right {
            self.position += right * step;
        }
        if input.left {
            self.position -= right * step;
        }

        let turn = ROTATION_SPEED * delta_time;
        if input.yaw_right {
            self.yaw += turn;
        }
        if input.yaw_left {
            self.yaw -= turn;
        }
        if input.pitch_up {
            self.pitch += turn;
        }
        if input.pitch_down {
            self.pitch -= turn;
        }
        self.pitch = clamp_pitch(self.pitch);

        self.forward = forward_from_angles(self.yaw, self.pitch);
        self.update_view();
    }

    fn update_view(&mut self) {
        self.view = Mat4::look_at_rh(self.position, self.position + self.forward, self.up);
    }

    /// The view matrix for the current position and orientation.
    pub fn view(&self) -> Mat4 {
        self.view
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(INITIAL_POSITION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_pitch_clamped_at_limits() {
        let mut camera = Camera::default();
        let up = CameraInput {
            pitch_up: true,
            ..Default::default()
        };
        camera.update(&up, 10.0);
        assert_eq!(camera.pitch, 89.0);

        let down = CameraInput {
            pitch_down: true,
            ..Default::default()
        };
        camera.update(&down, 100.0);
        assert_eq!(camera.pitch, -89.0);

        assert_eq!(clamp_pitch(1000.0), PITCH_LIMIT);
        assert_eq!(clamp_pitch(-1000.0), -PITCH_LIMIT);
        assert_eq!(clamp_pitch(12.5), 12.5);
    }

    #[test]
    fn test_initial_forward_points_down_negative_z() {
        let forward = forward_from_angles(-90.0, 0.0);
        assert!(forward.abs_diff_eq(Vec3::new(0.0, 0.0, -1.0), EPSILON));

        let camera = Camera::default();
        assert!(camera.forward.abs_diff_eq(Vec3::NEG_Z, EPSILON));
        assert_eq!(camera.position, INITIAL_POSITION);
    }

    #[test]
    fn test_movement_is_linear_in_time() {
        let dt = 0.016;
        let input = CameraInput {
            forward: true,
            right: true,
            ..Default::default()
        };

        let mut twice = Camera::default();
        twice.update(&input, dt);
        twice.update(&input, dt);

        let mut once = Camera::default();
        once.update(&input, 2.0 * dt);

        assert!(twice.position.abs_diff_eq(once.position, EPSILON));
        assert!(twice.view().abs_diff_eq(once.view(), EPSILON));
    }

    #[test]
    fn test_forward_key_moves_along_forward() {
        let mut camera = Camera::default();
        let input = CameraInput {
            forward: true,
            ..Default::default()
        };
        camera.update(&input, 1.0);
        let expected = INITIAL_POSITION + Vec3::NEG_Z * MOVE_SPEED;
        assert!(camera.position.abs_diff_eq(expected, EPSILON));

        // Opposite keys cancel out.
        let both = CameraInput {
            left: true,
            right: true,
            ..Default::default()
        };
        let before = camera.position;
        camera.update(&both, 1.0);
        assert!(camera.position.abs_diff_eq(before, EPSILON));
    }

    #[test]
    fn test_yaw_rotates_forward() {
        let mut camera = Camera::default();
        let input = CameraInput {
            yaw_right: true,
            ..Default::default()
        };
        // 90 degrees to the right of -Z is +X.
        camera.update(&input, 90.0 / ROTATION_SPEED);
        assert!((camera.yaw - 0.0).abs() < EPSILON);
        assert!(camera.forward.abs_diff_eq(Vec3::X, EPSILON));
    }

    #[test]
    fn test_view_looks_along_forward() {
        let camera = Camera::default();
        // A point straight ahead lands on the negative Z axis of view space.
        let ahead = camera.position + camera.forward * 2.0;
        let in_view = camera.view().transform_point3(ahead);
        assert!(in_view.abs_diff_eq(Vec3::new(0.0, 0.0, -2.0), EPSILON));
        assert!((camera.forward.length() - 1.0).abs() < EPSILON);
    }
}
