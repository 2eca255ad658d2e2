//! Free-fly camera.
//!
//! Euler yaw/pitch camera in the classic "fly through" style: keyboard moves
//! along the view basis, mouse motion turns, the wheel narrows the field of
//! view. State changes only through the `process_*` calls.

use glam::{Mat4, Vec3};

/// Direction for [`Camera::process_keyboard`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

pub const DEFAULT_YAW: f32 = -90.0;
pub const DEFAULT_PITCH: f32 = 0.0;
pub const DEFAULT_SPEED: f32 = 2.5;
pub const DEFAULT_SENSITIVITY: f32 = 0.1;
pub const DEFAULT_ZOOM: f32 = 45.0;

const PITCH_LIMIT: f32 = 89.0;
const ZOOM_MIN: f32 = 1.0;
const ZOOM_MAX: f32 = 45.0;

#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    front: Vec3,
    up: Vec3,
    right: Vec3,
    world_up: Vec3,

    /// Degrees; -90 looks down -Z.
    yaw: f32,
    /// Degrees, within ±89.
    pitch: f32,

    /// World units per second.
    pub movement_speed: f32,
    /// Degrees per unit of mouse motion.
    pub mouse_sensitivity: f32,
    /// Vertical field of view in degrees.
    zoom: f32,
}

impl Camera {
    pub fn new(position: Vec3, world_up: Vec3, yaw: f32, pitch: f32) -> Self {
        let mut cam = Self {
            position,
            front: Vec3::NEG_Z,
            up: world_up,
            right: Vec3::X,
            world_up,
            yaw,
            pitch: pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            movement_speed: DEFAULT_SPEED,
            mouse_sensitivity: DEFAULT_SENSITIVITY,
            zoom: DEFAULT_ZOOM,
        };
        cam.update_vectors();
        cam
    }

    /// Camera at `position` looking down -Z with +Y up.
    pub fn at(position: Vec3) -> Self {
        Self::new(position, Vec3::Y, DEFAULT_YAW, DEFAULT_PITCH)
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// World-to-view transform (right-handed).
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Perspective projection using the current zoom as vertical FOV.
    ///
    /// Depth maps to `[0, 1]`, which is what wgpu expects.
    pub fn projection_matrix(&self, aspect_ratio: f32) -> Mat4 {
        Mat4::perspective_rh(self.zoom.to_radians(), aspect_ratio.max(1e-3), 0.1, 100.0)
    }

    /// Moves along the view basis, scaled by `delta_time` seconds.
    pub fn process_keyboard(&mut self, direction: CameraMovement, delta_time: f32) {
        let velocity = self.movement_speed * delta_time;
        let offset = match direction {
            CameraMovement::Forward => self.front,
            CameraMovement::Backward => -self.front,
            CameraMovement::Left => -self.right,
            CameraMovement::Right => self.right,
            CameraMovement::Up => self.world_up,
            CameraMovement::Down => -self.world_up,
        };
        self.position += offset * velocity;
    }

    /// Turns the camera. `yoffset` is positive when the mouse moves up.
    pub fn process_mouse_movement(&mut self, xoffset: f32, yoffset: f32, constrain_pitch: bool) {
        self.yaw += xoffset * self.mouse_sensitivity;
        self.pitch += yoffset * self.mouse_sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        self.update_vectors();
    }

    /// Wheel up zooms in.
    pub fn process_mouse_scroll(&mut self, yoffset: f32) {
        self.zoom = (self.zoom - yoffset).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    fn update_vectors(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.front = Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos()).normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::at(Vec3::new(0.0, 0.0, 3.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPS
    }

    #[test]
    fn default_looks_down_negative_z() {
        let cam = Camera::default();
        assert!(approx(cam.front(), Vec3::NEG_Z));
        assert!(approx(cam.right(), Vec3::X));
        assert!(approx(cam.up(), Vec3::Y));
    }

    #[test]
    fn forward_moves_along_front() {
        let mut cam = Camera::default();
        cam.process_keyboard(CameraMovement::Forward, 2.0);
        assert!(approx(cam.position, Vec3::new(0.0, 0.0, 3.0 - 2.0 * DEFAULT_SPEED)));

        cam.process_keyboard(CameraMovement::Right, 1.0);
        assert!((cam.position.x - DEFAULT_SPEED).abs() < EPS);
    }

    #[test]
    fn up_and_down_follow_world_up() {
        let mut cam = Camera::default();
        cam.process_mouse_movement(0.0, 300.0, true);
        cam.process_keyboard(CameraMovement::Up, 1.0);
        assert!(approx(cam.position, Vec3::new(0.0, DEFAULT_SPEED, 3.0)));
    }

    #[test]
    fn pitch_is_constrained() {
        let mut cam = Camera::default();
        cam.process_mouse_movement(0.0, 10_000.0, true);
        assert_eq!(cam.pitch(), 89.0);
        cam.process_mouse_movement(0.0, -20_000.0, true);
        assert_eq!(cam.pitch(), -89.0);
    }

    #[test]
    fn unconstrained_pitch_passes_through() {
        let mut cam = Camera::default();
        cam.process_mouse_movement(0.0, 1000.0, false);
        assert!((cam.pitch() - 100.0).abs() < 1e-3);
    }

    #[test]
    fn yaw_turns_right() {
        let mut cam = Camera::default();
        cam.process_mouse_movement(900.0, 0.0, true);
        assert!((cam.yaw() - 0.0).abs() < 1e-3);
        assert!(approx(cam.front(), Vec3::X));
    }

    #[test]
    fn zoom_is_clamped() {
        let mut cam = Camera::default();
        cam.process_mouse_scroll(10.0);
        assert_eq!(cam.zoom(), 35.0);
        cam.process_mouse_scroll(100.0);
        assert_eq!(cam.zoom(), 1.0);
        cam.process_mouse_scroll(-100.0);
        assert_eq!(cam.zoom(), 45.0);
    }

    #[test]
    fn view_matrix_moves_position_to_origin() {
        let cam = Camera::at(Vec3::new(1.0, 2.0, 3.0));
        let p = cam.view_matrix().transform_point3(cam.position);
        assert!(approx(p, Vec3::ZERO));
    }
}
