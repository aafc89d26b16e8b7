//! Orbit camera with drag rotation, framed around a layout

use glam::{Mat4, Vec3};
use sumcubes_core::Bounds;

#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: Mat4 = Mat4::from_cols_array(&[
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
]);

const PITCH_LIMIT: f32 = 89.0 * std::f32::consts::PI / 180.0;

/// Extra room around the bounding sphere when framing
const FRAME_MARGIN: f32 = 1.1;

pub struct OrbitCamera {
    pub target: Vec3,
    pub distance: f32,
    pub aspect: f32,
    pub fov_y: f32,
    pub znear: f32,
    pub zfar: f32,
    /// Radians per pixel of drag
    pub sensitivity: f32,
    pub min_distance: f32,
    pub max_distance: f32,

    yaw: f32,   // Radians, 0 looks down -Z
    pitch: f32, // Radians
    dragging: bool,
}

impl OrbitCamera {
    pub fn new(aspect: f32) -> Self {
        Self {
            target: Vec3::ZERO,
            distance: 15.0,
            aspect,
            fov_y: 60.0_f32.to_radians(),
            znear: 0.1,
            zfar: 1000.0,
            sensitivity: 0.005,
            min_distance: 1.0,
            max_distance: 5000.0,
            yaw: 0.0,
            pitch: 0.0,
            dragging: false,
        }
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Mouse button or touch down
    pub fn press(&mut self) {
        self.dragging = true;
    }

    /// Mouse button or touch up
    pub fn release(&mut self) {
        self.dragging = false;
    }

    /// Rotate by a pointer delta. Ignored unless a drag is in progress.
    pub fn drag(&mut self, dx: f32, dy: f32) -> bool {
        if !self.dragging {
            return false;
        }
        self.yaw -= dx * self.sensitivity;
        self.pitch = (self.pitch + dy * self.sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        true
    }

    /// Scale the orbit distance, e.g. 0.9 to move closer
    pub fn zoom(&mut self, factor: f32) {
        if factor.is_finite() && factor > 0.0 {
            self.distance = (self.distance * factor).clamp(self.min_distance, self.max_distance);
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Center on `bounds` and back off until its bounding sphere fits the
    /// vertical field of view
    pub fn frame(&mut self, bounds: &Bounds) {
        self.target = bounds.center.as_vec3();
        let radius = bounds.radius() as f32;
        let fit = radius * FRAME_MARGIN / (self.fov_y / 2.0).sin();
        self.distance = fit.clamp(self.min_distance, self.max_distance);
        self.zfar = self.zfar.max((self.distance + radius) * 2.0);
    }

    pub fn eye(&self) -> Vec3 {
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        self.target + Vec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw) * self.distance
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    pub fn build_view_projection_matrix(&self) -> Mat4 {
        let proj = Mat4::perspective_rh_gl(self.fov_y, self.aspect, self.znear, self.zfar);
        OPENGL_TO_WGPU_MATRIX * proj * self.view_matrix()
    }
}
