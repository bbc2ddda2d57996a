use glam::{Mat4, Vec3};

use crate::math::{gram_schmidt, rotate_direction, rotation_about};
use crate::traits::ViewSource;

/// Free-fly camera described by an eye point, a look-at point and an up vector.
///
/// Every mutator finishes by rebuilding the view matrix from the current
/// `eye`/`center`/`up`, so [`Camera::view_mat`] is never stale.
///
/// `eye` must never coincide with `center`, and the initial `up` must not be
/// parallel to `center - eye`. Neither is checked.
#[derive(Debug, Clone)]
pub struct Camera {
    eye: Vec3,
    center: Vec3,
    up: Vec3,
    view: Mat4,
}

impl Camera {
    /// Stores the vectors as given (`up` is not normalized) and builds the view.
    pub fn new(eye: Vec3, center: Vec3, up: Vec3) -> Self {
        Self {
            eye,
            center,
            up,
            view: Mat4::look_at_rh(eye, center, up),
        }
    }

    /// Move eye and center together along the view direction.
    /// Negative `dist` backs away. The eye-to-center distance does not change.
    pub fn zoom(&mut self, dist: f32) {
        let dir = self.view_dir();
        self.translate(dist * dir);
    }

    /// Strafe sideways along `view_dir x up`.
    ///
    /// The axis is not renormalized, so the step scales with `|view_dir x up|`,
    /// which drops below 1 once `up` drifts off perpendicular.
    pub fn strafe_horiz(&mut self, dist: f32) {
        let horiz = self.view_dir().cross(self.up);
        self.translate(dist * horiz);
    }

    /// Strafe along the camera's vertical, `(view_dir x up) x view_dir`. Not renormalized.
    pub fn strafe_vert(&mut self, dist: f32) {
        let dir = self.view_dir();
        let horiz = dir.cross(self.up);
        let vert = horiz.cross(dir);
        self.translate(dist * vert);
    }

    /// Tilt the look direction about the horizontal axis. `up` tilts with it.
    /// The eye stays put; the target swings around it.
    pub fn pitch(&mut self, deg: f32) {
        let dir = self.view_dir();
        let horiz = dir.cross(self.up);
        let rot = rotation_about(deg, horiz);
        self.center = self.eye + rotate_direction(&rot, dir).normalize();
        self.up = rotate_direction(&rot, self.up).normalize();
        self.update_view();
    }

    /// Swing the look direction about the camera's vertical axis. `up` is untouched.
    pub fn yaw(&mut self, deg: f32) {
        let dir = self.view_dir();
        let horiz = dir.cross(self.up);
        let vert = horiz.cross(dir);
        let rot = rotation_about(deg, vert);
        self.center = self.eye + rotate_direction(&rot, dir).normalize();
        self.update_view();
    }

    /// Rotate `up` about the view direction.
    pub fn roll(&mut self, deg: f32) {
        let rot = rotation_about(deg, self.view_dir());
        self.up = rotate_direction(&rot, self.up).normalize();
        self.update_view();
    }

    /// Re-orthogonalize `up` against the current view direction.
    ///
    /// Incremental pitch/roll rotate `view_dir` and `up` independently, so over a
    /// long session they drift out of perpendicular. This projects the drift out.
    /// None of the gesture methods call it; the navigation layer decides when.
    pub fn orthonormalize(&mut self) {
        self.up = gram_schmidt(self.up, self.view_dir());
        self.update_view();
    }

    pub fn view_mat(&self) -> &Mat4 {
        &self.view
    }

    pub fn eye_pos(&self) -> &Vec3 {
        &self.eye
    }

    pub fn center(&self) -> &Vec3 {
        &self.center
    }

    pub fn up(&self) -> &Vec3 {
        &self.up
    }

    /// Unit vector from eye to center, recomputed on every call.
    pub fn view_dir(&self) -> Vec3 {
        (self.center - self.eye).normalize()
    }

    fn translate(&mut self, offset: Vec3) {
        self.eye += offset;
        self.center += offset;
        self.update_view();
    }

    fn update_view(&mut self) {
        self.view = Mat4::look_at_rh(self.eye, self.center, self.up);
    }
}

impl ViewSource for Camera {
    fn view_matrix(&self) -> Mat4 {
        self.view
    }

    fn eye_position(&self) -> Vec3 {
        self.eye
    }

    fn view_direction(&self) -> Vec3 {
        self.view_dir()
    }
}
