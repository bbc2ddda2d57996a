use glam::{Mat4, Vec3};

/// Read side of a camera, as seen by whatever uploads it to the GPU
pub trait ViewSource {
    /// World-to-eye transform
    fn view_matrix(&self) -> Mat4;

    /// Eye position in world space
    fn eye_position(&self) -> Vec3;

    /// Unit look direction
    fn view_direction(&self) -> Vec3;
}
