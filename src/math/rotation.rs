use glam::{Mat4, Vec3};

/// Rotation of `deg` degrees about `axis`, right-handed.
///
/// The axis does not need to be unit length; it is normalized here the same way
/// a GL-style `rotate(angle, axis)` would.
pub fn rotation_about(deg: f32, axis: Vec3) -> Mat4 {
    Mat4::from_axis_angle(axis.normalize(), deg.to_radians())
}

/// Apply `rot` to a direction (w = 0, translation ignored).
pub fn rotate_direction(rot: &Mat4, dir: Vec3) -> Vec3 {
    rot.transform_vector3(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_quarter_turn_about_z() {
        let rot = rotation_about(90.0, Vec3::Z);
        let v = rotate_direction(&rot, Vec3::X);
        assert!(v.abs_diff_eq(Vec3::Y, 1e-6));
    }

    #[test]
    fn test_rotation_normalizes_axis() {
        let a = rotate_direction(&rotation_about(30.0, Vec3::new(0.0, 4.0, 0.0)), Vec3::Z);
        let b = rotate_direction(&rotation_about(30.0, Vec3::Y), Vec3::Z);
        assert!(a.abs_diff_eq(b, 1e-6));
    }

    #[test]
    fn test_rotate_direction_ignores_translation() {
        let rot = Mat4::from_translation(Vec3::new(10.0, 0.0, 0.0)) * rotation_about(0.0, Vec3::Y);
        let v = rotate_direction(&rot, Vec3::Z);
        assert!(v.abs_diff_eq(Vec3::Z, 1e-6));
    }

    #[test]
    fn test_rotation_preserves_length() {
        let rot = rotation_about(37.5, Vec3::new(1.0, 2.0, -3.0));
        let v = rotate_direction(&rot, Vec3::new(0.3, -2.0, 1.1));
        assert!((v.length() - Vec3::new(0.3, -2.0, 1.1).length()).abs() < 1e-5);
    }
}
