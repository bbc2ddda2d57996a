use glam::Vec3;

/// Remove the `forward` component from `up` and renormalize.
///
/// `forward` must be unit length. If `up` is parallel to `forward` there is no
/// perpendicular part left to keep and `up` is returned unchanged.
pub fn gram_schmidt(up: Vec3, forward: Vec3) -> Vec3 {
    let perpendicular = up - forward * up.dot(forward);
    perpendicular.try_normalize().unwrap_or(up)
}
