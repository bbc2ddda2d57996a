use glam::{Mat4, Vec3};

/// Per-instance data for one billboard
///
/// `sprite_id` selects the sprite (here: a palette colour) in the shader.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BillboardInstance {
    pub position: [f32; 3],
    pub sprite_id: i32,
}

impl BillboardInstance {
    pub const fn new(position: [f32; 3], sprite_id: i32) -> Self {
        Self { position, sprite_id }
    }

    /// Palette colour for this sprite; ids wrap around the table
    pub fn colour(&self) -> [f32; 4] {
        PALETTE[self.sprite_id.rem_euclid(PALETTE.len() as i32) as usize]
    }
}

/// Sprite colour table, indexed by `sprite_id`
///
/// Uploaded as-is by the renderer; the report uses it to label instances.
pub const PALETTE: [[f32; 4]; 16] = [
    [1.0, 0.0, 0.0, 1.0],
    [0.0, 1.0, 0.0, 1.0],
    [0.0, 0.0, 1.0, 1.0],
    [1.0, 1.0, 1.0, 1.0],
    [1.0, 1.0, 0.0, 1.0],
    [1.0, 0.0, 1.0, 1.0],
    [0.0, 1.0, 1.0, 1.0],
    [0.5, 0.5, 1.0, 1.0],
    [0.5, 0.0, 0.0, 1.0],
    [0.0, 0.5, 0.0, 1.0],
    [0.0, 0.0, 0.5, 1.0],
    [0.5, 1.0, 0.5, 1.0],
    [0.5, 0.5, 0.0, 1.0],
    [0.5, 0.0, 0.5, 1.0],
    [0.0, 0.5, 0.5, 1.0],
    [1.0, 0.5, 0.5, 1.0],
];

/// The four demo billboards on the z = 0 plane
pub fn default_billboards() -> Vec<BillboardInstance> {
    vec![
        BillboardInstance::new([-2.0, -2.0, 0.0], 0),
        BillboardInstance::new([2.0, -2.0, 0.0], 1),
        BillboardInstance::new([-2.0, 2.0, 0.0], 2),
        BillboardInstance::new([2.0, 2.0, 0.0], 3),
    ]
}

/// Where each billboard lands in eye space under `view`
pub fn view_space_positions(view: &Mat4, billboards: &[BillboardInstance]) -> Vec<Vec3> {
    billboards
        .iter()
        .map(|b| view.transform_point3(Vec3::from_array(b.position)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_layout() {
        assert_eq!(std::mem::size_of::<BillboardInstance>(), 16);
        let bytes = bytemuck::cast_slice::<BillboardInstance, u8>(&default_billboards()).len();
        assert_eq!(bytes, 4 * 16);
    }

    #[test]
    fn test_colour_looks_up_palette() {
        assert_eq!(BillboardInstance::new([0.0; 3], 2).colour(), PALETTE[2]);
        assert_eq!(BillboardInstance::new([0.0; 3], 17).colour(), PALETTE[1]);
        assert_eq!(BillboardInstance::new([0.0; 3], -1).colour(), PALETTE[15]);
    }

    #[test]
    fn test_default_ids_index_palette() {
        for (i, b) in default_billboards().iter().enumerate() {
            assert_eq!(b.sprite_id, i as i32);
            assert!((b.sprite_id as usize) < PALETTE.len());
        }
    }

    #[test]
    fn test_view_space_from_initial_camera() {
        let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
        let positions = view_space_positions(&view, &default_billboards());
        assert!(positions[0].abs_diff_eq(Vec3::new(-2.0, -2.0, -5.0), 1e-5));
        assert!(positions[3].abs_diff_eq(Vec3::new(2.0, 2.0, -5.0), 1e-5));
    }
}
