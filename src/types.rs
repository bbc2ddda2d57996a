use glam::{Mat4, Vec4};

use crate::traits::ViewSource;

/// `Viewing` uniform block: view matrix, projection matrix, eye position
///
/// Matches the std140 layout the billboard shaders declare (two mat4 then a vec4,
/// 144 bytes). The eye's w component is always 0.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ViewingUniform {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub eye: [f32; 4],
}

impl ViewingUniform {
    pub fn new(source: &impl ViewSource, projection: Mat4) -> Self {
        let mut uniform = Self {
            view: Mat4::IDENTITY.to_cols_array_2d(),
            projection: projection.to_cols_array_2d(),
            eye: [0.0; 4],
        };
        uniform.refresh_view(source);
        uniform
    }

    /// Rewrite the camera-dependent part; the projection stays as is
    pub fn refresh_view(&mut self, source: &impl ViewSource) {
        self.view = source.view_matrix().to_cols_array_2d();
        self.eye = source.eye_position().extend(0.0).to_array();
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.view)
    }

    pub fn eye_position(&self) -> Vec4 {
        Vec4::from_array(self.eye)
    }

    /// Raw block for the renderer's uniform buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}
