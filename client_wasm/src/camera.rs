//! Orthographic camera mapping field units onto clip space

use glam::{Mat4, Vec3};

pub struct Camera {
    pub view: Mat4,
    pub projection: Mat4,
}

impl Camera {
    /// Camera covering a `width` x `height` field, origin bottom-left, y up
    pub fn for_field(width: f32, height: f32) -> Self {
        let eye = Vec3::new(0.0, 0.0, 1.0);
        let view = Mat4::look_at_rh(eye, Vec3::ZERO, Vec3::Y);
        let projection = Mat4::orthographic_rh(0.0, width, 0.0, height, 0.1, 10.0);
        Self { view, projection }
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection * self.view
    }
}

/// Camera uniform data (matches WGSL struct, 256-byte aligned)
#[repr(C, align(256))]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_proj: [[f32; 4]; 4], // 64 bytes
    _padding: [f32; 48],      // pad to 256 bytes
}

impl CameraUniform {
    pub fn from_camera(camera: &Camera) -> Self {
        Self {
            view_proj: camera.view_proj().to_cols_array_2d(),
            _padding: [0.0; 48],
        }
    }
}
