//! Turns a session draw list into GPU instance data

use game_core::{Scene, Shape};

/// Instance data for rendering (matches shader InstanceInput).
/// Must use `repr(C)` and `bytemuck` to safely cast to raw bytes for the GPU buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub transform: [f32; 4], // x, y, scale_x, scale_y
    pub tint: [f32; 4],      // rgba
}

/// Instances grouped by the mesh they are drawn with
#[derive(Debug, Default, PartialEq)]
pub struct SceneInstances {
    pub rects: Vec<InstanceData>,
    pub discs: Vec<InstanceData>,
}

impl SceneInstances {
    pub fn from_scene(scene: &Scene) -> Self {
        let mut out = Self::default();
        for shape in &scene.shapes {
            match *shape {
                Shape::Rect {
                    center,
                    size,
                    color,
                } => out.rects.push(InstanceData {
                    transform: [center.x, center.y, size.x, size.y],
                    tint: color.to_array(),
                }),
                Shape::Circle {
                    center,
                    radius,
                    color,
                } => out.discs.push(InstanceData {
                    transform: [center.x, center.y, radius * 2.0, radius * 2.0],
                    tint: color.to_array(),
                }),
            }
        }
        out
    }
}
