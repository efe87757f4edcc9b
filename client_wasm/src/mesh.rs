//! Mesh generation for paddles and balls
//!
//! Both meshes fit a unit box centered on the origin, so an instance's
//! scale is simply the drawn width and height.

/// Vertex data for meshes
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
}

/// Unit square (two triangles)
pub fn unit_quad() -> (Vec<Vertex>, Vec<u16>) {
    let vertices = vec![
        Vertex { position: [-0.5, -0.5] },
        Vertex { position: [0.5, -0.5] },
        Vertex { position: [0.5, 0.5] },
        Vertex { position: [-0.5, 0.5] },
    ];
    let indices = vec![0, 1, 2, 0, 2, 3];
    (vertices, indices)
}

/// Unit-diameter disc as a triangle fan around the center vertex
pub fn unit_disc(segments: u16) -> (Vec<Vertex>, Vec<u16>) {
    let mut vertices = vec![Vertex { position: [0.0, 0.0] }];
    for i in 0..segments {
        let angle = std::f32::consts::TAU * i as f32 / segments as f32;
        vertices.push(Vertex {
            position: [0.5 * angle.cos(), 0.5 * angle.sin()],
        });
    }

    let mut indices = Vec::with_capacity(segments as usize * 3);
    for i in 0..segments {
        let current = i + 1;
        let next = (i + 1) % segments + 1;
        indices.extend_from_slice(&[0, current, next]);
    }
    (vertices, indices)
}
