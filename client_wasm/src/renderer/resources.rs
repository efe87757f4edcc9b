use crate::camera::{Camera, CameraUniform};
use crate::instances::InstanceData;
use crate::mesh::Vertex;
use wgpu::util::DeviceExt;
use wgpu::*;

/// Mesh uploaded to the GPU
pub struct GpuMesh {
    pub vertex_buffer: Buffer,
    pub index_buffer: Buffer,
    pub index_count: u32,
}

impl GpuMesh {
    pub fn upload(device: &Device, label: &str, (vertices, indices): (Vec<Vertex>, Vec<u16>)) -> Self {
        let vertex_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
            label: Some(&format!("{label} Vertex Buffer")),
            contents: bytemuck::cast_slice(&vertices),
            usage: BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
            label: Some(&format!("{label} Index Buffer")),
            contents: bytemuck::cast_slice(&indices),
            usage: BufferUsages::INDEX,
        });
        Self {
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
        }
    }
}

/// Instance buffer that grows to fit; ball count changes during play
pub struct InstanceBuffer {
    label: &'static str,
    pub buffer: Buffer,
    capacity: usize,
    pub count: u32,
}

impl InstanceBuffer {
    pub fn new(device: &Device, label: &'static str, capacity: usize) -> Self {
        Self {
            label,
            buffer: Self::allocate(device, label, capacity),
            capacity,
            count: 0,
        }
    }

    fn allocate(device: &Device, label: &str, capacity: usize) -> Buffer {
        device.create_buffer(&BufferDescriptor {
            label: Some(label),
            size: (capacity * std::mem::size_of::<InstanceData>()) as u64,
            usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    pub fn write(&mut self, device: &Device, queue: &Queue, data: &[InstanceData]) {
        if data.len() > self.capacity {
            self.capacity = data.len().next_power_of_two();
            self.buffer = Self::allocate(device, self.label, self.capacity);
        }
        if !data.is_empty() {
            queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(data));
        }
        self.count = data.len() as u32;
    }
}

pub struct GameBuffers {
    pub camera: Buffer,
    pub rects: InstanceBuffer,
    pub discs: InstanceBuffer,
}

pub fn create_buffers(device: &Device, camera: &Camera) -> GameBuffers {
    let camera_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Camera Buffer"),
        contents: bytemuck::cast_slice(&[CameraUniform::from_camera(camera)]),
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
    });

    GameBuffers {
        camera: camera_buffer,
        rects: InstanceBuffer::new(device, "Paddle Instance Buffer", 2),
        discs: InstanceBuffer::new(device, "Ball Instance Buffer", 8),
    }
}
